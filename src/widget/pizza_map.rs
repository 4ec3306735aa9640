//! Venue cards for one topping, with positions when the host provides them.

use flick_core::{
    RenderState, Snapshot, Widget, WidgetCsp, WidgetManifest,
    shape::Place,
    view::{Element, Node},
};

use super::listing::{self, Listing};

const MANIFEST: WidgetManifest = WidgetManifest {
    identifier: "pizza-map",
    bundle: "pizza_map",
    title: "Show Pizza Map",
    invoking: "Hand-tossing a map...",
    invoked: "Served a fresh map!",
    prefers_border: true,
    csp: WidgetCsp {
        connect_domains: &["https://api.mapbox.com"],
        resource_domains: &["https://persistent.oaistatic.com"],
    },
};

/// Renders one card per venue: name, address, rating and coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PizzaMap;

impl PizzaMap {
    fn frame(topping: &str) -> Element {
        Element::new("div")
            .class("pizza-map")
            .child(Element::new("h2").child(format!("{topping} Pizza Locations")))
    }

    fn card(place: Place) -> Element {
        let rating = listing::rating(&place);
        let coordinates = place.coordinates.map(|c| {
            Element::new("p")
                .class("coordinates")
                .child(format!("{:.4}, {:.4}", c.lat, c.lng))
        });
        Element::new("div")
            .class("place-item")
            .child(Element::new("h3").child(place.name))
            .child(Element::new("p").class("place-address").child(place.address))
            .child_opt(rating)
            .child_opt(coordinates)
    }
}

impl Widget for PizzaMap {
    type Data = Listing;
    type Empty = String;

    fn manifest(&self) -> &WidgetManifest {
        &MANIFEST
    }

    fn select(&self, snapshot: &Snapshot) -> RenderState<Listing, String> {
        listing::select(snapshot)
    }

    fn empty_result(&self, topping: String) -> Node {
        Self::frame(&topping)
            .child(
                Element::new("p")
                    .class("empty")
                    .child(format!("No pizza locations found for {topping}.")),
            )
            .into()
    }

    fn populated(&self, data: Listing) -> Node {
        Self::frame(&data.topping)
            .child(
                Element::new("div")
                    .class("places-list")
                    .children(data.places.into_iter().map(Self::card)),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use flick_core::{RenderOptions, Snapshot, Widget};
    use serde_json::json;

    use super::PizzaMap;

    #[test]
    fn cards_show_coordinates_when_present() {
        let view = PizzaMap.render(
            &Snapshot::new(
                json!({
                    "pizzaTopping": "Pepperoni",
                    "places": [
                        {"name": "Pepperoni Paradise", "address": "321 Pine St",
                         "rating": 4.7, "lat": 40.7614, "lng": -73.9776},
                        {"name": "Classic Pizza Co", "address": "654 Maple Dr"},
                    ],
                })
                .into(),
            ),
            &RenderOptions::default(),
        );
        let cards = view.find_by_class("place-item");
        assert_eq!(cards.len(), 2);
        assert_eq!(
            cards[0].text_content(),
            "Pepperoni Paradise321 Pine St★ 4.740.7614, -73.9776"
        );
        assert_eq!(cards[1].text_content(), "Classic Pizza Co654 Maple Dr");
        assert_eq!(view.find_by_class("coordinates").len(), 1);
    }

    #[test]
    fn empty_result_message() {
        let view = PizzaMap.render(
            &Snapshot::new(json!({"pizzaTopping": "Pepperoni", "places": []}).into()),
            &RenderOptions::default(),
        );
        assert!(view.text_content().ends_with("No pizza locations found for Pepperoni."));
    }
}
