//! A plain list of pizza places for one topping.

use flick_core::{
    RenderState, Snapshot, Widget, WidgetCsp, WidgetManifest,
    shape::Place,
    view::{Element, Node},
};

use super::listing::{self, Listing};

const MANIFEST: WidgetManifest = WidgetManifest {
    identifier: "pizza-list",
    bundle: "pizza_list",
    title: "Show Pizza List",
    invoking: "Preparing pizza list...",
    invoked: "Pizza list ready!",
    prefers_border: false,
    csp: WidgetCsp {
        connect_domains: &[],
        resource_domains: &["https://persistent.oaistatic.com"],
    },
};

/// Lists venues as `name - address` lines, each with an optional rating.
#[derive(Debug, Clone, Copy, Default)]
pub struct PizzaList;

impl PizzaList {
    fn frame(topping: &str) -> Element {
        Element::new("div")
            .class("pizza-list")
            .child(Element::new("h2").child(format!("{topping} Pizza Places")))
    }

    fn entry(place: Place) -> Element {
        let rating = listing::rating(&place);
        Element::new("li")
            .class("place-item")
            .child(Element::new("span").class("place-name").child(place.name))
            .child(" - ")
            .child(
                Element::new("span")
                    .class("place-address")
                    .child(place.address),
            )
            .child_opt(rating)
    }
}

impl Widget for PizzaList {
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
                    .child(format!("No pizza places found for {topping}.")),
            )
            .into()
    }

    fn populated(&self, data: Listing) -> Node {
        Self::frame(&data.topping)
            .child(Element::new("ul").children(data.places.into_iter().map(Self::entry)))
            .into()
    }
}
