//! Selection shared by the venue-listing widgets.

use flick_core::{
    RenderState, Snapshot,
    shape::{self, Field, Place},
    view::{Element, Node},
};

/// Discriminant field naming the topping being listed.
pub const TOPPING: &str = "pizzaTopping";
/// Collection field holding the venues.
pub const PLACES: &str = "places";

/// A non-empty venue listing for one topping.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// The topping the listing is for.
    pub topping: String,
    /// Venues in display order.
    pub places: Vec<Place>,
}

/// Selects the state of a listing widget.
///
/// The empty-result state carries the topping so the message can name it.
#[must_use]
pub fn select(snapshot: &Snapshot) -> RenderState<Listing, String> {
    let Some(topping) = shape::text(snapshot, TOPPING).present() else {
        return RenderState::NoData;
    };
    match shape::places(snapshot, PLACES) {
        Field::Present(places) if !places.is_empty() => RenderState::Populated(Listing {
            topping: topping.to_owned(),
            places,
        }),
        _ => RenderState::EmptyResult(topping.to_owned()),
    }
}

/// The rating indicator, only for rated places.
pub(crate) fn rating(place: &Place) -> Option<Node> {
    place.rating.map(|rating| {
        Element::new("span")
            .class("rating")
            .child(format!("★ {rating}"))
            .into()
    })
}
