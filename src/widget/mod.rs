//! The widgets shipped with Flick.

pub mod greeting;
pub mod listing;
pub mod pizza_list;
pub mod pizza_map;

pub use greeting::{Greeting, GreetingData};
pub use listing::Listing;
pub use pizza_list::PizzaList;
pub use pizza_map::PizzaMap;

use flick_core::{Widget, WidgetManifest};

/// Manifests of every bundled widget.
#[must_use]
pub fn manifests() -> [&'static WidgetManifest; 3] {
    [
        static_manifest(&Greeting),
        static_manifest(&PizzaList),
        static_manifest(&PizzaMap),
    ]
}

/// Finds a bundled widget's manifest by tool identifier.
#[must_use]
pub fn find(identifier: &str) -> Option<&'static WidgetManifest> {
    manifests()
        .into_iter()
        .find(|manifest| manifest.identifier == identifier)
}

fn static_manifest<W: Widget>(widget: &'static W) -> &'static WidgetManifest {
    widget.manifest()
}

#[cfg(test)]
mod tests {
    use super::{find, manifests};

    #[test]
    fn identifiers_and_roots_are_unique() {
        let all = manifests();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.identifier, b.identifier);
                assert_ne!(a.root_id(), b.root_id());
            }
        }
    }

    #[test]
    fn lookup_by_identifier() {
        assert_eq!(find("pizza-map").map(|m| m.root_id()).as_deref(), Some("pizza_map-root"));
        assert!(find("pizza_map").is_none());
    }
}
