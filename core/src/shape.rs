//! Lenient accessors for widget payload fields.
//!
//! Widgets never fail on a malformed payload. Each accessor reports how a
//! field looked through [`Field`], and the state selection in
//! [`crate::widget`] falls back to the nearest lower state. Mismatches are
//! logged on the `flick::shape` target and never reach the rendered view.

use serde_json::{Map, Value};

use crate::Snapshot;

/// How a payload field looked when it was read.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// The field holds a usable value.
    Present(T),
    /// The field is absent.
    Missing,
    /// The field is present but falsy, such as an empty string.
    Falsy,
    /// The field is present with an unexpected type.
    Mismatch,
}

impl<T> Field<T> {
    /// Returns the value when present.
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` when the field holds a usable value.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Maps the present value, keeping the other variants.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Present(value) => Field::Present(f(value)),
            Self::Missing => Field::Missing,
            Self::Falsy => Field::Falsy,
            Self::Mismatch => Field::Mismatch,
        }
    }
}

/// Reads a non-empty string field.
pub fn text<'a>(snapshot: &'a Snapshot, key: &str) -> Field<&'a str> {
    text_in(snapshot.get(key), key)
}

/// Reads a numeric field.
pub fn number(snapshot: &Snapshot, key: &str) -> Field<f64> {
    number_in(snapshot.get(key), key)
}

/// Reads an array field. An empty array is still present.
pub fn collection<'a>(snapshot: &'a Snapshot, key: &str) -> Field<&'a [Value]> {
    match snapshot.get(key) {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::Array(items)) => Field::Present(items.as_slice()),
        Some(other) => {
            mismatch(key, "array", other);
            Field::Mismatch
        }
    }
}

fn text_in<'a>(value: Option<&'a Value>, key: &str) -> Field<&'a str> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::String(s)) if s.is_empty() => Field::Falsy,
        Some(Value::String(s)) => Field::Present(s.as_str()),
        Some(other) => {
            mismatch(key, "string", other);
            Field::Mismatch
        }
    }
}

fn number_in(value: Option<&Value>, key: &str) -> Field<f64> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::Number(n)) => n.as_f64().map_or(Field::Mismatch, Field::Present),
        Some(other) => {
            mismatch(key, "number", other);
            Field::Mismatch
        }
    }
}

fn mismatch(key: &str, expected: &'static str, found: &Value) {
    tracing::debug!(
        target: "flick::shape",
        field = key,
        expected,
        found = kind(found),
        "payload field has an unexpected shape"
    );
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A geographic position attached to a place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// One venue in a widget listing. Its identity is its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Optional rating; absent ratings render no indicator.
    pub rating: Option<f64>,
    /// Optional position, present only when both `lat` and `lng` are numbers.
    pub coordinates: Option<Coordinates>,
}

impl Place {
    /// Parses one collection element.
    ///
    /// Returns `None` for non-objects and for elements whose `name` or
    /// `address` is missing or not a string. Empty strings are kept.
    /// Optional fields of the wrong type are dropped.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::parse(value, "element")
    }

    fn parse(value: &Value, field: &str) -> Option<Self> {
        let Some(map) = value.as_object() else {
            mismatch(field, "object", value);
            return None;
        };
        let number = |key: &str| number_in(map.get(key), &format!("{field}.{key}")).present();
        let name = required_text(map, field, "name")?;
        let address = required_text(map, field, "address")?;
        let rating = number("rating");
        let coordinates = match (number("lat"), number("lng")) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };
        Some(Self {
            name: name.to_owned(),
            address: address.to_owned(),
            rating,
            coordinates,
        })
    }
}

fn required_text<'a>(map: &'a Map<String, Value>, field: &str, key: &str) -> Option<&'a str> {
    let path = format!("{field}.{key}");
    match map.get(key) {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            mismatch(&path, "string", other);
            None
        }
        None => {
            tracing::debug!(
                target: "flick::shape",
                field = path.as_str(),
                "required element field is missing"
            );
            None
        }
    }
}

/// Reads an ordered list of places, dropping malformed elements.
pub fn places(snapshot: &Snapshot, key: &str) -> Field<Vec<Place>> {
    collection(snapshot, key).map(|items| {
        let places: Vec<Place> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| Place::parse(item, &format!("{key}[{index}]")))
            .collect();
        if places.len() != items.len() {
            tracing::debug!(
                target: "flick::shape",
                field = key,
                dropped = items.len() - places.len(),
                "skipped malformed collection elements"
            );
        }
        places
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use tracing::{Event, Level, Subscriber, field::Visit};
    use tracing_subscriber::{
        Layer,
        layer::{Context, SubscriberExt},
    };

    use super::{Coordinates, Field, Place, collection, number, places, text};
    use crate::Snapshot;

    fn snapshot(value: serde_json::Value) -> Snapshot {
        Snapshot::new(value.into())
    }

    #[test]
    fn text_distinguishes_missing_falsy_and_mismatched() {
        let s = snapshot(json!({"a": "x", "b": "", "c": 3, "d": null}));
        assert_eq!(text(&s, "a"), Field::Present("x"));
        assert_eq!(text(&s, "b"), Field::Falsy);
        assert_eq!(text(&s, "c"), Field::Mismatch);
        assert_eq!(text(&s, "d"), Field::Missing);
        assert_eq!(text(&s, "e"), Field::Missing);
    }

    #[test]
    fn empty_collection_is_present() {
        let s = snapshot(json!({"places": [], "other": {}}));
        assert_eq!(collection(&s, "places"), Field::Present(&[][..]));
        assert_eq!(collection(&s, "other"), Field::Mismatch);
        assert_eq!(number(&s, "places"), Field::Mismatch);
    }

    #[test]
    fn place_without_rating_parses() {
        let place = Place::from_value(&json!({"name": "A", "address": "1 Main St"}));
        assert_eq!(
            place,
            Some(Place {
                name: "A".into(),
                address: "1 Main St".into(),
                rating: None,
                coordinates: None,
            })
        );
    }

    #[test]
    fn mistyped_optional_fields_are_dropped() {
        let place = Place::from_value(&json!({
            "name": "A",
            "address": "1 Main St",
            "rating": "five",
            "lat": 40.7,
        }))
        .expect("required fields are valid");
        assert_eq!(place.rating, None);
        assert_eq!(place.coordinates, None);
    }

    #[test]
    fn coordinates_need_both_axes() {
        let place = Place::from_value(&json!({
            "name": "A", "address": "1 Main St", "lat": 40.5, "lng": -74.0,
        }))
        .expect("valid place");
        assert_eq!(place.coordinates, Some(Coordinates { lat: 40.5, lng: -74.0 }));
    }

    #[test]
    fn empty_strings_are_valid_element_fields() {
        let place = Place::from_value(&json!({"name": "", "address": "1 Main St"}))
            .expect("empty name is still a string");
        assert_eq!(place.name, "");
        assert_eq!(place.address, "1 Main St");
        assert!(Place::from_value(&json!({"name": "A"})).is_none());
        assert!(Place::from_value(&json!({"name": "A", "address": null})).is_none());
    }

    #[test]
    fn malformed_elements_are_skipped_in_order() {
        let s = snapshot(json!({"places": [
            {"name": "A", "address": "1 Main St"},
            "not a place",
            {"name": 7, "address": "nowhere"},
            {"name": "B", "address": "2 Oak Ave", "rating": 4.0},
        ]}));
        let names: Vec<String> = places(&s, "places")
            .present()
            .expect("array is present")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<(String, Level, String)>>>);

    impl Recorder {
        fn events(&self, target: &str) -> Vec<(Level, String)> {
            self.0
                .lock()
                .expect("recorder lock")
                .iter()
                .filter(|(t, _, _)| t == target)
                .map(|(_, level, field)| (*level, field.clone()))
                .collect()
        }
    }

    struct FieldVisitor<'a>(&'a mut String);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "field" {
                value.clone_into(self.0);
            }
        }

        fn record_debug(&mut self, _field: &tracing::field::Field, _value: &dyn core::fmt::Debug) {}
    }

    impl<S: Subscriber> Layer<S> for Recorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut field = String::new();
            event.record(&mut FieldVisitor(&mut field));
            let meta = event.metadata();
            self.0
                .lock()
                .expect("recorder lock")
                .push((meta.target().to_owned(), *meta.level(), field));
        }
    }

    fn recording<R>(f: impl FnOnce() -> R) -> (R, Recorder) {
        let recorder = Recorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, recorder)
    }

    #[test]
    fn mistyped_discriminant_logs_one_event() {
        let s = snapshot(json!({"pizzaTopping": 3}));
        let (field, recorder) = recording(|| text(&s, "pizzaTopping"));
        assert_eq!(field, Field::Mismatch);
        assert_eq!(
            recorder.events("flick::shape"),
            [(Level::DEBUG, "pizzaTopping".to_owned())]
        );
    }

    #[test]
    fn mistyped_collection_logs_one_event() {
        let s = snapshot(json!({"places": {"name": "A"}}));
        let (field, recorder) = recording(|| places(&s, "places"));
        assert_eq!(field, Field::Mismatch);
        assert_eq!(recorder.events("flick::shape").len(), 1);
    }

    #[test]
    fn element_mismatch_names_the_collection_and_index() {
        let s = snapshot(json!({"venues": [
            {"name": "A", "address": "B"},
            7,
            {"name": "C", "address": 9},
        ]}));
        let (field, recorder) = recording(|| places(&s, "venues"));
        assert_eq!(field.present().map(|p| p.len()), Some(1));
        let fields: Vec<String> = recorder
            .events("flick::shape")
            .into_iter()
            .map(|(_, field)| field)
            .collect();
        assert_eq!(fields, ["venues[1]", "venues[2].address", "venues"]);
    }
}
