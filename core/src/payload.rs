//! Host payloads and the snapshots widgets render from.

use alloc::rc::Rc;
use core::fmt;

use serde_json::{Map, Value};

/// An opaque, host-supplied structured value.
///
/// The bridge never enforces a shape; each widget reads the fields it cares
/// about through [`crate::shape`] and ignores the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput(Value);

impl ToolOutput {
    /// Wraps a JSON value delivered by the host.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The empty structure, `{}`. Stands in for "nothing delivered yet".
    #[must_use]
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Returns `true` for `{}` and `null`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Borrows the underlying JSON.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwraps the underlying JSON.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for ToolOutput {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for ToolOutput {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Immutable holder of the last observed [`ToolOutput`].
///
/// A snapshot is never absent: before any delivery it holds the empty
/// structure, so every render is total. Cloning is cheap and shares the payload.
#[derive(Clone, PartialEq)]
pub struct Snapshot(Rc<ToolOutput>);

impl Snapshot {
    /// Creates a snapshot of a delivered payload.
    #[must_use]
    pub fn new(output: ToolOutput) -> Self {
        Self(Rc::new(output))
    }

    /// The snapshot every widget starts with.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ToolOutput::empty())
    }

    /// Returns `true` when no usable payload has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The payload this snapshot holds.
    #[must_use]
    pub fn output(&self) -> &ToolOutput {
        &self.0
    }

    /// The raw JSON of the payload.
    #[must_use]
    pub fn value(&self) -> &Value {
        self.0.as_value()
    }

    /// Looks up a top-level field. Non-object payloads have no fields.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value().as_object().and_then(|map| map.get(key))
    }

    /// Pretty-printed JSON, as shown by debug panels.
    #[must_use]
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self.value()).unwrap_or_else(|_| self.value().to_string())
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<ToolOutput> for Snapshot {
    fn from(output: ToolOutput) -> Self {
        Self::new(output)
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(self.value()).finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Snapshot, ToolOutput};

    #[test]
    fn default_snapshot_is_the_empty_structure() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.value(), &json!({}));
        assert_eq!(snapshot, Snapshot::new(ToolOutput::empty()));
    }

    #[test]
    fn null_payload_counts_as_empty() {
        assert!(Snapshot::new(ToolOutput::new(json!(null))).is_empty());
        assert!(!Snapshot::new(ToolOutput::new(json!([]))).is_empty());
    }

    #[test]
    fn field_lookup_only_applies_to_objects() {
        let snapshot = Snapshot::new(json!({"message": "Hi", "extra": 1}).into());
        assert_eq!(snapshot.get("message"), Some(&json!("Hi")));
        assert_eq!(snapshot.get("missing"), None);

        let list = Snapshot::new(json!(["message"]).into());
        assert_eq!(list.get("message"), None);
    }

    #[test]
    fn clones_share_the_payload() {
        let snapshot = Snapshot::new(json!({"message": "Hi"}).into());
        let clone = snapshot.clone();
        assert!(core::ptr::eq(snapshot.output(), clone.output()));
    }
}
