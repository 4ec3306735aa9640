//! The hello-world greeting panel.

use core::convert::Infallible;

use flick_core::{
    RenderState, Snapshot, Widget, WidgetCsp, WidgetManifest,
    shape,
    view::{Element, Node},
};

/// Shown when the payload carries no usable `message`.
pub const DEFAULT_MESSAGE: &str = "Hello World!";

const MANIFEST: WidgetManifest = WidgetManifest {
    identifier: "helloworld",
    bundle: "helloworld",
    title: "Hello World",
    invoking: "Preparing hello world...",
    invoked: "Hello world ready!",
    prefers_border: false,
    csp: WidgetCsp {
        connect_domains: &[],
        resource_domains: &[],
    },
};

/// Greets with the payload's `message`, falling back to [`DEFAULT_MESSAGE`].
///
/// The greeting has no collection, so any non-empty payload is populated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeting;

/// What the greeting renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingData {
    /// Headline text.
    pub message: String,
    /// When the payload was generated, if the host said.
    pub timestamp: Option<String>,
}

impl Widget for Greeting {
    type Data = GreetingData;
    type Empty = Infallible;

    fn manifest(&self) -> &WidgetManifest {
        &MANIFEST
    }

    fn select(&self, snapshot: &Snapshot) -> RenderState<GreetingData, Infallible> {
        if snapshot.is_empty() {
            return RenderState::NoData;
        }
        RenderState::Populated(GreetingData {
            message: shape::text(snapshot, "message")
                .present()
                .unwrap_or(DEFAULT_MESSAGE)
                .to_owned(),
            timestamp: shape::text(snapshot, "timestamp").present().map(str::to_owned),
        })
    }

    fn empty_result(&self, never: Infallible) -> Node {
        match never {}
    }

    fn populated(&self, data: GreetingData) -> Node {
        Element::new("div")
            .class("helloworld")
            .child(Element::new("h1").child(data.message))
            .child(Element::new("p").child("Welcome to your first Flick widget!"))
            .child_opt(data.timestamp.map(|timestamp| {
                Element::new("p")
                    .class("timestamp")
                    .child(format!("Generated at: {timestamp}"))
            }))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use flick_core::{RenderOptions, Snapshot, StateKind, Widget};
    use serde_json::json;

    use super::{DEFAULT_MESSAGE, Greeting};

    fn headline(value: serde_json::Value) -> String {
        let view = Greeting.render(&Snapshot::new(value.into()), &RenderOptions::default());
        view.as_element()
            .and_then(|root| root.child_nodes().first())
            .map(flick_core::Node::text_content)
            .unwrap_or_default()
    }

    #[test]
    fn shows_the_message() {
        assert_eq!(headline(json!({"message": "Hi"})), "Hi");
    }

    #[test]
    fn falls_back_when_message_is_unusable() {
        assert_eq!(headline(json!({"timestamp": "2025-10-15"})), DEFAULT_MESSAGE);
        assert_eq!(headline(json!({"message": ""})), DEFAULT_MESSAGE);
        assert_eq!(headline(json!({"message": 42})), DEFAULT_MESSAGE);
    }

    #[test]
    fn empty_payload_is_loading() {
        let snapshot = Snapshot::empty();
        assert_eq!(Greeting.select(&snapshot).kind(), StateKind::NoData);
        let view = Greeting.render(&snapshot, &RenderOptions::default());
        assert_eq!(view.text_content(), "Loading...");
    }

    #[test]
    fn timestamp_line_is_optional() {
        let with = Greeting.render(
            &Snapshot::new(json!({"message": "Hi", "timestamp": "2025-10-15"}).into()),
            &RenderOptions::default(),
        );
        let stamps = with.find_by_class("timestamp");
        assert_eq!(stamps.len(), 1);
        assert_eq!(stamps[0].text_content(), "Generated at: 2025-10-15");

        let without = Greeting.render(
            &Snapshot::new(json!({"message": "Hi"}).into()),
            &RenderOptions::default(),
        );
        assert!(without.find_by_class("timestamp").is_empty());
    }
}
