//! Static identity of a widget: how hosts name it, find it and embed it.

use serde::Serialize;

/// MIME type of a packaged widget page.
pub const MIME_TYPE: &str = "text/html+skybridge";

/// Content security policy domains a widget page needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WidgetCsp {
    /// Origins the widget may connect to.
    pub connect_domains: &'static [&'static str],
    /// Origins the widget may load resources from.
    pub resource_domains: &'static [&'static str],
}

/// Identity and host-facing metadata of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetManifest {
    /// Tool identifier, e.g. `pizza-list`.
    pub identifier: &'static str,
    /// Bundle name the page container is derived from, e.g. `pizza_list`.
    pub bundle: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Status text while the host is invoking the tool.
    pub invoking: &'static str,
    /// Status text once the tool has produced output.
    pub invoked: &'static str,
    /// Whether the host should draw a border around the widget.
    pub prefers_border: bool,
    /// Content security policy.
    pub csp: WidgetCsp,
}

impl WidgetManifest {
    /// URI of the widget's page template, `ui://widget/{identifier}.html`.
    #[must_use]
    pub fn template_uri(&self) -> String {
        format!("ui://widget/{}.html", self.identifier)
    }

    /// Id of the page container the widget mounts into, `{bundle}-root`.
    #[must_use]
    pub fn root_id(&self) -> String {
        format!("{}-root", self.bundle)
    }
}
