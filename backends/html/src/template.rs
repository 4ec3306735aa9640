//! The page a packaged widget is loaded into.

use flick_core::WidgetManifest;

use crate::escape;

/// Markup of a widget page: a titled document with the widget's root container.
#[must_use]
pub fn page(manifest: &WidgetManifest) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head><meta charset=\"utf-8\"><title>{title}</title></head>\n",
            "<body>\n",
            "<div id=\"{root}\"></div>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = escape(manifest.title),
        root = escape(&manifest.root_id()),
    )
}
