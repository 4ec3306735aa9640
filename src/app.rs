//! Activating widgets against a host.

use alloc::rc::Rc;

use flick_core::{HostBridge, SnapshotObserver, Widget, WidgetInstance};

use crate::config::WidgetConfig;

/// Activates `widget` against `bridge`.
///
/// `bridge` is `None` when the host exposes no bridge at all; the widget then
/// stays in its loading state, which is not an error.
pub fn launch<W>(widget: W, bridge: Option<Rc<dyn HostBridge>>, config: &WidgetConfig) -> WidgetInstance<W>
where
    W: Widget + 'static,
{
    let observer = SnapshotObserver::activate(bridge, config.observe);
    WidgetInstance::new(widget, observer, config.render_options())
}
