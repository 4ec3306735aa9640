use core::fmt;

use flick_core::{Subscription, Widget, WidgetInstance};

use crate::{MountError, Page, to_html};

/// A widget instance attached to a page container.
///
/// The container is re-rendered after every snapshot update. Dropping the
/// value (or calling [`Mounted::unmount`]) tears the instance down; the
/// container keeps its last render.
pub struct Mounted<W> {
    root_id: String,
    render: Subscription,
    instance: WidgetInstance<W>,
}

/// Mounts `instance` into the container named by its manifest root id.
///
/// # Errors
///
/// Returns [`MountError::TargetMissing`] if the page has no such container.
/// Mounting is not retried; the instance is dropped.
pub fn mount<W>(page: &Page, instance: WidgetInstance<W>) -> Result<Mounted<W>, MountError>
where
    W: Widget + 'static,
{
    let root_id = instance.widget().manifest().root_id();
    if !page.contains(&root_id) {
        tracing::error!(target: "flick::mount", root = %root_id, "mount target missing; widget not mounted");
        return Err(MountError::TargetMissing(root_id));
    }

    page.set_inner_html(&root_id, to_html(&instance.render()));

    let render = instance.on_render({
        let page = page.clone();
        let root_id = root_id.clone();
        move |view| {
            if !page.set_inner_html(&root_id, to_html(&view)) {
                tracing::warn!(target: "flick::mount", root = %root_id, "container removed; render dropped");
            }
        }
    });

    tracing::debug!(target: "flick::mount", root = %root_id, state = ?instance.state(), "widget mounted");
    Ok(Mounted {
        root_id,
        render,
        instance,
    })
}

impl<W: Widget + 'static> Mounted<W> {
    /// Id of the container this widget renders into.
    #[must_use]
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// The mounted instance.
    #[must_use]
    pub const fn instance(&self) -> &WidgetInstance<W> {
        &self.instance
    }

    /// Stops rendering into the page and tears the instance down.
    pub fn unmount(self) {
        let Self {
            root_id,
            render,
            instance,
        } = self;
        drop(render);
        drop(instance);
        tracing::debug!(target: "flick::mount", root = %root_id, "widget unmounted");
    }
}

impl<W: Widget> fmt::Debug for Mounted<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mounted")
            .field("root_id", &self.root_id)
            .field("render", &self.render)
            .field("instance", &self.instance)
            .finish()
    }
}
