//! The rendering contract every widget implements.
//!
//! A widget selects one of three states from the current [`Snapshot`]:
//!
//! | state                          | when                                                  |
//! |--------------------------------|-------------------------------------------------------|
//! | [`RenderState::NoData`]        | empty snapshot, or the discriminant is absent/falsy   |
//! | [`RenderState::EmptyResult`]   | discriminant present, collection absent or empty      |
//! | [`RenderState::Populated`]     | discriminant present and the collection has elements  |
//!
//! Malformed fields degrade along the same order (populated, then empty
//! result, then no data). Nothing in this layer returns an error.

use alloc::rc::Rc;
use core::fmt;

use crate::{
    Snapshot, SnapshotObserver, Subscription, WidgetManifest,
    view::{Element, Node, text},
};

/// The state a widget renders for a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<T, E = ()> {
    /// Not enough data to leave the loading view.
    NoData,
    /// The discriminant is known but there is nothing to list.
    EmptyResult(E),
    /// Data to render.
    Populated(T),
}

impl<T, E> RenderState<T, E> {
    /// The state without its payload.
    pub const fn kind(&self) -> StateKind {
        match self {
            Self::NoData => StateKind::NoData,
            Self::EmptyResult(_) => StateKind::EmptyResult,
            Self::Populated(_) => StateKind::Populated,
        }
    }
}

/// Tag of a [`RenderState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// See [`RenderState::NoData`].
    NoData,
    /// See [`RenderState::EmptyResult`].
    EmptyResult,
    /// See [`RenderState::Populated`].
    Populated,
}

/// Options applied on top of a widget's own rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Append a panel echoing the raw snapshot.
    pub debug: bool,
}

impl RenderOptions {
    /// Options with the debug panel enabled.
    #[must_use]
    pub const fn debug() -> Self {
        Self { debug: true }
    }
}

/// A self-contained display unit rendering a [`Snapshot`].
///
/// Implementors provide the state selection and one view per state;
/// [`Widget::render`] ties them together and must stay a pure function of
/// its inputs.
pub trait Widget {
    /// Data extracted for the populated state.
    type Data;
    /// Context carried into the empty-result state.
    type Empty;

    /// Static identity of the widget.
    fn manifest(&self) -> &WidgetManifest;

    /// Picks the state to render.
    fn select(&self, snapshot: &Snapshot) -> RenderState<Self::Data, Self::Empty>;

    /// The loading view.
    fn no_data(&self) -> Node {
        loading(self.manifest())
    }

    /// The explicit "no results" view.
    fn empty_result(&self, context: Self::Empty) -> Node;

    /// The populated view.
    fn populated(&self, data: Self::Data) -> Node;

    /// Renders `snapshot` according to the selected state.
    fn render(&self, snapshot: &Snapshot, options: &RenderOptions) -> Node {
        let view = match self.select(snapshot) {
            RenderState::NoData => self.no_data(),
            RenderState::EmptyResult(context) => self.empty_result(context),
            RenderState::Populated(data) => self.populated(data),
        };
        if options.debug {
            with_debug_panel(view, snapshot)
        } else {
            view
        }
    }
}

/// Default loading placeholder, classed after the widget bundle.
#[must_use]
pub fn loading(manifest: &WidgetManifest) -> Node {
    Element::new("div")
        .class(format!("{} flick-loading", manifest.bundle))
        .child(Element::new("p").child("Loading..."))
        .into()
}

/// Appends a panel with the pretty-printed snapshot to `view`.
#[must_use]
pub fn with_debug_panel(view: Node, snapshot: &Snapshot) -> Node {
    let panel = Element::new("div")
        .class("flick-debug")
        .child(Element::new("strong").child("Debug Info:"))
        .child(Element::new("pre").child(text(snapshot.pretty())));
    match view {
        Node::Element(element) => element.child(panel).into(),
        text_node @ Node::Text(_) => Element::new("div").child(text_node).child(panel).into(),
    }
}

/// A widget bound to its own snapshot observer.
///
/// The instance owns its observer exclusively; dropping the instance tears
/// the observer down and releases any bridge registration.
pub struct WidgetInstance<W> {
    widget: Rc<W>,
    observer: SnapshotObserver,
    options: RenderOptions,
}

impl<W: Widget + 'static> WidgetInstance<W> {
    /// Binds `widget` to an activated observer.
    #[must_use]
    pub fn new(widget: W, observer: SnapshotObserver, options: RenderOptions) -> Self {
        tracing::debug!(
            target: "flick::widget",
            widget = widget.manifest().identifier,
            status = ?observer.status(),
            "widget activated"
        );
        Self {
            widget: Rc::new(widget),
            observer,
            options,
        }
    }

    /// Renders the current snapshot.
    #[must_use]
    pub fn render(&self) -> Node {
        self.widget
            .render(&self.observer.current_snapshot(), &self.options)
    }

    /// The state the current snapshot selects.
    #[must_use]
    pub fn state(&self) -> StateKind {
        self.widget.select(&self.observer.current_snapshot()).kind()
    }

    /// Calls `f` with a fresh render after every snapshot update.
    pub fn on_render(&self, f: impl Fn(Node) + 'static) -> Subscription {
        let widget = Rc::clone(&self.widget);
        let options = self.options;
        self.observer
            .watch(move |snapshot| f(widget.render(&snapshot, &options)))
    }

    /// The widget.
    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// The observer feeding this instance.
    #[must_use]
    pub const fn observer(&self) -> &SnapshotObserver {
        &self.observer
    }

    /// Render options in effect.
    #[must_use]
    pub const fn options(&self) -> RenderOptions {
        self.options
    }
}

impl<W: Widget> fmt::Debug for WidgetInstance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetInstance")
            .field("widget", &self.widget.manifest().identifier)
            .field("observer", &self.observer)
            .field("options", &self.options)
            .finish()
    }
}
