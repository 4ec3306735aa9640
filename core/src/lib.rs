//! Core contract shared by every Flick widget.
//!
//! A widget receives a single opaque payload from its host and renders a
//! deterministic view of it. This crate holds the pieces all widgets share:
//!
//! - [`HostBridge`]: the host-owned capability exposing the current payload.
//! - [`SnapshotObserver`]: turns bridge reads into an always-defined [`Snapshot`].
//! - [`Widget`]: the no-data / empty-result / populated state-selection contract.
//! - [`view`]: the small element tree widgets render into.
//! - [`shape`]: lenient field accessors used when selecting a state.

extern crate alloc;

pub mod bridge;
pub mod manifest;
pub mod observer;
pub mod payload;
pub mod shape;
pub mod view;
pub mod widget;

#[doc(inline)]
pub use bridge::{BindingBridge, BridgeStatus, HostBridge, Subscription};
#[doc(inline)]
pub use manifest::{WidgetCsp, WidgetManifest};
#[doc(inline)]
pub use observer::{ObserveMode, SnapshotObserver};
#[doc(inline)]
pub use payload::{Snapshot, ToolOutput};
#[doc(inline)]
pub use view::{Element, Node};
#[doc(inline)]
pub use widget::{RenderOptions, RenderState, StateKind, Widget, WidgetInstance};

pub use nami as reactive;
