//! Flick: small stateless widgets rendering host-injected tool output.
//!
//! Each widget receives one opaque payload through a [`HostBridge`] and renders
//! a deterministic [`Node`] tree of it. See [`flick_core`] for the shared
//! bridge, observer and state-selection contract; this crate ships the
//! concrete widgets along with configuration and logging setup.
//!
//! ```
//! use std::rc::Rc;
//!
//! use flick::{BindingBridge, WidgetConfig, launch, widget::PizzaList};
//! use serde_json::json;
//!
//! let bridge = BindingBridge::new();
//! let instance = launch(PizzaList, Some(Rc::new(bridge.clone())), &WidgetConfig::default());
//! assert_eq!(instance.render().text_content(), "Loading...");
//!
//! bridge.publish(json!({"pizzaTopping": "Pepperoni", "places": []}));
//! assert!(instance.render().text_content().contains("No pizza places found"));
//! ```

extern crate alloc;

mod app;
pub mod config;
pub mod logging;
pub mod widget;

pub use app::launch;
pub use config::{ConfigError, WidgetConfig};

#[doc(inline)]
pub use flick_core::{
    BindingBridge, BridgeStatus, Element, HostBridge, Node, ObserveMode, RenderOptions,
    RenderState, Snapshot, SnapshotObserver, StateKind, Subscription, ToolOutput, Widget,
    WidgetInstance, WidgetManifest, shape, view,
};
