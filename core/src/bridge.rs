//! The host capability that carries tool output into a widget.
//!
//! The host owns the payload and may populate it before or after a widget
//! starts. Widgets only ever read it, either by polling [`HostBridge::read`]
//! or by holding a [`Subscription`] that is released when dropped.

use alloc::{boxed::Box, rc::Rc};
use core::{cell::Cell, fmt};

use nami::{Binding, Signal, binding, watcher::WatcherGuard};

use crate::ToolOutput;

/// Listener invoked with the bridge payload after every host update.
pub type BridgeListener = Box<dyn Fn(Option<ToolOutput>)>;

/// Read surface exposing the current tool-output payload.
pub trait HostBridge {
    /// Returns the current payload, or `None` if the host has not populated it.
    fn read(&self) -> Option<ToolOutput>;

    /// Registers a listener for payload updates.
    ///
    /// The registration lasts as long as the returned [`Subscription`].
    fn subscribe(&self, listener: BridgeListener) -> Subscription;
}

impl<B: HostBridge + ?Sized> HostBridge for Rc<B> {
    fn read(&self) -> Option<ToolOutput> {
        (**self).read()
    }

    fn subscribe(&self, listener: BridgeListener) -> Subscription {
        (**self).subscribe(listener)
    }
}

/// What the bridge looked like at the last check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeStatus {
    /// No bridge is reachable at all.
    #[default]
    NoBridge,
    /// The bridge exists but its payload is unset.
    NotYetPopulated,
    /// The bridge carried a payload.
    Populated,
}

/// A scoped listener registration.
///
/// Dropping the subscription unregisters the listener immediately.
#[must_use = "dropping a subscription unregisters its listener"]
pub struct Subscription {
    guard: Option<Box<dyn WatcherGuard>>,
    on_release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps a reactive watcher guard.
    pub fn new(guard: impl WatcherGuard + 'static) -> Self {
        Self {
            guard: Some(Box::new(guard)),
            on_release: None,
        }
    }

    /// A subscription that holds nothing, for bridges that never push updates.
    pub const fn detached() -> Self {
        Self {
            guard: None,
            on_release: None,
        }
    }

    /// Runs `f` once the registration has been released.
    pub fn on_release(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_release = Some(Box::new(f));
        self
    }

    /// Returns `true` while a listener is registered through this subscription.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        drop(self.guard.take());
        if let Some(release) = self.on_release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

/// An in-process bridge backed by a reactive binding.
///
/// Hosts that embed widgets natively publish payloads through it; clones share
/// the same slot.
#[derive(Clone)]
pub struct BindingBridge {
    slot: Binding<Option<ToolOutput>>,
    listeners: Rc<Cell<usize>>,
}

impl BindingBridge {
    /// Creates a bridge whose payload is unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: binding(None::<ToolOutput>),
            listeners: Rc::new(Cell::new(0)),
        }
    }

    /// Creates a bridge already carrying `output`.
    #[must_use]
    pub fn populated(output: ToolOutput) -> Self {
        let bridge = Self::new();
        bridge.slot.set(Some(output));
        bridge
    }

    /// Sets the payload and notifies every subscriber.
    pub fn publish(&self, output: impl Into<ToolOutput>) {
        let output = output.into();
        tracing::debug!(target: "flick::bridge", listeners = self.listeners.get(), "payload published");
        self.slot.set(Some(output));
    }

    /// Resets the payload to unset.
    pub fn clear(&self) {
        self.slot.set(None::<ToolOutput>);
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.get()
    }
}

impl Default for BindingBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge for BindingBridge {
    fn read(&self) -> Option<ToolOutput> {
        self.slot.get()
    }

    fn subscribe(&self, listener: BridgeListener) -> Subscription {
        let guard = self.slot.watch(move |context| listener(context.into_value()));
        self.listeners.set(self.listeners.get() + 1);
        let listeners = Rc::clone(&self.listeners);
        Subscription::new(guard).on_release(move || listeners.set(listeners.get() - 1))
    }
}

impl fmt::Debug for BindingBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingBridge")
            .field("payload", &self.slot.get())
            .field("listeners", &self.listeners.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, rc::Rc, vec::Vec};
    use core::cell::RefCell;

    use serde_json::json;

    use super::{BindingBridge, HostBridge, Subscription};
    use crate::ToolOutput;

    #[test]
    fn unset_bridge_reads_none() {
        assert_eq!(BindingBridge::new().read(), None);
    }

    #[test]
    fn publish_reaches_subscribers_until_dropped() {
        let bridge = BindingBridge::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = bridge.subscribe(Box::new({
            let seen = Rc::clone(&seen);
            move |payload: Option<ToolOutput>| seen.borrow_mut().push(payload)
        }));
        assert_eq!(bridge.listener_count(), 1);

        bridge.publish(json!({"message": "Hi"}));
        assert_eq!(
            &*seen.borrow(),
            &[Some(ToolOutput::new(json!({"message": "Hi"})))]
        );

        drop(subscription);
        assert_eq!(bridge.listener_count(), 0);

        bridge.publish(json!({"message": "Bye"}));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(bridge.read(), Some(ToolOutput::new(json!({"message": "Bye"}))));
    }

    #[test]
    fn detached_subscription_is_inactive() {
        let released = Rc::new(RefCell::new(false));
        let subscription = Subscription::detached().on_release({
            let released = Rc::clone(&released);
            move || *released.borrow_mut() = true
        });
        assert!(!subscription.is_active());
        drop(subscription);
        assert!(*released.borrow());
    }
}
