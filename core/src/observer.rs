//! Bridges a [`HostBridge`] into an always-defined [`Snapshot`].

use alloc::{boxed::Box, rc::Rc};
use core::{cell::Cell, fmt};

use nami::{Binding, Signal, binding};
use serde::{Deserialize, Serialize};

use crate::{BridgeStatus, HostBridge, Snapshot, Subscription, ToolOutput};

/// How an observer acquires payloads after activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObserveMode {
    /// A single check at activation. Payloads delivered later are never seen.
    Once,
    /// A check at activation plus a bridge subscription held until teardown.
    #[default]
    Subscribe,
}

/// Observes host payloads on behalf of one widget instance.
///
/// The observer is created with the empty snapshot and performs exactly one
/// bridge check when activated. In [`ObserveMode::Subscribe`] it also registers
/// for every later update; the registration is released when the observer is
/// dropped. A missing bridge is not an error: the snapshot simply stays empty.
pub struct SnapshotObserver {
    bridge: Option<Rc<dyn HostBridge>>,
    mode: ObserveMode,
    snapshot: Binding<Snapshot>,
    status: Rc<Cell<BridgeStatus>>,
    subscription: Option<Subscription>,
}

impl SnapshotObserver {
    /// Activates an observer against `bridge`.
    #[must_use]
    pub fn activate(bridge: Option<Rc<dyn HostBridge>>, mode: ObserveMode) -> Self {
        let snapshot = binding(Snapshot::empty());
        let status = Rc::new(Cell::new(BridgeStatus::NoBridge));

        let initial = bridge.as_ref().map(|bridge| bridge.read());
        match initial {
            None => {
                tracing::debug!(target: "flick::observer", "no host bridge; rendering without data");
            }
            Some(payload) => apply(&snapshot, &status, payload),
        }

        let subscription = match (&bridge, mode) {
            (Some(bridge), ObserveMode::Subscribe) => {
                let snapshot = snapshot.clone();
                let status = Rc::clone(&status);
                Some(bridge.subscribe(Box::new(move |payload: Option<ToolOutput>| {
                    apply(&snapshot, &status, payload);
                })))
            }
            _ => None,
        };

        tracing::trace!(target: "flick::observer", ?mode, status = ?status.get(), "observer activated");

        Self {
            bridge,
            mode,
            snapshot,
            status,
            subscription,
        }
    }

    /// Queries the bridge directly, yielding the empty value when the bridge
    /// is absent or unset. The current snapshot is not touched.
    #[must_use]
    pub fn read(&self) -> ToolOutput {
        self.bridge
            .as_ref()
            .and_then(|bridge| bridge.read())
            .unwrap_or_else(ToolOutput::empty)
    }

    /// The most recently observed snapshot.
    #[must_use]
    pub fn current_snapshot(&self) -> Snapshot {
        self.snapshot.get()
    }

    /// Calls `f` with each new snapshot, in delivery order, until the returned
    /// subscription is dropped.
    pub fn watch(&self, f: impl Fn(Snapshot) + 'static) -> Subscription {
        Subscription::new(self.snapshot.watch(move |context| f(context.into_value())))
    }

    /// The bridge state seen at the last check or update.
    #[must_use]
    pub fn status(&self) -> BridgeStatus {
        self.status.get()
    }

    /// The acquisition mode this observer was activated with.
    #[must_use]
    pub const fn mode(&self) -> ObserveMode {
        self.mode
    }

    /// Returns `true` while a bridge registration is held.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Releases the bridge registration. Equivalent to dropping the observer.
    pub fn teardown(self) {
        drop(self);
    }
}

fn apply(snapshot: &Binding<Snapshot>, status: &Cell<BridgeStatus>, payload: Option<ToolOutput>) {
    match payload {
        Some(output) => {
            status.set(BridgeStatus::Populated);
            snapshot.set(Snapshot::new(output));
        }
        None => {
            status.set(BridgeStatus::NotYetPopulated);
            snapshot.set(Snapshot::empty());
        }
    }
}

impl Drop for SnapshotObserver {
    fn drop(&mut self) {
        if self.subscription.take().is_some() {
            tracing::trace!(target: "flick::observer", "bridge registration released");
        }
    }
}

impl fmt::Debug for SnapshotObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotObserver")
            .field("mode", &self.mode)
            .field("status", &self.status.get())
            .field("snapshot", &self.snapshot.get())
            .field("subscribed", &self.is_subscribed())
            .finish_non_exhaustive()
    }
}
