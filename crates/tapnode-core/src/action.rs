//! Target-action callbacks with non-owning targets.
//!
//! A button reports touch-lifecycle events by invoking an *action* on a
//! *target*. The button only ever holds a [`Weak`] reference to the target, so
//! registering a callback never extends the target's lifetime. When the target
//! has been dropped by the time the event fires, the invocation is skipped.
//!
//! # Key Types
//!
//! - [`ActionTarget`] - Receiver of actions, implemented by the owner
//! - [`ActionName`] - Identifies which action the target should perform
//! - [`TargetAction`] - A registered (weak target, action) pair
//! - [`CallbackTable`] - One optional registration per [`CallbackKind`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tapnode_core::action::{CallbackKind, CallbackTable, FnTarget, TargetAction};
//! use tapnode_core::ButtonState;
//!
//! let target = Arc::new(FnTarget::new(|action, state| {
//!     println!("{action} fired, selected = {}", state.selected);
//! }));
//!
//! let mut table = CallbackTable::new();
//! table.set(CallbackKind::TouchUpInside, Some(TargetAction::new(&target, "play")));
//! assert!(table.dispatch(CallbackKind::TouchUpInside, &ButtonState::default()));
//!
//! drop(target);
//! assert!(!table.dispatch(CallbackKind::TouchUpInside, &ButtonState::default()));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::logging::targets;
use crate::state::ButtonState;

/// The touch-lifecycle events a button can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// A touch went down inside the button.
    TouchDown,
    /// A tracked touch was lifted inside the button.
    TouchUpInside,
    /// A tracked touch was lifted, inside or outside the button.
    TouchUp,
}

impl CallbackKind {
    /// All callback kinds, in table order.
    pub const ALL: [CallbackKind; 3] = [Self::TouchDown, Self::TouchUpInside, Self::TouchUp];

    fn index(self) -> usize {
        match self {
            Self::TouchDown => 0,
            Self::TouchUpInside => 1,
            Self::TouchUp => 2,
        }
    }

    /// A stable name for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TouchDown => "touch_down",
            Self::TouchUpInside => "touch_up_inside",
            Self::TouchUp => "touch_up",
        }
    }
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the action a target should perform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionName(Cow<'static, str>);

impl ActionName {
    /// Create an action name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The action name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ActionName {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for ActionName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receiver of button actions.
///
/// Implementations typically dispatch on [`ActionName::as_str`]. Actions are
/// invoked synchronously from the thread driving the button.
pub trait ActionTarget: Send + Sync {
    /// Perform `action`. `sender` is the button's state after the event.
    fn perform(&self, action: &ActionName, sender: &ButtonState);
}

/// Adapts a closure into an [`ActionTarget`].
///
/// The owner keeps the `Arc<FnTarget<_>>` alive; the button only holds a weak
/// reference to it.
pub struct FnTarget<F> {
    f: F,
}

impl<F> FnTarget<F>
where
    F: Fn(&ActionName, &ButtonState) + Send + Sync,
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ActionTarget for FnTarget<F>
where
    F: Fn(&ActionName, &ButtonState) + Send + Sync,
{
    fn perform(&self, action: &ActionName, sender: &ButtonState) {
        (self.f)(action, sender)
    }
}

impl<F> fmt::Debug for FnTarget<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTarget").finish_non_exhaustive()
    }
}

/// A registered (weak target, action) pair.
#[derive(Clone)]
pub struct TargetAction {
    target: Weak<dyn ActionTarget>,
    action: ActionName,
}

impl TargetAction {
    /// Register `action` on `target` without taking ownership of it.
    pub fn new<T>(target: &Arc<T>, action: impl Into<ActionName>) -> Self
    where
        T: ActionTarget + 'static,
    {
        let target: Weak<T> = Arc::downgrade(target);
        let target: Weak<dyn ActionTarget> = target;
        Self {
            target,
            action: action.into(),
        }
    }

    /// The registered action.
    pub fn action(&self) -> &ActionName {
        &self.action
    }

    /// Whether the target is still alive.
    pub fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// Invoke the action if the target is still alive.
    ///
    /// Returns `true` if the target received the action.
    pub fn invoke(&self, sender: &ButtonState) -> bool {
        match self.target.upgrade() {
            Some(target) => {
                target.perform(&self.action, sender);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for TargetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetAction")
            .field("action", &self.action)
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// One optional [`TargetAction`] per [`CallbackKind`].
#[derive(Debug, Clone, Default)]
pub struct CallbackTable {
    slots: [Option<TargetAction>; 3],
}

impl CallbackTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the registration for `kind`.
    ///
    /// Overwrites any previous registration. Never invokes anything.
    pub fn set(&mut self, kind: CallbackKind, registration: Option<TargetAction>) {
        tracing::debug!(
            target: targets::ACTION,
            kind = kind.as_str(),
            action = registration.as_ref().map(|r| r.action().as_str()),
            "callback registration changed"
        );
        self.slots[kind.index()] = registration;
    }

    /// The registration for `kind`, if any.
    pub fn get(&self, kind: CallbackKind) -> Option<&TargetAction> {
        self.slots[kind.index()].as_ref()
    }

    /// Whether a registration exists for `kind`, regardless of target liveness.
    pub fn is_set(&self, kind: CallbackKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Fire the callback for `kind`.
    ///
    /// Returns `true` if a live target received the action. A missing
    /// registration or a dropped target is skipped.
    pub fn dispatch(&self, kind: CallbackKind, sender: &ButtonState) -> bool {
        let Some(registration) = self.get(kind) else {
            return false;
        };

        let delivered = registration.invoke(sender);
        if delivered {
            tracing::debug!(
                target: targets::ACTION,
                kind = kind.as_str(),
                action = registration.action().as_str(),
                "dispatched action"
            );
        } else {
            tracing::debug!(
                target: targets::ACTION,
                kind = kind.as_str(),
                action = registration.action().as_str(),
                "target dropped, skipping action"
            );
        }
        delivered
    }
}

/// An [`ActionTarget`] that records every action it receives.
///
/// Useful for headless hosts and tests that need to observe callback order.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    received: Mutex<Vec<(ActionName, ButtonState)>>,
}

impl RecordingTarget {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the received actions, in arrival order.
    pub fn actions(&self) -> Vec<String> {
        self.received
            .lock()
            .iter()
            .map(|(name, _)| name.as_str().to_owned())
            .collect()
    }

    /// All received actions with their sender state.
    pub fn received(&self) -> Vec<(ActionName, ButtonState)> {
        self.received.lock().clone()
    }

    /// How many times `action` was received.
    pub fn count(&self, action: &str) -> usize {
        self.received
            .lock()
            .iter()
            .filter(|(name, _)| name.as_str() == action)
            .count()
    }

    /// Forget everything received so far.
    pub fn clear(&self) {
        self.received.lock().clear();
    }
}

impl ActionTarget for RecordingTarget {
    fn perform(&self, action: &ActionName, sender: &ButtonState) {
        self.received.lock().push((action.clone(), *sender));
    }
}

static_assertions::assert_impl_all!(TargetAction: Send, Sync);
static_assertions::assert_impl_all!(CallbackTable: Send, Sync);
