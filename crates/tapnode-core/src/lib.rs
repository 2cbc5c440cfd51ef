//! Core systems for tapnode.
//!
//! This crate provides the pieces of the tapnode button that do not depend on
//! geometry or a render tree:
//!
//! - **Target-action callbacks**: weak (target, action) registrations that
//!   never keep their target alive
//! - **Button state**: the snapshot passed to action targets
//! - **Errors**: the configuration-boundary error type
//! - **Logging**: tracing targets and helpers
//! - **Thread affinity**: debug checks that a widget stays on its thread
//!
//! # Target-Action Example
//!
//! ```
//! use std::sync::Arc;
//! use tapnode_core::action::{CallbackKind, CallbackTable, RecordingTarget, TargetAction};
//! use tapnode_core::ButtonState;
//!
//! let target = Arc::new(RecordingTarget::new());
//! let mut callbacks = CallbackTable::new();
//! callbacks.set(CallbackKind::TouchDown, Some(TargetAction::new(&target, "pressed")));
//!
//! callbacks.dispatch(CallbackKind::TouchDown, &ButtonState::default());
//! assert_eq!(target.actions(), vec!["pressed"]);
//! ```

pub mod action;
mod error;
pub mod logging;
mod state;
pub mod thread_check;

pub use action::{
    ActionName, ActionTarget, CallbackKind, CallbackTable, FnTarget, RecordingTarget, TargetAction,
};
pub use error::{Result, TapnodeError};
pub use logging::PerfSpan;
pub use state::ButtonState;
pub use thread_check::ThreadAffinity;

// Used by the logging macros so callers need no direct `tracing` dependency.
#[doc(hidden)]
pub use tracing;
