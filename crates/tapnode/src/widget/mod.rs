//! The tapnode button widget and its input handling.
//!
//! - [`ButtonWidget`]: state register, presentation mapping and callbacks
//! - [`PresentationSlot`]: the five button appearances and their fallbacks
//! - [`TouchTracker`]: the single-touch state machine behind the button
//! - [`TouchEvent`]: host-delivered touch input in widget-local coordinates
//!
//! # Data Flow
//!
//! ```text
//! host input ─▶ TouchTracker ─▶ state register ─▶ presentation ─▶ RenderHost
//!                                      │
//!                                      └──────────▶ action targets
//! ```
//!
//! Every step runs synchronously inside [`ButtonWidget::handle_touch`] or the
//! state setter that triggered it.

pub mod events;
pub mod touch;
pub mod widgets;


pub use events::{TouchEvent, TouchPhase};
pub use touch::{TouchOutcome, TouchTracker, TrackingState};
pub use widgets::{ButtonWidget, PresentationSlot, PresentationSlots};

#[cfg(feature = "winit")]
pub use touch::from_winit_touch;
