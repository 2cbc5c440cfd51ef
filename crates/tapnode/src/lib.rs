//! tapnode - a button node for scene-graph hosts.
//!
//! A [`ButtonWidget`](widget::ButtonWidget) shows one of five presentation
//! nodes depending on its enabled/highlighted/selected state, tracks a single
//! touch from press to release, and reports `touch_down`, `touch_up_inside` and
//! `touch_up` to weakly held action targets.
//!
//! This is the umbrella crate: it re-exports `tapnode-core` at the root and
//! `tapnode-render` under [`render`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tapnode::widget::{ButtonWidget, PresentationSlot, TouchEvent};
//! use tapnode::render::RecordingHost;
//! use tapnode::{ButtonConfig, RecordingTarget};
//!
//! fn main() -> tapnode::Result<()> {
//!     let mut host = RecordingHost::new();
//!     let off = host.create_node("off");
//!     let on = host.create_node("on");
//!
//!     let config = ButtonConfig::new((44.0, 44.0)).with_auto_toggle_selection(true);
//!     let mut toggle = ButtonWidget::from_config(&config, host)?
//!         .with_presentation(PresentationSlot::Normal, off)
//!         .with_presentation(PresentationSlot::SelectedNormal, on);
//!
//!     let target = Arc::new(RecordingTarget::new());
//!     toggle.set_touch_up_inside_target(&target, "toggled");
//!     toggle.refresh_presentation();
//!
//!     toggle.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
//!     toggle.handle_touch(&TouchEvent::release(1, (0.0, 0.0)));
//!
//!     assert!(toggle.is_selected());
//!     assert_eq!(toggle.host().child_names(), vec!["on"]);
//!     assert_eq!(target.actions(), vec!["toggled"]);
//!     Ok(())
//! }
//! ```

pub use tapnode_core::*;

mod config;
pub mod widget;

pub use config::ButtonConfig;

/// Geometry and host render-tree integration.
pub mod render {
    pub use tapnode_render::*;
}
