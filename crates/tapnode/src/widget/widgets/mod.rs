//! Widget implementations.

mod button;
mod presentation;

pub use button::ButtonWidget;
pub use presentation::{PresentationSlot, PresentationSlots};
