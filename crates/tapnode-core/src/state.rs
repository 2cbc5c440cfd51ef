//! Snapshot of a button's state register.

/// The three observable flags of a button at one instant.
///
/// Passed to action targets as the sender's state, taken after the triggering
/// event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonState {
    /// Whether the button accepts input.
    pub enabled: bool,
    /// Whether a touch is currently held inside the button.
    pub highlighted: bool,
    /// Whether the button is in its selected (toggled-on) mode.
    pub selected: bool,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self {
            enabled: true,
            highlighted: false,
            selected: false,
        }
    }
}
