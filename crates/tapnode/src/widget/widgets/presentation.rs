//! Presentation slots and the state-to-slot mapping.
//!
//! A button shows exactly one of five optional nodes depending on its state.
//! Not every slot has to be filled: each state has a fallback chain, and the
//! first filled slot in the chain wins. Only `Normal` and `Highlighted` are
//! expected to be set on every button.
//!
//! | state                   | chain                                                    |
//! |-------------------------|----------------------------------------------------------|
//! | disabled                | Disabled → Normal                                        |
//! | selected + highlighted  | SelectedHighlighted → SelectedNormal → Highlighted → Normal |
//! | selected                | SelectedNormal → Normal                                  |
//! | highlighted             | Highlighted → Normal                                     |
//! | otherwise               | Normal                                                   |

use std::fmt;

use tapnode_core::ButtonState;

/// One of the five button appearances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationSlot {
    /// Shown while the button is disabled.
    Disabled,
    /// The resting appearance.
    Normal,
    /// Shown while a touch is held inside the button.
    Highlighted,
    /// The resting appearance of a selected button.
    SelectedNormal,
    /// Shown while a touch is held inside a selected button.
    SelectedHighlighted,
}

impl PresentationSlot {
    /// All slots, in storage order.
    pub const ALL: [PresentationSlot; 5] = [
        Self::Disabled,
        Self::Normal,
        Self::Highlighted,
        Self::SelectedNormal,
        Self::SelectedHighlighted,
    ];

    fn index(self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Normal => 1,
            Self::Highlighted => 2,
            Self::SelectedNormal => 3,
            Self::SelectedHighlighted => 4,
        }
    }

    /// The fallback chain for `state`, most specific slot first.
    pub fn chain_for(state: &ButtonState) -> &'static [PresentationSlot] {
        use PresentationSlot::*;

        if !state.enabled {
            &[Disabled, Normal]
        } else if state.selected && state.highlighted {
            &[SelectedHighlighted, SelectedNormal, Highlighted, Normal]
        } else if state.selected {
            &[SelectedNormal, Normal]
        } else if state.highlighted {
            &[Highlighted, Normal]
        } else {
            &[Normal]
        }
    }

    /// A stable name for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Normal => "normal",
            Self::Highlighted => "highlighted",
            Self::SelectedNormal => "selected_normal",
            Self::SelectedHighlighted => "selected_highlighted",
        }
    }
}

impl fmt::Display for PresentationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage for the five optional presentation nodes.
#[derive(Debug, Clone)]
pub struct PresentationSlots<N> {
    nodes: [Option<N>; 5],
}

impl<N> Default for PresentationSlots<N> {
    fn default() -> Self {
        Self {
            nodes: [None, None, None, None, None],
        }
    }
}

impl<N> PresentationSlots<N> {
    /// Create empty slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// The node assigned to `slot`.
    pub fn get(&self, slot: PresentationSlot) -> Option<&N> {
        self.nodes[slot.index()].as_ref()
    }

    /// Assign or clear `slot`, returning the previous node.
    pub fn set(&mut self, slot: PresentationSlot, node: Option<N>) -> Option<N> {
        std::mem::replace(&mut self.nodes[slot.index()], node)
    }

    /// Resolve which slot to show for `state`.
    ///
    /// Returns `None` when every slot in the fallback chain is empty.
    pub fn resolve(&self, state: &ButtonState) -> Option<(PresentationSlot, &N)> {
        PresentationSlot::chain_for(state)
            .iter()
            .find_map(|&slot| self.get(slot).map(|node| (slot, node)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(enabled: bool, highlighted: bool, selected: bool) -> ButtonState {
        ButtonState {
            enabled,
            highlighted,
            selected,
        }
    }

    fn full() -> PresentationSlots<&'static str> {
        let mut slots = PresentationSlots::new();
        for slot in PresentationSlot::ALL {
            slots.set(slot, Some(slot.as_str()));
        }
        slots
    }

    #[test]
    fn test_resolution_table_with_all_slots() {
        let slots = full();
        let cases = [
            (state(false, false, false), PresentationSlot::Disabled),
            (state(false, true, true), PresentationSlot::Disabled),
            (state(true, true, true), PresentationSlot::SelectedHighlighted),
            (state(true, false, true), PresentationSlot::SelectedNormal),
            (state(true, true, false), PresentationSlot::Highlighted),
            (state(true, false, false), PresentationSlot::Normal),
        ];
        for (state, expected) in cases {
            let (slot, node) = slots.resolve(&state).unwrap();
            assert_eq!(slot, expected, "state {state:?}");
            assert_eq!(*node, expected.as_str());
        }
    }

    #[test]
    fn test_selected_highlighted_fallback_chain() {
        let mut slots = full();
        let pressed_selected = state(true, true, true);

        slots.set(PresentationSlot::SelectedHighlighted, None);
        assert_eq!(slots.resolve(&pressed_selected).unwrap().0, PresentationSlot::SelectedNormal);

        slots.set(PresentationSlot::SelectedNormal, None);
        assert_eq!(slots.resolve(&pressed_selected).unwrap().0, PresentationSlot::Highlighted);

        slots.set(PresentationSlot::Highlighted, None);
        assert_eq!(slots.resolve(&pressed_selected).unwrap().0, PresentationSlot::Normal);

        slots.set(PresentationSlot::Normal, None);
        assert!(slots.resolve(&pressed_selected).is_none());
    }

    #[test]
    fn test_single_step_fallbacks_to_normal() {
        let mut slots = PresentationSlots::new();
        slots.set(PresentationSlot::Normal, Some("normal"));

        for state in [
            state(false, false, false),
            state(true, false, true),
            state(true, true, false),
        ] {
            assert_eq!(slots.resolve(&state), Some((PresentationSlot::Normal, &"normal")));
        }
    }

    #[test]
    fn test_disabled_never_falls_back_to_highlighted() {
        let mut slots = PresentationSlots::new();
        slots.set(PresentationSlot::Highlighted, Some("highlighted"));
        assert!(slots.resolve(&state(false, true, false)).is_none());
    }

    #[test]
    fn test_set_returns_previous() {
        let mut slots = PresentationSlots::new();
        assert_eq!(slots.set(PresentationSlot::Normal, Some(1)), None);
        assert_eq!(slots.set(PresentationSlot::Normal, Some(2)), Some(1));
        assert_eq!(slots.get(PresentationSlot::Normal), Some(&2));
    }
}
