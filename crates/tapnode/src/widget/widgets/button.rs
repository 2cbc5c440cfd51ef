//! Button node implementation.
//!
//! This module provides [`ButtonWidget`], a button layered on a host scene-graph
//! node. It keeps an enabled/highlighted/selected state register, shows one of
//! five presentation nodes for the current state, and reports touches through
//! three target-action callbacks.
//!
//! # Setup
//!
//! Assign presentation nodes, register callbacks, then call
//! [`ButtonWidget::refresh_presentation`] once to make the button visible:
//!
//! ```
//! use std::sync::Arc;
//! use tapnode::widget::{ButtonWidget, PresentationSlot, TouchEvent};
//! use tapnode::render::{RecordingHost, Size};
//! use tapnode::RecordingTarget;
//!
//! let mut host = RecordingHost::new();
//! let normal = host.create_node("normal");
//! let pressed = host.create_node("pressed");
//!
//! let mut button = ButtonWidget::new(Size::new(44.0, 44.0), host);
//! button.set_presentation(PresentationSlot::Normal, Some(normal));
//! button.set_presentation(PresentationSlot::Highlighted, Some(pressed));
//!
//! let target = Arc::new(RecordingTarget::new());
//! button.set_touch_up_inside_target(&target, "play");
//! button.refresh_presentation();
//!
//! button.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
//! assert_eq!(button.host().child_names(), vec!["pressed"]);
//!
//! button.handle_touch(&TouchEvent::release(1, (0.0, 0.0)));
//! assert_eq!(button.host().child_names(), vec!["normal"]);
//! assert_eq!(target.actions(), vec!["play"]);
//! ```
//!
//! # Touch Handling
//!
//! Touches are delivered in the widget's own coordinate space, whose origin is
//! the widget's center. A press inside the hit area highlights the button and
//! fires `touch_down`. Dragging out of the hit area removes the highlight and
//! dragging back restores it. Lifting fires `touch_up`, and when lifted inside
//! also `touch_up_inside` (flipping `selected` first if auto-toggle is on).
//! Cancellation abandons the touch without firing anything.

use std::sync::Arc;

use tapnode_core::logging::targets;
use tapnode_core::{
    ActionName, ActionTarget, ButtonState, CallbackKind, CallbackTable, PerfSpan, Result,
    TapnodeError, TargetAction, ThreadAffinity,
};
use tapnode_render::{Point, Rect, RenderHost, Size};

use super::presentation::{PresentationSlot, PresentationSlots};
use crate::config::ButtonConfig;
use crate::widget::events::TouchEvent;
use crate::widget::touch::{TouchOutcome, TouchTracker, TrackingState};

/// A button layered on a host render-tree node.
///
/// The widget owns its handle to the host (`H`), never the presentation nodes
/// themselves: it only attaches and detaches them. Callback targets are held
/// weakly.
pub struct ButtonWidget<H: RenderHost> {
    /// Attach point for presentation nodes.
    host: H,

    /// Hit-area dimensions, centered on the widget's origin.
    size: Size,

    /// Position of the widget's origin in its parent's space.
    position: Point,

    /// Whether the button accepts input.
    enabled: bool,

    /// Whether a touch is held inside the button.
    highlighted: bool,

    /// Whether the button is in selected mode.
    selected: bool,

    /// Whether a completed inside tap flips `selected`.
    auto_toggle_selection: bool,

    /// The five optional presentation nodes.
    slots: PresentationSlots<H::Node>,

    /// The slot and node currently attached to the host, if any.
    attached: Option<(PresentationSlot, H::Node)>,

    /// Single-touch state machine.
    tracker: TouchTracker,

    /// touch_down / touch_up_inside / touch_up registrations.
    callbacks: CallbackTable,

    /// Thread the widget was created on.
    affinity: ThreadAffinity,
}

impl<H: RenderHost> ButtonWidget<H> {
    /// Create a button with the given hit-area size.
    ///
    /// The button starts enabled, not highlighted, not selected, with no
    /// presentation nodes and no callbacks.
    pub fn new(size: impl Into<Size>, host: H) -> Self {
        let size = size.into();
        tapnode_core::tapnode_trace!(width = size.width, height = size.height, "button created");
        Self {
            host,
            size,
            position: Point::ZERO,
            enabled: true,
            highlighted: false,
            selected: false,
            auto_toggle_selection: false,
            slots: PresentationSlots::new(),
            attached: None,
            tracker: TouchTracker::new(),
            callbacks: CallbackTable::new(),
            affinity: ThreadAffinity::current(),
        }
    }

    /// Create a button, rejecting negative or non-finite sizes.
    pub fn try_new(size: impl Into<Size>, host: H) -> Result<Self> {
        let size = size.into();
        if !size.is_valid() {
            return Err(TapnodeError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self::new(size, host))
    }

    /// Create a button from a validated configuration.
    ///
    /// Flags are applied without touching the host; call
    /// [`refresh_presentation`](Self::refresh_presentation) after assigning
    /// presentation nodes.
    pub fn from_config(config: &ButtonConfig, host: H) -> Result<Self> {
        config.validate()?;
        let mut button = Self::new(config.size, host);
        button.enabled = config.enabled;
        button.selected = config.selected;
        button.auto_toggle_selection = config.auto_toggle_selection;
        Ok(button)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The hit-area dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Position of the widget's origin in its parent's space.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the widget within its parent.
    ///
    /// Touch events are widget-local, so this does not affect hit-testing.
    pub fn set_position(&mut self, position: impl Into<Point>) {
        self.position = position.into();
    }

    /// The hit area in widget-local coordinates.
    pub fn hit_area(&self) -> Rect {
        Rect::from_center(Point::ZERO, self.size)
    }

    /// The hit area in the parent's coordinates.
    pub fn frame(&self) -> Rect {
        Rect::from_center(self.position, self.size)
    }

    // =========================================================================
    // State Register
    // =========================================================================

    /// Check if the button is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the button.
    ///
    /// Disabling removes the highlight and silently abandons any tracked
    /// touch: no callbacks fire for it, even when it is later lifted.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.affinity.debug_assert_same_thread();
        tracing::debug!(target: targets::BUTTON, enabled, "set_enabled");

        self.enabled = enabled;
        if !enabled {
            self.highlighted = false;
            if self.tracker.reset() {
                tracing::trace!(target: targets::TOUCH, "tracking abandoned by disable");
            }
        }
        self.refresh_presentation();
    }

    /// Check if the button is highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Set the highlighted state.
    ///
    /// Normally driven by touches; the next touch event overrides an owner
    /// assignment. Always false while disabled.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.affinity.debug_assert_same_thread();
        tracing::debug!(target: targets::BUTTON, highlighted, "set_highlighted");

        self.highlighted = highlighted && self.enabled;
        self.refresh_presentation();
    }

    /// Check if the button is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selected state.
    pub fn set_selected(&mut self, selected: bool) {
        self.affinity.debug_assert_same_thread();
        tracing::debug!(target: targets::BUTTON, selected, "set_selected");

        self.selected = selected;
        self.refresh_presentation();
    }

    /// Whether a completed inside tap flips the selected state.
    pub fn auto_toggle_selection(&self) -> bool {
        self.auto_toggle_selection
    }

    /// Set whether a completed inside tap flips the selected state.
    pub fn set_auto_toggle_selection(&mut self, auto_toggle: bool) {
        self.auto_toggle_selection = auto_toggle;
    }

    /// Set automatic selection toggling using builder pattern.
    pub fn with_auto_toggle_selection(mut self, auto_toggle: bool) -> Self {
        self.auto_toggle_selection = auto_toggle;
        self
    }

    /// Snapshot of the state register.
    pub fn state(&self) -> ButtonState {
        ButtonState {
            enabled: self.enabled,
            highlighted: self.highlighted,
            selected: self.selected,
        }
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// The node assigned to `slot`.
    pub fn presentation(&self, slot: PresentationSlot) -> Option<&H::Node> {
        self.slots.get(slot)
    }

    /// Assign or clear the node for `slot`.
    ///
    /// Takes effect on the next [`refresh_presentation`](Self::refresh_presentation)
    /// or state change.
    pub fn set_presentation(&mut self, slot: PresentationSlot, node: Option<H::Node>) {
        self.slots.set(slot, node);
    }

    /// Assign a slot using builder pattern.
    pub fn with_presentation(mut self, slot: PresentationSlot, node: H::Node) -> Self {
        self.slots.set(slot, Some(node));
        self
    }

    /// The slot whose node is currently attached.
    pub fn attached_slot(&self) -> Option<PresentationSlot> {
        self.attached.as_ref().map(|(slot, _)| *slot)
    }

    /// The node currently attached.
    pub fn attached_node(&self) -> Option<&H::Node> {
        self.attached.as_ref().map(|(_, node)| node)
    }

    /// Attach the node for the current state, detaching the previous one.
    ///
    /// Does nothing to the host when the right node is already attached. When
    /// every slot in the state's fallback chain is empty, nothing is attached.
    pub fn refresh_presentation(&mut self) {
        self.affinity.debug_assert_same_thread();

        let state = self.state();
        let resolved = self
            .slots
            .resolve(&state)
            .map(|(slot, node)| (slot, node.clone()));

        let same_node = match (&self.attached, &resolved) {
            (Some((_, current)), Some((_, next))) => current == next,
            (None, None) => true,
            _ => false,
        };
        if same_node {
            // A fallback may map a new slot onto the node already shown.
            self.attached = resolved;
            return;
        }

        if let Some((slot, node)) = self.attached.take() {
            tracing::trace!(target: targets::PRESENTATION, slot = slot.as_str(), ?node, "detach");
            self.host.detach_child(&node);
        }
        if let Some((slot, node)) = &resolved {
            tracing::trace!(target: targets::PRESENTATION, slot = slot.as_str(), ?node, "attach");
            self.host.attach_child(node);
        }
        self.attached = resolved;
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    /// Register or clear the callback for `kind`.
    ///
    /// Replaces any previous registration. Never fires the callback.
    pub fn set_callback(&mut self, kind: CallbackKind, registration: Option<TargetAction>) {
        self.callbacks.set(kind, registration);
    }

    /// Register `action` on `target` for `kind`.
    pub fn set_target<T>(&mut self, kind: CallbackKind, target: &Arc<T>, action: impl Into<ActionName>)
    where
        T: ActionTarget + 'static,
    {
        self.set_callback(kind, Some(TargetAction::new(target, action)));
    }

    /// Called when a touch goes down inside the button.
    pub fn set_touch_down_target<T>(&mut self, target: &Arc<T>, action: impl Into<ActionName>)
    where
        T: ActionTarget + 'static,
    {
        self.set_target(CallbackKind::TouchDown, target, action);
    }

    /// Called when a touch is lifted inside the button.
    pub fn set_touch_up_inside_target<T>(&mut self, target: &Arc<T>, action: impl Into<ActionName>)
    where
        T: ActionTarget + 'static,
    {
        self.set_target(CallbackKind::TouchUpInside, target, action);
    }

    /// Called when a touch is lifted, inside or outside the button.
    pub fn set_touch_up_target<T>(&mut self, target: &Arc<T>, action: impl Into<ActionName>)
    where
        T: ActionTarget + 'static,
    {
        self.set_target(CallbackKind::TouchUp, target, action);
    }

    /// Remove the registration for `kind`.
    pub fn clear_callback(&mut self, kind: CallbackKind) {
        self.set_callback(kind, None);
    }

    /// Whether a registration exists for `kind`.
    pub fn has_callback(&self, kind: CallbackKind) -> bool {
        self.callbacks.is_set(kind)
    }

    // =========================================================================
    // Touch Handling
    // =========================================================================

    /// Current touch-tracking state.
    pub fn tracking_state(&self) -> TrackingState {
        self.tracker.state()
    }

    /// Whether a touch is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Handle a touch event in widget-local coordinates.
    ///
    /// Returns `true` if the event concerned the tracked touch.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        self.affinity.debug_assert_same_thread();

        let outcome = self.tracker.handle(event, self.hit_area(), self.enabled);
        if outcome == TouchOutcome::Ignored {
            return false;
        }

        let _span = PerfSpan::new("handle_touch");
        match outcome {
            TouchOutcome::Ignored | TouchOutcome::Moved => {}
            TouchOutcome::Began => {
                self.apply_highlight(true);
                self.fire(CallbackKind::TouchDown);
            }
            TouchOutcome::Entered => self.apply_highlight(true),
            TouchOutcome::Exited | TouchOutcome::Cancelled => self.apply_highlight(false),
            TouchOutcome::EndedInside => {
                self.highlighted = false;
                if self.auto_toggle_selection {
                    self.selected = !self.selected;
                    tracing::debug!(target: targets::BUTTON, selected = self.selected, "selection toggled");
                }
                self.refresh_presentation();
                self.fire(CallbackKind::TouchUp);
                self.fire(CallbackKind::TouchUpInside);
            }
            TouchOutcome::EndedOutside => {
                self.apply_highlight(false);
                self.fire(CallbackKind::TouchUp);
            }
        }
        true
    }

    /// Abandon the tracked touch without firing any callback.
    ///
    /// Returns `true` if a touch was being tracked.
    pub fn cancel_tracking(&mut self) -> bool {
        self.affinity.debug_assert_same_thread();

        let was_tracking = self.tracker.reset();
        if was_tracking {
            tracing::trace!(target: targets::TOUCH, "tracking cancelled by host");
            self.apply_highlight(false);
        }
        was_tracking
    }

    fn apply_highlight(&mut self, highlighted: bool) {
        self.highlighted = highlighted && self.enabled;
        self.refresh_presentation();
    }

    fn fire(&self, kind: CallbackKind) {
        let state = self.state();
        self.callbacks.dispatch(kind, &state);
    }

    // =========================================================================
    // Host Access
    // =========================================================================

    /// The host this button attaches to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the button, returning its host.
    ///
    /// The attached presentation node, if any, stays attached.
    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H> std::fmt::Debug for ButtonWidget<H>
where
    H: RenderHost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonWidget")
            .field("size", &self.size)
            .field("position", &self.position)
            .field("state", &self.state())
            .field("auto_toggle_selection", &self.auto_toggle_selection)
            .field("attached", &self.attached)
            .field("tracking", &self.tracker.state())
            .finish_non_exhaustive()
    }
}
