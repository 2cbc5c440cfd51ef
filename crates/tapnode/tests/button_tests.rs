//! End-to-end tests for the button widget against custom hosts and targets.

use std::sync::Arc;

use parking_lot::Mutex;

use tapnode::render::{RecordingHost, RenderHost, Size};
use tapnode::widget::{ButtonWidget, PresentationSlot, TouchEvent, TrackingState};
use tapnode::{ActionName, ActionTarget, ButtonConfig, ButtonState, CallbackKind, FnTarget};

/// A host whose nodes are plain strings, recording every call in order.
#[derive(Debug, Default)]
struct LogHost {
    calls: Vec<String>,
    children: Vec<String>,
}

impl RenderHost for LogHost {
    type Node = String;

    fn attach_child(&mut self, node: &String) {
        self.calls.push(format!("attach {node}"));
        self.children.push(node.clone());
    }

    fn detach_child(&mut self, node: &String) {
        self.calls.push(format!("detach {node}"));
        self.children.retain(|child| child != node);
    }
}

/// An owner object that reacts to button actions by name.
#[derive(Default)]
struct Controller {
    log: Mutex<Vec<String>>,
}

impl Controller {
    fn log(&self) -> Vec<String> {
        self.log.lock().clone()
    }
}

impl ActionTarget for Controller {
    fn perform(&self, action: &ActionName, sender: &ButtonState) {
        let entry = match action.as_str() {
            "begin" => "began".to_string(),
            "end" => "ended".to_string(),
            "activate" => format!("activated selected={}", sender.selected),
            other => format!("unknown {other}"),
        };
        self.log.lock().push(entry);
    }
}

fn button_with(slots: &[PresentationSlot]) -> ButtonWidget<LogHost> {
    let mut button = ButtonWidget::new(Size::new(100.0, 40.0), LogHost::default());
    for slot in slots {
        button.set_presentation(*slot, Some(slot.as_str().to_string()));
    }
    button.refresh_presentation();
    button
}

fn wire(button: &mut ButtonWidget<LogHost>) -> Arc<Controller> {
    let controller = Arc::new(Controller::default());
    button.set_touch_down_target(&controller, "begin");
    button.set_touch_up_target(&controller, "end");
    button.set_touch_up_inside_target(&controller, "activate");
    controller
}

#[test]
fn test_plain_tap() {
    let mut button = button_with(&[PresentationSlot::Normal, PresentationSlot::Highlighted]);
    let controller = wire(&mut button);

    button.handle_touch(&TouchEvent::press(7, (0.0, 0.0)));
    assert_eq!(button.host().children, vec!["highlighted"]);

    button.handle_touch(&TouchEvent::release(7, (5.0, 5.0)));
    assert_eq!(button.host().children, vec!["normal"]);
    assert_eq!(
        controller.log(),
        vec!["began", "ended", "activated selected=false"]
    );
    assert_eq!(
        button.host().calls,
        vec![
            "attach normal",
            "detach normal",
            "attach highlighted",
            "detach highlighted",
            "attach normal",
        ]
    );
}

#[test]
fn test_drag_off_and_release_outside() {
    let mut button = button_with(&[PresentationSlot::Normal, PresentationSlot::Highlighted])
        .with_auto_toggle_selection(true);
    let controller = wire(&mut button);

    button.handle_touch(&TouchEvent::press(1, (10.0, 0.0)));
    button.handle_touch(&TouchEvent::moved(1, (60.0, 0.0)));
    assert!(!button.is_highlighted());
    assert_eq!(button.tracking_state(), TrackingState::TrackingOutside);

    button.handle_touch(&TouchEvent::release(1, (60.0, 0.0)));
    assert_eq!(controller.log(), vec!["began", "ended"]);
    assert!(!button.is_selected());
    assert_eq!(button.host().children, vec!["normal"]);
}

#[test]
fn test_lift_position_does_not_decide_inside() {
    for auto_toggle in [false, true] {
        // Lifted off the button without a move: the touch was tracked inside.
        let mut button = button_with(&[PresentationSlot::Normal]).with_auto_toggle_selection(auto_toggle);
        let controller = wire(&mut button);
        button.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
        button.handle_touch(&TouchEvent::release(1, (0.0, 30.0)));

        let activated = format!("activated selected={auto_toggle}");
        assert_eq!(controller.log(), vec!["began", "ended", activated.as_str()]);
        assert_eq!(button.is_selected(), auto_toggle);

        // Dragged out, then lifted over the button: the touch was tracked outside.
        let mut button = button_with(&[PresentationSlot::Normal]).with_auto_toggle_selection(auto_toggle);
        let controller = wire(&mut button);
        button.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
        button.handle_touch(&TouchEvent::moved(1, (1000.0, 1000.0)));
        button.handle_touch(&TouchEvent::release(1, (0.0, 0.0)));

        assert_eq!(controller.log(), vec!["began", "ended"]);
        assert!(!button.is_selected());
    }
}

#[test]
fn test_toggle_button_round_trip() {
    let mut button = button_with(&PresentationSlot::ALL).with_auto_toggle_selection(true);
    let controller = wire(&mut button);

    for _ in 0..2 {
        button.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
        button.handle_touch(&TouchEvent::release(1, (0.0, 0.0)));
    }

    assert!(!button.is_selected());
    assert_eq!(
        controller.log(),
        vec![
            "began",
            "ended",
            "activated selected=true",
            "began",
            "ended",
            "activated selected=false",
        ]
    );
    assert_eq!(button.host().children, vec!["normal"]);
}

#[test]
fn test_disable_mid_touch() {
    let mut button = button_with(&PresentationSlot::ALL);
    let controller = wire(&mut button);

    button.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
    button.set_enabled(false);
    button.handle_touch(&TouchEvent::release(1, (0.0, 0.0)));

    assert_eq!(controller.log(), vec!["began"]);
    assert_eq!(button.host().children, vec!["disabled"]);
    assert_eq!(button.tracking_state(), TrackingState::Idle);
}

#[test]
fn test_cancelled_touch() {
    let mut button = button_with(&PresentationSlot::ALL);
    let controller = wire(&mut button);

    button.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
    button.handle_touch(&TouchEvent::cancel(1));

    assert_eq!(controller.log(), vec!["began"]);
    assert!(!button.is_highlighted());
    assert_eq!(button.host().children, vec!["normal"]);
}

#[test]
fn test_owner_dropped_before_tap() {
    let mut button = button_with(&[PresentationSlot::Normal]);
    let controller = wire(&mut button);
    drop(controller);

    assert!(button.has_callback(CallbackKind::TouchUpInside));
    assert!(button.handle_touch(&TouchEvent::press(1, (0.0, 0.0))));
    assert!(button.handle_touch(&TouchEvent::release(1, (0.0, 0.0))));
    assert_eq!(button.tracking_state(), TrackingState::Idle);
}

#[test]
fn test_closure_target() {
    let taps = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&taps);
    let target = Arc::new(FnTarget::new(move |action: &ActionName, state: &ButtonState| {
        sink.lock().push((action.to_string(), *state));
    }));

    let mut button = button_with(&[PresentationSlot::Normal]);
    button.set_touch_up_inside_target(&target, "tapped");

    button.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
    button.handle_touch(&TouchEvent::release(1, (0.0, 0.0)));

    let taps = taps.lock();
    assert_eq!(taps.len(), 1);
    assert_eq!(taps[0].0, "tapped");
    assert_eq!(taps[0].1, button.state());
}

#[test]
fn test_borrowed_host() {
    let mut host = RecordingHost::new();
    let normal = host.create_node("normal");
    let pressed = host.create_node("pressed");

    {
        let mut button = ButtonWidget::new((44u32, 44u32), &mut host)
            .with_presentation(PresentationSlot::Normal, normal)
            .with_presentation(PresentationSlot::Highlighted, pressed);
        button.refresh_presentation();
        button.handle_touch(&TouchEvent::press(1, (0.0, 0.0)));
    }

    // The button is gone; the node it last attached stays with the host.
    assert_eq!(host.child_names(), vec!["pressed"]);
}

#[test]
fn test_button_from_toml_config() {
    let config = ButtonConfig::from_toml_str(
        r#"
        selected = true
        auto_toggle_selection = true

        [size]
        width = 100.0
        height = 40.0
        "#,
    )
    .unwrap();

    let mut button = ButtonWidget::from_config(&config, LogHost::default()).unwrap();
    for slot in PresentationSlot::ALL {
        button.set_presentation(slot, Some(slot.as_str().to_string()));
    }
    button.refresh_presentation();
    assert_eq!(button.host().children, vec!["selected_normal"]);

    button.handle_touch(&TouchEvent::press(1, (49.0, 19.0)));
    assert_eq!(button.host().children, vec!["selected_highlighted"]);
    button.handle_touch(&TouchEvent::release(1, (49.0, 19.0)));
    assert!(!button.is_selected());
    assert_eq!(button.host().children, vec!["normal"]);
}

#[test]
fn test_disabled_from_start_ignores_press() {
    let config = ButtonConfig::new((44.0, 44.0)).with_enabled(false);
    let mut button = ButtonWidget::from_config(&config, LogHost::default()).unwrap();
    for slot in PresentationSlot::ALL {
        button.set_presentation(slot, Some(slot.as_str().to_string()));
    }
    button.refresh_presentation();
    let controller = wire(&mut button);

    assert!(!button.handle_touch(&TouchEvent::press(1, (0.0, 0.0))));
    assert!(controller.log().is_empty());
    assert!(!button.is_highlighted());
    assert_eq!(button.host().children, vec!["disabled"]);
}

#[test]
fn test_repeated_refresh_leaves_host_alone() {
    let mut button = button_with(&PresentationSlot::ALL);
    button.set_selected(true);
    let calls = button.host().calls.len();

    button.refresh_presentation();
    button.refresh_presentation();

    assert_eq!(button.host().calls.len(), calls);
    assert_eq!(button.host().children, vec!["selected_normal"]);
}
