use super::*;

use std::cell::RefCell;
use swipe_verify_core::Runtime;
use swipe_verify_foundation::PointerEventKind;
use swipe_verify_graphics::Point;

fn control(runtime: &Runtime, config: SwipeVerifyConfig) -> (SwipeVerify, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let control = {
        let fired = Rc::clone(&fired);
        SwipeVerify::new(config, runtime.handle(), move || fired.set(fired.get() + 1))
            .expect("valid config")
    };
    control.on_layout(Rect::new(0.0, 0.0, 350.0, 50.0));
    (control, fired)
}

fn settle(runtime: &Runtime) {
    let mut time = 0u64;
    while runtime.has_frame_callbacks() {
        runtime.drain_frame_callbacks(time);
        time += 16_666_667;
        assert!(time < 10_000_000_000, "animations never settled");
    }
}

#[test]
fn invalid_config_is_rejected() {
    let runtime = Runtime::headless();
    let result = SwipeVerify::new(SwipeVerifyConfig::new(0.0), runtime.handle(), || {});
    assert_eq!(
        result.err(),
        Some(ConfigError::InvalidButtonSize { size: 0.0 })
    );
}

#[test]
fn frame_reflects_drag() {
    let runtime = Runtime::headless();
    let (control, _) = control(&runtime, SwipeVerifyConfig::new(50.0));

    control.on_gesture_start();
    control.on_gesture_move(150.0);

    let frame = control.frame();
    assert_eq!(frame.status, VerificationStatus::Dragging);
    assert_eq!(frame.percent, 50);
    assert_eq!(frame.handle_offset, 150.0);
    assert_eq!(frame.fill_width, 200.0);
    assert_eq!(frame.handle_opacity, 1.0);
    assert_eq!(frame.track, Track::new(350.0, 50.0));
    assert!(!frame.disabled);
}

#[test]
fn verify_with_hidden_ok_button_fades_handle() {
    let runtime = Runtime::headless();
    let (control, fired) = control(
        &runtime,
        SwipeVerifyConfig::new(50.0).with_ok_button(false, 300),
    );

    control.on_gesture_start();
    control.on_gesture_move(300.0);
    control.on_gesture_end();
    settle(&runtime);

    assert_eq!(fired.get(), 1);
    assert_eq!(control.status(), VerificationStatus::Verified);
    assert_eq!(control.frame().handle_opacity, 0.0);

    control.reset();
    settle(&runtime);
    let frame = control.frame();
    assert_eq!(frame.status, VerificationStatus::Idle);
    assert_eq!(frame.percent, 0);
    assert_eq!(frame.handle_offset, 0.0);
    assert_eq!(frame.handle_opacity, 1.0);
}

#[test]
fn verify_with_visible_ok_button_keeps_handle_opaque() {
    let runtime = Runtime::headless();
    let (control, fired) = control(&runtime, SwipeVerifyConfig::new(50.0));

    control.on_gesture_start();
    control.on_gesture_move(320.0);
    control.on_gesture_end();
    settle(&runtime);

    assert_eq!(fired.get(), 1);
    assert_eq!(control.frame().handle_opacity, 1.0);
    assert_eq!(control.frame().handle_offset, 300.0);
}

#[test]
fn pointer_events_drive_the_control() {
    let runtime = Runtime::headless();
    let (control, fired) = control(&runtime, SwipeVerifyConfig::new(50.0));

    control.on_pointer_event(&PointerEvent::new(
        PointerEventKind::Down,
        Point::new(25.0, 25.0),
    ));
    control.on_pointer_event(&PointerEvent::new(
        PointerEventKind::Move,
        Point::new(340.0, 80.0),
    ));
    assert_eq!(control.percent(), 100);
    control.on_pointer_event(&PointerEvent::new(
        PointerEventKind::Up,
        Point::new(340.0, 80.0),
    ));

    assert_eq!(fired.get(), 1);
    assert_eq!(control.status(), VerificationStatus::Verified);
}

#[test]
fn disabling_mid_drag_cancels_the_gesture() {
    let runtime = Runtime::headless();
    let (control, fired) = control(&runtime, SwipeVerifyConfig::new(50.0));

    control.on_gesture_start();
    control.on_gesture_move(300.0);
    control.set_disabled(true);
    control.on_gesture_end();
    settle(&runtime);

    assert_eq!(fired.get(), 0);
    assert_eq!(control.status(), VerificationStatus::Idle);
    assert_eq!(control.frame().handle_offset, 0.0);
    assert!(control.frame().disabled);
}

#[test]
fn offset_listener_sees_fill_already_updated() {
    let runtime = Runtime::headless();
    let (control, _) = control(&runtime, SwipeVerifyConfig::new(50.0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        let reader = control.clone();
        control.add_offset_listener(move |offset| {
            seen.borrow_mut()
                .push((offset, reader.presentation().fill_width()));
        });
    }

    control.on_gesture_start();
    control.on_gesture_move(90.0);
    control.on_gesture_end();
    settle(&runtime);

    let seen = seen.borrow();
    assert_eq!(seen.first(), Some(&(90.0, 140.0)));
    assert_eq!(seen.last(), Some(&(0.0, 50.0)));
}
