//! Interrupted gestures, re-layout and re-entrant host callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use swipe_verify::{
    CancelPolicy, DragEvent, Rect, SwipeVerify, SwipeVerifyConfig, VerificationStatus,
};
use swipe_verify_testing::{assert_fill_follows_handle, assert_offset_in_track, SwipeTestRule};

const HANDLE: f32 = 50.0;
const TRACK: f32 = 350.0;

fn rule_with(config: SwipeVerifyConfig) -> SwipeTestRule {
    let mut rule = SwipeTestRule::new(config).expect("valid config");
    rule.layout(TRACK);
    rule
}

#[test]
fn grabbing_during_reset_captures_the_interpolated_offset() {
    let mut rule =
        rule_with(SwipeVerifyConfig::new(HANDLE).with_easing(swipe_verify::Easing::Linear));

    rule.press();
    rule.move_to(200.0);
    rule.release();
    rule.advance_frame();
    rule.advance_time(250);
    let in_flight = rule.frame().handle_offset;
    assert!(in_flight > 0.0 && in_flight < 200.0);

    rule.press();
    assert_eq!(rule.status(), VerificationStatus::Dragging);
    rule.advance_time(100);
    assert_eq!(
        rule.frame().handle_offset,
        in_flight,
        "the reset tween must not keep moving the handle"
    );

    rule.move_to(30.0);
    assert_eq!(rule.frame().handle_offset, in_flight + 30.0);
    assert_fill_follows_handle(&rule.frame(), HANDLE);
}

#[test]
fn grabbing_during_reset_reports_percent_of_the_grabbed_offset() {
    let mut rule = rule_with(SwipeVerifyConfig::new(HANDLE));

    rule.press();
    rule.move_to(200.0);
    rule.release();
    rule.advance_frame();
    rule.advance_time(100);
    rule.press();

    let frame = rule.frame();
    assert_eq!(frame.status, VerificationStatus::Dragging);
    assert!(frame.handle_offset > 0.0 && frame.handle_offset < 200.0);
    let expected = ((frame.handle_offset / (TRACK - HANDLE)) * 100.0).round() as u8;
    assert_eq!(frame.percent, expected);
    assert!(frame.percent > 0);

    // Releasing without moving is judged on the grabbed offset.
    rule.release();
    assert_eq!(rule.status(), VerificationStatus::Idle);
    assert_eq!(rule.verified_count(), 0);
}

#[test]
fn relative_drag_from_grabbed_position_can_verify() {
    let mut rule = rule_with(SwipeVerifyConfig::new(HANDLE));

    rule.press();
    rule.move_to(250.0);
    rule.release();
    rule.advance_frame();
    rule.advance_frame();
    let in_flight = rule.frame().handle_offset;

    rule.press();
    rule.move_to(300.0 - in_flight);
    assert_eq!(rule.percent(), 100);
    rule.release();

    assert_eq!(rule.verified_count(), 1);
}

#[test]
fn cancel_reverts_by_default() {
    let mut rule = rule_with(SwipeVerifyConfig::new(HANDLE));

    rule.press();
    rule.move_to(300.0);
    rule.cancel();

    assert_eq!(rule.status(), VerificationStatus::Idle);
    assert_eq!(rule.verified_count(), 0);
    rule.pump_until_idle();
    assert_eq!(rule.frame().handle_offset, 0.0);

    // A stray release after the cancel does nothing.
    rule.release();
    assert_eq!(rule.verified_count(), 0);
}

#[test]
fn deferred_cancel_leaves_the_handle_for_the_next_grab() {
    let mut rule =
        rule_with(SwipeVerifyConfig::new(HANDLE).with_cancel_policy(CancelPolicy::Defer));

    rule.press();
    rule.move_to(120.0);
    rule.cancel();

    assert_eq!(rule.status(), VerificationStatus::Dragging);
    assert_eq!(rule.pump_until_idle(), 0);
    assert_eq!(rule.frame().handle_offset, 120.0);

    rule.press();
    rule.move_to(180.0);
    assert_eq!(rule.frame().handle_offset, 300.0);
    rule.release();
    assert_eq!(rule.verified_count(), 1);
}

#[test]
fn cancel_after_verification_is_ignored() {
    let mut rule = rule_with(SwipeVerifyConfig::new(HANDLE));
    rule.swipe(300.0);

    rule.cancel();

    assert_eq!(rule.status(), VerificationStatus::Verified);
    assert_eq!(rule.verified_count(), 1);
}

#[test]
fn callback_may_reset_the_control_reentrantly() {
    let slot: Rc<RefCell<Option<SwipeVerify>>> = Rc::new(RefCell::new(None));
    let statuses = Rc::new(RefCell::new(Vec::new()));
    let mut rule = {
        let slot = Rc::clone(&slot);
        let statuses = Rc::clone(&statuses);
        SwipeTestRule::with_callback(SwipeVerifyConfig::new(HANDLE), move || {
            let control = slot.borrow().clone();
            if let Some(control) = control {
                statuses.borrow_mut().push(control.status());
                control.reset();
                statuses.borrow_mut().push(control.status());
            }
        })
        .expect("valid config")
    };
    slot.borrow_mut().replace(rule.control().clone());
    rule.layout(TRACK);

    rule.swipe(300.0);

    assert_eq!(rule.verified_count(), 1);
    assert_eq!(
        statuses.borrow().as_slice(),
        &[VerificationStatus::Verified, VerificationStatus::Idle]
    );
    rule.pump_until_idle();
    assert_eq!(rule.frame().handle_offset, 0.0);

    // Break the control <-> callback cycle.
    slot.borrow_mut().take();
}

#[test]
fn relayout_mid_drag_reclamps_and_recomputes_percent() {
    let mut rule = rule_with(SwipeVerifyConfig::new(HANDLE));

    rule.press();
    rule.move_to(250.0);
    assert_eq!(rule.percent(), 83);

    rule.layout(250.0);
    let frame = rule.frame();
    assert_eq!(frame.status, VerificationStatus::Dragging);
    assert_offset_in_track(&frame, 200.0);
    assert_eq!(frame.handle_offset, 200.0);
    assert_eq!(frame.percent, 100);
    assert_fill_follows_handle(&frame, HANDLE);

    rule.release();
    assert_eq!(rule.verified_count(), 1);
}

#[test]
fn relayout_never_changes_verified_status() {
    let mut rule = rule_with(SwipeVerifyConfig::new(HANDLE));
    rule.swipe(300.0);

    rule.layout(600.0);
    assert_eq!(rule.status(), VerificationStatus::Verified);
    assert_eq!(rule.percent(), 100);

    rule.layout(200.0);
    let frame = rule.frame();
    assert_eq!(frame.status, VerificationStatus::Verified);
    assert_offset_in_track(&frame, 150.0);
}

#[test]
fn disabled_control_ignores_gestures_until_enabled() {
    let mut rule = rule_with(SwipeVerifyConfig::new(HANDLE).with_disabled(true));

    rule.swipe(300.0);
    assert_eq!(rule.verified_count(), 0);
    assert_eq!(rule.status(), VerificationStatus::Idle);
    assert_eq!(rule.frame().handle_offset, 0.0);

    rule.control().set_disabled(false);
    rule.swipe(300.0);
    assert_eq!(rule.verified_count(), 1);
}

#[test]
fn dispatch_accepts_a_drag_stream() {
    let runtime = swipe_verify::Runtime::headless();
    let verified = Rc::new(RefCell::new(0));
    let control = {
        let verified = Rc::clone(&verified);
        SwipeVerify::new(SwipeVerifyConfig::new(HANDLE), runtime.handle(), move || {
            *verified.borrow_mut() += 1
        })
        .expect("valid config")
    };
    control.on_layout(Rect::new(0.0, 0.0, TRACK, HANDLE));

    for event in [
        DragEvent::Start,
        DragEvent::Move { dx: 100.0 },
        DragEvent::Move { dx: 310.0 },
        DragEvent::End,
        DragEvent::End,
    ] {
        control.dispatch(event);
    }

    assert_eq!(*verified.borrow(), 1);
}
