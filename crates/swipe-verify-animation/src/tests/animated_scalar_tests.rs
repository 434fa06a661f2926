use super::*;

use crate::animation::{AnimationSpec, Easing};
use std::cell::RefCell;
use std::rc::Rc;
use swipe_verify_core::Runtime;

const FRAME_NANOS: u64 = 16_666_667;

fn run_to_idle(runtime: &Runtime, start_nanos: u64) -> u64 {
    let mut time = start_nanos;
    for _ in 0..1_000 {
        if !runtime.has_frame_callbacks() {
            return time;
        }
        runtime.drain_frame_callbacks(time);
        time += FRAME_NANOS;
    }
    panic!("animation did not settle");
}

#[test]
fn tween_interpolates_and_lands_on_target() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(300.0, runtime.handle());

    let handle = scalar.animate_to(0.0, AnimationSpec::linear(500));
    assert!(handle.is_running());
    assert_eq!(scalar.target(), Some(0.0));

    runtime.drain_frame_callbacks(0);
    assert_eq!(scalar.get(), 300.0, "first frame anchors the start time");

    runtime.drain_frame_callbacks(250_000_000);
    assert!((scalar.get() - 150.0).abs() < 0.01);

    runtime.drain_frame_callbacks(500_000_000);
    assert_eq!(scalar.get(), 0.0);
    assert!(!scalar.is_animating());
    assert!(!handle.is_running());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn listeners_see_every_frame_value() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(0.0, runtime.handle());
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        scalar.add_listener(move |value| seen.borrow_mut().push(value));
    }

    scalar.set(10.0);
    let _ = scalar.animate_to(20.0, AnimationSpec::tween(100, Easing::EaseOut));
    run_to_idle(&runtime, 0);

    let seen = seen.borrow();
    assert_eq!(seen.first(), Some(&10.0));
    assert_eq!(seen.last(), Some(&20.0));
    assert!(seen.len() > 3, "expected intermediate frames, got {seen:?}");
    assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn set_supersedes_running_tween() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(100.0, runtime.handle());

    let handle = scalar.animate_to(0.0, AnimationSpec::linear(500));
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(100_000_000);
    scalar.set(42.0);

    assert!(!handle.is_running());
    run_to_idle(&runtime, 200_000_000);
    assert_eq!(scalar.get(), 42.0);
}

#[test]
fn new_tween_replaces_old_one() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(0.0, runtime.handle());

    let first = scalar.animate_to(1.0, AnimationSpec::linear(300));
    let second = scalar.animate_to(0.5, AnimationSpec::linear(300));

    assert!(!first.is_running());
    assert!(second.is_running());
    run_to_idle(&runtime, 0);
    assert_eq!(scalar.get(), 0.5);
}

#[test]
fn stop_freezes_interpolated_value() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(200.0, runtime.handle());

    let _ = scalar.animate_to(0.0, AnimationSpec::linear(400));
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(100_000_000);
    let captured = scalar.stop();

    assert!((captured - 150.0).abs() < 0.01);
    assert!(!scalar.is_animating());
    run_to_idle(&runtime, 200_000_000);
    assert_eq!(scalar.get(), captured);
}

#[test]
fn cancelled_handle_leaves_value_in_place_and_stale_handles_are_inert() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(1.0, runtime.handle());

    let fade = scalar.animate_to(0.0, AnimationSpec::linear(300));
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(150_000_000);
    fade.cancel();
    let frozen = scalar.get();
    assert!(frozen > 0.0 && frozen < 1.0);

    let restore = scalar.animate_to(1.0, AnimationSpec::linear(300));
    fade.cancel();
    assert!(restore.is_running());
    run_to_idle(&runtime, 200_000_000);
    assert_eq!(scalar.get(), 1.0);
}

#[test]
fn immediate_spec_applies_without_frames() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(5.0, runtime.handle());

    let handle = scalar.animate_to(9.0, AnimationSpec::linear(0));

    assert_eq!(scalar.get(), 9.0);
    assert!(!handle.is_running());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn offset_adds_to_value_and_flattens() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(10.0, runtime.handle());
    let last = Rc::new(RefCell::new(None));
    {
        let last = Rc::clone(&last);
        scalar.add_listener(move |value| *last.borrow_mut() = Some(value));
    }

    scalar.set_offset(5.0);
    assert_eq!(scalar.get(), 15.0);
    assert_eq!(*last.borrow(), Some(15.0));

    scalar.flatten_offset();
    assert_eq!(scalar.get(), 15.0);
    assert_eq!(scalar.offset(), 0.0);
}

#[test]
fn removed_listener_is_not_called() {
    let runtime = Runtime::headless();
    let scalar = AnimatedScalar::new(0.0, runtime.handle());
    let calls = Rc::new(RefCell::new(0));
    let id = {
        let calls = Rc::clone(&calls);
        scalar.add_listener(move |_| *calls.borrow_mut() += 1)
    };

    scalar.set(1.0);
    assert!(scalar.remove_listener(id));
    assert!(!scalar.remove_listener(id));
    scalar.set(2.0);

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn listener_may_write_to_another_scalar() {
    let runtime = Runtime::headless();
    let position = AnimatedScalar::new(0.0, runtime.handle());
    let fill = AnimatedScalar::new(50.0, runtime.handle());
    {
        let fill = fill.clone();
        position.add_listener(move |x| fill.set(50.0 + x));
    }

    position.set(120.0);
    assert_eq!(fill.get(), 170.0);

    let _ = position.animate_to(0.0, AnimationSpec::linear(100));
    run_to_idle(&runtime, 0);
    assert_eq!(fill.get(), 50.0);
}
