//! Animated outputs of the control.
//!
//! The handle position is the canonical drag offset. Fill width is derived
//! from it by a listener (`handle_size + offset`), so it follows every change
//! in the same call, whether the change came from a drag or from a frame of
//! the reset tween.

use swipe_verify_animation::{AnimatedScalar, AnimationHandle, AnimationSpec, ListenerId};
use swipe_verify_core::RuntimeHandle;

use crate::config::SwipeVerifyConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationTiming {
    pub reset: AnimationSpec,
    pub fade: AnimationSpec,
}

impl PresentationTiming {
    pub fn from_config(config: &SwipeVerifyConfig) -> Self {
        Self {
            reset: config.reset_spec(),
            fade: config.fade_spec(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationSnapshot {
    pub handle_offset: f32,
    pub fill_width: f32,
    pub handle_opacity: f32,
}

pub struct PresentationBinder {
    position: AnimatedScalar,
    fill: AnimatedScalar,
    opacity: AnimatedScalar,
    timing: PresentationTiming,
}

impl PresentationBinder {
    pub fn new(runtime: RuntimeHandle, handle_size: f32, timing: PresentationTiming) -> Self {
        let position = AnimatedScalar::new(0.0, runtime.clone());
        let fill = AnimatedScalar::new(handle_size, runtime.clone());
        let opacity = AnimatedScalar::new(1.0, runtime);
        {
            let fill = fill.clone();
            position.add_listener(move |offset| fill.set(handle_size + offset));
        }
        Self {
            position,
            fill,
            opacity,
            timing,
        }
    }

    /// Takes the handle from any running tween and returns where it stopped.
    pub fn begin_drag(&self) -> f32 {
        self.position.stop()
    }

    /// Moves the handle immediately.
    pub fn apply_offset(&self, offset: f32) {
        self.position.set(offset);
    }

    /// Slides the handle back to rest over the reset duration.
    pub fn animate_home(&self) -> AnimationHandle {
        self.position.animate_to(0.0, self.timing.reset)
    }

    pub fn show_handle(&self) -> AnimationHandle {
        self.opacity.animate_to(1.0, self.timing.fade)
    }

    pub fn hide_handle(&self) -> AnimationHandle {
        self.opacity.animate_to(0.0, self.timing.fade)
    }

    pub fn handle_offset(&self) -> f32 {
        self.position.get()
    }

    pub fn fill_width(&self) -> f32 {
        self.fill.get()
    }

    pub fn handle_opacity(&self) -> f32 {
        self.opacity.get()
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating() || self.opacity.is_animating()
    }

    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            handle_offset: self.handle_offset(),
            fill_width: self.fill_width(),
            handle_opacity: self.handle_opacity(),
        }
    }

    /// Subscribes to every handle offset change, including animation frames.
    pub fn add_offset_listener(&self, listener: impl Fn(f32) + 'static) -> ListenerId {
        self.position.add_listener(listener)
    }

    pub fn remove_offset_listener(&self, id: ListenerId) -> bool {
        self.position.remove_listener(id)
    }

    pub fn fill(&self) -> &AnimatedScalar {
        &self.fill
    }

    pub fn opacity(&self) -> &AnimatedScalar {
        &self.opacity
    }
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;
