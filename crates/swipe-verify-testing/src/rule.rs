//! Headless driver for a single control.
//!
//! [`SwipeTestRule`] owns a runtime, a control and a virtual frame clock, so
//! tests can script gestures and step animations deterministically.
//!
//! ```
//! use swipe_verify_testing::SwipeTestRule;
//!
//! let mut rule = SwipeTestRule::with_track(50.0, 350.0);
//! rule.swipe(300.0);
//! assert_eq!(rule.verified_count(), 1);
//! ```

use std::cell::Cell;
use std::rc::Rc;

use swipe_verify::{
    ConfigError, Rect, Runtime, SwipeVerify, SwipeVerifyConfig, SwipeVerifyFrame,
    VerificationStatus,
};

/// Frame interval of the virtual clock (~60 FPS).
pub const FRAME_NANOS: u64 = 16_666_667;

/// Frames pumped before [`SwipeTestRule::pump_until_idle`] gives up.
pub const MAX_IDLE_FRAMES: usize = 10_000;

pub struct SwipeTestRule {
    runtime: Runtime,
    control: SwipeVerify,
    verified: Rc<Cell<usize>>,
    frame_time_nanos: u64,
}

impl SwipeTestRule {
    /// Builds a control from `config`; the verified callback only counts calls.
    pub fn new(config: SwipeVerifyConfig) -> Result<Self, ConfigError> {
        Self::with_callback(config, || {})
    }

    /// Like [`SwipeTestRule::new`], also running `on_verified` after counting.
    pub fn with_callback(
        config: SwipeVerifyConfig,
        on_verified: impl Fn() + 'static,
    ) -> Result<Self, ConfigError> {
        let runtime = Runtime::headless();
        let verified = Rc::new(Cell::new(0));
        let control = {
            let verified = Rc::clone(&verified);
            SwipeVerify::new(config, runtime.handle(), move || {
                verified.set(verified.get() + 1);
                on_verified();
            })?
        };
        Ok(Self {
            runtime,
            control,
            verified,
            frame_time_nanos: 0,
        })
    }

    /// Default-configured control already laid out on a track of `width`.
    pub fn with_track(handle_size: f32, width: f32) -> Self {
        let mut rule = Self::new(SwipeVerifyConfig::new(handle_size))
            .expect("handle size must be positive");
        rule.layout(width);
        rule
    }

    pub fn control(&self) -> &SwipeVerify {
        &self.control
    }

    pub fn verified_count(&self) -> usize {
        self.verified.get()
    }

    pub fn status(&self) -> VerificationStatus {
        self.control.status()
    }

    pub fn percent(&self) -> u8 {
        self.control.percent()
    }

    pub fn frame(&self) -> SwipeVerifyFrame {
        self.control.frame()
    }

    /// Lays the track out at the origin with the handle's height.
    pub fn layout(&mut self, width: f32) {
        let height = self.control.config().button_size;
        self.control.on_layout(Rect::new(0.0, 0.0, width, height));
    }

    pub fn press(&mut self) {
        self.control.on_gesture_start();
    }

    /// Reports a total horizontal travel of `dx` since the press.
    pub fn move_to(&mut self, dx: f32) {
        self.control.on_gesture_move(dx);
    }

    pub fn release(&mut self) {
        self.control.on_gesture_end();
    }

    pub fn cancel(&mut self) {
        self.control.on_gesture_cancel();
    }

    /// Press, move to `dx` in ten steps with a frame after each, then release.
    pub fn swipe(&mut self, dx: f32) {
        self.press();
        let steps = 10;
        for i in 1..=steps {
            self.move_to(dx * i as f32 / steps as f32);
            self.advance_frame();
        }
        self.release();
    }

    /// Advances the virtual clock by one frame and runs due callbacks.
    pub fn advance_frame(&mut self) {
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos = self.frame_time_nanos.saturating_add(FRAME_NANOS);
    }

    /// Advances the virtual clock by at least `millis`.
    ///
    /// Frames are stepped one by one while animations are pending; once idle
    /// the clock jumps straight past `millis`.
    pub fn advance_time(&mut self, millis: u64) {
        let target = self
            .frame_time_nanos
            .saturating_add(millis.saturating_mul(1_000_000));
        while self.frame_time_nanos <= target {
            if !self.runtime.has_frame_callbacks() {
                let frames = (target - self.frame_time_nanos) / FRAME_NANOS + 1;
                self.frame_time_nanos = self
                    .frame_time_nanos
                    .saturating_add(frames.saturating_mul(FRAME_NANOS));
                break;
            }
            self.advance_frame();
        }
    }

    /// Runs frames until no animation is pending. Returns the frame count.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.has_frame_callbacks() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "animations still running after {frames} frames"
            );
            self.advance_frame();
            frames += 1;
        }
        log::debug!("idle after {frames} frames");
        frames
    }
}

#[cfg(test)]
#[path = "tests/rule_tests.rs"]
mod tests;
