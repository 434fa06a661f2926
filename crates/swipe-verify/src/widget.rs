//! The swipe-to-verify control as seen by a host view layer.
//!
//! [`SwipeVerify`] routes layout and gesture input through the tracker and
//! the controller, then applies the controller's outcome to the presentation.
//! State borrows never outlive a single step, so host callbacks (offset
//! listeners and the verified callback) may call back into the control.

use std::cell::Cell;
use std::rc::Rc;

use swipe_verify_animation::ListenerId;
use swipe_verify_core::{Owned, RuntimeHandle};
use swipe_verify_foundation::{DragEvent, GestureTracker, LayoutObserver, PointerEvent, Track};
use swipe_verify_graphics::Rect;

use crate::config::SwipeVerifyConfig;
use crate::controller::{
    MoveOutcome, ReleaseOutcome, StartOutcome, VerificationController, VerificationStatus,
};
use crate::error::ConfigError;
use crate::presentation::{PresentationBinder, PresentationTiming};

/// Everything the view layer needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeVerifyFrame {
    pub status: VerificationStatus,
    pub percent: u8,
    pub handle_offset: f32,
    pub fill_width: f32,
    pub handle_opacity: f32,
    pub disabled: bool,
    pub track: Track,
}

struct SwipeState {
    controller: VerificationController,
    tracker: GestureTracker,
    layout: LayoutObserver,
}

struct SwipeVerifyInner {
    config: SwipeVerifyConfig,
    state: Owned<SwipeState>,
    presentation: PresentationBinder,
    disabled: Cell<bool>,
    on_verified: Box<dyn Fn()>,
}

/// Cheaply clonable handle to one control.
#[derive(Clone)]
pub struct SwipeVerify {
    inner: Rc<SwipeVerifyInner>,
}

impl SwipeVerify {
    pub fn new(
        config: SwipeVerifyConfig,
        runtime: RuntimeHandle,
        on_verified: impl Fn() + 'static,
    ) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("rejecting swipe-verify config: {err}");
            return Err(err);
        }
        let presentation = PresentationBinder::new(
            runtime,
            config.button_size,
            PresentationTiming::from_config(&config),
        );
        let state = SwipeState {
            controller: VerificationController::new(),
            tracker: GestureTracker::new(config.button_size),
            layout: LayoutObserver::new(),
        };
        log::debug!(
            "swipe-verify created: button {}, reset {}ms, fade {}ms, hide on verify {}",
            config.button_size,
            config.reset_duration_millis,
            config.ok_button.duration_millis,
            !config.ok_button.visible
        );
        Ok(Self {
            inner: Rc::new(SwipeVerifyInner {
                disabled: Cell::new(config.disable),
                config,
                state: Owned::new(state),
                presentation,
                on_verified: Box::new(on_verified),
            }),
        })
    }

    pub fn config(&self) -> &SwipeVerifyConfig {
        &self.inner.config
    }

    pub fn presentation(&self) -> &PresentationBinder {
        &self.inner.presentation
    }

    pub fn status(&self) -> VerificationStatus {
        self.inner.state.with(|state| state.controller.status())
    }

    pub fn percent(&self) -> u8 {
        self.inner.state.with(|state| state.controller.percent())
    }

    pub fn track(&self) -> Track {
        self.inner.state.with(|state| state.layout.track())
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.disabled.get()
    }

    pub fn frame(&self) -> SwipeVerifyFrame {
        let (status, percent, track) = self.inner.state.with(|state| {
            (
                state.controller.status(),
                state.controller.percent(),
                state.layout.track(),
            )
        });
        let snapshot = self.inner.presentation.snapshot();
        SwipeVerifyFrame {
            status,
            percent,
            handle_offset: snapshot.handle_offset,
            fill_width: snapshot.fill_width,
            handle_opacity: snapshot.handle_opacity,
            disabled: self.is_disabled(),
            track,
        }
    }

    /// Disabling mid-gesture cancels that gesture first.
    pub fn set_disabled(&self, disabled: bool) {
        if disabled && !self.inner.disabled.get() {
            self.on_gesture_cancel();
        }
        self.inner.disabled.set(disabled);
    }

    pub fn add_offset_listener(&self, listener: impl Fn(f32) + 'static) -> ListenerId {
        self.inner.presentation.add_offset_listener(listener)
    }

    pub fn remove_offset_listener(&self, id: ListenerId) -> bool {
        self.inner.presentation.remove_offset_listener(id)
    }

    /// Host layout callback for the track view.
    ///
    /// A new size re-clamps the handle and, mid-drag, recomputes the percent.
    /// The verification status is never changed.
    pub fn on_layout(&self, rect: Rect) {
        let change = self.inner.state.update(|state| {
            if !state.layout.on_layout(rect) {
                return None;
            }
            state.tracker.set_track(state.layout.track());
            Some(state.controller.status())
        });
        let Some(status) = change else {
            return;
        };

        let presentation = &self.inner.presentation;
        let current = presentation.handle_offset();
        let (clamped, max_offset) = self
            .inner
            .state
            .with(|state| (state.tracker.clamp(current), state.tracker.max_offset()));
        if status == VerificationStatus::Dragging {
            self.inner
                .state
                .update(|state| state.controller.on_track_changed(clamped, max_offset));
        }
        if clamped != current {
            presentation.apply_offset(clamped);
            if status == VerificationStatus::Idle && clamped > 0.0 {
                let _ = presentation.animate_home();
            }
        }
    }

    pub fn dispatch(&self, event: DragEvent) {
        match event {
            DragEvent::Start => self.on_gesture_start(),
            DragEvent::Move { dx } => self.on_gesture_move(dx),
            DragEvent::End => self.on_gesture_end(),
            DragEvent::Cancel => self.on_gesture_cancel(),
        }
    }

    pub fn on_pointer_event(&self, event: &PointerEvent) {
        if self.is_disabled() {
            return;
        }
        let drag = self
            .inner
            .state
            .update(|state| state.tracker.on_pointer_event(event));
        if let Some(drag) = drag {
            self.dispatch(drag);
        }
    }

    pub fn on_gesture_start(&self) {
        if self.is_disabled() {
            log::trace!("gesture start ignored: disabled");
            return;
        }
        let outcome = self
            .inner
            .state
            .update(|state| state.controller.on_gesture_start());
        if outcome == StartOutcome::Ignored {
            return;
        }
        let presentation = &self.inner.presentation;
        let current = presentation.begin_drag();
        let baseline = self.inner.state.update(|state| {
            state.tracker.on_gesture_start(current);
            let baseline = state.tracker.baseline();
            state
                .controller
                .on_baseline(baseline, state.tracker.max_offset());
            baseline
        });
        if baseline != current {
            presentation.apply_offset(baseline);
        }
    }

    /// `dx` is the total horizontal travel since the gesture started.
    pub fn on_gesture_move(&self, dx: f32) {
        if self.is_disabled() {
            return;
        }
        let outcome = self.inner.state.update(|state| {
            let offset = state.tracker.on_gesture_move(dx);
            let max_offset = state.tracker.max_offset();
            state.controller.on_gesture_move(offset, max_offset)
        });
        match outcome {
            MoveOutcome::Applied { offset, .. } => self.inner.presentation.apply_offset(offset),
            MoveOutcome::PinnedToZero => self.inner.presentation.apply_offset(0.0),
            MoveOutcome::Ignored => {}
        }
    }

    pub fn on_gesture_end(&self) {
        if self.is_disabled() {
            return;
        }
        let outcome = self.inner.state.update(|state| {
            state.tracker.on_gesture_end();
            state.controller.on_release()
        });
        self.apply_release(outcome);
    }

    pub fn on_gesture_cancel(&self) {
        let policy = self.inner.config.cancel_policy;
        let outcome = self.inner.state.update(|state| {
            state.tracker.on_gesture_cancel();
            state.controller.on_cancel(policy)
        });
        self.apply_release(outcome);
    }

    /// Returns the control to `Idle`: percent 0, handle sliding home and
    /// fading back in. No-op while already idle.
    pub fn reset(&self) {
        let reset = self.inner.state.update(|state| {
            state.tracker.on_gesture_cancel();
            state.controller.reset()
        });
        if !reset {
            log::trace!("reset ignored: already idle");
            return;
        }
        self.revert_presentation();
    }

    fn apply_release(&self, outcome: ReleaseOutcome) {
        match outcome {
            ReleaseOutcome::Verified => {
                if !self.inner.config.ok_button.visible {
                    let _ = self.inner.presentation.hide_handle();
                }
                log::debug!("verified");
                // State is committed and no borrow is held: the callback may
                // call reset() or read the control.
                (self.inner.on_verified)();
            }
            ReleaseOutcome::Reverted => self.revert_presentation(),
            ReleaseOutcome::Ignored => {}
        }
    }

    fn revert_presentation(&self) {
        let presentation = &self.inner.presentation;
        let _ = presentation.animate_home();
        let _ = presentation.show_handle();
    }
}

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod tests;
