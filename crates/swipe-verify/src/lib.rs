//! Swipe-to-verify control.
//!
//! A handle is dragged along a track; releasing it at the far edge verifies
//! once and fires the host's callback. This crate holds the state machine and
//! the animated outputs (handle offset, trailing fill width, handle opacity).
//! Drawing is left to the host, which feeds layout and pointer input in and
//! reads [`SwipeVerifyFrame`]s out.
//!
//! ```
//! use swipe_verify::prelude::*;
//!
//! let runtime = Runtime::headless();
//! let control = SwipeVerify::new(SwipeVerifyConfig::new(50.0), runtime.handle(), || {
//!     println!("verified");
//! })
//! .expect("valid config");
//!
//! control.on_layout(Rect::new(0.0, 0.0, 350.0, 50.0));
//! control.on_gesture_start();
//! control.on_gesture_move(300.0);
//! control.on_gesture_end();
//! assert_eq!(control.status(), VerificationStatus::Verified);
//! ```

mod config;
mod controller;
mod error;
mod presentation;
mod widget;

pub use config::{
    CancelPolicy, OkButton, SwipeVerifyConfig, DEFAULT_OK_BUTTON_DURATION_MILLIS,
    DEFAULT_RESET_DURATION_MILLIS, MAX_DURATION_MILLIS,
};
pub use controller::{
    percent_of, MoveOutcome, ReleaseOutcome, StartOutcome, VerificationController,
    VerificationStatus, VERIFY_THRESHOLD_PERCENT,
};
pub use error::ConfigError;
pub use presentation::{PresentationBinder, PresentationSnapshot, PresentationTiming};
pub use widget::{SwipeVerify, SwipeVerifyFrame};

pub use swipe_verify_animation::{AnimationSpec, Easing, ListenerId};
pub use swipe_verify_core::{Runtime, RuntimeHandle};
pub use swipe_verify_foundation::{DragEvent, PointerEvent, PointerEventKind, Track};
pub use swipe_verify_graphics::{Color, Point, Rect};

pub mod prelude {
    pub use crate::config::{CancelPolicy, SwipeVerifyConfig};
    pub use crate::controller::VerificationStatus;
    pub use crate::widget::{SwipeVerify, SwipeVerifyFrame};
    pub use swipe_verify_core::Runtime;
    pub use swipe_verify_foundation::{DragEvent, PointerEvent, PointerEventKind};
    pub use swipe_verify_graphics::{Point, Rect};
}
