//! Frame runtime shared by the swipe-to-verify crates.
//!
//! Everything here is single-threaded: gesture callbacks, layout callbacks and
//! animation frames all run on the host's event loop. The host drives time by
//! calling [`Runtime::drain_frame_callbacks`] once per frame.

mod frame_clock;
mod owned;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use owned::Owned;
pub use platform::{DefaultScheduler, FrameScheduler};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
