//! Host integration traits for the frame runtime.

/// Schedules frames on behalf of the runtime.
///
/// The runtime calls [`FrameScheduler::schedule_frame`] whenever a frame
/// callback is registered, so hosts only need to pump frames while an
/// animation is actually running.
pub trait FrameScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler for hosts that poll [`crate::Runtime::needs_frame`] instead.
#[derive(Default, Debug, Clone, Copy)]
pub struct DefaultScheduler;

impl FrameScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}
