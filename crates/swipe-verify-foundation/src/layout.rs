use swipe_verify_graphics::{Point, Rect};

/// Horizontal region the handle travels within.
///
/// Zero-sized until the first layout pass, which keeps every derived range
/// empty instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Track {
    pub width: f32,
    pub height: f32,
}

impl Track {
    pub const UNMEASURED: Track = Track {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Builds a track from a measured rectangle; non-finite or negative
    /// extents are treated as zero.
    pub fn from_rect(rect: Rect) -> Self {
        fn sanitize(extent: f32) -> f32 {
            if extent.is_finite() && extent > 0.0 {
                extent
            } else {
                0.0
            }
        }
        Self {
            width: sanitize(rect.width),
            height: sanitize(rect.height),
        }
    }

    /// Travel available to a handle of `handle_size`. Negative when the
    /// track is narrower than the handle.
    pub fn max_offset(&self, handle_size: f32) -> f32 {
        self.width - handle_size
    }
}

/// Receives the host's layout callbacks for the track view.
#[derive(Debug, Default)]
pub struct LayoutObserver {
    track: Track,
    origin: Point,
    measured: bool,
}

impl LayoutObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a layout pass. Returns `true` when the track size changed.
    pub fn on_layout(&mut self, rect: Rect) -> bool {
        let track = Track::from_rect(rect);
        let changed = !self.measured || track != self.track;
        self.origin = rect.origin();
        self.measured = true;
        if changed {
            log::debug!(
                "track measured: {}x{} at ({}, {})",
                track.width,
                track.height,
                rect.x,
                rect.y
            );
            self.track = track;
        }
        changed
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
