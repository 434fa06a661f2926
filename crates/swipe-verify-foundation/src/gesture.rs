//! Drag tracking for the swipe handle.
//!
//! Deltas are relative to the offset the handle had when the gesture began
//! (the baseline), so grabbing a handle that is still animating home does not
//! make it jump to the finger. The resulting offset is always clamped to
//! `[0, max_offset]`; when the track is narrower than the handle the range is
//! empty and every offset is 0.

use swipe_verify_graphics::Point;

use crate::layout::Track;
use crate::types::{DragEvent, PointerEvent, PointerEventKind, PointerId};

#[derive(Debug)]
pub struct GestureTracker {
    handle_size: f32,
    track: Track,
    baseline: f32,
    offset: f32,
    active: bool,
    /// Pointer that started the current gesture and where it went down.
    pointer: Option<(PointerId, Point)>,
}

impl GestureTracker {
    pub fn new(handle_size: f32) -> Self {
        Self {
            handle_size,
            track: Track::UNMEASURED,
            baseline: 0.0,
            offset: 0.0,
            active: false,
            pointer: None,
        }
    }

    pub fn handle_size(&self) -> f32 {
        self.handle_size
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn set_track(&mut self, track: Track) {
        self.track = track;
        self.baseline = self.clamp(self.baseline);
        self.offset = self.clamp(self.offset);
    }

    pub fn max_offset(&self) -> f32 {
        self.track.max_offset(self.handle_size)
    }

    /// Clamps a raw offset into the track's range.
    pub fn clamp(&self, raw: f32) -> f32 {
        let max = self.max_offset();
        if max.is_nan() || max <= 0.0 || raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, max)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Last clamped offset produced by [`GestureTracker::on_gesture_move`].
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Begins a gesture anchored at the handle's current offset.
    pub fn on_gesture_start(&mut self, current_offset: f32) {
        self.baseline = self.clamp(current_offset);
        self.offset = self.baseline;
        self.active = true;
        log::trace!("gesture start, baseline {}", self.baseline);
    }

    /// Applies the total horizontal travel `dx` and returns the clamped offset.
    pub fn on_gesture_move(&mut self, dx: f32) -> f32 {
        self.offset = self.clamp(self.baseline + dx);
        self.offset
    }

    /// Ends the gesture. Returns `false` if no gesture was in progress.
    pub fn on_gesture_end(&mut self) -> bool {
        self.pointer = None;
        std::mem::replace(&mut self.active, false)
    }

    /// Abandons the gesture without a release. Returns `false` if no gesture
    /// was in progress.
    pub fn on_gesture_cancel(&mut self) -> bool {
        self.pointer = None;
        let was_active = std::mem::replace(&mut self.active, false);
        if was_active {
            log::trace!("gesture cancelled at offset {}", self.offset);
        }
        was_active
    }

    /// Translates a raw pointer sample into a drag event.
    ///
    /// Only the pointer that went down first is followed; other pointers and
    /// the vertical axis are ignored.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        match event.kind {
            PointerEventKind::Down => {
                if self.pointer.is_some() {
                    return None;
                }
                self.pointer = Some((event.id, event.position));
                Some(DragEvent::Start)
            }
            PointerEventKind::Move => {
                let (id, down) = self.pointer?;
                (id == event.id).then(|| DragEvent::Move {
                    dx: event.position.x - down.x,
                })
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let (id, _) = self.pointer?;
                if id != event.id {
                    return None;
                }
                self.pointer = None;
                Some(if event.kind == PointerEventKind::Up {
                    DragEvent::End
                } else {
                    DragEvent::Cancel
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
