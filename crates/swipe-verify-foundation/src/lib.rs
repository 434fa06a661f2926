//! Input and measurement building blocks for the swipe-to-verify control.
//!
//! [`LayoutObserver`] turns host layout callbacks into a [`Track`], and
//! [`GestureTracker`] turns drag or pointer events into handle offsets that
//! are always clamped to the track.

mod gesture;
mod layout;
mod types;

pub use gesture::GestureTracker;
pub use layout::{LayoutObserver, Track};
pub use types::{DragEvent, PointerEvent, PointerEventKind, PointerId};
