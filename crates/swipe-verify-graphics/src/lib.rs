//! Pure geometry and color data consumed by the swipe-to-verify crates.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;
