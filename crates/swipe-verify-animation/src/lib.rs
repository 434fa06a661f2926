//! Animation system for the swipe-to-verify control.
//!
//! Provides [`AnimatedScalar`], an observable `f32` that can be set directly
//! or driven towards a target by a timed tween on the runtime's frame clock.

mod animated_scalar;
mod animation;

pub use animated_scalar::{AnimatedScalar, AnimationHandle, ListenerId};
pub use animation::{AnimationSpec, Easing};
