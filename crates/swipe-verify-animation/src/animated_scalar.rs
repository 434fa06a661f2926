//! Observable scalar driven by direct writes or frame-clock tweens.
//!
//! The rendered value is `value + offset`. Writers own the value on a
//! last-writer-wins basis: [`AnimatedScalar::set`], [`AnimatedScalar::stop`]
//! and a new [`AnimatedScalar::animate_to`] all supersede the running tween,
//! so an animation never fights with direct input. Every change of the
//! rendered value is pushed synchronously to the registered listeners,
//! including each animation frame.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use swipe_verify_core::{FrameCallbackRegistration, RuntimeHandle};

use crate::animation::AnimationSpec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(f32)>;

struct Tween {
    from: f32,
    to: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

struct ScalarState {
    value: f32,
    offset: f32,
    /// Bumped by every writer; frames and handles from older generations are stale.
    generation: u64,
    tween: Option<Tween>,
}

impl ScalarState {
    fn rendered(&self) -> f32 {
        self.value + self.offset
    }

    fn stop_tween(&mut self) {
        self.generation += 1;
        // Dropping the registration cancels the pending frame callback.
        self.tween = None;
    }
}

struct Shared {
    runtime: RuntimeHandle,
    state: RefCell<ScalarState>,
    listeners: RefCell<SmallVec<[(ListenerId, Listener); 2]>>,
    next_listener_id: Cell<u64>,
}

/// Shared handle to an animatable `f32`. Clones observe the same value.
#[derive(Clone)]
pub struct AnimatedScalar {
    shared: Rc<Shared>,
}

impl AnimatedScalar {
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        Self {
            shared: Rc::new(Shared {
                runtime,
                state: RefCell::new(ScalarState {
                    value: initial,
                    offset: 0.0,
                    generation: 0,
                    tween: None,
                }),
                listeners: RefCell::new(SmallVec::new()),
                next_listener_id: Cell::new(1),
            }),
        }
    }

    /// Rendered value: base value plus offset.
    pub fn get(&self) -> f32 {
        self.shared.state.borrow().rendered()
    }

    pub fn offset(&self) -> f32 {
        self.shared.state.borrow().offset
    }

    pub fn is_animating(&self) -> bool {
        self.shared.state.borrow().tween.is_some()
    }

    /// Target of the running tween, if any.
    pub fn target(&self) -> Option<f32> {
        self.shared.state.borrow().tween.as_ref().map(|tween| tween.to)
    }

    /// Stops any running tween and writes the base value immediately.
    pub fn set(&self, value: f32) {
        self.write(|state| {
            state.stop_tween();
            state.value = value;
        });
    }

    /// Sets the offset added on top of the base value.
    ///
    /// A running tween keeps animating the base value.
    pub fn set_offset(&self, offset: f32) {
        self.write(|state| state.offset = offset);
    }

    /// Folds the offset into the base value; the rendered value is unchanged.
    pub fn flatten_offset(&self) {
        let mut state = self.shared.state.borrow_mut();
        let offset = std::mem::take(&mut state.offset);
        state.value += offset;
    }

    /// Stops the running tween where it is and returns the rendered value.
    pub fn stop(&self) -> f32 {
        let mut state = self.shared.state.borrow_mut();
        if state.tween.is_some() {
            state.stop_tween();
        }
        state.rendered()
    }

    /// Tweens the base value to `target`, superseding any running tween.
    ///
    /// A zero-length spec without delay applies the target immediately.
    pub fn animate_to(&self, target: f32, spec: AnimationSpec) -> AnimationHandle {
        let generation = if spec.is_immediate() {
            self.write(|state| {
                state.stop_tween();
                state.value = target;
            });
            self.shared.state.borrow().generation
        } else {
            let generation = {
                let mut state = self.shared.state.borrow_mut();
                state.stop_tween();
                state.tween = Some(Tween {
                    from: state.value,
                    to: target,
                    spec,
                    start_time_nanos: None,
                    registration: None,
                });
                state.generation
            };
            Self::schedule_frame(&self.shared, generation);
            generation
        };
        log::trace!(
            "animate_to {target} over {}ms (generation {generation})",
            spec.duration_millis
        );
        AnimationHandle {
            shared: Rc::downgrade(&self.shared),
            generation,
        }
    }

    /// Registers a listener called with the rendered value after every change.
    pub fn add_listener(&self, listener: impl Fn(f32) + 'static) -> ListenerId {
        let id = ListenerId(self.shared.next_listener_id.get());
        self.shared.next_listener_id.set(id.0 + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.shared.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn write(&self, f: impl FnOnce(&mut ScalarState)) {
        let changed = {
            let mut state = self.shared.state.borrow_mut();
            let before = state.rendered();
            f(&mut state);
            state.rendered() != before
        };
        if changed {
            Self::notify(&self.shared);
        }
    }

    fn notify(shared: &Shared) {
        let value = shared.state.borrow().rendered();
        // Snapshot the listeners so they may add, remove or write re-entrantly.
        let listeners: SmallVec<[Listener; 2]> = shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    fn schedule_frame(shared: &Rc<Shared>, generation: u64) {
        let weak = Rc::downgrade(shared);
        let registration = shared.runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(shared) = weak.upgrade() {
                Self::on_frame(&shared, generation, time);
            }
        });
        let mut state = shared.state.borrow_mut();
        if state.generation != generation {
            return;
        }
        if let Some(tween) = state.tween.as_mut() {
            tween.registration = Some(registration);
        }
    }

    fn on_frame(shared: &Rc<Shared>, generation: u64, frame_time_nanos: u64) {
        let (changed, finished) = {
            let mut guard = shared.state.borrow_mut();
            let state = &mut *guard;
            if state.generation != generation {
                return;
            }
            let Some(tween) = state.tween.as_mut() else {
                return;
            };
            tween.registration = None;
            let start = *tween.start_time_nanos.get_or_insert(frame_time_nanos);
            match tween.spec.progress_at(frame_time_nanos.saturating_sub(start)) {
                None => (false, false),
                Some((eased, done)) => {
                    let next = if done {
                        tween.to
                    } else {
                        tween.from + (tween.to - tween.from) * eased
                    };
                    let changed = next != state.value;
                    state.value = next;
                    if done {
                        state.tween = None;
                    }
                    (changed, done)
                }
            }
        };

        if changed {
            Self::notify(shared);
        }
        if !finished && shared.state.borrow().generation == generation {
            Self::schedule_frame(shared, generation);
        }
    }
}

impl fmt::Debug for AnimatedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("AnimatedScalar")
            .field("value", &state.value)
            .field("offset", &state.offset)
            .field("animating", &state.tween.is_some())
            .finish()
    }
}

/// Handle to one tween started by [`AnimatedScalar::animate_to`].
///
/// Dropping the handle does not stop the tween.
#[derive(Clone)]
pub struct AnimationHandle {
    shared: Weak<Shared>,
    generation: u64,
}

impl AnimationHandle {
    pub fn is_running(&self) -> bool {
        self.shared.upgrade().is_some_and(|shared| {
            let state = shared.state.borrow();
            state.generation == self.generation && state.tween.is_some()
        })
    }

    /// Stops the tween at its current value. No-op once superseded or finished.
    pub fn cancel(&self) {
        if let Some(shared) = self.shared.upgrade() {
            let mut state = shared.state.borrow_mut();
            if state.generation == self.generation && state.tween.is_some() {
                state.stop_tween();
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/animated_scalar_tests.rs"]
mod tests;
