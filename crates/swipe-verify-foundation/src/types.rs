use swipe_verify_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer sample from the host platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

/// Horizontal drag stream as delivered by a pan responder.
///
/// `dx` is the total horizontal travel since the gesture started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Start,
    Move { dx: f32 },
    End,
    Cancel,
}
