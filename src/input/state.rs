//! Drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Waiting  -> Dragging   (begin drag; only legal from Waiting)
//! Dragging -> Dropped    (pointer up, settle animation started)
//! Dragging -> Waiting    (pointer up, drop resolved to the zone already held)
//! Dropped  -> Waiting    (settle animation finished)
//! ```

/// Interaction state of one draggable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragState {
    /// At rest, or settling after a tap. Ready for a new drag.
    Waiting,
    /// Following the pointer
    Dragging,
    /// Released and animating toward its resolved destination
    Dropped,
}

impl Default for DragState {
    fn default() -> Self {
        Self::Waiting
    }
}

impl DragState {
    pub fn is_waiting(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// A drag may only begin from rest.
    pub fn can_begin_drag(&self) -> bool {
        self.is_waiting()
    }

    pub fn reset(&mut self) {
        *self = Self::Waiting;
    }
}
