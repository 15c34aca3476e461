//! Pointer input handling for draggables.
//!
//! ## Architecture
//!
//! The drag lifecycle is an explicit state machine ([`DragState`]). Pointer
//! phases arrive through [`PointerEventHandler`]; the coordinate math for the
//! object's space sits behind [`coords::CoordinateSpace`] so the handlers are
//! written once for world and overlay objects alike.
//!
//! ## Modules
//!
//! - `state` - Drag state machine enum and helper methods
//! - `event` - Normalized pointer events and the handler trait
//! - `coords` - World / overlay projection strategies
//! - `pointer_down` - Grab capture and tap disambiguation
//! - `drag` - Begin drag, per-frame follow, end drag
//! - `pointer_up` - Drop lookup on release
//! - `router` - Raw press/move/release stream to drag phases

pub mod coords;
mod drag;
mod event;
mod pointer_down;
mod pointer_up;
mod router;
mod state;

pub use coords::{Grab, Space};
pub use event::{PointerEvent, PointerEventHandler, PointerId};
pub use router::{PointerRouter, RawPointer};
pub use state::DragState;

use crate::draggable::{DragBehavior, Draggable};
use crate::services::DragContext;

impl<B: DragBehavior> PointerEventHandler for Draggable<B> {
    fn on_pointer_down(&mut self, event: &PointerEvent, ctx: &DragContext<'_>) {
        self.pointer_down(event, ctx);
    }

    fn on_begin_drag(&mut self, event: &PointerEvent) {
        self.begin_drag(event);
    }

    fn on_drag(&mut self, event: &PointerEvent, ctx: &DragContext<'_>) {
        self.drag(event, ctx);
    }

    fn on_end_drag(&mut self, event: &PointerEvent) {
        self.end_drag(event);
    }

    fn on_pointer_up(&mut self, event: &PointerEvent, ctx: &DragContext<'_>) {
        self.release(event, ctx);
    }
}
