//! Normalized pointer events and the handler interface hosts call into.

use crate::services::DragContext;
use glam::Vec2;

/// Identifies a mouse button or touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Screen pixels, origin bottom-left
    pub screen_position: Vec2,
    pub pointer_id: PointerId,
}

impl PointerEvent {
    pub fn new(screen_position: Vec2, pointer_id: PointerId) -> Self {
        Self {
            screen_position,
            pointer_id,
        }
    }

    /// Event for the primary pointer.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), PointerId::default())
    }
}

/// Pointer phases delivered by the host frame loop (or [`super::PointerRouter`]).
///
/// For a drag the order is down, begin-drag, drag..., end-drag, up.
/// A plain tap is down, up.
pub trait PointerEventHandler {
    fn on_pointer_down(&mut self, event: &PointerEvent, ctx: &DragContext<'_>);
    fn on_begin_drag(&mut self, event: &PointerEvent);
    fn on_drag(&mut self, event: &PointerEvent, ctx: &DragContext<'_>);
    fn on_end_drag(&mut self, event: &PointerEvent);
    fn on_pointer_up(&mut self, event: &PointerEvent, ctx: &DragContext<'_>);
}
