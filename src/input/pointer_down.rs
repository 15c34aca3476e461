//! Pointer down: grab capture and tap / double-tap disambiguation.

use super::coords::Grab;
use super::event::PointerEvent;
use crate::draggable::{DragBehavior, Draggable};
use crate::gesture::TapEvent;
use crate::services::DragContext;
use tracing::{debug, trace};

impl<B: DragBehavior> Draggable<B> {
    pub fn pointer_down(&mut self, event: &PointerEvent, ctx: &DragContext<'_>) {
        if !self.owns(event) {
            trace!(draggable = %self.name, pointer = event.pointer_id.0, "Ignoring foreign pointer");
            return;
        }
        self.pointer = Some(event.pointer_id);

        self.grab = match self.coords.grab(event.screen_position, self.position, ctx) {
            Ok(grab) => grab,
            Err(e) => {
                trace!(draggable = %self.name, error = %e, "Grab projection failed");
                Grab {
                    offset: glam::Vec3::ZERO,
                    depth: self.position.z,
                }
            }
        };

        if let Some(TapEvent::DoubleTap) = self.taps.press() {
            debug!(draggable = %self.name, "Double tap");
            self.behavior.double_tap();
        }
    }

    /// True when `event` comes from the pointer this object is tracking, or none is tracked.
    pub(crate) fn owns(&self, event: &PointerEvent) -> bool {
        self.pointer.is_none_or(|id| id == event.pointer_id)
    }
}
