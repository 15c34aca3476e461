//! Pointer up: drop-target lookup and resolution.

use super::event::PointerEvent;
use super::state::DragState;
use crate::draggable::{DragBehavior, Draggable};
use crate::drop::DropOutcome;
use crate::services::DragContext;
use tracing::trace;

impl<B: DragBehavior> Draggable<B> {
    /// Resolve the drop under the release point. Fires on every release,
    /// whether or not a drag took place.
    pub fn release(&mut self, event: &PointerEvent, ctx: &DragContext<'_>) -> Option<DropOutcome> {
        if !self.owns(event) {
            trace!(draggable = %self.name, pointer = event.pointer_id.0, "Ignoring foreign pointer");
            return None;
        }
        self.pointer = None;

        let was_dragging = self.state.is_dragging();
        let candidate = self.coords.drop_candidate(event.screen_position, ctx);
        let outcome = self.resolve_drop(candidate, ctx, true);

        if let DropOutcome::Accepted(id) = outcome {
            if let Some(zone) = ctx.zones.get(id) {
                zone.acknowledge_drop(&self.name);
            }
        }

        if was_dragging {
            self.state = if self.settler.is_active() {
                DragState::Dropped
            } else {
                DragState::Waiting
            };
        }

        Some(outcome)
    }
}
