//! Drag start, per-frame follow and drag end.

use super::event::PointerEvent;
use super::state::DragState;
use crate::constants::SLOW_DRAG_UPDATE_MS;
use crate::draggable::{DragBehavior, Draggable};
use crate::perf::ScopedTimer;
use crate::services::DragContext;
use tracing::{debug, trace};

impl<B: DragBehavior> Draggable<B> {
    /// Waiting -> Dragging. From any other state only the tap window is closed.
    pub fn begin_drag(&mut self, event: &PointerEvent) {
        if !self.owns(event) {
            return;
        }

        if self.taps.cancel() {
            trace!(draggable = %self.name, "Tap window cancelled by drag");
        }
        if !self.state.can_begin_drag() {
            trace!(draggable = %self.name, state = ?self.state, "Drag refused");
            return;
        }

        if let Some(handle) = self.settler.cancel_active() {
            debug!(draggable = %self.name, handle = handle.0, "Settle interrupted by drag");
        }

        self.state = DragState::Dragging;
        debug!(draggable = %self.name, position = ?self.position, "Drag started");
        self.behavior.start_drag();
    }

    /// Follow the pointer. A frame whose projection fails leaves the position as is.
    pub fn drag(&mut self, event: &PointerEvent, ctx: &DragContext<'_>) {
        if !self.owns(event) || !self.state.is_dragging() {
            return;
        }
        let _timer = ScopedTimer::new("drag_move", SLOW_DRAG_UPDATE_MS);

        self.taps.cancel();

        match self
            .coords
            .drag_position(event.screen_position, self.position, &self.grab, ctx)
        {
            Ok(position) => {
                trace!(draggable = %self.name, ?position, "Drag move");
                self.position = position;
            }
            Err(e) => trace!(draggable = %self.name, error = %e, "Skipping drag frame"),
        }
    }

    /// Notification only; the drop is resolved on pointer up.
    pub fn end_drag(&mut self, event: &PointerEvent) {
        if !self.owns(event) || !self.state.is_dragging() {
            return;
        }
        debug!(draggable = %self.name, position = ?self.position, "Drag ended");
        self.behavior.end_drag();
    }
}
