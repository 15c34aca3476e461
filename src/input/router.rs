//! Raw pointer stream to drag phases.
//!
//! Hosts that only see press / move / release can feed them through a
//! [`PointerRouter`], which synthesizes begin-drag once the pointer travels
//! past the drag threshold and end-drag ahead of the release. Only the
//! pointer that pressed is tracked; other contacts are ignored until it lifts.

use super::event::{PointerEvent, PointerEventHandler, PointerId};
use crate::config::DragConfig;
use crate::services::DragContext;
use glam::Vec2;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawPointer {
    Pressed(PointerEvent),
    Moved(PointerEvent),
    Released(PointerEvent),
}

impl RawPointer {
    pub fn event(&self) -> &PointerEvent {
        match self {
            RawPointer::Pressed(e) | RawPointer::Moved(e) | RawPointer::Released(e) => e,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    pointer: PointerId,
    origin: Vec2,
    dragging: bool,
}

#[derive(Debug, Clone)]
pub struct PointerRouter {
    threshold: f32,
    press: Option<Press>,
}

impl PointerRouter {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            press: None,
        }
    }

    pub fn from_config(config: &DragConfig) -> Self {
        Self::new(config.drag_threshold)
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }

    /// Forget the tracked press without notifying anyone.
    pub fn reset(&mut self) {
        self.press = None;
    }

    pub fn feed(&mut self, raw: &RawPointer, target: &mut impl PointerEventHandler, ctx: &DragContext<'_>) {
        let event = raw.event();

        match (raw, self.press.as_mut()) {
            (RawPointer::Pressed(_), None) => {
                self.press = Some(Press {
                    pointer: event.pointer_id,
                    origin: event.screen_position,
                    dragging: false,
                });
                target.on_pointer_down(event, ctx);
            }
            (_, Some(press)) if press.pointer != event.pointer_id => {
                trace!(pointer = event.pointer_id.0, "Ignoring second pointer");
            }
            (RawPointer::Moved(_), Some(press)) => {
                if !press.dragging
                    && press.origin.distance(event.screen_position) >= self.threshold
                {
                    press.dragging = true;
                    target.on_begin_drag(event);
                }
                if press.dragging {
                    target.on_drag(event, ctx);
                }
            }
            (RawPointer::Released(_), Some(press)) => {
                if press.dragging {
                    target.on_end_drag(event);
                }
                self.press = None;
                target.on_pointer_up(event, ctx);
            }
            // Repeated press from the tracked pointer, or move/release with nothing pressed
            _ => trace!(pointer = event.pointer_id.0, "Unpaired pointer event"),
        }
    }
}
