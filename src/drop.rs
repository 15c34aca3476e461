//! Drop resolution: turns a candidate zone into a settle target.
//!
//! Every entry point (pointer release, scripted move, settle arrival) funnels
//! through [`Draggable::resolve_drop`], so the existence and allowed-zone
//! checks apply uniformly.

use crate::draggable::{DragBehavior, Draggable};
use crate::error::DragError;
use crate::services::DragContext;
use crate::settle::Destination;
use crate::zone::{DropZone, ZoneId};
use glam::Vec3;
use tracing::{debug, info, warn};

/// Where a rejected or missing drop sends the object back to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallbackTarget {
    PreviousZone(ZoneId),
    Anchor(Vec3),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// New current zone; the object settles onto it
    Accepted(ZoneId),
    /// Candidate is already the current zone; nothing moves
    Unchanged(ZoneId),
    /// No usable candidate
    Fallback(FallbackTarget),
}

impl DropOutcome {
    pub fn zone(&self) -> Option<ZoneId> {
        match *self {
            DropOutcome::Accepted(zone) | DropOutcome::Unchanged(zone) => Some(zone),
            DropOutcome::Fallback(FallbackTarget::PreviousZone(zone)) => Some(zone),
            DropOutcome::Fallback(FallbackTarget::Anchor(_)) => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, DropOutcome::Accepted(_))
    }
}

impl<B: DragBehavior> Draggable<B> {
    /// Look the zone up and check it against the allowed set.
    fn admit<'z>(&self, zone: ZoneId, ctx: &DragContext<'z>) -> Result<&'z DropZone, DragError> {
        let found = ctx.zones.get(zone).ok_or(DragError::UnknownZone(zone))?;
        if !self.is_zone_allowed(zone) {
            return Err(DragError::ZoneNotAllowed {
                zone,
                name: found.name.clone(),
            });
        }
        Ok(found)
    }

    /// Resolve `candidate` into a settle target.
    ///
    /// With `animate` unset the relations and the hook are updated but no new
    /// animation starts; settle arrival uses this to confirm where it landed.
    pub(crate) fn resolve_drop(
        &mut self,
        candidate: Option<ZoneId>,
        ctx: &DragContext<'_>,
        animate: bool,
    ) -> DropOutcome {
        let Some(candidate) = candidate else {
            return self.drop_on_nothing(ctx);
        };

        let zone = match self.admit(candidate, ctx) {
            Ok(zone) => zone,
            Err(e) => {
                warn!(draggable = %self.name, error = %e, "Drop candidate rejected");
                return self.drop_on_nothing(ctx);
            }
        };

        if self.current_drop_zone == Some(candidate) {
            debug!(draggable = %self.name, zone = %zone.name, "Already on zone");
            return DropOutcome::Unchanged(candidate);
        }

        if let Some(current) = self.current_drop_zone {
            self.previous_drop_zone = Some(current);
        }
        self.current_drop_zone = Some(candidate);
        info!(draggable = %self.name, zone = %zone.name, "Dropped on zone");

        if animate {
            self.start_settle(zone.position, Destination::Zone(candidate));
        }
        self.behavior.drop_on_drop_zone(zone);

        DropOutcome::Accepted(candidate)
    }

    /// No usable candidate: back to the previous zone if it still admits us,
    /// otherwise back to the anchor.
    pub(crate) fn drop_on_nothing(&mut self, ctx: &DragContext<'_>) -> DropOutcome {
        if let Some(previous) = self.previous_drop_zone {
            match self.admit(previous, ctx) {
                Ok(zone) => {
                    debug!(draggable = %self.name, zone = %zone.name, "Returning to previous zone");
                    self.start_settle(zone.position, Destination::Zone(previous));
                    return DropOutcome::Fallback(FallbackTarget::PreviousZone(previous));
                }
                Err(e) => debug!(draggable = %self.name, error = %e, "Previous zone unusable"),
            }
        }

        let anchor = self.anchor_position;
        debug!(draggable = %self.name, ?anchor, "Returning to anchor");
        self.start_settle(anchor, Destination::Position);
        DropOutcome::Fallback(FallbackTarget::Anchor(anchor))
    }

    /// Settle arrival on a zone: confirm it is still acceptable and make it current.
    pub(crate) fn resolve_arrival(&mut self, zone: ZoneId, ctx: &DragContext<'_>) {
        self.resolve_drop(Some(zone), ctx, false);
    }
}
