//! The drag engine for a single interactive object.
//!
//! A [`Draggable`] owns its state exclusively: gesture timer, drag state,
//! drop-zone relations, anchor and the in-flight settle animation. The host
//! feeds it pointer phases (see [`crate::input::PointerEventHandler`]) and one
//! [`Draggable::tick`] per frame. Concrete object types plug their reactions in
//! through [`DragBehavior`].
//!
//! ## Lifecycle
//!
//! ```text
//! pointer down   -> grab offset captured, tap window opened (or double tap)
//! begin drag     -> Waiting -> Dragging, tap window cancelled, StartDrag
//! drag           -> position follows the pointer every frame
//! end drag       -> EndDrag
//! pointer up     -> drop resolution, Dragging -> Dropped
//! tick           -> tap expiry (Tap), settle animation, Dropped -> Waiting
//! ```

use crate::config::DragConfig;
use crate::error::DragError;
use crate::gesture::{TapDetector, TapEvent};
use crate::input::coords::{CoordinateSpace, Grab, OverlaySpace, Space, WorldSpace};
use crate::input::{DragState, PointerId};
use crate::profile_scope;
use crate::services::{DragContext, OverlayRect};
use crate::settle::{Destination, SettleHandle, SettleStep, Settler};
use crate::zone::{DropZone, ZoneId};
use glam::{Vec2, Vec3};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Reactions supplied by the concrete object type. All default to doing nothing.
pub trait DragBehavior {
    fn tap(&mut self) {}

    fn double_tap(&mut self) {}

    fn start_drag(&mut self) {}

    fn end_drag(&mut self) {}

    fn drop_on_drop_zone(&mut self, zone: &DropZone) {
        let _ = zone;
    }
}

impl DragBehavior for () {}

/// Where the object lives; decides its coordinate space for good.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    World(Vec3),
    /// Canvas-local position inside an overlay container
    Overlay {
        position: Vec2,
        canvas: Option<OverlayRect>,
    },
}

/// Target of a scripted [`Draggable::move_to_drop_zone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRef<'a> {
    Id(ZoneId),
    Name(&'a str),
}

impl From<ZoneId> for ZoneRef<'_> {
    fn from(id: ZoneId) -> Self {
        ZoneRef::Id(id)
    }
}

impl<'a> From<&'a str> for ZoneRef<'a> {
    fn from(name: &'a str) -> Self {
        ZoneRef::Name(name)
    }
}

pub struct Draggable<B: DragBehavior> {
    pub(crate) name: String,
    pub(crate) behavior: B,
    pub(crate) coords: Box<dyn CoordinateSpace>,
    pub(crate) config: DragConfig,
    pub(crate) state: DragState,
    pub(crate) position: Vec3,
    pub(crate) anchor_position: Vec3,
    pub(crate) current_drop_zone: Option<ZoneId>,
    pub(crate) previous_drop_zone: Option<ZoneId>,
    /// Empty means any zone is accepted
    pub(crate) allowed_zones: HashSet<ZoneId>,
    pub(crate) grab: Grab,
    pub(crate) pointer: Option<PointerId>,
    pub(crate) taps: TapDetector,
    pub(crate) settler: Settler,
    config_error: Option<DragError>,
}

impl<B: DragBehavior> Draggable<B> {
    pub fn new(name: impl Into<String>, placement: Placement, config: DragConfig, behavior: B) -> Self {
        let name = name.into();

        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(draggable = %name, error = %e, "Invalid drag config, using defaults");
                DragConfig::default()
            }
        };

        let (coords, position, config_error): (Box<dyn CoordinateSpace>, Vec3, Option<DragError>) =
            match placement {
                Placement::World(position) => {
                    (Box::new(WorldSpace::new(config.max_depth_offset)), position, None)
                }
                Placement::Overlay { position, canvas } => {
                    let error = canvas
                        .is_none()
                        .then(|| DragError::MissingOverlayContainer(name.clone()));
                    if let Some(ref e) = error {
                        warn!(error = %e, "Draggable configuration error");
                    }
                    (
                        Box::new(OverlaySpace::new(name.clone(), canvas)),
                        position.extend(0.0),
                        error,
                    )
                }
            };

        Self {
            name,
            behavior,
            coords,
            taps: TapDetector::new(config.tap_window),
            config,
            state: DragState::Waiting,
            position,
            anchor_position: position,
            current_drop_zone: None,
            previous_drop_zone: None,
            allowed_zones: HashSet::new(),
            grab: Grab::default(),
            pointer: None,
            settler: Settler::new(),
            config_error,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn space(&self) -> Space {
        self.coords.space()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn anchor_position(&self) -> Vec3 {
        self.anchor_position
    }

    pub fn current_drop_zone(&self) -> Option<ZoneId> {
        self.current_drop_zone
    }

    pub fn previous_drop_zone(&self) -> Option<ZoneId> {
        self.previous_drop_zone
    }

    /// Offset captured at the last pointer-down.
    pub fn pointer_offset(&self) -> Vec3 {
        self.grab.offset
    }

    pub fn is_tap_pending(&self) -> bool {
        self.taps.is_pending()
    }

    pub fn is_settling(&self) -> bool {
        self.settler.is_active()
    }

    /// Destination of the in-flight settle animation.
    pub fn settle_target(&self) -> Option<Vec3> {
        self.settler.active().map(|a| a.to)
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Configuration problem found at construction, if any.
    pub fn config_error(&self) -> Option<&DragError> {
        self.config_error.as_ref()
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut B {
        &mut self.behavior
    }

    // ========================================================================
    // Allowed zones
    // ========================================================================

    /// Restrict settling to these zones. An empty set accepts any zone.
    pub fn set_allowed_zones(&mut self, zones: impl IntoIterator<Item = ZoneId>) {
        self.allowed_zones = zones.into_iter().collect();
    }

    pub fn allow_any_zone(&mut self) {
        self.allowed_zones.clear();
    }

    pub fn allowed_zones(&self) -> &HashSet<ZoneId> {
        &self.allowed_zones
    }

    pub fn is_zone_allowed(&self, zone: ZoneId) -> bool {
        self.allowed_zones.is_empty() || self.allowed_zones.contains(&zone)
    }

    // ========================================================================
    // Scripted placement
    // ========================================================================

    /// Settle to `point` without touching the drop-zone relations.
    pub fn move_to_position(&mut self, point: Vec3) -> SettleHandle {
        self.start_settle(point, Destination::Position)
    }

    /// Place onto a zone by id or name, with the same checks as a pointer drop.
    /// `None` or an unknown name is reported and handled as a drop on nothing.
    pub fn move_to_drop_zone(&mut self, target: Option<ZoneRef<'_>>, ctx: &DragContext<'_>) -> crate::drop::DropOutcome {
        let candidate = match target {
            None => {
                warn!(draggable = %self.name, error = %DragError::NoTarget, "Invalid move target");
                None
            }
            Some(ZoneRef::Id(id)) => Some(id),
            Some(ZoneRef::Name(name)) => match ctx.zones.find_by_name(name) {
                Some(zone) => Some(zone.id),
                None => {
                    let error = DragError::UnknownZoneName(name.to_string());
                    warn!(draggable = %self.name, error = %error, "Invalid move target");
                    None
                }
            },
        };
        self.resolve_drop(candidate, ctx, true)
    }

    /// Replace the resting point used as the settle origin and fallback.
    pub fn set_anchor_position(&mut self, point: Vec3) {
        self.anchor_position = self.coords.native(point);
    }

    /// Stop the in-flight settle animation where it is.
    pub fn cancel_settle(&mut self) -> Option<SettleHandle> {
        self.settler.cancel_active()
    }

    pub(crate) fn start_settle(&mut self, to: Vec3, destination: Destination) -> SettleHandle {
        let from = self.anchor_position;
        let to = self.coords.native(to);
        self.position = from;
        debug!(draggable = %self.name, ?from, ?to, ?destination, "Settle started");
        self.settler
            .start(from, to, destination, self.config.settle_duration)
    }

    // ========================================================================
    // Frame update
    // ========================================================================

    /// Advance timers and animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32, ctx: &DragContext<'_>) {
        profile_scope!("draggable_tick");

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if let Some(TapEvent::Tap) = self.taps.advance(dt) {
            debug!(draggable = %self.name, "Tap");
            self.behavior.tap();
        }

        match self.settler.advance(dt) {
            Some(SettleStep::Moving(position)) => self.position = position,
            Some(SettleStep::Arrived {
                position,
                destination,
            }) => self.finish_settle(position, destination, ctx),
            None => {}
        }
    }

    fn finish_settle(&mut self, position: Vec3, destination: Destination, ctx: &DragContext<'_>) {
        self.position = position;
        self.anchor_position = position;
        if !self.state.is_dragging() {
            self.state = DragState::Waiting;
        }
        debug!(draggable = %self.name, ?position, "Settled");

        if let Destination::Zone(zone) = destination {
            self.resolve_arrival(zone, ctx);
        }
    }
}

impl<B: DragBehavior> std::fmt::Debug for Draggable<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draggable")
            .field("name", &self.name)
            .field("space", &self.space())
            .field("state", &self.state)
            .field("position", &self.position)
            .field("current_drop_zone", &self.current_drop_zone)
            .field("previous_drop_zone", &self.previous_drop_zone)
            .finish()
    }
}
