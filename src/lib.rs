//! Pointer-driven drag and drop.
//!
//! A [`Draggable`] picks an object up under the pointer, moves it in world or
//! overlay space, resolves the drop zone under the release point and settles
//! the object onto it. Bare taps and double taps are told apart on the same
//! object. Hit testing and projection are supplied by the host through
//! [`SpatialQuery`] and [`Projection`]; [`Scene`] bundles reference versions.

pub mod camera;
pub mod config;
pub mod constants;
pub mod draggable;
pub mod drop;
pub mod error;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod math;
pub mod perf;
pub mod scene;
pub mod services;
pub mod settle;
pub mod spatial_index;
pub mod zone;

pub use camera::{Camera, CameraKind};
pub use config::DragConfig;
pub use draggable::{DragBehavior, Draggable, Placement, ZoneRef};
pub use drop::{DropOutcome, FallbackTarget};
pub use error::{ConfigError, ConfigResult, DragError};
pub use gesture::{TapDetector, TapEvent};
pub use input::{
    DragState, Grab, PointerEvent, PointerEventHandler, PointerId, PointerRouter, RawPointer, Space,
};
pub use scene::Scene;
pub use services::{ColliderHit, DragContext, OverlayRect, Projection, SpatialQuery, UiHit};
pub use settle::{Destination, SettleHandle};
pub use spatial_index::{EntryId, EntryInfo, SpatialIndex};
pub use zone::{DropZone, Layer, LayerMask, ZoneId, ZoneRegistry};
