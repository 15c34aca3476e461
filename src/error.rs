//! Error types for drag and drop operations.
//!
//! Nothing in the engine is fatal. [`DragError`] values are reported as
//! diagnostics and routed into the fallback paths; [`ConfigError`] is the only
//! error a caller has to handle, and only when loading configuration.

use crate::zone::ZoneId;
use thiserror::Error;

/// Diagnostics raised by the drag engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DragError {
    /// Overlay object created without an enclosing canvas rectangle
    #[error("overlay draggable '{0}' has no enclosing overlay container")]
    MissingOverlayContainer(String),

    /// Zone id no longer present in the registry
    #[error("drop zone {0} does not exist")]
    UnknownZone(ZoneId),

    /// Name lookup found no zone
    #[error("no drop zone named '{0}'")]
    UnknownZoneName(String),

    /// Programmatic move requested without a target
    #[error("no drop zone target given")]
    NoTarget,

    /// Candidate is outside the configured allowed set
    #[error("drop zone '{name}' ({zone}) is not allowed for this draggable")]
    ZoneNotAllowed { zone: ZoneId, name: String },

    /// Pointer ray did not intersect the drag plane
    #[error("pointer ray does not intersect the drag plane")]
    DegenerateProjection,
}

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of range
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
