//! Drag configuration.
//!
//! Values are plain seconds / world units / pixels so a JSON settings file
//! stays readable:
//!
//! ```json
//! { "tap_window": 0.3, "settle_duration": 0.15 }
//! ```
//!
//! Missing fields fall back to the defaults in [`crate::constants`].

use crate::constants::{
    DEFAULT_DRAG_THRESHOLD, DEFAULT_MAX_DEPTH_OFFSET, DEFAULT_SETTLE_DURATION, DEFAULT_TAP_WINDOW,
};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Double-tap disambiguation window (seconds)
    pub tap_window: f32,
    /// Settle animation length (seconds)
    pub settle_duration: f32,
    /// Allowed depth drift around the drag-plane depth (world units)
    pub max_depth_offset: f32,
    /// Press-to-drag distance used by the pointer router (pixels)
    pub drag_threshold: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            tap_window: DEFAULT_TAP_WINDOW,
            settle_duration: DEFAULT_SETTLE_DURATION,
            max_depth_offset: DEFAULT_MAX_DEPTH_OFFSET,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl DragConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Reject non-finite or negative values.
    pub fn validate(&self) -> ConfigResult<()> {
        check_non_negative("tap_window", self.tap_window)?;
        check_non_negative("settle_duration", self.settle_duration)?;
        check_non_negative("max_depth_offset", self.max_depth_offset)?;
        check_non_negative("drag_threshold", self.drag_threshold)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> ConfigResult<()> {
    if !value.is_finite() {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is not finite"),
        });
    }
    if value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is negative"),
        });
    }
    Ok(())
}
