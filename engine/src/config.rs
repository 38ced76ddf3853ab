//! Character Configuration
//!
//! All tuning for one character in a single serializable struct. Every
//! section is `#[serde(default)]`, so a JSON file only needs the keys it
//! overrides:
//!
//! ```json
//! { "movement": { "jump_limit": 3 }, "grapple": { "force_mode": "ReflectPull" } }
//! ```
//!
//! `Default` is the stock tuning used by every controller constant.

use std::fmt;
use std::path::Path;

use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::grapple::GrappleConfig;
use crate::input::DOUBLE_TAP_WINDOW;
use crate::player::{DashConfig, GUN_OFFSET, LookConfig, MovementConfig};

/// Central tuning for a [`crate::player::FirstPersonCharacter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub movement: MovementConfig,
    pub dash: DashConfig,
    pub grapple: GrappleConfig,
    pub look: LookConfig,
    /// Muzzle offset in view space (forward, right, up)
    pub gun_offset: Vec3,
    /// Double-tap window for dash input, seconds
    pub double_tap_window: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            movement: MovementConfig::default(),
            dash: DashConfig::default(),
            grapple: GrappleConfig::default(),
            look: LookConfig::default(),
            gun_offset: GUN_OFFSET,
            double_tap_window: DOUBLE_TAP_WINDOW,
        }
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// A value is out of range.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

// ============================================================================
// LOAD / SAVE
// ============================================================================

impl CharacterConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CharacterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        non_negative("movement.walk_speed", m.walk_speed)?;
        non_negative("movement.sprint_speed", m.sprint_speed)?;
        non_negative("movement.jump_height", m.jump_height)?;
        if m.sprint_speed < m.walk_speed {
            return invalid(
                "movement.sprint_speed",
                format!("{} is below walk_speed {}", m.sprint_speed, m.walk_speed),
            );
        }
        if m.jump_limit == 0 {
            return invalid("movement.jump_limit", "must allow at least one jump".to_string());
        }

        let d = &self.dash;
        non_negative("dash.distance", d.distance)?;
        non_negative("dash.active_seconds", d.active_seconds)?;
        non_negative("dash.cooldown_seconds", d.cooldown_seconds)?;
        non_negative("dash.braking_friction_override", d.braking_friction_override)?;
        non_negative("dash.default_braking_friction", d.default_braking_friction)?;

        let g = &self.grapple;
        non_negative("grapple.max_distance", g.max_distance)?;
        non_negative("grapple.detection_radius", g.detection_radius)?;
        non_negative("grapple.boost_magnitude", g.boost_magnitude)?;

        non_negative("look.base_turn_rate", self.look.base_turn_rate)?;
        non_negative("look.base_look_up_rate", self.look.base_look_up_rate)?;
        non_negative("double_tap_window", self.double_tap_window)?;

        if !self.gun_offset.is_finite() {
            return invalid("gun_offset", "must be finite".to_string());
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> Result<(), ConfigError> {
    warn!("rejecting config: {field}: {reason}");
    Err(ConfigError::Invalid { field, reason })
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        invalid(field, format!("{value} must be finite and >= 0"))
    }
}
