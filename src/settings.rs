//! Collision tunables
//!
//! Loaded from JSON; missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{PlayfieldError, Result};

/// Per-frame collision resolution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Bounces resolved per ball per frame before the rest of the travel is dropped
    pub bounce_limit: u32,
    /// Hits nearer than this to the travel origin are ignored
    pub min_hit_distance: f32,
    /// Distance the travel restarts past the surface after a bounce
    pub exit_offset: f32,
    /// Length of the normal probe used for the surface angle
    pub normal_probe_length: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            bounce_limit: BOUNCE_LIMIT,
            min_hit_distance: MIN_HIT_DISTANCE,
            exit_offset: EXIT_OFFSET,
            normal_probe_length: NORMAL_PROBE_LENGTH,
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bounce_limit == 0 {
            return Err(PlayfieldError::Settings("bounce_limit must be at least 1".into()));
        }
        for (name, value) in [
            ("min_hit_distance", self.min_hit_distance),
            ("exit_offset", self.exit_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlayfieldError::Settings(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !self.normal_probe_length.is_finite() || self.normal_probe_length <= 0.0 {
            return Err(PlayfieldError::Settings(format!(
                "normal_probe_length must be positive, got {}",
                self.normal_probe_length
            )));
        }
        Ok(())
    }
}
