//! Grass configuration (user-facing settings).
//!
//! Everything here is plain data with serde support so a host can ship it as
//! JSON. [`GrassConfig::validate`] rejects values the deformer cannot use.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::shading::LightingParams;
use crate::wind::WindConfig;

/// Top-level grass configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrassConfig {
    /// Wind field parameters.
    pub wind: WindConfig,
    /// Dynamic object that pushes blades aside.
    pub avoidance: AvoidanceConfig,
    /// Blade bending limits and colors.
    pub blade: BladeConfig,
    /// Shading parameters.
    pub lighting: LightingParams,
    /// Blade scattering.
    pub field: FieldConfig,
}

/// Object avoidance around a fixed anchor on the ground plane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvoidanceConfig {
    /// World XZ position of the object.
    pub anchor: [f32; 2],
    /// Blades closer than this are fully pushed aside.
    pub radius: f32,
    /// Width of the soft edge outside `radius`. 0 = hard edge.
    pub falloff: f32,
    /// Bend angle (radians) at the blade tip when fully pushed.
    pub bend: f32,
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            anchor: [0.0, 0.0],
            radius: 0.3,
            falloff: 0.05,
            bend: 1.2,
        }
    }
}

/// Blade bending limits and pigment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BladeConfig {
    /// Tip bend angle (radians) at full wind strength.
    pub max_bend: f32,
    /// Per-blade random pitch offset (radians, at the tip).
    pub pitch_jitter: f32,
    /// Per-blade random twist about the blade axis (radians, at the tip).
    pub yaw_jitter: f32,
    /// Linear RGBA at the root.
    pub root_color: [f32; 4],
    /// Linear RGBA at the tip.
    pub tip_color: [f32; 4],
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self {
            max_bend: 0.9,
            pitch_jitter: 0.15,
            yaw_jitter: 0.5,
            root_color: [0.05, 0.2, 0.01, 1.0],
            tip_color: [0.35, 0.65, 0.1, 1.0],
        }
    }
}

/// Procedural blade placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of blade instances.
    pub blade_count: u32,
    /// Placement seed.
    pub seed: u32,
    /// Blades are placed in `[-extent, extent]^2` on the XZ plane.
    pub extent: f32,
    /// Blade width range (world units).
    pub width: [f32; 2],
    /// Blade height range (world units), before noise modulation.
    pub height: [f32; 2],
    /// Spatial frequency of the height variation noise.
    pub height_noise_scale: f32,
    /// Relative height variation from noise (0 = none).
    pub height_noise_amount: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            blade_count: 20_000,
            seed: 0,
            extent: 1.0,
            width: [0.02, 0.04],
            height: [0.04, 0.08],
            height_noise_scale: 1.5,
            height_noise_amount: 0.25,
        }
    }
}

impl GrassConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded grass config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Write this config as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Check the values the per-vertex math relies on.
    pub fn validate(&self) -> Result<()> {
        let [dx, dz] = self.wind.direction;
        if !(dx * dx + dz * dz > 0.0) {
            return Err(Error::InvalidConfig("wind.direction must be non-zero".into()));
        }
        if !(self.wind.scale > 0.0) {
            return Err(Error::InvalidConfig(format!("wind.scale must be positive, got {}", self.wind.scale)));
        }
        if !(self.avoidance.radius >= 0.0) || !(self.avoidance.falloff >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "avoidance radius/falloff must be non-negative, got {}/{}",
                self.avoidance.radius, self.avoidance.falloff
            )));
        }
        let [lx, ly, lz] = self.lighting.light_direction;
        if !(lx * lx + ly * ly + lz * lz > 0.0) {
            return Err(Error::InvalidConfig("lighting.light_direction must be non-zero".into()));
        }
        if !(self.lighting.shininess > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "lighting.shininess must be positive, got {}",
                self.lighting.shininess
            )));
        }
        let f = &self.field;
        if f.width[0] > f.width[1] || f.height[0] > f.height[1] || !(f.width[0] > 0.0) || !(f.height[0] > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "field width/height ranges must be positive and ordered, got {:?}/{:?}",
                f.width, f.height
            )));
        }
        if !(0.0..1.0).contains(&f.height_noise_amount) {
            return Err(Error::InvalidConfig(format!(
                "field.height_noise_amount must be in [0, 1), got {}",
                f.height_noise_amount
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = GrassConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.field.blade_count, 20_000);
        assert_eq!(cfg.lighting.ambient_strength, 0.1);
    }

    #[test]
    fn test_zero_wind_direction_rejected() {
        let mut cfg = GrassConfig::default();
        cfg.wind.direction = [0.0, 0.0];
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_ranges_rejected() {
        let mut cfg = GrassConfig::default();
        cfg.field.height = [0.08, 0.04];
        assert!(cfg.validate().is_err());

        let mut cfg = GrassConfig::default();
        cfg.avoidance.falloff = -0.1;
        assert!(cfg.validate().is_err());

        let mut cfg = GrassConfig::default();
        cfg.lighting.shininess = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grass.json");

        let mut cfg = GrassConfig::default();
        cfg.wind.time_scale = 1.25;
        cfg.avoidance.anchor = [0.5, -0.5];
        cfg.save(&path).unwrap();

        let loaded = GrassConfig::load(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "wind": { "scale": 8.0 }, "field": { "blade_count": 10 } }"#).unwrap();

        let cfg = GrassConfig::load(&path).unwrap();
        assert_eq!(cfg.wind.scale, 8.0);
        assert_eq!(cfg.wind.direction, WindConfig::default().direction);
        assert_eq!(cfg.field.blade_count, 10);
        assert_eq!(cfg.blade, BladeConfig::default());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = GrassConfig::load(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(Error::Io(_))));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(GrassConfig::load(&path), Err(Error::Json(_))));

        let path = dir.path().join("invalid.json");
        std::fs::write(&path, r#"{ "wind": { "direction": [0.0, 0.0] } }"#).unwrap();
        assert!(matches!(GrassConfig::load(&path), Err(Error::InvalidConfig(_))));
    }
}
