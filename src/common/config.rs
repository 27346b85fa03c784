//! Runtime settings for the synchronization and consolidation algorithms.
//!
//! Settings are plain serde structs. With the `yaml` feature they can be read
//! from a YAML document; every field has a default so partial files are fine.
//!
//! ```yaml
//! match_blur_radius: 10.0
//! effect_duration: 0.0
//! remove_indicators: true
//! ```

use serde::{Deserialize, Serialize};

#[cfg(feature = "yaml")]
use crate::common::Result;
#[cfg(feature = "yaml")]
use std::path::Path;

/// Position tolerance, in document units, used when pairing shapes by position.
pub const DEFAULT_MATCH_BLUR_RADIUS: f32 = 15.0;

/// Tunables shared by the presentation algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tolerance for position matching in `sync_shape_range`
    pub match_blur_radius: f32,
    /// Duration (seconds) of appear/disappear effects spliced by `squash`
    pub effect_duration: f32,
    /// Remove delete-indicator shapes from slides before merging them
    pub remove_indicators: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            match_blur_radius: DEFAULT_MATCH_BLUR_RADIUS,
            effect_duration: 0.0,
            remove_indicators: true,
        }
    }
}

impl Settings {
    /// Parse settings from a YAML string.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_saphyr::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a YAML file.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    #[cfg(feature = "yaml")]
    fn validate(&self) -> Result<()> {
        if !(self.match_blur_radius.is_finite() && self.match_blur_radius > 0.0) {
            return Err(crate::common::Error::Config(format!(
                "match_blur_radius must be a positive number, got {}",
                self.match_blur_radius
            )));
        }
        if !(self.effect_duration.is_finite() && self.effect_duration >= 0.0) {
            return Err(crate::common::Error::Config(format!(
                "effect_duration must not be negative, got {}",
                self.effect_duration
            )));
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "yaml"))]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let settings = Settings::from_yaml_str("effect_duration: 0.5\n").unwrap();
        assert_eq!(settings.match_blur_radius, DEFAULT_MATCH_BLUR_RADIUS);
        assert_eq!(settings.effect_duration, 0.5);
        assert!(settings.remove_indicators);
    }

    #[test]
    fn test_rejects_non_positive_blur() {
        let err = Settings::from_yaml_str("match_blur_radius: 0.0\n").unwrap_err();
        assert!(matches!(err, crate::common::Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "match_blur_radius: 4.0").unwrap();
        writeln!(file, "remove_indicators: false").unwrap();

        let settings = Settings::from_yaml_file(file.path()).unwrap();
        assert_eq!(settings.match_blur_radius, 4.0);
        assert!(!settings.remove_indicators);
    }
}
