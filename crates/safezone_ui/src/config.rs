//! Mapper configuration and simulator device profiles.
//!
//! Both are plain TOML, loaded once at startup.
//!
//! ```toml
//! environment = "simulator"
//! mobile_only = true
//! ```

use std::path::Path;

use safezone_shared::{Rect, Resolution};
use serde::{Deserialize, Serialize};

use crate::error::{SafeAreaError, SafeAreaResult};
use crate::platform::{Environment, Platform};

/// Runtime configuration for a [`SafeAreaMapper`](crate::SafeAreaMapper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SafeAreaConfig {
    /// Selects the resolution source used for normalization.
    pub environment: Environment,
    /// Only map on iOS and Android; other platforms are ignored.
    pub mobile_only: bool,
}

impl SafeAreaConfig {
    /// Configuration for an editor or device simulator.
    #[must_use]
    pub fn simulator() -> Self {
        Self {
            environment: Environment::Simulator,
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::InvalidConfig`] on malformed input or
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> SafeAreaResult<Self> {
        toml::from_str(text).map_err(|e| SafeAreaError::InvalidConfig(e.to_string()))
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::Io`] if the file cannot be read and
    /// [`SafeAreaError::InvalidConfig`] if it does not parse.
    pub fn from_toml_file(path: impl AsRef<Path>) -> SafeAreaResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// A simulated device: display, optional window, and reported safe area.
///
/// ```toml
/// name = "Pixel 7"
/// platform = "android"
/// resolution = { width = 1080, height = 2400 }
/// safe_area = { x = 0.0, y = 0.0, width = 1080.0, height = 2282.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceProfile {
    /// Display name, used in logs.
    pub name: String,
    /// Reported platform.
    #[serde(default)]
    pub platform: Platform,
    /// Native display resolution.
    pub resolution: Resolution,
    /// Window client size, if it differs from the display.
    #[serde(default)]
    pub window: Option<Resolution>,
    /// Safe rectangle in pixels.
    pub safe_area: Rect,
}

impl DeviceProfile {
    /// Parses a profile from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::InvalidConfig`] on malformed input or a
    /// safe area with negative extent.
    pub fn from_toml_str(text: &str) -> SafeAreaResult<Self> {
        let profile: Self =
            toml::from_str(text).map_err(|e| SafeAreaError::InvalidConfig(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Loads a profile file.
    ///
    /// # Errors
    ///
    /// Same as [`DeviceProfile::from_toml_str`], plus [`SafeAreaError::Io`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> SafeAreaResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    // Zero-sized resolutions are allowed through on purpose; they only
    // produce degenerate anchors.
    fn validate(&self) -> SafeAreaResult<()> {
        if self.safe_area.width < 0.0 || self.safe_area.height < 0.0 {
            return Err(SafeAreaError::InvalidConfig(format!(
                "profile '{}': safe area {} has negative extent",
                self.name, self.safe_area
            )));
        }
        Ok(())
    }
}
