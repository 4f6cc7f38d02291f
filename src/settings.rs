//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default so a
//! settings file only needs the values it overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Where the two image assets live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Directory relative paths are resolved against (None = settings file dir or cwd)
    pub root: Option<PathBuf>,
    /// Background image, drawn at the origin
    pub background: PathBuf,
    /// Ground strip, drawn at the scroll offset
    pub ground: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            root: None,
            background: PathBuf::from("assets/bg.png"),
            ground: PathBuf::from("assets/base.png"),
        }
    }
}

impl AssetPaths {
    /// Resolve a configured path against the asset root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn background_path(&self) -> PathBuf {
        self.resolve(&self.background)
    }

    pub fn ground_path(&self) -> PathBuf {
        self.resolve(&self.ground)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub screen_width: u32,
    pub screen_height: u32,
    pub window_title: String,

    // === Pipes ===
    pub pipe_width: f32,
    pub pipe_gap_size: f32,
    /// Pixels per tick
    pub pipe_speed: f32,
    /// Pixels per tick
    pub ground_scroll_speed: f32,

    // === Bird ===
    /// Added to velocity every tick
    pub gravity: f32,
    /// Velocity a flap resets to (negative = up)
    pub flap_strength: f32,

    // === Loop ===
    pub tick_rate_hz: u32,
    pub autopilot_enabled: bool,
    /// Pipe RNG seed (None = random, logged at startup)
    pub seed: Option<u64>,

    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            window_title: "Flappy Bird".to_string(),

            pipe_width: PIPE_WIDTH,
            pipe_gap_size: PIPE_GAP_SIZE,
            pipe_speed: PIPE_SPEED,
            ground_scroll_speed: GROUND_SCROLL_SPEED,

            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,

            tick_rate_hz: TICK_RATE_HZ,
            autopilot_enabled: true,
            seed: None,

            assets: AssetPaths::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them.
    ///
    /// When the file does not name an asset root, assets resolve relative to the
    /// directory holding the settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings =
            serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if settings.assets.root.is_none() {
            settings.assets.root = path.parent().map(Path::to_path_buf);
        }

        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation or window cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(SettingsError::Invalid {
                field: "screen_width/screen_height",
                reason: format!(
                    "window must be non-empty, got {}x{}",
                    self.screen_width, self.screen_height
                ),
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(SettingsError::Invalid {
                field: "tick_rate_hz",
                reason: "must be at least 1".to_string(),
            });
        }
        positive("pipe_width", self.pipe_width)?;
        positive("pipe_gap_size", self.pipe_gap_size)?;
        non_negative("pipe_speed", self.pipe_speed)?;
        non_negative("ground_scroll_speed", self.ground_scroll_speed)?;
        finite("gravity", self.gravity)?;
        finite("flap_strength", self.flap_strength)?;
        Ok(())
    }

    /// Vertical start position of the bird (integer half of the screen height)
    pub fn bird_start_y(&self) -> f32 {
        (self.screen_height / 2) as f32
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must be finite, got {value}"),
        })
    }
}

/// Speeds scroll left; a negative value would run the world backwards
fn non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must not be negative, got {value}"),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must be positive, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_classic_layout() {
        let settings = Settings::default();
        assert_eq!(settings.screen_width, 864);
        assert_eq!(settings.screen_height, 936);
        assert_eq!(settings.pipe_width, 70.0);
        assert_eq!(settings.pipe_gap_size, 200.0);
        assert_eq!(settings.gravity, 1.0);
        assert_eq!(settings.flap_strength, -10.0);
        assert_eq!(settings.tick_rate_hz, 60);
        assert!(settings.autopilot_enabled);
        assert_eq!(settings.bird_start_y(), 468.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "gravity": 0.5, "assets": { "ground": "g.png" } }"#)
                .unwrap();
        assert_eq!(settings.gravity, 0.5);
        assert_eq!(settings.pipe_speed, PIPE_SPEED);
        assert_eq!(settings.assets.ground, PathBuf::from("g.png"));
        assert_eq!(settings.assets.background, PathBuf::from("assets/bg.png"));
    }

    #[test]
    fn test_odd_height_start_rounds_down() {
        let settings = Settings {
            screen_height: 101,
            ..Default::default()
        };
        assert_eq!(settings.bird_start_y(), 50.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_rate = Settings {
            tick_rate_hz: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_rate.validate(),
            Err(SettingsError::Invalid { field: "tick_rate_hz", .. })
        ));

        let bad_pipe = Settings {
            pipe_width: -1.0,
            ..Default::default()
        };
        assert!(bad_pipe.validate().is_err());

        let nan_gravity = Settings {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(nan_gravity.validate().is_err());

        let empty_window = Settings {
            screen_width: 0,
            ..Default::default()
        };
        assert!(empty_window.validate().is_err());

        let backwards_ground = Settings {
            ground_scroll_speed: -4.0,
            ..Default::default()
        };
        assert!(matches!(
            backwards_ground.validate(),
            Err(SettingsError::Invalid { field: "ground_scroll_speed", .. })
        ));

        let backwards_pipes = Settings {
            pipe_speed: -4.0,
            ..Default::default()
        };
        assert!(matches!(
            backwards_pipes.validate(),
            Err(SettingsError::Invalid { field: "pipe_speed", .. })
        ));

        let stopped = Settings {
            pipe_speed: 0.0,
            ground_scroll_speed: 0.0,
            ..Default::default()
        };
        assert!(stopped.validate().is_ok());
    }

    #[test]
    fn test_load_roots_assets_at_settings_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flappy.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{ "autopilot_enabled": false, "seed": 7 }}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(!settings.autopilot_enabled);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.assets.root.as_deref(), Some(dir.path()));
        assert_eq!(
            settings.assets.background_path(),
            dir.path().join("assets/bg.png")
        );
    }

    #[test]
    fn test_load_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Settings::load(&missing),
            Err(SettingsError::Read { .. })
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Settings::load(&broken),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_absolute_asset_path_ignores_root() {
        let paths = AssetPaths {
            root: Some(PathBuf::from("/srv/flappy")),
            background: std::env::temp_dir().join("bg.png"),
            ground: PathBuf::from("base.png"),
        };
        assert_eq!(paths.background_path(), std::env::temp_dir().join("bg.png"));
        assert_eq!(paths.ground_path(), PathBuf::from("/srv/flappy/base.png"));
    }
}
