use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::Coordinates;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Remote endpoints. Overridable for self-hosted Open-Meteo instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub geocoding: String,
    pub forecast: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding: DEFAULT_GEOCODING_URL.to_string(),
            forecast: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Position reported to the load path in place of device geolocation.
    ///
    /// Example TOML:
    /// [position]
    /// latitude = 48.85
    /// longitude = 2.35
    pub position: Option<Coordinates>,
}

impl Config {
    pub fn set_position(&mut self, position: Coordinates) {
        self.position = Some(position);
    }

    pub fn clear_position(&mut self) {
        self.position = None;
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;

        if let Some(pos) = cfg.position {
            validate_position(pos)?;
        }

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Reject coordinates outside the WGS84 range.
pub fn validate_position(pos: Coordinates) -> Result<()> {
    if !(-90.0..=90.0).contains(&pos.latitude) {
        return Err(anyhow!("Latitude {} is outside -90..=90", pos.latitude));
    }
    if !(-180.0..=180.0).contains(&pos.longitude) {
        return Err(anyhow!("Longitude {} is outside -180..=180", pos.longitude));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_open_meteo_defaults() {
        let cfg = Config::from_toml("").expect("empty config must parse");

        assert_eq!(cfg.endpoints.geocoding, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.endpoints.forecast, DEFAULT_FORECAST_URL);
        assert!(cfg.position.is_none());
    }

    #[test]
    fn partial_endpoint_override_keeps_other_default() {
        let cfg = Config::from_toml(
            r#"
            [endpoints]
            forecast = "http://localhost:8080/v1/forecast"
            "#,
        )
        .expect("config must parse");

        assert_eq!(cfg.endpoints.forecast, "http://localhost:8080/v1/forecast");
        assert_eq!(cfg.endpoints.geocoding, DEFAULT_GEOCODING_URL);
    }

    #[test]
    fn position_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_position(Coordinates::new(48.85, 2.35));

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back = Config::from_toml(&text).expect("parse");

        assert_eq!(back, cfg);
    }

    #[test]
    fn clear_position_removes_it() {
        let mut cfg = Config::default();
        cfg.set_position(Coordinates::new(1.0, 2.0));
        cfg.clear_position();

        assert!(cfg.position.is_none());
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let err = Config::from_toml(
            r#"
            [position]
            latitude = 123.0
            longitude = 2.0
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Latitude 123"));
    }
}
