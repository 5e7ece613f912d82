//! Application configuration
//!
//! Loaded from a JSON file in the user's config directory; every field
//! falls back to the built-in campus defaults when the file is missing
//! or fails to parse.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A geographic rectangle given by its corner coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Checks whether a position is within the bounds.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tree dataset: local path or http(s) URL
    pub csv_source: String,
    /// Hard view limits; the viewport never leaves this rectangle
    pub campus_bounds: Bounds,
    /// Startup view center (latitude, longitude)
    pub initial_center: (f64, f64),
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Tiles above this level are upscaled from it
    pub max_native_zoom: u32,
    /// At or below this zoom trees render as dots; above it as icons
    pub dot_zoom_threshold: f64,
    pub street_tile_url: String,
    pub satellite_tile_url: String,
    /// Directory holding optional `<category>.png` marker icons
    pub icon_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_source: "trees.csv".to_string(),
            campus_bounds: Bounds {
                min_lat: 13.0442,
                max_lat: 13.0482,
                min_lon: 80.2518,
                max_lon: 80.2552,
            },
            initial_center: (13.0482, 80.2552),
            initial_zoom: 18.0,
            min_zoom: 18.0,
            max_zoom: 23.0,
            max_native_zoom: 19,
            dot_zoom_threshold: 18.0,
            street_tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            satellite_tile_url:
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
                    .to_string(),
            icon_dir: "assets/icons".to_string(),
        }
    }
}

impl AppConfig {
    /// Get the path where the config file is stored
    ///
    /// - Linux: ~/.config/campus-tree-map/config.json
    /// - macOS: ~/Library/Application Support/campus-tree-map/config.json
    /// - Windows: %APPDATA%\campus-tree-map\config.json
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("campus-tree-map");
        path.push("config.json");
        Some(path)
    }

    /// Load the configuration, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    println!("Configuration loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("invalid config at {}: {e}. Using defaults.", path.display());
                    Self::default()
                }
            },
            // Missing file is the common case on first run
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_campus() {
        let config = AppConfig::default();
        assert_eq!(config.min_zoom, 18.0);
        assert_eq!(config.max_zoom, 23.0);
        assert_eq!(config.dot_zoom_threshold, 18.0);
        assert!(config
            .campus_bounds
            .contains(config.initial_center.0, config.initial_center.1));
    }

    #[test]
    fn test_bounds_containment() {
        let bounds = AppConfig::default().campus_bounds;
        assert!(bounds.contains(13.0461, 80.2533));
        assert!(!bounds.contains(13.08, 80.2533));
        assert!(!bounds.contains(13.0461, 80.30));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"initial_zoom": 19.0}"#).unwrap();
        assert_eq!(config.initial_zoom, 19.0);
        assert_eq!(config.max_zoom, 23.0);
    }
}
