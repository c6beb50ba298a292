use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use windzone::DEFAULT_LABEL_DISTANCE_FACTOR;

/// How the computed scene is written to stdout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub assessment: AssessmentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentConfig {
    /// Direction labels sit at this multiple of the total radius
    #[serde(default = "default_label_factor")]
    pub label_distance_factor: f64,
}

fn default_label_factor() -> f64 {
    DEFAULT_LABEL_DISTANCE_FACTOR
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            label_distance_factor: DEFAULT_LABEL_DISTANCE_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimal places for coordinates
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    6
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: default_precision(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    #[serde(default = "default_true")]
    pub show_rings: bool,
    #[serde(default = "default_true")]
    pub show_dividers: bool,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default = "default_outer_color")]
    pub outer_color: RgbColor,
    #[serde(default = "default_lag_color")]
    pub lag_color: RgbColor,
    #[serde(default = "default_white")]
    pub ring_color: RgbColor,
    #[serde(default = "default_white")]
    pub divider_color: RgbColor,
    #[serde(default = "default_label_color")]
    pub label_color: RgbColor,
    #[serde(default = "default_center_color")]
    pub center_color: RgbColor,
}

fn default_true() -> bool {
    true
}

fn default_outer_color() -> RgbColor {
    RgbColor { r: 255, g: 0, b: 0 }
}

fn default_lag_color() -> RgbColor {
    RgbColor { r: 0, g: 255, b: 255 }
}

fn default_white() -> RgbColor {
    RgbColor { r: 255, g: 255, b: 255 }
}

fn default_label_color() -> RgbColor {
    RgbColor { r: 255, g: 255, b: 0 }
}

fn default_center_color() -> RgbColor {
    RgbColor { r: 255, g: 165, b: 0 }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            show_rings: true,
            show_dividers: true,
            show_labels: true,
            outer_color: default_outer_color(),
            lag_color: default_lag_color(),
            ring_color: default_white(),
            divider_color: default_white(),
            label_color: default_label_color(),
            center_color: default_center_color(),
        }
    }
}

/// RGB color representation for configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Parse from hex string like "#FF0000" or "FF0000"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        // Byte slicing below needs six ASCII hex digits
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/windzone/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("windzone").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists.
    /// Returns None if the file doesn't exist, warns on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("{:#}. Using defaults.", e);
                None
            }
        }
    }

    /// Write the default config template to `path`, or to the XDG path when
    /// none is given. Returns the path written
    pub fn init_default_config(path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Self::generate_config_template())
            .with_context(|| format!("Failed to write config {}", path.display()))?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# windzone configuration
# This file is auto-generated. Edit as needed.

[assessment]
# Direction labels are placed at this multiple of the total assessment radius
label_distance_factor = 1.2

[output]
# Output format: "table", "json" or "csv"
format = "table"
# Decimal places for latitude/longitude
precision = 6

[preview]
# Layers shown when the terminal preview opens (toggle with r, d, l)
show_rings = true
show_dividers = true
show_labels = true
# Colors
outer_color = { r = 255, g = 0, b = 0 }
lag_color = { r = 0, g = 255, b = 255 }
ring_color = { r = 255, g = 255, b = 255 }
divider_color = { r = 255, g = 255, b = 255 }
label_color = { r = 255, g = 255, b = 0 }
center_color = { r = 255, g = 165, b = 0 }
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &crate::Args) {
        if let Some(factor) = args.label_factor {
            self.assessment.label_distance_factor = factor;
        }
        if let Some(format) = args.output {
            self.output.format = format;
        }
        if let Some(precision) = args.precision {
            self.output.precision = precision;
        }
        if args.no_rings {
            self.preview.show_rings = false;
        }
        if let Some(ref color) = args.outer_color {
            match RgbColor::from_hex(color) {
                Some(c) => self.preview.outer_color = c,
                None => tracing::warn!("Ignoring invalid outer color '{}'", color),
            }
        }
        if let Some(ref color) = args.label_color {
            match RgbColor::from_hex(color) {
                Some(c) => self.preview.label_color = c,
                None => tracing::warn!("Ignoring invalid label color '{}'", color),
            }
        }
    }
}
