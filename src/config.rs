use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PlotError, Result};

/// Default prefix marking a metric's validation counterpart
pub const DEFAULT_VALIDATION_PREFIX: &str = "val_";

/// Smallest character grid the terminal presenter can draw into
pub const MIN_TEXT_WIDTH: usize = 10;
pub const MIN_TEXT_HEIGHT: usize = 5;

/// Settings shared by every chart drawn in one plotting pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Leading epochs omitted from every chart
    pub skip: usize,

    /// Prefix that pairs `val_loss` with `loss`
    pub validation_prefix: String,

    /// Label of the horizontal axis
    pub x_label: String,

    /// Pixel size used by the SVG presenter
    pub width: u32,
    pub height: u32,

    /// Character grid used by the terminal presenter
    pub text_width: usize,
    pub text_height: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            skip: 0,
            validation_prefix: DEFAULT_VALIDATION_PREFIX.to_string(),
            x_label: "Epochs".to_string(),
            width: 800,
            height: 600,
            text_width: 60,
            text_height: 15,
        }
    }
}

impl PlotConfig {
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_validation_prefix(mut self, prefix: &str) -> Self {
        self.validation_prefix = prefix.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlotConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<()> {
        if self.validation_prefix.is_empty() {
            return Err(PlotError::invalid_parameter(
                "validation_prefix",
                "must not be empty",
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidParameter {
                name: "width/height".to_string(),
                reason: format!("canvas size {}x{} has no area", self.width, self.height),
            });
        }
        if self.text_width < MIN_TEXT_WIDTH || self.text_height < MIN_TEXT_HEIGHT {
            return Err(PlotError::InvalidParameter {
                name: "text_width/text_height".to_string(),
                reason: format!(
                    "text chart needs at least {}x{}, got {}x{}",
                    MIN_TEXT_WIDTH, MIN_TEXT_HEIGHT, self.text_width, self.text_height
                ),
            });
        }
        Ok(())
    }
}
