use crate::constants::*;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete carousel build configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    // Input
    pub inputs: Vec<PathBuf>,

    // Output
    pub output: PathBuf,
    pub export_dir: Option<PathBuf>,

    // Canvas
    pub layout: CanvasLayout,

    // Encoding
    pub quality: u8,
    pub resolution_dpi: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            export_dir: None,
            layout: CanvasLayout::default(),
            quality: DEFAULT_QUALITY,
            resolution_dpi: DEFAULT_RESOLUTION_DPI,
        }
    }
}

impl CarouselOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CarouselError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CarouselError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(CarouselError::Config("No input paths specified".to_string()));
        }

        let size = self.layout.size;
        if size.width == 0 || size.height == 0 {
            return Err(CarouselError::Config(format!(
                "Canvas size must be at least 1x1 (got {})",
                size
            )));
        }

        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(CarouselError::Config(format!(
                "Quality must be between {} and {} (got {})",
                MIN_QUALITY, MAX_QUALITY, self.quality
            )));
        }

        if !(self.resolution_dpi.is_finite() && self.resolution_dpi > 0.0) {
            return Err(CarouselError::Config(format!(
                "Resolution must be positive (got {})",
                self.resolution_dpi
            )));
        }

        // Allowed, but the inner box degenerates
        let margin = self.layout.margin as u64;
        if margin * 2 >= size.width.min(size.height) as u64 {
            log::warn!(
                "Margin of {}px leaves no room on a {} canvas; images shrink to 1px",
                margin,
                size
            );
        }

        Ok(())
    }
}
