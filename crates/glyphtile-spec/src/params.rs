//! Raster parameters.

use serde::{Deserialize, Serialize};

use crate::charset::Charset;
use crate::error::SpecError;

/// Parameters for rasterizing a character set.
///
/// Every field has a default, so `{}` is a valid params file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RasterParams {
    /// Font em size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Canvas size in pixels [width, height].
    #[serde(default = "default_canvas_size")]
    pub canvas_size: [u32; 2],

    /// Characters to rasterize, in order.
    #[serde(default)]
    pub charset: Charset,
}

fn default_font_size() -> f32 {
    160.0
}

fn default_canvas_size() -> [u32; 2] {
    [224, 224]
}

impl Default for RasterParams {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            canvas_size: default_canvas_size(),
            charset: Charset::default(),
        }
    }
}

impl RasterParams {
    /// Parses params from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the canvas size.
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_size = [width, height];
        self
    }

    /// Sets the character set.
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Canvas width in pixels.
    pub fn canvas_width(&self) -> u32 {
        self.canvas_size[0]
    }

    /// Canvas height in pixels.
    pub fn canvas_height(&self) -> u32 {
        self.canvas_size[1]
    }

    /// Checks ranges.
    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(SpecError::invalid(
                "font_size",
                format!("must be a positive number, got {}", self.font_size),
            ));
        }
        if self.canvas_size[0] == 0 || self.canvas_size[1] == 0 {
            return Err(SpecError::invalid(
                "canvas_size",
                format!(
                    "must be non-zero, got {}x{}",
                    self.canvas_size[0], self.canvas_size[1]
                ),
            ));
        }
        if self.charset.as_str().is_empty() {
            return Err(SpecError::invalid("charset", "must not be empty"));
        }
        Ok(())
    }
}
