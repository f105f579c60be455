//! UI configuration.

use common::{UiError, UiResult};
use serde::{Deserialize, Serialize};

/// Configuration of a [`UiContext`](crate::UiContext).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Skip draw commands for elements entirely outside the viewport.
    pub culling_enabled: bool,
    /// Trees with more elements than this are rejected.
    pub max_element_count: usize,
    /// Line height of the built-in text measurer, relative to font size.
    pub default_line_height_ratio: f32,
}

impl UiConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> UiResult<Self> {
        let config: UiConfig =
            serde_json::from_str(json).map_err(|e| UiError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> UiResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| UiError::config(e.to_string()))
    }

    /// Set viewport size.
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_culling(mut self, enabled: bool) -> Self {
        self.culling_enabled = enabled;
        self
    }

    pub fn with_max_element_count(mut self, count: usize) -> Self {
        self.max_element_count = count;
        self
    }

    pub fn with_line_height_ratio(mut self, ratio: f32) -> Self {
        self.default_line_height_ratio = ratio;
        self
    }

    pub fn validate(&self) -> UiResult<()> {
        let dimensions = [self.viewport_width, self.viewport_height];
        if dimensions.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(UiError::config(format!(
                "invalid viewport {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if self.max_element_count == 0 {
            return Err(UiError::config("max_element_count must be positive"));
        }
        if self.default_line_height_ratio.is_nan() || self.default_line_height_ratio <= 0.0 {
            return Err(UiError::config(format!(
                "invalid line height ratio {}",
                self.default_line_height_ratio
            )));
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            culling_enabled: true,
            max_element_count: 8192,
            default_line_height_ratio: 1.2,
        }
    }
}
