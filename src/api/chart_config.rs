use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_BAND_PADDING, Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

/// Number of entries shown before the chart is expanded.
pub const DEFAULT_TOP_N: usize = 10;
/// Duration of the expand/collapse animation.
pub const DEFAULT_TRANSITION_DURATION_MS: f64 = 1000.0;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can keep chart setup in a JSON file;
/// every field except `viewport` falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    #[serde(default = "default_axis_tick_count")]
    pub axis_tick_count: usize,
    #[serde(default)]
    pub attribution: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(800, 500))
    }
}

impl ChartConfig {
    /// Creates a config with reference layout defaults for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            band_padding: default_band_padding(),
            top_n: default_top_n(),
            transition_duration_ms: default_transition_duration_ms(),
            label_font_size_px: default_label_font_size_px(),
            axis_font_size_px: default_axis_font_size_px(),
            axis_tick_count: default_axis_tick_count(),
            attribution: None,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Sets the expand/collapse animation length; `0` switches instantly.
    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn validate(&self) -> ChartResult<PlotArea> {
        let plot = PlotArea::from_viewport(self.viewport, self.margins)?;

        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        if self.top_n == 0 {
            return Err(ChartError::InvalidData("top_n must be > 0".to_owned()));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        for (name, size) in [
            ("label", self.label_font_size_px),
            ("axis", self.axis_font_size_px),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} font size must be finite and > 0"
                )));
            }
        }
        if self.axis_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "axis tick count must be > 0".to_owned(),
            ));
        }

        Ok(plot)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_band_padding() -> f64 {
    DEFAULT_BAND_PADDING
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_transition_duration_ms() -> f64 {
    DEFAULT_TRANSITION_DURATION_MS
}

fn default_label_font_size_px() -> f64 {
    12.0
}

fn default_axis_font_size_px() -> f64 {
    10.0
}

fn default_axis_tick_count() -> usize {
    10
}
