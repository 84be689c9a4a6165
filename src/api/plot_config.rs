use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::TraceStyle;

/// Public plot bootstrap configuration.
///
/// Serializable so host applications can persist and reload plot setup
/// without inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePlotConfig {
    pub viewport: Viewport,
    pub x_start: f64,
    pub x_end: f64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default)]
    pub trace_style: TraceStyle,
    /// Axis length handed to the tick planner; `None` uses the viewport width.
    #[serde(default)]
    pub x_axis_width_hint: Option<f64>,
    /// Axis length handed to the tick planner; `None` uses the viewport height.
    #[serde(default)]
    pub y_axis_width_hint: Option<f64>,
}

impl TracePlotConfig {
    /// Creates a minimal config with a unit y domain.
    #[must_use]
    pub fn new(viewport: Viewport, x_start: f64, x_end: f64) -> Self {
        Self {
            viewport,
            x_start,
            x_end,
            y_min: 0.0,
            y_max: 1.0,
            trace_style: TraceStyle::default(),
            x_axis_width_hint: None,
            y_axis_width_hint: None,
        }
    }

    #[must_use]
    pub fn with_y_domain(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_trace_style(mut self, style: TraceStyle) -> Self {
        self.trace_style = style;
        self
    }

    #[must_use]
    pub fn with_axis_width_hints(mut self, x_hint: Option<f64>, y_hint: Option<f64>) -> Self {
        self.x_axis_width_hint = x_hint;
        self.y_axis_width_hint = y_hint;
        self
    }

    /// Width hint used when planning x-axis ticks.
    #[must_use]
    pub fn x_tick_width(&self) -> f64 {
        self.x_axis_width_hint.unwrap_or(f64::from(self.viewport.width))
    }

    /// Width hint used when planning y-axis ticks.
    #[must_use]
    pub fn y_tick_width(&self) -> f64 {
        self.y_axis_width_hint.unwrap_or(f64::from(self.viewport.height))
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}
