use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::core::{DataPoint, XYSource};
use crate::error::{PlotError, PlotResult};

/// Affine map from a data domain onto a pixel extent starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale over `[min, max]`, widening a zero-width domain by one
    /// unit on each side so flat traces stay drawable.
    pub fn covering(min: f64, max: f64) -> PlotResult<Self> {
        if min == max {
            return Self::new(min - 1.0, max + 1.0);
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        (value - self.domain_start) / span * extent_px
    }
}

/// Data-space to pixel-space mapping for one plot area.
///
/// Pixel `y` grows downward, so `y_scale`'s domain start lands on the bottom
/// edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotTransform {
    pub viewport: Viewport,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl PlotTransform {
    pub fn new(viewport: Viewport, x_scale: LinearScale, y_scale: LinearScale) -> PlotResult<Self> {
        viewport.ensure_valid()?;
        Ok(Self {
            viewport,
            x_scale,
            y_scale,
        })
    }

    /// Fits both scales to the finite bounds of `source`.
    pub fn fit_source<S: XYSource + ?Sized>(source: &S, viewport: Viewport) -> PlotResult<Self> {
        let mut x_bounds: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
        let mut y_bounds: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
        for index in 0..source.len() {
            let point = source.xy(index);
            if !point.is_finite() {
                continue;
            }
            let (x, y) = (OrderedFloat(point.x), OrderedFloat(point.y));
            x_bounds = Some(x_bounds.map_or((x, x), |(lo, hi)| (lo.min(x), hi.max(x))));
            y_bounds = Some(y_bounds.map_or((y, y), |(lo, hi)| (lo.min(y), hi.max(y))));
        }

        let (Some((x_min, x_max)), Some((y_min, y_max))) = (x_bounds, y_bounds) else {
            return Err(PlotError::EmptySource);
        };

        Self::new(
            viewport,
            LinearScale::covering(x_min.into_inner(), x_max.into_inner())?,
            LinearScale::covering(y_min.into_inner(), y_max.into_inner())?,
        )
    }

    #[must_use]
    pub fn to_pixel(&self, point: DataPoint) -> (f64, f64) {
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        (
            self.x_scale.domain_to_pixel(point.x, width),
            height - self.y_scale.domain_to_pixel(point.y, height),
        )
    }

    #[must_use]
    pub fn map_points(&self, points: &[DataPoint]) -> Vec<(f64, f64)> {
        points.iter().map(|point| self.to_pixel(*point)).collect()
    }
}
