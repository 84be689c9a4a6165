use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlotTransform, XYSource, aggregate};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, PolygonPrimitive, PolylinePrimitive, RenderFrame, Renderer};

/// Above this many samples per horizontal pixel a trace is drawn as a
/// min/max envelope instead of a raw polyline.
pub const RAW_SAMPLES_PER_PIXEL_LIMIT: usize = 2;

/// Stroke used for a trace and, with half alpha, for its envelope fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceStyle {
    pub color: Color,
    pub stroke_width: f64,
}

impl TraceStyle {
    #[must_use]
    pub const fn new(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
        }
    }

    #[must_use]
    pub fn envelope_fill(self) -> Color {
        self.color.with_half_alpha()
    }
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self::new(Color::rgb(0.0, 0.0, 0.0), 1.0)
    }
}

/// How a trace ended up on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceRenderMode {
    Raw,
    Aggregated { buckets: usize },
}

/// Draws one trace, switching to a filled min/max envelope once the sample
/// density exceeds [`RAW_SAMPLES_PER_PIXEL_LIMIT`] per pixel column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeRenderer {
    style: TraceStyle,
}

impl EnvelopeRenderer {
    #[must_use]
    pub fn new(style: TraceStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn style(&self) -> TraceStyle {
        self.style
    }

    /// Whether `sample_count` samples over `width_px` columns need aggregation.
    #[must_use]
    pub fn needs_aggregation(sample_count: usize, width_px: u32) -> bool {
        let raw_limit = (width_px as usize).saturating_mul(RAW_SAMPLES_PER_PIXEL_LIMIT);
        sample_count > raw_limit
    }

    /// Builds the draw commands for `source` without touching a surface.
    ///
    /// Raw traces yield one polyline. Aggregated traces yield, in order, the
    /// envelope fill polygon (no outline), the upper bound polyline and the
    /// lower bound polyline. The fill is omitted when only one bucket fits.
    pub fn build_frame<S: XYSource + ?Sized>(
        &self,
        source: &S,
        transform: &PlotTransform,
    ) -> PlotResult<(RenderFrame, TraceRenderMode)> {
        if source.is_empty() {
            return Err(PlotError::EmptySource);
        }
        self.style.color.validate()?;

        let viewport = transform.viewport;
        let frame = RenderFrame::new(viewport);

        if !Self::needs_aggregation(source.len(), viewport.width) {
            debug!(
                samples = source.len(),
                width_px = viewport.width,
                "drawing raw trace"
            );
            let points = (0..source.len())
                .map(|index| transform.to_pixel(source.xy(index)))
                .collect();
            let frame = frame.with_polyline(PolylinePrimitive::new(
                points,
                self.style.stroke_width,
                self.style.color,
            ));
            return Ok((frame, TraceRenderMode::Raw));
        }

        let envelope = aggregate(source, viewport.width as usize)?;
        let buckets = envelope.len();
        debug!(
            samples = source.len(),
            width_px = viewport.width,
            buckets,
            "drawing aggregated trace envelope"
        );

        let maxes = transform.map_points(&envelope.maxes);
        let mins = transform.map_points(&envelope.mins);

        // A single bucket has no area to fill; its bounds are still drawn.
        let frame = if buckets < 2 {
            frame
        } else {
            let ring = transform.map_points(&envelope.polygon_ring());
            frame.with_polygon(PolygonPrimitive::filled(ring, self.style.envelope_fill()))
        };
        let frame = frame
            .with_polyline(PolylinePrimitive::new(
                maxes,
                self.style.stroke_width,
                self.style.color,
            ))
            .with_polyline(PolylinePrimitive::new(
                mins,
                self.style.stroke_width,
                self.style.color,
            ));

        Ok((frame, TraceRenderMode::Aggregated { buckets }))
    }

    /// Builds the trace frame and submits it to `renderer` as one pass.
    ///
    /// Renderer failures are returned unchanged.
    pub fn render<S, R>(
        &self,
        source: &S,
        transform: &PlotTransform,
        renderer: &mut R,
    ) -> PlotResult<TraceRenderMode>
    where
        S: XYSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let (frame, mode) = self.build_frame(source, transform)?;
        renderer.render(&frame)?;
        Ok(mode)
    }
}

impl Default for EnvelopeRenderer {
    fn default() -> Self {
        Self::new(TraceStyle::default())
    }
}
