use tracing::debug;

use crate::core::{LinearScale, PlotTransform, TickPlan, XYSource, plan_ticks};
use crate::error::PlotResult;
use crate::render::{EnvelopeRenderer, Renderer, TraceRenderMode, TraceStyle};

use super::TracePlotConfig;
use super::validation::{validate_trace_style, validate_width_hint};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Host-facing facade tying one plot area to a drawing backend.
///
/// `TracePlot` owns the data-to-pixel transform, the trace style and the
/// renderer. Tick planning for both axes follows the configured domains.
pub struct TracePlot<R: Renderer> {
    renderer: R,
    config: TracePlotConfig,
    transform: PlotTransform,
}

impl<R: Renderer> TracePlot<R> {
    pub fn new(renderer: R, config: TracePlotConfig) -> PlotResult<Self> {
        validate_trace_style(config.trace_style)?;
        validate_width_hint(config.x_axis_width_hint, "x")?;
        validate_width_hint(config.y_axis_width_hint, "y")?;
        let transform = PlotTransform::new(
            config.viewport,
            LinearScale::new(config.x_start, config.x_end)?,
            LinearScale::new(config.y_min, config.y_max)?,
        )?;

        Ok(Self {
            renderer,
            config,
            transform,
        })
    }

    #[must_use]
    pub fn config(&self) -> TracePlotConfig {
        self.config
    }

    #[must_use]
    pub fn transform(&self) -> PlotTransform {
        self.transform
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn set_trace_style(&mut self, style: TraceStyle) -> PlotResult<()> {
        validate_trace_style(style)?;
        self.config.trace_style = style;
        Ok(())
    }

    /// Re-fits both domains to the finite bounds of `source`.
    pub fn fit_to_source<S: XYSource + ?Sized>(&mut self, source: &S) -> PlotResult<()> {
        let transform = PlotTransform::fit_source(source, self.config.viewport)?;
        let (x_start, x_end) = transform.x_scale.domain();
        let (y_min, y_max) = transform.y_scale.domain();
        debug!(x_start, x_end, y_min, y_max, "fitted plot domains to source");

        self.config.x_start = x_start;
        self.config.x_end = x_end;
        self.config.y_min = y_min;
        self.config.y_max = y_max;
        self.transform = transform;
        Ok(())
    }

    /// Resets the backing surface before a new set of traces.
    pub fn clear(&mut self) -> PlotResult<()> {
        self.renderer.clear()
    }

    /// Draws `source` as a raw line or an aggregated envelope on top of
    /// previously drawn traces.
    pub fn draw_trace<S: XYSource + ?Sized>(&mut self, source: &S) -> PlotResult<TraceRenderMode> {
        EnvelopeRenderer::new(self.config.trace_style).render(
            source,
            &self.transform,
            &mut self.renderer,
        )
    }

    /// Renders `source` into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn draw_trace_on_cairo_context<S: XYSource + ?Sized>(
        &mut self,
        context: &cairo::Context,
        source: &S,
    ) -> PlotResult<TraceRenderMode>
    where
        R: CairoContextRenderer,
    {
        let (frame, mode) =
            EnvelopeRenderer::new(self.config.trace_style).build_frame(source, &self.transform)?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        Ok(mode)
    }

    pub fn x_ticks(&self) -> PlotResult<TickPlan> {
        let (start, end) = self.transform.x_scale.domain();
        plan_axis_ticks(start, end, self.config.x_tick_width())
    }

    pub fn y_ticks(&self) -> PlotResult<TickPlan> {
        let (start, end) = self.transform.y_scale.domain();
        plan_axis_ticks(start, end, self.config.y_tick_width())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn plan_axis_ticks(start: f64, end: f64, width: f64) -> PlotResult<TickPlan> {
    plan_ticks(start.min(end), start.max(end), width)
}
