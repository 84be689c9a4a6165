use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, DrawCommand, PolygonPrimitive, PolylinePrimitive, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polylines_drawn: usize,
    pub polygons_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()>;
}

/// Cairo raster backend.
///
/// Renders offscreen into an ARGB32 image surface through `Renderer::render`,
/// or in place on a caller-owned context through `CairoContextRenderer`.
/// Frames accumulate on the surface until [`Renderer::clear`] repaints it with
/// the clear color, so several traces can share one image.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let mut renderer = Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        };
        renderer.clear()?;
        Ok(renderer)
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Takes effect on the next [`Renderer::clear`].
    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface contents as a PNG file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| PlotError::Backend(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Polygon(polygon) => {
                    draw_polygon(context, polygon)?;
                    stats.polygons_drawn += 1;
                }
                DrawCommand::Polyline(polyline) => {
                    draw_polyline(context, polyline)?;
                    stats.polylines_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }

    fn surface_context(&self) -> PlotResult<Context> {
        Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = self.surface_context()?;
        self.render_with_context(&context, frame)
    }

    fn clear(&mut self) -> PlotResult<()> {
        let context = self.surface_context()?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.last_stats = CairoRenderStats::default();
        Ok(())
    }
}

/// Draws over whatever the host already painted; the external context is
/// never cleared.
impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_polyline(context: &Context, polyline: &PolylinePrimitive) -> PlotResult<()> {
    append_path(context, &polyline.points);
    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err))
}

fn draw_polygon(context: &Context, polygon: &PolygonPrimitive) -> PlotResult<()> {
    append_path(context, &polygon.vertices);
    context.close_path();
    apply_color(context, polygon.fill_color);
    let Some(stroke) = polygon.stroke else {
        return context
            .fill()
            .map_err(|err| map_backend_error("failed to fill polygon", err));
    };

    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill polygon", err))?;
    apply_color(context, stroke.color);
    context.set_line_width(stroke.width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polygon outline", err))
}

fn append_path(context: &Context, points: &[(f64, f64)]) {
    context.new_path();
    for (x, y) in points {
        context.line_to(*x, *y);
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
