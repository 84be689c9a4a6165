mod envelope;
mod frame;
mod null_renderer;
mod primitives;

pub use envelope::{EnvelopeRenderer, RAW_SAMPLES_PER_PIXEL_LIMIT, TraceRenderMode, TraceStyle};
pub use frame::{DrawCommand, DrawCommandKind, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PolygonPrimitive, PolygonStroke, PolylinePrimitive};

use crate::error::PlotResult;

/// Contract implemented by any drawing surface.
///
/// A backend receives one fully materialized `RenderFrame` per pass and must
/// replay its commands in order. Taking `&mut self` keeps concurrent passes
/// from interleaving on the same surface. Passes draw on top of each other
/// until `clear` resets the surface.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;

    fn clear(&mut self) -> PlotResult<()> {
        Ok(())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
