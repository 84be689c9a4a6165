use crate::error::PlotResult;
use crate::render::{DrawCommandKind, RenderFrame, Renderer};

/// Headless renderer used by tests and batch tooling.
///
/// It validates frames like a real backend would and remembers the order of
/// the last pass's commands.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_commands: Vec<DrawCommandKind>,
    pub frames_rendered: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn last_polyline_count(&self) -> usize {
        self.count(DrawCommandKind::Polyline)
    }

    #[must_use]
    pub fn last_polygon_count(&self) -> usize {
        self.count(DrawCommandKind::Polygon)
    }

    fn count(&self, kind: DrawCommandKind) -> usize {
        self.last_commands.iter().filter(|k| **k == kind).count()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.last_commands = frame.command_kinds();
        self.frames_rendered += 1;
        Ok(())
    }
}
