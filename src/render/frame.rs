use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::PlotResult;
use crate::render::{PolygonPrimitive, PolylinePrimitive};

/// One drawing-surface call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Polyline(PolylinePrimitive),
    Polygon(PolygonPrimitive),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommandKind {
    Polyline,
    Polygon,
}

impl DrawCommand {
    #[must_use]
    pub fn kind(&self) -> DrawCommandKind {
        match self {
            Self::Polyline(_) => DrawCommandKind::Polyline,
            Self::Polygon(_) => DrawCommandKind::Polygon,
        }
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// Commands are replayed in insertion order, so later commands paint over
/// earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.commands.push(DrawCommand::Polyline(polyline));
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.commands.push(DrawCommand::Polygon(polygon));
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.viewport.ensure_valid()?;
        for command in &self.commands {
            match command {
                DrawCommand::Polyline(polyline) => polyline.validate()?,
                DrawCommand::Polygon(polygon) => polygon.validate()?,
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn command_kinds(&self) -> Vec<DrawCommandKind> {
        self.commands.iter().map(DrawCommand::kind).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
