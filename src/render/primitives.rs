use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Same RGB, alpha scaled by one half.
    #[must_use]
    pub fn with_half_alpha(self) -> Self {
        self.with_alpha(self.alpha / 2.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(stroke_width: f64) -> PlotResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(PlotError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_points(points: &[(f64, f64)], what: &str) -> PlotResult<()> {
    if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(PlotError::InvalidGeometry(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

/// Open polyline through pixel-space points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.points.is_empty() {
            return Err(PlotError::InvalidGeometry(
                "polyline must contain at least one point".to_owned(),
            ));
        }
        validate_points(&self.points, "polyline")?;
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Outline drawn around a filled polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonStroke {
    pub color: Color,
    pub width: f64,
}

/// Closed, filled ring in pixel space. `stroke: None` leaves the edge undrawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub vertices: Vec<(f64, f64)>,
    pub fill_color: Color,
    pub stroke: Option<PolygonStroke>,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn filled(vertices: Vec<(f64, f64)>, fill_color: Color) -> Self {
        Self {
            vertices,
            fill_color,
            stroke: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(PolygonStroke { color, width });
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.vertices.len() < 3 {
            return Err(PlotError::InvalidGeometry(format!(
                "polygon needs at least 3 vertices, got {}",
                self.vertices.len()
            )));
        }
        validate_points(&self.vertices, "polygon")?;
        self.fill_color.validate()?;
        if let Some(stroke) = self.stroke {
            validate_stroke_width(stroke.width)?;
            stroke.color.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, PolygonPrimitive};

    #[test]
    fn half_alpha_keeps_rgb() {
        let color = Color::rgba(0.2, 0.4, 0.6, 0.8).with_half_alpha();
        assert_eq!(color, Color::rgba(0.2, 0.4, 0.6, 0.4));
    }

    #[test]
    fn two_vertex_polygon_is_degenerate() {
        let polygon =
            PolygonPrimitive::filled(vec![(0.0, 0.0), (1.0, 1.0)], Color::rgb(0.0, 0.0, 0.0));
        assert!(polygon.validate().is_err());
    }
}
