use crate::core::MAX_AXIS_WIDTH;
use crate::error::{PlotError, PlotResult};
use crate::render::TraceStyle;

pub(super) fn validate_trace_style(style: TraceStyle) -> PlotResult<()> {
    style.color.validate()?;
    if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
        return Err(PlotError::InvalidData(
            "trace stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_width_hint(hint: Option<f64>, axis: &str) -> PlotResult<()> {
    match hint {
        Some(value) if !(0.0..=MAX_AXIS_WIDTH).contains(&value) => Err(PlotError::InvalidData(
            format!("{axis} axis width hint must be finite and in [0, {MAX_AXIS_WIDTH}]"),
        )),
        _ => Ok(()),
    }
}
