/// Turns a tick value into label text.
pub trait TickLabelFormatter {
    fn format(&self, value: f64) -> String;
}

impl<F> TickLabelFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// Compact engineering notation with an SI prefix (`100m`, `1.5k`, `5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiLabelFormatter;

impl TickLabelFormatter for SiLabelFormatter {
    fn format(&self, value: f64) -> String {
        format_si(value)
    }
}

const SI_PREFIXES: [(i32, &str); 21] = [
    (-30, "q"),
    (-27, "r"),
    (-24, "y"),
    (-21, "z"),
    (-18, "a"),
    (-15, "f"),
    (-12, "p"),
    (-9, "n"),
    (-6, "µ"),
    (-3, "m"),
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
    (12, "T"),
    (15, "P"),
    (18, "E"),
    (21, "Z"),
    (24, "Y"),
    (27, "R"),
    (30, "Q"),
];

const MAX_FRACTION_DIGITS: usize = 6;

fn rescale(magnitude: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        magnitude / 10_f64.powi(exponent)
    } else {
        magnitude * 10_f64.powi(-exponent)
    }
}

/// Splits `value` into a mantissa in `[1, 1000)` and its SI exponent.
#[must_use]
pub fn si_scale(value: f64) -> (f64, i32) {
    if value == 0.0 || !value.is_finite() {
        return (value, 0);
    }

    let magnitude = value.abs();
    let mut exponent = (magnitude.log10().floor() as i32).div_euclid(3) * 3;
    let mut mantissa = rescale(magnitude, exponent);
    if mantissa >= 1000.0 {
        exponent += 3;
        mantissa = rescale(magnitude, exponent);
    } else if mantissa < 1.0 {
        exponent -= 3;
        mantissa = rescale(magnitude, exponent);
    }

    (mantissa.copysign(value), exponent)
}

// 999.9999996 prints as "1000.000000"; such mantissas belong to the next prefix.
fn rounds_to_next_prefix(mantissa: f64) -> bool {
    let scale = 10_f64.powi(MAX_FRACTION_DIGITS as i32);
    (mantissa.abs() * scale).round() >= 1000.0 * scale
}

fn trim_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Formats `value` as `<mantissa><prefix>` with at most six fraction digits.
///
/// Values outside the `q..Q` prefix range fall back to exponent notation.
#[must_use]
pub fn format_si(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let (mut mantissa, mut exponent) = si_scale(value);
    if rounds_to_next_prefix(mantissa) {
        exponent += 3;
        mantissa = rescale(value.abs(), exponent).copysign(value);
    }
    let Some((_, prefix)) = SI_PREFIXES.iter().find(|(exp, _)| *exp == exponent) else {
        return format!("{value:e}");
    };

    let number = trim_decimal(format!("{mantissa:.prec$}", prec = MAX_FRACTION_DIGITS));
    format!("{number}{prefix}")
}
