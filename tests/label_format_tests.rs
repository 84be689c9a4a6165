use trace_plot::core::{SiLabelFormatter, TickLabelFormatter, format_si, si_scale};

#[test]
fn plain_range_has_no_prefix() {
    assert_eq!(format_si(1.0), "1");
    assert_eq!(format_si(12.5), "12.5");
    assert_eq!(format_si(999.0), "999");
    assert_eq!(format_si(-42.0), "-42");
}

#[test]
fn engineering_prefixes_cover_small_and_large_values() {
    assert_eq!(format_si(1000.0), "1k");
    assert_eq!(format_si(1500.0), "1.5k");
    assert_eq!(format_si(3.0e9), "3G");
    assert_eq!(format_si(0.5), "500m");
    assert_eq!(format_si(2.0e-6), "2µ");
    assert_eq!(format_si(-7.5e-9), "-7.5n");
}

#[test]
fn float_noise_is_trimmed_by_fraction_limit() {
    assert_eq!(format_si(0.1 + 0.2), "300m");
    assert_eq!(format_si(7.0 * 0.1), "700m");
}

#[test]
fn mantissa_stays_in_engineering_window() {
    for value in [1.0e-12, 3.3e-7, 0.02, 1.0, 45.0, 6.0e5, 8.1e10] {
        let (mantissa, exponent) = si_scale(value);
        assert!((1.0..1000.0).contains(&mantissa), "value={value}");
        assert_eq!(exponent % 3, 0);
    }
}

#[test]
fn default_formatter_delegates_to_format_si() {
    assert_eq!(SiLabelFormatter.format(0.01), format_si(0.01));
}
