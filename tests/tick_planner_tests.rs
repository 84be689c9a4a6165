use trace_plot::PlotError;
use trace_plot::core::{
    DEFAULT_AXIS_WIDTH, MAX_AXIS_WIDTH, MajorInterval, Tick, TickLabelFormatter, format_si,
    plan_ticks, plan_ticks_with_formatter, select_tick_grid,
};

struct TickFixture {
    width: f64,
    min: f64,
    max: f64,
    tick_min: f64,
    tick_max: f64,
    spacing: f64,
    label_interval: i64,
}

const fn fixture(
    width: f64,
    min: f64,
    max: f64,
    tick_min: f64,
    tick_max: f64,
    spacing: f64,
    label_interval: i64,
) -> TickFixture {
    TickFixture {
        width,
        min,
        max,
        tick_min,
        tick_max,
        spacing,
        label_interval,
    }
}

const FIXTURES: [TickFixture; 10] = [
    fixture(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0),
    fixture(0.0, 0.0, 1.0, 0.0, 1.0, 0.01, 10),
    fixture(0.0, -1.0, 1.0, -1.0, 1.0, 0.1, 2),
    fixture(100.0, 0.0, 0.9, 0.0, 0.9, 0.1, 10),
    fixture(123.0, 0.0, 1.5, 0.0, 1.5, 0.1, 10),
    fixture(80.0, -1.0, 1.0, -1.0, 1.0, 1.0, 10),
    fixture(105.0, 0.5, 10.0, 0.0, 10.0, 1.0, 10),
    fixture(305.0, -1.0, 0.0, -1.0, 0.0, 0.1, 2),
    fixture(928.0, -10.0, 0.0, -10.0, 0.0, 0.1, 10),
    fixture(1294.0, -12.6, -5.0, -12.6, -5.0, 0.1, 5),
];

fn expected_ticks(min: f64, max: f64, spacing: f64, interval: i64) -> Vec<Tick> {
    if spacing == 0.0 {
        return vec![Tick::major(min, format_si(min))];
    }

    let first = (min / spacing).round() as i64;
    let last = (max / spacing).round() as i64;
    (first..=last)
        .map(|index| {
            let value = index as f64 * spacing;
            if index % interval == 0 {
                Tick::major(value, format_si(value))
            } else {
                Tick::minor(value)
            }
        })
        .collect()
}

#[test]
fn planner_reproduces_reference_fixture_table() {
    for row in &FIXTURES {
        let plan = plan_ticks(row.min, row.max, row.width).expect("plan ticks");
        let expected = expected_ticks(row.tick_min, row.tick_max, row.spacing, row.label_interval);
        assert_eq!(
            plan.ticks, expected,
            "width={} min={} max={}",
            row.width, row.min, row.max
        );
    }
}

#[test]
fn grid_selection_for_fixture_ranges() {
    let cases = [
        (0.0, 1.0, DEFAULT_AXIS_WIDTH, 0.01, MajorInterval::Ten),
        (-1.0, 1.0, DEFAULT_AXIS_WIDTH, 0.1, MajorInterval::Two),
        (0.0, 0.9, 100.0, 0.1, MajorInterval::Ten),
        (0.0, 1.5, 123.0, 0.1, MajorInterval::Ten),
        (-1.0, 1.0, 80.0, 1.0, MajorInterval::Two),
        (0.5, 10.0, 105.0, 1.0, MajorInterval::Ten),
        (-1.0, 0.0, 305.0, 0.1, MajorInterval::Two),
        (-10.0, 0.0, 928.0, 0.1, MajorInterval::Ten),
        (-12.6, -5.0, 1294.0, 0.1, MajorInterval::Five),
    ];

    for (min, max, width, spacing, interval) in cases {
        let grid = select_tick_grid(min, max, width).expect("grid");
        assert_eq!(grid.minor_spacing, spacing, "min={min} max={max} width={width}");
        assert_eq!(grid.major_interval, interval, "min={min} max={max} width={width}");
    }
}

#[test]
fn zero_width_hint_uses_default_axis_width() {
    let defaulted = plan_ticks(0.0, 1.0, 0.0).expect("defaulted");
    let explicit = plan_ticks(0.0, 1.0, DEFAULT_AXIS_WIDTH).expect("explicit");

    assert_eq!(defaulted, explicit);
    assert_eq!(defaulted.minor_spacing(), Some(0.01));
    assert_eq!(defaulted.major_interval(), Some(MajorInterval::Ten));
    assert_eq!(defaulted.ticks.len(), 101);
}

#[test]
fn unit_range_at_eighty_units_lands_on_integers() {
    let plan = plan_ticks(-1.0, 1.0, 80.0).expect("plan");

    assert_eq!(plan.minor_spacing(), Some(1.0));
    let values: Vec<f64> = plan.ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![-1.0, 0.0, 1.0]);
    let labels: Vec<Option<&str>> = plan.ticks.iter().map(|t| t.label.as_deref()).collect();
    assert_eq!(labels, vec![None, Some("0"), None]);
}

#[test]
fn degenerate_range_yields_single_labelled_tick() {
    let plan = plan_ticks(5.0, 5.0, 100.0).expect("plan");

    assert_eq!(plan.ticks, vec![Tick::major(5.0, "5")]);
    assert!(plan.grid.is_none());
}

#[test]
fn major_labels_use_si_prefixes() {
    let plan = plan_ticks(0.0, 1.0, 0.0).expect("plan");
    let labels: Vec<&str> = plan
        .major_ticks()
        .filter_map(|tick| tick.label.as_deref())
        .collect();

    assert_eq!(
        labels,
        vec![
            "0", "100m", "200m", "300m", "400m", "500m", "600m", "700m", "800m", "900m", "1"
        ]
    );
}

#[test]
fn labels_near_prefix_boundary_roll_over() {
    // 100 * 1e-11 is 9.999999999999999e-10 in binary floating point.
    let plan = plan_ticks(0.8e-9, 1.1e-9, 0.0).expect("plan");
    let labels: Vec<&str> = plan
        .major_ticks()
        .filter_map(|tick| tick.label.as_deref())
        .collect();

    assert_eq!(plan.minor_spacing(), Some(1e-11));
    assert_eq!(labels, vec!["800p", "850p", "900p", "950p", "1n", "1.05n", "1.1n"]);
}

#[test]
fn inverted_or_non_finite_ranges_are_rejected() {
    assert!(matches!(
        plan_ticks(1.0, 0.0, 100.0),
        Err(PlotError::InvalidRange { .. })
    ));
    assert!(matches!(
        plan_ticks(f64::NAN, 1.0, 100.0),
        Err(PlotError::InvalidRange { .. })
    ));
    assert!(matches!(
        plan_ticks(0.0, f64::INFINITY, 100.0),
        Err(PlotError::InvalidRange { .. })
    ));
}

#[test]
fn negative_width_hint_is_rejected() {
    assert!(matches!(
        plan_ticks(0.0, 1.0, -10.0),
        Err(PlotError::InvalidData(_))
    ));
}

#[test]
fn width_hint_is_bounded() {
    assert!(matches!(
        plan_ticks(0.0, 1.0, 1.0e12),
        Err(PlotError::InvalidData(_))
    ));

    let widest = plan_ticks(0.0, 1.0, MAX_AXIS_WIDTH).expect("widest accepted axis");
    assert!(widest.ticks.len() < 200_000);
}

struct FixedDecimals;

impl TickLabelFormatter for FixedDecimals {
    fn format(&self, value: f64) -> String {
        format!("{value:.2}")
    }
}

#[test]
fn custom_formatter_only_touches_major_labels() {
    let plan = plan_ticks_with_formatter(-1.0, 0.0, 305.0, &FixedDecimals).expect("plan");

    let majors: Vec<&str> = plan
        .ticks
        .iter()
        .filter_map(|tick| tick.label.as_deref())
        .collect();
    assert_eq!(majors.len(), 6);
    assert_eq!(majors.first().copied(), Some("-1.00"));
    assert_eq!(majors.last().copied(), Some("0.00"));
    assert_eq!(plan.ticks.iter().filter(|tick| !tick.is_major()).count(), 5);

    let closure = |value: f64| format!("<{value}>");
    let flat = plan_ticks_with_formatter(2.0, 2.0, 0.0, &closure).expect("flat");
    assert_eq!(flat.ticks[0].label.as_deref(), Some("<2>"));
}
