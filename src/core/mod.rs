pub mod aggregate;
pub mod label_format;
pub mod sample_series;
pub mod scale;
pub mod source;
pub mod ticks;
pub mod types;

pub use aggregate::{Envelope, aggregate, bucket_count, bucket_len};
#[cfg(feature = "parallel-aggregation")]
pub use aggregate::aggregate_parallel;
pub use label_format::{SiLabelFormatter, TickLabelFormatter, format_si, si_scale};
pub use sample_series::SampleSeries;
pub use scale::{LinearScale, PlotTransform};
pub use source::XYSource;
pub use ticks::{
    DEFAULT_AXIS_WIDTH, MAX_AXIS_WIDTH, MajorInterval, REFERENCE_UNIT, TARGET_LABEL_PITCH,
    TARGET_MINOR_TICK_PITCH, Tick, TickGrid, TickPlan, plan_ticks, plan_ticks_with_formatter,
    select_tick_grid,
};
pub use types::{DataPoint, Viewport};
