mod plot_config;
mod trace_plot;
mod validation;

pub use plot_config::TracePlotConfig;
pub use trace_plot::TracePlot;
