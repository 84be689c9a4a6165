//! trace-plot: dense trace rendering and axis tick planning.
//!
//! Two numeric pieces sit at the center of the crate: pixel-bucket min/max
//! aggregation that turns an over-sampled polyline into a filled envelope, and
//! a tick planner that snaps axis spacing to powers of ten with a 2/5/10
//! major-tick cadence. Drawing goes through the backend-agnostic
//! [`render::Renderer`] contract.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{TracePlot, TracePlotConfig};
pub use error::{PlotError, PlotResult};
