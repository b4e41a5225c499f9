//! pizza-chart-rs: annular radial heatmap ("pizza slice") charting core.
//!
//! The crate splits into a pure geometry/color core, a backend-agnostic
//! render scene, and a plot registry that owns items and value-range
//! bookkeeping. Hosts feed configs and row-text data in, get validated
//! `RenderFrame` scenes (or taxonomy errors) back, and can rasterize to
//! PNG through the optional Cairo backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::api::{PlotRegistry, build_grid_scene, build_legend_frame, parse_grid_config};
pub use crate::core::{DataMatrix, PlotConfig, ValueRange, Viewport};
pub use crate::error::{ChartError, ChartResult};
