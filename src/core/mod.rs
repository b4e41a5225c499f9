pub mod colormap;
pub mod config;
pub mod geometry;
pub mod matrix;
pub mod range;
pub mod types;

pub use config::PlotConfig;
pub use matrix::DataMatrix;
pub use range::ValueRange;
pub use types::{Point, Viewport};
