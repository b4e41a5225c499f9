mod grid_scene_builder;
mod legend_scene_builder;
mod parse;
mod registry;

#[cfg(feature = "cairo-backend")]
mod export;

pub use grid_scene_builder::{GridScene, build_grid_scene};
pub use legend_scene_builder::build_legend_frame;
pub use parse::{GridConfigInput, LegendOptions, ParsedGridConfig, parse_grid_config};
pub use registry::{
    PlotItem, PlotItemSnapshot, PlotRegistry, REGISTRY_SNAPSHOT_JSON_SCHEMA_V1, RegistrySnapshotV1,
};

#[cfg(feature = "cairo-backend")]
pub use export::{
    EXPORT_GRID_VIEWPORT, EXPORT_LEGEND_VIEWPORT, ExportBatch, ExportOptions, export_all,
    export_colorbar, export_plot,
};

use crate::core::Viewport;

/// Interactive preview canvas sizes (2 in at 80 dpi for grids, 5 in at
/// 100 dpi for the colorbar).
pub const PREVIEW_GRID_VIEWPORT: Viewport = Viewport::square(160);
pub const PREVIEW_LEGEND_VIEWPORT: Viewport = Viewport::square(500);
