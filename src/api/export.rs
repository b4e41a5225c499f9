//! PNG export batches.
//!
//! Every export action gets a fresh `export_YYYYMMDD_HHMMSS` directory so
//! no file is ever overwritten by a later batch. Exported surfaces use a
//! transparent background at export resolution; interactive previews stay
//! opaque white at preview resolution.
//!
//! This is the only module that logs: the domain core stays silent and
//! leaves user-facing reporting to the host.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::api::registry::{PlotRegistry, id_number};
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CairoRenderer, Color, RenderFrame, Renderer};

/// Export canvas sizes: 7 in at 300 dpi for grids, 5 in at 300 dpi for
/// the colorbar.
pub const EXPORT_GRID_VIEWPORT: Viewport = Viewport::square(2100);
pub const EXPORT_LEGEND_VIEWPORT: Viewport = Viewport::square(1500);

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub include_colorbar: bool,
    pub legend_font_size: f64,
    pub custom_ticks: Vec<f64>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_colorbar: false,
            legend_font_size: 18.0,
            custom_ticks: Vec::new(),
        }
    }
}

/// Result of one export action.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBatch {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Exports a single plot item into a fresh batch directory under `base`.
pub fn export_plot(
    registry: &PlotRegistry,
    id: &str,
    custom_ticks: &[f64],
    base: &Path,
) -> ChartResult<PathBuf> {
    let number = id_number(id)?;
    registry.item(id)?;

    let timestamp = batch_timestamp();
    let directory = create_export_dir(base, &timestamp)?;
    let path = directory.join(format!("plot{number}_{timestamp}.png"));

    let scene = registry.item_scene(id, custom_ticks, EXPORT_GRID_VIEWPORT)?;
    write_frame_png(&scene.frame, &path)?;
    info!(path = %path.display(), "exported plot image");
    Ok(path)
}

/// Exports every plot item (and optionally a colorbar per item) into one
/// fresh batch directory under `base`.
pub fn export_all(
    registry: &PlotRegistry,
    options: &ExportOptions,
    base: &Path,
) -> ChartResult<ExportBatch> {
    if registry.is_empty() {
        return Err(ChartError::Config("no plot items to export".to_owned()));
    }

    let timestamp = batch_timestamp();
    let directory = create_export_dir(base, &timestamp)?;
    debug!(directory = %directory.display(), "starting export batch");

    let mut files = Vec::new();
    for id in registry.plot_ids() {
        let number = id_number(&id)?;
        let path = directory.join(format!("plot{number}_{timestamp}.png"));
        let scene = registry.item_scene(&id, &options.custom_ticks, EXPORT_GRID_VIEWPORT)?;
        write_frame_png(&scene.frame, &path)?;
        info!(path = %path.display(), "exported plot image");
        files.push(path);

        if options.include_colorbar {
            let legend_path = directory.join(format!("colorbar_plot{number}_{timestamp}.png"));
            let frame = registry.build_legend_frame(
                options.legend_font_size,
                &options.custom_ticks,
                EXPORT_LEGEND_VIEWPORT,
            )?;
            write_frame_png(&frame, &legend_path)?;
            info!(path = %legend_path.display(), "exported colorbar image");
            files.push(legend_path);
        }
    }

    Ok(ExportBatch { directory, files })
}

/// Exports a standalone colorbar for the currently resolved range.
pub fn export_colorbar(
    registry: &PlotRegistry,
    font_size: f64,
    custom_ticks: &[f64],
    base: &Path,
) -> ChartResult<PathBuf> {
    let timestamp = batch_timestamp();
    let directory = create_export_dir(base, &timestamp)?;
    let path = directory.join(format!("colorbar_{timestamp}.png"));

    let frame = registry.build_legend_frame(font_size, custom_ticks, EXPORT_LEGEND_VIEWPORT)?;
    write_frame_png(&frame, &path)?;
    info!(path = %path.display(), "exported colorbar image");
    Ok(path)
}

fn batch_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

fn create_export_dir(base: &Path, timestamp: &str) -> ChartResult<PathBuf> {
    let directory = base.join(format!("export_{timestamp}"));
    fs::create_dir_all(&directory)?;
    Ok(directory)
}

fn write_frame_png(frame: &RenderFrame, path: &Path) -> ChartResult<()> {
    let width = i32::try_from(frame.viewport.width)
        .map_err(|_| ChartError::Backend("viewport width exceeds surface limits".to_owned()))?;
    let height = i32::try_from(frame.viewport.height)
        .map_err(|_| ChartError::Backend("viewport height exceeds surface limits".to_owned()))?;

    let mut renderer = CairoRenderer::new(width, height)?;
    renderer.set_clear_color(Color::transparent())?;
    renderer.render(frame)?;
    renderer.write_png(path)
}
