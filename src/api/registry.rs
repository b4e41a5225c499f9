use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::grid_scene_builder::{GridScene, build_grid_scene};
use crate::api::legend_scene_builder::build_legend_frame;
use crate::core::{DataMatrix, PlotConfig, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

pub const REGISTRY_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

const ID_PREFIX: &str = "plot_";

/// One registered plot: its grid shape, its cell data, and the most
/// recently built preview frame, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotItem {
    pub config: PlotConfig,
    pub data: DataMatrix,
    pub cached_frame: Option<RenderFrame>,
}

/// Owns the session's plot items and the value-range bookkeeping shared
/// across them.
///
/// Ids are `plot_1..plot_N` and stay dense: deleting an item renumbers
/// every higher-numbered item down by one, preserving relative order. The
/// global range is recomputed after every create, delete, or data update
/// by rescanning all matrices, with equal bounds collapsed to `(0, 1)`.
#[derive(Debug, Default)]
pub struct PlotRegistry {
    items: IndexMap<String, PlotItem>,
    global_range: ValueRange,
}

impl PlotRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            global_range: ValueRange::unit(),
        }
    }

    /// Registers a new item with a zero-filled matrix of the config's
    /// shape and returns its id (max existing numeric suffix + 1).
    pub fn create_item(&mut self, config: PlotConfig) -> ChartResult<String> {
        config.validate()?;
        let next = self
            .items
            .keys()
            .filter_map(|key| id_number(key).ok())
            .max()
            .unwrap_or(0)
            + 1;
        let id = format!("{ID_PREFIX}{next}");
        let data = DataMatrix::zeros(config.ring_count, config.sector_count);
        self.items.insert(id.clone(), PlotItem {
            config,
            data,
            cached_frame: None,
        });
        self.recompute_global_range();
        Ok(id)
    }

    /// Removes an item, releases its cached frame, and renumbers every
    /// higher-numbered item down by one. The renumbered map is swapped in
    /// wholesale, so callers never observe a partially renumbered state.
    pub fn delete_item(&mut self, id: &str) -> ChartResult<()> {
        let deleted = id_number(id)?;
        if self.items.shift_remove(id).is_none() {
            return Err(ChartError::NotFound(id.to_owned()));
        }

        let mut renumbered = IndexMap::with_capacity(self.items.len());
        for (key, item) in self.items.drain(..) {
            let number = id_number(&key)?;
            let new_key = if number > deleted {
                format!("{ID_PREFIX}{}", number - 1)
            } else {
                key
            };
            renumbered.insert(new_key, item);
        }
        self.items = renumbered;

        self.recompute_global_range();
        Ok(())
    }

    /// Drops every item and resets the global range to `(0, 1)`.
    pub fn delete_all(&mut self) {
        self.items.clear();
        self.recompute_global_range();
    }

    /// Replaces an item's matrix from the row/comma text form.
    ///
    /// Shape and parse failures leave the previous matrix untouched; on
    /// success the matrix is swapped wholesale, never merged cell-wise.
    pub fn update_data(&mut self, id: &str, text: &str) -> ChartResult<()> {
        let (rows, cols) = {
            let item = self.item(id)?;
            (item.config.ring_count, item.config.sector_count)
        };
        let matrix = DataMatrix::parse_text(text, rows, cols)?;
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| ChartError::NotFound(id.to_owned()))?;
        item.data = matrix;
        self.recompute_global_range();
        Ok(())
    }

    pub fn item(&self, id: &str) -> ChartResult<&PlotItem> {
        self.items
            .get(id)
            .ok_or_else(|| ChartError::NotFound(id.to_owned()))
    }

    /// Item ids in display order.
    #[must_use]
    pub fn plot_ids(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Global `(min, max)` across all matrices, already collapsed.
    #[must_use]
    pub fn global_range(&self) -> ValueRange {
        self.global_range
    }

    /// An item's matrix formatted back to the text form `update_data`
    /// accepts, for host-side editors.
    pub fn data_text(&self, id: &str) -> ChartResult<String> {
        Ok(self.item(id)?.data.to_text())
    }

    /// The single range authority: custom ticks win over the global range,
    /// and equal bounds always collapse to `(0, 1)`. Every render call
    /// must go through this before reaching a scene builder.
    #[must_use]
    pub fn resolve_range(&self, custom_ticks: &[f64]) -> ValueRange {
        ValueRange::from_ticks(custom_ticks)
            .unwrap_or(self.global_range)
            .collapsed()
    }

    /// Element-wise clamp into the resolved range. Only applied when
    /// custom ticks are active; see `display_matrix`.
    #[must_use]
    pub fn clamp_for_display(matrix: &DataMatrix, range: ValueRange) -> DataMatrix {
        matrix.clamped(range.min, range.max)
    }

    /// The matrix actually handed to the grid builder. Clamped into the
    /// resolved range only when custom ticks are active; otherwise the raw
    /// matrix passes through and the legend spans the true global range.
    /// The asymmetry matches the reference behavior and is deliberate.
    pub fn display_matrix(&self, id: &str, custom_ticks: &[f64]) -> ChartResult<DataMatrix> {
        let item = self.item(id)?;
        if custom_ticks.is_empty() {
            Ok(item.data.clone())
        } else {
            Ok(Self::clamp_for_display(
                &item.data,
                self.resolve_range(custom_ticks),
            ))
        }
    }

    /// Builds an item's grid scene without touching the cache. Resolves
    /// the range, applies the conditional clamp, then runs the builder.
    pub fn item_scene(
        &self,
        id: &str,
        custom_ticks: &[f64],
        viewport: Viewport,
    ) -> ChartResult<GridScene> {
        let range = self.resolve_range(custom_ticks);
        let data = self.display_matrix(id, custom_ticks)?;
        let item = self.item(id)?;
        build_grid_scene(&item.config, &data, range, viewport)
    }

    /// Builds an item's grid frame and caches it as the item's preview.
    pub fn build_item_frame(
        &mut self,
        id: &str,
        custom_ticks: &[f64],
        viewport: Viewport,
    ) -> ChartResult<RenderFrame> {
        let scene = self.item_scene(id, custom_ticks, viewport)?;
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| ChartError::NotFound(id.to_owned()))?;
        item.cached_frame = Some(scene.frame.clone());
        Ok(scene.frame)
    }

    /// Rebuilds every item's cached preview frame.
    pub fn rebuild_all_frames(
        &mut self,
        custom_ticks: &[f64],
        viewport: Viewport,
    ) -> ChartResult<()> {
        for id in self.plot_ids() {
            self.build_item_frame(&id, custom_ticks, viewport)?;
        }
        Ok(())
    }

    /// Builds the colorbar legend for the currently resolved range.
    pub fn build_legend_frame(
        &self,
        font_size: f64,
        custom_ticks: &[f64],
        viewport: Viewport,
    ) -> ChartResult<RenderFrame> {
        build_legend_frame(self.resolve_range(custom_ticks), font_size, custom_ticks, viewport)
    }

    /// Full rescan of every matrix. Also drops cached frames, since any
    /// range change can shift every wedge color.
    fn recompute_global_range(&mut self) {
        self.invalidate_cached_frames();
        let mut min_max: Option<(f64, f64)> = None;
        for item in self.items.values() {
            if let Some((item_min, item_max)) = item.data.min_max() {
                min_max = Some(match min_max {
                    Some((min, max)) => (min.min(item_min), max.max(item_max)),
                    None => (item_min, item_max),
                });
            }
        }
        self.global_range = match min_max {
            Some((min, max)) => ValueRange::new(min, max).collapsed(),
            None => ValueRange::unit(),
        };
    }

    fn invalidate_cached_frames(&mut self) {
        for item in self.items.values_mut() {
            item.cached_frame = None;
        }
    }
}

/// Serializable session snapshot: configs and matrices only, no frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshotV1 {
    pub schema_version: u32,
    pub items: IndexMap<String, PlotItemSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotItemSnapshot {
    pub config: PlotConfig,
    pub data: DataMatrix,
}

impl PlotRegistry {
    /// Serializes configs and matrices as a versioned JSON contract.
    pub fn snapshot_json(&self) -> ChartResult<String> {
        let snapshot = RegistrySnapshotV1 {
            schema_version: REGISTRY_SNAPSHOT_JSON_SCHEMA_V1,
            items: self
                .items
                .iter()
                .map(|(id, item)| {
                    (id.clone(), PlotItemSnapshot {
                        config: item.config.clone(),
                        data: item.data.clone(),
                    })
                })
                .collect(),
        };
        serde_json::to_string_pretty(&snapshot)
            .map_err(|err| ChartError::Backend(format!("failed to serialize snapshot: {err}")))
    }

    /// Restores a registry from a snapshot, re-validating every config and
    /// matrix shape and recomputing the global range from scratch.
    pub fn from_snapshot_json(input: &str) -> ChartResult<Self> {
        let snapshot: RegistrySnapshotV1 = serde_json::from_str(input)
            .map_err(|err| ChartError::Parse(format!("failed to parse snapshot json: {err}")))?;
        if snapshot.schema_version != REGISTRY_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::Parse(format!(
                "unsupported snapshot schema version: {}",
                snapshot.schema_version
            )));
        }

        let mut registry = Self::new();
        for (id, item) in snapshot.items {
            id_number(&id)?;
            item.config.validate()?;
            if item.data.shape() != (item.config.ring_count, item.config.sector_count) {
                let (rows, cols) = item.data.shape();
                return Err(ChartError::Shape(format!(
                    "snapshot item `{id}` data is {rows} x {cols}, config expects {} x {}",
                    item.config.ring_count, item.config.sector_count
                )));
            }
            registry.items.insert(id, PlotItem {
                config: item.config,
                data: item.data,
                cached_frame: None,
            });
        }
        registry.recompute_global_range();
        Ok(registry)
    }
}

/// Numeric suffix of a `plot_N` id.
pub(crate) fn id_number(id: &str) -> ChartResult<usize> {
    id.strip_prefix(ID_PREFIX)
        .and_then(|suffix| suffix.parse().ok())
        .ok_or_else(|| ChartError::NotFound(id.to_owned()))
}
