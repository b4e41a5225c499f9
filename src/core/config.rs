use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const MIN_RING_COUNT: usize = 2;
pub const MIN_SECTOR_COUNT: usize = 2;
pub const MIN_TICK_COUNT: usize = 3;

/// Shape of one annular grid: how the unit disc is cut into rings and
/// sectors, plus the cosmetic axis tick count.
///
/// `ring_boundaries` holds `ring_count - 1` fractions strictly inside
/// `(0, 1)`, strictly increasing; they partition the unit radius into
/// `ring_count` rings with ring 0 innermost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub ring_count: usize,
    pub sector_count: usize,
    pub ring_boundaries: Vec<f64>,
    pub tick_count: usize,
}

impl PlotConfig {
    /// Config with evenly spaced ring boundaries (`i / ring_count`).
    pub fn uniform(ring_count: usize, sector_count: usize, tick_count: usize) -> ChartResult<Self> {
        let config = Self {
            ring_count,
            sector_count,
            ring_boundaries: uniform_boundaries(ring_count),
            tick_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Config with caller-supplied ring boundaries.
    pub fn with_boundaries(
        ring_count: usize,
        sector_count: usize,
        ring_boundaries: Vec<f64>,
        tick_count: usize,
    ) -> ChartResult<Self> {
        let config = Self {
            ring_count,
            sector_count,
            ring_boundaries,
            tick_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.ring_count < MIN_RING_COUNT || self.sector_count < MIN_SECTOR_COUNT {
            return Err(ChartError::Config(format!(
                "ring and sector counts must be >= {MIN_RING_COUNT}, got {} x {}",
                self.ring_count, self.sector_count
            )));
        }
        if self.tick_count < MIN_TICK_COUNT {
            return Err(ChartError::Config(format!(
                "tick count must be >= {MIN_TICK_COUNT}, got {}",
                self.tick_count
            )));
        }
        if self.ring_boundaries.len() != self.ring_count - 1 {
            return Err(ChartError::Config(format!(
                "expected {} ring boundaries for {} rings, got {}",
                self.ring_count - 1,
                self.ring_count,
                self.ring_boundaries.len()
            )));
        }
        validate_boundary_values(&self.ring_boundaries)?;
        Ok(())
    }
}

/// Evenly spaced boundary fractions for `ring_count` rings.
#[must_use]
pub fn uniform_boundaries(ring_count: usize) -> Vec<f64> {
    (1..ring_count)
        .map(|i| i as f64 / ring_count as f64)
        .collect()
}

/// Checks each boundary is finite, strictly inside `(0, 1)`, and that the
/// sequence is strictly increasing.
pub fn validate_boundary_values(boundaries: &[f64]) -> ChartResult<()> {
    for &value in boundaries {
        if !value.is_finite() || value <= 0.0 || value >= 1.0 {
            return Err(ChartError::Parse(format!(
                "ring boundary {value} must lie strictly inside (0, 1)"
            )));
        }
    }
    for pair in boundaries.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ChartError::Parse(format!(
                "ring boundaries must be strictly increasing, got {} after {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}
