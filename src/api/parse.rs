//! Textual configuration parsing.
//!
//! Hosts collect grid shape, boundary, and legend settings as raw text
//! fields; this module turns them into validated domain values and keeps
//! all the user-input error wording in one place.

use serde::{Deserialize, Serialize};

use crate::core::config::{PlotConfig, uniform_boundaries, validate_boundary_values};
use crate::error::{ChartError, ChartResult};

/// Raw text fields as a host form supplies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfigInput {
    pub ring_count_text: String,
    pub sector_count_text: String,
    pub tick_count_text: String,
    pub use_custom_boundaries: bool,
    pub boundary_text: String,
    pub legend_font_text: String,
    pub use_custom_ticks: bool,
    pub legend_tick_text: String,
}

/// Legend settings that ride alongside a plot config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub font_size: f64,
    pub custom_ticks: Vec<f64>,
}

/// Fully parsed configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGridConfig {
    pub config: PlotConfig,
    pub legend: LegendOptions,
}

pub fn parse_grid_config(input: &GridConfigInput) -> ChartResult<ParsedGridConfig> {
    let ring_count = parse_count(&input.ring_count_text, "ring count")?;
    let sector_count = parse_count(&input.sector_count_text, "sector count")?;
    let tick_count = parse_count(&input.tick_count_text, "tick count")?;

    let ring_boundaries = if input.use_custom_boundaries {
        let boundaries = parse_float_list(&input.boundary_text, "ring boundary")?;
        if boundaries.is_empty() {
            return Err(ChartError::Parse(
                "custom ring boundaries enabled but no values given".to_owned(),
            ));
        }
        if boundaries.len() + 1 != ring_count {
            return Err(ChartError::Parse(format!(
                "expected {} ring boundary values, got {}",
                ring_count.saturating_sub(1),
                boundaries.len()
            )));
        }
        validate_boundary_values(&boundaries)?;
        boundaries
    } else {
        uniform_boundaries(ring_count)
    };

    let config = PlotConfig::with_boundaries(ring_count, sector_count, ring_boundaries, tick_count)?;

    let font_size: f64 = input.legend_font_text.trim().parse().map_err(|_| {
        ChartError::Parse(format!(
            "legend font size `{}` is not a number",
            input.legend_font_text.trim()
        ))
    })?;
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(ChartError::Parse(format!(
            "legend font size must be > 0, got {font_size}"
        )));
    }

    let custom_ticks = if input.use_custom_ticks && !input.legend_tick_text.trim().is_empty() {
        let ticks = parse_float_list(&input.legend_tick_text, "legend tick")?;
        validate_strictly_increasing(&ticks, "legend tick")?;
        ticks
    } else {
        Vec::new()
    };

    Ok(ParsedGridConfig {
        config,
        legend: LegendOptions {
            font_size,
            custom_ticks,
        },
    })
}

fn parse_count(text: &str, label: &str) -> ChartResult<usize> {
    text.trim()
        .parse()
        .map_err(|_| ChartError::Parse(format!("{label} `{}` is not a whole number", text.trim())))
}

/// Comma-separated float list; empty text parses to an empty list.
fn parse_float_list(text: &str, label: &str) -> ChartResult<Vec<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse()
                .map_err(|_| ChartError::Parse(format!("{label} `{token}` is not a number")))
        })
        .collect()
}

fn validate_strictly_increasing(values: &[f64], label: &str) -> ChartResult<()> {
    for pair in values.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ChartError::Parse(format!(
                "{label} values must be strictly increasing, got {} after {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}
