//! Annular-sector wedge construction.
//!
//! All geometry here lives in centered chart coordinates: origin at the
//! disc center, y pointing up, extent `[-r_max, r_max]` on both axes.
//! Mapping into pixel space (and the y flip) belongs to the scene
//! builders.

use smallvec::SmallVec;
use std::f64::consts::TAU;

use crate::core::types::{Point, Viewport};

/// Samples per arc edge. Outer arc + reversed inner arc + one closing
/// vertex gives `2 * ARC_SAMPLES + 1` vertices per wedge.
pub const ARC_SAMPLES: usize = 20;

/// Boundary fractions are clamped into this window so no ring collapses
/// to zero width at the center or the rim.
pub const BOUNDARY_CLAMP_MIN: f64 = 0.01;
pub const BOUNDARY_CLAMP_MAX: f64 = 0.99;

/// Fraction of the shorter viewport side used as the outer radius.
const RADIUS_VIEWPORT_RATIO: f64 = 0.45;

pub type WedgeVertices = SmallVec<[Point; 2 * ARC_SAMPLES + 1]>;

/// Closed polygon outline of one annular sector.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeOutline {
    pub ring: usize,
    pub sector: usize,
    pub vertices: WedgeVertices,
}

/// Effective outer radius for a drawing area, in pixels.
#[must_use]
pub fn outer_radius(viewport: Viewport) -> f64 {
    f64::from(viewport.width.min(viewport.height)) * RADIUS_VIEWPORT_RATIO
}

/// Radius ladder for `boundaries.len() + 1` rings: boundary fractions
/// clamped into the safe window, with 0 prepended and 1 appended, scaled
/// by `r_max`. Ring `i` spans `[ladder[i], ladder[i + 1]]`.
#[must_use]
pub fn radius_ladder(boundaries: &[f64], r_max: f64) -> Vec<f64> {
    let mut ladder = Vec::with_capacity(boundaries.len() + 2);
    ladder.push(0.0);
    ladder.extend(
        boundaries
            .iter()
            .map(|&b| b.clamp(BOUNDARY_CLAMP_MIN, BOUNDARY_CLAMP_MAX) * r_max),
    );
    ladder.push(r_max);
    ladder
}

/// `sector_count + 1` angular boundaries over `[0, 2pi]` traversed in
/// reverse: sector 0 starts at angle 0 and proceeds clockwise. The
/// ordering is part of the visual contract and must not change.
#[must_use]
pub fn sector_angles(sector_count: usize) -> Vec<f64> {
    (0..=sector_count)
        .map(|k| TAU * (sector_count - k) as f64 / sector_count as f64)
        .collect()
}

/// Builds the wedge outline for one (ring, sector) cell: `ARC_SAMPLES`
/// points along the outer arc, the same count along the inner arc in
/// reverse, then the first outer point again to close the path.
#[must_use]
pub fn wedge_outline(
    ring: usize,
    sector: usize,
    r_inner: f64,
    r_outer: f64,
    angle_start: f64,
    angle_end: f64,
) -> WedgeOutline {
    let mut vertices = WedgeVertices::new();
    for step in 0..ARC_SAMPLES {
        let t = angle_at(angle_start, angle_end, step);
        vertices.push(Point::new(r_outer * t.cos(), r_outer * t.sin()));
    }
    for step in (0..ARC_SAMPLES).rev() {
        let t = angle_at(angle_start, angle_end, step);
        vertices.push(Point::new(r_inner * t.cos(), r_inner * t.sin()));
    }
    vertices.push(vertices[0]);
    WedgeOutline {
        ring,
        sector,
        vertices,
    }
}

fn angle_at(angle_start: f64, angle_end: f64, step: usize) -> f64 {
    let fraction = step as f64 / (ARC_SAMPLES - 1) as f64;
    angle_start + (angle_end - angle_start) * fraction
}

/// All wedge outlines for a grid, ring-major (ring 0 innermost, sectors
/// clockwise from angle 0 within each ring).
#[must_use]
pub fn grid_wedges(ring_count: usize, sector_count: usize, boundaries: &[f64], r_max: f64) -> Vec<WedgeOutline> {
    let ladder = radius_ladder(boundaries, r_max);
    let angles = sector_angles(sector_count);
    let mut wedges = Vec::with_capacity(ring_count * sector_count);
    for ring in 0..ring_count {
        for sector in 0..sector_count {
            wedges.push(wedge_outline(
                ring,
                sector,
                ladder[ring],
                ladder[ring + 1],
                angles[sector],
                angles[sector + 1],
            ));
        }
    }
    wedges
}

/// Axis tick positions: the span `[-r_max, r_max]` divided into
/// `tick_count + 2` even stops with the two endpoint stops dropped.
/// Ticks are cosmetic distance marks; no labels are attached.
#[must_use]
pub fn axis_tick_positions(r_max: f64, tick_count: usize) -> Vec<f64> {
    let stops = tick_count + 1;
    (1..=tick_count)
        .map(|k| -r_max + 2.0 * r_max * k as f64 / stops as f64)
        .collect()
}
