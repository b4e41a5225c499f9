use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Inclusive `(min, max)` pair driving color normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Neutral range substituted whenever bounds would collapse.
    #[must_use]
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    /// Same range, with equal bounds replaced by `(0, 1)`.
    #[must_use]
    pub fn collapsed(self) -> Self {
        if self.is_degenerate() { Self::unit() } else { self }
    }

    /// Range spanned by a custom tick list: dedupe, sort, take the ends.
    /// Returns `None` for an empty list. Input order does not matter.
    #[must_use]
    pub fn from_ticks(ticks: &[f64]) -> Option<Self> {
        let mut sorted: Vec<OrderedFloat<f64>> =
            ticks.iter().copied().map(OrderedFloat).collect();
        sorted.sort();
        sorted.dedup();
        let first = sorted.first()?;
        let last = sorted.last()?;
        Some(Self::new(first.into_inner(), last.into_inner()))
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::unit()
    }
}
