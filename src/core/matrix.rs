use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Row-major numeric matrix of one cell value per (ring, sector).
///
/// Row `i` holds ring `i` (0 = innermost), column `j` holds sector `j`.
/// The shape is fixed at construction; replacement requires an exact
/// shape match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DataMatrix {
    /// Zero-filled matrix of the given shape.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from row vectors, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<f64>]) -> ChartResult<Self> {
        let Some(first) = rows.first() else {
            return Err(ChartError::Shape("matrix needs at least one row".to_owned()));
        };
        let cols = first.len();
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ChartError::Shape(format!(
                    "row {} has {} values, expected {cols}",
                    index + 1,
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }

    /// Parses the row/comma text form: one line per ring, comma-separated
    /// sector values. Shape must match (`rows` x `cols`) exactly.
    pub fn parse_text(text: &str, rows: usize, cols: usize) -> ChartResult<Self> {
        let mut parsed: Vec<Vec<f64>> = Vec::with_capacity(rows);
        for (index, line) in text.trim().lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                return Err(ChartError::Parse(format!("row {line_no} must not be empty")));
            }
            let mut row = Vec::with_capacity(cols);
            for token in line.split(',') {
                let token = token.trim();
                let value: f64 = token.parse().map_err(|_| {
                    ChartError::Parse(format!("row {line_no}: `{token}` is not a number"))
                })?;
                row.push(value);
            }
            if row.len() != cols {
                return Err(ChartError::Shape(format!(
                    "row {line_no} has {} values, expected {cols}",
                    row.len()
                )));
            }
            parsed.push(row);
        }
        if parsed.len() != rows {
            return Err(ChartError::Shape(format!(
                "expected {rows} rows of data, got {}",
                parsed.len()
            )));
        }
        Self::from_rows(&parsed)
    }

    /// Formats back to the row/comma text form accepted by `parse_text`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.values
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> ChartResult<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(ChartError::Shape(format!(
                "cell ({row}, {col}) outside {} x {} matrix",
                self.rows, self.cols
            )));
        }
        Ok(self.values[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> ChartResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(ChartError::Shape(format!(
                "cell ({row}, {col}) outside {} x {} matrix",
                self.rows, self.cols
            )));
        }
        self.values[row * self.cols + col] = value;
        Ok(())
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Minimum and maximum over all cells, or `None` for an empty matrix.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for value in iter {
            min = min.min(value);
            max = max.max(value);
        }
        Some((min, max))
    }

    /// New matrix with every cell clamped into `[vmin, vmax]`.
    #[must_use]
    pub fn clamped(&self, vmin: f64, vmax: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            values: self
                .values
                .iter()
                .map(|value| value.clamp(vmin, vmax))
                .collect(),
        }
    }
}
