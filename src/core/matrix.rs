// File: src/core/matrix.rs
use crate::error::{GibberishError, Result};
use serde::{Deserialize, Serialize};

/// Transition counts collected during training, stored row-major.
/// Every cell starts at the smoothing prior.
#[derive(Debug, Clone)]
pub struct CountMatrix {
    size: usize,
    cells: Vec<u64>,
}

impl CountMatrix {
    pub fn new(size: usize, prior: u64) -> Self {
        Self { size, cells: vec![prior; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Records one `from -> to` transition.
    pub fn observe(&mut self, from: usize, to: usize) -> Result<()> {
        let cell = &mut self.cells[from * self.size + to];
        *cell = cell.checked_add(1).ok_or_else(|| {
            GibberishError::TrainingValidation(format!("transition count {from}->{to} overflowed"))
        })?;
        Ok(())
    }

    pub fn count(&self, from: usize, to: usize) -> u64 {
        self.cells[from * self.size + to]
    }

    pub fn row_total(&self, row: usize) -> Result<u64> {
        self.row(row)
            .iter()
            .try_fold(0u64, |total, &c| total.checked_add(c))
            .ok_or_else(|| {
                GibberishError::TrainingValidation(format!("transition row {row} total overflowed"))
            })
    }

    fn row(&self, row: usize) -> &[u64] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Divides every row by its total and takes the natural log.
    pub fn normalize(&self) -> Result<LogProbMatrix> {
        let mut rows = Vec::with_capacity(self.size);
        for i in 0..self.size {
            let total = self.row_total(i)?;
            if total == 0 {
                return Err(GibberishError::TrainingValidation(format!(
                    "transition row {i} has no counts to normalize"
                )));
            }
            let total = total as f64;
            rows.push(self.row(i).iter().map(|&c| (c as f64 / total).ln()).collect());
        }
        Ok(LogProbMatrix { rows })
    }
}

/// The trained k×k grid; `get(i, j)` is `ln P(next = j | current = i)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct LogProbMatrix {
    rows: Vec<Vec<f64>>,
}

impl LogProbMatrix {
    /// Accepts a grid read from elsewhere. It must be square and non-empty with
    /// finite, non-positive cells.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(GibberishError::Configuration("transition matrix is empty".into()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GibberishError::Configuration(format!(
                    "transition matrix row {i} has {} columns, expected {size}",
                    row.len()
                )));
            }
            if let Some(bad) = row.iter().find(|v| !v.is_finite() || **v > 0.0) {
                return Err(GibberishError::Configuration(format!(
                    "transition matrix row {i} holds {bad}, which is not a log-probability"
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for LogProbMatrix {
    type Error = GibberishError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<LogProbMatrix> for Vec<Vec<f64>> {
    fn from(matrix: LogProbMatrix) -> Self {
        matrix.rows
    }
}
