use crate::types::{DocumentIndex, FeatureVector};
use crate::Error;

/// Dense row-major matrix: one row per document, one column per vocabulary token.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    n_rows: usize,
    n_cols: usize,
    values: Vec<f64>,
}

impl FeatureMatrix {
    pub fn from_rows(rows: Vec<FeatureVector>, n_cols: usize) -> Result<Self, Error> {
        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * n_cols);

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::InvalidInputError(format!(
                    "Row {} has {} columns, expected {}",
                    row_idx,
                    row.len(),
                    n_cols
                )));
            }
            values.extend(row);
        }

        Ok(FeatureMatrix {
            n_rows,
            n_cols,
            values,
        })
    }

    pub fn from_vec(n_rows: usize, n_cols: usize, values: Vec<f64>) -> Result<Self, Error> {
        if values.len() != n_rows * n_cols {
            return Err(Error::InvalidInputError(format!(
                "Expected {} values for a {}x{} matrix, got {}",
                n_rows * n_cols,
                n_rows,
                n_cols,
                values.len()
            )));
        }

        Ok(FeatureMatrix {
            n_rows,
            n_cols,
            values,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.n_cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.n_cols;
        &self.values[start..start + self.n_cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // `chunks_exact(0)` panics, so a column-less matrix yields empty rows explicitly
        let n_cols = self.n_cols;
        (0..self.n_rows).map(move |row| {
            let start = row * n_cols;
            &self.values[start..start + n_cols]
        })
    }

    /// Copies column `col` out into its own vector.
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.n_rows).map(|row| self.get(row, col)).collect()
    }

    /// Builds a new matrix from the given rows, in the given order.
    pub fn select_rows(&self, indices: &[DocumentIndex]) -> FeatureMatrix {
        let mut values = Vec::with_capacity(indices.len() * self.n_cols);

        for &idx in indices {
            values.extend_from_slice(self.row(idx));
        }

        FeatureMatrix {
            n_rows: indices.len(),
            n_cols: self.n_cols,
            values,
        }
    }
}
