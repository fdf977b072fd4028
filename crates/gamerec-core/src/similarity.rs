//! Precomputed item-to-item similarity scores.

use std::io::Read;
use std::path::Path;

use ndarray::{Array2, ArrayView1};
use tracing::info;

use crate::error::{Error, Result};

/// Square similarity table aligned with catalog row positions.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    scores: Array2<f64>,
}

impl SimilarityMatrix {
    /// Wrap an existing square array.
    pub fn from_array(scores: Array2<f64>) -> Result<Self> {
        let (rows, cols) = scores.dim();
        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }
        Ok(Self { scores })
    }

    /// Build from row vectors. Every row must have one score per row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut flat = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(if row == 0 {
                    Error::NotSquare { rows: n, cols: values.len() }
                } else {
                    Error::RaggedRow { row, expected: n, found: values.len() }
                });
            }
            flat.extend(values);
        }

        let scores = Array2::from_shape_vec((n, n), flat)
            .map_err(|_| Error::NotSquare { rows: n, cols: n })?;
        Ok(Self { scores })
    }

    /// Load a headerless CSV of scores.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!(path = %path.as_ref().display(), "Loading similarity matrix");
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        Self::from_csv(reader)
    }

    /// Load headerless CSV scores from any source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);
        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            let values: Vec<f64> = row?;
            rows.push(values);
        }
        let matrix = Self::from_rows(rows)?;
        info!(size = matrix.len(), "Loaded similarity matrix");
        Ok(matrix)
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.scores.nrows()
    }

    /// Check if the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores of every item against the item at `index`.
    pub fn row(&self, index: usize) -> Result<ArrayView1<'_, f64>> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange { index, len: self.len() });
        }
        Ok(self.scores.row(index))
    }

    /// Score between two items.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.scores.get((i, j)).copied()
    }

    /// Underlying array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.scores
    }
}
