//! Per-item feature vectors used for scatter plots.

use std::io::Read;
use std::path::Path;

use ndarray::{Array2, ArrayView1};
use tracing::info;

use crate::error::{Error, Result};

/// Feature values with one row per item and one column per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    items: Vec<String>,
    dimensions: Vec<String>,
    values: Array2<f64>,
}

impl FeatureTable {
    /// Build a table from labels and a value grid of shape (items, dimensions).
    pub fn new(items: Vec<String>, dimensions: Vec<String>, values: Array2<f64>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows != items.len() || cols != dimensions.len() {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                items: items.len(),
                dimensions: dimensions.len(),
            });
        }
        Ok(Self { items, dimensions, values })
    }

    /// Load from a CSV file whose header is `name,<dimension>...`.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!(path = %path.as_ref().display(), "Loading feature table");
        Self::from_csv(csv::Reader::from_path(path)?)
    }

    /// Load from any CSV source whose header is `name,<dimension>...`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let dimensions: Vec<String> = reader.headers()?.iter().skip(1).map(String::from).collect();

        let mut items = Vec::new();
        let mut flat = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let mut fields = record.iter();
            items.push(fields.next().unwrap_or_default().to_string());

            for (column, field) in dimensions.iter().zip(fields) {
                let value = field.trim().parse::<f64>().map_err(|_| Error::InvalidValue {
                    row,
                    column: column.clone(),
                    value: field.to_string(),
                })?;
                flat.push(value);
            }
        }

        let cells = flat.len();
        let values = Array2::from_shape_vec((items.len(), dimensions.len()), flat).map_err(|_| {
            Error::ShapeMismatch {
                rows: items.len(),
                cols: cells.checked_div(items.len()).unwrap_or(0),
                items: items.len(),
                dimensions: dimensions.len(),
            }
        })?;

        info!(items = items.len(), dimensions = dimensions.len(), "Loaded feature table");
        Ok(Self { items, dimensions, values })
    }

    /// Item labels in row order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Dimension labels in column order.
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Feature vector of the item labelled `label`.
    pub fn vector(&self, label: &str) -> Result<ArrayView1<'_, f64>> {
        let row = self
            .items
            .iter()
            .position(|item| item == label)
            .ok_or_else(|| Error::LabelNotFound { label: label.to_string() })?;
        Ok(self.values.row(row))
    }
}
