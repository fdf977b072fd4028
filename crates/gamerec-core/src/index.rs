//! Title <-> row position resolution.

use crate::dataset::Catalog;
use crate::error::{Error, Result};

/// Position of the first row whose `name` equals `title` exactly.
pub fn index_of(title: &str, catalog: &Catalog) -> Result<usize> {
    catalog
        .iter()
        .position(|record| record.name == title)
        .ok_or_else(|| Error::TitleNotFound {
            title: title.to_string(),
        })
}

/// `name` of the row at `index`.
pub fn title_of(index: usize, catalog: &Catalog) -> Result<&str> {
    catalog
        .get(index)
        .map(|record| record.name.as_str())
        .ok_or(Error::IndexOutOfRange {
            index,
            len: catalog.len(),
        })
}
