//! Row access abstraction.
//!
//! The engine never owns row data. It reads rows through [`RowAccess`], an
//! opaque capability exposing a stable identifier and value lookup by column
//! id, so any table model can back it. [`Record`] is the bundled
//! implementation for hosts that do not have their own row type.

use crate::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only access to one row of the table.
///
/// Implementations must return the same identifier and values for the
/// lifetime of a render pass; the engine re-reads on every call and keeps no
/// copies that could drift from the owning model.
pub trait RowAccess {
    /// Stable identifier for the row, used as the selection key.
    fn id(&self) -> &str;

    /// Looks up the raw value for a column id, if present.
    fn value(&self, column: &str) -> Option<&CellValue>;
}

/// An owned row: an identifier plus column-id-keyed values.
///
/// Deserializes from flat JSON objects, so a product feed entry like
/// `{"id": "PROD-00001", "boxCount": 3, "shippingMethod": "parcel"}` maps
/// directly onto a `Record`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    #[serde(flatten)]
    values: BTreeMap<String, CellValue>,
}

impl Record {
    /// Creates an empty record with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: BTreeMap::new(),
        }
    }

    /// Adds a column value (builder pattern).
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    /// Sets a column value in place.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.values.insert(column.into(), value.into());
    }

    /// Returns the column ids present on this record.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl RowAccess for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }
}
