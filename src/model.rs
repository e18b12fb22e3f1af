//! Checkable list model over the series store.
//!
//! The list surface reads rows field by field and writes back only the
//! selection flag. Reads outside the store yield `None` and rejected writes
//! yield `false`; neither raises.

use crate::data::{SeriesStore, StoreEvent};
use crate::error::Result;
use std::path::Path;

/// Field exposed per list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Selection flag (writable).
    Selected,
    /// Series label.
    Name,
    /// Sample values.
    Values,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Selected, Field::Name, Field::Values];

    /// Field name as seen by the list surface.
    pub fn name(self) -> &'static str {
        match self {
            Field::Selected => "selected",
            Field::Name => "name",
            Field::Values => "values",
        }
    }

    /// Check if the list surface may write this field.
    pub fn is_writable(self) -> bool {
        matches!(self, Field::Selected)
    }
}

/// Typed value of one row field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Selection flag.
    Selected(bool),
    /// Series label.
    Name(&'a str),
    /// Sample values.
    Values(&'a [i64]),
}

impl FieldValue<'_> {
    /// Field this value belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Selected(_) => Field::Selected,
            FieldValue::Name(_) => Field::Name,
            FieldValue::Values(_) => Field::Values,
        }
    }
}

/// Row/field access used by list surfaces.
pub trait ListModel {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Read one field of one row; `None` outside `[0, row_count)`.
    fn data(&self, row: usize, field: Field) -> Option<FieldValue<'_>>;

    /// Write one field of one row; `false` when the write was not applied.
    fn set_data(&mut self, row: usize, field: Field, value: FieldValue<'_>) -> bool;

    /// Drain structural and row-change notifications.
    fn take_events(&mut self) -> Vec<StoreEvent>;
}

/// List model owning a [`SeriesStore`].
#[derive(Debug, Default)]
pub struct SelectableListModel {
    store: SeriesStore,
}

impl SelectableListModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model over an existing store.
    pub fn with_store(store: SeriesStore) -> Self {
        Self { store }
    }

    /// Load a CSV file into the underlying store.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.store.load(path)
    }

    /// Longest series length in the store.
    pub fn max_length(&self) -> usize {
        self.store.max_length()
    }

    /// Underlying store.
    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    /// Underlying store, mutably.
    pub fn store_mut(&mut self) -> &mut SeriesStore {
        &mut self.store
    }

    /// Flip the selection flag of a row; returns the new value.
    pub fn toggle(&mut self, row: usize) -> Option<bool> {
        let current = match self.data(row, Field::Selected)? {
            FieldValue::Selected(v) => v,
            _ => return None,
        };
        self.set_data(row, Field::Selected, FieldValue::Selected(!current))
            .then_some(!current)
    }
}

impl ListModel for SelectableListModel {
    fn row_count(&self) -> usize {
        self.store.count()
    }

    fn data(&self, row: usize, field: Field) -> Option<FieldValue<'_>> {
        let series = self.store.at(row).ok()?;
        Some(match field {
            Field::Selected => FieldValue::Selected(series.is_selected()),
            Field::Name => FieldValue::Name(series.name()),
            Field::Values => FieldValue::Values(series.values()),
        })
    }

    fn set_data(&mut self, row: usize, field: Field, value: FieldValue<'_>) -> bool {
        match (field, value) {
            (Field::Selected, FieldValue::Selected(selected)) => {
                self.store.set_selected(row, selected).is_ok()
            },
            _ => false,
        }
    }

    fn take_events(&mut self) -> Vec<StoreEvent> {
        self.store.take_events()
    }
}
