//! Series store with change notifications.

use super::{CsvReader, Series};
use crate::error::{Error, Result};
use crate::model::Field;
use std::path::Path;

/// Change notification emitted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// Rows `first..=last` were appended.
    RowsInserted {
        /// First new row.
        first: usize,
        /// Last new row.
        last: usize,
    },
    /// One field of one row changed in place.
    RowChanged {
        /// Changed row.
        row: usize,
        /// Changed field.
        field: Field,
    },
}

/// Ordered collection of series, in CSV row order.
#[derive(Debug, Default)]
pub struct SeriesStore {
    series: Vec<Series>,
    max_length: usize,
    events: Vec<StoreEvent>,
}

impl SeriesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store contents with the series in a CSV file.
    ///
    /// On error the previous contents are kept.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let parsed = CsvReader::read_file(path)?;

        self.clear();
        for series in parsed {
            self.append(series);
        }

        tracing::info!(
            "Loaded {} series from {} (max length {})",
            self.series.len(),
            path.display(),
            self.max_length
        );
        Ok(())
    }

    /// Append one series at the end.
    pub fn append(&mut self, series: Series) {
        let row = self.series.len();
        self.max_length = self.max_length.max(series.len());
        self.series.push(series);
        self.events.push(StoreEvent::RowsInserted {
            first: row,
            last: row,
        });
    }

    /// Remove every series, reset the maximum length and drop pending events.
    ///
    /// Queued events refer to rows that no longer exist after a clear.
    pub fn clear(&mut self) {
        self.series.clear();
        self.max_length = 0;
        self.events.clear();
    }

    /// Number of series.
    pub fn count(&self) -> usize {
        self.series.len()
    }

    /// Check if the store holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Longest series length seen since the last clear.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Series at `index`.
    pub fn at(&self, index: usize) -> Result<&Series> {
        self.series
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.series.len()))
    }

    /// Iterate over all series in order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Set the selection flag of one series.
    ///
    /// Returns `Ok(true)` when the flag changed, in which case a
    /// [`StoreEvent::RowChanged`] for [`Field::Selected`] is queued.
    pub fn set_selected(&mut self, index: usize, value: bool) -> Result<bool> {
        let count = self.series.len();
        let series = self
            .series
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, count))?;

        if series.selected == value {
            return Ok(false);
        }

        series.selected = value;
        tracing::debug!("Series {} ('{}') selected={}", index, series.name(), value);
        self.events.push(StoreEvent::RowChanged {
            row: index,
            field: Field::Selected,
        });
        Ok(true)
    }

    /// Set every selection flag; returns how many rows changed.
    pub fn set_all_selected(&mut self, value: bool) -> usize {
        (0..self.series.len())
            .filter(|&i| matches!(self.set_selected(i, value), Ok(true)))
            .count()
    }

    /// Indices of selected series.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(rows: &[(&str, &[i64])]) -> SeriesStore {
        let mut store = SeriesStore::new();
        for (name, values) in rows {
            store.append(Series::new(*name, values.to_vec()));
        }
        store
    }

    #[test]
    fn test_append_tracks_max_length() {
        let store = store_with(&[("a", &[1, 2, 3]), ("b", &[1]), ("c", &[1, 2])]);
        assert_eq!(store.count(), 3);
        assert_eq!(store.max_length(), 3);
    }

    #[test]
    fn test_append_emits_rows_inserted() {
        let mut store = store_with(&[("a", &[1]), ("b", &[2])]);
        assert_eq!(
            store.take_events(),
            vec![
                StoreEvent::RowsInserted { first: 0, last: 0 },
                StoreEvent::RowsInserted { first: 1, last: 1 },
            ]
        );
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_at_out_of_range() {
        let store = store_with(&[("a", &[1])]);
        assert_eq!(store.at(0).unwrap().name(), "a");
        assert!(matches!(
            store.at(1),
            Err(Error::IndexOutOfRange { index: 1, count: 1 })
        ));
    }

    #[test]
    fn test_set_selected_is_idempotent() {
        let mut store = store_with(&[("a", &[1]), ("b", &[2])]);
        store.take_events();

        assert!(store.set_selected(1, true).unwrap());
        assert!(!store.set_selected(1, true).unwrap());
        assert_eq!(
            store.take_events(),
            vec![StoreEvent::RowChanged {
                row: 1,
                field: Field::Selected
            }]
        );
        assert_eq!(store.selected_indices(), vec![1]);
    }

    #[test]
    fn test_set_selected_out_of_range_does_not_mutate() {
        let mut store = store_with(&[("a", &[1])]);
        store.take_events();

        assert!(store.set_selected(5, true).is_err());
        assert!(store.take_events().is_empty());
        assert!(store.selected_indices().is_empty());
    }

    #[test]
    fn test_set_all_selected() {
        let mut store = store_with(&[("a", &[1]), ("b", &[2]), ("c", &[3])]);
        store.set_selected(1, true).unwrap();
        assert_eq!(store.set_all_selected(true), 2);
        assert_eq!(store.selected_indices(), vec![0, 1, 2]);
        assert_eq!(store.set_all_selected(false), 3);
        assert!(store.selected_indices().is_empty());
    }

    #[test]
    fn test_clear_resets_max_length() {
        let mut store = store_with(&[("a", &[1, 2, 3, 4])]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.max_length(), 0);
        store.append(Series::new("b", vec![1]));
        assert_eq!(store.max_length(), 1);
    }

    #[test]
    fn test_clear_drops_pending_events() {
        let mut store = store_with(&[("a", &[1]), ("b", &[2])]);
        store.set_selected(1, true).unwrap();
        store.clear();
        assert!(store.take_events().is_empty());
    }
}
