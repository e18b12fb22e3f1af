//! Series data and CSV loading.
//!
//! This module holds the series store that backs the checkable list and the
//! chart, and the reader that fills it from header-less CSV files.

mod reader;
mod series;
mod store;

pub use reader::CsvReader;
pub use series::Series;
pub use store::{SeriesStore, StoreEvent};
