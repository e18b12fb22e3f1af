//! seriesview - plot named integer series from a CSV file.
//!
//! Series are read from a header-less CSV file (`name,v1,v2,...` per row),
//! shown in a checkable list, and the selected ones are plotted against their
//! sample index on a chart surface.
//!
//! # Components
//!
//! - [`data::SeriesStore`]: ordered series with selection flags
//! - [`model::SelectableListModel`]: field-based list view of the store
//! - [`chart::ChartController`]: axis limits, legend, status text, and plot
//!   recompute onto a [`chart::RenderSurface`]
//!
//! # Example
//!
//! ```no_run
//! use seriesview::chart::{CanvasSurface, ChartController};
//! use seriesview::model::{Field, FieldValue, ListModel, SelectableListModel};
//!
//! let mut model = SelectableListModel::new();
//! let mut chart = ChartController::new();
//! chart.attach_surface(CanvasSurface::new());
//!
//! chart.set_filename("series.csv", &mut model)?;
//! model.set_data(0, Field::Selected, FieldValue::Selected(true));
//! chart.redraw(&model);
//!
//! for line in chart.surface().unwrap().lines() {
//!     println!("{}: {} points", line.label, line.points.len());
//! }
//! # Ok::<(), seriesview::Error>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod data;
pub mod error;
pub mod file_browser;
pub mod model;
pub mod ui;
pub mod util;

pub use error::{Error, Result};
pub use util::LayoutConfig;
