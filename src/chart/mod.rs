//! Chart controller - axis limits, legend, status text, and plot recompute.
//!
//! The controller owns the rendering surface and queues [`ChartEvent`]s for
//! every property change. It never repaints on its own: whoever attached the
//! surface drains the events and decides, via [`repaint_requested`], when to
//! call [`RenderSurface::request_repaint`]. The full plot recompute
//! ([`ChartController::redraw`]) is a separate, explicit call.

mod source;
mod surface;

pub use source::resolve_local_path;
pub use surface::{CanvasSurface, PlottedLine, RenderSurface};

use crate::error::Result;
use crate::model::{Field, FieldValue, ListModel, SelectableListModel};
use std::path::{Path, PathBuf};

/// Status text shown before any file is loaded.
pub const INITIAL_STATUS: &str = "Please load a data file";

const ABOUT: &str = "Series of data are loaded from a .csv file, and their names are \
displayed in a checkable list. Select the series to plot them on the chart.";

/// Observable controller property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// Lower x-axis bound.
    XFrom,
    /// Upper x-axis bound.
    XTo,
    /// Legend visibility.
    Legend,
    /// Status text.
    StatusText,
}

/// Notification emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartEvent {
    /// A property changed value.
    ValueChanged(Property),
    /// The plot was recomputed.
    StateChanged,
}

/// Check if an event should trigger a surface repaint.
///
/// Axis, legend and recompute events repaint; status text does not.
pub fn repaint_requested(event: &ChartEvent) -> bool {
    match event {
        ChartEvent::ValueChanged(Property::StatusText) => false,
        ChartEvent::ValueChanged(_) | ChartEvent::StateChanged => true,
    }
}

/// Controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No surface attached yet.
    Unattached,
    /// Surface attached, no file loaded.
    AttachedEmpty,
    /// Surface attached and a file loaded.
    AttachedLoaded,
}

/// Drives a [`RenderSurface`] from a [`ListModel`].
#[derive(Debug)]
pub struct ChartController<S> {
    x_from: i64,
    x_to: i64,
    legend_visible: bool,
    status_text: String,
    filename: Option<PathBuf>,
    surface: Option<S>,
    events: Vec<ChartEvent>,
}

impl<S: RenderSurface> Default for ChartController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RenderSurface> ChartController<S> {
    /// Create an unattached controller.
    pub fn new() -> Self {
        Self {
            x_from: 0,
            x_to: 1,
            legend_visible: false,
            status_text: INITIAL_STATUS.to_string(),
            filename: None,
            surface: None,
            events: Vec::new(),
        }
    }

    /// Bind the rendering surface.
    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    /// Check if a surface is attached.
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Attached surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Attached surface, mutably.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        match (&self.surface, &self.filename) {
            (None, _) => ControllerState::Unattached,
            (Some(_), None) => ControllerState::AttachedEmpty,
            (Some(_), Some(_)) => ControllerState::AttachedLoaded,
        }
    }

    /// Lower x-axis bound.
    pub fn x_from(&self) -> i64 {
        self.x_from
    }

    /// Upper x-axis bound.
    pub fn x_to(&self) -> i64 {
        self.x_to
    }

    /// Legend visibility.
    pub fn legend_visible(&self) -> bool {
        self.legend_visible
    }

    /// Status text.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Currently loaded file.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Short description of the application.
    pub fn about(&self) -> &'static str {
        ABOUT
    }

    /// Load the file named by a path or `file://` URL.
    ///
    /// Returns `Ok(false)` when the value is empty or names the file already
    /// loaded. On success the upper x bound is reset to the longest series and
    /// the plot is recomputed.
    pub fn set_filename(&mut self, raw: &str, model: &mut SelectableListModel) -> Result<bool> {
        let Some(path) = resolve_local_path(raw) else {
            return Ok(false);
        };
        if self.filename.as_deref() == Some(path.as_path()) {
            return Ok(false);
        }

        if let Err(e) = model.load(&path) {
            tracing::error!("Error loading {}: {}", path.display(), e);
            self.set_status_text(format!("Failed to load {}: {}", path.display(), e));
            return Err(e);
        }

        self.set_status_text(format!("Loaded {}", path.display()));
        self.filename = Some(path);
        self.set_x_to(model.max_length() as f64);
        self.redraw(model);
        Ok(true)
    }

    /// Set the status text.
    pub fn set_status_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.status_text == text {
            return false;
        }
        self.status_text = text;
        self.events.push(ChartEvent::ValueChanged(Property::StatusText));
        true
    }

    /// Set the lower x bound; the value is truncated to an integer.
    pub fn set_x_from(&mut self, value: f64) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let value = value as i64;
        if self.x_from == value {
            return false;
        }
        self.x_from = value;
        surface.set_x_lower(value);
        self.events.push(ChartEvent::ValueChanged(Property::XFrom));
        true
    }

    /// Set the upper x bound; the value is truncated to an integer.
    pub fn set_x_to(&mut self, value: f64) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let value = value as i64;
        if self.x_to == value {
            return false;
        }
        self.x_to = value;
        surface.set_x_upper(value);
        self.events.push(ChartEvent::ValueChanged(Property::XTo));
        true
    }

    /// Show or hide the legend.
    pub fn set_legend_visible(&mut self, visible: bool) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if self.legend_visible == visible {
            return false;
        }
        self.legend_visible = visible;
        if visible {
            surface.show_legend();
        } else {
            surface.hide_legend();
        }
        self.events.push(ChartEvent::ValueChanged(Property::Legend));
        true
    }

    /// Recompute the plot from the selected rows of `model`.
    pub fn redraw<M: ListModel>(&mut self, model: &M) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        surface.clear();
        surface.set_grid(true);

        let mut plotted = 0;
        for row in 0..model.row_count() {
            if model.data(row, Field::Selected) != Some(FieldValue::Selected(true)) {
                continue;
            }
            let (Some(FieldValue::Name(name)), Some(FieldValue::Values(values))) =
                (model.data(row, Field::Name), model.data(row, Field::Values))
            else {
                continue;
            };

            let points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v as f64))
                .collect();
            surface.plot(name, &points);
            plotted += 1;
        }

        surface.set_x_lower(self.x_from);
        surface.set_x_upper(self.x_to);
        if plotted > 0 && self.legend_visible {
            surface.show_legend();
        }

        tracing::debug!("Redraw: {} series plotted", plotted);
        self.events.push(ChartEvent::StateChanged);
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<ChartEvent> {
        std::mem::take(&mut self.events)
    }
}
