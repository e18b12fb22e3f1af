//! Application state and logic.

use std::path::{Path, PathBuf};

use crate::chart::{
    repaint_requested, CanvasSurface, ChartController, ChartEvent, Property, RenderSurface,
};
use crate::data::StoreEvent;
use crate::error::Result;
use crate::file_browser::FileBrowserState;
use crate::model::{ListModel, SelectableListModel};
use crate::util::{self, LayoutConfig};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Startup options.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Show the legend from the start.
    pub legend: bool,
    /// Initial lower x bound.
    pub x_from: Option<i64>,
    /// Layout configuration.
    pub layout: LayoutConfig,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Series list model.
    pub model: SelectableListModel,
    /// Chart controller owning the canvas.
    pub chart: ChartController<CanvasSurface>,
    /// File browser state.
    pub file_browser: FileBrowserState,
    /// File browser mode.
    pub file_browser_mode: bool,
    /// Cursor row in the series list.
    pub cursor: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Layout configuration.
    pub layout: LayoutConfig,
    dirty: bool,
}

impl App {
    /// Create a new application instance with the canvas attached.
    pub fn new(options: AppOptions) -> Self {
        let mut chart = ChartController::new();
        chart.attach_surface(CanvasSurface::new());
        chart.set_legend_visible(options.legend);
        if let Some(x_from) = options.x_from {
            chart.set_x_from(x_from as f64);
        }

        let mut app = Self {
            model: SelectableListModel::new(),
            status: chart.status_text().to_string(),
            chart,
            file_browser: FileBrowserState::new(),
            file_browser_mode: false,
            cursor: 0,
            theme: Theme::GruvboxDark,
            layout: options.layout,
            dirty: true,
        };
        app.pump_events();
        app
    }

    /// Load a file by path or `file://` URL.
    pub fn open(&mut self, raw: &str) -> Result<bool> {
        let result = self.chart.set_filename(raw, &mut self.model);
        if let Ok(true) = result {
            self.cursor = 0;
            if let Some(parent) = self
                .chart
                .filename()
                .and_then(Path::parent)
                .filter(|p| !p.as_os_str().is_empty())
            {
                self.file_browser.current_dir = parent.to_path_buf();
            }
        }
        self.pump_events();
        result
    }

    /// Load a file given as a path.
    pub fn open_path(&mut self, path: &Path) -> Result<bool> {
        self.open(&path.to_string_lossy())
    }

    /// Recompute the plot from the current selection.
    pub fn recompute(&mut self) {
        self.chart.redraw(&self.model);
        self.pump_events();
    }

    /// Toggle the series under the cursor and recompute the plot.
    pub fn toggle_current(&mut self) {
        if self.model.toggle(self.cursor).is_some() {
            self.recompute();
        }
    }

    /// Select or deselect every series and recompute the plot.
    pub fn select_all(&mut self, selected: bool) {
        let changed = self.model.store_mut().set_all_selected(selected);
        if changed > 0 {
            self.recompute();
        }
    }

    /// Move the lower x bound by `delta`.
    pub fn shift_x_from(&mut self, delta: i64) {
        let value = self.chart.x_from() + delta;
        self.chart.set_x_from(value as f64);
        self.pump_events();
    }

    /// Move the upper x bound by `delta`.
    pub fn shift_x_to(&mut self, delta: i64) {
        let value = self.chart.x_to() + delta;
        self.chart.set_x_to(value as f64);
        self.pump_events();
    }

    /// Toggle legend visibility.
    pub fn toggle_legend(&mut self) {
        let visible = !self.chart.legend_visible();
        self.chart.set_legend_visible(visible);
        self.pump_events();
    }

    /// Copy the selected series to the clipboard.
    pub fn copy_selected(&mut self) {
        self.status = match util::copy_selected_series(self.model.store()) {
            Ok(0) => "No series selected".to_string(),
            Ok(n) => format!("Copied {} series", n),
            Err(e) => format!("Copy failed: {}", e),
        };
        self.dirty = true;
    }

    /// Show the about text in the status bar.
    pub fn show_about(&mut self) {
        self.status = self.chart.about().to_string();
        self.dirty = true;
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
        self.dirty = true;
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.dirty = true;
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.model.row_count() {
            self.cursor += 1;
        }
        self.dirty = true;
    }

    /// Open the file browser next to the current file.
    pub fn open_file_browser(&mut self) {
        let dir = self
            .chart
            .filename()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.file_browser.current_dir.clone());
        self.browse_dir(dir);
    }

    /// Close the file browser.
    pub fn close_file_browser(&mut self) {
        self.file_browser_mode = false;
        self.status = self.chart.status_text().to_string();
        self.dirty = true;
    }

    /// Move cursor up in file browser.
    pub fn browser_up(&mut self) {
        self.file_browser.move_by(-1);
        self.dirty = true;
    }

    /// Move cursor down in file browser.
    pub fn browser_down(&mut self) {
        self.file_browser.move_by(1);
        self.dirty = true;
    }

    /// Navigate to parent directory in file browser.
    pub fn browser_parent(&mut self) {
        self.file_browser.go_to_parent();
        self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
        self.dirty = true;
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.file_browser.toggle_hidden();
        self.status = format!(
            "Show hidden: {}",
            if self.file_browser.show_hidden {
                "ON"
            } else {
                "OFF"
            }
        );
        self.dirty = true;
    }

    /// Enter the selected directory or load the selected file.
    pub fn browser_select(&mut self) {
        let Some(path) = self.file_browser.activate() else {
            self.dirty = true;
            return;
        };
        if self.open_path(&path).is_ok() {
            self.file_browser_mode = false;
        }
    }

    /// Open the file browser rooted at `dir`.
    pub fn browse_dir(&mut self, dir: PathBuf) {
        self.file_browser.current_dir = dir;
        self.file_browser.refresh();
        self.file_browser_mode = true;
        self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
        self.dirty = true;
    }

    /// Check and clear the need to redraw the terminal.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Dispatch queued model and chart notifications.
    ///
    /// This is the surface owner's listener: property changes become repaint
    /// requests on the canvas, status changes update the status bar.
    pub fn pump_events(&mut self) {
        for event in self.model.take_events() {
            match event {
                StoreEvent::RowsInserted { first, last } => {
                    tracing::trace!("Rows inserted {}..={}", first, last);
                },
                StoreEvent::RowChanged { row, field } => {
                    tracing::trace!("Row {} changed ({})", row, field.name());
                },
            }
            self.dirty = true;
        }
        if self.cursor >= self.model.row_count() {
            self.cursor = self.model.row_count().saturating_sub(1);
        }

        for event in self.chart.take_events() {
            if event == ChartEvent::ValueChanged(Property::StatusText) {
                self.status = self.chart.status_text().to_string();
                self.dirty = true;
            }
            if repaint_requested(&event) {
                if let Some(surface) = self.chart.surface_mut() {
                    surface.request_repaint();
                }
            }
        }

        if let Some(surface) = self.chart.surface_mut() {
            if surface.take_repaint() {
                self.dirty = true;
            }
        }
    }
}
