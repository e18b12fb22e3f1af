//! Layout configuration constants for the terminal UI.

/// Configuration for the series list pane.
#[derive(Debug, Clone)]
pub struct ListLayoutConfig {
    /// Width of the list pane as a percentage of the screen.
    pub width_percent: u16,
    /// Minimum list width in characters.
    pub min_width: u16,
}

impl Default for ListLayoutConfig {
    fn default() -> Self {
        Self {
            width_percent: 30,
            min_width: 20,
        }
    }
}

/// Configuration for the chart pane.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin).
    pub y_axis_padding_factor: f64,
    /// Number of grid lines per axis.
    pub grid_lines: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            grid_lines: 4,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Series list pane.
    pub list: ListLayoutConfig,
    /// Chart pane.
    pub plot: PlotLayoutConfig,
    /// Event poll interval in milliseconds.
    pub poll_interval_ms: u64,
    /// Step applied by the x-bound keys.
    pub x_step: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            list: ListLayoutConfig::default(),
            plot: PlotLayoutConfig::default(),
            poll_interval_ms: 100,
            x_step: 1,
        }
    }
}
