//! Rendering surfaces.

/// Plotting target driven by the chart controller.
pub trait RenderSurface {
    /// Remove every plotted line and the legend.
    fn clear(&mut self);

    /// Show or hide the background grid.
    fn set_grid(&mut self, visible: bool);

    /// Plot one labeled line.
    fn plot(&mut self, label: &str, points: &[(f64, f64)]);

    /// Set the lower x-axis limit.
    fn set_x_lower(&mut self, value: i64);

    /// Set the upper x-axis limit.
    fn set_x_upper(&mut self, value: i64);

    /// Show the legend for the plotted lines.
    fn show_legend(&mut self);

    /// Remove the legend.
    fn hide_legend(&mut self);

    /// Ask for the current scene to be repainted; may be deferred.
    fn request_repaint(&mut self);
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedLine {
    /// Legend label.
    pub label: String,
    /// `(x, y)` points.
    pub points: Vec<(f64, f64)>,
    /// Position in plotting order, used for color cycling.
    pub slot: usize,
}

/// Retained-scene surface rendered by the terminal UI.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSurface {
    lines: Vec<PlottedLine>,
    grid: bool,
    legend: bool,
    x_lower: i64,
    x_upper: i64,
    repaint_pending: bool,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasSurface {
    /// Create an empty surface with limits `[0, 1]`.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            grid: false,
            legend: false,
            x_lower: 0,
            x_upper: 1,
            repaint_pending: false,
        }
    }

    /// Plotted lines in plotting order.
    pub fn lines(&self) -> &[PlottedLine] {
        &self.lines
    }

    /// Check if the grid is shown.
    pub fn grid(&self) -> bool {
        self.grid
    }

    /// Check if the legend is shown.
    pub fn legend(&self) -> bool {
        self.legend
    }

    /// Current `(lower, upper)` x limits.
    pub fn x_limits(&self) -> (i64, i64) {
        (self.x_lower, self.x_upper)
    }

    /// Y range covering every plotted point, if any.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter())
            .map(|&(_, y)| y)
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    /// Consume a pending repaint request.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint_pending)
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) {
        self.lines.clear();
        self.grid = false;
        self.legend = false;
    }

    fn set_grid(&mut self, visible: bool) {
        self.grid = visible;
    }

    fn plot(&mut self, label: &str, points: &[(f64, f64)]) {
        let slot = self.lines.len();
        self.lines.push(PlottedLine {
            label: label.to_string(),
            points: points.to_vec(),
            slot,
        });
    }

    fn set_x_lower(&mut self, value: i64) {
        self.x_lower = value;
    }

    fn set_x_upper(&mut self, value: i64) {
        self.x_upper = value;
    }

    fn show_legend(&mut self) {
        self.legend = true;
    }

    fn hide_legend(&mut self) {
        self.legend = false;
    }

    fn request_repaint(&mut self) {
        self.repaint_pending = true;
    }
}
