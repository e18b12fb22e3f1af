//! Series type.

/// One named sequence of integer samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    name: String,
    values: Vec<i64>,
    /// Whether the series is drawn on the chart.
    pub(crate) selected: bool,
}

impl Series {
    /// Create a new, unselected series.
    pub fn new(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            values,
            selected: false,
        }
    }

    /// Series label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sample values in file order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if the series is selected for plotting.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
