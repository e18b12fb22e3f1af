//! Chart pane - renders the canvas surface as a ratatui chart.

use super::ThemeColors;
use crate::chart::CanvasSurface;
use crate::util::layout_config::PlotLayoutConfig;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

/// Draw the chart pane.
pub(super) fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    surface: Option<&CanvasSurface>,
    title: &str,
    config: &PlotLayoutConfig,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .title_style(Style::default().fg(colors.yellow))
        .style(Style::default().bg(colors.bg0));

    let Some(surface) = surface else {
        draw_message(f, area, block, "No chart surface", colors);
        return;
    };

    if surface.lines().is_empty() {
        draw_message(f, area, block, "Select series with <space> to plot them", colors);
        return;
    }

    let (x_min, x_max) = x_bounds(surface.x_limits());
    let (y_min, y_max) = y_bounds(surface.y_range(), config.y_axis_padding_factor);

    let grid = if surface.grid() {
        grid_lines((x_min, x_max), (y_min, y_max), config.grid_lines)
    } else {
        Vec::new()
    };

    let mut datasets: Vec<Dataset<'_>> = grid
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.bg2))
                .data(line)
        })
        .collect();

    datasets.extend(surface.lines().iter().map(|line| {
        Dataset::default()
            .name(line.label.as_str())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.series_color(line.slot)))
            .data(&line.points)
    }));

    // Sample markers, unnamed so they stay out of the legend. A one-sample
    // series has no line segment and is only visible through its marker.
    datasets.extend(surface.lines().iter().map(|line| {
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.series_color(line.slot)))
            .data(&line.points)
    }));

    let x_axis = Axis::default()
        .title("index")
        .style(Style::default().fg(colors.fg0))
        .bounds([x_min, x_max])
        .labels(axis_labels(x_min, x_max));

    let y_axis = Axis::default()
        .style(Style::default().fg(colors.fg0))
        .bounds([y_min, y_max])
        .labels(axis_labels(y_min, y_max));

    let legend = surface.legend().then_some(LegendPosition::TopRight);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend)
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)));

    f.render_widget(chart, area);
}

fn draw_message(f: &mut Frame<'_>, area: Rect, block: Block<'_>, text: &str, colors: &ThemeColors) {
    let para = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(colors.fg1))
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}

/// Displayed x range for the surface limits.
///
/// The terminal chart cannot draw a reversed axis, so inverted limits are
/// shown in ascending order; equal limits are widened around the value.
fn x_bounds((lower, upper): (i64, i64)) -> (f64, f64) {
    let (lo, hi) = (lower.min(upper) as f64, lower.max(upper) as f64);
    if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn y_bounds(range: Option<(f64, f64)>, padding_factor: f64) -> (f64, f64) {
    let (min, max) = range.unwrap_or((0.0, 1.0));
    let padding = (max - min).abs() * padding_factor;
    if padding == 0.0 {
        (min - 1.0, max + 1.0)
    } else {
        (min - padding, max + padding)
    }
}

fn grid_lines(x: (f64, f64), y: (f64, f64), count: usize) -> Vec<Vec<(f64, f64)>> {
    let mut lines = Vec::with_capacity(count * 2);
    for i in 1..=count {
        let t = i as f64 / (count + 1) as f64;
        let gx = x.0 + (x.1 - x.0) * t;
        let gy = y.0 + (y.1 - y.0) * t;
        lines.push(vec![(gx, y.0), (gx, y.1)]);
        lines.push(vec![(x.0, gy), (x.1, gy)]);
    }
    lines
}

fn axis_labels(min: f64, max: f64) -> Vec<String> {
    vec![
        format_axis_label(min),
        format_axis_label((min + max) / 2.0),
        format_axis_label(max),
    ]
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 || val.fract() == 0.0 {
        format!("{:.0}", val)
    } else {
        format!("{:.1}", val)
    }
}
