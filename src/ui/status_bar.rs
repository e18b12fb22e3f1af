//! Status bar UI component.

use super::ThemeColors;
use crate::chart::{ChartController, RenderSurface};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status<S: RenderSurface>(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    chart: &ChartController<S>,
    colors: &ThemeColors,
) {
    let bounds = format!(
        "x: {}..{} | legend: {} ",
        chart.x_from(),
        chart.x_to(),
        if chart.legend_visible() { "on" } else { "off" }
    );

    let width = area.width as usize;
    let room = width.saturating_sub(bounds.len() + 1);
    let mut text: String = status.chars().take(room).collect();
    let pad = width.saturating_sub(text.chars().count() + bounds.len());
    text.push_str(&" ".repeat(pad));
    text.push_str(&bounds);

    let style = if status.starts_with("Failed") {
        Style::default().fg(colors.red).bg(colors.bg1)
    } else {
        Style::default().fg(colors.fg0).bg(colors.bg1)
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}
