//! User interface rendering.

mod keymap_bar;
mod plot;
mod series_list;
mod status_bar;
mod theme;

use crate::app::App;
use crate::file_browser::ui::draw_file_browser;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let list_width = (chunks[0].width * app.layout.list.width_percent / 100)
        .max(app.layout.list.min_width)
        .min(chunks[0].width);
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(list_width), Constraint::Min(1)])
        .split(chunks[0]);

    if app.file_browser_mode {
        draw_file_browser(f, &app.file_browser, content[0], &colors);
    } else {
        series_list::draw_series_list(f, content[0], &app.model, app.cursor, &colors);
    }

    let title = app
        .chart
        .filename()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "No file".to_string());
    plot::draw_plot(
        f,
        content[1],
        app.chart.surface(),
        &title,
        &app.layout.plot,
        &colors,
    );

    status_bar::draw_status(f, chunks[1], &app.status, &app.chart, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app.file_browser_mode, &colors);
}
