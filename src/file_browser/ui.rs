//! File browser rendering: entry list above a preview of the highlighted file.

use super::{EntryKind, FileBrowserState, FilePreview};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the browser list and, when a file is highlighted, its preview.
pub fn draw_file_browser(
    f: &mut Frame<'_>,
    state: &FileBrowserState,
    area: Rect,
    colors: &ThemeColors,
) {
    f.render_widget(Clear, area);

    let preview = state.preview().map(|p| preview_lines(p, colors));
    let preview_height = preview
        .as_ref()
        .map_or(0, |lines| (lines.len() as u16 + 2).min(area.height / 2));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(preview_height)])
        .split(area);

    draw_entries(f, state, chunks[0], colors);

    if let Some(lines) = preview {
        let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        );
        f.render_widget(para, chunks[1]);
    }
}

fn draw_entries(f: &mut Frame<'_>, state: &FileBrowserState, area: Rect, colors: &ThemeColors) {
    let items: Vec<ListItem<'_>> = state
        .entries
        .iter()
        .map(|entry| {
            let (label, style) = match entry.kind {
                EntryKind::Parent | EntryKind::Dir => {
                    (format!("▸ {}/", entry.name), Style::default().fg(colors.fg1))
                },
                EntryKind::SeriesFile => {
                    (format!("  {}", entry.name), Style::default().fg(colors.fg0))
                },
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Open: {} ", state.current_dir.display()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        )
        .highlight_style(
            Style::default()
                .fg(colors.bg0)
                .bg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        );

    // ListState scrolls the highlighted entry into view
    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn preview_lines(preview: &FilePreview, colors: &ThemeColors) -> Vec<Line<'static>> {
    match preview {
        FilePreview::Series { count, longest, names } => {
            let mut lines = vec![Line::from(Span::styled(
                format!("{} series, longest {} samples", count, longest),
                Style::default().fg(colors.green),
            ))];
            lines.extend(names.iter().map(|n| Line::from(format!("  {}", n))));
            if *count > names.len() {
                lines.push(Line::from(format!("  … {} more", count - names.len())));
            }
            lines
        },
        FilePreview::Unreadable(reason) => vec![Line::from(Span::styled(
            reason.clone(),
            Style::default().fg(colors.red),
        ))],
    }
}
