//! Checkable series list pane.

use super::ThemeColors;
use crate::model::{Field, FieldValue, ListModel};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Draw the series list.
pub(super) fn draw_series_list<M: ListModel>(
    f: &mut Frame<'_>,
    area: Rect,
    model: &M,
    cursor: usize,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(format!(" Series ({}) ", model.row_count()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    // Checkbox, space, name, space, length in parentheses
    let name_width = (area.width as usize).saturating_sub(2 + 4 + 8);

    let items: Vec<ListItem<'_>> = (0..model.row_count())
        .filter_map(|row| {
            let selected = matches!(
                model.data(row, Field::Selected),
                Some(FieldValue::Selected(true))
            );
            let Some(FieldValue::Name(name)) = model.data(row, Field::Name) else {
                return None;
            };
            let len = match model.data(row, Field::Values) {
                Some(FieldValue::Values(values)) => values.len(),
                _ => 0,
            };

            let check = if selected {
                Span::styled("[x] ", Style::default().fg(colors.green))
            } else {
                Span::styled("[ ] ", Style::default().fg(colors.fg1))
            };

            Some(ListItem::new(Line::from(vec![
                check,
                Span::raw(truncate(name, name_width)),
                Span::styled(format!(" ({})", len), Style::default().fg(colors.fg1)),
            ])))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(colors.fg0))
        .highlight_style(
            Style::default()
                .fg(colors.bg0)
                .bg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if model.row_count() > 0 {
        state.select(Some(cursor));
    }

    f.render_stateful_widget(list, area, &mut state);
}

/// Truncate to a display width, marking the cut with an ellipsis.
fn truncate(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            out.pop();
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Pressure", 20), "Pressure");
        assert_eq!(truncate("Temperature", 5), "Temp…");
        assert_eq!(truncate("", 3), "");
    }
}
