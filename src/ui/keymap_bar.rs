//! Keymap help bar UI component.

use super::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, file_browser_mode: bool, colors: &ThemeColors) {
    let keymap_text = if file_browser_mode {
        "jk/↑↓:nav | Enter/l:select | h:parent | .:hidden | Esc:close | q:quit"
    } else {
        "q:quit | jk:nav | space:toggle | a/A:all/none | r:redraw | []:x from | {}:x to | L:legend | o:open | y:copy | T:theme | ?:about"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg1).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
