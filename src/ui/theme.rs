//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Main background.
    pub bg0: Color,
    /// Status bar background.
    pub bg1: Color,
    /// Borders and grid.
    pub bg2: Color,
    /// Primary text color.
    pub fg0: Color,
    /// Dimmed text color.
    pub fg1: Color,
    /// Cursor and title highlight.
    pub yellow: Color,
    /// Selected checkbox.
    pub green: Color,
    /// Error text.
    pub red: Color,
    /// Colors cycled through by plotted lines.
    pub series: [Color; 6],
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                fg0: Color::Rgb(235, 219, 178),
                fg1: Color::Rgb(168, 153, 132),
                yellow: Color::Rgb(250, 189, 47),
                green: Color::Rgb(184, 187, 38),
                red: Color::Rgb(251, 73, 52),
                series: [
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(254, 128, 25),
                    Color::Rgb(184, 187, 38),
                    Color::Rgb(251, 73, 52),
                    Color::Rgb(211, 134, 155),
                    Color::Rgb(142, 192, 124),
                ],
            },
            Theme::GruvboxLight => Self {
                bg0: Color::Rgb(251, 241, 199),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(189, 174, 147),
                fg0: Color::Rgb(60, 56, 54),
                fg1: Color::Rgb(102, 92, 84),
                yellow: Color::Rgb(181, 118, 20),
                green: Color::Rgb(121, 116, 14),
                red: Color::Rgb(157, 0, 6),
                series: [
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(175, 58, 3),
                    Color::Rgb(121, 116, 14),
                    Color::Rgb(157, 0, 6),
                    Color::Rgb(143, 63, 113),
                    Color::Rgb(66, 123, 88),
                ],
            },
        }
    }

    /// Color for the line in plotting slot `slot`.
    pub fn series_color(&self, slot: usize) -> Color {
        self.series[slot % self.series.len()]
    }
}
