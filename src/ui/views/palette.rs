use egui::Color32;

use crate::ui::theme::ScheduleTheme;

/// Paint colors for one schedule grid, derived from the active theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPalette {
    pub free_fill: Color32,
    pub busy_fill: Color32,
    pub highlight_fill: Color32,
    pub highlight_outline: Color32,
    pub grid_line: Color32,
    pub header_text: Color32,
    pub hour_text: Color32,
}

impl GridPalette {
    pub fn from_theme(theme: &ScheduleTheme) -> Self {
        Self {
            free_fill: theme.free_background,
            busy_fill: theme.busy_block,
            highlight_fill: theme.highlight_block,
            highlight_outline: theme.highlight_border,
            grid_line: theme.grid_line,
            header_text: theme.text_primary,
            hour_text: theme.text_secondary,
        }
    }
}
