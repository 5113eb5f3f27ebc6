//! Theme module for the slot finder application
//!
//! Defines the ScheduleTheme structure and applies it to the egui context.
//! Grid colors read as traffic-light semantics: soft green for free time,
//! soft red for busy blocks, saturated green for the suggested slot.

use egui::Color32;

/// All colors used by the application and the schedule grids.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Schedule card background color
    pub card_background: Color32,

    /// Schedule card border color
    pub card_border: Color32,

    /// Grid interior for hours not marked busy
    pub free_background: Color32,

    /// Busy interval fill
    pub busy_block: Color32,

    /// Candidate slot fill
    pub highlight_block: Color32,

    /// Candidate slot outline, visually distinct from busy blocks
    pub highlight_border: Color32,

    /// Grid line color
    pub grid_line: Color32,

    /// Primary text color (headings, day labels)
    pub text_primary: Color32,

    /// Secondary text color (hour labels, hints)
    pub text_secondary: Color32,

    /// Error and validation message color
    pub error_text: Color32,
}

impl ScheduleTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(220, 220, 220),
            free_background: Color32::from_rgb(217, 255, 218),
            busy_block: Color32::from_rgb(255, 173, 173),
            highlight_block: Color32::from_rgb(140, 255, 140),
            highlight_border: Color32::from_rgb(128, 0, 128),
            grid_line: Color32::from_rgb(204, 204, 204),
            text_primary: Color32::from_rgb(51, 51, 51),
            text_secondary: Color32::from_rgb(119, 119, 119),
            error_text: Color32::from_rgb(200, 60, 60),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            card_background: Color32::from_rgb(40, 40, 40),
            card_border: Color32::from_rgb(60, 60, 60),
            free_background: Color32::from_rgb(36, 56, 40),
            busy_block: Color32::from_rgb(110, 50, 50),
            highlight_block: Color32::from_rgb(56, 110, 56),
            highlight_border: Color32::from_rgb(190, 120, 255),
            grid_line: Color32::from_rgb(70, 70, 70),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            error_text: Color32::from_rgb(255, 120, 120),
        }
    }

    /// Resolve a settings theme name. "system" follows the desktop
    /// preference at startup.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.noninteractive.bg_fill = self.card_background;
        visuals.widgets.inactive.bg_fill = self.card_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_themes_resolve() {
        assert!(!ScheduleTheme::from_name("light").is_dark);
        assert!(ScheduleTheme::from_name("dark").is_dark);
    }

    #[test]
    fn test_light_grid_colors() {
        let theme = ScheduleTheme::light();
        assert_eq!(theme.free_background, Color32::from_rgb(217, 255, 218));
        assert_eq!(theme.busy_block, Color32::from_rgb(255, 173, 173));
        assert_eq!(theme.highlight_block, Color32::from_rgb(140, 255, 140));
    }

    #[test]
    fn test_highlight_border_differs_from_grid_lines() {
        for theme in [ScheduleTheme::light(), ScheduleTheme::dark()] {
            assert_ne!(theme.highlight_border, theme.grid_line);
            assert_ne!(theme.highlight_block, theme.busy_block);
        }
    }
}
