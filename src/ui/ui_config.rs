use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub status_active: Color32,
    pub status_expired: Color32,
    pub text_subdued: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sidebar_width: f32,
    pub auth_card_width: f32,
    pub form_window_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(120, 170, 255),
        central_panel: Color32::from_rgb(30, 32, 38),
        side_panel: Color32::from_rgb(22, 24, 28),
        card: Color32::from_rgb(42, 45, 53),
        card_border: Color32::from_rgb(60, 64, 75),
        accent: Color32::from_rgb(52, 120, 246),
        error: Color32::from_rgb(230, 80, 80),
        status_active: Color32::from_rgb(80, 200, 120),
        status_expired: Color32::from_rgb(230, 80, 80),
        text_subdued: Color32::GRAY,
    },
    sidebar_width: 200.0,
    auth_card_width: 360.0,
    form_window_width: 380.0,
};

impl UiConfig {
    /// Frame for the portal sidebars
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the navigation bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Stat tiles and record cards
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(6),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
