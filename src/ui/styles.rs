use {
    crate::ui::UI_CONFIG,
    eframe::egui::{
        Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
        WidgetInfo, WidgetType,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub(crate) fn status_color(active: bool) -> Color32 {
    if active {
        UI_CONFIG.colors.status_active
    } else {
        UI_CONFIG.colors.status_expired
    }
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as button: transparent when idle, gray bg on hover, accent bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    /// Sidebar entry.
    fn nav_link(&mut self, text: &str, is_selected: bool) -> Response;
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_error(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn stat_card(&mut self, label: &str, value: &str);
    fn status_badge(&mut self, text: &str, active: bool);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
    fn button_text_secondary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(6.0, 4.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = Vec2::new(
            (galley.size().x + padding.x * 2.0).max(self.available_width()),
            galley.size().y + padding.y * 2.0,
        );
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (UI_CONFIG.colors.accent, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, UI_CONFIG.colors.heading)
            } else {
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn nav_link(&mut self, text: &str, is_selected: bool) -> Response {
        self.interactive_label(
            text,
            is_selected,
            UI_CONFIG.colors.label,
            FontId::proportional(14.0),
        )
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.text_subdued));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text).strong());
    }

    fn stat_card(&mut self, label: &str, value: &str) {
        UI_CONFIG.card_frame().show(self, |ui| {
            ui.set_min_width(160.0);
            ui.vertical(|ui| {
                ui.label_subdued(label);
                ui.label(
                    RichText::new(value)
                        .size(26.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            });
        });
    }

    fn status_badge(&mut self, text: &str, active: bool) {
        self.label(RichText::new(text).strong().color(status_color(active)));
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::WHITE)
    }

    fn button_text_secondary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).color(UI_CONFIG.colors.label)
    }
}
