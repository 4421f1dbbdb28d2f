use {
    crate::ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
    eframe::egui::{CentralPanel, Context, RichText, Spinner},
};

pub(crate) fn render_loading(ctx: &Context) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.heading(
                    RichText::new(&UI_TEXT.ls_title)
                        .size(24.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(12.0);
                ui.add(Spinner::new().size(28.0));
                ui.label_subdued(&UI_TEXT.ls_checking_session);
            });
        });
}
