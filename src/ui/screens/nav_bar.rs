use {
    crate::{
        app::App,
        ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
    },
    eframe::egui::{Align, Context, Layout, RichText, TopBottomPanel},
};

impl App {
    pub(crate) fn render_nav_bar(&mut self, ctx: &Context) {
        let Some(role) = self.gate.role() else {
            return;
        };

        TopBottomPanel::top("nav_bar")
            .frame(UI_CONFIG.top_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.app_title)
                            .size(18.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    if self.navigator.can_go_back()
                        && ui
                            .button(ui.button_text_secondary(&UI_TEXT.nav_back))
                            .clicked()
                    {
                        self.navigator.back();
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .button(ui.button_text_primary(&UI_TEXT.nav_logout))
                            .clicked()
                        {
                            log::info!("Logout requested");
                            self.logout_requested = true;
                        }
                        ui.label(format!("{} {}", UI_TEXT.nav_welcome, role.label()));
                    });
                });
            });
    }
}
