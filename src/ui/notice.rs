use {
    crate::{
        app::App,
        ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
    },
    eframe::egui::{Context, Id, Modal, RichText},
};

/// A blocking message the user must dismiss before doing anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) message: String,
}

impl Notice {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl App {
    pub(crate) fn render_notice(&mut self, ctx: &Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        let modal = Modal::new(Id::new("blocking_notice")).show(ctx, |ui| {
            ui.set_width(UI_CONFIG.auth_card_width);
            ui.label_subheader(&UI_TEXT.notice_title);
            ui.add_space(8.0);
            ui.label(RichText::new(&notice.message).color(UI_CONFIG.colors.heading));
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui
                    .button(ui.button_text_primary(&UI_TEXT.button_ok))
                    .clicked()
                {
                    dismissed = true;
                }
            });
        });

        if dismissed || modal.should_close() {
            self.notice = None;
        }
    }
}
