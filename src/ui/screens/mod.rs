mod auth;
mod client;
mod loading;
mod mentor;
mod nav_bar;

pub(crate) use loading::render_loading;

use {
    crate::{
        data::Repository,
        models::Record,
        ui::{UI_CONFIG, styles::UiStyleExt},
    },
    eframe::egui::{Align, Layout, RichText, TextEdit, Ui},
};

/// Current records for display. A failing repository shows as empty.
fn listed<T: Record>(repo: &dyn Repository<T>, what: &str) -> Vec<T> {
    match repo.list() {
        Ok(records) => records,
        Err(err) => {
            log::error!("Failed to list {}: {:#}", what, err);
            Vec::new()
        }
    }
}

/// Page title with an optional primary action on the right. True when the action was clicked.
fn page_heading(ui: &mut Ui, title: &str, action: Option<&str>) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.heading(RichText::new(title).color(UI_CONFIG.colors.heading));
        if let Some(action) = action {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                clicked = ui.button(ui.button_text_primary(action)).clicked();
            });
        }
    });
    ui.add_space(12.0);
    clicked
}

fn labelled_text(ui: &mut Ui, label: &str, value: &mut String, password: bool) {
    ui.label(label);
    ui.add(
        TextEdit::singleline(value)
            .password(password)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}
