use {
    super::labelled_text,
    crate::{
        app::App,
        config::DF,
        domain::{Role, Route},
        ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
        utils::AppInstant,
    },
    eframe::egui::{Button, CentralPanel, ComboBox, Context, Key, RichText, Spinner, Ui},
    strum::IntoEnumIterator,
};

fn role_picker(ui: &mut Ui, id_salt: &str, role: &mut Role) {
    ui.label(&UI_TEXT.label_role);
    ComboBox::from_id_salt(id_salt)
        .selected_text(role.label())
        .show_ui(ui, |ui| {
            for option in Role::iter() {
                ui.selectable_value(role, option, option.label());
            }
        });
}

/// Centres a fixed-width card in the panel.
fn auth_card(ui: &mut Ui, heading: &str, body: impl FnOnce(&mut Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(UI_CONFIG.auth_card_width);
            ui.vertical(|ui| {
                ui.heading(RichText::new(heading).color(UI_CONFIG.colors.heading));
                ui.add_space(12.0);
                body(ui);
            });
        });
    });
}

impl App {
    pub(crate) fn render_login(&mut self, ctx: &Context) {
        let mut submit = false;
        let mut go_register = false;
        let busy = self.login.is_busy();
        let notice_open = self.notice.is_some();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                auth_card(ui, &UI_TEXT.login_heading, |ui| {
                    let form = &mut self.login.form;
                    ui.add_enabled_ui(!busy, |ui| {
                        labelled_text(ui, &UI_TEXT.label_email, &mut form.email, false);
                        labelled_text(ui, &UI_TEXT.label_password, &mut form.password, true);
                        role_picker(ui, "login_role", &mut form.role);
                    });

                    if let Some(err) = &self.login.error {
                        ui.add_space(6.0);
                        ui.label_error(err);
                    }

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        let text = if busy {
                            &UI_TEXT.button_logging_in
                        } else {
                            &UI_TEXT.button_login
                        };
                        let clicked = ui
                            .add_enabled(!busy, Button::new(ui.button_text_primary(text)))
                            .clicked();
                        let enter = ui.input(|i| i.key_pressed(Key::Enter));
                        submit = !busy && !notice_open && (clicked || enter);
                        if busy {
                            ui.add(Spinner::new());
                        }
                    });

                    ui.add_space(8.0);
                    if ui.link(&UI_TEXT.link_to_register).clicked() {
                        go_register = true;
                    }
                });
            });

        if submit {
            if DF.log_auth {
                log::info!("Login submitted as {}", self.login.form.role);
            }
            self.submit_login(AppInstant::now());
            ctx.request_repaint();
        }
        if go_register {
            self.navigate(Route::Register);
        }
    }

    pub(crate) fn render_register(&mut self, ctx: &Context) {
        let mut submit = false;
        let mut go_login = false;
        let busy = self.register.is_busy();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                auth_card(ui, &UI_TEXT.register_heading, |ui| {
                    let form = &mut self.register.form;
                    ui.add_enabled_ui(!busy, |ui| {
                        labelled_text(ui, &UI_TEXT.label_full_name, &mut form.full_name, false);
                        labelled_text(ui, &UI_TEXT.label_email, &mut form.email, false);
                        role_picker(ui, "register_role", &mut form.role);
                        ui.add_space(4.0);
                        if form.role == Role::Mentor {
                            labelled_text(ui, &UI_TEXT.label_company_name, &mut form.company_name, false);
                        }
                        labelled_text(ui, &UI_TEXT.label_password, &mut form.password, true);
                        labelled_text(
                            ui,
                            &UI_TEXT.label_confirm_password,
                            &mut form.confirm_password,
                            true,
                        );
                    });

                    if let Some(err) = &self.register.error {
                        ui.add_space(6.0);
                        ui.label_error(err);
                    }

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        let text = if busy {
                            &UI_TEXT.button_registering
                        } else {
                            &UI_TEXT.button_register
                        };
                        submit = ui
                            .add_enabled(!busy, Button::new(ui.button_text_primary(text)))
                            .clicked();
                        if busy {
                            ui.add(Spinner::new());
                        }
                    });

                    ui.add_space(8.0);
                    if ui.link(&UI_TEXT.link_to_login).clicked() {
                        go_login = true;
                    }
                });
            });

        if submit {
            self.submit_register(AppInstant::now());
            ctx.request_repaint();
        }
        if go_login {
            self.navigate(Route::Login);
        }
    }
}
