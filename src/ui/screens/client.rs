use {
    super::{labelled_text, listed, page_heading},
    crate::{
        app::{App, ClientWorkspace},
        config::DF,
        domain::{ClientPage, Route},
        models::{Mt5Account, OwnedRobot},
        ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
        utils::{format_date, format_timestamp},
    },
    eframe::egui::{
        Align, Align2, CentralPanel, Context, Key, Layout, RichText, ScrollArea, SidePanel,
        Spinner, TextEdit, TextStyle, Ui, Window,
    },
    strum::IntoEnumIterator,
};

/// Something a client page asked the app to do after rendering.
enum ClientAction {
    Goto(Route),
    Notice(String),
}

impl App {
    pub(crate) fn render_client(&mut self, ctx: &Context, page: ClientPage) {
        let mut actions = Vec::new();

        SidePanel::left("client_sidebar")
            .exact_width(UI_CONFIG.sidebar_width)
            .resizable(false)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                ui.label_subheader(&UI_TEXT.client_portal);
                ui.add_space(8.0);
                for entry in ClientPage::iter() {
                    if ui.nav_link(&entry.to_string(), entry == page).clicked() {
                        actions.push(ClientAction::Goto(Route::Client(entry)));
                    }
                }
            });

        let Some(ws) = self.client.as_mut() else {
            CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| ui.add(Spinner::new()));
            });
            return;
        };

        ws.close_forms_off(page);

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| match page {
                    ClientPage::Home => client_home(ui, ws, &mut actions),
                    ClientPage::Robots => owned_robots_page(ui, ws),
                    ClientPage::Mt5 => accounts_page(ui, ws),
                    ClientPage::Licenses => activate_page(ui, ws, &mut actions),
                });
            });

        if page == ClientPage::Mt5
            && let Some(message) = account_form_window(ctx, ws)
        {
            actions.push(ClientAction::Notice(message));
        }

        for action in actions {
            match action {
                ClientAction::Goto(route) => {
                    if DF.log_routing {
                        log::info!("Client navigation to {}", route);
                    }
                    self.navigate(route);
                }
                ClientAction::Notice(message) => self.raise_notice(message),
            }
        }
    }
}

fn client_home(ui: &mut Ui, ws: &mut ClientWorkspace, actions: &mut Vec<ClientAction>) {
    page_heading(ui, &ClientPage::Home.to_string(), None);

    let stats = ws.stats;
    ui.horizontal_wrapped(|ui| {
        ui.stat_card(&UI_TEXT.stat_active_robots, &stats.active_robots.to_string());
        ui.stat_card(
            &UI_TEXT.stat_connected_accounts,
            &stats.connected_accounts.to_string(),
        );
        ui.stat_card(&UI_TEXT.stat_expiring_soon, &stats.expiring_soon.to_string());
    });

    ui.add_space(20.0);
    ui.label_subheader(&UI_TEXT.quick_actions);
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button(&UI_TEXT.action_connect_mt5).clicked() {
            ws.account_form.open();
            actions.push(ClientAction::Goto(Route::Client(ClientPage::Mt5)));
        }
        if ui.button(&UI_TEXT.action_activate_license).clicked() {
            actions.push(ClientAction::Goto(Route::Client(ClientPage::Licenses)));
        }
        if ui.button(&UI_TEXT.action_browse_robots).clicked() {
            actions.push(ClientAction::Goto(Route::Client(ClientPage::Robots)));
        }
    });
}

fn owned_robot_card(ui: &mut Ui, robot: &OwnedRobot) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(280.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&robot.name)
                        .strong()
                        .size(16.0)
                        .color(UI_CONFIG.colors.heading),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.status_badge(robot.status_label(), robot.active);
                });
            });
            ui.add_space(4.0);
            ui.metric(&UI_TEXT.label_license_key, &robot.license_key, UI_CONFIG.colors.label);
            ui.metric(
                &UI_TEXT.label_expires,
                &format_date(robot.expires_on),
                UI_CONFIG.colors.label,
            );
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                // Downloads and renewals are not wired to anything yet.
                let _ = ui.button(&UI_TEXT.button_download_ea);
                let _ = ui.button(&UI_TEXT.button_renew_license);
            });
        });
    });
}

fn owned_robots_page(ui: &mut Ui, ws: &mut ClientWorkspace) {
    page_heading(ui, &UI_TEXT.owned_robots_heading, None);
    let robots = listed(ws.robots.as_ref(), "owned robots");
    ui.horizontal_wrapped(|ui| {
        for robot in &robots {
            owned_robot_card(ui, robot);
        }
    });
}

fn account_card(ui: &mut Ui, account: &Mt5Account) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(280.0);
        ui.vertical(|ui| {
            ui.label(
                RichText::new(&account.account_number)
                    .monospace()
                    .strong()
                    .size(16.0)
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(4.0);
            ui.metric(&UI_TEXT.label_server, &account.server, UI_CONFIG.colors.label);
            ui.metric(&UI_TEXT.label_platform, &account.platform, UI_CONFIG.colors.label);
            ui.metric(
                &UI_TEXT.label_last_sync,
                &format_timestamp(account.last_sync),
                UI_CONFIG.colors.label,
            );
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let _ = ui.button(&UI_TEXT.button_sync_now);
                let _ = ui.button(&UI_TEXT.button_disconnect);
            });
        });
    });
}

fn accounts_page(ui: &mut Ui, ws: &mut ClientWorkspace) {
    if page_heading(ui, &UI_TEXT.mt5_heading, Some(UI_TEXT.action_connect_mt5.as_str())) {
        ws.account_form.open();
    }
    let accounts = listed(ws.accounts.as_ref(), "MT5 accounts");
    ui.horizontal_wrapped(|ui| {
        for account in &accounts {
            account_card(ui, account);
        }
    });
}

fn activate_page(ui: &mut Ui, ws: &mut ClientWorkspace, actions: &mut Vec<ClientAction>) {
    page_heading(ui, &UI_TEXT.activate_heading, None);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(UI_CONFIG.form_window_width);
        ui.vertical(|ui| {
            ui.label_subdued(&UI_TEXT.activate_hint);
            ui.add_space(6.0);
            ui.label(&UI_TEXT.label_license_key);
            let edit = ui.add(
                TextEdit::singleline(&mut ws.license_key)
                    .hint_text(&UI_TEXT.placeholder_license_key)
                    .font(TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
            let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            ui.add_space(10.0);
            let clicked = ui
                .button(ui.button_text_primary(&UI_TEXT.button_activate))
                .clicked();

            if clicked || enter {
                let message = match ws.activate_license() {
                    Ok(key) => {
                        log::info!("License {} activated", key);
                        UI_TEXT.license_activated(&key)
                    }
                    Err(err) => err.to_string(),
                };
                actions.push(ClientAction::Notice(message));
            }
        });
    });
}

/// Returns the notice to raise when an account was connected.
fn account_form_window(ctx: &Context, ws: &mut ClientWorkspace) -> Option<String> {
    if !ws.account_form.visible {
        return None;
    }
    let (mut submit, mut cancel) = (false, false);

    Window::new(UI_TEXT.account_form_title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_width(UI_CONFIG.form_window_width);
            let fields = &mut ws.account_form.fields;
            labelled_text(ui, &UI_TEXT.label_account_number, &mut fields.account_number, false);
            labelled_text(ui, &UI_TEXT.label_password, &mut fields.password, true);
            labelled_text(ui, &UI_TEXT.label_server, &mut fields.server, false);

            if let Some(err) = &ws.account_form.error {
                ui.add_space(6.0);
                ui.label_error(err);
            }
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                submit = ui
                    .button(ui.button_text_primary(&UI_TEXT.button_submit_account))
                    .clicked();
                cancel = ui
                    .button(ui.button_text_secondary(&UI_TEXT.button_cancel))
                    .clicked();
            });
        });

    if cancel {
        ws.account_form.close();
        return None;
    }
    if !submit {
        return None;
    }
    match ws.submit_account() {
        Ok(account) => {
            if DF.log_repository {
                log::info!("MT5 account {} connected as #{}", account.account_number, account.id);
            }
            Some(UI_TEXT.notice_account_connected.clone())
        }
        Err(err) => {
            log::warn!("MT5 connection rejected: {}", err);
            None
        }
    }
}
