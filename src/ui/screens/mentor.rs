use {
    super::{labelled_text, listed, page_heading},
    crate::{
        app::{App, MentorWorkspace},
        config::DF,
        domain::{MentorPage, Route},
        models::{Client, License, Robot},
        ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
        utils::format_date,
    },
    eframe::egui::{
        Align, Align2, CentralPanel, ComboBox, Context, DragValue, Layout, RichText, ScrollArea,
        SidePanel, Spinner, TextEdit, Ui, Window,
    },
    egui_extras::{Column, TableBuilder},
    strum::IntoEnumIterator,
};

impl App {
    pub(crate) fn render_mentor(&mut self, ctx: &Context, page: MentorPage) {
        let mut goto = None;

        SidePanel::left("mentor_sidebar")
            .exact_width(UI_CONFIG.sidebar_width)
            .resizable(false)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                ui.label_subheader(&UI_TEXT.mentor_portal);
                ui.add_space(8.0);
                for entry in MentorPage::iter() {
                    if ui.nav_link(&entry.to_string(), entry == page).clicked() {
                        goto = Some(Route::Mentor(entry));
                    }
                }
            });

        let Some(ws) = self.mentor.as_mut() else {
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
                    MentorPage::Home => mentor_home(ui, ws, &mut goto),
                    MentorPage::Robots => robots_page(ui, ws),
                    MentorPage::Licenses => licenses_page(ui, ws),
                    MentorPage::Clients => clients_page(ui, ws),
                });
            });

        let notice = match page {
            MentorPage::Robots => robot_form_window(ctx, ws),
            MentorPage::Licenses => license_form_window(ctx, ws),
            MentorPage::Home | MentorPage::Clients => None,
        };

        if let Some(route) = goto {
            if DF.log_routing {
                log::info!("Mentor navigation to {}", route);
            }
            self.navigate(route);
        }
        if let Some(message) = notice {
            self.raise_notice(message);
        }
    }
}

fn mentor_home(ui: &mut Ui, ws: &mut MentorWorkspace, goto: &mut Option<Route>) {
    page_heading(ui, &MentorPage::Home.to_string(), None);

    let stats = ws.stats;
    ui.horizontal_wrapped(|ui| {
        ui.stat_card(&UI_TEXT.stat_total_robots, &stats.total_robots.to_string());
        ui.stat_card(&UI_TEXT.stat_active_licenses, &stats.active_licenses.to_string());
        ui.stat_card(&UI_TEXT.stat_total_clients, &stats.total_clients.to_string());
        ui.stat_card(
            &UI_TEXT.stat_monthly_revenue,
            &format!("${}", stats.monthly_revenue),
        );
    });

    ui.add_space(20.0);
    ui.label_subheader(&UI_TEXT.quick_actions);
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button(&UI_TEXT.action_upload_robot).clicked() {
            ws.robot_form.open();
            *goto = Some(Route::Mentor(MentorPage::Robots));
        }
        if ui.button(&UI_TEXT.action_generate_license).clicked() {
            ws.license_form.open();
            *goto = Some(Route::Mentor(MentorPage::Licenses));
        }
        if ui.button(&UI_TEXT.action_view_clients).clicked() {
            *goto = Some(Route::Mentor(MentorPage::Clients));
        }
    });
}

fn robot_card(ui: &mut Ui, robot: &Robot) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(260.0);
        ui.vertical(|ui| {
            ui.label(
                RichText::new(&robot.name)
                    .strong()
                    .size(16.0)
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label(&robot.description);
            ui.add_space(4.0);
            ui.metric(&UI_TEXT.label_version, &robot.version, UI_CONFIG.colors.label);
            ui.metric(
                &UI_TEXT.label_monthly_price,
                &format!("${}/month", robot.monthly_price),
                UI_CONFIG.colors.status_active,
            );
            if let Some(link) = &robot.download_link {
                ui.label_subdued(link);
            }
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                // No edit or per-robot license view exists yet.
                let _ = ui.button(&UI_TEXT.button_edit);
                let _ = ui.button(&UI_TEXT.button_view_licenses);
            });
        });
    });
}

fn robots_page(ui: &mut Ui, ws: &mut MentorWorkspace) {
    if page_heading(ui, &UI_TEXT.robots_heading, Some(UI_TEXT.action_upload_robot.as_str())) {
        ws.robot_form.open();
    }
    let robots = listed(ws.robots.as_ref(), "robots");
    ui.horizontal_wrapped(|ui| {
        for robot in &robots {
            robot_card(ui, robot);
        }
    });
}

fn licenses_table(ui: &mut Ui, licenses: &[License]) {
    let headers = [
        &UI_TEXT.col_license_key,
        &UI_TEXT.col_robot,
        &UI_TEXT.col_client,
        &UI_TEXT.col_expires,
        &UI_TEXT.col_status,
        &UI_TEXT.col_actions,
    ];
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(110.0), headers.len() - 1)
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.strong(title.as_str());
                });
            }
        })
        .body(|mut body| {
            for license in licenses {
                body.row(28.0, |mut row| {
                    row.col(|ui| {
                        ui.monospace(&license.key);
                    });
                    row.col(|ui| {
                        ui.label(&license.robot_name);
                    });
                    row.col(|ui| {
                        ui.label(&license.client_email);
                    });
                    row.col(|ui| {
                        ui.label(format_date(license.expires_on));
                    });
                    row.col(|ui| {
                        let text = if license.active {
                            &UI_TEXT.status_active
                        } else {
                            &UI_TEXT.status_inactive
                        };
                        ui.status_badge(text, license.active);
                    });
                    row.col(|ui| {
                        let _ = ui.small_button(&UI_TEXT.button_renew);
                        let _ = ui.small_button(&UI_TEXT.button_revoke);
                    });
                });
            }
        });
}

fn licenses_page(ui: &mut Ui, ws: &mut MentorWorkspace) {
    if page_heading(
        ui,
        &UI_TEXT.licenses_heading,
        Some(UI_TEXT.action_generate_license.as_str()),
    ) {
        ws.license_form.open();
    }
    let licenses = listed(ws.licenses.as_ref(), "licenses");
    licenses_table(ui, &licenses);
}

fn clients_table(ui: &mut Ui, clients: &[Client]) {
    let headers = [
        &UI_TEXT.col_name,
        &UI_TEXT.col_email,
        &UI_TEXT.col_active_licenses,
        &UI_TEXT.col_joined,
        &UI_TEXT.col_actions,
    ];
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(110.0), headers.len() - 1)
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.strong(title.as_str());
                });
            }
        })
        .body(|mut body| {
            for client in clients {
                body.row(28.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&client.full_name);
                    });
                    row.col(|ui| {
                        ui.label(&client.email);
                    });
                    row.col(|ui| {
                        ui.label(client.active_licenses.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_date(client.joined_on));
                    });
                    row.col(|ui| {
                        let _ = ui.small_button(&UI_TEXT.button_view_details);
                        let _ = ui.small_button(&UI_TEXT.button_contact);
                    });
                });
            }
        });
}

fn clients_page(ui: &mut Ui, ws: &mut MentorWorkspace) {
    page_heading(ui, &UI_TEXT.clients_heading, None);
    let clients = listed(ws.clients.as_ref(), "clients");
    clients_table(ui, &clients);
}

/// Returns the notice to raise when a robot was added.
fn robot_form_window(ctx: &Context, ws: &mut MentorWorkspace) -> Option<String> {
    if !ws.robot_form.visible {
        return None;
    }
    let (mut submit, mut cancel) = (false, false);

    Window::new(UI_TEXT.robot_form_title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_width(UI_CONFIG.form_window_width);
            let fields = &mut ws.robot_form.fields;
            labelled_text(ui, &UI_TEXT.label_robot_name, &mut fields.name, false);
            ui.label(&UI_TEXT.label_description);
            ui.add(
                TextEdit::multiline(&mut fields.description)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(4.0);
            labelled_text(ui, &UI_TEXT.label_download_link, &mut fields.download_link, false);
            labelled_text(ui, &UI_TEXT.label_version, &mut fields.version, false);
            ui.label(&UI_TEXT.label_monthly_price);
            ui.add(DragValue::new(&mut fields.monthly_price).prefix("$"));

            if let Some(err) = &ws.robot_form.error {
                ui.add_space(6.0);
                ui.label_error(err);
            }
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                submit = ui
                    .button(ui.button_text_primary(&UI_TEXT.button_submit_robot))
                    .clicked();
                cancel = ui
                    .button(ui.button_text_secondary(&UI_TEXT.button_cancel))
                    .clicked();
            });
        });

    if cancel {
        ws.robot_form.close();
        return None;
    }
    if !submit {
        return None;
    }
    match ws.submit_robot() {
        Ok(robot) => {
            if DF.log_repository {
                log::info!("Robot {} uploaded as #{}", robot.name, robot.id);
            }
            Some(UI_TEXT.notice_robot_uploaded.clone())
        }
        Err(err) => {
            log::warn!("Robot upload rejected: {}", err);
            None
        }
    }
}

fn license_form_window(ctx: &Context, ws: &mut MentorWorkspace) -> Option<String> {
    if !ws.license_form.visible {
        return None;
    }
    let catalogue = listed(ws.robots.as_ref(), "robots");
    let (mut submit, mut cancel) = (false, false);

    Window::new(UI_TEXT.license_form_title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_width(UI_CONFIG.form_window_width);
            let fields = &mut ws.license_form.fields;

            ui.label(&UI_TEXT.label_select_robot);
            let selected = fields
                .robot_id
                .and_then(|id| catalogue.iter().find(|r| r.id == id))
                .map_or(UI_TEXT.placeholder_select_robot.as_str(), |r| r.name.as_str());
            ComboBox::from_id_salt("license_robot")
                .selected_text(selected)
                .width(UI_CONFIG.form_window_width)
                .show_ui(ui, |ui| {
                    for robot in &catalogue {
                        ui.selectable_value(&mut fields.robot_id, Some(robot.id), &robot.name);
                    }
                });
            ui.add_space(4.0);

            ui.label(&UI_TEXT.label_duration_days);
            ui.add(DragValue::new(&mut fields.duration_days).suffix(" days"));
            ui.add_space(4.0);
            labelled_text(
                ui,
                &UI_TEXT.label_client_email_optional,
                &mut fields.client_email,
                false,
            );

            if let Some(err) = &ws.license_form.error {
                ui.add_space(6.0);
                ui.label_error(err);
            }
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                submit = ui
                    .button(ui.button_text_primary(&UI_TEXT.button_submit_license))
                    .clicked();
                cancel = ui
                    .button(ui.button_text_secondary(&UI_TEXT.button_cancel))
                    .clicked();
            });
        });

    if cancel {
        ws.license_form.close();
        return None;
    }
    if !submit {
        return None;
    }
    match ws.submit_license() {
        Ok(license) => {
            if DF.log_repository {
                log::info!("License {} generated for {}", license.key, license.client_email);
            }
            Some(UI_TEXT.notice_license_generated.clone())
        }
        Err(err) => {
            log::warn!("License generation rejected: {}", err);
            None
        }
    }
}
