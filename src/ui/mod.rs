mod notice;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use notice::Notice;

pub(crate) use screens::render_loading;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
