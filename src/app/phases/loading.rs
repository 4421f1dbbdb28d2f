// app/phases/loading.rs

use eframe::{Frame, egui::Context};

use crate::app::{App, phases::PhaseView, state::AppState, state::LoadingState};

impl PhaseView for LoadingState {
    fn tick(&mut self, app: &mut App, ctx: &Context, frame: &mut Frame) -> AppState {
        app.tick_loading_state(ctx, frame)
    }
}
