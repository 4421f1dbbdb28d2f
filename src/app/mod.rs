mod phases;
mod root;
mod state;
mod workspace;

pub(crate) use state::{AppState, LoginState, RegisterState, RunningState};
pub(crate) use workspace::{ClientWorkspace, MentorWorkspace};

pub(crate) use phases::PhaseView;

pub use root::App;
