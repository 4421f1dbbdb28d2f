#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries)
pub use app::App;
pub use config::{DEMO, PERSISTENCE};
pub use domain::{Role, Route};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Route to open at start-up, e.g. /mentor/licenses
    #[arg(long, default_value = "/")]
    pub route: String,

    /// Override the simulated login/registration delay
    #[arg(long)]
    pub login_delay_ms: Option<u64>,

    /// Clear any stored session before the first frame
    #[arg(long, default_value_t = false)]
    pub forget_session: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            route: "/".to_string(),
            login_delay_ms: None,
            forget_session: false,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_parse_of_no_args() {
        let parsed = Cli::parse_from(["robot-platform"]);
        let default = Cli::default();
        assert_eq!(parsed.route, default.route);
        assert_eq!(parsed.login_delay_ms, default.login_delay_ms);
        assert_eq!(parsed.forget_session, default.forget_session);
    }

    #[test]
    fn cli_accepts_overrides() {
        let cli = Cli::parse_from([
            "robot-platform",
            "--route",
            "/client/mt5",
            "--login-delay-ms",
            "250",
            "--forget-session",
        ]);
        assert_eq!(cli.route, "/client/mt5");
        assert_eq!(cli.login_delay_ms, Some(250));
        assert!(cli.forget_session);
    }
}
