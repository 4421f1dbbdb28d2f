//! Configuration module for the robot platform.

// Can all be private now because we have a public re-export.
mod auth;
mod debug;
mod demo;
mod persistence;

// Re-export commonly used items
pub use auth::{AUTH, AuthConfig, LicenseKeyConfig};
pub use debug::DF;
pub use demo::{
    ClientFigures, DEMO, DemoConfig, MentorFigures, SeedAccount, SeedClient, SeedLicense,
    SeedOwnedRobot, SeedRobot,
};
pub use persistence::{PERSISTENCE, PersistenceConfig, SessionKeys};
