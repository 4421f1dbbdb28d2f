mod account;
mod client;
mod form;
mod license;
mod record;
mod robot;
mod stats;

pub use {
    account::{AccountDraft, AccountForm, Mt5Account},
    client::{Client, ClientDraft, OwnedRobot, OwnedRobotDraft},
    form::FormError,
    license::{License, LicenseDraft, LicenseForm, generate_license_key},
    record::{Record, RecordId},
    robot::{Robot, RobotDraft, RobotForm},
    stats::{ClientStats, MentorStats},
};
