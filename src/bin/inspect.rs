//! Prints the records every new session is seeded with.
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use robot_platform::DEMO;
use robot_platform::data::{MemoryRepository, Repository};
use robot_platform::models::{
    AccountDraft, Client, ClientDraft, License, LicenseDraft, Mt5Account, OwnedRobot,
    OwnedRobotDraft, Record, Robot, RobotDraft,
};
use robot_platform::utils::{format_date, format_timestamp};

#[derive(Parser, Debug)]
#[command(about = "Print the seeded robot platform catalogue")]
struct Args {
    /// Emit JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Catalogue {
    robots: Vec<Robot>,
    licenses: Vec<License>,
    clients: Vec<Client>,
    accounts: Vec<Mt5Account>,
    owned_robots: Vec<OwnedRobot>,
}

#[derive(Tabled)]
struct RobotRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Price / month")]
    price: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct LicenseRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Robot")]
    robot: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Active")]
    active: bool,
}

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Licenses")]
    licenses: u32,
    #[tabled(rename = "Joined")]
    joined: String,
}

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Server")]
    server: String,
    #[tabled(rename = "Platform")]
    platform: String,
    #[tabled(rename = "Last sync")]
    last_sync: String,
}

#[derive(Tabled)]
struct OwnedRobotRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Robot")]
    name: String,
    #[tabled(rename = "License")]
    license_key: String,
    #[tabled(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

fn seeded<T: Record>(drafts: Vec<T::Draft>, what: &str) -> Result<Vec<T>> {
    MemoryRepository::<T>::seeded(drafts)
        .list()
        .with_context(|| format!("Failed to list seeded {}", what))
}

fn load_catalogue() -> Result<Catalogue> {
    let licenses = DEMO
        .licenses
        .iter()
        .map(LicenseDraft::try_from)
        .collect::<Result<Vec<_>>>()
        .context("Bad license seed")?;
    let clients = DEMO
        .clients
        .iter()
        .map(ClientDraft::try_from)
        .collect::<Result<Vec<_>>>()
        .context("Bad client seed")?;
    let accounts = DEMO
        .accounts
        .iter()
        .map(AccountDraft::try_from)
        .collect::<Result<Vec<_>>>()
        .context("Bad MT5 account seed")?;
    let owned_robots = DEMO
        .owned_robots
        .iter()
        .map(OwnedRobotDraft::try_from)
        .collect::<Result<Vec<_>>>()
        .context("Bad owned robot seed")?;

    Ok(Catalogue {
        robots: seeded(DEMO.robots.iter().map(RobotDraft::from).collect(), "robots")?,
        licenses: seeded(licenses, "licenses")?,
        clients: seeded(clients, "clients")?,
        accounts: seeded(accounts, "accounts")?,
        owned_robots: seeded(owned_robots, "owned robots")?,
    })
}

fn print_table<R: Tabled>(title: &str, rows: Vec<R>) {
    println!("\n{}", title);
    println!("{}", Table::new(rows).with(Style::rounded()));
}

fn print_tables(catalogue: &Catalogue) {
    print_table(
        "Robots",
        catalogue
            .robots
            .iter()
            .map(|r| RobotRow {
                id: r.id,
                name: r.name.clone(),
                version: r.version.clone(),
                price: format!("${}", r.monthly_price),
                description: r.description.clone(),
            })
            .collect(),
    );
    print_table(
        "Licenses",
        catalogue
            .licenses
            .iter()
            .map(|l| LicenseRow {
                id: l.id,
                key: l.key.clone(),
                robot: l.robot_name.clone(),
                client: l.client_email.clone(),
                expires: format_date(l.expires_on),
                active: l.active,
            })
            .collect(),
    );
    print_table(
        "Clients",
        catalogue
            .clients
            .iter()
            .map(|c| ClientRow {
                id: c.id,
                name: c.full_name.clone(),
                email: c.email.clone(),
                licenses: c.active_licenses,
                joined: format_date(c.joined_on),
            })
            .collect(),
    );
    print_table(
        "MT5 accounts",
        catalogue
            .accounts
            .iter()
            .map(|a| AccountRow {
                id: a.id,
                account: a.account_number.clone(),
                server: a.server.clone(),
                platform: a.platform.clone(),
                last_sync: format_timestamp(a.last_sync),
            })
            .collect(),
    );
    print_table(
        "Owned robots (client view)",
        catalogue
            .owned_robots
            .iter()
            .map(|o| OwnedRobotRow {
                id: o.id,
                name: o.name.clone(),
                license_key: o.license_key.clone(),
                expires: format_date(o.expires_on),
                status: o.status_label(),
            })
            .collect(),
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let catalogue = load_catalogue()?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&catalogue).context("Failed to serialise catalogue")?;
        println!("{}", json);
    } else {
        print_tables(&catalogue);
    }
    Ok(())
}
