use {
    crate::{
        config::{SeedClient, SeedOwnedRobot},
        models::{Record, RecordId},
        utils::TimeUtils,
    },
    anyhow::{Context, Result},
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// A client as seen from a mentor's "My Clients" page. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub active_licenses: u32,
    pub joined_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientDraft {
    pub full_name: String,
    pub email: String,
    pub active_licenses: u32,
    pub joined_on: NaiveDate,
}

impl Record for Client {
    type Draft = ClientDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ClientDraft) -> Self {
        Self {
            id,
            full_name: draft.full_name,
            email: draft.email,
            active_licenses: draft.active_licenses,
            joined_on: draft.joined_on,
        }
    }
}

impl TryFrom<&SeedClient> for ClientDraft {
    type Error = anyhow::Error;

    fn try_from(seed: &SeedClient) -> Result<Self> {
        let joined_on = NaiveDate::parse_from_str(seed.joined_on, TimeUtils::STANDARD_DATE_FORMAT)
            .with_context(|| format!("bad join date for seed client {}", seed.email))?;
        Ok(Self {
            full_name: seed.full_name.to_string(),
            email: seed.email.to_string(),
            active_licenses: seed.active_licenses,
            joined_on,
        })
    }
}

/// A robot a client holds a license for ("My Active Robots").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedRobot {
    pub id: RecordId,
    pub name: String,
    pub license_key: String,
    pub expires_on: NaiveDate,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnedRobotDraft {
    pub name: String,
    pub license_key: String,
    pub expires_on: NaiveDate,
    pub active: bool,
}

impl OwnedRobot {
    pub fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Expired" }
    }
}

impl Record for OwnedRobot {
    type Draft = OwnedRobotDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: OwnedRobotDraft) -> Self {
        Self {
            id,
            name: draft.name,
            license_key: draft.license_key,
            expires_on: draft.expires_on,
            active: draft.active,
        }
    }
}

impl TryFrom<&SeedOwnedRobot> for OwnedRobotDraft {
    type Error = anyhow::Error;

    fn try_from(seed: &SeedOwnedRobot) -> Result<Self> {
        let expires_on = NaiveDate::parse_from_str(seed.expires_on, TimeUtils::STANDARD_DATE_FORMAT)
            .with_context(|| format!("bad expiry date for owned robot {}", seed.name))?;
        Ok(Self {
            name: seed.name.to_string(),
            license_key: seed.license_key.to_string(),
            expires_on,
            active: seed.active,
        })
    }
}
