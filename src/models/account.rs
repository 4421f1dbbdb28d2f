use {
    crate::{
        config::{AUTH, SeedAccount},
        models::{FormError, Record, RecordId, form::required},
        utils::TimeUtils,
    },
    anyhow::{Context, Result},
    chrono::NaiveDateTime,
    serde::{Deserialize, Serialize},
};

/// A MetaTrader 5 account a client has connected for robot execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mt5Account {
    pub id: RecordId,
    pub account_number: String,
    pub server: String,
    pub platform: String,
    pub last_sync: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountDraft {
    pub account_number: String,
    pub server: String,
    pub platform: String,
    pub last_sync: NaiveDateTime,
}

impl Record for Mt5Account {
    type Draft = AccountDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: AccountDraft) -> Self {
        Self {
            id,
            account_number: draft.account_number,
            server: draft.server,
            platform: draft.platform,
            last_sync: draft.last_sync,
        }
    }
}

impl TryFrom<&SeedAccount> for AccountDraft {
    type Error = anyhow::Error;

    fn try_from(seed: &SeedAccount) -> Result<Self> {
        let last_sync =
            NaiveDateTime::parse_from_str(seed.last_sync, TimeUtils::STANDARD_TIMESTAMP_FORMAT)
                .with_context(|| format!("bad sync time for seed account {}", seed.account_number))?;
        Ok(Self {
            account_number: seed.account_number.to_string(),
            server: seed.server.to_string(),
            platform: seed.platform.to_string(),
            last_sync,
        })
    }
}

/// State of the "Connect MT5 Account" form.
///
/// The password is collected because the form asks for it, but it never
/// leaves the form: drafts and records do not carry it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountForm {
    pub account_number: String,
    pub password: String,
    pub server: String,
}

impl AccountForm {
    pub fn to_draft(&self, now: NaiveDateTime) -> Result<AccountDraft, FormError> {
        let account_number = required(&self.account_number, "account number")?;
        if self.password.is_empty() {
            return Err(FormError::MissingField("password"));
        }
        let server = required(&self.server, "server")?;
        Ok(AccountDraft {
            account_number,
            server,
            platform: AUTH.connect_platform.to_string(),
            last_sync: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 21)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn connected_account_is_web_platform_synced_now() {
        let form = AccountForm {
            account_number: "87654321".into(),
            password: "hunter2".into(),
            server: "ICMarkets-Live".into(),
        };
        let draft = form.to_draft(noon()).unwrap();
        assert_eq!(draft.platform, "Web");
        assert_eq!(draft.last_sync, noon());
        assert_eq!(draft.server, "ICMarkets-Live");
    }

    #[test]
    fn password_is_required_but_whitespace_counts() {
        let mut form = AccountForm {
            account_number: "1".into(),
            password: String::new(),
            server: "Demo".into(),
        };
        assert_eq!(form.to_draft(noon()), Err(FormError::MissingField("password")));
        form.password = " ".into();
        assert!(form.to_draft(noon()).is_ok());
    }

    #[test]
    fn seed_account_parses_sync_time() {
        let draft = AccountDraft::try_from(&crate::config::DEMO.accounts[0]).unwrap();
        assert_eq!(draft.platform, "Windows");
        assert_eq!(
            draft.last_sync,
            NaiveDate::from_ymd_opt(2024, 10, 20)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
    }
}
