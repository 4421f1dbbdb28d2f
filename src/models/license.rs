use {
    crate::{
        config::{AUTH, SeedLicense},
        models::{FormError, Record, RecordId, Robot},
        utils::{TimeUtils, date_after_days},
    },
    anyhow::{Context, Result},
    chrono::NaiveDate,
    rand::Rng,
    serde::{Deserialize, Serialize},
};

const KEY_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A license key tying a client to a robot until `expires_on`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: RecordId,
    pub key: String,
    pub robot_name: String,
    pub client_email: String,
    pub expires_on: NaiveDate,
    /// Never derived from `expires_on`: an expired license can still read as active.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LicenseDraft {
    pub key: String,
    pub robot_name: String,
    pub client_email: String,
    pub expires_on: NaiveDate,
    pub active: bool,
}

impl Record for License {
    type Draft = LicenseDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: LicenseDraft) -> Self {
        Self {
            id,
            key: draft.key,
            robot_name: draft.robot_name,
            client_email: draft.client_email,
            expires_on: draft.expires_on,
            active: draft.active,
        }
    }
}

impl TryFrom<&SeedLicense> for LicenseDraft {
    type Error = anyhow::Error;

    fn try_from(seed: &SeedLicense) -> Result<Self> {
        let expires_on = NaiveDate::parse_from_str(seed.expires_on, TimeUtils::STANDARD_DATE_FORMAT)
            .with_context(|| format!("bad expiry date for seed license {}", seed.key))?;
        Ok(Self {
            key: seed.key.to_string(),
            robot_name: seed.robot_name.to_string(),
            client_email: seed.client_email.to_string(),
            expires_on,
            active: seed.active,
        })
    }
}

/// `LIC-` followed by uppercase alphanumerics. Not cryptographic, not checked for uniqueness.
pub fn generate_license_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..AUTH.license_key.random_len)
        .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", AUTH.license_key.prefix, suffix)
}

/// State of the "Generate License Key" form.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseForm {
    pub robot_id: Option<RecordId>,
    pub duration_days: i64,
    pub client_email: String,
}

impl Default for LicenseForm {
    fn default() -> Self {
        Self {
            robot_id: None,
            duration_days: AUTH.default_license_days,
            client_email: String::new(),
        }
    }
}

impl LicenseForm {
    /// Builds a license for the selected robot, valid `duration_days` from `today`.
    pub fn to_draft<R: Rng + ?Sized>(
        &self,
        catalogue: &[Robot],
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<LicenseDraft, FormError> {
        let robot_id = self.robot_id.ok_or(FormError::MissingField("robot"))?;
        let robot = catalogue
            .iter()
            .find(|r| r.id == robot_id)
            .ok_or(FormError::UnknownRobot)?;

        let email = self.client_email.trim();
        let client_email = if email.is_empty() {
            AUTH.unassigned_client.to_string()
        } else {
            email.to_string()
        };

        Ok(LicenseDraft {
            key: generate_license_key(rng),
            robot_name: robot.name.clone(),
            client_email,
            expires_on: date_after_days(today, self.duration_days),
            active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RobotDraft;
    use rand::{SeedableRng, rngs::StdRng};

    fn catalogue() -> Vec<Robot> {
        vec![Robot::from_draft(
            2,
            RobotDraft {
                name: "Forex Scalper".into(),
                description: "High-frequency scalping robot".into(),
                download_link: None,
                version: "1.5".into(),
                monthly_price: 149,
            },
        )]
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn generated_keys_have_prefix_and_uppercase_alphanumerics() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let key = generate_license_key(&mut rng);
            let suffix = key.strip_prefix("LIC-").unwrap();
            assert_eq!(suffix.len(), 12);
            assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn draft_uses_selected_robot_and_duration() {
        let form = LicenseForm {
            robot_id: Some(2),
            duration_days: 30,
            client_email: "trader@email.com".into(),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let draft = form.to_draft(&catalogue(), day(2024, 10, 1), &mut rng).unwrap();
        assert_eq!(draft.robot_name, "Forex Scalper");
        assert_eq!(draft.client_email, "trader@email.com");
        assert_eq!(draft.expires_on, day(2024, 10, 31));
        assert!(draft.active);
    }

    #[test]
    fn blank_email_is_not_assigned() {
        let form = LicenseForm {
            robot_id: Some(2),
            ..LicenseForm::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let draft = form.to_draft(&catalogue(), day(2024, 1, 1), &mut rng).unwrap();
        assert_eq!(draft.client_email, "Not assigned");
    }

    #[test]
    fn robot_is_required() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = LicenseForm::default()
            .to_draft(&catalogue(), day(2024, 1, 1), &mut rng)
            .unwrap_err();
        assert_eq!(err, FormError::MissingField("robot"));
    }

    #[test]
    fn stale_robot_selection_is_rejected() {
        let form = LicenseForm {
            robot_id: Some(99),
            ..LicenseForm::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            form.to_draft(&catalogue(), day(2024, 1, 1), &mut rng),
            Err(FormError::UnknownRobot)
        );
    }

    #[test]
    fn negative_duration_gives_expired_but_active_license() {
        let form = LicenseForm {
            robot_id: Some(2),
            duration_days: -5,
            client_email: String::new(),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let draft = form.to_draft(&catalogue(), day(2024, 1, 10), &mut rng).unwrap();
        assert_eq!(draft.expires_on, day(2024, 1, 5));
        assert!(draft.active);
    }

    #[test]
    fn seed_license_parses_expiry() {
        let seed = &crate::config::DEMO.licenses[0];
        let draft = LicenseDraft::try_from(seed).unwrap();
        assert_eq!(draft.expires_on, day(2024, 12, 31));
        assert_eq!(draft.key, "LIC-ABC123DEF456");
    }
}
