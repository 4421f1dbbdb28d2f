use {
    crate::{
        config::{AUTH, SeedRobot},
        models::{
            FormError, Record, RecordId,
            form::required,
        },
    },
    serde::{Deserialize, Serialize},
};

/// A trading robot (expert advisor) a mentor sells by monthly subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub download_link: Option<String>,
    pub version: String,
    /// Whole dollars per month. Not validated.
    pub monthly_price: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RobotDraft {
    pub name: String,
    pub description: String,
    pub download_link: Option<String>,
    pub version: String,
    pub monthly_price: i64,
}

impl Record for Robot {
    type Draft = RobotDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: RobotDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            download_link: draft.download_link,
            version: draft.version,
            monthly_price: draft.monthly_price,
        }
    }
}

impl From<&SeedRobot> for RobotDraft {
    fn from(seed: &SeedRobot) -> Self {
        Self {
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            download_link: None,
            version: seed.version.to_string(),
            monthly_price: seed.monthly_price as i64,
        }
    }
}

/// State of the "Upload Trading Robot" form.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotForm {
    pub name: String,
    pub description: String,
    pub download_link: String,
    pub version: String,
    pub monthly_price: i64,
}

impl Default for RobotForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            download_link: String::new(),
            version: AUTH.default_robot_version.to_string(),
            monthly_price: 0,
        }
    }
}

impl RobotForm {
    pub fn to_draft(&self) -> Result<RobotDraft, FormError> {
        Ok(RobotDraft {
            name: required(&self.name, "name")?,
            description: required(&self.description, "description")?,
            download_link: Some(required(&self.download_link, "download link")?),
            version: self.version.trim().to_string(),
            monthly_price: self.monthly_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RobotForm {
        RobotForm {
            name: "Night Owl".into(),
            description: "Asian session breakout".into(),
            download_link: "https://example.com/owl.ex5".into(),
            version: "0.9".into(),
            monthly_price: 59,
        }
    }

    #[test]
    fn default_form_matches_upload_defaults() {
        let form = RobotForm::default();
        assert_eq!(form.version, "1.0");
        assert_eq!(form.monthly_price, 0);
        assert!(form.name.is_empty());
    }

    #[test]
    fn filled_form_becomes_draft() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.name, "Night Owl");
        assert_eq!(draft.download_link.as_deref(), Some("https://example.com/owl.ex5"));
        let robot = Robot::from_draft(4, draft);
        assert_eq!(robot.id, 4);
        assert_eq!(robot.monthly_price, 59);
    }

    #[test]
    fn required_fields_are_checked_in_form_order() {
        let mut form = filled();
        form.description.clear();
        form.download_link.clear();
        assert_eq!(form.to_draft(), Err(FormError::MissingField("description")));
    }
}
