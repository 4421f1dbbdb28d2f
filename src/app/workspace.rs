//! Per-role page data. A workspace is built when a session starts and dropped
//! at logout, so records added during a session survive page switches only.
use {
    crate::{
        config::DEMO,
        data::{MemoryRepository, Repository},
        domain::{ClientPage, MentorPage},
        models::{
            AccountDraft, AccountForm, Client, ClientDraft, ClientStats, FormError, License,
            LicenseDraft, LicenseForm, MentorStats, Mt5Account, OwnedRobot, OwnedRobotDraft,
            Robot, RobotDraft, RobotForm,
        },
        utils::{now_utc, today},
    },
    anyhow::Result,
    chrono::{NaiveDate, NaiveDateTime},
    rand::Rng,
    thiserror::Error,
};

#[derive(Debug, Error)]
pub(crate) enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// A modal form: its fields, whether it is showing, and the last inline error.
#[derive(Debug, Clone, Default)]
pub(crate) struct FormPanel<F> {
    pub(crate) fields: F,
    pub(crate) visible: bool,
    pub(crate) error: Option<String>,
}

impl<F: Default> FormPanel<F> {
    pub(crate) fn open(&mut self) {
        self.visible = true;
        self.error = None;
    }

    pub(crate) fn close(&mut self) {
        self.visible = false;
        self.error = None;
    }

    /// Clears the fields and closes the panel after a successful submit.
    fn finish(&mut self) {
        self.fields = F::default();
        self.close();
    }

    fn fail(&mut self, err: &SubmitError) {
        self.error = Some(err.to_string());
    }
}

pub(crate) struct MentorWorkspace {
    pub(crate) stats: MentorStats,
    pub(crate) robots: Box<dyn Repository<Robot>>,
    pub(crate) licenses: Box<dyn Repository<License>>,
    pub(crate) clients: Box<dyn Repository<Client>>,
    pub(crate) robot_form: FormPanel<RobotForm>,
    pub(crate) license_form: FormPanel<LicenseForm>,
}

impl MentorWorkspace {
    pub(crate) fn seeded() -> Result<Self> {
        let licenses = DEMO
            .licenses
            .iter()
            .map(LicenseDraft::try_from)
            .collect::<Result<Vec<_>>>()?;
        let clients = DEMO
            .clients
            .iter()
            .map(ClientDraft::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            stats: MentorStats::from(&DEMO.mentor_figures),
            robots: Box::new(MemoryRepository::seeded(
                DEMO.robots.iter().map(RobotDraft::from),
            )),
            licenses: Box::new(MemoryRepository::seeded(licenses)),
            clients: Box::new(MemoryRepository::seeded(clients)),
            robot_form: FormPanel::default(),
            license_form: FormPanel::default(),
        })
    }

    /// A form belongs to its page: leaving the page closes it.
    pub(crate) fn close_forms_off(&mut self, page: MentorPage) {
        if page != MentorPage::Robots {
            self.robot_form.close();
        }
        if page != MentorPage::Licenses {
            self.license_form.close();
        }
    }

    pub(crate) fn submit_robot(&mut self) -> Result<Robot, SubmitError> {
        let result = self
            .robot_form
            .fields
            .to_draft()
            .map_err(SubmitError::from)
            .and_then(|draft| Ok(self.robots.add(draft)?));
        match result {
            Ok(robot) => {
                self.robot_form.finish();
                Ok(robot)
            }
            Err(err) => {
                self.robot_form.fail(&err);
                Err(err)
            }
        }
    }

    pub(crate) fn submit_license(&mut self) -> Result<License, SubmitError> {
        self.submit_license_with(today(), &mut rand::thread_rng())
    }

    pub(crate) fn submit_license_with<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<License, SubmitError> {
        let result = self
            .robots
            .list()
            .map_err(SubmitError::from)
            .and_then(|catalogue| Ok(self.license_form.fields.to_draft(&catalogue, today, rng)?))
            .and_then(|draft| Ok(self.licenses.add(draft)?));
        match result {
            Ok(license) => {
                self.license_form.finish();
                Ok(license)
            }
            Err(err) => {
                self.license_form.fail(&err);
                Err(err)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ActivationError {
    #[error("Please enter a license key")]
    EmptyKey,
}

pub(crate) struct ClientWorkspace {
    pub(crate) stats: ClientStats,
    pub(crate) robots: Box<dyn Repository<OwnedRobot>>,
    pub(crate) accounts: Box<dyn Repository<Mt5Account>>,
    pub(crate) account_form: FormPanel<AccountForm>,
    pub(crate) license_key: String,
}

impl ClientWorkspace {
    pub(crate) fn seeded() -> Result<Self> {
        let robots = DEMO
            .owned_robots
            .iter()
            .map(OwnedRobotDraft::try_from)
            .collect::<Result<Vec<_>>>()?;
        let accounts = DEMO
            .accounts
            .iter()
            .map(AccountDraft::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            stats: ClientStats::from(&DEMO.client_figures),
            robots: Box::new(MemoryRepository::seeded(robots)),
            accounts: Box::new(MemoryRepository::seeded(accounts)),
            account_form: FormPanel::default(),
            license_key: String::new(),
        })
    }

    pub(crate) fn close_forms_off(&mut self, page: ClientPage) {
        if page != ClientPage::Mt5 {
            self.account_form.close();
        }
    }

    pub(crate) fn submit_account(&mut self) -> Result<Mt5Account, SubmitError> {
        self.submit_account_at(now_utc().naive_utc())
    }

    pub(crate) fn submit_account_at(&mut self, now: NaiveDateTime) -> Result<Mt5Account, SubmitError> {
        let result = self
            .account_form
            .fields
            .to_draft(now)
            .map_err(SubmitError::from)
            .and_then(|draft| Ok(self.accounts.add(draft)?));
        match result {
            Ok(account) => {
                self.account_form.finish();
                Ok(account)
            }
            Err(err) => {
                self.account_form.fail(&err);
                Err(err)
            }
        }
    }

    /// Nothing is checked beyond emptiness. Returns the key that was "activated".
    pub(crate) fn activate_license(&mut self) -> Result<String, ActivationError> {
        if self.license_key.is_empty() {
            return Err(ActivationError::EmptyKey);
        }
        Ok(std::mem::take(&mut self.license_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn fill_robot(ws: &mut MentorWorkspace) {
        ws.robot_form.open();
        ws.robot_form.fields = RobotForm {
            name: "Range Hunter".into(),
            description: "Mean reversion on EURUSD".into(),
            download_link: "https://example.com/rh.ex5".into(),
            version: "1.2".into(),
            monthly_price: 49,
        };
    }

    #[test]
    fn mentor_workspace_is_seeded() {
        let ws = MentorWorkspace::seeded().unwrap();
        assert_eq!(ws.robots.list().unwrap().len(), 3);
        assert_eq!(ws.licenses.list().unwrap().len(), 2);
        assert_eq!(ws.clients.list().unwrap().len(), 3);
        assert_eq!(ws.stats.monthly_revenue, 1250);
    }

    #[test]
    fn uploading_a_robot_appends_one_and_clears_the_form() {
        let mut ws = MentorWorkspace::seeded().unwrap();
        fill_robot(&mut ws);
        let robot = ws.submit_robot().unwrap();

        let robots = ws.robots.list().unwrap();
        assert_eq!(robots.len(), 4);
        assert_eq!(robot.id, 4);
        assert_eq!(robots.last().unwrap().name, "Range Hunter");
        assert_eq!(ws.robot_form.fields, RobotForm::default());
        assert!(!ws.robot_form.visible);
    }

    #[test]
    fn invalid_robot_keeps_form_open_with_error() {
        let mut ws = MentorWorkspace::seeded().unwrap();
        fill_robot(&mut ws);
        ws.robot_form.fields.name.clear();
        assert!(matches!(
            ws.submit_robot(),
            Err(SubmitError::Form(FormError::MissingField("name")))
        ));
        assert_eq!(ws.robots.list().unwrap().len(), 3);
        assert!(ws.robot_form.visible);
        assert_eq!(
            ws.robot_form.error.as_deref(),
            Some("Please fill in the name field")
        );
        assert_eq!(ws.robot_form.fields.description, "Mean reversion on EURUSD");
    }

    #[test]
    fn generating_a_license_appends_one_and_clears_the_form() {
        let mut ws = MentorWorkspace::seeded().unwrap();
        ws.license_form.open();
        ws.license_form.fields.robot_id = Some(3);
        ws.license_form.fields.duration_days = 10;

        let today = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let license = ws.submit_license_with(today, &mut rng).unwrap();

        assert_eq!(license.id, 3);
        assert_eq!(license.robot_name, "Trend Master");
        assert_eq!(license.client_email, "Not assigned");
        assert_eq!(license.expires_on, NaiveDate::from_ymd_opt(2024, 10, 11).unwrap());
        assert!(license.key.starts_with("LIC-"));
        assert_eq!(ws.licenses.list().unwrap().len(), 3);
        assert_eq!(ws.license_form.fields, LicenseForm::default());
    }

    #[test]
    fn client_workspace_is_seeded() {
        let ws = ClientWorkspace::seeded().unwrap();
        assert_eq!(ws.robots.list().unwrap().len(), 2);
        assert_eq!(ws.accounts.list().unwrap().len(), 1);
        assert_eq!(ws.stats.connected_accounts, 1);
    }

    #[test]
    fn connecting_an_account_appends_one_and_clears_the_form() {
        let mut ws = ClientWorkspace::seeded().unwrap();
        ws.account_form.open();
        ws.account_form.fields = AccountForm {
            account_number: "55501234".into(),
            password: "secret".into(),
            server: "Pepperstone-Demo".into(),
        };
        let now = NaiveDate::from_ymd_opt(2024, 10, 21)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let account = ws.submit_account_at(now).unwrap();

        assert_eq!(account.id, 2);
        assert_eq!(account.platform, "Web");
        assert_eq!(ws.accounts.list().unwrap().len(), 2);
        assert_eq!(ws.account_form.fields, AccountForm::default());
    }

    #[test]
    fn activation_requires_a_key_and_clears_it() {
        let mut ws = ClientWorkspace::seeded().unwrap();
        assert_eq!(ws.activate_license(), Err(ActivationError::EmptyKey));
        ws.license_key = "LIC-ABC123DEF456".into();
        assert_eq!(ws.activate_license().as_deref(), Ok("LIC-ABC123DEF456"));
        assert!(ws.license_key.is_empty());
    }

    #[test]
    fn mentor_forms_close_away_from_their_page() {
        let mut ws = MentorWorkspace::seeded().unwrap();
        fill_robot(&mut ws);
        ws.license_form.open();

        ws.close_forms_off(MentorPage::Robots);
        assert!(ws.robot_form.visible);
        assert!(!ws.license_form.visible);

        ws.close_forms_off(MentorPage::Clients);
        assert!(!ws.robot_form.visible);
        assert_eq!(ws.robot_form.fields.name, "Range Hunter");
        assert_eq!(ws.robots.list().unwrap().len(), 3);
    }

    #[test]
    fn account_form_closes_away_from_mt5_page() {
        let mut ws = ClientWorkspace::seeded().unwrap();
        ws.account_form.open();
        ws.close_forms_off(ClientPage::Mt5);
        assert!(ws.account_form.visible);
        ws.close_forms_off(ClientPage::Home);
        assert!(!ws.account_form.visible);
    }
}
