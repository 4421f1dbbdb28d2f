use std::sync::LazyLock;

pub struct UiText {
    // --- Navigation bar ---
    pub app_title: String,
    pub nav_welcome: String,
    pub nav_logout: String,
    pub nav_back: String,

    // --- Loading ---
    pub ls_title: String,
    pub ls_checking_session: String,

    // --- Login / register ---
    pub login_heading: String,
    pub register_heading: String,
    pub label_email: String,
    pub label_password: String,
    pub label_confirm_password: String,
    pub label_full_name: String,
    pub label_company_name: String,
    pub label_role: String,
    pub button_login: String,
    pub button_logging_in: String,
    pub button_register: String,
    pub button_registering: String,
    pub link_to_register: String,
    pub link_to_login: String,

    // --- Mentor portal ---
    pub mentor_portal: String,
    pub stat_total_robots: String,
    pub stat_active_licenses: String,
    pub stat_total_clients: String,
    pub stat_monthly_revenue: String,
    pub quick_actions: String,
    pub action_upload_robot: String,
    pub action_generate_license: String,
    pub action_view_clients: String,
    pub robots_heading: String,
    pub licenses_heading: String,
    pub clients_heading: String,
    pub robot_form_title: String,
    pub license_form_title: String,
    pub label_robot_name: String,
    pub label_description: String,
    pub label_download_link: String,
    pub label_version: String,
    pub label_monthly_price: String,
    pub label_select_robot: String,
    pub label_duration_days: String,
    pub label_client_email_optional: String,
    pub placeholder_select_robot: String,
    pub col_license_key: String,
    pub col_robot: String,
    pub col_client: String,
    pub col_expires: String,
    pub col_status: String,
    pub col_actions: String,
    pub col_name: String,
    pub col_email: String,
    pub col_active_licenses: String,
    pub col_joined: String,
    pub status_active: String,
    pub status_inactive: String,

    // --- Client portal ---
    pub client_portal: String,
    pub stat_active_robots: String,
    pub stat_connected_accounts: String,
    pub stat_expiring_soon: String,
    pub action_connect_mt5: String,
    pub action_activate_license: String,
    pub action_browse_robots: String,
    pub owned_robots_heading: String,
    pub mt5_heading: String,
    pub activate_heading: String,
    pub account_form_title: String,
    pub label_account_number: String,
    pub label_server: String,
    pub label_platform: String,
    pub label_last_sync: String,
    pub label_license_key: String,
    pub label_expires: String,
    pub placeholder_license_key: String,
    pub activate_hint: String,

    // --- Buttons with no behaviour behind them yet ---
    pub button_view_licenses: String,
    pub button_edit: String,
    pub button_renew: String,
    pub button_revoke: String,
    pub button_view_details: String,
    pub button_contact: String,
    pub button_download_ea: String,
    pub button_renew_license: String,
    pub button_sync_now: String,
    pub button_disconnect: String,

    // --- Form buttons ---
    pub button_submit_robot: String,
    pub button_submit_license: String,
    pub button_submit_account: String,
    pub button_activate: String,
    pub button_cancel: String,
    pub button_ok: String,

    // --- Notices ---
    pub notice_title: String,
    pub notice_robot_uploaded: String,
    pub notice_license_generated: String,
    pub notice_account_connected: String,
    pub notice_registered: String,
    pub notice_license_activated_prefix: String,
    pub notice_license_activated_suffix: String,
}

impl UiText {
    pub fn license_activated(&self, key: &str) -> String {
        format!(
            "{}{}{}",
            self.notice_license_activated_prefix, key, self.notice_license_activated_suffix
        )
    }
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Forex Robot Platform".to_string(),
    nav_welcome: "Welcome,".to_string(),
    nav_logout: "Logout".to_string(),
    nav_back: "Back".to_string(),

    ls_title: "Forex Robot Platform".to_string(),
    ls_checking_session: "Checking session...".to_string(),

    login_heading: "Login to Forex Robot Platform".to_string(),
    register_heading: "Create an Account".to_string(),
    label_email: "Email".to_string(),
    label_password: "Password".to_string(),
    label_confirm_password: "Confirm Password".to_string(),
    label_full_name: "Full Name".to_string(),
    label_company_name: "Company Name".to_string(),
    label_role: "I am a".to_string(),
    button_login: "Login".to_string(),
    button_logging_in: "Logging in...".to_string(),
    button_register: "Register".to_string(),
    button_registering: "Creating Account...".to_string(),
    link_to_register: "Don't have an account? Register here".to_string(),
    link_to_login: "Already have an account? Login here".to_string(),

    mentor_portal: "Mentor Portal".to_string(),
    stat_total_robots: "Total Robots".to_string(),
    stat_active_licenses: "Active Licenses".to_string(),
    stat_total_clients: "Total Clients".to_string(),
    stat_monthly_revenue: "Monthly Revenue".to_string(),
    quick_actions: "Quick Actions".to_string(),
    action_upload_robot: "Upload New Robot".to_string(),
    action_generate_license: "Generate License".to_string(),
    action_view_clients: "View Clients".to_string(),
    robots_heading: "My Robots".to_string(),
    licenses_heading: "License Management".to_string(),
    clients_heading: "My Clients".to_string(),
    robot_form_title: "Upload New Robot".to_string(),
    license_form_title: "Generate New License".to_string(),
    label_robot_name: "Robot Name".to_string(),
    label_description: "Description".to_string(),
    label_download_link: "Download Link".to_string(),
    label_version: "Version".to_string(),
    label_monthly_price: "Monthly Price ($)".to_string(),
    label_select_robot: "Select Robot".to_string(),
    label_duration_days: "Duration (days)".to_string(),
    label_client_email_optional: "Client Email (optional)".to_string(),
    placeholder_select_robot: "Choose a robot".to_string(),
    col_license_key: "License Key".to_string(),
    col_robot: "Robot".to_string(),
    col_client: "Client".to_string(),
    col_expires: "Expires".to_string(),
    col_status: "Status".to_string(),
    col_actions: "Actions".to_string(),
    col_name: "Name".to_string(),
    col_email: "Email".to_string(),
    col_active_licenses: "Active Licenses".to_string(),
    col_joined: "Joined".to_string(),
    status_active: "Active".to_string(),
    status_inactive: "Inactive".to_string(),

    client_portal: "Client Portal".to_string(),
    stat_active_robots: "Active Robots".to_string(),
    stat_connected_accounts: "Connected MT5 Accounts".to_string(),
    stat_expiring_soon: "Licenses Expiring Soon".to_string(),
    action_connect_mt5: "Connect MT5 Account".to_string(),
    action_activate_license: "Activate License".to_string(),
    action_browse_robots: "View My Robots".to_string(),
    owned_robots_heading: "My Robots".to_string(),
    mt5_heading: "MT5 Accounts".to_string(),
    activate_heading: "Activate License".to_string(),
    account_form_title: "Connect MT5 Account".to_string(),
    label_account_number: "Account Number".to_string(),
    label_server: "Server".to_string(),
    label_platform: "Platform".to_string(),
    label_last_sync: "Last Sync".to_string(),
    label_license_key: "License Key".to_string(),
    label_expires: "Expires".to_string(),
    placeholder_license_key: "LIC-XXXXXXXXXXXX".to_string(),
    activate_hint: "Enter the license key you received from your mentor.".to_string(),

    button_view_licenses: "View Licenses".to_string(),
    button_edit: "Edit".to_string(),
    button_renew: "Renew".to_string(),
    button_revoke: "Revoke".to_string(),
    button_view_details: "View Details".to_string(),
    button_contact: "Contact".to_string(),
    button_download_ea: "Download EA".to_string(),
    button_renew_license: "Renew License".to_string(),
    button_sync_now: "Sync Now".to_string(),
    button_disconnect: "Disconnect".to_string(),

    button_submit_robot: "Upload Robot".to_string(),
    button_submit_license: "Generate License".to_string(),
    button_submit_account: "Connect Account".to_string(),
    button_activate: "Activate".to_string(),
    button_cancel: "Cancel".to_string(),
    button_ok: "OK".to_string(),

    notice_title: "Notice".to_string(),
    notice_robot_uploaded: "Robot uploaded successfully!".to_string(),
    notice_license_generated: "License generated successfully!".to_string(),
    notice_account_connected: "MT5 account connected successfully!".to_string(),
    notice_registered: "Registration successful! Please login.".to_string(),
    notice_license_activated_prefix: "License ".to_string(),
    notice_license_activated_suffix: " activated successfully!".to_string(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_notice_names_the_key() {
        assert_eq!(
            UI_TEXT.license_activated("LIC-ABC"),
            "License LIC-ABC activated successfully!"
        );
    }
}
