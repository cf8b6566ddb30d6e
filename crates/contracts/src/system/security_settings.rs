//! Security settings form model.
//!
//! Saving is local only. The success banner is shown on every save, whether
//! or not a value changed.

use serde::{Deserialize, Serialize};

pub const SESSION_TIMEOUT_OPTIONS: &[u32] = &[15, 30, 60, 120];
pub const LOG_RETENTION_OPTIONS: &[u32] = &[30, 90, 180, 365];

pub const SAVE_SUCCESS_MESSAGE: &str = "Security settings saved successfully.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_required: bool,
    pub session_timeout_minutes: u32,
    pub password_min_length: u32,
    pub password_expiry_days: u32,
    pub max_login_attempts: u32,
    pub lockout_minutes: u32,
    pub ip_allowlist_enabled: bool,
    pub ip_allowlist: Vec<String>,
    pub email_alerts: bool,
    pub alert_on_failed_logins: bool,
    pub log_retention_days: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_required: true,
            session_timeout_minutes: 30,
            password_min_length: 12,
            password_expiry_days: 90,
            max_login_attempts: 5,
            lockout_minutes: 15,
            ip_allowlist_enabled: false,
            ip_allowlist: vec!["192.168.1.0/24".to_string()],
            email_alerts: true,
            alert_on_failed_logins: true,
            log_retention_days: 90,
        }
    }
}

impl SecuritySettings {
    /// Splits a comma/newline separated allowlist, dropping blanks.
    pub fn parse_allowlist(input: &str) -> Vec<String> {
        input
            .split(|c| c == ',' || c == '\n')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Dismissible success banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveNotice {
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsForm {
    pub saved: SecuritySettings,
    pub edited: SecuritySettings,
    pub notice: Option<SaveNotice>,
}

impl SettingsForm {
    pub fn new(initial: SecuritySettings) -> Self {
        Self {
            saved: initial.clone(),
            edited: initial,
            notice: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.saved != self.edited
    }

    pub fn save(&mut self) {
        self.saved = self.edited.clone();
        self.notice = Some(SaveNotice {
            message: SAVE_SUCCESS_MESSAGE,
        });
    }

    pub fn discard_changes(&mut self) {
        self.edited = self.saved.clone();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_without_changes_still_notifies() {
        let mut form = SettingsForm::new(SecuritySettings::default());
        assert!(!form.is_dirty());
        form.save();
        assert_eq!(form.notice.as_ref().map(|n| n.message), Some(SAVE_SUCCESS_MESSAGE));
        form.dismiss_notice();
        assert!(form.notice.is_none());
    }

    #[test]
    fn test_save_commits_edits() {
        let mut form = SettingsForm::default();
        form.edited.session_timeout_minutes = 60;
        assert!(form.is_dirty());
        form.save();
        assert!(!form.is_dirty());
        assert_eq!(form.saved.session_timeout_minutes, 60);
    }

    #[test]
    fn test_discard_restores_saved_values() {
        let mut form = SettingsForm::default();
        form.edited.two_factor_required = false;
        form.discard_changes();
        assert!(form.edited.two_factor_required);
    }

    #[test]
    fn test_parse_allowlist() {
        assert_eq!(
            SecuritySettings::parse_allowlist(" 10.0.0.0/8,\n\n192.168.1.0/24 ,"),
            vec!["10.0.0.0/8".to_string(), "192.168.1.0/24".to_string()]
        );
    }
}
