use crate::shared::list_view::{
    require_non_empty, ListRecord, ListViewConfig, ListViewError, RecordDraft, RecordId,
    STANDARD_PAGE_SIZES,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;

pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";
    pub const STATUS: &str = "status";
    pub const ACCOUNT_TYPE: &str = "account_type";
    pub const PERMISSIONS: &str = "permissions";
}

/// Capability tags an account can be granted.
pub const PERMISSION_TAGS: &[&str] = &[
    "view_clients",
    "edit_clients",
    "view_consultants",
    "manage_consultants",
    "view_reports",
    "view_logs",
    "manage_users",
    "manage_settings",
];

/// Serialized and displayed form of [`PermissionSet::All`].
pub const PERMISSIONS_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Admin,
    Staff,
    Faculty,
    IT,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Admin => "Admin",
            AccountType::Staff => "Staff",
            AccountType::Faculty => "Faculty",
            AccountType::IT => "IT",
        }
    }

    pub fn all() -> [AccountType; 4] {
        [
            AccountType::Admin,
            AccountType::Staff,
            AccountType::Faculty,
            AccountType::IT,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|t| t.as_str()).collect()
    }

    /// Permissions a freshly added account of this type starts with.
    pub fn default_permissions(&self) -> PermissionSet {
        match self {
            AccountType::Admin => PermissionSet::All,
            AccountType::Staff => PermissionSet::from_tags([
                "view_clients",
                "edit_clients",
                "view_consultants",
                "view_reports",
            ]),
            AccountType::Faculty => PermissionSet::from_tags(["view_consultants", "view_reports"]),
            AccountType::IT => {
                PermissionSet::from_tags(["view_logs", "manage_settings", "view_reports"])
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        vec![AccountStatus::Active.as_str(), AccountStatus::Inactive.as_str()]
    }
}

// ============================================================================
// Permissions
// ============================================================================

/// Either every capability (the `"all"` sentinel) or an explicit tag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionSet {
    All,
    Tags(BTreeSet<String>),
}

impl Default for PermissionSet {
    fn default() -> Self {
        PermissionSet::Tags(BTreeSet::new())
    }
}

impl PermissionSet {
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PermissionSet::Tags(tags.into_iter().map(Into::into).collect())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PermissionSet::All)
    }

    pub fn contains(&self, tag: &str) -> bool {
        match self {
            PermissionSet::All => true,
            PermissionSet::Tags(tags) => tags.contains(tag),
        }
    }

    /// Toggles the `all` sentinel. Dropping it keeps every known tag
    /// granted so the caller can revoke them one by one.
    pub fn set_all(&mut self, granted: bool) {
        *self = if granted {
            PermissionSet::All
        } else {
            PermissionSet::from_tags(PERMISSION_TAGS.iter().copied())
        };
    }

    /// Grants or revokes one tag. Revoking from `All` expands it to every
    /// known tag except the revoked one.
    pub fn set(&mut self, tag: &str, granted: bool) {
        if self.is_all() {
            if granted {
                return;
            }
            *self = PermissionSet::from_tags(PERMISSION_TAGS.iter().copied());
        }
        if let PermissionSet::Tags(tags) = self {
            if granted {
                tags.insert(tag.to_string());
            } else {
                tags.remove(tag);
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            PermissionSet::All => PERMISSIONS_ALL.to_string(),
            PermissionSet::Tags(tags) if tags.is_empty() => "none".to_string(),
            PermissionSet::Tags(tags) => tags.iter().cloned().collect::<Vec<_>>().join(", "),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// System account of a dashboard operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Free-form role label, e.g. "Program Director".
    pub role: String,
    pub status: AccountStatus,
    pub last_login: Option<NaiveDateTime>,
    pub permissions: PermissionSet,
    pub account_type: AccountType,
}

impl ListRecord for UserAccount {
    type Draft = UserAccountDraft;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            fields::NAME => Some(Cow::Borrowed(&self.name)),
            fields::EMAIL => Some(Cow::Borrowed(&self.email)),
            fields::ROLE => Some(Cow::Borrowed(&self.role)),
            fields::STATUS => Some(Cow::Borrowed(self.status.as_str())),
            fields::ACCOUNT_TYPE => Some(Cow::Borrowed(self.account_type.as_str())),
            fields::PERMISSIONS => Some(Cow::Owned(self.permissions.label())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccountDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub account_type: Option<AccountType>,
}

impl RecordDraft<UserAccount> for UserAccountDraft {
    fn validate(&self) -> Result<(), ListViewError> {
        require_non_empty(fields::NAME, &self.name)?;
        require_non_empty(fields::EMAIL, &self.email)?;
        match self.account_type {
            Some(_) => Ok(()),
            None => Err(ListViewError::MissingField(fields::ACCOUNT_TYPE)),
        }
    }

    fn build(self, id: RecordId, _today: NaiveDate) -> UserAccount {
        let account_type = self.account_type.unwrap_or(AccountType::Staff);
        let role = if self.role.trim().is_empty() {
            account_type.as_str().to_string()
        } else {
            self.role
        };
        UserAccount {
            id,
            name: self.name,
            email: self.email,
            role,
            status: AccountStatus::Active,
            last_login: None,
            permissions: account_type.default_permissions(),
            account_type,
        }
    }
}

pub fn list_config() -> ListViewConfig {
    ListViewConfig::new(&[fields::NAME, fields::EMAIL, fields::ROLE])
        .with_filter(fields::ACCOUNT_TYPE, "Account type", &AccountType::labels())
        .with_filter(fields::STATUS, "Status", &AccountStatus::labels())
        .with_page_sizes(STANDARD_PAGE_SIZES, 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::ymd;
    use crate::shared::list_view::{DialogState, ListEvent, ListViewState};
    use crate::system::users::mock::seed_users;

    #[test]
    fn test_revoking_from_all_expands_to_tags() {
        let mut perms = PermissionSet::All;
        assert!(perms.contains("manage_users"));
        perms.set("manage_users", false);
        assert!(!perms.is_all());
        assert!(!perms.contains("manage_users"));
        assert!(perms.contains("view_logs"));

        perms.set("manage_users", true);
        assert!(perms.contains("manage_users"));
        assert!(!perms.is_all(), "never promoted back to the sentinel");
    }

    #[test]
    fn test_dropping_all_keeps_known_tags() {
        let mut perms = PermissionSet::from_tags(["view_reports"]);
        perms.set_all(true);
        assert!(perms.is_all());

        perms.set_all(false);
        assert!(!perms.is_all());
        assert!(PERMISSION_TAGS.iter().all(|tag| perms.contains(tag)));
    }

    #[test]
    fn test_permission_labels() {
        assert_eq!(PermissionSet::All.label(), "all");
        assert_eq!(PermissionSet::default().label(), "none");
        assert_eq!(
            PermissionSet::from_tags(["view_reports", "view_clients"]).label(),
            "view_clients, view_reports"
        );
    }

    #[test]
    fn test_new_account_gets_type_defaults() {
        let draft = UserAccountDraft {
            name: "Kim Lee".into(),
            email: "klee@clinic.example".into(),
            role: String::new(),
            account_type: Some(AccountType::IT),
        };
        let account = draft.build(RecordId(7), ymd(2024, 6, 1));
        assert_eq!(account.role, "IT");
        assert_eq!(account.status, AccountStatus::Active);
        assert!(account.last_login.is_none());
        assert!(account.permissions.contains("view_logs"));
        assert!(!account.permissions.contains("manage_users"));
    }

    #[test]
    fn test_draft_requires_account_type() {
        let draft = UserAccountDraft {
            name: "Kim Lee".into(),
            email: "klee@clinic.example".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ListViewError::MissingField(fields::ACCOUNT_TYPE))
        );
    }

    #[test]
    fn test_permissions_dialog_updates_record() {
        let today = ymd(2024, 6, 1);
        let state = ListViewState::new(list_config(), seed_users());
        let state = state.apply(ListEvent::OpenPermissions(RecordId(2)), today).unwrap();

        let mut edited = match &state.dialog {
            DialogState::PermissionsOpen(target) => target.clone(),
            other => panic!("unexpected dialog {other:?}"),
        };
        edited.permissions.set("view_logs", true);

        let state = state.apply(ListEvent::ConfirmUpdate(edited), today).unwrap();
        let updated = state.store.get(RecordId(2)).unwrap();
        assert!(updated.permissions.contains("view_logs"));
        assert_eq!(state.dialog, DialogState::Closed);
    }

    #[test]
    fn test_account_type_filter() {
        let state = ListViewState::new(list_config(), seed_users())
            .apply(
                ListEvent::SetFilter {
                    field: fields::ACCOUNT_TYPE.into(),
                    value: "Faculty".into(),
                },
                ymd(2024, 6, 1),
            )
            .unwrap();
        let page = state.view();
        assert!(page.total_count > 0);
        assert!(page.items.iter().all(|u| u.account_type == AccountType::Faculty));
    }

    #[test]
    fn test_permission_set_serializes_sentinel_as_all() {
        assert_eq!(serde_json::to_string(&PermissionSet::All).unwrap(), r#""all""#);
    }
}
