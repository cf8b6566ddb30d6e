use super::aggregate::{AccountStatus, AccountType, PermissionSet, UserAccount};
use crate::shared::dates::ymd_hms;
use crate::shared::list_view::RecordId;

pub fn seed_users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: RecordId(1),
            name: "Dana Whitfield".into(),
            email: "dwhitfield@clinic.example".into(),
            role: "Program Director".into(),
            status: AccountStatus::Active,
            last_login: Some(ymd_hms(2024, 1, 15, 9, 42, 0)),
            permissions: PermissionSet::All,
            account_type: AccountType::Admin,
        },
        UserAccount {
            id: RecordId(2),
            name: "Marcus Green".into(),
            email: "mgreen@clinic.example".into(),
            role: "Client Coordinator".into(),
            status: AccountStatus::Active,
            last_login: Some(ymd_hms(2024, 1, 15, 8, 5, 0)),
            permissions: PermissionSet::from_tags(["view_clients", "edit_clients", "view_reports"]),
            account_type: AccountType::Staff,
        },
        UserAccount {
            id: RecordId(3),
            name: "Dr. Helen Park".into(),
            email: "hpark@university.example".into(),
            role: "Faculty Advisor".into(),
            status: AccountStatus::Active,
            last_login: Some(ymd_hms(2024, 1, 12, 14, 20, 0)),
            permissions: PermissionSet::from_tags(["view_consultants", "view_reports"]),
            account_type: AccountType::Faculty,
        },
        UserAccount {
            id: RecordId(4),
            name: "Omar Siddiqui".into(),
            email: "osiddiqui@clinic.example".into(),
            role: "Systems Administrator".into(),
            status: AccountStatus::Active,
            last_login: Some(ymd_hms(2024, 1, 14, 22, 10, 0)),
            permissions: PermissionSet::from_tags(["view_logs", "manage_settings", "manage_users"]),
            account_type: AccountType::IT,
        },
        UserAccount {
            id: RecordId(5),
            name: "Linda Foster".into(),
            email: "lfoster@clinic.example".into(),
            role: "Office Assistant".into(),
            status: AccountStatus::Inactive,
            last_login: Some(ymd_hms(2023, 11, 30, 16, 45, 0)),
            permissions: PermissionSet::from_tags(["view_clients"]),
            account_type: AccountType::Staff,
        },
        UserAccount {
            id: RecordId(6),
            name: "Dr. Rafael Ortiz".into(),
            email: "rortiz@university.example".into(),
            role: "Faculty Advisor".into(),
            status: AccountStatus::Inactive,
            last_login: None,
            permissions: PermissionSet::from_tags(["view_consultants"]),
            account_type: AccountType::Faculty,
        },
    ]
}
