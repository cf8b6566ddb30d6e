use super::aggregate::{ActivityLogEntry, Severity};
use crate::shared::dates::ymd_hms;
use crate::shared::list_view::RecordId;
use chrono::NaiveDateTime;

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u32,
    timestamp: NaiveDateTime,
    user: &str,
    action: &str,
    category: &str,
    ip_address: &str,
    severity: Severity,
    details: &str,
) -> ActivityLogEntry {
    ActivityLogEntry {
        id: RecordId(id),
        timestamp,
        user: user.into(),
        action: action.into(),
        category: category.into(),
        ip_address: ip_address.into(),
        severity,
        details: details.into(),
    }
}

/// Twelve sample entries, deliberately not in timestamp order.
pub fn seed_activity_log() -> Vec<ActivityLogEntry> {
    use Severity::*;

    vec![
        entry(
            1,
            ymd_hms(2024, 1, 15, 9, 42, 0),
            "Dana Whitfield",
            "Signed in",
            "Authentication",
            "192.168.1.10",
            Info,
            "Successful sign-in from the office network",
        ),
        entry(
            2,
            ymd_hms(2024, 1, 15, 8, 5, 0),
            "Marcus Green",
            "Signed in",
            "Authentication",
            "192.168.1.24",
            Info,
            "Successful sign-in from the office network",
        ),
        entry(
            3,
            ymd_hms(2024, 1, 14, 23, 58, 0),
            "unknown",
            "Failed sign-in",
            "Security",
            "203.0.113.45",
            Warning,
            "Invalid password for account dwhitfield",
        ),
        entry(
            4,
            ymd_hms(2024, 1, 14, 17, 30, 0),
            "Marcus Green",
            "Updated client",
            "Client Management",
            "192.168.1.24",
            Info,
            "Changed contact phone for Main Street Books",
        ),
        entry(
            5,
            ymd_hms(2024, 1, 14, 22, 10, 0),
            "Omar Siddiqui",
            "Backup delayed",
            "System",
            "10.0.0.5",
            Warning,
            "Nightly backup started 40 minutes late",
        ),
        entry(
            6,
            ymd_hms(2024, 1, 13, 11, 0, 0),
            "Alex Rivera",
            "Completed assessment",
            "Assessment",
            "192.168.1.52",
            Info,
            "Sunrise Family Dental scored 85",
        ),
        entry(
            7,
            ymd_hms(2024, 1, 14, 9, 12, 0),
            "system",
            "Report generation failed",
            "Reports",
            "10.0.0.2",
            Error,
            "Quarterly summary export timed out",
        ),
        entry(
            8,
            ymd_hms(2024, 1, 12, 14, 20, 0),
            "Dr. Helen Park",
            "Exported report",
            "Reports",
            "192.168.1.77",
            Info,
            "Downloaded consultant workload report",
        ),
        entry(
            9,
            ymd_hms(2024, 1, 15, 16, 40, 0),
            "Omar Siddiqui",
            "Firewall sync failed",
            "Security",
            "10.0.0.5",
            Error,
            "Rule set push to edge firewall was rejected",
        ),
        entry(
            10,
            ymd_hms(2024, 1, 11, 10, 15, 0),
            "Dana Whitfield",
            "Added client",
            "Client Management",
            "192.168.1.10",
            Info,
            "Registered Harbor Grill for intake review",
        ),
        entry(
            11,
            ymd_hms(2024, 1, 13, 3, 22, 0),
            "unknown",
            "Repeated failed sign-ins",
            "Security",
            "198.51.100.7",
            Warning,
            "Five failed attempts within two minutes",
        ),
        entry(
            12,
            ymd_hms(2024, 1, 10, 13, 5, 0),
            "Dana Whitfield",
            "Created account",
            "User Management",
            "192.168.1.10",
            Info,
            "Added staff account for Marcus Green",
        ),
    ]
}
