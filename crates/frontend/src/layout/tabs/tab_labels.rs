//! Tab labels: the single source of tab titles.

/// Tab opened when the URL has no `?active=`.
pub const DEFAULT_TAB: &str = "d400_overview";

/// Readable tab title for a key; empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_overview" => "Overview",
        "d401_reports" => "Reports & Analytics",
        "d402_client_portal" => "Client Dashboard",

        // ── Records ───────────────────────────────────────────────────────
        "a001_client" => "Clients",
        "a002_consultant" => "Consultants",

        // ── System ────────────────────────────────────────────────────────
        "sys_users" => "User Accounts",
        "sys_activity_log" => "Activity Log",
        "sys_security_settings" => "Security Settings",

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a001_client"), "Clients");
        assert_eq!(tab_label_for_key(DEFAULT_TAB), "Overview");
        assert_eq!(tab_label_for_key("x_unknown"), "");
    }
}
