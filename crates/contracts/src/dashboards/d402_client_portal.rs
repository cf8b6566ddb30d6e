use crate::domain::a001_client::{Client, ClientStatus, RiskLevel, SecurityScore};
use crate::shared::list_view::RecordId;
use serde::{Deserialize, Serialize};

/// Declared destinations of the client portal. Not wired to a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        label: "Request assessment",
        path: "/assessment",
        icon: "clipboard",
    },
    QuickLink {
        label: "Security monitoring",
        path: "/monitoring",
        icon: "shield",
    },
    QuickLink {
        label: "View reports",
        path: "/reports",
        icon: "bar-chart",
    },
];

fn recommendations_for(risk: Option<RiskLevel>) -> Vec<&'static str> {
    match risk {
        None => vec![
            "Schedule an initial security assessment",
            "Prepare an inventory of devices and accounts",
        ],
        Some(RiskLevel::Critical) => vec![
            "Enable multi-factor authentication on all accounts",
            "Patch operating systems and point-of-sale software",
            "Set up offsite backups and test a restore",
            "Book a follow-up review within 30 days",
        ],
        Some(RiskLevel::High) => vec![
            "Enable multi-factor authentication on email",
            "Replace shared passwords with a password manager",
            "Review firewall and Wi-Fi configuration",
        ],
        Some(RiskLevel::Moderate) => vec![
            "Run phishing awareness training for staff",
            "Review user access every quarter",
        ],
        Some(RiskLevel::Low) => vec!["Keep the annual reassessment on schedule"],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPortalSummary {
    pub client_id: RecordId,
    pub client_name: String,
    pub score: SecurityScore,
    pub risk: Option<RiskLevel>,
    pub status: ClientStatus,
    pub consultant_count: u32,
    pub recommendations: Vec<String>,
}

impl ClientPortalSummary {
    pub fn for_client(client: &Client) -> Self {
        let risk = client.security_score.risk_level();
        Self {
            client_id: client.id,
            client_name: client.name.clone(),
            score: client.security_score,
            risk,
            status: client.status,
            consultant_count: client.consultant_count,
            recommendations: recommendations_for(risk)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Gauge fill, 0 for unassessed clients.
    pub fn gauge_percent(&self) -> u8 {
        self.score.value().unwrap_or(0)
    }

    pub fn risk_label(&self) -> &'static str {
        self.risk.map(|r| r.as_str()).unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::mock::seed_clients;

    #[test]
    fn test_summary_for_assessed_client() {
        let clients = seed_clients();
        let summary = ClientPortalSummary::for_client(&clients[1]);
        assert_eq!(summary.client_name, "Main Street Books");
        assert_eq!(summary.risk, Some(RiskLevel::Moderate));
        assert_eq!(summary.gauge_percent(), 72);
        assert_eq!(summary.recommendations.len(), 2);
    }

    #[test]
    fn test_summary_for_unassessed_client() {
        let clients = seed_clients();
        let summary = ClientPortalSummary::for_client(&clients[2]);
        assert_eq!(summary.risk, None);
        assert_eq!(summary.risk_label(), "Unknown");
        assert_eq!(summary.gauge_percent(), 0);
        assert_eq!(
            summary.recommendations[0],
            "Schedule an initial security assessment"
        );
    }

    #[test]
    fn test_quick_links_paths() {
        let paths: Vec<&str> = QUICK_LINKS.iter().map(|l| l.path).collect();
        assert_eq!(paths, vec!["/assessment", "/monitoring", "/reports"]);
    }
}
