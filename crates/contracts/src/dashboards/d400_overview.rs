use crate::domain::a001_client::{Client, ClientStatus};
use crate::domain::a002_consultant::{Consultant, ConsultantStatus};
use crate::system::activity_log::{ActivityLogEntry, Severity};
use serde::{Deserialize, Serialize};

/// Headline numbers of the admin overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_clients: usize,
    pub active_clients: usize,
    /// Mean over assessed clients only. `None` when nobody is assessed yet.
    pub average_security_score: Option<f64>,
    pub pending_reviews: usize,
    pub active_consultants: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl OverviewStats {
    pub fn compute(
        clients: &[Client],
        consultants: &[Consultant],
        logs: &[ActivityLogEntry],
    ) -> Self {
        let scores: Vec<f64> = clients
            .iter()
            .filter_map(|c| c.security_score.value())
            .map(f64::from)
            .collect();
        let average_security_score =
            (!scores.is_empty()).then(|| scores.iter().sum::<f64>() / scores.len() as f64);

        Self {
            total_clients: clients.len(),
            active_clients: clients
                .iter()
                .filter(|c| c.status == ClientStatus::Active)
                .count(),
            average_security_score,
            pending_reviews: clients
                .iter()
                .filter(|c| c.status != ClientStatus::Active)
                .count(),
            active_consultants: consultants
                .iter()
                .filter(|c| c.status == ConsultantStatus::Active)
                .count(),
            warnings: logs.iter().filter(|l| l.severity == Severity::Warning).count(),
            errors: logs.iter().filter(|l| l.severity == Severity::Error).count(),
        }
    }

    pub fn problem_count(&self) -> usize {
        self.warnings + self.errors
    }
}

/// The `limit` newest log entries, newest first.
pub fn recent_activity(logs: &[ActivityLogEntry], limit: usize) -> Vec<ActivityLogEntry> {
    let mut sorted: Vec<&ActivityLogEntry> = logs.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::mock::seed_clients;
    use crate::domain::a001_client::SecurityScore;
    use crate::domain::a002_consultant::mock::seed_consultants;
    use crate::system::activity_log::mock::seed_activity_log;

    #[test]
    fn test_overview_on_seed_data() {
        let stats = OverviewStats::compute(
            &seed_clients(),
            &seed_consultants(),
            &seed_activity_log(),
        );
        assert_eq!(stats.total_clients, 5);
        assert_eq!(stats.active_clients, 3);
        assert_eq!(stats.pending_reviews, 2);
        assert_eq!(stats.active_consultants, 5);
        assert_eq!(stats.warnings, 3);
        assert_eq!(stats.errors, 2);
        assert_eq!(stats.problem_count(), 5);
        let avg = stats.average_security_score.unwrap();
        assert!((avg - (85.0 + 72.0 + 91.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_ignores_unassessed() {
        let mut clients = seed_clients();
        for c in clients.iter_mut() {
            c.security_score = SecurityScore::UNASSESSED;
        }
        let stats = OverviewStats::compute(&clients, &[], &[]);
        assert_eq!(stats.average_security_score, None);

        clients[0].security_score = SecurityScore::new(60);
        let stats = OverviewStats::compute(&clients, &[], &[]);
        assert_eq!(stats.average_security_score, Some(60.0));
    }

    #[test]
    fn test_recent_activity_newest_first() {
        let ids: Vec<u32> = recent_activity(&seed_activity_log(), 5)
            .iter()
            .map(|e| e.id.value())
            .collect();
        assert_eq!(ids, vec![9, 1, 2, 3, 5]);
        assert!(recent_activity(&[], 5).is_empty());
    }
}
