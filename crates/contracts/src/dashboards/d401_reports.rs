//! Data shaping for the reports page. Series are rendered as plain bar charts
//! on the frontend, so every series here is a list of labelled counts.

use crate::domain::a001_client::{Client, ClientStatus, RiskLevel, BUSINESS_TYPES};
use crate::domain::a002_consultant::Consultant;
use crate::system::activity_log::{ActivityLogEntry, Severity, LOG_CATEGORIES};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(title: impl Into<String>, points: Vec<ChartPoint>) -> Self {
        Self {
            title: title.into(),
            points,
        }
    }

    pub fn max_value(&self) -> u32 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Bar length in percent of the largest bar.
    pub fn share(&self, point: &ChartPoint) -> f64 {
        match self.max_value() {
            0 => 0.0,
            max => f64::from(point.value) * 100.0 / f64::from(max),
        }
    }
}

/// Counts in `order`, followed by any labels not in `order` as first seen.
fn count_labels<'a>(
    order: &[&str],
    labels: impl Iterator<Item = &'a str>,
) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = order.iter().map(|l| ChartPoint::new(*l, 0)).collect();
    for label in labels {
        match points.iter_mut().find(|p| p.label == label) {
            Some(point) => point.value += 1,
            None => points.push(ChartPoint::new(label, 1)),
        }
    }
    points
}

// ============================================================================
// Clients
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub series: ChartSeries,
    /// Clients with the "not assessed" sentinel, kept out of the bands.
    pub unassessed: u32,
}

pub fn score_distribution(clients: &[Client]) -> ScoreDistribution {
    let bands = [
        (RiskLevel::Critical, "Critical (<50)"),
        (RiskLevel::High, "High (50-69)"),
        (RiskLevel::Moderate, "Moderate (70-84)"),
        (RiskLevel::Low, "Low (85+)"),
    ];
    let mut counts = [0u32; 4];
    let mut unassessed = 0;
    for client in clients {
        match client.security_score.risk_level() {
            Some(level) => {
                if let Some(i) = bands.iter().position(|(l, _)| *l == level) {
                    counts[i] += 1;
                }
            }
            None => unassessed += 1,
        }
    }
    let points = bands
        .iter()
        .zip(counts)
        .map(|((_, label), value)| ChartPoint::new(*label, value))
        .collect();
    ScoreDistribution {
        series: ChartSeries::new("Security score distribution", points),
        unassessed,
    }
}

pub fn clients_by_business_type(clients: &[Client]) -> ChartSeries {
    ChartSeries::new(
        "Clients by business type",
        count_labels(BUSINESS_TYPES, clients.iter().map(|c| c.business_type.as_str())),
    )
}

pub fn clients_by_status(clients: &[Client]) -> ChartSeries {
    ChartSeries::new(
        "Clients by status",
        count_labels(
            &ClientStatus::labels(),
            clients.iter().map(|c| c.status.as_str()),
        ),
    )
}

// ============================================================================
// Activity
// ============================================================================

pub fn activity_by_category(logs: &[ActivityLogEntry]) -> ChartSeries {
    ChartSeries::new(
        "Activity by category",
        count_labels(LOG_CATEGORIES, logs.iter().map(|l| l.category.as_str())),
    )
}

pub fn activity_by_severity(logs: &[ActivityLogEntry]) -> ChartSeries {
    let points = Severity::all()
        .iter()
        .map(|s| {
            let count = logs.iter().filter(|l| l.severity == *s).count();
            ChartPoint::new(s.label(), count as u32)
        })
        .collect();
    ChartSeries::new("Activity by severity", points)
}

/// One point per calendar day that has entries, oldest first.
pub fn activity_per_day(logs: &[ActivityLogEntry]) -> ChartSeries {
    let mut days: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for log in logs {
        *days.entry(log.timestamp.date()).or_default() += 1;
    }
    let points = days
        .into_iter()
        .map(|(day, count)| ChartPoint::new(day.format("%b %d").to_string(), count))
        .collect();
    ChartSeries::new("Activity per day", points)
}

// ============================================================================
// Consultants
// ============================================================================

/// Assigned clients per consultant, busiest first. Ties keep seed order.
pub fn consultant_workload(consultants: &[Consultant]) -> ChartSeries {
    let mut points: Vec<ChartPoint> = consultants
        .iter()
        .map(|c| ChartPoint::new(c.name.clone(), c.client_count))
        .collect();
    points.sort_by(|a, b| b.value.cmp(&a.value));
    ChartSeries::new("Consultant workload", points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::mock::seed_clients;
    use crate::domain::a002_consultant::mock::seed_consultants;
    use crate::system::activity_log::mock::seed_activity_log;

    fn values(series: &ChartSeries) -> Vec<u32> {
        series.points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn test_score_distribution_skips_unassessed() {
        let dist = score_distribution(&seed_clients());
        assert_eq!(values(&dist.series), vec![0, 0, 1, 2]);
        assert_eq!(dist.unassessed, 2);
        assert_eq!(dist.series.total() + dist.unassessed, 5);
    }

    #[test]
    fn test_clients_by_business_type_keeps_known_order() {
        let mut clients = seed_clients();
        clients[0].business_type = "Education".into();
        let series = clients_by_business_type(&clients);
        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Retail",
                "Healthcare",
                "Restaurant",
                "Professional Services",
                "Non-profit",
                "Education"
            ]
        );
        assert_eq!(values(&series), vec![1, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_clients_by_status() {
        assert_eq!(values(&clients_by_status(&seed_clients())), vec![3, 1, 1]);
    }

    #[test]
    fn test_activity_series() {
        let logs = seed_activity_log();
        assert_eq!(values(&activity_by_severity(&logs)), vec![7, 3, 2]);
        assert_eq!(activity_by_category(&logs).total(), 12);

        let per_day = activity_per_day(&logs);
        let labels: Vec<&str> = per_day.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 10", "Jan 11", "Jan 12", "Jan 13", "Jan 14", "Jan 15"]);
        assert_eq!(values(&per_day), vec![1, 1, 1, 2, 4, 3]);
    }

    #[test]
    fn test_consultant_workload_sorted() {
        let series = consultant_workload(&seed_consultants());
        assert_eq!(series.points[0].label, "Dr. Helen Park");
        assert_eq!(series.max_value(), 4);
        assert!(series.points.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_share_is_relative_to_max() {
        let series = ChartSeries::new("s", vec![ChartPoint::new("a", 2), ChartPoint::new("b", 4)]);
        assert_eq!(series.share(&series.points[0]), 50.0);
        let empty = ChartSeries::new("e", vec![ChartPoint::new("a", 0)]);
        assert_eq!(empty.share(&empty.points[0]), 0.0);
    }
}
