//! Dashboard aggregates. These are pure functions over the tenant's
//! contact list, recomputed on every request — the dataset is a single
//! team's pipeline, never large enough to warrant caching.

use serde::Serialize;

use crate::models::Contact;
use crate::pipeline::Stage;

#[derive(Debug, Clone, Serialize)]
pub struct StageSummary {
    pub stage: Stage,
    pub count: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub lead_count: i64,
    pub total_pipeline: f64,
    pub closed_won_count: i64,
    pub closed_won_value: f64,
    pub hot_leads: i64,
    /// Percentage of all leads that closed won, rounded. 0 for an empty list.
    pub win_rate: i64,
    /// One entry per stage, in pipeline order, including empty stages.
    pub stages: Vec<StageSummary>,
}

pub fn compute(contacts: &[Contact]) -> DashboardStats {
    let total_pipeline: f64 = contacts.iter().map(|c| c.deal_value).sum();
    let won: Vec<&Contact> = contacts
        .iter()
        .filter(|c| c.stage == Stage::ClosedWon)
        .collect();
    let closed_won_value: f64 = won.iter().map(|c| c.deal_value).sum();
    let hot_leads = contacts.iter().filter(|c| c.stage.is_hot()).count() as i64;

    let win_rate = if contacts.is_empty() {
        0
    } else {
        (won.len() as f64 / contacts.len() as f64 * 100.0).round() as i64
    };

    let stages = Stage::ALL
        .iter()
        .map(|&stage| {
            let in_stage = contacts.iter().filter(|c| c.stage == stage);
            StageSummary {
                stage,
                count: in_stage.clone().count() as i64,
                value: in_stage.map(|c| c.deal_value).sum(),
            }
        })
        .collect();

    DashboardStats {
        lead_count: contacts.len() as i64,
        total_pipeline,
        closed_won_count: won.len() as i64,
        closed_won_value,
        hot_leads,
        win_rate,
        stages,
    }
}

/// Dollar display format: whole dollars with thousands separators.
pub fn fmt_usd(value: f64) -> String {
    let whole = value.trunc().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn contact(stage: Stage, deal_value: f64) -> Contact {
        Contact {
            id: Uuid::now_v7(),
            tenant_id: Uuid::now_v7(),
            owner_id: None,
            name: "Test Lead".to_string(),
            email: String::new(),
            phone: String::new(),
            company_name: String::new(),
            title: String::new(),
            industry: String::new(),
            source: String::new(),
            stage,
            deal_value,
            tags: Vec::new(),
            notes: String::new(),
            last_contact: Utc::now().date_naive(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_pipeline_has_zero_win_rate() {
        let stats = compute(&[]);
        assert_eq!(stats.lead_count, 0);
        assert_eq!(stats.win_rate, 0);
        assert_eq!(stats.total_pipeline, 0.0);
        assert_eq!(stats.stages.len(), Stage::ALL.len());
    }

    #[test]
    fn win_rate_is_rounded_percentage() {
        let contacts = vec![
            contact(Stage::ClosedWon, 100.0),
            contact(Stage::NewLead, 0.0),
            contact(Stage::Contacted, 0.0),
        ];
        // 1/3 = 33.33..% rounds to 33
        assert_eq!(compute(&contacts).win_rate, 33);

        let contacts = vec![
            contact(Stage::ClosedWon, 0.0),
            contact(Stage::ClosedWon, 0.0),
            contact(Stage::ClosedLost, 0.0),
        ];
        // 2/3 = 66.66..% rounds to 67
        assert_eq!(compute(&contacts).win_rate, 67);
    }

    #[test]
    fn totals_sum_deal_values() {
        let contacts = vec![
            contact(Stage::Proposal, 25_000.0),
            contact(Stage::Negotiation, 10_000.0),
            contact(Stage::ClosedWon, 40_000.0),
        ];
        let stats = compute(&contacts);
        assert_eq!(stats.total_pipeline, 75_000.0);
        assert_eq!(stats.closed_won_value, 40_000.0);
        assert_eq!(stats.closed_won_count, 1);
        assert_eq!(stats.hot_leads, 2);
    }

    #[test]
    fn stage_breakdown_keeps_pipeline_order_and_empty_stages() {
        let contacts = vec![contact(Stage::Qualified, 5_000.0)];
        let stats = compute(&contacts);
        let qualified = &stats.stages[Stage::Qualified.position()];
        assert_eq!(qualified.count, 1);
        assert_eq!(qualified.value, 5_000.0);
        assert!(stats.stages.iter().filter(|s| s.count == 0).count() == 6);
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(fmt_usd(0.0), "$0");
        assert_eq!(fmt_usd(950.0), "$950");
        assert_eq!(fmt_usd(25_000.0), "$25,000");
        assert_eq!(fmt_usd(1_234_567.0), "$1,234,567");
        assert_eq!(fmt_usd(25_000.75), "$25,000");
    }
}
