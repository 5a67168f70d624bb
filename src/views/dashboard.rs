use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::contacts::ContactFilters;
use crate::error::AppError;
use crate::pipeline::stats::{self, fmt_usd};
use crate::state::SharedState;
use crate::views::{shell, Shell};

#[derive(Template)]
#[template(path = "dashboard/index.html")]
#[allow(dead_code)]
struct DashboardTemplate {
    shell: Shell,
    total_pipeline: String,
    lead_count: i64,
    closed_won_value: String,
    closed_won_count: i64,
    hot_leads: i64,
    win_rate: i64,
    stages: Vec<StageRow>,
    recent: Vec<RecentRow>,
}

#[allow(dead_code)]
struct StageRow {
    label: &'static str,
    color: &'static str,
    count: i64,
    value: String,
    /// Bar width relative to the fullest stage.
    pct: i64,
}

#[allow(dead_code)]
struct RecentRow {
    id: String,
    name: String,
    company_name: String,
    stage_label: &'static str,
    stage_color: &'static str,
    deal_value: String,
}

pub async fn index(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let shell = shell(&state, &auth).await?;

    let contacts =
        db::contacts::list(&state.pool, auth.tenant_id(), &ContactFilters::default()).await?;
    let contacts: Vec<_> = contacts.into_iter().map(|c| c.contact).collect();
    let stats = stats::compute(&contacts);

    let max_count = stats.stages.iter().map(|s| s.count).max().unwrap_or(0).max(1);
    let stages = stats
        .stages
        .iter()
        .map(|s| StageRow {
            label: s.stage.label(),
            color: s.stage.color(),
            count: s.count,
            value: if s.value > 0.0 {
                fmt_usd(s.value)
            } else {
                "—".to_string()
            },
            pct: s.count * 100 / max_count,
        })
        .collect();

    // List comes back newest first; the feed shows the top six.
    let recent = contacts
        .iter()
        .take(6)
        .map(|c| RecentRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            company_name: c.company_name.clone(),
            stage_label: c.stage.label(),
            stage_color: c.stage.color(),
            deal_value: if c.deal_value > 0.0 {
                fmt_usd(c.deal_value)
            } else {
                String::new()
            },
        })
        .collect();

    let template = DashboardTemplate {
        shell,
        total_pipeline: fmt_usd(stats.total_pipeline),
        lead_count: stats.lead_count,
        closed_won_value: fmt_usd(stats.closed_won_value),
        closed_won_count: stats.closed_won_count,
        hot_leads: stats.hot_leads,
        win_rate: stats.win_rate,
        stages,
        recent,
    };
    Ok(Html(template.render().unwrap_or_default()))
}
