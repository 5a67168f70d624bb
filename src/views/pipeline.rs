use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::contacts::ContactFilters;
use crate::error::AppError;
use crate::pipeline::stats::fmt_usd;
use crate::pipeline::Stage;
use crate::state::SharedState;
use crate::views::{shell, Shell};

#[derive(Template)]
#[template(path = "pipeline/board.html")]
#[allow(dead_code)]
struct BoardTemplate {
    shell: Shell,
    columns: Vec<BoardColumn>,
}

#[allow(dead_code)]
struct BoardColumn {
    label: &'static str,
    color: &'static str,
    count: usize,
    total: String,
    cards: Vec<BoardCard>,
}

#[allow(dead_code)]
struct BoardCard {
    id: String,
    name: String,
    company_name: String,
    deal_value: String,
}

/// Kanban-style view: one column per stage, in pipeline order, grouping
/// the already-loaded contact list.
pub async fn board(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let shell = shell(&state, &auth).await?;

    let contacts =
        db::contacts::list(&state.pool, auth.tenant_id(), &ContactFilters::default()).await?;

    let columns = Stage::ALL
        .iter()
        .map(|&stage| {
            let in_stage: Vec<_> = contacts
                .iter()
                .filter(|c| c.contact.stage == stage)
                .collect();
            let total: f64 = in_stage.iter().map(|c| c.contact.deal_value).sum();

            BoardColumn {
                label: stage.label(),
                color: stage.color(),
                count: in_stage.len(),
                total: if total > 0.0 {
                    fmt_usd(total)
                } else {
                    String::new()
                },
                cards: in_stage
                    .into_iter()
                    .map(|c| BoardCard {
                        id: c.contact.id.to_string(),
                        name: c.contact.name.clone(),
                        company_name: c.contact.company_name.clone(),
                        deal_value: if c.contact.deal_value > 0.0 {
                            fmt_usd(c.contact.deal_value)
                        } else {
                            String::new()
                        },
                    })
                    .collect(),
            }
        })
        .collect();

    let template = BoardTemplate { shell, columns };
    Ok(Html(template.render().unwrap_or_default()))
}
