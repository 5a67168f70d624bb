use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::views::DEFAULT_ACCENT;

#[derive(Template)]
#[template(path = "auth/login.html")]
#[allow(dead_code)]
struct LoginTemplate {
    accent: String,
}

#[derive(Template)]
#[template(path = "auth/register.html")]
#[allow(dead_code)]
struct RegisterTemplate {
    accent: String,
    /// Set when the visitor followed an invite link; they join this
    /// workspace instead of creating one.
    invite: String,
    invite_workspace: String,
}

#[derive(Deserialize)]
pub struct RegisterQuery {
    pub invite: Option<Uuid>,
}

pub async fn login_page() -> impl IntoResponse {
    let template = LoginTemplate {
        accent: DEFAULT_ACCENT.to_string(),
    };
    Html(template.render().unwrap_or_default())
}

pub async fn register_page(
    State(state): State<SharedState>,
    Query(query): Query<RegisterQuery>,
) -> Result<impl IntoResponse, AppError> {
    // A dead invite link falls back to the plain sign-up form.
    let invited = match query.invite {
        Some(id) => db::tenants::find_by_id(&state.pool, id).await?,
        None => None,
    };

    let template = RegisterTemplate {
        accent: DEFAULT_ACCENT.to_string(),
        invite: invited.as_ref().map(|t| t.id.to_string()).unwrap_or_default(),
        invite_workspace: invited.map(|t| t.name).unwrap_or_default(),
    };
    Ok(Html(template.render().unwrap_or_default()))
}
