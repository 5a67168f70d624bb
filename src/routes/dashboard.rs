use axum::extract::State;
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::contacts::ContactFilters;
use crate::error::AppError;
use crate::pipeline::stats::{self, DashboardStats};
use crate::state::SharedState;

/// Pipeline totals, derived fresh from the tenant's contact list on every
/// request.
pub async fn stats(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<DashboardStats>, AppError> {
    let contacts =
        db::contacts::list(&state.pool, auth.tenant_id(), &ContactFilters::default()).await?;
    let contacts: Vec<_> = contacts.into_iter().map(|c| c.contact).collect();
    Ok(Json(stats::compute(&contacts)))
}
