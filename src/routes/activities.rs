use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Activity, ActivityKind, ActivityWithAuthor};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct NotePayload {
    pub body: String,
    #[serde(default)]
    pub kind: Option<ActivityKind>,
}

#[derive(Deserialize)]
pub struct FeedQuery {
    pub contact_id: Option<Uuid>,
}

/// Manual timeline entry on a contact: a note, or a logged call/email.
/// Stage changes are appended by the stage endpoints and cannot be faked
/// through here.
pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(contact_id): Path<Uuid>,
    Json(req): Json<NotePayload>,
) -> Result<Json<Activity>, AppError> {
    let body = req.body.trim();
    if body.is_empty() {
        return Err(AppError::BadRequest("Note body is required".to_string()));
    }

    let kind = req.kind.unwrap_or(ActivityKind::Note);
    if kind == ActivityKind::StageChange {
        return Err(AppError::BadRequest(
            "Stage changes are logged automatically".to_string(),
        ));
    }

    // Verify the contact belongs to the caller's workspace.
    db::contacts::find_by_id(&state.pool, contact_id, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    let activity = db::activities::create(
        &state.pool,
        auth.tenant_id(),
        contact_id,
        auth.user_id,
        kind,
        body,
    )
    .await?;

    Ok(Json(activity))
}

pub async fn list_for_contact(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(contact_id): Path<Uuid>,
) -> Result<Json<Vec<ActivityWithAuthor>>, AppError> {
    db::contacts::find_by_id(&state.pool, contact_id, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    let activities = db::activities::list(&state.pool, auth.tenant_id(), Some(contact_id)).await?;
    Ok(Json(activities))
}

/// Workspace-wide feed, newest first, optionally narrowed to one contact.
pub async fn feed(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<ActivityWithAuthor>>, AppError> {
    let activities = db::activities::list(&state.pool, auth.tenant_id(), query.contact_id).await?;
    Ok(Json(activities))
}
