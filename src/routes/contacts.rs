use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::contacts::{ContactFilters, NewContact};
use crate::error::AppError;
use crate::middleware::activity_log;
use crate::models::{ActivityKind, Contact, ContactWithOwner};
use crate::pipeline::{fields, Stage};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub stage: Option<Stage>,
    pub owner: Option<Uuid>,
    pub search: Option<String>,
}

/// Contact form payload. Deal value and tags arrive in whatever shape the
/// form submitted them — numeric strings, comma-delimited tag lists — and
/// are normalized before they touch the store.
#[derive(Deserialize)]
pub struct ContactPayload {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub deal_value: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Option<serde_json::Value>,
    #[serde(default)]
    pub notes: String,
}

impl ContactPayload {
    fn normalize(&self) -> Result<NewContact, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        Ok(NewContact {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            title: self.title.trim().to_string(),
            industry: self.industry.trim().to_string(),
            source: self.source.trim().to_string(),
            stage: self.stage.unwrap_or(Stage::NewLead),
            deal_value: fields::parse_deal_value(self.deal_value.as_ref()),
            tags: fields::parse_tags(self.tags.as_ref()),
            notes: self.notes.trim().to_string(),
            last_contact: None,
        })
    }
}

#[derive(Deserialize)]
pub struct StagePayload {
    pub stage: Stage,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ContactWithOwner>>, AppError> {
    let filters = ContactFilters {
        stage: query.stage,
        owner_id: query.owner,
        search: query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    };
    let contacts = db::contacts::list(&state.pool, auth.tenant_id(), &filters).await?;
    Ok(Json(contacts))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<ContactPayload>,
) -> Result<Json<Contact>, AppError> {
    let new = req.normalize()?;

    let contact = db::contacts::create(&state.pool, auth.tenant_id(), auth.user_id, &new).await?;

    activity_log::record(
        &state.pool,
        auth.tenant_id(),
        contact.id,
        auth.user_id,
        ActivityKind::Note,
        "Contact created",
    )
    .await;

    Ok(Json(contact))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactWithOwner>, AppError> {
    let contact = db::contacts::find_by_id(&state.pool, id, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;
    Ok(Json(contact))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ContactPayload>,
) -> Result<Json<Contact>, AppError> {
    let fields = req.normalize()?;

    let existing = db::contacts::find_by_id(&state.pool, id, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    let contact = db::contacts::update(&state.pool, id, auth.tenant_id(), &fields).await?;

    activity_log::record(
        &state.pool,
        auth.tenant_id(),
        contact.id,
        auth.user_id,
        ActivityKind::Note,
        "Contact updated",
    )
    .await;

    // An edit that moved the deal logs the transition as well.
    if existing.contact.stage != contact.stage {
        activity_log::record(
            &state.pool,
            auth.tenant_id(),
            contact.id,
            auth.user_id,
            ActivityKind::StageChange,
            &format!("Stage changed to {}", contact.stage),
        )
        .await;
    }

    Ok(Json(contact))
}

/// Stage move from the board or the detail stepper. Any stage can move to
/// any other; the pipeline order is advisory.
pub async fn change_stage(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StagePayload>,
) -> Result<Json<Contact>, AppError> {
    let contact = db::contacts::update_stage(&state.pool, id, auth.tenant_id(), req.stage)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Contact not found".to_string()),
            _ => AppError::Database(e),
        })?;

    activity_log::record(
        &state.pool,
        auth.tenant_id(),
        contact.id,
        auth.user_id,
        ActivityKind::StageChange,
        &format!("Stage changed to {}", contact.stage),
    )
    .await;

    Ok(Json(contact))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = db::contacts::delete(&state.pool, id, auth.tenant_id()).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Contact not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
