use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::{Role, Tenant, User};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct UpdateTenant {
    pub name: String,
    /// Branding fields are free-form; a bad color or dead logo URL only
    /// degrades the UI, so nothing here is validated.
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Deserialize)]
pub struct AddMember {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Option<Role>,
}

#[derive(Deserialize)]
pub struct UpdateMemberRole {
    pub role: Role,
}

pub async fn get_tenant(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Tenant>, AppError> {
    let tenant = db::tenants::find_by_id(&state.pool, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Workspace not found".to_string()))?;
    Ok(Json(tenant))
}

pub async fn update_tenant(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<UpdateTenant>,
) -> Result<Json<Tenant>, AppError> {
    auth.require_admin()?;

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Workspace name is required".to_string(),
        ));
    }

    let current = db::tenants::find_by_id(&state.pool, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Workspace not found".to_string()))?;

    let tenant = db::tenants::update_branding(
        &state.pool,
        auth.tenant_id(),
        req.name.trim(),
        req.primary_color.as_deref().unwrap_or(&current.primary_color),
        req.logo_url.as_deref().unwrap_or(&current.logo_url),
    )
    .await?;

    Ok(Json(tenant))
}

pub async fn list_members(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<User>>, AppError> {
    let members = db::users::list_by_tenant(&state.pool, auth.tenant_id()).await?;
    Ok(Json(members))
}

pub async fn add_member(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<AddMember>,
) -> Result<Json<User>, AppError> {
    auth.require_admin()?;

    if req.email.is_empty() || req.name.is_empty() {
        return Err(AppError::BadRequest(
            "Email and name are required".to_string(),
        ));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;
    let role = req.role.unwrap_or(Role::Member);

    let user = db::users::create(
        &state.pool,
        auth.tenant_id(),
        &req.email,
        &pw_hash,
        &req.name,
        role,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("A user with this email already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(Json(user))
}

pub async fn update_member_role(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMemberRole>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    // Verify member belongs to the caller's workspace.
    let user = db::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if user.tenant_id != auth.tenant_id() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    if id == auth.user_id {
        return Err(AppError::BadRequest(
            "Cannot change your own role".to_string(),
        ));
    }

    db::users::update_role(&state.pool, id, req.role).await?;

    Ok(Json(serde_json::json!({ "message": "Role updated" })))
}

pub async fn remove_member(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let user = db::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if user.tenant_id != auth.tenant_id() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    if id == auth.user_id {
        return Err(AppError::BadRequest("Cannot remove yourself".to_string()));
    }

    // Their contacts stay with the workspace, unowned until reassigned.
    db::users::delete(&state.pool, id).await?;

    Ok(Json(serde_json::json!({ "message": "Member removed" })))
}

/// Shareable sign-up link that lands a new teammate in this workspace as
/// a member.
pub async fn invite_link(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let url = format!(
        "{}/auth/register?invite={}",
        state.config.base_url,
        auth.tenant_id()
    );
    Ok(Json(serde_json::json!({ "invite_url": url })))
}
