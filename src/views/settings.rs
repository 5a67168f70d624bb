use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::Role;
use crate::state::SharedState;
use crate::views::{shell, Shell};

#[derive(Template)]
#[template(path = "settings/account.html")]
#[allow(dead_code)]
struct AccountTemplate {
    shell: Shell,
    user_email: String,
}

#[derive(Template)]
#[template(path = "settings/branding.html")]
#[allow(dead_code)]
struct BrandingTemplate {
    shell: Shell,
    workspace_name: String,
    primary_color: String,
    logo_url: String,
}

#[derive(Template)]
#[template(path = "settings/members.html")]
#[allow(dead_code)]
struct MembersTemplate {
    shell: Shell,
    members: Vec<MemberRow>,
    invite_url: String,
}

#[allow(dead_code)]
struct MemberRow {
    id: String,
    name: String,
    email: String,
    role: String,
    /// The caller's own row never gets role/remove controls.
    is_self: bool,
    role_options: Vec<RoleOption>,
}

#[allow(dead_code)]
struct RoleOption {
    label: &'static str,
    selected: bool,
}

pub async fn account_page(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let shell = shell(&state, &auth).await?;

    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let template = AccountTemplate {
        shell,
        user_email: user.email,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn branding_page(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    auth.require_admin()?;

    let shell = shell(&state, &auth).await?;

    let tenant = db::tenants::find_by_id(&state.pool, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Workspace not found".to_string()))?;

    let template = BrandingTemplate {
        shell,
        workspace_name: tenant.name,
        primary_color: tenant.primary_color,
        logo_url: tenant.logo_url,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn members_page(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let shell = shell(&state, &auth).await?;

    let members = db::users::list_by_tenant(&state.pool, auth.tenant_id()).await?;
    let members = members
        .into_iter()
        .map(|m| MemberRow {
            is_self: m.id == auth.user_id,
            id: m.id.to_string(),
            name: m.name,
            email: m.email,
            role_options: Role::ALL
                .iter()
                .map(|r| RoleOption {
                    label: r.as_str(),
                    selected: *r == m.role,
                })
                .collect(),
            role: m.role.to_string(),
        })
        .collect();

    let invite_url = format!(
        "{}/auth/register?invite={}",
        state.config.base_url,
        auth.tenant_id()
    );

    let template = MembersTemplate {
        shell,
        members,
        invite_url,
    };
    Ok(Html(template.render().unwrap_or_default()))
}
