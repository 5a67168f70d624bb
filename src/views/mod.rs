pub mod auth;
pub mod contacts;
pub mod dashboard;
pub mod pipeline;
pub mod settings;

use axum::routing::get;
use axum::Router;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::Role;
use crate::state::SharedState;

/// Default accent when a workspace hasn't picked a brand color (or the
/// caller isn't signed in yet).
pub const DEFAULT_ACCENT: &str = "#3b82f6";

/// Data every chrome'd page needs: the signed-in user and the workspace
/// branding that tints the sidebar and buttons.
pub struct Shell {
    pub user_name: String,
    pub user_role: String,
    pub is_admin: bool,
    pub tenant_name: String,
    pub accent: String,
    pub logo_url: String,
}

pub async fn shell(state: &SharedState, auth: &AuthUser) -> Result<Shell, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    let tenant = db::tenants::find_by_id(&state.pool, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Workspace not found".to_string()))?;

    let accent = if tenant.primary_color.trim().is_empty() {
        DEFAULT_ACCENT.to_string()
    } else {
        tenant.primary_color.clone()
    };

    Ok(Shell {
        user_name: user.name,
        user_role: user.role.to_string(),
        is_admin: auth.role == Role::Admin,
        tenant_name: tenant.name,
        accent,
        logo_url: tenant.logo_url,
    })
}

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Auth views
        .route("/", get(auth::login_page))
        .route("/auth/login", get(auth::login_page))
        .route("/auth/register", get(auth::register_page))
        // Dashboard
        .route("/dashboard", get(dashboard::index))
        // Contacts
        .route("/contacts", get(contacts::index))
        .route("/contacts/new", get(contacts::new_page))
        .route("/contacts/{id}", get(contacts::show))
        .route("/contacts/{id}/edit", get(contacts::edit_page))
        // Pipeline board
        .route("/pipeline", get(pipeline::board))
        // Settings
        .route("/settings", get(settings::account_page))
        .route("/settings/branding", get(settings::branding_page))
        .route("/settings/members", get(settings::members_page))
        // HTMX partials
        .route("/htmx/contacts", get(contacts::table_partial))
}
