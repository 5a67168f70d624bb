pub mod activities;
pub mod auth;
pub mod contacts;
pub mod dashboard;
pub mod tenant;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        .route("/api/v1/me", get(auth::me))
        // Contacts
        .route(
            "/api/v1/contacts",
            get(contacts::list).post(contacts::create),
        )
        .route(
            "/api/v1/contacts/{id}",
            get(contacts::get)
                .put(contacts::update)
                .delete(contacts::delete),
        )
        .route("/api/v1/contacts/{id}/stage", put(contacts::change_stage))
        // Activities (append-only: no update or delete routes exist)
        .route(
            "/api/v1/contacts/{id}/activities",
            get(activities::list_for_contact).post(activities::create),
        )
        .route("/api/v1/activities", get(activities::feed))
        // Dashboard
        .route("/api/v1/dashboard", get(dashboard::stats))
        // Tenant & team
        .route(
            "/api/v1/tenant",
            get(tenant::get_tenant).put(tenant::update_tenant),
        )
        .route(
            "/api/v1/tenant/members",
            get(tenant::list_members).post(tenant::add_member),
        )
        .route(
            "/api/v1/tenant/members/{id}",
            put(tenant::update_member_role).delete(tenant::remove_member),
        )
        .route("/api/v1/tenant/invite-link", get(tenant::invite_link))
}
