use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Tenant;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    name: &str,
) -> Result<Tenant, sqlx::Error> {
    sqlx::query_as::<_, Tenant>("INSERT INTO tenants (name) VALUES ($1) RETURNING *")
        .bind(name)
        .fetch_one(executor)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Tenant>, sqlx::Error> {
    sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_branding(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    primary_color: &str,
    logo_url: &str,
) -> Result<Tenant, sqlx::Error> {
    sqlx::query_as::<_, Tenant>(
        "UPDATE tenants SET name = $2, primary_color = $3, logo_url = $4, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(primary_color)
    .bind(logo_url)
    .fetch_one(pool)
    .await
}
