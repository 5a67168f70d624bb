use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Activity, ActivityKind, ActivityWithAuthor};

/// Activity feeds are capped; the timeline only ever shows recent history.
pub const FEED_LIMIT: i64 = 50;

pub async fn create(
    pool: &PgPool,
    tenant_id: Uuid,
    contact_id: Uuid,
    author_id: Uuid,
    kind: ActivityKind,
    body: &str,
) -> Result<Activity, sqlx::Error> {
    sqlx::query_as::<_, Activity>(
        "INSERT INTO activities (tenant_id, contact_id, author_id, kind, body)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(tenant_id)
    .bind(contact_id)
    .bind(author_id)
    .bind(kind)
    .bind(body)
    .fetch_one(pool)
    .await
}

/// Newest first, optionally scoped to one contact, author name joined in.
pub async fn list(
    pool: &PgPool,
    tenant_id: Uuid,
    contact_id: Option<Uuid>,
) -> Result<Vec<ActivityWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, ActivityWithAuthor>(
        "SELECT a.*, u.name AS author_name
         FROM activities a LEFT JOIN users u ON u.id = a.author_id
         WHERE a.tenant_id = $1
           AND ($2::uuid IS NULL OR a.contact_id = $2)
         ORDER BY a.created_at DESC
         LIMIT $3",
    )
    .bind(tenant_id)
    .bind(contact_id)
    .bind(FEED_LIMIT)
    .fetch_all(pool)
    .await
}
