use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ActivityKind;

/// Append a timeline entry for a contact mutation. Called explicitly in
/// handlers after the mutation commits; a failed insert must not fail the
/// mutation that already happened, so the error is only logged.
pub async fn record(
    pool: &PgPool,
    tenant_id: Uuid,
    contact_id: Uuid,
    author_id: Uuid,
    kind: ActivityKind,
    body: &str,
) {
    if let Err(e) =
        crate::db::activities::create(pool, tenant_id, contact_id, author_id, kind, body).await
    {
        tracing::error!("Failed to record activity: {e}");
    }
}
