use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Note,
    Call,
    Email,
    StageChange,
}

/// One immutable log entry on a contact's timeline. Rows are only ever
/// inserted; there is no update or delete surface.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub contact_id: Uuid,
    pub author_id: Option<Uuid>,
    pub kind: ActivityKind,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ActivityWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub activity: Activity,
    pub author_name: Option<String>,
}
