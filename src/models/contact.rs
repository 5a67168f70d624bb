use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pipeline::Stage;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub owner_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub title: String,
    pub industry: String,
    pub source: String,
    pub stage: Stage,
    pub deal_value: f64,
    pub tags: Vec<String>,
    pub notes: String,
    pub last_contact: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Contact row joined with its owner's profile, the shape list endpoints
/// return so the table can show who owns each lead.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ContactWithOwner {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub contact: Contact,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}
