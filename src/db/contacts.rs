use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Contact, ContactWithOwner};
use crate::pipeline::Stage;

/// Optional filters for the tenant's contact list. `search` matches
/// name, email, or company name, case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct ContactFilters {
    pub stage: Option<Stage>,
    pub owner_id: Option<Uuid>,
    pub search: Option<String>,
}

const SELECT_WITH_OWNER: &str =
    "SELECT c.*, u.name AS owner_name, u.email AS owner_email
     FROM contacts c LEFT JOIN users u ON u.id = c.owner_id";

pub async fn list(
    pool: &PgPool,
    tenant_id: Uuid,
    filters: &ContactFilters,
) -> Result<Vec<ContactWithOwner>, sqlx::Error> {
    let pattern = filters.search.as_deref().map(|s| format!("%{s}%"));
    sqlx::query_as::<_, ContactWithOwner>(&format!(
        "{SELECT_WITH_OWNER}
         WHERE c.tenant_id = $1
           AND ($2::contact_stage IS NULL OR c.stage = $2)
           AND ($3::uuid IS NULL OR c.owner_id = $3)
           AND ($4::text IS NULL
                OR c.name ILIKE $4 OR c.email ILIKE $4 OR c.company_name ILIKE $4)
         ORDER BY c.created_at DESC"
    ))
    .bind(tenant_id)
    .bind(filters.stage)
    .bind(filters.owner_id)
    .bind(pattern)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(
    pool: &PgPool,
    id: Uuid,
    tenant_id: Uuid,
) -> Result<Option<ContactWithOwner>, sqlx::Error> {
    sqlx::query_as::<_, ContactWithOwner>(&format!(
        "{SELECT_WITH_OWNER} WHERE c.id = $1 AND c.tenant_id = $2"
    ))
    .bind(id)
    .bind(tenant_id)
    .fetch_optional(pool)
    .await
}

pub struct NewContact {
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
    pub last_contact: Option<NaiveDate>,
}

pub async fn create(
    pool: &PgPool,
    tenant_id: Uuid,
    owner_id: Uuid,
    new: &NewContact,
) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "INSERT INTO contacts
             (tenant_id, owner_id, name, email, phone, company_name, title,
              industry, source, stage, deal_value, tags, notes, last_contact)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                 COALESCE($14, CURRENT_DATE))
         RETURNING *",
    )
    .bind(tenant_id)
    .bind(owner_id)
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.company_name)
    .bind(&new.title)
    .bind(&new.industry)
    .bind(&new.source)
    .bind(new.stage)
    .bind(new.deal_value)
    .bind(&new.tags)
    .bind(&new.notes)
    .bind(new.last_contact)
    .fetch_one(pool)
    .await
}

/// Full-field update in the edit form's semantics. Refreshes `updated_at`
/// and stamps `last_contact` with today, matching the form's save behavior.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    tenant_id: Uuid,
    fields: &NewContact,
) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "UPDATE contacts SET
             name = $3, email = $4, phone = $5, company_name = $6, title = $7,
             industry = $8, source = $9, stage = $10, deal_value = $11,
             tags = $12, notes = $13,
             last_contact = COALESCE($14, CURRENT_DATE), updated_at = now()
         WHERE id = $1 AND tenant_id = $2
         RETURNING *",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.phone)
    .bind(&fields.company_name)
    .bind(&fields.title)
    .bind(&fields.industry)
    .bind(&fields.source)
    .bind(fields.stage)
    .bind(fields.deal_value)
    .bind(&fields.tags)
    .bind(&fields.notes)
    .bind(fields.last_contact)
    .fetch_one(pool)
    .await
}

/// Stage move from the board or the detail stepper. Leaves `last_contact`
/// alone; only an edit counts as touching the contact.
pub async fn update_stage(
    pool: &PgPool,
    id: Uuid,
    tenant_id: Uuid,
    stage: Stage,
) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "UPDATE contacts SET stage = $3, updated_at = now()
         WHERE id = $1 AND tenant_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(stage)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid, tenant_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND tenant_id = $2")
        .bind(id)
        .bind(tenant_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
