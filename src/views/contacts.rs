use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::contacts::ContactFilters;
use crate::error::AppError;
use crate::models::ContactWithOwner;
use crate::pipeline::stats::fmt_usd;
use crate::pipeline::{Stage, INDUSTRIES, SOURCES};
use crate::state::SharedState;
use crate::views::{shell, Shell};

#[allow(dead_code)]
struct ContactRow {
    id: String,
    name: String,
    email: String,
    company_name: String,
    title: String,
    stage_label: &'static str,
    stage_color: &'static str,
    deal_value: String,
    owner_name: String,
    last_contact: String,
}

#[derive(Template)]
#[template(path = "contacts/index.html")]
#[allow(dead_code)]
struct ContactsTemplate {
    shell: Shell,
    rows: Vec<ContactRow>,
    total: usize,
    search: String,
    stage_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "contacts/table.html")]
#[allow(dead_code)]
struct ContactsTableTemplate {
    rows: Vec<ContactRow>,
}

#[derive(Deserialize)]
pub struct FilterParams {
    pub search: Option<String>,
    pub stage: Option<String>,
}

impl FilterParams {
    /// The page's "All" stage option arrives as a plain string; anything
    /// that isn't a known stage label means no stage filter.
    fn to_filters(&self) -> ContactFilters {
        ContactFilters {
            stage: self
                .stage
                .as_deref()
                .and_then(|s| s.parse::<Stage>().ok()),
            owner_id: None,
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

fn to_rows(contacts: Vec<ContactWithOwner>) -> Vec<ContactRow> {
    contacts
        .into_iter()
        .map(|c| {
            let contact = c.contact;
            ContactRow {
                id: contact.id.to_string(),
                name: contact.name,
                email: contact.email,
                company_name: contact.company_name,
                title: contact.title,
                stage_label: contact.stage.label(),
                stage_color: contact.stage.color(),
                deal_value: if contact.deal_value > 0.0 {
                    fmt_usd(contact.deal_value)
                } else {
                    "—".to_string()
                },
                owner_name: c.owner_name.unwrap_or_else(|| "—".to_string()),
                last_contact: contact.last_contact.format("%Y-%m-%d").to_string(),
            }
        })
        .collect()
}

pub async fn index(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let shell = shell(&state, &auth).await?;
    let filters = params.to_filters();
    let contacts = db::contacts::list(&state.pool, auth.tenant_id(), &filters).await?;

    let stage_filter = params.stage.unwrap_or_else(|| "All".to_string());
    let mut stage_options = options(["All"], &stage_filter);
    stage_options.extend(options(Stage::ALL.iter().map(|s| s.label()), &stage_filter));

    let template = ContactsTemplate {
        shell,
        total: contacts.len(),
        rows: to_rows(contacts),
        search: params.search.unwrap_or_default(),
        stage_options,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn table_partial(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let filters = params.to_filters();
    let contacts = db::contacts::list(&state.pool, auth.tenant_id(), &filters).await?;

    let template = ContactsTableTemplate {
        rows: to_rows(contacts),
    };
    Ok(Html(template.render().unwrap_or_default()))
}

#[derive(Template)]
#[template(path = "contacts/show.html")]
#[allow(dead_code)]
struct ContactShowTemplate {
    shell: Shell,
    id: String,
    name: String,
    title: String,
    company_name: String,
    email: String,
    phone: String,
    industry: String,
    source: String,
    deal_value: String,
    added: String,
    last_contact: String,
    notes: String,
    tags: Vec<String>,
    steps: Vec<StageStep>,
    activities: Vec<ActivityRow>,
}

#[allow(dead_code)]
struct StageStep {
    label: &'static str,
    color: &'static str,
    active: bool,
    past: bool,
}

#[allow(dead_code)]
struct ActivityRow {
    body: String,
    author: String,
    date: String,
}

pub async fn show(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let shell = shell(&state, &auth).await?;

    let found = db::contacts::find_by_id(&state.pool, id, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;
    let contact = found.contact;

    let activities = db::activities::list(&state.pool, auth.tenant_id(), Some(id)).await?;

    let steps = Stage::ALL
        .iter()
        .map(|&s| StageStep {
            label: s.label(),
            color: s.color(),
            active: s == contact.stage,
            past: s.position() < contact.stage.position(),
        })
        .collect();

    // Timeline shows the most recent slice; the feed itself is capped.
    let activities = activities
        .into_iter()
        .take(8)
        .map(|a| ActivityRow {
            body: a.activity.body,
            author: a.author_name.unwrap_or_else(|| "User".to_string()),
            date: a.activity.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let template = ContactShowTemplate {
        shell,
        id: contact.id.to_string(),
        name: contact.name,
        title: contact.title,
        company_name: contact.company_name,
        email: contact.email,
        phone: contact.phone,
        industry: contact.industry,
        source: contact.source,
        deal_value: fmt_usd(contact.deal_value),
        added: contact.created_at.format("%Y-%m-%d").to_string(),
        last_contact: contact.last_contact.format("%Y-%m-%d").to_string(),
        notes: contact.notes,
        tags: contact.tags,
        steps,
        activities,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

#[derive(Template)]
#[template(path = "contacts/form.html")]
#[allow(dead_code)]
struct ContactFormTemplate {
    shell: Shell,
    heading: String,
    submit_url: String,
    submit_method: String,
    name: String,
    email: String,
    phone: String,
    company_name: String,
    title: String,
    deal_value: String,
    tags: String,
    notes: String,
    stage_options: Vec<SelectOption>,
    source_options: Vec<SelectOption>,
    industry_options: Vec<SelectOption>,
}

#[allow(dead_code)]
struct SelectOption {
    label: String,
    selected: bool,
}

fn options<I: IntoIterator<Item = S>, S: Into<String>>(items: I, current: &str) -> Vec<SelectOption> {
    items
        .into_iter()
        .map(|label| {
            let label: String = label.into();
            let selected = label == current;
            SelectOption { label, selected }
        })
        .collect()
}

pub async fn new_page(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let shell = shell(&state, &auth).await?;

    let template = ContactFormTemplate {
        shell,
        heading: "New Contact".to_string(),
        submit_url: "/api/v1/contacts".to_string(),
        submit_method: "POST".to_string(),
        name: String::new(),
        email: String::new(),
        phone: String::new(),
        company_name: String::new(),
        title: String::new(),
        deal_value: String::new(),
        tags: String::new(),
        notes: String::new(),
        stage_options: options(Stage::ALL.iter().map(|s| s.label()), Stage::NewLead.label()),
        source_options: options(SOURCES, SOURCES[0]),
        industry_options: options(INDUSTRIES, INDUSTRIES[0]),
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn edit_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let shell = shell(&state, &auth).await?;

    let found = db::contacts::find_by_id(&state.pool, id, auth.tenant_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;
    let contact = found.contact;

    let deal_value = if contact.deal_value > 0.0 {
        contact.deal_value.to_string()
    } else {
        String::new()
    };

    let template = ContactFormTemplate {
        shell,
        heading: "Edit Contact".to_string(),
        submit_url: format!("/api/v1/contacts/{}", contact.id),
        submit_method: "PUT".to_string(),
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        company_name: contact.company_name,
        title: contact.title,
        deal_value,
        tags: contact.tags.join(", "),
        notes: contact.notes,
        stage_options: options(Stage::ALL.iter().map(|s| s.label()), contact.stage.label()),
        source_options: options(SOURCES, &contact.source),
        industry_options: options(INDUSTRIES, &contact.industry),
    };
    Ok(Html(template.render().unwrap_or_default()))
}
