pub mod activities;
pub mod contacts;
pub mod refresh_tokens;
pub mod tenants;
pub mod users;
