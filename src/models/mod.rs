mod activity;
mod contact;
mod refresh_token;
mod tenant;
mod user;

pub use activity::{Activity, ActivityKind, ActivityWithAuthor};
pub use contact::{Contact, ContactWithOwner};
pub use refresh_token::RefreshToken;
pub use tenant::Tenant;
pub use user::{Role, User};
