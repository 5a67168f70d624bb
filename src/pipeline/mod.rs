pub mod fields;
pub mod stage;
pub mod stats;

pub use stage::Stage;

/// Lead source options offered by the contact form. Stored as free text.
pub const SOURCES: [&str; 7] = [
    "Website",
    "Referral",
    "Cold Outreach",
    "LinkedIn",
    "Event",
    "Paid Ad",
    "Other",
];

/// Industry options offered by the contact form. Stored as free text.
pub const INDUSTRIES: [&str; 8] = [
    "Technology",
    "Finance",
    "Healthcare",
    "Retail",
    "Manufacturing",
    "Education",
    "Real Estate",
    "Other",
];
