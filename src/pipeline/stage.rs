use serde::{Deserialize, Serialize};

/// Pipeline stage vocabulary, in progression order. Order informs the board
/// and the stage stepper; transitions themselves are unrestricted — a deal
/// can move from any stage to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_stage")]
pub enum Stage {
    #[serde(rename = "New Lead")]
    #[sqlx(rename = "New Lead")]
    NewLead,
    #[serde(rename = "Contacted")]
    #[sqlx(rename = "Contacted")]
    Contacted,
    #[serde(rename = "Qualified")]
    #[sqlx(rename = "Qualified")]
    Qualified,
    #[serde(rename = "Proposal")]
    #[sqlx(rename = "Proposal")]
    Proposal,
    #[serde(rename = "Negotiation")]
    #[sqlx(rename = "Negotiation")]
    Negotiation,
    #[serde(rename = "Closed Won")]
    #[sqlx(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    #[sqlx(rename = "Closed Lost")]
    ClosedLost,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::NewLead,
        Stage::Contacted,
        Stage::Qualified,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::ClosedWon,
        Stage::ClosedLost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::NewLead => "New Lead",
            Stage::Contacted => "Contacted",
            Stage::Qualified => "Qualified",
            Stage::Proposal => "Proposal",
            Stage::Negotiation => "Negotiation",
            Stage::ClosedWon => "Closed Won",
            Stage::ClosedLost => "Closed Lost",
        }
    }

    /// Accent color used by stage pills and board columns.
    pub fn color(self) -> &'static str {
        match self {
            Stage::NewLead => "#64748b",
            Stage::Contacted => "#06b6d4",
            Stage::Qualified => "#3b82f6",
            Stage::Proposal => "#eab308",
            Stage::Negotiation => "#f97316",
            Stage::ClosedWon => "#22c55e",
            Stage::ClosedLost => "#ef4444",
        }
    }

    /// A "hot" lead is one in active closing conversation.
    pub fn is_hot(self) -> bool {
        matches!(self, Stage::Proposal | Stage::Negotiation)
    }

    /// Position in the pipeline, for the stepper's past/future styling.
    pub fn position(self) -> usize {
        Stage::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .iter()
            .copied()
            .find(|stage| stage.label() == s)
            .ok_or_else(|| format!("Unknown stage: {s}"))
    }
}
