use super::progress::ProgressTier;
use serde::{Deserialize, Serialize};

/// Avatar fallback: first character of every name part
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Tone of the motivation banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotivationKind {
    Success,
    Warning,
    Info,
}

impl MotivationKind {
    pub fn for_tier(tier: ProgressTier) -> Self {
        match tier {
            ProgressTier::Success => MotivationKind::Success,
            ProgressTier::Warning => MotivationKind::Warning,
            ProgressTier::Danger => MotivationKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotivationKind::Success => "success",
            MotivationKind::Warning => "warning",
            MotivationKind::Info => "info",
        }
    }
}
