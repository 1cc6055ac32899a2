//! Listing segment - the kind of boat project a listing advertises

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing segment
///
/// Serialized as a kebab-case token. Tokens written by the previous
/// deployment (`ins`, `bakim`, `destek`) are still accepted on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Segment {
    #[default]
    #[serde(alias = "ins")]
    NewBuild,
    Refit,
    #[serde(alias = "bakim")]
    Maintenance,
    #[serde(alias = "destek")]
    Support,
}

/// Substring fragments checked in order after the exact-token match fails.
const KEYWORDS: &[(&str, Segment)] = &[
    ("refit", Segment::Refit),
    ("bak", Segment::Maintenance),
    ("maint", Segment::Maintenance),
    ("destek", Segment::Support),
    ("support", Segment::Support),
];

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::NewBuild,
        Segment::Refit,
        Segment::Maintenance,
        Segment::Support,
    ];

    /// Wire token for this segment
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewBuild => "new-build",
            Self::Refit => "refit",
            Self::Maintenance => "maintenance",
            Self::Support => "support",
        }
    }

    /// Exact token lookup, including legacy tokens
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "new-build" | "ins" => Some(Self::NewBuild),
            "refit" => Some(Self::Refit),
            "maintenance" | "bakim" => Some(Self::Maintenance),
            "support" | "destek" => Some(Self::Support),
            _ => None,
        }
    }

    /// Map free text onto a segment.
    ///
    /// Lossy on purpose: an exact token wins, then the keyword fragments are
    /// tried in a fixed order, and anything else falls back to `NewBuild`.
    pub fn normalize(input: &str) -> Self {
        let value = input.trim().to_lowercase();
        if value.is_empty() {
            return Self::default();
        }
        if let Some(segment) = Self::from_token(&value) {
            return segment;
        }
        KEYWORDS
            .iter()
            .find(|(fragment, _)| value.contains(fragment))
            .map_or_else(Self::default, |(_, segment)| *segment)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
