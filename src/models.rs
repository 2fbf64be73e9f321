// src/models.rs
use serde::{Serialize, Deserialize};

/// Strength category for a candidate password. The order matters:
/// Weak < Medium < Strong, and segment rendering relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weak,
    Medium,
    Strong,
}

impl Category {
    /// Human-readable label shown next to the strength meter.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Weak => "Too Weak",
            Category::Medium => "Could be stronger",
            Category::Strong => "Strong password",
        }
    }

    /// All categories in meter order, weakest first.
    pub fn all() -> [Category; 3] {
        [Category::Weak, Category::Medium, Category::Strong]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Weak => write!(f, "weak"),
            Category::Medium => write!(f, "medium"),
            Category::Strong => write!(f, "strong"),
        }
    }
}

/// Outcome of classifying an edit: the category of the new text, and
/// whether it differs from the previous text's category. `changed` is the
/// host's cue to run the entry animation for `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub changed: bool,
}

/// The finalized value a field exposes after the user commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedValue {
    pub password: String,
    pub strength: Category,
}

/// Notification delivered to field observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldEvent {
    /// The user committed the current text (e.g., pressed return).
    ValueCommitted(CommittedValue),
}

/// Icon shown on the show/hide button, derived from the visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityIcon {
    EyesOpen,
    EyesClosed,
}
