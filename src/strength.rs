// src/strength.rs
use crate::models::{Category, ClassificationResult};

/// Minimum character count for a Medium rating.
pub const MEDIUM_MIN_CHARS: usize = 10;

/// Minimum character count for a Strong rating.
pub const STRONG_MIN_CHARS: usize = 20;

// Analyze password strength. Total over all strings: every length maps to
// exactly one category, so there is no error path here.
pub fn classify(text: &str) -> Category {
    let len = text.chars().count();
    if len >= STRONG_MIN_CHARS {
        Category::Strong
    } else if len >= MEDIUM_MIN_CHARS {
        Category::Medium
    } else {
        Category::Weak
    }
}

// Classify an edit from `old_text` to `new_text`. The changed flag holds
// exactly when the two texts land in different categories, which is what
// decides whether the host runs an entry transition.
pub fn classify_transition(old_text: &str, new_text: &str) -> ClassificationResult {
    let category = classify(new_text);
    ClassificationResult {
        category,
        changed: category != classify(old_text),
    }
}
