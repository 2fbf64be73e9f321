// src/field/mod.rs
use std::ops::Range;

use thiserror::Error;

use crate::models::{Category, ClassificationResult, CommittedValue, FieldEvent, VisibilityIcon};
use crate::strength;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("edit range is inverted: start {start} > end {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("edit range {start}..{end} is out of bounds for text of {len} characters")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, EditError>;

type Observer = Box<dyn FnMut(&FieldEvent)>;

/// Mutable state of a password field: the text being edited, its current
/// strength category, the visibility flag, and the last committed value.
/// Single-threaded by design; classification runs synchronously on the
/// thread that delivers the edit.
pub struct PasswordField {
    current_text: String,
    current_category: Category,
    is_text_hidden: bool,
    committed: Option<CommittedValue>,
    observers: Vec<Observer>,
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordField {
    /// An empty, masked field. Empty text rates Weak.
    pub fn new() -> Self {
        Self {
            current_text: String::new(),
            current_category: Category::Weak,
            is_text_hidden: true,
            committed: None,
            observers: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.current_text
    }

    pub fn category(&self) -> Category {
        self.current_category
    }

    pub fn is_text_hidden(&self) -> bool {
        self.is_text_hidden
    }

    /// Icon matching the current visibility flag.
    pub fn icon(&self) -> VisibilityIcon {
        if self.is_text_hidden {
            VisibilityIcon::EyesClosed
        } else {
            VisibilityIcon::EyesOpen
        }
    }

    /// Last committed value, if the user has committed at least once.
    pub fn committed(&self) -> Option<&CommittedValue> {
        self.committed.as_ref()
    }

    /// Register an observer for field events. Dispatch is synchronous, in
    /// registration order.
    pub fn on_event(&mut self, observer: impl FnMut(&FieldEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the text wholesale and reclassify against the previous text.
    /// When the returned `changed` flag is set, the host should run exactly
    /// one entry transition for the category being entered.
    pub fn set_text(&mut self, new_text: &str) -> ClassificationResult {
        let result = strength::classify_transition(&self.current_text, new_text);
        if result.changed {
            log::debug!(
                "strength transition: {} -> {}",
                self.current_category,
                result.category
            );
        }
        self.current_text = new_text.to_string();
        self.current_category = result.category;
        result
    }

    /// Apply a ranged edit, with `range` in characters. A malformed range
    /// leaves the field untouched so the host can skip the event rather
    /// than propagate an undefined category.
    pub fn apply_edit(&mut self, range: Range<usize>, replacement: &str) -> Result<ClassificationResult> {
        if range.start > range.end {
            return Err(EditError::InvertedRange {
                start: range.start,
                end: range.end,
            });
        }
        let char_len = self.current_text.chars().count();
        if range.end > char_len {
            return Err(EditError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: char_len,
            });
        }

        let start = byte_offset(&self.current_text, range.start);
        let end = byte_offset(&self.current_text, range.end);

        let mut new_text = String::with_capacity(self.current_text.len() + replacement.len());
        new_text.push_str(&self.current_text[..start]);
        new_text.push_str(replacement);
        new_text.push_str(&self.current_text[end..]);

        Ok(self.set_text(&new_text))
    }

    /// Flip the visibility flag and return the new value. Never affects
    /// classification.
    pub fn toggle_visibility(&mut self) -> bool {
        self.is_text_hidden = !self.is_text_hidden;
        log::debug!("text visibility toggled, hidden={}", self.is_text_hidden);
        self.is_text_hidden
    }

    /// Finalize the current text as the field's committed value and notify
    /// observers. An empty field commits successfully as {"", Weak}.
    pub fn commit(&mut self) -> CommittedValue {
        let value = CommittedValue {
            password: self.current_text.clone(),
            strength: self.current_category,
        };
        self.committed = Some(value.clone());
        log::info!("password committed with {} strength", value.strength);

        let event = FieldEvent::ValueCommitted(value.clone());
        for observer in &mut self.observers {
            observer(&event);
        }
        value
    }
}

// Byte offset of the char at `char_idx`; `char_idx` equal to the char count
// maps to the end of the string. Caller has bounds-checked.
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(char_idx)
        .unwrap_or(text.len())
}
