use crate::libs::store::Intent;
use crate::libs::todo::Category;

/// Longest description the form accepts; longer input is cut on entry.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Creation form: transient description text and selected category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoForm {
    description: String,
    category: Category,
}

impl TodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Replaces the description, keeping at most [`MAX_DESCRIPTION_LEN`] characters.
    ///
    /// Returns `true` when the input had to be cut.
    pub fn set_description(&mut self, text: &str) -> bool {
        self.description = text.chars().take(MAX_DESCRIPTION_LEN).collect();
        text.chars().count() > MAX_DESCRIPTION_LEN
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn can_submit(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// The add intent for the current input, or `None` while the trimmed
    /// description is empty.
    pub fn submit(&self) -> Option<Intent> {
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }
        Some(Intent::Add {
            description: description.to_string(),
            category: self.category,
        })
    }

    /// Clears both fields. Called once the parent reports the add succeeded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
