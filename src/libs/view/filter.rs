use crate::libs::messages::Message;
use crate::libs::store::Intent;
use crate::libs::todo::Category;
use std::collections::BTreeSet;

/// One toggle per category; the selection is the active filter set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    selected: BTreeSet<Category>,
}

impl CategoryFilter {
    pub fn new(selected: BTreeSet<Category>) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> &BTreeSet<Category> {
        &self.selected
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    /// Adds or removes `category` and returns the new filter set as an intent.
    pub fn toggle(&mut self, category: Category) -> Intent {
        if !self.selected.remove(&category) {
            self.selected.insert(category);
        }
        Intent::SetFilters(self.selected.clone())
    }

    /// Replaces the whole selection, e.g. from a multi-select prompt.
    pub fn select(&mut self, categories: impl IntoIterator<Item = Category>) -> Intent {
        self.selected = categories.into_iter().collect();
        Intent::SetFilters(self.selected.clone())
    }

    /// `(category, checked)` for every category in declaration order.
    pub fn toggles(&self) -> Vec<(Category, bool)> {
        Category::ALL.iter().map(|category| (*category, self.is_selected(*category))).collect()
    }

    pub fn render(&self) -> String {
        self.toggles()
            .iter()
            .map(|(category, checked)| format!("[{}] {}", if *checked { "x" } else { " " }, category.label()))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Summary line of the active filter.
    pub fn summary(&self) -> Message {
        if self.selected.is_empty() {
            return Message::FiltersNone;
        }
        let labels = self.selected.iter().map(Category::label).collect::<Vec<_>>().join(", ");
        Message::FiltersActive(labels)
    }
}
