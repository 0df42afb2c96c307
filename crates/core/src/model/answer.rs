use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Answers collected over a quiz run, keyed by question key.
///
/// Revisiting a step and submitting again overwrites the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    entries: HashMap<String, String>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer values in catalog order, skipping unanswered questions.
    ///
    /// This is the payload shape the summary endpoint receives.
    #[must_use]
    pub fn ordered_values(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .iter()
            .filter_map(|question| self.get(question.key()))
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn catalog_ab() -> Catalog {
        Catalog::new(vec![
            Question::free_text("a", "Question A").unwrap(),
            Question::free_text("b", "Question B").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn insert_overwrites_previous_value() {
        let mut answers = AnswerSet::new();
        answers.insert("a", "x");
        answers.insert("a", "z");

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("a"), Some("z"));
    }

    #[test]
    fn ordered_values_follow_catalog_order() {
        let catalog = catalog_ab();
        let mut answers = AnswerSet::new();
        answers.insert("b", "second");
        answers.insert("a", "first");

        assert_eq!(answers.ordered_values(&catalog), ["first", "second"]);
    }

    #[test]
    fn ordered_values_skip_unanswered() {
        let catalog = catalog_ab();
        let mut answers = AnswerSet::new();
        answers.insert("b", "only");

        assert_eq!(answers.ordered_values(&catalog), ["only"]);
    }
}
