use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single catalog entry: a stable key, the prompt shown to the user, and a
/// fixed set of selectable options.
///
/// An empty option list means the question takes free text instead of a
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    key: String,
    label: String,
    options: Vec<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question key must not be blank")]
    BlankKey,
    #[error("question label must not be blank")]
    BlankLabel,
    #[error("question option must not be blank")]
    BlankOption,
}

impl Question {
    /// Create a multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the key, label, or any option is blank.
    pub fn choice(
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, QuestionError> {
        Self::validated(
            key.into(),
            label.into(),
            options.into_iter().map(Into::into).collect(),
        )
    }

    /// Create a free-text question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the key or label is blank.
    pub fn free_text(
        key: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        Self::validated(key.into(), label.into(), Vec::new())
    }

    fn validated(
        key: String,
        label: String,
        options: Vec<String>,
    ) -> Result<Self, QuestionError> {
        if key.trim().is_empty() {
            return Err(QuestionError::BlankKey);
        }
        if label.trim().is_empty() {
            return Err(QuestionError::BlankLabel);
        }
        if options.iter().any(|option| option.trim().is_empty()) {
            return Err(QuestionError::BlankOption);
        }

        Ok(Self {
            key,
            label,
            options,
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// True when the question offers a fixed option set.
    #[must_use]
    pub fn is_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
