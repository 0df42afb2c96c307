use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Question, QuestionError};

/// Number of steps in front of the stored questions: the intro gate and the
/// honesty interstitial. Neither produces an answer.
pub const LEADING_STEPS: usize = 2;

/// Ordered, immutable list of questions with unique keys, defined once at
/// process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate question key: {0}")]
    DuplicateKey(String),
    #[error(transparent)]
    Question(#[from] QuestionError),
}

impl Catalog {
    /// Build a catalog, rejecting duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateKey` when two questions share a key.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.key().to_string()) {
                return Err(CatalogError::DuplicateKey(question.key().to_string()));
            }
        }

        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Steps walked by the flow: intro, interstitial, then one per question.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        LEADING_STEPS + self.questions.len()
    }

    /// The default trading questionnaire.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the built-in data fails validation.
    pub fn trading_path() -> Result<Self, CatalogError> {
        let questions = vec![
            Question::choice(
                "experience",
                "How would you describe your current experience with trading?",
                [
                    "Just getting started",
                    "I know the basics",
                    "I have placed a few trades",
                    "I trade often",
                    "I am consistently profitable",
                ],
            )?,
            Question::choice(
                "years",
                "How many years have you been actively learning or trading?",
                ["<1", "1-2", "3-5", "5+"],
            )?,
            Question::choice(
                "goal",
                "What is your current goal?",
                [
                    "Learn the basics",
                    "Consistent part time",
                    "Full time eventually",
                    "Long term allocation",
                    "Use AI or automation",
                ],
            )?,
            Question::choice(
                "style",
                "Which style attracts you the most?",
                [
                    "Scalping",
                    "Day trading",
                    "Swing trading",
                    "Long term investing",
                    "Algorithmic or automated",
                    "Not sure",
                ],
            )?,
            Question::choice(
                "time",
                "How much time can you realistically dedicate per day?",
                ["<1h", "1-2h", "3+h", "Varies"],
            )?,
            Question::choice(
                "learning",
                "How do you learn best?",
                [
                    "Step by step",
                    "Watch real examples",
                    "Try and iterate",
                    "Read deep theory",
                ],
            )?,
            Question::choice(
                "frustration",
                "Biggest frustration right now?",
                [
                    "Too much info",
                    "Inconsistent results",
                    "Do not know where to start",
                    "Emotions and psychology",
                    "Systems feel too complex",
                ],
            )?,
            Question::choice(
                "tools",
                "Do you use any tools today?",
                [
                    "None",
                    "Charting apps",
                    "Exchanges",
                    "Backtesters or bots or Python",
                ],
            )?,
            Question::choice(
                "risk",
                "How comfortable are you with risk and volatility?",
                [
                    "Prefer safety",
                    "Some risk with control",
                    "I like volatility",
                    "Risk is fine if there is edge",
                ],
            )?,
            Question::choice(
                "focus",
                "What are you more interested in right now?",
                [
                    "Mindset and discipline",
                    "Tools and strategies",
                    "Both equally",
                ],
            )?,
        ];

        Self::new(questions)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trading_path_has_ten_questions() {
        let catalog = Catalog::trading_path().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.total_steps(), 12);
    }

    #[test]
    fn trading_path_keys_are_stable() {
        let catalog = Catalog::trading_path().unwrap();
        let keys: Vec<&str> = catalog.iter().map(Question::key).collect();
        assert_eq!(
            keys,
            [
                "experience",
                "years",
                "goal",
                "style",
                "time",
                "learning",
                "frustration",
                "tools",
                "risk",
                "focus",
            ]
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = Catalog::new(vec![
            Question::free_text("a", "First").unwrap(),
            Question::free_text("a", "Second").unwrap(),
        ])
        .unwrap_err();

        assert_eq!(err, CatalogError::DuplicateKey("a".to_string()));
    }

    #[test]
    fn empty_catalog_has_only_leading_steps() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert_eq!(catalog.total_steps(), LEADING_STEPS);
    }
}
