//! Builds the mentor prompt sent to the AI endpoint.

use quiz_core::{AnswerSet, Catalog};

const PROMPT_INTRO: &str = "You are a mentor helping someone navigate their trading journey.\n\n\
Here are their quiz answers:";

const PROMPT_INSTRUCTIONS: &str = "\
Write a concise, motivating, and realistic summary under 300 words.
Speak directly to the user in second person.
Include:
1) what likely fits them given time and style,
2) 2 to 4 concrete next steps for the coming week,
3) the top trap they should avoid based on frustration and risk profile.
Do not give financial advice. Do not promise results.
End with a single sentence that reinforces patience and process.";

const NOT_PROVIDED: &str = "(not provided)";

/// Map positional answer values onto catalog keys.
///
/// Values beyond the catalog length are dropped; missing tail entries stay
/// unanswered and render as "(not provided)" in the prompt.
#[must_use]
pub fn keyed_answers(catalog: &Catalog, values: &[String]) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for (question, value) in catalog.iter().zip(values) {
        answers.insert(question.key(), value.clone());
    }
    answers
}

/// Render the prompt: one line per catalog question, then the fixed
/// instruction block.
#[must_use]
pub fn build_prompt(catalog: &Catalog, answers: &AnswerSet) -> String {
    let mut prompt = String::from(PROMPT_INTRO);
    for question in catalog.iter() {
        let value = answers
            .get(question.key())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(NOT_PROVIDED);
        prompt.push_str(&format!("\n- {}: {value}", question.label()));
    }
    prompt.push_str("\n\n");
    prompt.push_str(PROMPT_INSTRUCTIONS);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::Question;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Question::free_text("experience", "Experience level").unwrap(),
            Question::free_text("goal", "Current goal").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn prompt_lists_answers_by_label() {
        let catalog = catalog();
        let mut answers = AnswerSet::new();
        answers.insert("experience", "I know the basics");
        answers.insert("goal", "Consistent part time");

        let prompt = build_prompt(&catalog, &answers);

        assert!(prompt.contains("- Experience level: I know the basics"));
        assert!(prompt.contains("- Current goal: Consistent part time"));
        assert!(prompt.contains("under 300 words"));
    }

    #[test]
    fn blank_answers_render_as_not_provided() {
        let catalog = catalog();
        let mut answers = AnswerSet::new();
        answers.insert("experience", "   ");

        let prompt = build_prompt(&catalog, &answers);

        assert!(prompt.contains("- Experience level: (not provided)"));
        assert!(prompt.contains("- Current goal: (not provided)"));
    }

    #[test]
    fn keyed_answers_map_positionally() {
        let catalog = catalog();
        let values = vec!["first".to_string(), "second".to_string()];

        let answers = keyed_answers(&catalog, &values);

        assert_eq!(answers.get("experience"), Some("first"));
        assert_eq!(answers.get("goal"), Some("second"));
    }

    #[test]
    fn extra_values_are_dropped() {
        let catalog = catalog();
        let values = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let answers = keyed_answers(&catalog, &values);

        assert_eq!(answers.len(), 2);
    }
}
