use thiserror::Error;

use crate::catalog::{Catalog, LEADING_STEPS};
use crate::model::{AnswerSet, Question};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    #[error("an answer is required before continuing")]
    AnswerRequired,
}

//
// ─── STEP TYPES ────────────────────────────────────────────────────────────────
//

/// The user's choice at the intro gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroChoice {
    Accept,
    Decline,
}

/// Outcome of the intro gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroOutcome {
    /// Moved on to the interstitial.
    Advanced,
    /// The flow was aborted; the host should show a notice.
    Declined,
}

/// What the host should render for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepView<'a> {
    Intro,
    Interstitial,
    Question {
        /// 1-based position among the stored questions.
        number: usize,
        question: &'a Question,
    },
}

/// Outcome of submitting the current step.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The input failed validation; the flow did not move.
    Rejected,
    Continue,
    /// The last question was answered. Hand the set to the completion handler.
    Complete(AnswerSet),
}

//
// ─── FLOW ──────────────────────────────────────────────────────────────────────
//

/// Linear state machine over the question catalog.
///
/// Step 0 is the intro gate, step 1 the interstitial, and steps
/// `[2, total_steps - 1]` map 1:1 onto the catalog. Reaching `total_steps`
/// completes the flow with the collected answer set; the step index itself
/// never moves past the last renderable step.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    catalog: Catalog,
    step: usize,
    answers: AnswerSet,
    input: String,
    error: Option<FlowError>,
}

impl QuizFlow {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            step: 0,
            answers: AnswerSet::new(),
            input: String::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.catalog.total_steps()
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Transient input for the step currently displayed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn error(&self) -> Option<FlowError> {
        self.error
    }

    #[must_use]
    pub fn current_view(&self) -> StepView<'_> {
        match self.step {
            0 => StepView::Intro,
            1 => StepView::Interstitial,
            step => match self.catalog.question(step - LEADING_STEPS) {
                Some(question) => StepView::Question {
                    number: step - LEADING_STEPS + 1,
                    question,
                },
                // Unreachable while navigation goes through `go_to`.
                None => StepView::Intro,
            },
        }
    }

    /// Record the user's input or selection for the current step.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.error = None;
    }

    /// Resolve the intro gate. Declining aborts the flow and leaves the
    /// machine at step 0 with no answers recorded.
    pub fn answer_intro(&mut self, choice: IntroChoice) -> IntroOutcome {
        match choice {
            IntroChoice::Accept => {
                let _ = self.go_to(1);
                IntroOutcome::Advanced
            }
            IntroChoice::Decline => {
                self.step = 0;
                self.input.clear();
                IntroOutcome::Declined
            }
        }
    }

    /// Leave the interstitial for the first stored question.
    ///
    /// Completes immediately when the catalog is empty (there is nothing to
    /// ask).
    pub fn advance_from_interstitial(&mut self) -> Option<AnswerSet> {
        self.go_to(LEADING_STEPS)
    }

    /// Submit the current step.
    ///
    /// On a question step the input must be non-empty after trimming;
    /// otherwise a validation error is set and the flow does not move. On the
    /// intro/interstitial steps this simply advances.
    pub fn submit_answer(&mut self) -> Submission {
        let Some(key) = self.current_question_key() else {
            return match self.go_to(self.step + 1) {
                Some(answers) => Submission::Complete(answers),
                None => Submission::Continue,
            };
        };

        let value = self.input.trim().to_string();
        if value.is_empty() {
            self.error = Some(FlowError::AnswerRequired);
            return Submission::Rejected;
        }

        self.answers.insert(key, value);
        self.error = None;

        match self.go_to(self.step + 1) {
            Some(answers) => Submission::Complete(answers),
            None => Submission::Continue,
        }
    }

    /// Step back once. No-op at the intro gate.
    pub fn retreat(&mut self) {
        if self.step == 0 {
            return;
        }
        let _ = self.go_to(self.step - 1);
    }

    /// Navigate to an arbitrary step, clamped to `[0, total_steps]`.
    ///
    /// Returns the collected answers when the clamped target reaches
    /// `total_steps` (completion).
    pub fn jump_to(&mut self, target: usize) -> Option<AnswerSet> {
        self.go_to(target)
    }

    /// Reset to a fresh run: step 0, no answers, no input, no error.
    pub fn restart(&mut self) {
        self.step = 0;
        self.answers = AnswerSet::new();
        self.input.clear();
        self.error = None;
    }

    fn current_question_key(&self) -> Option<String> {
        if self.step < LEADING_STEPS {
            return None;
        }
        self.catalog
            .question(self.step - LEADING_STEPS)
            .map(|question| question.key().to_string())
    }

    fn go_to(&mut self, target: usize) -> Option<AnswerSet> {
        let total = self.total_steps();
        let target = target.min(total);
        if target >= total {
            // Completion: the step index stays where it is.
            return Some(self.answers.clone());
        }

        self.step = target;
        self.sync_input_for(target);
        self.error = None;
        None
    }

    /// Pre-fill the input from the answer set when landing on a previously
    /// visited question; clear it otherwise.
    fn sync_input_for(&mut self, step: usize) {
        self.input = step
            .checked_sub(LEADING_STEPS)
            .and_then(|index| self.catalog.question(index))
            .and_then(|question| self.answers.get(question.key()))
            .map_or_else(String::new, ToString::to_string);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

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

    fn flow_at_first_question() -> QuizFlow {
        let mut flow = QuizFlow::new(catalog_ab());
        assert_eq!(flow.answer_intro(IntroChoice::Accept), IntroOutcome::Advanced);
        assert!(flow.advance_from_interstitial().is_none());
        flow
    }

    #[test]
    fn declining_intro_resets_and_records_nothing() {
        let mut flow = QuizFlow::new(catalog_ab());

        let outcome = flow.answer_intro(IntroChoice::Decline);

        assert_eq!(outcome, IntroOutcome::Declined);
        assert_eq!(flow.step(), 0);
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn accepting_intro_reaches_the_interstitial() {
        let mut flow = QuizFlow::new(catalog_ab());

        flow.answer_intro(IntroChoice::Accept);

        assert_eq!(flow.step(), 1);
        assert_eq!(flow.current_view(), StepView::Interstitial);
    }

    #[test]
    fn blank_submission_sets_error_and_holds_position() {
        let mut flow = flow_at_first_question();
        flow.set_input("   ");

        let outcome = flow.submit_answer();

        assert_eq!(outcome, Submission::Rejected);
        assert_eq!(flow.step(), 2);
        assert_eq!(flow.error(), Some(FlowError::AnswerRequired));
    }

    #[test]
    fn valid_submission_clears_error_and_advances() {
        let mut flow = flow_at_first_question();
        flow.set_input("");
        assert_eq!(flow.submit_answer(), Submission::Rejected);

        flow.set_input("x");
        let outcome = flow.submit_answer();

        assert_eq!(outcome, Submission::Continue);
        assert_eq!(flow.step(), 3);
        assert_eq!(flow.error(), None);
        assert_eq!(flow.answers().get("a"), Some("x"));
    }

    #[test]
    fn final_submission_completes_with_all_answers() {
        let mut flow = flow_at_first_question();
        flow.set_input("x");
        assert_eq!(flow.submit_answer(), Submission::Continue);

        flow.set_input("y");
        let Submission::Complete(answers) = flow.submit_answer() else {
            panic!("expected completion");
        };

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("a"), Some("x"));
        assert_eq!(answers.get("b"), Some("y"));
        // Completion never moves the step index past the last question.
        assert_eq!(flow.step(), 3);
    }

    #[test]
    fn retreat_prefills_previous_answer() {
        let mut flow = flow_at_first_question();
        flow.set_input("x");
        flow.submit_answer();

        flow.retreat();

        assert_eq!(flow.step(), 2);
        assert_eq!(flow.input(), "x");
    }

    #[test]
    fn revisited_answer_is_overwritten() {
        let mut flow = flow_at_first_question();
        flow.set_input("x");
        flow.submit_answer();

        flow.retreat();
        flow.set_input("z");
        assert_eq!(flow.submit_answer(), Submission::Continue);

        assert_eq!(flow.answers().get("a"), Some("z"));
        assert_eq!(flow.step(), 3);
    }

    #[test]
    fn forward_then_backward_round_trips_input() {
        let mut flow = flow_at_first_question();
        flow.set_input("first");
        flow.submit_answer();
        flow.set_input("second");
        let _ = flow.submit_answer();

        flow.jump_to(2);
        assert_eq!(flow.input(), "first");
        flow.jump_to(3);
        assert_eq!(flow.input(), "second");
    }

    #[test]
    fn retreat_onto_interstitial_clears_input() {
        let mut flow = flow_at_first_question();
        flow.set_input("x");

        flow.retreat();

        assert_eq!(flow.step(), 1);
        assert_eq!(flow.input(), "");
    }

    #[test]
    fn retreat_at_intro_is_a_no_op() {
        let mut flow = QuizFlow::new(catalog_ab());

        flow.retreat();

        assert_eq!(flow.step(), 0);
    }

    #[test]
    fn jump_past_the_end_clamps_to_completion() {
        let mut flow = flow_at_first_question();
        flow.set_input("x");
        flow.submit_answer();

        let answers = flow.jump_to(99).expect("clamped jump completes");

        assert_eq!(answers.get("a"), Some("x"));
        assert_eq!(flow.step(), 3);
    }

    #[test]
    fn empty_catalog_completes_straight_from_the_interstitial() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let mut flow = QuizFlow::new(catalog);
        flow.answer_intro(IntroChoice::Accept);

        let answers = flow.advance_from_interstitial().expect("nothing to ask");

        assert!(answers.is_empty());
    }

    #[test]
    fn restart_wipes_the_run() {
        let mut flow = flow_at_first_question();
        flow.set_input("x");
        flow.submit_answer();

        flow.restart();

        assert_eq!(flow.step(), 0);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.input(), "");
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn stored_answers_are_trimmed() {
        let mut flow = flow_at_first_question();
        flow.set_input("  spaced  ");
        flow.submit_answer();

        assert_eq!(flow.answers().get("a"), Some("spaced"));
    }
}
