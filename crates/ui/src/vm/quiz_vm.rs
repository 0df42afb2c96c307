use quiz_core::{AnswerSet, Catalog, IntroChoice, IntroOutcome, QuizFlow, StepView, Submission};

/// User actions the quiz view can dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Intro(IntroChoice),
    LeaveInterstitial,
    BackToIntro,
    SetInput(String),
    Submit,
    Back,
}

/// What the host should do after an intent was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    /// The user declined the intro gate; show a notice.
    Declined,
    /// The flow finished; the values are ready for the summary endpoint,
    /// in catalog order.
    Completed(Vec<String>),
}

/// View-model over the flow state machine: applies intents and derives the
/// presentation values the quiz view renders.
pub struct QuizVm {
    flow: QuizFlow,
}

impl QuizVm {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            flow: QuizFlow::new(catalog),
        }
    }

    #[must_use]
    pub fn flow(&self) -> &QuizFlow {
        &self.flow
    }

    pub fn apply(&mut self, intent: QuizIntent) -> QuizOutcome {
        match intent {
            QuizIntent::Intro(choice) => match self.flow.answer_intro(choice) {
                IntroOutcome::Advanced => QuizOutcome::Continue,
                IntroOutcome::Declined => QuizOutcome::Declined,
            },
            QuizIntent::LeaveInterstitial => {
                let completed = self.flow.advance_from_interstitial();
                self.completion(completed)
            }
            QuizIntent::BackToIntro => {
                let _ = self.flow.jump_to(0);
                QuizOutcome::Continue
            }
            QuizIntent::SetInput(value) => {
                self.flow.set_input(value);
                QuizOutcome::Continue
            }
            QuizIntent::Submit => match self.flow.submit_answer() {
                Submission::Complete(answers) => self.completion(Some(answers)),
                Submission::Continue | Submission::Rejected => QuizOutcome::Continue,
            },
            QuizIntent::Back => {
                self.flow.retreat();
                QuizOutcome::Continue
            }
        }
    }

    fn completion(&self, answers: Option<AnswerSet>) -> QuizOutcome {
        match answers {
            Some(answers) => {
                QuizOutcome::Completed(answers.ordered_values(self.flow.catalog()))
            }
            None => QuizOutcome::Continue,
        }
    }

    /// Percent of the walk covered by the current step, as the progress bar
    /// shows it.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let total = self.flow.total_steps();
        let safe_step = self.flow.step().min(total - 1);
        let ratio = (safe_step + 1) as f64 / total as f64;
        (ratio * 100.0).round() as u32
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.flow.catalog().len()
    }

    /// Label of the forward button: the last question builds the plan.
    #[must_use]
    pub fn next_label(&self) -> &'static str {
        match self.flow.current_view() {
            StepView::Question { number, .. } if number == self.question_count() => {
                "Build My Plan"
            }
            _ => "Next",
        }
    }

    /// User-facing copy for the pending validation error, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.flow.error()?;
        let is_choice = matches!(
            self.flow.current_view(),
            StepView::Question { question, .. } if question.is_choice()
        );
        Some(if is_choice {
            "Please choose the option that fits you best."
        } else {
            "Please write a short answer before continuing."
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::Question;

    fn vm_ab() -> QuizVm {
        let catalog = Catalog::new(vec![
            Question::choice("a", "Question A", ["x", "z"]).unwrap(),
            Question::free_text("b", "Question B").unwrap(),
        ])
        .unwrap();
        QuizVm::new(catalog)
    }

    #[test]
    fn progress_tracks_the_walk() {
        let mut vm = vm_ab();
        // 4 total steps: intro, interstitial, two questions.
        assert_eq!(vm.progress_percent(), 25);

        vm.apply(QuizIntent::Intro(IntroChoice::Accept));
        assert_eq!(vm.progress_percent(), 50);

        vm.apply(QuizIntent::LeaveInterstitial);
        assert_eq!(vm.progress_percent(), 75);
    }

    #[test]
    fn next_label_changes_on_the_last_question() {
        let mut vm = vm_ab();
        vm.apply(QuizIntent::Intro(IntroChoice::Accept));
        vm.apply(QuizIntent::LeaveInterstitial);
        assert_eq!(vm.next_label(), "Next");

        vm.apply(QuizIntent::SetInput("x".to_string()));
        vm.apply(QuizIntent::Submit);
        assert_eq!(vm.next_label(), "Build My Plan");
    }

    #[test]
    fn completion_reports_values_in_catalog_order() {
        let mut vm = vm_ab();
        vm.apply(QuizIntent::Intro(IntroChoice::Accept));
        vm.apply(QuizIntent::LeaveInterstitial);
        vm.apply(QuizIntent::SetInput("x".to_string()));
        vm.apply(QuizIntent::Submit);
        vm.apply(QuizIntent::SetInput("y".to_string()));

        let outcome = vm.apply(QuizIntent::Submit);

        assert_eq!(
            outcome,
            QuizOutcome::Completed(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn declining_reports_the_notice_outcome() {
        let mut vm = vm_ab();
        let outcome = vm.apply(QuizIntent::Intro(IntroChoice::Decline));
        assert_eq!(outcome, QuizOutcome::Declined);
        assert_eq!(vm.flow().step(), 0);
    }

    #[test]
    fn error_copy_matches_question_kind() {
        let mut vm = vm_ab();
        vm.apply(QuizIntent::Intro(IntroChoice::Accept));
        vm.apply(QuizIntent::LeaveInterstitial);

        vm.apply(QuizIntent::Submit);
        assert_eq!(
            vm.error_message(),
            Some("Please choose the option that fits you best.")
        );

        vm.apply(QuizIntent::SetInput("x".to_string()));
        vm.apply(QuizIntent::Submit);
        vm.apply(QuizIntent::Submit);
        assert_eq!(
            vm.error_message(),
            Some("Please write a short answer before continuing.")
        );
    }

    #[test]
    fn back_to_intro_returns_from_the_interstitial() {
        let mut vm = vm_ab();
        vm.apply(QuizIntent::Intro(IntroChoice::Accept));

        vm.apply(QuizIntent::BackToIntro);

        assert_eq!(vm.flow().step(), 0);
    }
}
