mod quiz_vm;

pub use quiz_vm::{QuizIntent, QuizOutcome, QuizVm};
