mod answer;
mod question;

pub use answer::AnswerSet;
pub use question::{Question, QuestionError};
