#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod flow;
pub mod model;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use flow::{FlowError, IntroChoice, IntroOutcome, QuizFlow, StepView, Submission};
pub use model::{AnswerSet, Question, QuestionError};
