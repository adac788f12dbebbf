//! Core domain logic for Quiz Master.
//! This crate owns question storage, answer grading and command-line
//! tokenization.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod textinput;

pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::question::{Question, QuestionId};
pub use repo::question_repo::{
    InMemoryQuestionRepository, QuestionRepository, RepoError, RepoResult,
};
pub use service::quiz_service::{strip_surrounding_quotes, QuizApi, QuizService};
