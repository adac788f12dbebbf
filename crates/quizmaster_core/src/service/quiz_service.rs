//! Quiz use-case service.
//!
//! # Responsibility
//! - Provide question CRUD entry points for the shell.
//! - Undo the command-line quoting convention on stored text.
//! - Grade submitted answers.
//!
//! # Invariants
//! - Service APIs never bypass repository existence/uniqueness checks.
//! - Answers compare equal only after number-word folding on both sides;
//!   comparison is otherwise exact and case-sensitive.

use crate::model::question::{Question, QuestionId};
use crate::repo::question_repo::{QuestionRepository, RepoResult};
use crate::textinput::recognize_numbers;
use log::debug;

/// Quiz operations exposed to front-ends such as the shell.
pub trait QuizApi {
    fn get_question(&self, id: QuestionId) -> RepoResult<Question>;
    fn list_questions(&self) -> RepoResult<Vec<Question>>;
    /// Stores a new question and returns the record as stored.
    fn create_question(&self, question: Question) -> RepoResult<Question>;
    /// Replaces an existing question and returns the record as stored.
    fn update_question(&self, question: Question) -> RepoResult<Question>;
    fn delete_question(&self, id: QuestionId) -> RepoResult<()>;
    /// Returns whether `answer` is correct for question `id`.
    fn answer_question(&self, id: QuestionId, answer: &str) -> RepoResult<bool>;
}

/// Use-case service wrapper for quiz operations.
pub struct QuizService<R: QuestionRepository> {
    repo: R,
}

impl<R: QuestionRepository> QuizService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: QuestionRepository> QuizApi for QuizService<R> {
    fn get_question(&self, id: QuestionId) -> RepoResult<Question> {
        self.repo.get_question(id)
    }

    fn list_questions(&self) -> RepoResult<Vec<Question>> {
        self.repo.list_questions()
    }

    /// Strips one layer of surrounding quotes from both texts first.
    fn create_question(&self, question: Question) -> RepoResult<Question> {
        let question = unquote(question);
        self.repo.create_question(&question)?;
        Ok(question)
    }

    /// Quoting is handled as in `create_question`; repository-level
    /// not-found errors are returned unchanged.
    fn update_question(&self, question: Question) -> RepoResult<Question> {
        let question = unquote(question);
        self.repo.update_question(&question)?;
        Ok(question)
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        self.repo.delete_question(id)
    }

    /// # Contract
    /// - Surrounding quotes on `answer` are ignored.
    /// - `seven` and `7` are equivalent; `Paris` and `paris` are not.
    fn answer_question(&self, id: QuestionId, answer: &str) -> RepoResult<bool> {
        let question = self.repo.get_question(id)?;
        let expected = recognize_numbers(&question.answer);
        let submitted = recognize_numbers(strip_surrounding_quotes(answer));
        let correct = expected == submitted;
        debug!("event=question_answer module=service status=ok id={id} correct={correct}");
        Ok(correct)
    }
}

/// Removes one leading and one trailing `"` when present.
pub fn strip_surrounding_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

fn unquote(question: Question) -> Question {
    Question {
        question: strip_surrounding_quotes(&question.question).to_string(),
        answer: strip_surrounding_quotes(&question.answer).to_string(),
        ..question
    }
}
