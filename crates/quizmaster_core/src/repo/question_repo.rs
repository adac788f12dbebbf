//! Question repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the process-wide question set.
//! - Keep lock handling inside the storage boundary.
//!
//! # Invariants
//! - Listing preserves insertion order; updates keep a record's position.
//! - Every write performs its lookup and mutation under one write guard.
//! - Failed writes leave the stored set untouched.

use crate::model::question::{Question, QuestionId};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for question storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(QuestionId),
    AlreadyExists(QuestionId),
    /// A writer panicked while holding the store lock.
    LockPoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(_) => write!(f, "question not found"),
            Self::AlreadyExists(_) => write!(f, "question already exists"),
            Self::LockPoisoned => write!(f, "question store is unavailable"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for question CRUD operations.
pub trait QuestionRepository {
    fn get_question(&self, id: QuestionId) -> RepoResult<Question>;
    fn list_questions(&self) -> RepoResult<Vec<Question>>;
    fn create_question(&self, question: &Question) -> RepoResult<()>;
    fn update_question(&self, question: &Question) -> RepoResult<()>;
    fn delete_question(&self, id: QuestionId) -> RepoResult<()>;
}

/// Lock-guarded, insertion-ordered question store.
///
/// Readers share the lock; writers hold it exclusively.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Vec<Question>>> {
        self.questions.read().map_err(|_| {
            warn!("event=store_lock module=repo status=error mode=read");
            RepoError::LockPoisoned
        })
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Vec<Question>>> {
        self.questions.write().map_err(|_| {
            warn!("event=store_lock module=repo status=error mode=write");
            RepoError::LockPoisoned
        })
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn get_question(&self, id: QuestionId) -> RepoResult<Question> {
        let questions = self.read()?;
        questions
            .iter()
            .find(|question| question.id == id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    fn list_questions(&self) -> RepoResult<Vec<Question>> {
        Ok(self.read()?.clone())
    }

    fn create_question(&self, question: &Question) -> RepoResult<()> {
        let mut questions = self.write()?;
        if questions.iter().any(|stored| stored.id == question.id) {
            debug!(
                "event=question_create module=repo status=error reason=already_exists id={}",
                question.id
            );
            return Err(RepoError::AlreadyExists(question.id));
        }

        questions.push(question.clone());
        debug!(
            "event=question_create module=repo status=ok id={} total={}",
            question.id,
            questions.len()
        );
        Ok(())
    }

    fn update_question(&self, question: &Question) -> RepoResult<()> {
        let mut questions = self.write()?;
        let Some(stored) = questions.iter_mut().find(|stored| stored.id == question.id) else {
            debug!(
                "event=question_update module=repo status=error reason=not_found id={}",
                question.id
            );
            return Err(RepoError::NotFound(question.id));
        };

        *stored = question.clone();
        debug!("event=question_update module=repo status=ok id={}", question.id);
        Ok(())
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        let mut questions = self.write()?;
        let Some(index) = questions.iter().position(|stored| stored.id == id) else {
            debug!("event=question_delete module=repo status=error reason=not_found id={id}");
            return Err(RepoError::NotFound(id));
        };

        questions.remove(index);
        debug!(
            "event=question_delete module=repo status=ok id={id} total={}",
            questions.len()
        );
        Ok(())
    }
}
