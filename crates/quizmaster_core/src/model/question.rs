//! Question domain model.
//!
//! # Invariants
//! - `id` is supplied externally and acts as the primary key.
//! - No implicit ID allocation exists; collisions are the caller's concern.

use serde::{Deserialize, Serialize};

/// Caller-supplied question identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type QuestionId = i64;

/// One trivia question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Primary key, unique within one repository.
    pub id: QuestionId,
    /// Question text as shown to the player.
    pub question: String,
    /// Expected answer, compared after number-word normalization.
    pub answer: String,
}

impl Question {
    /// Creates a question record with the given identity.
    pub fn new(id: QuestionId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }
}
