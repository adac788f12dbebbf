//! Domain model for quiz questions.
//!
//! # Responsibility
//! - Define the canonical question record shared by store, service and shell.
//!
//! # Invariants
//! - Every question is identified by a caller-chosen `QuestionId`.
//! - Records are owned by the repository; callers work on copies.

pub mod question;
