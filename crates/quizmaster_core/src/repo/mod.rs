//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the question data access contract used by services.
//! - Isolate storage and locking details from orchestration.
//!
//! # Invariants
//! - At most one question per ID is stored at any time.
//! - Repository APIs return semantic errors (`NotFound`, `AlreadyExists`).

pub mod question_repo;
