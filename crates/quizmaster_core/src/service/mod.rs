//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into quiz-level APIs.
//! - Keep the shell decoupled from storage details.

pub mod quiz_service;
