//! Text input helpers for command parsing and answer comparison.
//!
//! # Responsibility
//! - Split raw command lines into arguments with double-quote awareness.
//! - Fold spelled-out numbers (`zero`..`ten`) into digits.
//!
//! # Invariants
//! - Splitting never fails; unmatched quotes extend to the end of input.
//! - Normalization preserves every non-number character verbatim.

mod number;
mod split;

pub use number::recognize_numbers;
pub use split::{split, split_with_options};
