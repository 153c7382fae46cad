//! Syllable estimation
//!
//! - `estimator`: vowel-group heuristic with ordered suffix corrections
//! - `exceptions`: exact counts that override the heuristic

pub mod estimator;
pub mod exceptions;

pub use estimator::{count_syllables, SyllableEstimator};
pub use exceptions::ExceptionTable;
