//! Closed-loop tour length evaluation.

mod evaluator;

pub use evaluator::{tour_length, tour_length_str};
