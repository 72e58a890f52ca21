//! Tour cost evaluation.

mod evaluator;

pub use evaluator::{evaluate, TourEvaluator};
