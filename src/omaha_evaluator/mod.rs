mod evaluator;

pub use evaluator::{eval7, eval8, eval9, OmahaEvaluator};
