//! Password strength classification.
//!
//! A coarse structural heuristic, not an entropy estimate. The scoring
//! rules and tier thresholds are fixed; callers display the tier, they
//! do not tune it.

mod classifier;

pub use classifier::{classify, score, StrengthTier};
