//! Pairwise t-test significance analysis of classifier evaluation metrics.
//!
//! Three fixed model samples (accuracy, F-measure) are compared with an
//! independent two-sample t-test over every unordered pair; the binary
//! prints one labeled block per comparison.

pub mod cli;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;
