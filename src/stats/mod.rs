use thiserror::Error;

pub mod describe;
pub mod ttest;

pub use describe::{mean, sample_variance};
pub use ttest::{TTestResult, VarianceModel, ttest_ind};

#[derive(Debug, Error)]
pub enum StatError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
