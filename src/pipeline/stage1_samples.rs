use thiserror::Error;

use crate::model::{Algo, MetricSample, fixed_samples};

#[derive(Debug)]
pub struct Stage1Output {
    pub samples: Vec<MetricSample>,
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("need at least two models to compare, selection matched {0}")]
    TooFewModels(usize),
}

/// Assemble the fixed samples, restricted to `selection` when non-empty.
pub fn run_stage1(selection: &[Algo]) -> Result<Stage1Output, SelectionError> {
    let samples = fixed_samples()
        .into_iter()
        .filter(|s| selection.is_empty() || selection.contains(&s.algo))
        .collect::<Vec<_>>();

    if samples.len() < 2 {
        return Err(SelectionError::TooFewModels(samples.len()));
    }

    for sample in &samples {
        tracing::debug!(
            "{} ({}): accuracy={} f_measure={}",
            sample.label,
            sample.algo.label(),
            sample.accuracy(),
            sample.f_measure()
        );
    }
    tracing::info!("comparing {} models pairwise", samples.len());

    Ok(Stage1Output { samples })
}
