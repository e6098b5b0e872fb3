use crate::model::MetricSample;
use crate::stats::{StatError, TTestResult, VarianceModel, ttest_ind};

const ALPHA: f64 = 0.05;

#[derive(Debug)]
pub struct Comparison {
    pub label: String,
    pub result: TTestResult,
}

#[derive(Debug)]
pub struct Stage2Output {
    pub comparisons: Vec<Comparison>,
}

/// Run the pooled t-test over every unordered pair, in declaration order.
pub fn run_stage2(samples: &[MetricSample]) -> Result<Stage2Output, StatError> {
    let mut comparisons = Vec::new();
    for i in 0..samples.len() {
        for j in (i + 1)..samples.len() {
            let left = &samples[i];
            let right = &samples[j];
            let result = ttest_ind(&left.values, &right.values, VarianceModel::Pooled)?;
            let label = format!("{} vs {}", left.label, right.label);
            tracing::debug!(
                "{label}: t={} p={} df={} significant_at_{ALPHA}={}",
                result.statistic,
                result.p_value,
                result.df,
                result.p_value < ALPHA
            );
            comparisons.push(Comparison { label, result });
        }
    }
    Ok(Stage2Output { comparisons })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixed_samples;

    #[test]
    fn test_three_samples_yield_three_labeled_comparisons() {
        let samples = fixed_samples();
        let out = run_stage2(&samples).unwrap();
        let labels = out
            .comparisons
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "Model 1 vs Model 2",
                "Model 1 vs Model 3",
                "Model 2 vs Model 3"
            ]
        );
    }

    #[test]
    fn test_comparison_statistics_match_fixed_samples() {
        let samples = fixed_samples();
        let out = run_stage2(&samples).unwrap();
        let expected = [
            (0.06013991543421168, 0.957513057417522),
            (1.4006186057023167, 0.296316580274899),
            (1.4267244774424117, 0.2897861506373152),
        ];
        for (comparison, (t, p)) in out.comparisons.iter().zip(expected) {
            assert!((comparison.result.statistic - t).abs() < 1e-12);
            assert!((comparison.result.p_value - p).abs() < 1e-9);
        }
    }

    #[test]
    fn test_two_samples_yield_single_pair() {
        let samples = fixed_samples();
        let out = run_stage2(&samples[1..]).unwrap();
        assert_eq!(out.comparisons.len(), 1);
        assert_eq!(out.comparisons[0].label, "Model 2 vs Model 3");
    }
}
