use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::stats::StatError;
use crate::stats::describe::{mean, sample_variance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceModel {
    /// Pooled equal-variance Student's t; n1 + n2 - 2 degrees of freedom.
    Pooled,
    /// Welch unequal-variance t with Welch-Satterthwaite degrees of freedom.
    Welch,
}

#[derive(Debug, Clone, Copy)]
pub struct TTestResult {
    pub statistic: f64,
    pub p_value: f64,
    pub df: f64,
}

/// Independent two-sample t-test over two numeric sequences.
///
/// Errors on an empty sample. Degenerate inputs (zero pooled variance, or
/// zero degrees of freedom from single-element samples) yield NaN or
/// infinite statistics with the matching degenerate p-value.
pub fn ttest_ind(a: &[f64], b: &[f64], model: VarianceModel) -> Result<TTestResult, StatError> {
    if a.is_empty() {
        return Err(StatError::InvalidInput("left sample is empty".to_string()));
    }
    if b.is_empty() {
        return Err(StatError::InvalidInput("right sample is empty".to_string()));
    }

    let na = a.len() as f64;
    let nb = b.len() as f64;
    let ma = mean(a);
    let mb = mean(b);
    let va = sample_variance(a);
    let vb = sample_variance(b);

    let (se, df) = match model {
        VarianceModel::Pooled => {
            let df = na + nb - 2.0;
            let sp2 = ((na - 1.0) * va + (nb - 1.0) * vb) / df;
            ((sp2 * (1.0 / na + 1.0 / nb)).sqrt(), df)
        }
        VarianceModel::Welch => {
            let qa = va / na;
            let qb = vb / nb;
            let df = (qa + qb) * (qa + qb) / (qa * qa / (na - 1.0) + qb * qb / (nb - 1.0));
            ((qa + qb).sqrt(), df)
        }
    };

    let statistic = (ma - mb) / se;

    Ok(TTestResult {
        statistic,
        p_value: two_sided_p(statistic, df),
        df,
    })
}

fn two_sided_p(statistic: f64, df: f64) -> f64 {
    if statistic.is_nan() || !(df > 0.0) {
        return f64::NAN;
    }
    if statistic.is_infinite() {
        return 0.0;
    }
    let dist = match StudentsT::new(0.0, 1.0, df) {
        Ok(d) => d,
        Err(_) => return f64::NAN,
    };
    2.0 * dist.cdf(-statistic.abs())
}
