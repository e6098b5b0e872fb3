pub mod samples;

pub use samples::{Algo, MetricSample, fixed_samples};
