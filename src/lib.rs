//! Two-tailed p-values for Welch's two-sample t-test.
//!
//! ```
//! let p = welch::t_test(&[5.0, 7.0, 5.0, 3.0], &[8.0, 1.0, 4.0, 6.0]).unwrap();
//! assert!(p > 0.05);
//! ```

pub mod errors;
pub mod stats;
pub mod welch;

pub use crate::errors::{DomainError, Result, Sample};
pub use crate::stats::{mean, unbiased_variance, SampleStatistics};
pub use crate::welch::{
  degrees_of_freedom, t_statistic, two_tailed_p_value, welch_t_test, WelchTTest,
};

/// Two-tailed p-value of a t-test with unequal variances for two samples.
///
/// Shorthand for `welch_t_test(sample1, sample2)?.p_value`. The result is
/// always in `[0, 1]`.
pub fn t_test(sample1: &[f64], sample2: &[f64]) -> Result<f64> {
  Ok(welch_t_test(sample1, sample2)?.p_value)
}
