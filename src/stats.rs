// Per-sample statistics: mean and unbiased variance

use crate::errors::{DomainError, Result};
use statrs::statistics::Statistics;

/// Summary of one sample, computed once per test invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
  pub mean: f64,
  pub variance: f64,
  pub n: usize,
}

impl SampleStatistics {
  /// Mean and unbiased variance of `observations`, which must hold at least two values.
  pub fn from_observations(observations: &[f64]) -> Result<Self> {
    let mean = mean(observations)?;
    let variance = unbiased_variance(observations, mean)?;

    Ok(SampleStatistics {
      mean,
      variance,
      n: observations.len(),
    })
  }

  /// Like `from_observations`, but for every observation divided by `divisor`.
  /// The scaled values are never stored.
  pub fn from_scaled_observations(observations: &[f64], divisor: f64) -> Result<Self> {
    let n = observations.len();
    if n == 0 {
      return Err(DomainError::EmptySample);
    }
    if n < 2 {
      return Err(DomainError::TooFewObservations(n));
    }

    let scaled = || observations.iter().map(move |x| x / divisor);
    let mean = scaled().mean();
    let sum_of_squares: f64 = scaled().map(|x| (x - mean).powi(2)).sum();

    Ok(SampleStatistics {
      mean,
      variance: sum_of_squares / (n - 1) as f64,
      n,
    })
  }

  /// Statistics of the same sample with every observation multiplied by `factor`.
  pub fn rescaled(&self, factor: f64) -> Self {
    SampleStatistics {
      mean: self.mean * factor,
      variance: self.variance * factor * factor,
      n: self.n,
    }
  }

  /// Squared standard error of the mean, `variance / n`.
  pub fn variance_of_mean(&self) -> f64 {
    self.variance / self.n as f64
  }
}

pub fn mean(observations: &[f64]) -> Result<f64> {
  if observations.is_empty() {
    return Err(DomainError::EmptySample);
  }

  Ok(observations.iter().mean())
}

/// Sample variance with Bessel's correction: `sum((x - mean)^2) / (n - 1)`.
///
/// NaN or infinite observations are not rejected here and propagate into the result.
pub fn unbiased_variance(observations: &[f64], mean: f64) -> Result<f64> {
  let n = observations.len();
  if n < 2 {
    return Err(DomainError::TooFewObservations(n));
  }

  let sum_of_squares: f64 = observations.iter().map(|x| (x - mean).powi(2)).sum();

  Ok(sum_of_squares / (n - 1) as f64)
}
