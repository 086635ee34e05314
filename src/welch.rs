// Welch's unequal-variance t-test

use crate::errors::{DomainError, Result, Sample};
use crate::stats::SampleStatistics;
use log::{debug, warn};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Full report of a single Welch's t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WelchTTest {
  pub first: SampleStatistics,
  pub second: SampleStatistics,
  pub t_statistic: f64,
  pub degrees_of_freedom: f64,
  pub p_value: f64,
}

impl WelchTTest {
  /// Confidence, in percent, that the two population means differ.
  pub fn confidence(&self) -> f64 {
    (1.0 - self.p_value) * 100.0
  }
}

/// Run Welch's t-test on two samples and return the two-tailed result.
///
/// Both samples need at least two observations and every observation must be
/// finite. All validation happens up front, so a failure always names the
/// offending sample.
///
/// The statistics are computed on both samples divided by a common power of
/// two, so the result does not depend on the magnitude of the observations.
/// The reported `SampleStatistics` are in the original units and saturate to
/// infinity for observations beyond roughly `1e154`.
pub fn welch_t_test(sample1: &[f64], sample2: &[f64]) -> Result<WelchTTest> {
  validate(sample1, Sample::First)?;
  validate(sample2, Sample::Second)?;

  let scale = common_scale(sample1, sample2);
  let first = SampleStatistics::from_scaled_observations(sample1, scale)?;
  let second = SampleStatistics::from_scaled_observations(sample2, scale)?;
  debug!("scale: {}, first sample: {:?}, second sample: {:?}", scale, first, second);

  for stats in [&first, &second].iter() {
    if !stats.mean.is_finite() {
      return Err(DomainError::NonFiniteStatistic("sample mean"));
    }
    if !stats.variance.is_finite() {
      return Err(DomainError::NonFiniteStatistic("sample variance"));
    }
  }

  if first.variance == 0.0 && second.variance == 0.0 {
    warn!(
      "both samples have zero variance (means {} and {})",
      first.mean * scale,
      second.mean * scale
    );
  }

  let t = t_statistic(
    first.mean,
    second.mean,
    first.n,
    second.n,
    first.variance,
    second.variance,
  )?;
  let dof = degrees_of_freedom(first.variance, second.variance, first.n, second.n)?;
  let p_value = two_tailed_p_value(t, dof)?;
  debug!("t-value: {}, degrees of freedom: {}, p-value: {}", t, dof, p_value);

  Ok(WelchTTest {
    first: first.rescaled(scale),
    second: second.rescaled(scale),
    t_statistic: t,
    degrees_of_freedom: dof,
    p_value,
  })
}

// Power of two near the largest magnitude in either sample. Dividing by it is
// exact and brings every observation into [-4, 4].
fn common_scale(sample1: &[f64], sample2: &[f64]) -> f64 {
  let largest = sample1
    .iter()
    .chain(sample2.iter())
    .fold(0.0f64, |largest, x| largest.max(x.abs()));

  if largest == 0.0 {
    return 1.0;
  }

  let exponent = (largest.log2().floor() as i32).max(-1022).min(1023);
  2.0f64.powi(exponent)
}

fn validate(observations: &[f64], sample: Sample) -> Result<()> {
  if observations.len() < 2 {
    return Err(DomainError::SampleTooSmall {
      sample,
      len: observations.len(),
    });
  }

  if let Some((index, &value)) = observations.iter().enumerate().find(|(_, x)| !x.is_finite()) {
    return Err(DomainError::NonFiniteObservation {
      sample,
      index,
      value,
    });
  }

  Ok(())
}

/// Welch–Satterthwaite approximation of the degrees of freedom.
///
/// `s1` and `s2` are unbiased sample variances, `n1` and `n2` the sample sizes.
/// The result is generally not an integer.
pub fn degrees_of_freedom(s1: f64, s2: f64, n1: usize, n2: usize) -> Result<f64> {
  for &n in [n1, n2].iter() {
    if n < 2 {
      return Err(DomainError::TooFewObservations(n));
    }
  }

  let v1 = s1 / n1 as f64;
  let v2 = s2 / n2 as f64;

  if v1 == 0.0 && v2 == 0.0 {
    return Err(DomainError::ZeroVariance);
  }

  // Divide through by the larger term so nothing is squared at full magnitude.
  let larger = v1.max(v2);
  let r1 = v1 / larger;
  let r2 = v2 / larger;

  let numerator = (r1 + r2).powi(2);
  let denominator = r1.powi(2) / (n1 - 1) as f64 + r2.powi(2) / (n2 - 1) as f64;

  let dof = numerator / denominator;
  if !dof.is_finite() {
    return Err(DomainError::NonFiniteStatistic("degrees of freedom"));
  }

  Ok(dof)
}

/// Difference of means scaled by the unpooled standard error.
pub fn t_statistic(mean1: f64, mean2: f64, n1: usize, n2: usize, s1: f64, s2: f64) -> Result<f64> {
  for &n in [n1, n2].iter() {
    if n < 2 {
      return Err(DomainError::TooFewObservations(n));
    }
  }

  let squared_error = s1 / n1 as f64 + s2 / n2 as f64;

  // Undefined even when mean1 == mean2.
  if squared_error == 0.0 {
    return Err(DomainError::ZeroStandardError);
  }

  let t = (mean1 - mean2) / squared_error.sqrt();
  if !t.is_finite() {
    return Err(DomainError::NonFiniteStatistic("t-statistic"));
  }

  Ok(t)
}

/// Two-tailed p-value, `2 * P(T >= |t|)`, for `T` following Student's t
/// distribution with `dof` degrees of freedom. `dof` may be fractional.
pub fn two_tailed_p_value(t: f64, dof: f64) -> Result<f64> {
  if t.is_nan() {
    return Err(DomainError::NonFiniteStatistic("t-statistic"));
  }

  let distribution = StudentsT::new(0.0, 1.0, dof)?;

  if t.is_infinite() {
    return Ok(0.0);
  }

  let p = 2.0 * distribution.sf(t.abs());

  Ok(p.clamp(0.0, 1.0))
}
