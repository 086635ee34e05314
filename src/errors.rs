// DomainError: every way a Welch t-test can refuse its input

use failure::*;
use statrs::StatsError;
use std::fmt;

pub type Result<T> = std::result::Result<T, DomainError>;

/// Which of the two samples under test an error refers to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Sample {
  First,
  Second,
}

impl fmt::Display for Sample {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Sample::First => write!(f, "first"),
      Sample::Second => write!(f, "second"),
    }
  }
}

#[derive(Debug, Fail)]
pub enum DomainError {
  #[fail(
    display = "sample size must be at least 2: {} sample has {} observations",
    sample, len
  )]
  SampleTooSmall { sample: Sample, len: usize },

  #[fail(
    display = "{} sample contains non-finite observation {} at index {}",
    sample, value, index
  )]
  NonFiniteObservation {
    sample: Sample,
    index: usize,
    value: f64,
  },

  #[fail(display = "sample size must be at least 2, got {}", _0)]
  TooFewObservations(usize),

  #[fail(display = "mean is undefined for an empty sample")]
  EmptySample,

  #[fail(display = "degrees of freedom undefined for zero-variance samples")]
  ZeroVariance,

  #[fail(display = "zero pooled standard error")]
  ZeroStandardError,

  #[fail(display = "{} is not finite, observations are too large in magnitude", _0)]
  NonFiniteStatistic(&'static str),

  #[fail(display = "student's t distribution error: {}", _0)]
  Distribution(StatsError),
}

impl From<StatsError> for DomainError {
  fn from(error: StatsError) -> Self {
    DomainError::Distribution(error)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_names_the_failing_sample() {
    let err = DomainError::SampleTooSmall {
      sample: Sample::Second,
      len: 1,
    };
    assert_eq!(
      err.to_string(),
      "sample size must be at least 2: second sample has 1 observations"
    );

    let err = DomainError::NonFiniteObservation {
      sample: Sample::First,
      index: 3,
      value: std::f64::NAN,
    };
    assert_eq!(
      err.to_string(),
      "first sample contains non-finite observation NaN at index 3"
    );
  }

  #[test]
  fn stats_errors_convert() {
    let err: DomainError = StatsError::BadParams.into();
    match err {
      DomainError::Distribution(StatsError::BadParams) => {}
      other => panic!("unexpected error: {:?}", other),
    }
  }
}
