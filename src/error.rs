//! Error taxonomy.
//!
//! All errors are structural input errors detected during setup, before any
//! sweep executes. Once a read starts it cannot fail: the Metropolis math is
//! defined for all finite inputs, so either the full run result is produced
//! or the run is rejected as a unit.

/// The model arrays do not describe a well-formed Ising problem.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("h has {got} entries but {expected} variables were declared")]
    LinearLengthMismatch { expected: usize, got: usize },

    #[error("coupler ({u}, {v}) references a variable outside 0..{n}")]
    CouplerOutOfRange { u: usize, v: usize, n: usize },

    #[error("coupler ({v}, {v}) couples a variable to itself")]
    SelfCoupler { v: usize },

    #[error("coupler ({u}, {v}) appears more than once")]
    DuplicateCoupler { u: usize, v: usize },

    #[error("coupler arrays disagree in length: {starts} starts, {ends} ends, {weights} weights")]
    CouplerArrayMismatch {
        starts: usize,
        ends: usize,
        weights: usize,
    },
}

/// The beta schedule (or sweep count) cannot drive an annealing run.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("beta schedule is empty")]
    Empty,

    #[error("beta at schedule position {index} is {beta}, expected > 0")]
    NonPositiveBeta { index: usize, beta: f64 },

    #[error("sweeps_per_beta must be at least 1")]
    NonPositiveSweeps,
}

/// The run request itself is malformed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("num_reads must be at least 1")]
    NonPositiveReads,
}

/// Any error an annealing run can be rejected with.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AnnealError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ShapeError::CouplerOutOfRange { u: 0, v: 7, n: 5 };
        assert_eq!(e.to_string(), "coupler (0, 7) references a variable outside 0..5");

        let e = ScheduleError::NonPositiveBeta { index: 2, beta: -0.5 };
        assert_eq!(e.to_string(), "beta at schedule position 2 is -0.5, expected > 0");
    }

    #[test]
    fn test_transparent_wrapping() {
        let e: AnnealError = RequestError::NonPositiveReads.into();
        assert_eq!(e.to_string(), "num_reads must be at least 1");
        assert!(matches!(e, AnnealError::Request(_)));
    }
}
