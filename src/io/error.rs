//! Error types and context management for simulation operations

use std::fmt;

use crate::spatial::region::RegionId;

/// Main error type for all simulation operations
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    /// A single construction parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Parameters are individually valid but inconsistent with each other
    ///
    /// Raised for region layouts whose areas differ and for targets
    /// placed outside the region they name.
    InvalidConfiguration {
        /// Description of the inconsistency
        reason: String,
    },

    /// An action was sent to a session that can no longer accept it
    SessionFinished {
        /// Rounds completed before the session ended
        rounds: usize,
        /// Terminal state the session is in
        state: &'static str,
    },

    /// A region identifier outside 1..=3
    InvalidRegion {
        /// The rejected identifier
        number: u8,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Writing a report or installing the log subscriber failed
    Output {
        /// What was being written or installed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failure while running a search round, annotated with its position in the session
    Round {
        /// Round in which the failure occurred
        round: usize,
        /// Region being searched, if any
        region: Option<RegionId>,
        /// Underlying failure
        source: Box<AlgorithmError>,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidConfiguration { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::SessionFinished { rounds, state } => {
                write!(
                    f,
                    "Session already {state} after {rounds} round(s); restart to search again"
                )
            }
            Self::InvalidRegion { number } => {
                write!(f, "Region {number} does not exist (expected 1, 2 or 3)")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Output { operation, reason } => {
                write!(f, "Output error during {operation}: {reason}")
            }
            Self::Round {
                round,
                region,
                source,
            } => match region {
                Some(region) => write!(f, "Round {round}, area {region}: {source}"),
                None => write!(f, "Round {round}: {source}"),
            },
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Round { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorContext {
    /// Session round being executed
    pub round: Option<usize>,
    /// Region being searched
    pub region: Option<RegionId>,
}

/// Enriches error messages with session state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the round number
    ///
    /// # Errors
    ///
    /// Propagates the original error with the round context applied
    fn with_round(self, round: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let error = e.into();
            // Usage errors already describe the session state
            match (context.round, &error) {
                (_, AlgorithmError::SessionFinished { .. } | AlgorithmError::Round { .. })
                | (None, _) => error,
                (Some(round), _) => AlgorithmError::Round {
                    round,
                    region: context.region,
                    source: Box::new(error),
                },
            }
        })
    }

    fn with_round(self, round: usize) -> Result<T> {
        self.with_context(ErrorContext {
            round: Some(round),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "write",
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidConfiguration {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
