use thiserror::Error;

/// Unified error type for `wagebargain` operations.
///
/// Planning itself never fails: infeasible economics are reported inside the
/// returned [`NegotiationPlan`](crate::plan::NegotiationPlan). These variants
/// cover the opt-in validation helpers and the analysis utilities.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BargainError {
    /// Raised when a policy identifier is parsed strictly and is not in the table.
    #[error("unknown policy identifier `{id}`")]
    UnknownPolicy { id: String },

    /// Raised when the economic constants break one of their ordering invariants.
    #[error("economic constants are inconsistent: {reason}")]
    InvalidConstants { reason: &'static str },

    /// Raised when an interval collapses and a utility function would divide by zero.
    #[error("{context} is degenerate: lower bound {low} must be strictly below upper bound {high}")]
    DegenerateInterval {
        /// Which utility span collapsed.
        context: &'static str,
        /// The value expected to be the smaller endpoint.
        low: f64,
        /// The value expected to be the larger endpoint.
        high: f64,
    },

    /// Raised by input validation when the worker minimum undercuts the statutory floor.
    #[error("worker minimum wage {worker_minimum} is below the local minimum wage {local_minimum}")]
    BelowLocalMinimum {
        worker_minimum: f64,
        local_minimum: f64,
    },

    /// Raised by input validation when the worker ideal exceeds the tolerated multiple
    /// of the employer's breakdown cost.
    #[error("worker ideal wage {worker_ideal} exceeds {limit} (1.2x the negotiation breakdown cost)")]
    IdealAboveLimit { worker_ideal: f64, limit: f64 },

    /// Raised when analysis options are out of their valid range.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: &'static str,
    },
}

impl BargainError {
    /// Helper to format a [`DegenerateInterval`](BargainError::DegenerateInterval) error.
    pub fn degenerate(context: &'static str, low: f64, high: f64) -> Self {
        Self::DegenerateInterval { context, low, high }
    }

    /// Helper for rejecting analysis options.
    pub fn invalid_option(option: &'static str, reason: &'static str) -> Self {
        Self::InvalidOption { option, reason }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, BargainError>;
