//! Piecewise-linear satisfaction scores for both parties.
//!
//! Both functions share one affine form: `0.1 + 0.9 * (distance into the span) / span`,
//! clamped to `[0, 1]`. The employer's score falls as the wage rises towards
//! `employer_max`; the worker's rises from `worker_min` towards `worker_ideal`.

use crate::inputs::ResolvedParameters;

pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    // Not `f64::clamp`: an override below `feasible_min` can invert the bounds.
    min.max(max.min(value))
}

/// Unclamped employer score of `wage` on the employer's utility scale.
pub(crate) fn employer_scale(wage: f64, params: &ResolvedParameters) -> f64 {
    0.1 + 0.9 * (params.employer_max - wage) / (params.employer_max - params.employer_ideal)
}

/// Unclamped worker score of `wage` on the worker's utility scale.
pub(crate) fn worker_scale(wage: f64, params: &ResolvedParameters) -> f64 {
    0.1 + 0.9 * (wage - params.worker_min) / (params.worker_ideal - params.worker_min)
}

/// Employer satisfaction at `wage`: 1 at or below the ideal, 0 at or above the maximum.
pub fn utility_employer(wage: f64, params: &ResolvedParameters) -> f64 {
    clamp(employer_scale(wage, params), 0.0, 1.0)
}

/// Worker satisfaction at `wage`, non-decreasing in `wage`.
pub fn utility_worker(wage: f64, params: &ResolvedParameters) -> f64 {
    clamp(worker_scale(wage, params), 0.0, 1.0)
}
