//! Closed-form wages at which each party is indifferent to walking away.
//!
//! Each boundary is clamped first and then snapped to the grid. The snap is not
//! followed by a second clamp, so a rounded boundary can land one partial step
//! outside its clamp range (3500 clamps to 3500 but rounds to 3000 on a 1500 grid).

use crate::floors::UtilityFloors;
use crate::inputs::ResolvedParameters;
use crate::utility::clamp;

/// Rounds `value` to the nearest multiple of `step`, ties away from zero.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Lowest wage the worker accepts: the inverse of the worker utility at `u_w0`.
pub fn worker_walk_away(floors: &UtilityFloors, params: &ResolvedParameters) -> f64 {
    let raw = params.worker_min
        + ((floors.u_w0 - 0.1) / 0.9) * (params.worker_ideal - params.worker_min);
    let clamped = clamp(raw, params.feasible_min, params.feasible_max);
    round_to_step(clamped, params.grid_step)
}

/// Highest wage the employer tolerates: the inverse of the employer utility at `u_e0`.
///
/// Clamped to `employer_max` rather than `feasible_max`, so a large breakdown cost
/// lifts the ceiling above the nominal band.
pub fn employer_ceiling(floors: &UtilityFloors, params: &ResolvedParameters) -> f64 {
    let raw = params.employer_max
        - ((floors.u_e0 - 0.1) / 0.9) * (params.employer_max - params.employer_ideal);
    let clamped = clamp(raw, params.feasible_min, params.employer_max);
    round_to_step(clamped, params.grid_step)
}
