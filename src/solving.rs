//! Generalized Nash bargaining solver over the wage lattice.

use nalgebra::DVector;
use serde::Serialize;

use crate::floors::UtilityFloors;
use crate::inputs::ResolvedParameters;
use crate::utility::{utility_employer, utility_worker};

/// Largest lattice the solver and chart will walk. Wider ranges come from
/// overrides many orders of magnitude above the baseline and are treated as empty.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Evenly spaced wages `start, start + step, ...` up to and including `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WageGrid {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl WageGrid {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// The lattice the solver searches: `feasible_min` up to the widened search maximum.
    pub fn search(params: &ResolvedParameters) -> Self {
        Self::new(params.feasible_min, params.search_max(), params.grid_step)
    }

    /// Number of lattice points, or `None` when the range holds more than
    /// [`MAX_GRID_POINTS`] of them.
    ///
    /// A non-positive or non-finite step and an inverted range count as zero points.
    pub fn point_count(&self) -> Option<usize> {
        let finite = self.start.is_finite() && self.end.is_finite() && self.step.is_finite();
        if !finite || self.step <= 0.0 || self.end < self.start {
            return Some(0);
        }
        let count = ((self.end - self.start) / self.step).floor() + 1.0;
        if count > MAX_GRID_POINTS as f64 {
            return None;
        }
        Some(count as usize)
    }

    /// Whether the lattice is small enough to walk.
    pub fn is_enumerable(&self) -> bool {
        self.point_count().is_some()
    }

    /// Number of lattice points walked; zero when the lattice is not enumerable.
    pub fn len(&self) -> usize {
        self.point_count().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the lattice in ascending order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |k| self.start + k as f64 * self.step)
    }

    /// Collects the lattice into a column vector.
    pub fn to_vector(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.points())
    }

    /// Centre of the searched range, used to break exact ties.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Surplus of each party over its floor at `wage`, `None` unless both are strictly positive.
pub fn surpluses(
    wage: f64,
    floors: &UtilityFloors,
    params: &ResolvedParameters,
) -> Option<(f64, f64)> {
    let employer = utility_employer(wage, params) - floors.u_e0;
    let worker = utility_worker(wage, params) - floors.u_w0;
    if employer > 0.0 && worker > 0.0 {
        Some((employer, worker))
    } else {
        None
    }
}

/// `(u_E - u_E0)^beta * (u_W - u_W0)^(1 - beta)`, or `None` outside the surplus region.
pub fn nash_objective(
    wage: f64,
    beta: f64,
    floors: &UtilityFloors,
    params: &ResolvedParameters,
) -> Option<f64> {
    surpluses(wage, floors, params)
        .map(|(employer, worker)| employer.powf(beta) * worker.powf(1.0 - beta))
}

/// Best lattice wage found by [`solve_nash`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NashSolution {
    pub wage: f64,
    pub objective: f64,
    /// Lattice points where both parties beat their fallback.
    pub feasible_points: usize,
}

/// Maximises the Nash product over [`WageGrid::search`].
///
/// Points where either party does no better than its floor are skipped. Exact
/// ties go to the wage closer to the middle of the range. Returns `None` when
/// no lattice point leaves both parties a surplus, or when the range is too wide
/// to enumerate (see [`MAX_GRID_POINTS`]).
pub fn solve_nash(
    beta: f64,
    floors: &UtilityFloors,
    params: &ResolvedParameters,
) -> Option<NashSolution> {
    let grid = WageGrid::search(params);
    let midpoint = grid.midpoint();
    let mut best: Option<NashSolution> = None;
    let mut feasible_points = 0usize;

    for wage in grid.points() {
        let Some(objective) = nash_objective(wage, beta, floors, params) else {
            log::trace!("wage {wage} leaves a party at or below its floor");
            continue;
        };
        feasible_points += 1;

        let replace = match &best {
            None => true,
            Some(current) if objective > current.objective => true,
            Some(current) if objective == current.objective => {
                (wage - midpoint).abs() < (current.wage - midpoint).abs()
            }
            Some(_) => false,
        };
        if replace {
            best = Some(NashSolution {
                wage,
                objective,
                feasible_points: 0,
            });
        }
    }

    match best {
        Some(solution) => {
            log::debug!(
                "nash optimum at {} (objective {:.4}, {feasible_points} of {} points feasible)",
                solution.wage,
                solution.objective,
                grid.len()
            );
            Some(NashSolution {
                feasible_points,
                ..solution
            })
        }
        None if !grid.is_enumerable() => {
            log::debug!(
                "search range {}..{} exceeds {MAX_GRID_POINTS} points",
                grid.start,
                grid.end
            );
            None
        }
        None => {
            log::debug!("no feasible wage among {} lattice points", grid.len());
            None
        }
    }
}

/// Configuration for the continuous golden-section refinement.
#[derive(Clone, Debug, PartialEq)]
pub struct RefinementOptions {
    /// Stop once the bracket is narrower than this many currency units.
    pub tolerance: f64,
    /// Maximum number of golden-section iterations.
    pub max_iterations: usize,
}

impl Default for RefinementOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 200,
        }
    }
}

/// Diagnostics returned alongside a refined wage.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RefinementSummary {
    pub iterations: usize,
    /// Width of the final bracket.
    pub bracket_width: f64,
}

/// Off-lattice optimum of the continuous Nash product.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RefinedNash {
    pub wage: f64,
    pub objective: f64,
    pub summary: RefinementSummary,
}

const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Golden-section search within one grid step either side of the lattice optimum.
///
/// The product is unimodal on the surplus region, so the bracket around the grid
/// optimum contains the continuous maximum. Never returns a worse objective than
/// `grid`.
pub fn refine_nash(
    grid: &NashSolution,
    beta: f64,
    floors: &UtilityFloors,
    params: &ResolvedParameters,
    options: &RefinementOptions,
) -> RefinedNash {
    let range = WageGrid::search(params);
    let score = |wage: f64| {
        nash_objective(wage, beta, floors, params).unwrap_or(f64::NEG_INFINITY)
    };

    let mut low = (grid.wage - params.grid_step).max(range.start);
    let mut high = (grid.wage + params.grid_step).min(range.end);
    let mut left = high - INV_PHI * (high - low);
    let mut right = low + INV_PHI * (high - low);
    let mut left_score = score(left);
    let mut right_score = score(right);
    let mut iterations = 0usize;

    while iterations < options.max_iterations && high - low > options.tolerance {
        if left_score < right_score {
            low = left;
            left = right;
            left_score = right_score;
            right = low + INV_PHI * (high - low);
            right_score = score(right);
        } else {
            high = right;
            right = left;
            right_score = left_score;
            left = high - INV_PHI * (high - low);
            left_score = score(left);
        }
        iterations += 1;
    }

    let summary = RefinementSummary {
        iterations,
        bracket_width: high - low,
    };
    let centre = (low + high) / 2.0;
    let centre_score = score(centre);
    if centre_score >= grid.objective {
        RefinedNash {
            wage: centre,
            objective: centre_score,
            summary,
        }
    } else {
        RefinedNash {
            wage: grid.wage,
            objective: grid.objective,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::BASELINE;
    use crate::inputs::NegotiationInputs;

    fn reference() -> (UtilityFloors, ResolvedParameters) {
        let params = NegotiationInputs::new("strong")
            .negotiation_breakdown_cost(8000.0)
            .local_minimum_wage(2490.0)
            .resolve(&BASELINE);
        (UtilityFloors::from_parameters(&params), params)
    }

    #[test]
    fn grid_includes_both_ends() {
        let grid = WageGrid::new(3500.0, 8000.0, 1500.0);
        assert_eq!(
            grid.points().collect::<Vec<_>>(),
            vec![3500.0, 5000.0, 6500.0, 8000.0]
        );
        assert_eq!(grid.to_vector().len(), 4);
        assert!(WageGrid::new(3500.0, 8000.0, 0.0).is_empty());
        assert!(WageGrid::new(9000.0, 8000.0, 1500.0).is_empty());
    }

    #[test]
    fn oversized_range_is_not_enumerable() {
        let grid = WageGrid::new(3500.0, 1e30, 1500.0);
        assert_eq!(grid.point_count(), None);
        assert!(!grid.is_enumerable());
        assert_eq!(grid.len(), 0);
        assert_eq!(grid.points().count(), 0);
        assert_eq!(grid.to_vector().len(), 0);

        let at_limit = WageGrid::new(0.0, (MAX_GRID_POINTS - 1) as f64, 1.0);
        assert_eq!(at_limit.point_count(), Some(MAX_GRID_POINTS));
        let past_limit = WageGrid::new(0.0, MAX_GRID_POINTS as f64, 1.0);
        assert_eq!(past_limit.point_count(), None);
    }

    #[test]
    fn oversized_range_has_no_solution() {
        let params = NegotiationInputs::new("strong")
            .negotiation_breakdown_cost(1e30)
            .resolve(&BASELINE);
        let floors = UtilityFloors::from_parameters(&params);
        assert!(solve_nash(0.35, &floors, &params).is_none());
    }

    #[test]
    fn picks_highest_nash_product() {
        let (floors, params) = reference();
        let solution = solve_nash(0.35, &floors, &params).unwrap();
        assert_eq!(solution.wage, 6500.0);
        // 3500 and 8000 sit exactly on a floor.
        assert_eq!(solution.feasible_points, 2);
        assert_relative_eq!(solution.objective, 0.4389, epsilon = 1e-3);

        let runner_up = nash_objective(5000.0, 0.35, &floors, &params).unwrap();
        assert_relative_eq!(runner_up, 0.3565, epsilon = 1e-3);
        assert!(nash_objective(3500.0, 0.35, &floors, &params).is_none());
        assert!(nash_objective(8000.0, 0.35, &floors, &params).is_none());
    }

    #[test]
    fn exact_ties_prefer_the_midpoint() {
        // With beta = 0.5 and mirrored spans, 5000 and 6500 score identically;
        // the range runs to 9500, so 6500 is the centre.
        let params = ResolvedParameters {
            base_wage: 2500.0,
            employer_ideal: 3500.0,
            employer_max: 8000.0,
            employer_fallback_cost: 8000.0,
            worker_min: 3500.0,
            worker_ideal: 8000.0,
            worker_fallback_income: 3500.0,
            feasible_min: 3500.0,
            feasible_max: 9500.0,
            grid_step: 1500.0,
        };
        let floors = UtilityFloors::from_parameters(&params);
        let low = nash_objective(5000.0, 0.5, &floors, &params).unwrap();
        let high = nash_objective(6500.0, 0.5, &floors, &params).unwrap();
        assert_eq!(low, high);

        let solution = solve_nash(0.5, &floors, &params).unwrap();
        assert_eq!(solution.wage, 6500.0);
    }

    #[test]
    fn incompatible_fallbacks_have_no_solution() {
        let params = NegotiationInputs::new("strong")
            .negotiation_breakdown_cost(8000.0)
            .worker_minimum_wage(9000.0)
            .worker_ideal_wage(12_000.0)
            .resolve(&BASELINE);
        let floors = UtilityFloors::from_parameters(&params);
        assert!(solve_nash(0.35, &floors, &params).is_none());
    }

    #[test]
    fn refinement_finds_continuous_optimum() {
        let (floors, params) = reference();
        let grid = solve_nash(0.35, &floors, &params).unwrap();
        let refined = refine_nash(&grid, 0.35, &floors, &params, &RefinementOptions::default());

        // Both surpluses are linear in the wage, so the optimum is
        // worker_min + (1 - beta) * (employer_max - worker_min).
        assert_relative_eq!(refined.wage, 3500.0 + 0.65 * 4500.0, epsilon = 0.5);
        assert!(refined.objective >= grid.objective);
        assert!(refined.summary.bracket_width <= 1e-3);
    }
}
