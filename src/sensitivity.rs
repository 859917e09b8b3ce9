//! What-if analysis on top of the single-shot planner.
//!
//! Every plan here is an independent call to [`build_plan`], so the work is
//! spread across the rayon pool; results keep the order of their inputs.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{BargainError, Result};
use crate::inputs::{supplied, NegotiationInputs};
use crate::options::PlanOptions;
use crate::plan::{build_plan, BargainingProblem, NegotiationPlan};
use crate::policy::POLICIES;

/// Plans for every preset, ordered from weakest to strongest worker protection.
pub fn compare_policies(
    problem: &BargainingProblem,
    options: &PlanOptions,
) -> Vec<NegotiationPlan> {
    POLICIES
        .as_slice()
        .par_iter()
        .map(|policy| {
            let inputs = NegotiationInputs {
                policy: policy.id.as_str().to_string(),
                ..problem.inputs().clone()
            };
            build_plan(&inputs, problem.constants(), options)
        })
        .collect()
}

/// Override varied by [`sweep`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    NegotiationBreakdownCost,
    LocalMinimumWage,
    WorkerIdealWage,
    WorkerMinimumWage,
}

impl SweepParameter {
    fn apply(&self, inputs: &NegotiationInputs, value: f64) -> NegotiationInputs {
        let mut inputs = inputs.clone();
        match self {
            SweepParameter::NegotiationBreakdownCost => {
                inputs.negotiation_breakdown_cost = Some(value)
            }
            SweepParameter::LocalMinimumWage => inputs.local_minimum_wage = Some(value),
            SweepParameter::WorkerIdealWage => inputs.worker_ideal_wage = Some(value),
            SweepParameter::WorkerMinimumWage => inputs.worker_minimum_wage = Some(value),
        }
        inputs
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    pub value: f64,
    pub plan: NegotiationPlan,
}

/// One plan per value of `parameter`, all other inputs held fixed.
pub fn sweep(
    problem: &BargainingProblem,
    parameter: SweepParameter,
    values: &[f64],
    options: &PlanOptions,
) -> Vec<SweepPoint> {
    values
        .par_iter()
        .map(|&value| SweepPoint {
            value,
            plan: build_plan(
                &parameter.apply(problem.inputs(), value),
                problem.constants(),
                options,
            ),
        })
        .collect()
}

/// Monte Carlo settings for [`assess_robustness`].
#[derive(Clone, Debug, PartialEq)]
pub struct RobustnessOptions {
    /// Number of perturbed input sets.
    pub draws: usize,
    /// Standard deviation of the noise added to the breakdown cost.
    pub breakdown_cost_sd: f64,
    /// Standard deviation of the noise added to the local minimum wage.
    pub minimum_wage_sd: f64,
    pub seed: u64,
}

impl Default for RobustnessOptions {
    fn default() -> Self {
        Self {
            draws: 1_000,
            breakdown_cost_sd: 500.0,
            minimum_wage_sd: 200.0,
            seed: 0,
        }
    }
}

impl RobustnessOptions {
    pub fn with_draws(mut self, draws: usize) -> Self {
        self.draws = draws;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set both noise levels at once.
    pub fn with_noise(mut self, breakdown_cost_sd: f64, minimum_wage_sd: f64) -> Self {
        self.breakdown_cost_sd = breakdown_cost_sd;
        self.minimum_wage_sd = minimum_wage_sd;
        self
    }
}

/// How a recommendation holds up when the fallback values are uncertain.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RobustnessSummary {
    pub draws: usize,
    /// Fraction of draws with a Nash solution.
    pub solution_share: f64,
    /// Fraction of draws with a non-empty ZOPA.
    pub valid_zopa_share: f64,
    pub nash_min: Option<f64>,
    pub nash_mean: Option<f64>,
    pub nash_max: Option<f64>,
}

fn noise(option: &'static str, sd: f64) -> Result<Normal<f64>> {
    if !sd.is_finite() || sd < 0.0 {
        return Err(BargainError::invalid_option(
            option,
            "standard deviation must be finite and non-negative",
        ));
    }
    Normal::new(0.0, sd)
        .map_err(|_| BargainError::invalid_option(option, "rejected by the normal distribution"))
}

/// Perturbs the breakdown cost and local minimum wage with seeded normal noise
/// and replans each draw.
///
/// Each draw carries both values as explicit overrides centred on the problem's
/// resolved figures. Identical options give identical summaries.
pub fn assess_robustness(
    problem: &BargainingProblem,
    options: &RobustnessOptions,
) -> Result<RobustnessSummary> {
    if options.draws == 0 {
        return Err(BargainError::invalid_option(
            "draws",
            "at least one draw is required",
        ));
    }
    let breakdown_noise = noise("breakdown_cost_sd", options.breakdown_cost_sd)?;
    let wage_noise = noise("minimum_wage_sd", options.minimum_wage_sd)?;

    let inputs = problem.inputs();
    let constants = problem.constants();
    let breakdown_centre =
        supplied(inputs.negotiation_breakdown_cost).unwrap_or(constants.employer_max);
    let wage_centre =
        supplied(inputs.local_minimum_wage).unwrap_or(constants.worker_fallback_income);

    let mut rng = SmallRng::seed_from_u64(options.seed);
    let shocks: Vec<(f64, f64)> = (0..options.draws)
        .map(|_| (breakdown_noise.sample(&mut rng), wage_noise.sample(&mut rng)))
        .collect();

    let plan_options = PlanOptions::default();
    let outcomes: Vec<(Option<f64>, bool)> = shocks
        .par_iter()
        .map(|(breakdown_shock, wage_shock)| {
            let perturbed = NegotiationInputs {
                negotiation_breakdown_cost: Some((breakdown_centre + breakdown_shock).max(1.0)),
                local_minimum_wage: Some((wage_centre + wage_shock).max(1.0)),
                ..inputs.clone()
            };
            let plan = build_plan(&perturbed, constants, &plan_options);
            (plan.w_nash, plan.zopa.valid)
        })
        .collect();

    let total = outcomes.len() as f64;
    let nash: Vec<f64> = outcomes.iter().filter_map(|(wage, _)| *wage).collect();
    let valid_zopa = outcomes.iter().filter(|(_, valid)| *valid).count();
    log::debug!(
        "robustness: {} of {} draws solvable",
        nash.len(),
        outcomes.len()
    );

    let (nash_min, nash_mean, nash_max) = if nash.is_empty() {
        (None, None, None)
    } else {
        let min = nash.iter().copied().fold(f64::INFINITY, f64::min);
        let max = nash.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = nash.iter().sum::<f64>() / nash.len() as f64;
        (Some(min), Some(mean), Some(max))
    };

    Ok(RobustnessSummary {
        draws: outcomes.len(),
        solution_share: nash.len() as f64 / total,
        valid_zopa_share: valid_zopa as f64 / total,
        nash_min,
        nash_mean,
        nash_max,
    })
}
