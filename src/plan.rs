//! Calculation entry point assembling the full negotiation plan.

use serde::Serialize;

use crate::boundary::{employer_ceiling, worker_walk_away};
use crate::chart::ChartSeries;
use crate::constants::{EconomicConstants, BASELINE};
use crate::floors::UtilityFloors;
use crate::heuristics::{aspiration_band, worker_anchor, AspirationBand};
use crate::inputs::{supplied, NegotiationInputs, ResolvedParameters};
use crate::options::{PlanOptions, SearchStrategy};
use crate::policy::Policy;
use crate::solving::{refine_nash, solve_nash, RefinedNash, WageGrid};
use crate::zopa::Zopa;

/// Message attached to plans without a Nash solution.
pub const NO_SOLUTION_MESSAGE: &str =
    "Wage expectations too high: employer utility is insufficient and no Nash solution exists";

/// Message attached to plans whose search range cannot be enumerated.
pub const RANGE_TOO_WIDE_MESSAGE: &str =
    "Wage range too wide to search: an override is far outside the supported wage scale";

/// Wages expressed as multiples of the base wage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Coefficients {
    pub c_nash: Option<f64>,
    pub c_anchor: Option<f64>,
    pub c_ask: Option<f64>,
}

/// Recommendation produced by one calculation.
///
/// Infeasibility is reported through `has_valid_solution`, `error_message` and
/// `zopa.valid`, never as an error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NegotiationPlan {
    pub policy: Policy,
    pub beta: f64,
    pub u_e0: f64,
    pub u_w0: f64,
    pub w_nash: Option<f64>,
    pub w_anchor: Option<f64>,
    /// Worker walk-away wage.
    pub w_wa: f64,
    /// Employer ceiling wage.
    pub w_emp: f64,
    pub zopa: Zopa,
    pub aspiration_band: Option<AspirationBand>,
    pub coefficients: Coefficients,
    pub custom_ask: Option<f64>,
    pub has_valid_solution: bool,
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nash_refinement: Option<RefinedNash>,
}

/// A set of inputs bound to the economic constants they resolve against.
#[derive(Clone, Debug, PartialEq)]
pub struct BargainingProblem {
    inputs: NegotiationInputs,
    constants: EconomicConstants,
}

impl BargainingProblem {
    /// Binds `inputs` to the [`BASELINE`] constants.
    pub fn new(inputs: NegotiationInputs) -> Self {
        Self::with_constants(inputs, BASELINE)
    }

    pub fn with_constants(inputs: NegotiationInputs, constants: EconomicConstants) -> Self {
        Self { inputs, constants }
    }

    pub fn inputs(&self) -> &NegotiationInputs {
        &self.inputs
    }

    pub fn constants(&self) -> &EconomicConstants {
        &self.constants
    }

    /// The inputs with every default substituted.
    pub fn parameters(&self) -> ResolvedParameters {
        self.inputs.resolve(&self.constants)
    }

    pub fn floors(&self) -> UtilityFloors {
        UtilityFloors::from_parameters(&self.parameters())
    }

    /// Runs the full calculation.
    pub fn plan(&self, options: &PlanOptions) -> NegotiationPlan {
        build_plan(&self.inputs, &self.constants, options)
    }

    /// Utility curves for the same inputs, for plotting next to the plan.
    pub fn chart_data(&self) -> ChartSeries {
        let params = self.parameters();
        ChartSeries::sample(&UtilityFloors::from_parameters(&params), &params)
    }
}

/// Calculates a plan against the baseline constants with grid search.
pub fn calculate_negotiation_plan(inputs: &NegotiationInputs) -> NegotiationPlan {
    build_plan(inputs, &BASELINE, &PlanOptions::default())
}

/// Floors, boundaries, ZOPA, Nash wage and heuristics, in that order.
pub fn build_plan(
    inputs: &NegotiationInputs,
    constants: &EconomicConstants,
    options: &PlanOptions,
) -> NegotiationPlan {
    let policy = *inputs.resolved_policy();
    let beta = policy.beta;
    let params = inputs.resolve(constants);

    let floors = UtilityFloors::from_parameters(&params);
    let w_wa = worker_walk_away(&floors, &params);
    let w_emp = employer_ceiling(&floors, &params);
    let zopa = Zopa::new(w_wa, w_emp, params.feasible_min);
    if !zopa.valid {
        log::debug!("empty ZOPA: walk-away {w_wa} above ceiling {w_emp}");
    }

    let custom_ask = inputs.custom_ask;
    let c_ask = supplied(custom_ask).map(|ask| ask / params.base_wage);

    let Some(solution) = solve_nash(beta, &floors, &params) else {
        let message = if WageGrid::search(&params).is_enumerable() {
            NO_SOLUTION_MESSAGE
        } else {
            RANGE_TOO_WIDE_MESSAGE
        };
        return NegotiationPlan {
            policy,
            beta,
            u_e0: floors.u_e0,
            u_w0: floors.u_w0,
            w_nash: None,
            w_anchor: None,
            w_wa,
            w_emp,
            zopa,
            aspiration_band: None,
            coefficients: Coefficients {
                c_nash: None,
                c_anchor: None,
                c_ask,
            },
            custom_ask,
            has_valid_solution: false,
            error_message: Some(message.to_string()),
            nash_refinement: None,
        };
    };

    let w_nash = solution.wage;
    let w_anchor = worker_anchor(w_nash, w_emp, params.grid_step);
    let band = aspiration_band(w_nash, w_wa, w_emp, params.grid_step);
    let nash_refinement = match &options.search {
        SearchStrategy::Grid => None,
        SearchStrategy::Refined(refinement) => Some(refine_nash(
            &solution,
            beta,
            &floors,
            &params,
            refinement,
        )),
    };

    NegotiationPlan {
        policy,
        beta,
        u_e0: floors.u_e0,
        u_w0: floors.u_w0,
        w_nash: Some(w_nash),
        w_anchor: Some(w_anchor),
        w_wa,
        w_emp,
        zopa,
        aspiration_band: Some(band),
        coefficients: Coefficients {
            c_nash: Some(w_nash / params.base_wage),
            c_anchor: Some(w_anchor / params.base_wage),
            c_ask,
        },
        custom_ask,
        has_valid_solution: true,
        error_message: None,
        nash_refinement,
    }
}
