//! Caller-supplied negotiation inputs and their resolution against the baseline.

use serde::{Deserialize, Serialize};

use crate::constants::EconomicConstants;
use crate::error::{BargainError, Result};
use crate::policy::{Policy, DEFAULT_POLICY};

/// Raw inputs for one calculation. Every numeric field is optional and falls
/// back to the corresponding [`EconomicConstants`] value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NegotiationInputs {
    /// Policy identifier; unknown values resolve to the default preset.
    pub policy: String,
    /// What a breakdown costs the employer. Also caps the employer's utility span.
    pub negotiation_breakdown_cost: Option<f64>,
    /// Statutory minimum wage, used as the worker's fallback income.
    pub local_minimum_wage: Option<f64>,
    pub worker_ideal_wage: Option<f64>,
    pub worker_minimum_wage: Option<f64>,
    /// A wage the worker intends to ask for, reported as a multiplier only.
    pub custom_ask: Option<f64>,
}

impl Default for NegotiationInputs {
    fn default() -> Self {
        Self::new(DEFAULT_POLICY.as_str())
    }
}

impl NegotiationInputs {
    /// Start from a policy identifier with every override unset.
    pub fn new<S: Into<String>>(policy: S) -> Self {
        Self {
            policy: policy.into(),
            negotiation_breakdown_cost: None,
            local_minimum_wage: None,
            worker_ideal_wage: None,
            worker_minimum_wage: None,
            custom_ask: None,
        }
    }

    pub fn negotiation_breakdown_cost(mut self, cost: f64) -> Self {
        self.negotiation_breakdown_cost = Some(cost);
        self
    }

    pub fn local_minimum_wage(mut self, wage: f64) -> Self {
        self.local_minimum_wage = Some(wage);
        self
    }

    pub fn worker_ideal_wage(mut self, wage: f64) -> Self {
        self.worker_ideal_wage = Some(wage);
        self
    }

    pub fn worker_minimum_wage(mut self, wage: f64) -> Self {
        self.worker_minimum_wage = Some(wage);
        self
    }

    pub fn custom_ask(mut self, wage: f64) -> Self {
        self.custom_ask = Some(wage);
        self
    }

    /// The preset named by [`policy`](Self::policy), or the default one.
    pub fn resolved_policy(&self) -> &'static Policy {
        Policy::resolve(&self.policy)
    }

    /// Substitutes defaults for every omitted override.
    pub fn resolve(&self, constants: &EconomicConstants) -> ResolvedParameters {
        let breakdown = supplied(self.negotiation_breakdown_cost);
        ResolvedParameters {
            base_wage: constants.base_wage,
            employer_ideal: constants.employer_ideal,
            employer_max: breakdown.unwrap_or(constants.employer_max),
            employer_fallback_cost: breakdown.unwrap_or(constants.employer_fallback_cost),
            worker_min: supplied(self.worker_minimum_wage).unwrap_or(constants.worker_min),
            worker_ideal: supplied(self.worker_ideal_wage).unwrap_or(constants.worker_ideal),
            worker_fallback_income: supplied(self.local_minimum_wage)
                .unwrap_or(constants.worker_fallback_income),
            feasible_min: constants.feasible_min,
            feasible_max: constants.feasible_max,
            grid_step: constants.grid_step,
        }
    }

    /// Opt-in checks a form layer would run before calculating.
    ///
    /// The calculator itself never calls this; it evaluates whatever it is given.
    pub fn validate(&self, constants: &EconomicConstants) -> Result<()> {
        let params = self.resolve(constants);
        let local_minimum = params.worker_fallback_income;

        if let Some(worker_minimum) = supplied(self.worker_minimum_wage) {
            if worker_minimum < local_minimum {
                return Err(BargainError::BelowLocalMinimum {
                    worker_minimum,
                    local_minimum,
                });
            }
        }
        if let Some(worker_ideal) = supplied(self.worker_ideal_wage) {
            let limit = params.employer_max * 1.2;
            if worker_ideal > limit {
                return Err(BargainError::IdealAboveLimit {
                    worker_ideal,
                    limit,
                });
            }
        }
        if params.worker_min >= params.worker_ideal {
            return Err(BargainError::degenerate(
                "worker utility span",
                params.worker_min,
                params.worker_ideal,
            ));
        }
        if params.employer_ideal >= params.employer_max {
            return Err(BargainError::degenerate(
                "employer utility span",
                params.employer_ideal,
                params.employer_max,
            ));
        }
        Ok(())
    }
}

/// Zero and NaN count as "not supplied", matching how the form layer leaves
/// blank numeric inputs.
pub(crate) fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Fully-populated parameters for one calculation.
///
/// Preconditions: `employer_ideal != employer_max` and `worker_min != worker_ideal`.
/// Violations are not guarded and yield non-finite utilities.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedParameters {
    pub base_wage: f64,
    pub employer_ideal: f64,
    pub employer_max: f64,
    pub employer_fallback_cost: f64,
    pub worker_min: f64,
    pub worker_ideal: f64,
    pub worker_fallback_income: f64,
    pub feasible_min: f64,
    pub feasible_max: f64,
    pub grid_step: f64,
}

impl ResolvedParameters {
    /// Upper end of the search range, widened to cover overrides above the nominal band.
    pub fn search_max(&self) -> f64 {
        self.feasible_max
            .max(self.employer_max)
            .max(self.worker_ideal)
    }
}
