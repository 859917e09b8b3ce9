//! Fixed economic baseline shared by every calculation.

use serde::Serialize;

use crate::error::{BargainError, Result};

/// Monthly wage figures (in currency units) that anchor the bargaining model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EconomicConstants {
    /// Reference wage used to express results as overtime multipliers.
    pub base_wage: f64,
    /// Wage at which the employer is fully satisfied.
    pub employer_ideal: f64,
    /// Wage at which the employer's satisfaction reaches its lower edge.
    pub employer_max: f64,
    /// Wage at which the worker's satisfaction reaches its lower edge.
    pub worker_min: f64,
    /// Wage at which the worker is fully satisfied.
    pub worker_ideal: f64,
    /// Lower end of the nominal negotiable band.
    pub feasible_min: f64,
    /// Upper end of the nominal negotiable band.
    pub feasible_max: f64,
    /// Spacing of the wage lattice used for search, rounding and charts.
    pub grid_step: f64,
    /// What a breakdown costs the employer when no override is supplied.
    pub employer_fallback_cost: f64,
    /// What the worker earns without a deal when no override is supplied.
    pub worker_fallback_income: f64,
}

/// The baseline every omitted input falls back to.
pub const BASELINE: EconomicConstants = EconomicConstants {
    base_wage: 2500.0,
    employer_ideal: 2500.0,
    employer_max: 8000.0,
    worker_min: 3500.0,
    worker_ideal: 8000.0,
    feasible_min: 3500.0,
    feasible_max: 8000.0,
    grid_step: 1500.0,
    employer_fallback_cost: 6000.0,
    worker_fallback_income: 2490.0,
};

impl Default for EconomicConstants {
    fn default() -> Self {
        BASELINE
    }
}

impl EconomicConstants {
    /// Checks the ordering relations the calculator relies on.
    pub fn validate(&self) -> Result<()> {
        let values = [
            self.base_wage,
            self.employer_ideal,
            self.employer_max,
            self.worker_min,
            self.worker_ideal,
            self.feasible_min,
            self.feasible_max,
            self.grid_step,
            self.employer_fallback_cost,
            self.worker_fallback_income,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(BargainError::InvalidConstants {
                reason: "all constants must be finite",
            });
        }
        if self.grid_step <= 0.0 {
            return Err(BargainError::InvalidConstants {
                reason: "grid step must be positive",
            });
        }
        if self.feasible_min >= self.feasible_max {
            return Err(BargainError::InvalidConstants {
                reason: "feasible minimum must be below feasible maximum",
            });
        }
        if self.employer_ideal >= self.employer_max {
            return Err(BargainError::InvalidConstants {
                reason: "employer ideal must be below employer maximum",
            });
        }
        if self.worker_min >= self.worker_ideal {
            return Err(BargainError::InvalidConstants {
                reason: "worker minimum must be below worker ideal",
            });
        }
        if self.base_wage <= 0.0 {
            return Err(BargainError::InvalidConstants {
                reason: "base wage must be positive",
            });
        }
        Ok(())
    }
}
