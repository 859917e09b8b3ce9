//! Maps each party's no-deal fallback onto the shared utility scale.

use serde::Serialize;

use crate::inputs::ResolvedParameters;
use crate::utility::{clamp, employer_scale, worker_scale};

/// Lowest utility a party will accept, kept inside `[FLOOR_MIN, FLOOR_MAX]`.
pub const FLOOR_MIN: f64 = 0.1;
pub const FLOOR_MAX: f64 = 0.9;

/// Each party's satisfaction with walking away.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UtilityFloors {
    pub u_e0: f64,
    pub u_w0: f64,
}

impl UtilityFloors {
    /// Evaluates the utility forms at the fallback values rather than at a wage.
    pub fn from_parameters(params: &ResolvedParameters) -> Self {
        let u_e0 = employer_scale(params.employer_fallback_cost, params);
        let u_w0 = worker_scale(params.worker_fallback_income, params);
        Self {
            u_e0: clamp(u_e0, FLOOR_MIN, FLOOR_MAX),
            u_w0: clamp(u_w0, FLOOR_MIN, FLOOR_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::BASELINE;
    use crate::inputs::NegotiationInputs;

    #[test]
    fn baseline_floors() {
        let params = NegotiationInputs::default().resolve(&BASELINE);
        let floors = UtilityFloors::from_parameters(&params);
        assert_relative_eq!(floors.u_e0, 0.1 + 0.9 * 2000.0 / 5500.0, epsilon = 1e-12);
        // Local minimum wage sits below the worker's span.
        assert_relative_eq!(floors.u_w0, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn floors_stay_inside_band() {
        for (cost, local) in [(3000.0, 9000.0), (20_000.0, 100.0), (8000.0, 2490.0)] {
            let params = NegotiationInputs::new("market")
                .negotiation_breakdown_cost(cost)
                .local_minimum_wage(local)
                .resolve(&BASELINE);
            let floors = UtilityFloors::from_parameters(&params);
            assert!((FLOOR_MIN..=FLOOR_MAX).contains(&floors.u_e0));
            assert!((FLOOR_MIN..=FLOOR_MAX).contains(&floors.u_w0));
        }
    }

    #[test]
    fn rich_fallback_hits_upper_clamp() {
        let params = NegotiationInputs::new("strong")
            .local_minimum_wage(9000.0)
            .resolve(&BASELINE);
        assert_eq!(UtilityFloors::from_parameters(&params).u_w0, FLOOR_MAX);
    }
}
