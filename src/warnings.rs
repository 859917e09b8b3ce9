//! Risk flags a display layer shows next to a plan.

use serde::Serialize;

use crate::plan::NegotiationPlan;

/// Anchors closer than this to the employer ceiling leave little room to concede.
pub const ANCHOR_MARGIN: f64 = 200.0;
/// Nash multipliers above this imply an unrealistic overtime load.
pub const OVERTIME_LIMIT: f64 = 3.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    NoDeal,
    AnchorNearCeiling,
    OvertimeIntensity,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskWarning {
    pub severity: Severity,
    pub kind: RiskKind,
    pub message: &'static str,
}

impl RiskWarning {
    fn new(severity: Severity, kind: RiskKind) -> Self {
        let message = match kind {
            RiskKind::NoDeal => {
                "No-deal risk: fallback positions are too strong or the goals are incompatible; \
                 revise expectations or improve the alternatives"
            }
            RiskKind::AnchorNearCeiling => {
                "Anchor is high: leave more room for concessions to keep the negotiation moving"
            }
            RiskKind::OvertimeIntensity => {
                "Implied overtime intensity is very high: check that the workload is realistic and sustainable"
            }
        };
        Self {
            severity,
            kind,
            message,
        }
    }
}

/// Flags an empty ZOPA, an anchor hugging the ceiling, and excessive overtime.
pub fn assess_risks(plan: &NegotiationPlan) -> Vec<RiskWarning> {
    let mut warnings = Vec::new();

    if !plan.zopa.valid || plan.w_wa >= plan.w_emp {
        warnings.push(RiskWarning::new(Severity::Error, RiskKind::NoDeal));
    }
    if let Some(anchor) = plan.w_anchor {
        if (anchor - plan.w_emp).abs() < ANCHOR_MARGIN {
            warnings.push(RiskWarning::new(
                Severity::Warning,
                RiskKind::AnchorNearCeiling,
            ));
        }
    }
    if plan.coefficients.c_nash.is_some_and(|c| c > OVERTIME_LIMIT) {
        warnings.push(RiskWarning::new(
            Severity::Warning,
            RiskKind::OvertimeIntensity,
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::NegotiationInputs;
    use crate::plan::calculate_negotiation_plan;

    #[test]
    fn reference_plan_has_no_warnings() {
        let plan = calculate_negotiation_plan(
            &NegotiationInputs::new("strong")
                .negotiation_breakdown_cost(8000.0)
                .local_minimum_wage(2490.0),
        );
        assert!(assess_risks(&plan).is_empty());
    }

    #[test]
    fn infeasible_plan_flags_no_deal() {
        let plan = calculate_negotiation_plan(
            &NegotiationInputs::new("strong")
                .negotiation_breakdown_cost(8000.0)
                .worker_minimum_wage(9000.0)
                .worker_ideal_wage(12_000.0),
        );
        let kinds: Vec<RiskKind> = assess_risks(&plan).iter().map(|w| w.kind).collect();
        assert!(kinds.contains(&RiskKind::NoDeal));
    }

    #[test]
    fn high_ceiling_flags_overtime() {
        let plan = calculate_negotiation_plan(
            &NegotiationInputs::new("strongest")
                .negotiation_breakdown_cost(14_000.0)
                .worker_ideal_wage(14_000.0),
        );
        let warnings = assess_risks(&plan);
        assert!(plan.coefficients.c_nash.unwrap() > OVERTIME_LIMIT);
        assert!(warnings
            .iter()
            .any(|w| w.kind == RiskKind::OvertimeIntensity && w.severity == Severity::Warning));
    }
}
