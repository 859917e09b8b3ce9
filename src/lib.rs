//! Wage-negotiation planning with a two-party Nash bargaining model.
//!
//! Each party's satisfaction with a monthly wage is a clamped piecewise-linear
//! utility. Real-world fallbacks (the employer's cost of a breakdown, the
//! worker's income without a deal) are mapped onto the same scale as utility
//! floors, and the planner
//!
//! - inverts both utilities at their floors to get the worker's walk-away wage
//!   and the employer's ceiling (`boundary` module),
//! - intersects them into a zone of possible agreement (`zopa` module),
//! - maximises the generalized Nash product on a fixed wage lattice (`solving` module), and
//! - derives an opening anchor and an aspiration band from the result (`heuristics` module).
//!
//! Everything is a pure function of the inputs: identical inputs give an
//! identical [`NegotiationPlan`]. Infeasible economics are reported inside the
//! plan, never as an error.
//!
//! # Quick start
//!
//! ```
//! use wagebargain::{calculate_negotiation_plan, NegotiationInputs};
//!
//! let inputs = NegotiationInputs::new("strong")
//!     .negotiation_breakdown_cost(8000.0)
//!     .local_minimum_wage(2490.0);
//!
//! let plan = calculate_negotiation_plan(&inputs);
//! assert!(plan.has_valid_solution);
//! assert_eq!(plan.w_nash, Some(6500.0));
//! assert_eq!(plan.zopa.min, 3500.0);
//! ```
//!
//! The `sensitivity` module compares presets, sweeps a single override, and
//! checks how a recommendation holds up under noisy fallback values.

pub mod boundary;
pub mod chart;
pub mod constants;
pub mod error;
pub mod floors;
pub mod heuristics;
pub mod inputs;
pub mod options;
pub mod plan;
pub mod policy;
pub mod sensitivity;
pub mod solving;
pub mod utility;
pub mod warnings;
pub mod zopa;

pub use chart::{generate_chart_data, ChartPoint, ChartSeries};
pub use constants::{EconomicConstants, BASELINE};
pub use error::{BargainError, Result};
pub use floors::UtilityFloors;
pub use inputs::{NegotiationInputs, ResolvedParameters};
pub use options::{PlanOptions, SearchStrategy};
pub use plan::{calculate_negotiation_plan, BargainingProblem, NegotiationPlan};
pub use policy::{Policy, PolicyId, POLICIES};
pub use solving::{RefinementOptions, RefinementSummary};
pub use warnings::{assess_risks, RiskWarning};
pub use zopa::Zopa;
