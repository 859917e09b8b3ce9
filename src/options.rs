//! Configuration for building a negotiation plan.

use crate::solving::RefinementOptions;

/// How the Nash wage is searched.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchStrategy {
    /// Lattice search only; the reported wage always sits on the grid.
    #[default]
    Grid,
    /// Lattice search followed by a continuous refinement reported alongside it.
    /// The plan's Nash wage stays on the grid.
    Refined(RefinementOptions),
}

/// Aggregated options used by [`BargainingProblem::plan`](crate::plan::BargainingProblem::plan).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanOptions {
    pub search: SearchStrategy,
}

impl PlanOptions {
    /// Request a continuous refinement with default tolerances.
    pub fn with_refinement(mut self) -> Self {
        self.search = SearchStrategy::Refined(RefinementOptions::default());
        self
    }

    /// Request a continuous refinement with custom tolerances.
    pub fn with_refinement_options(mut self, options: RefinementOptions) -> Self {
        self.search = SearchStrategy::Refined(options);
        self
    }
}
