//! Utility curves sampled on the wage lattice for plotting.

use nalgebra::DMatrix;
use serde::Serialize;

use crate::constants::EconomicConstants;
use crate::floors::UtilityFloors;
use crate::inputs::{NegotiationInputs, ResolvedParameters};
use crate::solving::{surpluses, WageGrid};
use crate::utility::{utility_employer, utility_worker};

/// One sample of both utility curves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    pub wage: f64,
    pub u_e: f64,
    pub u_w: f64,
    /// Unweighted surplus product, zero where either party is at or below its floor.
    pub nash_product: f64,
}

/// Ordered samples from the worker minimum to the search maximum.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Samples the curves for fully resolved parameters.
    pub fn sample(floors: &UtilityFloors, params: &ResolvedParameters) -> Self {
        let grid = WageGrid::new(params.worker_min, params.search_max(), params.grid_step);
        let points = grid
            .points()
            .map(|wage| ChartPoint {
                wage,
                u_e: utility_employer(wage, params),
                u_w: utility_worker(wage, params),
                nash_product: surpluses(wage, floors, params)
                    .map(|(employer, worker)| employer * worker)
                    .unwrap_or(0.0),
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples as an `n x 4` matrix with columns `wage, u_e, u_w, nash_product`.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.points.len(), 4, |row, column| {
            let point = &self.points[row];
            match column {
                0 => point.wage,
                1 => point.u_e,
                2 => point.u_w,
                _ => point.nash_product,
            }
        })
    }
}

/// Chart entry point: samples the curves for caller-supplied floors and overrides.
pub fn generate_chart_data(
    floors: &UtilityFloors,
    inputs: &NegotiationInputs,
    constants: &EconomicConstants,
) -> ChartSeries {
    ChartSeries::sample(floors, &inputs.resolve(constants))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::BASELINE;

    #[test]
    fn samples_start_at_worker_minimum() {
        let inputs = NegotiationInputs::new("strong").worker_minimum_wage(2000.0);
        let floors = UtilityFloors::from_parameters(&inputs.resolve(&BASELINE));
        let series = generate_chart_data(&floors, &inputs, &BASELINE);
        let wages: Vec<f64> = series.points.iter().map(|p| p.wage).collect();
        assert_eq!(wages, vec![2000.0, 3500.0, 5000.0, 6500.0, 8000.0]);
    }

    #[test]
    fn nash_product_is_zero_outside_surplus_region() {
        let inputs = NegotiationInputs::new("strong")
            .negotiation_breakdown_cost(8000.0)
            .local_minimum_wage(2490.0);
        let floors = UtilityFloors::from_parameters(&inputs.resolve(&BASELINE));
        let series = generate_chart_data(&floors, &inputs, &BASELINE);

        assert_eq!(series.len(), 4);
        assert_eq!(series.points[0].nash_product, 0.0);
        assert_eq!(series.points[3].nash_product, 0.0);
        let at_6500 = series.points[2];
        let expected = (0.9 * 1500.0 / 5500.0) * 0.6;
        assert_relative_eq!(at_6500.nash_product, expected, epsilon = 1e-12);
    }

    #[test]
    fn matrix_layout_matches_points() {
        let inputs = NegotiationInputs::default();
        let floors = UtilityFloors::from_parameters(&inputs.resolve(&BASELINE));
        let series = generate_chart_data(&floors, &inputs, &BASELINE);
        let matrix = series.to_matrix();
        assert_eq!(matrix.shape(), (series.len(), 4));
        assert_eq!(matrix[(1, 0)], series.points[1].wage);
        assert_eq!(matrix[(1, 2)], series.points[1].u_w);
    }
}
