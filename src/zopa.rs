//! Zone of possible agreement between the two boundary wages.

use serde::Serialize;

/// Wage interval acceptable to both parties.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Zopa {
    pub min: f64,
    pub max: f64,
    /// `false` when no wage satisfies both fallbacks.
    pub valid: bool,
}

impl Zopa {
    /// Intersects the feasible band with the walk-away wage and the employer ceiling.
    ///
    /// The upper end is the ceiling itself and is deliberately not capped at
    /// `feasible_max`.
    pub fn new(walk_away: f64, ceiling: f64, feasible_min: f64) -> Self {
        let min = feasible_min.max(walk_away);
        let max = ceiling;
        Self {
            min,
            max,
            valid: min <= max,
        }
    }

    /// Width of the zone, zero when it is empty.
    pub fn width(&self) -> f64 {
        if self.valid {
            self.max - self.min
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_away_below_band_is_lifted() {
        let zopa = Zopa::new(3000.0, 7500.0, 3500.0);
        assert_eq!(
            zopa,
            Zopa {
                min: 3500.0,
                max: 7500.0,
                valid: true
            }
        );
        assert_eq!(zopa.width(), 4000.0);
    }

    #[test]
    fn crossed_boundaries_are_invalid() {
        let zopa = Zopa::new(8000.0, 6000.0, 3500.0);
        assert!(!zopa.valid);
        assert_eq!(zopa.width(), 0.0);
    }

    #[test]
    fn ceiling_may_exceed_feasible_band() {
        let zopa = Zopa::new(3500.0, 12_000.0, 3500.0);
        assert!(zopa.valid);
        assert_eq!(zopa.max, 12_000.0);
    }
}
