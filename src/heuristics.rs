//! Opening-offer and comfort-band guidance around the Nash wage.
//!
//! These are fixed-ratio offsets, not outputs of the bargaining model: the anchor
//! moves 8% of the way from the Nash wage to the employer ceiling, the band
//! reaches 15% of the boundary spread above it and 5% of the worker's margin below.

use serde::Serialize;

use crate::boundary::round_to_step;

const ANCHOR_SHARE: f64 = 0.08;
const BAND_TOP_SHARE: f64 = 0.15;
const BAND_FLOOR_SHARE: f64 = 0.05;

/// Range within which the worker should be comfortable settling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AspirationBand {
    pub top: f64,
    pub floor: f64,
}

/// Suggested opening ask, never above the employer ceiling before rounding.
pub fn worker_anchor(nash: f64, ceiling: f64, step: f64) -> f64 {
    let raw = (nash + ANCHOR_SHARE * (ceiling - nash)).min(ceiling);
    round_to_step(raw, step)
}

pub fn aspiration_band(nash: f64, walk_away: f64, ceiling: f64, step: f64) -> AspirationBand {
    let top = (nash + BAND_TOP_SHARE * (ceiling - walk_away)).min(ceiling);
    let floor = walk_away.max(nash - BAND_FLOOR_SHARE * (nash - walk_away));
    AspirationBand {
        top: round_to_step(top, step),
        floor: round_to_step(floor, step),
    }
}
