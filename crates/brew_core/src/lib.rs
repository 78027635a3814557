//! Brewing arithmetic for the 4:6 pour-over method.
//!
//! A brew moves through three pure steps: an edit to one quantity rescales
//! the whole [`QuantityTuple`](shared::domain::QuantityTuple), the water mass
//! and the taste preferences produce a [`PourPlan`](shared::domain::PourPlan),
//! and the plan is turned into proportional layout weights for display.
//! [`BrewCalculator`] strings the three together for front ends.

pub mod layout;
pub mod pours;
pub mod quantities;
pub mod session;

pub use layout::{grid_template_columns, layout_weights};
pub use pours::plan_pours;
pub use quantities::{clamp_to_slider, update_quantity, QuantityState};
pub use session::BrewCalculator;

/// Rounds to the nearest integer, with halves going up.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}


#[cfg(test)]
#[path = "tests/proptests.rs"]
mod proptests;
