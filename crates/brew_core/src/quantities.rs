use shared::{
    domain::{QuantityEdit, QuantityTuple, REFERENCE_QUANTITIES},
    error::CalcError,
};
use tracing::{debug, warn};

use crate::round_half_up;

/// Rescales the reference recipe around one edited quantity.
///
/// The edited value is kept exactly as given; the two derived quantities are
/// rounded half-up to whole cups or grams. No range checks happen here.
pub fn update_quantity(edit: QuantityEdit) -> QuantityTuple {
    let r = REFERENCE_QUANTITIES;
    match edit {
        QuantityEdit::Cups(cups) => QuantityTuple {
            cups,
            coffee_grams: round_half_up(cups * r.coffee_grams),
            water_grams: round_half_up(cups * r.water_grams),
        },
        QuantityEdit::Coffee(coffee_grams) => QuantityTuple {
            cups: round_half_up(coffee_grams / r.coffee_grams),
            coffee_grams,
            water_grams: round_half_up(coffee_grams * r.water_grams / r.coffee_grams),
        },
        QuantityEdit::Water(water_grams) => QuantityTuple {
            cups: round_half_up(water_grams * r.cups / r.water_grams),
            coffee_grams: round_half_up(water_grams * r.coffee_grams / r.water_grams),
            water_grams,
        },
    }
}

/// Pulls an edit into its slider range, logging when the value had to move.
/// Front ends call this before dispatching to the state machine.
pub fn clamp_to_slider(edit: QuantityEdit) -> QuantityEdit {
    let clamped = edit.clamped();
    if clamped != edit {
        let (min, max) = edit.field().bounds();
        warn!(
            field = %edit.field(),
            requested = edit.value(),
            applied = clamped.value(),
            min,
            max,
            "quantity outside slider range"
        );
    }
    clamped
}

/// The current brewing quantities. Starts at the one-cup reference recipe
/// and is replaced whole on every edit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuantityState {
    current: QuantityTuple,
}

impl QuantityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> QuantityTuple {
        self.current
    }

    pub fn apply(&mut self, edit: QuantityEdit) -> QuantityTuple {
        let next = update_quantity(edit);
        debug!(
            field = %edit.field(),
            value = edit.value(),
            cups = next.cups,
            coffee_grams = next.coffee_grams,
            water_grams = next.water_grams,
            "quantities updated"
        );
        self.current = next;
        next
    }

    /// Applies an edit named by an untyped field. Unknown fields are an
    /// error and leave the state untouched.
    pub fn apply_named(&mut self, field: &str, value: f64) -> Result<QuantityTuple, CalcError> {
        let edit = QuantityEdit::parse(field, value)?;
        Ok(self.apply(edit))
    }

    pub fn reset(&mut self) {
        self.current = REFERENCE_QUANTITIES;
    }
}

#[cfg(test)]
#[path = "tests/quantities_tests.rs"]
mod tests;
