use shared::{
    domain::{
        Concentration, Flavor, PourPlan, PourPreferences, QuantityEdit, QuantityTuple, Roast,
    },
    error::CalcError,
    protocol::{BrewRequest, BrewSummary, PourStep},
};
use tracing::debug;

use crate::{grid_template_columns, layout_weights, plan_pours, round_half_up, QuantityState};

/// Everything the brewer has picked so far: quantities, taste preferences
/// and roast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrewCalculator {
    quantities: QuantityState,
    preferences: PourPreferences,
    roast: Roast,
}

impl BrewCalculator {
    pub fn new(preferences: PourPreferences, roast: Roast) -> Self {
        Self {
            quantities: QuantityState::new(),
            preferences,
            roast,
        }
    }

    /// Builds a calculator from an untyped request. Preferences missing from
    /// the request keep the given defaults.
    pub fn from_request(
        request: &BrewRequest,
        defaults: PourPreferences,
        default_roast: Roast,
    ) -> Result<Self, CalcError> {
        let mut calculator = Self::new(defaults, default_roast);
        if let Some(flavor) = &request.flavor {
            calculator.set_flavor(flavor.parse()?);
        }
        if let Some(concentration) = &request.concentration {
            calculator.set_concentration(concentration.parse()?);
        }
        if let Some(roast) = &request.roast {
            calculator.set_roast(roast.parse()?);
        }
        if let Some(edit) = &request.edit {
            calculator.apply_edit(QuantityEdit::parse(&edit.field, edit.value)?);
        }
        Ok(calculator)
    }

    pub fn quantities(&self) -> QuantityTuple {
        self.quantities.current()
    }

    pub fn preferences(&self) -> PourPreferences {
        self.preferences
    }

    pub fn roast(&self) -> Roast {
        self.roast
    }

    pub fn apply_edit(&mut self, edit: QuantityEdit) -> QuantityTuple {
        self.quantities.apply(edit)
    }

    pub fn set_flavor(&mut self, flavor: Flavor) {
        self.preferences.flavor = flavor;
    }

    pub fn set_concentration(&mut self, concentration: Concentration) {
        self.preferences.concentration = concentration;
    }

    pub fn set_roast(&mut self, roast: Roast) {
        self.roast = roast;
    }

    pub fn plan(&self) -> PourPlan {
        plan_pours(
            self.quantities().water_grams,
            self.preferences.flavor,
            self.preferences.concentration,
        )
    }

    pub fn summary(&self) -> Result<BrewSummary, CalcError> {
        let quantities = self.quantities();
        let plan = self.plan();
        let weights = layout_weights(&plan, quantities.water_grams)?;

        let steps = plan
            .pours()
            .zip(&weights)
            .map(|((group, grams), &weight_percent)| PourStep {
                group,
                grams,
                display_grams: round_half_up(grams).max(0.0) as u32,
                weight_percent,
            })
            .collect::<Vec<_>>();

        debug!(
            water_grams = quantities.water_grams,
            roast = %self.roast,
            steps = steps.len(),
            "brew summary built"
        );

        Ok(BrewSummary {
            quantities,
            preferences: self.preferences,
            roast: self.roast,
            water_temperature_celsius: self.roast.water_temperature_celsius(),
            grid_template_columns: grid_template_columns(&weights),
            plan,
            steps,
        })
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
