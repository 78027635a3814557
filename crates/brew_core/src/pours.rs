use shared::domain::{Concentration, Flavor, PourPlan, FLAVOR_WATER_SHARE};
use tracing::debug;

const STRONG_THIRD: f64 = 100.0 / 3.0;

/// Percentages of the flavor water for each of the two opening pours.
pub fn flavor_split(flavor: Flavor) -> &'static [f64] {
    match flavor {
        Flavor::Standard => &[50.0, 50.0],
        Flavor::Sweet => &[41.66, 58.34],
        Flavor::Bright => &[58.34, 41.66],
    }
}

/// Percentages of the concentration water for the remaining pours.
pub fn concentration_split(concentration: Concentration) -> &'static [f64] {
    match concentration {
        Concentration::Light => &[100.0],
        Concentration::Medium => &[50.0, 50.0],
        Concentration::Strong => &[STRONG_THIRD, STRONG_THIRD, STRONG_THIRD],
    }
}

/// Splits `water_grams` into the flavor pours (40% of the water) followed by
/// the concentration pours (the other 60%). Values are left unrounded.
pub fn plan_pours(water_grams: f64, flavor: Flavor, concentration: Concentration) -> PourPlan {
    let flavor_water = water_grams * FLAVOR_WATER_SHARE;
    let concentration_water = water_grams - flavor_water;

    let plan = PourPlan {
        flavor_pours: split(flavor_water, flavor_split(flavor)),
        concentration_pours: split(concentration_water, concentration_split(concentration)),
    };
    debug!(
        water_grams,
        %flavor,
        %concentration,
        pours = plan.len(),
        "pours planned"
    );
    plan
}

fn split(grams: f64, percentages: &[f64]) -> Vec<f64> {
    percentages.iter().map(|p| grams * (p / 100.0)).collect()
}

#[cfg(test)]
#[path = "tests/pours_tests.rs"]
mod tests;
