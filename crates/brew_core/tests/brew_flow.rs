use brew_core::{grid_template_columns, layout_weights, plan_pours, BrewCalculator, QuantityState};
use shared::{
    domain::{Concentration, Flavor, PourPreferences, QuantityEdit, Roast},
    error::CalcError,
};

#[test]
fn slider_edit_replans_pours_and_layout() {
    let mut quantities = QuantityState::new();
    let tuple = quantities.apply(QuantityEdit::Water(472.0));
    assert_eq!((tuple.cups, tuple.coffee_grams), (2.0, 32.0));

    let plan = plan_pours(tuple.water_grams, Flavor::Standard, Concentration::Medium);
    assert!((plan.total_grams() - 472.0).abs() < 1e-6);

    let weights = layout_weights(&plan, tuple.water_grams).expect("weights");
    assert_eq!(weights.len(), 4);
    assert!((weights.iter().sum::<f64>() - 100.0).abs() < 1e-6);
    assert_eq!(grid_template_columns(&weights).split(' ').count(), 4);
}

#[test]
fn layout_refuses_zero_water() {
    let plan = plan_pours(236.0, Flavor::Standard, Concentration::Medium);
    assert_eq!(layout_weights(&plan, 0.0), Err(CalcError::DivisionByZero));
}

#[test]
fn summary_serializes_for_front_ends() {
    let mut calculator = BrewCalculator::new(
        PourPreferences {
            flavor: Flavor::Bright,
            concentration: Concentration::Light,
        },
        Roast::Dark,
    );
    calculator.apply_edit(QuantityEdit::Cups(3.0));

    let summary = calculator.summary().expect("summary");
    let json = serde_json::to_value(&summary).expect("json");

    assert_eq!(json["quantities"]["water_grams"], 708.0);
    assert_eq!(json["preferences"]["flavor"], "bright");
    assert_eq!(json["preferences"]["concentration"], "light");
    assert_eq!(json["roast"], "dark");
    assert_eq!(json["water_temperature_celsius"], 83);
    assert_eq!(json["steps"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["steps"][2]["group"], "concentration");
    assert_eq!(json["steps"][2]["display_grams"], 425);
}
