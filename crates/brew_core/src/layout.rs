use shared::{
    domain::{PourPlan, QuantityField},
    error::CalcError,
};

/// Share of the total water taken by each pour, in percent, flavor pours
/// first.
pub fn layout_weights(plan: &PourPlan, water_grams: f64) -> Result<Vec<f64>, CalcError> {
    if water_grams == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    if !water_grams.is_finite() {
        return Err(CalcError::InvalidQuantity {
            field: QuantityField::Water,
            value: water_grams,
        });
    }
    Ok(plan
        .pours()
        .map(|(_, grams)| grams * 100.0 / water_grams)
        .collect())
}

/// CSS `grid-template-columns` value with one column per weight,
/// e.g. `"20% 20% 30% 30%"`.
pub fn grid_template_columns(weights: &[f64]) -> String {
    weights
        .iter()
        .map(|w| format!("{w}%"))
        .collect::<Vec<_>>()
        .join(" ")
}
