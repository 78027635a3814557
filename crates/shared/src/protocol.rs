use serde::{Deserialize, Serialize};

use crate::domain::{
    Concentration, Flavor, PickerOption, PourGroup, PourPlan, PourPreferences, QuantityTuple,
    Roast,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityRequest {
    pub field: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub water_grams: f64,
    pub flavor: String,
    pub concentration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub plan: PourPlan,
    pub water_grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub weights: Vec<f64>,
    pub grid_template_columns: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditPayload {
    pub field: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit: Option<EditPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roast: Option<String>,
}

/// One pour as shown to the brewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PourStep {
    pub group: PourGroup,
    pub grams: f64,
    pub display_grams: u32,
    pub weight_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewSummary {
    pub quantities: QuantityTuple,
    pub preferences: PourPreferences,
    pub roast: Roast,
    pub water_temperature_celsius: u8,
    pub plan: PourPlan,
    pub steps: Vec<PourStep>,
    pub grid_template_columns: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub flavor: Vec<PickerOption>,
    pub concentration: Vec<PickerOption>,
    pub roast: Vec<PickerOption>,
}

impl OptionsResponse {
    pub fn catalogue() -> Self {
        Self {
            flavor: Flavor::options(),
            concentration: Concentration::options(),
            roast: Roast::options(),
        }
    }
}
