use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Cups, coffee and water for one cup of the 4:6 recipe. Every other tuple
/// is a linear scaling of this one.
pub const REFERENCE_QUANTITIES: QuantityTuple = QuantityTuple {
    cups: 1.0,
    coffee_grams: 16.0,
    water_grams: 236.0,
};

/// Share of the total water poured during the flavor phase.
pub const FLAVOR_WATER_SHARE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityTuple {
    pub cups: f64,
    pub coffee_grams: f64,
    pub water_grams: f64,
}

impl Default for QuantityTuple {
    fn default() -> Self {
        REFERENCE_QUANTITIES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityField {
    Cups,
    Coffee,
    Water,
}

impl QuantityField {
    pub const ALL: [QuantityField; 3] = [Self::Cups, Self::Coffee, Self::Water];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cups => "cups",
            Self::Coffee => "coffee",
            Self::Water => "water",
        }
    }

    /// Inclusive input range offered by the quantity sliders.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Cups => (1.0, 10.0),
            Self::Coffee => (16.0, 160.0),
            Self::Water => (236.0, 2360.0),
        }
    }

    pub fn clamp(self, value: f64) -> f64 {
        let (min, max) = self.bounds();
        value.clamp(min, max)
    }
}

impl fmt::Display for QuantityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityField {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cups" => Ok(Self::Cups),
            "coffee" => Ok(Self::Coffee),
            "water" => Ok(Self::Water),
            other => Err(CalcError::UnknownEdit(other.to_string())),
        }
    }
}

/// A user edit of exactly one quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum QuantityEdit {
    Cups(f64),
    Coffee(f64),
    Water(f64),
}

impl QuantityEdit {
    pub fn new(field: QuantityField, value: f64) -> Self {
        match field {
            QuantityField::Cups => Self::Cups(value),
            QuantityField::Coffee => Self::Coffee(value),
            QuantityField::Water => Self::Water(value),
        }
    }

    /// Builds an edit from untyped input, rejecting unknown fields and
    /// non-finite values.
    pub fn parse(field: &str, value: f64) -> Result<Self, CalcError> {
        let field = field.parse::<QuantityField>()?;
        Self::new(field, value).checked()
    }

    /// Rejects NaN and infinite values.
    pub fn checked(self) -> Result<Self, CalcError> {
        if self.value().is_finite() {
            Ok(self)
        } else {
            Err(CalcError::InvalidQuantity {
                field: self.field(),
                value: self.value(),
            })
        }
    }

    pub fn field(&self) -> QuantityField {
        match self {
            Self::Cups(_) => QuantityField::Cups,
            Self::Coffee(_) => QuantityField::Coffee,
            Self::Water(_) => QuantityField::Water,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Self::Cups(v) | Self::Coffee(v) | Self::Water(v) => v,
        }
    }

    /// Same edit with its value pulled into the slider range.
    pub fn clamped(self) -> Self {
        let field = self.field();
        Self::new(field, field.clamp(self.value()))
    }
}

/// `(label, value)` pair shown by an option picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub label: &'static str,
    pub value: &'static str,
}

macro_rules! preference_enum {
    ($name:ident, $kind:literal, {
        $($(#[$meta:meta])* $variant:ident => $text:literal),+ $(,)?
    }) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$meta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            pub fn options() -> Vec<PickerOption> {
                Self::ALL
                    .iter()
                    .map(|v| PickerOption { label: v.as_str(), value: v.as_str() })
                    .collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(CalcError::InvalidPreference {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

preference_enum!(Flavor, "flavor", {
    #[default]
    Standard => "standard",
    Sweet => "sweet",
    Bright => "bright",
});

preference_enum!(Concentration, "concentration", {
    Light => "light",
    #[default]
    Medium => "medium",
    Strong => "strong",
});

preference_enum!(Roast, "roast", {
    #[default]
    Light => "light",
    Medium => "medium",
    Dark => "dark",
});

impl Roast {
    /// Recommended brewing water temperature in degrees Celsius.
    pub fn water_temperature_celsius(self) -> u8 {
        match self {
            Self::Light => 93,
            Self::Medium => 88,
            Self::Dark => 83,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PourPreferences {
    pub flavor: Flavor,
    pub concentration: Concentration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PourGroup {
    Flavor,
    Concentration,
}

/// Pours for one brew, in grams. Flavor pours come first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PourPlan {
    pub flavor_pours: Vec<f64>,
    pub concentration_pours: Vec<f64>,
}

impl PourPlan {
    /// Every pour in brewing order, tagged with its phase.
    pub fn pours(&self) -> impl Iterator<Item = (PourGroup, f64)> + '_ {
        self.flavor_pours
            .iter()
            .map(|&g| (PourGroup::Flavor, g))
            .chain(
                self.concentration_pours
                    .iter()
                    .map(|&g| (PourGroup::Concentration, g)),
            )
    }

    pub fn len(&self) -> usize {
        self.flavor_pours.len() + self.concentration_pours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_grams(&self) -> f64 {
        self.pours().map(|(_, g)| g).sum()
    }
}
