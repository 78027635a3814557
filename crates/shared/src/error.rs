use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::QuantityField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidPreference,
    UnknownEdit,
    InvalidQuantity,
    DivisionByZero,
    Validation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Failures of the brew calculations and of parsing their inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid {kind} preference '{value}'")]
    InvalidPreference { kind: &'static str, value: String },
    #[error("unknown quantity field '{0}', expected cups, coffee or water")]
    UnknownEdit(String),
    #[error("{field} must be a finite number, got {value}")]
    InvalidQuantity { field: QuantityField, value: f64 },
    #[error("water grams must be non-zero to compute layout weights")]
    DivisionByZero,
}

impl CalcError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPreference { .. } => ErrorCode::InvalidPreference,
            Self::UnknownEdit(_) => ErrorCode::UnknownEdit,
            Self::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            Self::DivisionByZero => ErrorCode::DivisionByZero,
        }
    }
}

impl From<CalcError> for ApiError {
    fn from(value: CalcError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_error_maps_to_api_error() {
        let api: ApiError = CalcError::DivisionByZero.into();
        assert_eq!(api.code, ErrorCode::DivisionByZero);
        assert!(api.message.contains("non-zero"));
    }

    #[test]
    fn error_code_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorCode::InvalidPreference).expect("json");
        assert_eq!(json, "\"invalid_preference\"");
    }
}
