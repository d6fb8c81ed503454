//! Validation of the city input form
//!
//! The form holds raw text as typed. Only presence and numeric checks are
//! made here, anything else is left to the backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CityReadings, NewCity};

/// Numeric inputs of the city form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Wind,
    Rain,
    Temp,
}

impl FormField {
    /// Name of the field in the wire format
    pub fn wire_name(&self) -> &'static str {
        match self {
            FormField::Wind => "sila_vetra",
            FormField::Rain => "mm_zrazky",
            FormField::Temp => "teplota",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("city name is empty")]
    EmptyName,

    #[error("{0} is not a number")]
    InvalidNumber(FormField),
}

/// Raw contents of the four input fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityForm {
    pub name: String,
    pub wind: String,
    pub rain: String,
    pub temp: String,
}

impl CityForm {
    pub fn new(
        name: impl Into<String>,
        wind: impl Into<String>,
        rain: impl Into<String>,
        temp: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            wind: wind.into(),
            rain: rain.into(),
            temp: temp.into(),
        }
    }

    /// Form with only the name filled in
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Body for creating a city from this form
    pub fn to_new_city(&self) -> Result<NewCity, FormError> {
        let nazov = validate_name(&self.name)?;
        let readings = self.to_readings()?;

        Ok(NewCity {
            nazov,
            sila_vetra: readings.sila_vetra,
            mm_zrazky: readings.mm_zrazky,
            teplota: readings.teplota,
        })
    }

    /// Body for updating a city's readings from this form
    pub fn to_readings(&self) -> Result<CityReadings, FormError> {
        Ok(CityReadings {
            sila_vetra: parse_reading(&self.wind, FormField::Wind)?,
            mm_zrazky: parse_reading(&self.rain, FormField::Rain)?,
            teplota: parse_reading(&self.temp, FormField::Temp)?,
        })
    }
}

/// Validate a city name, returning it trimmed
pub fn validate_name(name: &str) -> Result<String, FormError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parse one numeric input. NaN and infinities are rejected.
pub fn parse_reading(raw: &str, field: FormField) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(FormError::InvalidNumber(field))
}
