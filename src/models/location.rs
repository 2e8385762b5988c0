//! Location models: the city being looked up and the key it resolves to

use crate::ForecastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_general_category::{GeneralCategory, get_general_category};

/// A city name that passed the alphabetic-only check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    /// Validate a raw city name.
    ///
    /// Every character must be a Unicode letter (general category L*);
    /// combining marks, digits and letter-like numerals are rejected, as is
    /// the empty string.
    pub fn parse(city: &str) -> crate::Result<Self> {
        if city.is_empty() || !city.chars().all(is_letter) {
            return Err(ForecastError::invalid_city_name(
                "City name must contain alphabetic characters only.",
            ));
        }
        Ok(Self(city.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Opaque location identifier assigned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for LocationKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
