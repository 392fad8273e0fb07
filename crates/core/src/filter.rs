//! Validated filter model for the passenger listing endpoint.
//!
//! Each field is optional; an absent field applies no constraint.
//! Validation checks every present field against its range or enum
//! and names the offending field in the error. There is deliberately
//! no cross-field check: `min_age > max_age` is accepted and simply
//! matches no rows.

use crate::error::CoreError;

/// Recognized values for the `sex` filter.
pub const SEXES: &[&str] = &["male", "female"];

/// Recognized single-letter embarkation port codes.
pub const EMBARK_PORTS: &[&str] = &["C", "Q", "S"];

/// Maximum accepted passenger age.
pub const MAX_AGE: f64 = 120.0;

/// Optional predicates for the passenger listing query.
///
/// Immutable once validated; constructed per request and discarded
/// after the query runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassengerFilter {
    /// Survival status, 0 (died) or 1 (survived).
    pub survived: Option<i64>,
    /// Passenger class, 1 through 3.
    pub pclass: Option<i64>,
    /// `male` or `female`.
    pub sex: Option<String>,
    /// Lower age bound, inclusive.
    pub min_age: Option<f64>,
    /// Upper age bound, inclusive.
    pub max_age: Option<f64>,
    /// Embarkation port code: `C`, `Q`, or `S`.
    pub embarked: Option<String>,
    /// Adult-male flag.
    pub adult_male: Option<bool>,
    /// Travels-alone flag.
    pub alone: Option<bool>,
}

impl PassengerFilter {
    /// Check every present field against its range/enum constraint.
    ///
    /// Returns `CoreError::Validation` naming the first offending
    /// field. An empty filter is always valid.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(survived) = self.survived {
            if !(0..=1).contains(&survived) {
                return Err(CoreError::Validation(
                    "survived must be 0 or 1".into(),
                ));
            }
        }
        if let Some(pclass) = self.pclass {
            if !(1..=3).contains(&pclass) {
                return Err(CoreError::Validation(
                    "pclass must be 1, 2, or 3".into(),
                ));
            }
        }
        if let Some(sex) = self.sex.as_deref() {
            if !SEXES.contains(&sex) {
                return Err(CoreError::Validation(
                    "sex must be 'male' or 'female'".into(),
                ));
            }
        }
        if let Some(min_age) = self.min_age {
            if !min_age.is_finite() || min_age < 0.0 {
                return Err(CoreError::Validation(
                    "min_age must be a non-negative number".into(),
                ));
            }
        }
        if let Some(max_age) = self.max_age {
            if !max_age.is_finite() || max_age < 0.0 || max_age > MAX_AGE {
                return Err(CoreError::Validation(format!(
                    "max_age must be between 0 and {MAX_AGE}"
                )));
            }
        }
        if let Some(embarked) = self.embarked.as_deref() {
            if !EMBARK_PORTS.contains(&embarked) {
                return Err(CoreError::Validation(
                    "embarked must be 'C', 'Q', or 'S'".into(),
                ));
            }
        }
        Ok(())
    }

    /// True when no field carries a constraint.
    pub fn is_empty(&self) -> bool {
        self.survived.is_none()
            && self.pclass.is_none()
            && self.sex.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && self.embarked.is_none()
            && self.adult_male.is_none()
            && self.alone.is_none()
    }
}
