//! Query parameter types for the passenger listing endpoint.

use serde::Deserialize;
use titanic_core::filter::PassengerFilter;

/// Query parameters accepted by `GET /passengers`.
///
/// Pagination and filter fields are all optional; defaults and range
/// validation are applied in the handler via `titanic_core`.
#[derive(Debug, Deserialize)]
pub struct PassengerListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub survived: Option<i64>,
    pub pclass: Option<i64>,
    pub sex: Option<String>,
    pub min_age: Option<f64>,
    pub max_age: Option<f64>,
    pub embarked: Option<String>,
    pub adult_male: Option<bool>,
    pub alone: Option<bool>,
}

impl PassengerListParams {
    /// The filter portion of the request, not yet validated.
    pub fn filter(&self) -> PassengerFilter {
        PassengerFilter {
            survived: self.survived,
            pclass: self.pclass,
            sex: self.sex.clone(),
            min_age: self.min_age,
            max_age: self.max_age,
            embarked: self.embarked.clone(),
            adult_male: self.adult_male,
            alone: self.alone,
        }
    }
}
