//! Response types for the passenger and statistics endpoints.
//!
//! This is the assembly layer: raw rows and aggregate counts come in,
//! the API's response contract goes out. Every numeric field is always
//! present; absence is an explicit `null`, never a missing key.

use std::collections::BTreeMap;

use serde::Serialize;
use titanic_core::pagination::total_pages;
use titanic_core::stats::{round1, round2, survival_rate};
use titanic_db::models::passenger::Passenger;
use titanic_db::models::stats::{AgeGroupSurvival, GroupSurvival};

/// Paginated passenger listing.
#[derive(Debug, Serialize)]
pub struct PassengerListResponse {
    pub passengers: Vec<Passenger>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl PassengerListResponse {
    /// Bundle one page of rows with its pagination metadata.
    pub fn new(passengers: Vec<Passenger>, total_count: i64, page: i64, page_size: i64) -> Self {
        Self {
            passengers,
            total_count,
            page,
            page_size,
            total_pages: total_pages(total_count, page_size),
        }
    }
}

/// Overall statistics payload for `GET /passengers/statistics`.
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub total_passengers: i64,
    pub survival_rate: f64,
    pub survivors: i64,
    pub casualties: i64,
    pub average_age: Option<f64>,
    pub average_fare: Option<f64>,
    pub class_distribution: BTreeMap<String, i64>,
    pub gender_distribution: BTreeMap<String, i64>,
}

/// Survival breakdown for one passenger class.
#[derive(Debug, Serialize)]
pub struct ClassSurvival {
    pub class: String,
    pub total_passengers: i64,
    pub survivors: i64,
    pub survival_rate: f64,
}

impl From<GroupSurvival> for ClassSurvival {
    fn from(group: GroupSurvival) -> Self {
        Self {
            class: group.label,
            total_passengers: group.total,
            survivors: group.survivors,
            survival_rate: survival_rate(group.survivors, group.total),
        }
    }
}

/// Survival breakdown for one gender.
#[derive(Debug, Serialize)]
pub struct GenderSurvival {
    pub gender: String,
    pub total_passengers: i64,
    pub survivors: i64,
    pub survival_rate: f64,
}

impl From<GroupSurvival> for GenderSurvival {
    fn from(group: GroupSurvival) -> Self {
        Self {
            gender: group.label,
            total_passengers: group.total,
            survivors: group.survivors,
            survival_rate: survival_rate(group.survivors, group.total),
        }
    }
}

/// Survival breakdown for one age bucket.
#[derive(Debug, Serialize)]
pub struct AgeGroup {
    pub age_group: String,
    pub total_passengers: i64,
    pub survivors: i64,
    pub survival_rate: f64,
    pub average_age: f64,
}

impl From<AgeGroupSurvival> for AgeGroup {
    fn from(group: AgeGroupSurvival) -> Self {
        Self {
            age_group: group.age_group,
            total_passengers: group.total,
            survivors: group.survivors,
            survival_rate: survival_rate(group.survivors, group.total),
            average_age: round1(group.avg_age),
        }
    }
}

/// Envelope for `GET /passengers/survival-by-class`.
#[derive(Debug, Serialize)]
pub struct SurvivalByClassResponse {
    pub survival_by_class: Vec<ClassSurvival>,
}

/// Envelope for `GET /passengers/survival-by-gender`.
#[derive(Debug, Serialize)]
pub struct SurvivalByGenderResponse {
    pub survival_by_gender: Vec<GenderSurvival>,
}

/// Envelope for `GET /passengers/age-groups`.
#[derive(Debug, Serialize)]
pub struct AgeGroupsResponse {
    pub age_groups: Vec<AgeGroup>,
}

/// Round an optional average to the general 2-decimal precision.
pub fn round_average(value: Option<f64>) -> Option<f64> {
    value.map(round2)
}
