//! Raw aggregate rows returned by the statistics queries.
//!
//! These carry counts only; survival rates and rounding are computed
//! in `titanic_core::stats` so the policy is uniform across endpoints.

use sqlx::FromRow;

/// Overall population counts.
#[derive(Debug, Clone, FromRow)]
pub struct SurvivalTotals {
    pub total: i64,
    pub survivors: i64,
}

/// Count and survivor count for one group (class label or sex).
///
/// Rows with a null group label are filtered out in SQL, so `label`
/// is always present.
#[derive(Debug, Clone, FromRow)]
pub struct GroupSurvival {
    pub label: String,
    pub total: i64,
    pub survivors: i64,
}

/// Member count for one group, used by the distribution maps.
#[derive(Debug, Clone, FromRow)]
pub struct GroupCount {
    pub label: String,
    pub count: i64,
}

/// Aggregates for one age bucket. Only rows with a non-null age are
/// grouped, so `avg_age` is always defined.
#[derive(Debug, Clone, FromRow)]
pub struct AgeGroupSurvival {
    pub age_group: String,
    pub total: i64,
    pub survivors: i64,
    pub avg_age: f64,
}
