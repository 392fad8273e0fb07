//! Handlers for the aggregate statistics endpoints.
//!
//! Statistics are always computed over the full dataset; listing
//! filters never apply here. The underlying queries are independent
//! read-only aggregations, so each handler issues them concurrently.

use axum::extract::State;
use axum::Json;
use titanic_core::stats::survival_rate;
use titanic_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::{
    round_average, AgeGroupsResponse, StatisticsResponse, SurvivalByClassResponse,
    SurvivalByGenderResponse,
};
use crate::state::AppState;

/// GET /passengers/statistics
pub async fn get_statistics(State(state): State<AppState>) -> AppResult<Json<StatisticsResponse>> {
    let (totals, average_age, average_fare, class_counts, gender_counts) = tokio::try_join!(
        StatsRepo::survival_totals(&state.pool),
        StatsRepo::average_age(&state.pool),
        StatsRepo::average_fare(&state.pool),
        StatsRepo::class_distribution(&state.pool),
        StatsRepo::gender_distribution(&state.pool),
    )?;

    let casualties = totals.total - totals.survivors;

    Ok(Json(StatisticsResponse {
        total_passengers: totals.total,
        survival_rate: survival_rate(totals.survivors, totals.total),
        survivors: totals.survivors,
        casualties,
        average_age: round_average(average_age),
        average_fare: round_average(average_fare),
        class_distribution: class_counts
            .into_iter()
            .map(|g| (g.label, g.count))
            .collect(),
        gender_distribution: gender_counts
            .into_iter()
            .map(|g| (g.label, g.count))
            .collect(),
    }))
}

/// GET /passengers/survival-by-class
pub async fn get_survival_by_class(
    State(state): State<AppState>,
) -> AppResult<Json<SurvivalByClassResponse>> {
    let groups = StatsRepo::survival_by_class(&state.pool).await?;
    Ok(Json(SurvivalByClassResponse {
        survival_by_class: groups.into_iter().map(Into::into).collect(),
    }))
}

/// GET /passengers/survival-by-gender
pub async fn get_survival_by_gender(
    State(state): State<AppState>,
) -> AppResult<Json<SurvivalByGenderResponse>> {
    let groups = StatsRepo::survival_by_gender(&state.pool).await?;
    Ok(Json(SurvivalByGenderResponse {
        survival_by_gender: groups.into_iter().map(Into::into).collect(),
    }))
}

/// GET /passengers/age-groups
pub async fn get_age_groups(State(state): State<AppState>) -> AppResult<Json<AgeGroupsResponse>> {
    let groups = StatsRepo::age_groups(&state.pool).await?;
    Ok(Json(AgeGroupsResponse {
        age_groups: groups.into_iter().map(Into::into).collect(),
    }))
}
