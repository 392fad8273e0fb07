//! Handler for the paginated passenger listing endpoint.

use axum::extract::{Query, State};
use axum::Json;
use titanic_core::pagination::{page_offset, validate_page_params, DEFAULT_PAGE_SIZE};
use titanic_db::repositories::PassengerRepo;

use crate::error::AppResult;
use crate::params::PassengerListParams;
use crate::response::PassengerListResponse;
use crate::state::AppState;

/// GET /passengers
///
/// Paginated listing with optional filters. The count query runs
/// first so the pagination metadata is exact; a page past the end
/// returns an empty list, not an error.
pub async fn list_passengers(
    State(state): State<AppState>,
    Query(params): Query<PassengerListParams>,
) -> AppResult<Json<PassengerListResponse>> {
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    validate_page_params(page, page_size)?;

    let filter = params.filter();
    filter.validate()?;

    let total_count = PassengerRepo::count(&state.pool, &filter)
        .await
        .inspect_err(|error| {
            tracing::error!(%error, ?filter, "Passenger count query failed");
        })?;

    let offset = page_offset(page, page_size);
    let passengers = PassengerRepo::list(&state.pool, &filter, Some(page_size), Some(offset))
        .await
        .inspect_err(|error| {
            tracing::error!(%error, ?filter, page, page_size, offset, "Passenger listing query failed");
        })?;

    tracing::debug!(
        returned = passengers.len(),
        total_count,
        page,
        "Passenger listing fetched"
    );

    Ok(Json(PassengerListResponse::new(
        passengers,
        total_count,
        page,
        page_size,
    )))
}
