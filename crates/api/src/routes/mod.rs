pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{passengers, statistics};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /passengers                        paginated, filtered listing
/// /passengers/statistics             overall aggregate payload
/// /passengers/survival-by-class      survival rate per class
/// /passengers/survival-by-gender     survival rate per gender
/// /passengers/age-groups             survival rate per age bucket
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/passengers", get(passengers::list_passengers))
        .route("/passengers/statistics", get(statistics::get_statistics))
        .route(
            "/passengers/survival-by-class",
            get(statistics::get_survival_by_class),
        )
        .route(
            "/passengers/survival-by-gender",
            get(statistics::get_survival_by_gender),
        )
        .route("/passengers/age-groups", get(statistics::get_age_groups))
}
