//! Read-only repository for the passenger listing endpoint.

use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::{PgPool, Postgres};

use titanic_core::filter::PassengerFilter;

use crate::models::passenger::Passenger;
use crate::query::{build_count_query, build_list_query, SqlParam};

/// Provides the filtered list and count queries over `passengers`.
pub struct PassengerRepo;

impl PassengerRepo {
    /// Fetch one page of passengers matching the filter.
    ///
    /// Rows are ordered by (pclass, sex, age) so pagination is stable.
    pub async fn list(
        pool: &PgPool,
        filter: &PassengerFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Passenger>, sqlx::Error> {
        let (sql, params) = build_list_query(filter, limit, offset);
        bind_all(sqlx::query_as::<_, Passenger>(&sql), &params)
            .fetch_all(pool)
            .await
    }

    /// Count all passengers matching the filter.
    pub async fn count(pool: &PgPool, filter: &PassengerFilter) -> Result<i64, sqlx::Error> {
        let (sql, params) = build_count_query(filter);
        bind_all_scalar(sqlx::query_scalar::<_, i64>(&sql), &params)
            .fetch_one(pool)
            .await
    }
}

/// Bind a built argument list onto a row query, in order.
fn bind_all<'q, T>(
    mut query: QueryAs<'q, Postgres, T, PgArguments>,
    params: &'q [SqlParam],
) -> QueryAs<'q, Postgres, T, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

/// Bind a built argument list onto a scalar query, in order.
fn bind_all_scalar<'q, T>(
    mut query: QueryScalar<'q, Postgres, T, PgArguments>,
    params: &'q [SqlParam],
) -> QueryScalar<'q, Postgres, T, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}
