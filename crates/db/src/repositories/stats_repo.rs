//! Aggregate queries for the statistics endpoints.
//!
//! All queries run over the full, unfiltered dataset by design:
//! statistics always reflect the whole population, independent of any
//! listing filters.

use sqlx::PgPool;
use titanic_core::stats::AGE_BUCKETS;

use crate::models::stats::{AgeGroupSurvival, GroupCount, GroupSurvival, SurvivalTotals};

/// Provides the grouped survival aggregations over `passengers`.
pub struct StatsRepo;

impl StatsRepo {
    /// Total passenger and survivor counts for the whole dataset.
    pub async fn survival_totals(pool: &PgPool) -> Result<SurvivalTotals, sqlx::Error> {
        let query = "\
            SELECT \
                COUNT(*)::BIGINT AS total, \
                COALESCE(SUM(survived), 0)::BIGINT AS survivors \
            FROM passengers";
        sqlx::query_as::<_, SurvivalTotals>(query)
            .fetch_one(pool)
            .await
    }

    /// Mean age over rows with a known age, `None` when there are none.
    pub async fn average_age(pool: &PgPool) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(age)::FLOAT8 FROM passengers WHERE age IS NOT NULL",
        )
        .fetch_one(pool)
        .await
    }

    /// Mean fare over rows with a known fare, `None` when there are none.
    pub async fn average_fare(pool: &PgPool) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(fare)::FLOAT8 FROM passengers WHERE fare IS NOT NULL",
        )
        .fetch_one(pool)
        .await
    }

    /// Passenger counts per class label, nulls excluded.
    pub async fn class_distribution(pool: &PgPool) -> Result<Vec<GroupCount>, sqlx::Error> {
        let query = "\
            SELECT c.class AS label, COUNT(*)::BIGINT AS count \
            FROM passengers p \
            LEFT JOIN classes c ON p.class_id = c.id \
            WHERE c.class IS NOT NULL \
            GROUP BY c.class, p.pclass \
            ORDER BY p.pclass";
        sqlx::query_as::<_, GroupCount>(query).fetch_all(pool).await
    }

    /// Passenger counts per sex, nulls excluded.
    pub async fn gender_distribution(pool: &PgPool) -> Result<Vec<GroupCount>, sqlx::Error> {
        let query = "\
            SELECT s.sex AS label, COUNT(*)::BIGINT AS count \
            FROM passengers p \
            LEFT JOIN sexes s ON p.sex_id = s.id \
            WHERE s.sex IS NOT NULL \
            GROUP BY s.sex \
            ORDER BY s.sex";
        sqlx::query_as::<_, GroupCount>(query).fetch_all(pool).await
    }

    /// Count and survivor count per class label, ordered by class.
    ///
    /// Rows with a null class label are excluded, not collected into a
    /// zero-class bucket.
    pub async fn survival_by_class(pool: &PgPool) -> Result<Vec<GroupSurvival>, sqlx::Error> {
        let query = "\
            SELECT \
                c.class AS label, \
                COUNT(*)::BIGINT AS total, \
                COALESCE(SUM(p.survived), 0)::BIGINT AS survivors \
            FROM passengers p \
            LEFT JOIN classes c ON p.class_id = c.id \
            WHERE c.class IS NOT NULL \
            GROUP BY c.class, p.pclass \
            ORDER BY p.pclass";
        sqlx::query_as::<_, GroupSurvival>(query)
            .fetch_all(pool)
            .await
    }

    /// Count and survivor count per sex, nulls excluded.
    pub async fn survival_by_gender(pool: &PgPool) -> Result<Vec<GroupSurvival>, sqlx::Error> {
        let query = "\
            SELECT \
                s.sex AS label, \
                COUNT(*)::BIGINT AS total, \
                COALESCE(SUM(p.survived), 0)::BIGINT AS survivors \
            FROM passengers p \
            LEFT JOIN sexes s ON p.sex_id = s.id \
            WHERE s.sex IS NOT NULL \
            GROUP BY s.sex \
            ORDER BY s.sex";
        sqlx::query_as::<_, GroupSurvival>(query)
            .fetch_all(pool)
            .await
    }

    /// Aggregates per fixed age bucket over rows with a known age.
    ///
    /// Empty buckets produce no row; output is ordered by the minimum
    /// age present in each bucket, which matches ascending bucket order.
    pub async fn age_groups(pool: &PgPool) -> Result<Vec<AgeGroupSurvival>, sqlx::Error> {
        let case = age_bucket_case();
        let query = format!(
            "SELECT \
                {case} AS age_group, \
                COUNT(*)::BIGINT AS total, \
                COALESCE(SUM(survived), 0)::BIGINT AS survivors, \
                AVG(age)::FLOAT8 AS avg_age \
             FROM passengers \
             WHERE age IS NOT NULL \
             GROUP BY 1 \
             ORDER BY MIN(age)"
        );
        sqlx::query_as::<_, AgeGroupSurvival>(&query)
            .fetch_all(pool)
            .await
    }
}

/// CASE expression mapping an age to its bucket label.
///
/// Generated from [`AGE_BUCKETS`] so the SQL boundaries can never
/// drift from the ones the domain layer tests against.
fn age_bucket_case() -> String {
    let mut case = String::from("CASE");
    for bucket in &AGE_BUCKETS {
        match bucket.max {
            Some(max) => {
                case.push_str(&format!(" WHEN age < {max} THEN '{}'", bucket.label));
            }
            None => case.push_str(&format!(" ELSE '{}'", bucket.label)),
        }
    }
    case.push_str(" END");
    case
}
