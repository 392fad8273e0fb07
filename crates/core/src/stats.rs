//! Survival statistics reductions and the fixed age buckets.
//!
//! The grouping and counting happen in SQL; the rate arithmetic,
//! zero-division policy, and rounding live here so they are pure and
//! applied identically across every statistics endpoint.

/// One of the fixed age ranges used to group passengers.
///
/// `max` is exclusive; `None` means unbounded (the `65+` bucket).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBucket {
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
}

/// The five contiguous, non-overlapping age buckets, ordered by
/// ascending minimum age. Rows with a null age belong to no bucket.
pub const AGE_BUCKETS: [AgeBucket; 5] = [
    AgeBucket { label: "0-17", min: 0.0, max: Some(18.0) },
    AgeBucket { label: "18-29", min: 18.0, max: Some(30.0) },
    AgeBucket { label: "30-49", min: 30.0, max: Some(50.0) },
    AgeBucket { label: "50-64", min: 50.0, max: Some(65.0) },
    AgeBucket { label: "65+", min: 65.0, max: None },
];

/// The bucket a (non-null, non-negative) age falls into.
pub fn bucket_for(age: f64) -> &'static AgeBucket {
    AGE_BUCKETS
        .iter()
        .find(|b| age >= b.min && b.max.is_none_or(|max| age < max))
        .unwrap_or(&AGE_BUCKETS[0])
}

/// Survival rate in percent, rounded to 2 decimals.
///
/// An empty population has a rate of 0, not an error.
pub fn survival_rate(survivors: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(survivors as f64 / total as f64 * 100.0)
}

/// Round to 2 decimal places (rates, general averages).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (displayed per-bucket average age).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
