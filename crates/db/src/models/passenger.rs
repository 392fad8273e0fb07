//! Passenger row model.

use serde::Serialize;
use sqlx::FromRow;

/// One denormalized passenger row as returned by the listing query.
///
/// `survived` and `pclass` are always present; everything else may be
/// null in the historical data.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Passenger {
    /// 0 (died) or 1 (survived).
    pub survived: i32,
    /// Passenger class, 1 through 3.
    pub pclass: i32,
    pub sex: Option<String>,
    pub age: Option<f64>,
    /// Siblings/spouses aboard.
    pub sibsp: i32,
    /// Parents/children aboard.
    pub parch: i32,
    pub fare: Option<f64>,
    pub adult_male: bool,
    pub alone: bool,
    /// Embarkation port code: C, Q, or S.
    pub embarked: Option<String>,
    /// Class label: First, Second, or Third.
    pub class_name: Option<String>,
    /// Demographic bucket: man, woman, or child.
    pub who: Option<String>,
    pub deck: Option<String>,
    pub embark_town: Option<String>,
    /// Display label redundant with `survived`: yes or no.
    pub alive: Option<String>,
}
