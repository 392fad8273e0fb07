//! SQL construction for the passenger listing and count queries.
//!
//! Pure and deterministic: the same filter always yields the same
//! query text and argument list. Both query variants share one
//! predicate-list builder, which guarantees the WHERE clause and the
//! argument order stay in lockstep by construction.

use titanic_core::filter::PassengerFilter;

/// Columns selected by the listing query.
const LIST_COLUMNS: &str = "p.survived, p.pclass, s.sex, p.age, p.sibsp, p.parch, \
    p.fare, p.adult_male, p.alone, e.embarked, c.class AS class_name, w.who, \
    d.deck, t.embark_town, a.alive";

/// Fixed join across the fact table and its denormalization lookups.
const FROM_JOINS: &str = "FROM passengers p \
    LEFT JOIN sexes s ON p.sex_id = s.id \
    LEFT JOIN embark_ports e ON p.embark_port_id = e.id \
    LEFT JOIN classes c ON p.class_id = c.id \
    LEFT JOIN who_categories w ON p.who_id = w.id \
    LEFT JOIN decks d ON p.deck_id = d.id \
    LEFT JOIN embark_towns t ON p.embark_town_id = t.id \
    LEFT JOIN alive_labels a ON p.alive_id = a.id";

/// Deterministic tie-break so pagination is stable across requests.
const ORDER_BY: &str = " ORDER BY p.pclass, s.sex, p.age";

/// A positional query argument.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Ordered list of `AND`-joined predicates and their arguments.
///
/// Every predicate appends its `$n` placeholder and pushes its value
/// in the same call, so placeholder numbering and argument position
/// cannot drift apart.
#[derive(Debug, Default)]
struct PredicateList {
    conditions: Vec<String>,
    params: Vec<SqlParam>,
}

impl PredicateList {
    /// Append one predicate. `expr` is the column expression plus
    /// operator, e.g. `"p.age >="`.
    fn push(&mut self, expr: &str, param: SqlParam) {
        self.conditions
            .push(format!("{expr} ${}", self.params.len() + 1));
        self.params.push(param);
    }

    /// Build the predicate list for a filter.
    ///
    /// Predicates are applied in a fixed field order (survived, pclass,
    /// sex, min_age, max_age, embarked, adult_male, alone) so two
    /// builders given the same filter produce textually identical
    /// output.
    fn from_filter(filter: &PassengerFilter) -> Self {
        let mut list = Self::default();
        if let Some(survived) = filter.survived {
            list.push("p.survived =", SqlParam::Int(survived));
        }
        if let Some(pclass) = filter.pclass {
            list.push("p.pclass =", SqlParam::Int(pclass));
        }
        if let Some(sex) = &filter.sex {
            list.push("s.sex =", SqlParam::Text(sex.clone()));
        }
        if let Some(min_age) = filter.min_age {
            list.push("p.age >=", SqlParam::Float(min_age));
        }
        if let Some(max_age) = filter.max_age {
            list.push("p.age <=", SqlParam::Float(max_age));
        }
        if let Some(embarked) = &filter.embarked {
            list.push("e.embarked =", SqlParam::Text(embarked.clone()));
        }
        if let Some(adult_male) = filter.adult_male {
            list.push("p.adult_male =", SqlParam::Bool(adult_male));
        }
        if let Some(alone) = filter.alone {
            list.push("p.alone =", SqlParam::Bool(alone));
        }
        list
    }

    /// ` WHERE ...` clause, or an empty string for an empty filter.
    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }
}

/// Build the row-fetch query for a filter and pagination window.
///
/// `OFFSET` is only appended when `LIMIT` is present; an offset
/// without a limit is meaningless and is omitted.
pub fn build_list_query(
    filter: &PassengerFilter,
    limit: Option<i64>,
    offset: Option<i64>,
) -> (String, Vec<SqlParam>) {
    let mut list = PredicateList::from_filter(filter);

    let mut sql = format!(
        "SELECT {LIST_COLUMNS} {FROM_JOINS}{}{ORDER_BY}",
        list.where_clause()
    );

    if let Some(limit) = limit {
        list.params.push(SqlParam::Int(limit));
        sql.push_str(&format!(" LIMIT ${}", list.params.len()));

        if let Some(offset) = offset {
            list.params.push(SqlParam::Int(offset));
            sql.push_str(&format!(" OFFSET ${}", list.params.len()));
        }
    }

    (sql, list.params)
}

/// Build the count-only variant with identical predicate logic and no
/// ordering or pagination clause.
pub fn build_count_query(filter: &PassengerFilter) -> (String, Vec<SqlParam>) {
    let list = PredicateList::from_filter(filter);
    let sql = format!(
        "SELECT COUNT(*)::BIGINT {FROM_JOINS}{}",
        list.where_clause()
    );
    (sql, list.params)
}
