//! SQL helpers for partial updates
//!
//! `sql_for_partial_update` turns a sparse list of `field -> value` pairs into
//! the `SET` clause of an `UPDATE` statement plus the ordered values to bind:
//!
//! ```
//! use jobly_common::sql::{sql_for_partial_update, ColumnMap};
//!
//! const COLUMNS: ColumnMap = ColumnMap::new(&[("firstName", "first_name")]);
//!
//! let update = sql_for_partial_update(vec![("firstName", "Aliya"), ("age", "32")], &COLUMNS).unwrap();
//! assert_eq!(update.set_cols, r#""first_name"=$1, "age"=$2"#);
//! assert_eq!(update.values, vec!["Aliya", "32"]);
//! ```

use rust_decimal::Decimal;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use crate::{Error, Result};

/// Static translation from API field names to storage column names.
///
/// Fields without an entry are used verbatim as column names.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    entries: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    pub const EMPTY: ColumnMap = ColumnMap { entries: &[] };

    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Storage column for `field`
    pub fn column<'a>(&self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
            .unwrap_or(field)
    }
}

/// `SET` clause and the values bound to its placeholders, in order
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate<V> {
    pub set_cols: String,
    pub values: Vec<V>,
}

impl<V> PartialUpdate<V> {
    /// Placeholder for the first parameter after the `SET` values, e.g. the id in `WHERE id = $N`
    pub fn next_placeholder(&self) -> String {
        format!("${}", self.values.len() + 1)
    }
}

/// Build a `SET` clause from `data`, numbering placeholders `$1..$N` in order.
///
/// Fails with `Error::Validation` when there is nothing to update.
pub fn sql_for_partial_update<V>(
    data: Vec<(&str, V)>,
    columns: &ColumnMap,
) -> Result<PartialUpdate<V>> {
    if data.is_empty() {
        return Err(Error::Validation("No data".to_string()));
    }

    let mut cols = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());
    for (idx, (field, value)) in data.into_iter().enumerate() {
        cols.push(format!("\"{}\"=${}", columns.column(field), idx + 1));
        values.push(value);
    }

    Ok(PartialUpdate {
        set_cols: cols.join(", "),
        values,
    })
}

/// A nullable value destined for a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Int(Option<i32>),
    Numeric(Option<Decimal>),
}

/// Bind `values` to `query` in order
pub fn bind_values<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in values {
        query = match value {
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Int(v) => query.bind(v),
            SqlValue::Numeric(v) => query.bind(v),
        };
    }
    query
}
