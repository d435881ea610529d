//! Job domain entities for Jobly
//!
//! Stored records (`Job`, `Company`, `JobDetail`) and the validated inputs the
//! repository accepts (`NewJob`, `JobUpdate`, `JobFilter`). JSON field names are
//! camelCase; equity is carried as an exact decimal and serialized as a string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use jobly_common::extractors::coerce;
use jobly_common::SqlValue;

use crate::domain::validation::{validate_equity, validate_min_salary};

/// A job posting as stored in the `jobs` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Company embedded in a job's detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// A job together with the company it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company: Company,
}

/// Input for creating a job
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default, deserialize_with = "coerce::optional_i32")]
    #[validate(range(min = 0))]
    pub salary: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<Decimal>,

    #[serde(alias = "company_handle")]
    #[validate(length(min = 1, max = 25))]
    pub company_handle: String,
}

/// Partial update of a job. Absent fields are left untouched; the company
/// a job belongs to can never change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "coerce::optional_i32")]
    #[validate(range(min = 0))]
    pub salary: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<Decimal>,
}

impl JobUpdate {
    /// Supplied fields as `(column, value)` pairs, in declaration order
    pub fn into_fields(self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::with_capacity(3);
        if let Some(title) = self.title {
            fields.push(("title", SqlValue::Text(Some(title))));
        }
        if let Some(salary) = self.salary {
            fields.push(("salary", SqlValue::Int(Some(salary))));
        }
        if let Some(equity) = self.equity {
            fields.push(("equity", SqlValue::Numeric(Some(equity))));
        }
        fields
    }
}

/// Search constraints for listing jobs; all supplied constraints must hold
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,

    /// Inclusive lower bound, any non-negative number; jobs without a salary never match
    #[validate(custom(function = "validate_min_salary"))]
    pub min_salary: Option<Decimal>,

    /// When true, only jobs with equity above zero
    #[serde(alias = "equity")]
    pub has_equity: Option<bool>,
}
