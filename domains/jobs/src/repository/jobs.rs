//! Job repository

use jobly_common::sql::{bind_values, sql_for_partial_update, ColumnMap};
use jobly_common::{Error, Result};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::entities::{Company, Job, JobDetail, JobFilter, JobUpdate, NewJob};
use crate::domain::validation::contains_pattern;

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Update fields already match their column names
const UPDATE_COLUMNS: ColumnMap = ColumnMap::EMPTY;

fn not_found(id: i32) -> Error {
    Error::NotFound(format!("No job: {id}"))
}

/// Flat row of the jobs/companies join
#[derive(sqlx::FromRow)]
struct JobDetailRow {
    id: i32,
    title: String,
    salary: Option<i32>,
    equity: Option<Decimal>,
    handle: String,
    name: String,
    description: String,
    num_employees: Option<i32>,
    logo_url: Option<String>,
}

impl From<JobDetailRow> for JobDetail {
    fn from(row: JobDetailRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            salary: row.salary,
            equity: row.equity,
            company: Company {
                handle: row.handle,
                name: row.name,
                description: row.description,
                num_employees: row.num_employees,
                logo_url: row.logo_url,
            },
        }
    }
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a job. An unknown company handle surfaces as `Error::Constraint`.
    pub async fn create(&self, job: &NewJob) -> Result<Job> {
        let row = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(&job.title)
        .bind(job.salary)
        .bind(job.equity)
        .bind(&job.company_handle)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List jobs matching every supplied filter, ordered by title
    pub async fn find_all(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs"));
        let mut conjunction = " WHERE ";

        if let Some(title) = filter.title.as_deref() {
            query
                .push(conjunction)
                .push("title ILIKE ")
                .push_bind(contains_pattern(title));
            conjunction = " AND ";
        }

        if let Some(min_salary) = filter.min_salary {
            query
                .push(conjunction)
                .push("salary >= ")
                .push_bind(min_salary);
            conjunction = " AND ";
        }

        if filter.has_equity == Some(true) {
            query.push(conjunction).push("equity > 0");
        }

        query.push(" ORDER BY title, id");

        let rows = query.build_query_as::<Job>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Find a job and its company by job ID
    pub async fn get(&self, id: i32) -> Result<JobDetail> {
        let row = sqlx::query_as::<_, JobDetailRow>(
            r#"
            SELECT j.id, j.title, j.salary, j.equity,
                   c.handle, c.name, c.description, c.num_employees, c.logo_url
            FROM jobs j
            JOIN companies c ON c.handle = j.company_handle
            WHERE j.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;
        Ok(row.into())
    }

    /// Apply a partial update and return the full updated job
    pub async fn update(&self, id: i32, changes: JobUpdate) -> Result<Job> {
        let update = sql_for_partial_update(changes.into_fields(), &UPDATE_COLUMNS)?;
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = {} RETURNING {JOB_COLUMNS}",
            update.set_cols,
            update.next_placeholder()
        );

        let row = bind_values(sqlx::query_as::<_, Job>(&sql), update.values)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(row)
    }

    /// Delete a job by ID
    pub async fn remove(&self, id: i32) -> Result<()> {
        sqlx::query_scalar::<_, i32>("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(())
    }
}
