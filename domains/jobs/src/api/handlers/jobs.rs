//! Job management API handlers
//!
//! Reads are public; creating, updating and deleting jobs requires an admin
//! token. Authorization is checked before the request body is parsed.

use axum::{extract::State, http::StatusCode, Json};
use jobly_auth::AdminUser;
use jobly_common::extractors::ParsedPath;
use jobly_common::{Result, ValidatedJson, ValidatedQuery};
use serde::{Deserialize, Serialize};

use crate::api::middleware::JobsState;
use crate::domain::entities::{Job, JobDetail, JobFilter, JobUpdate, NewJob};

/// `{ "job": ... }`
#[derive(Debug, Serialize, Deserialize)]
pub struct JobBody<T> {
    pub job: T,
}

/// `{ "jobs": [...] }`
#[derive(Debug, Serialize, Deserialize)]
pub struct JobsBody {
    pub jobs: Vec<Job>,
}

/// `{ "deleted": id }`
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedBody {
    pub deleted: i32,
}

/// Create a job
///
/// **POST /jobs**
pub async fn create_job(
    AdminUser(ctx): AdminUser,
    State(state): State<JobsState>,
    ValidatedJson(new_job): ValidatedJson<NewJob>,
) -> Result<(StatusCode, Json<JobBody<Job>>)> {
    let job = state.repos.jobs.create(&new_job).await?;

    tracing::info!(job_id = job.id, company = %job.company_handle, admin = %ctx.username, "Job created");

    Ok((StatusCode::CREATED, Json(JobBody { job })))
}

/// List jobs, optionally filtered by `title`, `minSalary` and `hasEquity`
///
/// **GET /jobs**
pub async fn list_jobs(
    State(state): State<JobsState>,
    ValidatedQuery(filter): ValidatedQuery<JobFilter>,
) -> Result<Json<JobsBody>> {
    let jobs = state.repos.jobs.find_all(&filter).await?;
    Ok(Json(JobsBody { jobs }))
}

/// Get a single job with its company
///
/// **GET /jobs/{id}**
pub async fn get_job(
    State(state): State<JobsState>,
    ParsedPath(id): ParsedPath<i32>,
) -> Result<Json<JobBody<JobDetail>>> {
    let job = state.repos.jobs.get(id).await?;
    Ok(Json(JobBody { job }))
}

/// Partially update a job
///
/// **PATCH /jobs/{id}**
pub async fn update_job(
    AdminUser(ctx): AdminUser,
    State(state): State<JobsState>,
    ParsedPath(id): ParsedPath<i32>,
    ValidatedJson(changes): ValidatedJson<JobUpdate>,
) -> Result<Json<JobBody<Job>>> {
    let job = state.repos.jobs.update(id, changes).await?;

    tracing::info!(job_id = id, admin = %ctx.username, "Job updated");

    Ok(Json(JobBody { job }))
}

/// Delete a job
///
/// **DELETE /jobs/{id}**
pub async fn delete_job(
    AdminUser(ctx): AdminUser,
    State(state): State<JobsState>,
    ParsedPath(id): ParsedPath<i32>,
) -> Result<Json<DeletedBody>> {
    state.repos.jobs.remove(id).await?;

    tracing::info!(job_id = id, admin = %ctx.username, "Job deleted");

    Ok(Json(DeletedBody { deleted: id }))
}
