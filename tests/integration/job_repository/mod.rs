//! Repository-level tests for `JobRepository` against a real database

use jobly_common::Error;
use jobly_jobs::{Job, JobFilter, JobUpdate, NewJob};
use serial_test::serial;

use crate::common::{dec, JobsTestApp};

fn new_job(handle: &str) -> NewJob {
    NewJob {
        title: "new".to_string(),
        salary: Some(100),
        equity: Some(dec("0.1")),
        company_handle: handle.to_string(),
    }
}

fn titles(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|j| j.title.as_str()).collect()
}

#[tokio::test]
#[serial]
async fn test_create_then_get() {
    let app = JobsTestApp::new().await.unwrap();

    let job = app.repos.jobs.create(&new_job("c2")).await.unwrap();
    assert_eq!(job.title, "new");
    assert_eq!(job.salary, Some(100));
    assert_eq!(job.equity, Some(dec("0.1")));
    assert_eq!(job.company_handle, "c2");

    let detail = app.repos.jobs.get(job.id).await.unwrap();
    assert_eq!(detail.id, job.id);
    assert_eq!(detail.title, "new");
    assert_eq!(detail.salary, Some(100));
    assert_eq!(detail.equity, Some(dec("0.1")));
    assert_eq!(detail.company.handle, "c2");
    assert_eq!(detail.company.name, "C2");
    assert_eq!(detail.company.num_employees, Some(2));

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_create_with_unknown_company_is_constraint_error() {
    let app = JobsTestApp::new().await.unwrap();

    let err = app.repos.jobs.create(&new_job("nope")).await.unwrap_err();
    assert!(matches!(err, Error::Constraint(_)), "got {err:?}");
    assert_eq!(app.job_count().await.unwrap(), 3);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_find_all_without_filter() {
    let app = JobsTestApp::new().await.unwrap();

    let jobs = app.repos.jobs.find_all(&JobFilter::default()).await.unwrap();
    assert_eq!(titles(&jobs), vec!["j1", "j2", "j3"]);
    assert_eq!(jobs[2].salary, None);
    assert_eq!(jobs[2].equity, Some(dec("0")));

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_find_all_min_salary_skips_missing_salaries() {
    let app = JobsTestApp::new().await.unwrap();

    let filter = JobFilter {
        min_salary: Some(dec("0")),
        ..Default::default()
    };
    let jobs = app.repos.jobs.find_all(&filter).await.unwrap();
    assert_eq!(titles(&jobs), vec!["j1", "j2"]);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_find_all_has_equity() {
    let app = JobsTestApp::new().await.unwrap();

    let with_equity = JobFilter {
        has_equity: Some(true),
        ..Default::default()
    };
    let jobs = app.repos.jobs.find_all(&with_equity).await.unwrap();
    assert_eq!(titles(&jobs), vec!["j1", "j2"]);

    let no_constraint = JobFilter {
        has_equity: Some(false),
        ..Default::default()
    };
    let jobs = app.repos.jobs.find_all(&no_constraint).await.unwrap();
    assert_eq!(jobs.len(), 3);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_find_all_treats_title_as_data() {
    let app = JobsTestApp::new().await.unwrap();

    let filter = JobFilter {
        title: Some("'; DROP TABLE jobs; --".to_string()),
        ..Default::default()
    };
    let jobs = app.repos.jobs.find_all(&filter).await.unwrap();
    assert!(jobs.is_empty());
    assert_eq!(app.job_count().await.unwrap(), 3);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_update_changes_only_supplied_fields() {
    let app = JobsTestApp::new().await.unwrap();
    let id = app.job_ids[1];

    let changes = JobUpdate {
        equity: Some(dec("0.5")),
        ..Default::default()
    };
    let job = app.repos.jobs.update(id, changes).await.unwrap();

    assert_eq!(job.id, id);
    assert_eq!(job.title, "j2");
    assert_eq!(job.salary, Some(200));
    assert_eq!(job.equity, Some(dec("0.5")));
    assert_eq!(job.company_handle, "c1");

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_update_missing_job_is_not_found() {
    let app = JobsTestApp::new().await.unwrap();

    let changes = JobUpdate {
        title: Some("ghost".to_string()),
        ..Default::default()
    };
    let err = app.repos.jobs.update(0, changes).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");

    let jobs = app.repos.jobs.find_all(&JobFilter::default()).await.unwrap();
    assert_eq!(titles(&jobs), vec!["j1", "j2", "j3"]);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_update_with_no_fields_is_validation_error() {
    let app = JobsTestApp::new().await.unwrap();

    let err = app
        .repos
        .jobs
        .update(app.job_ids[0], JobUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ref m) if m == "No data"), "got {err:?}");

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_remove() {
    let app = JobsTestApp::new().await.unwrap();
    let id = app.job_ids[0];

    app.repos.jobs.remove(id).await.unwrap();

    let err = app.repos.jobs.get(id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(app.job_count().await.unwrap(), 2);

    let err = app.repos.jobs.remove(id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_deleting_company_cascades_to_jobs() {
    let app = JobsTestApp::new().await.unwrap();

    sqlx::query("DELETE FROM companies WHERE handle = 'c1'")
        .execute(&app.pool)
        .await
        .unwrap();
    assert_eq!(app.job_count().await.unwrap(), 0);

    app.cleanup().await.unwrap();
}
