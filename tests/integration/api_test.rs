//! Integration tests for the Jobly API
//!
//! Require a PostgreSQL database at `TEST_DATABASE_URL` (or `DATABASE_URL`).
//! Every test reseeds the tables, so tests run serially.

#![allow(dead_code)]

mod common;
mod job_repository;
mod jobs;
