//! Shared error types for the services crate.

use thiserror::Error;

use bloom_core::model::{MemberError, MetricError, SchoolError, SchoolId};

/// Errors surfaced by school-directory backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DirectoryError {
    #[error("unknown school: {0}")]
    UnknownSchool(SchoolId),

    #[error("seed fixture contains no schools")]
    EmptySeed,

    #[error("malformed seed fixture: {0}")]
    Seed(#[from] serde_json::Error),

    #[error(transparent)]
    School(#[from] SchoolError),

    #[error(transparent)]
    Metric(#[from] MetricError),

    #[error(transparent)]
    Member(#[from] MemberError),
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Errors emitted by `RosterService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RosterError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
