use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

pub use pushkind_common::services::errors::{ServiceError, ServiceResult};

pub mod products;
pub mod students;

/// Result of a delete request.
///
/// Deleting a record that does not exist is not an error; the caller is told
/// which case applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    AlreadyAbsent,
}

fn removal_outcome(result: RepositoryResult<()>) -> ServiceResult<RemovalOutcome> {
    match result {
        Ok(()) => Ok(RemovalOutcome::Removed),
        Err(RepositoryError::NotFound) => Ok(RemovalOutcome::AlreadyAbsent),
        Err(err) => Err(ServiceError::from(err)),
    }
}
