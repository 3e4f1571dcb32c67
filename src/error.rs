//! Engine error taxonomy.
//!
//! All conditions are local and recoverable: a failing call returns the
//! error and leaves the board unmodified. The engine has no I/O, so
//! there are no fatal errors and no retry policy.

use thiserror::Error;

/// A recoverable engine error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A row range outside the day grid, or with `start >= end`.
    #[error("row range [{start}, {end}) is not a valid range on the day grid")]
    InvalidRange {
        /// Requested start row.
        start: u32,
        /// Requested end row.
        end: u32,
    },

    /// The referenced employee is not on the roster.
    #[error("no employee with id '{0}'")]
    EmployeeNotFound(String),

    /// The referenced task does not exist on the board.
    #[error("no task with id {0}")]
    TaskNotFound(u64),
}
