//! Error and Status Module
//!
//! Failure kinds shared by every marshaling operation, plus the status codes
//! handed back to the transaction layer.

use thiserror::Error;

/// Failure kinds of the marshaling layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MarshalError {
    /// Misaligned byte count or serialize length mismatch
    #[error("invalid parameter")]
    InvalidParameter,
    /// An allocation could not be satisfied
    #[error("out of memory")]
    NoMemory,
    /// Value or text exceeds backend capacity
    #[error("value out of range")]
    OutOfRange,
    /// Text is not valid hexadecimal
    #[error("malformed input")]
    Malformed,
    /// Output buffer too small
    #[error("buffer full")]
    BufferFull,
    /// Internal export produced an unexpected byte count
    #[error("operation failed")]
    Failed,
}

/// Result type for marshaling operations
pub type MarshalResult<T> = Result<T, MarshalError>;

/// Status codes surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    InvalidParameter,
    NoMemory,
    OutOfRange,
    Malformed,
    BufferFull,
    Failed,
}

impl Status {
    /// Alias for [`Status::NoMemory`]
    pub const NOMEM: Status = Status::NoMemory;

    /// Status of a completed operation
    pub fn from_result<T>(result: &MarshalResult<T>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(err) => Status::from(*err),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl From<MarshalError> for Status {
    fn from(err: MarshalError) -> Self {
        match err {
            MarshalError::InvalidParameter => Status::InvalidParameter,
            MarshalError::NoMemory => Status::NoMemory,
            MarshalError::OutOfRange => Status::OutOfRange,
            MarshalError::Malformed => Status::Malformed,
            MarshalError::BufferFull => Status::BufferFull,
            MarshalError::Failed => Status::Failed,
        }
    }
}
