//! Errors returned by the remote collection.

use std::fmt;

use thiserror::Error;

/// The collection operation that failed; used to word error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::List => "fetch users",
            Operation::Create => "create user",
            Operation::Update => "update user",
            Operation::Delete => "delete user",
        })
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS...).
    #[error("Failed to {op}: {message}")]
    Transport { op: Operation, message: String },

    /// The collection answered with a non-success status.
    #[error("Failed to {op} (HTTP {status})")]
    Status { op: Operation, status: u16 },

    /// The response body was not the JSON shape we expected.
    #[error("Failed to {op}: unexpected response")]
    Decode {
        op: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// The record has no identifier to address the request with.
    #[error("Cannot {op} without an id")]
    MissingId { op: Operation },
}

impl ApiError {
    pub fn transport(op: Operation, err: impl fmt::Display) -> Self {
        ApiError::Transport {
            op,
            message: err.to_string(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ApiError::Transport { op, .. }
            | ApiError::Status { op, .. }
            | ApiError::Decode { op, .. }
            | ApiError::MissingId { op } => *op,
        }
    }

    /// HTTP status, when the collection answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
