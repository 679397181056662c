// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Errors returned by contract reads and transaction submission.

/// Errors that can occur during Dether contract operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetherError {
    #[error("Invalid ETH address: {0}")]
    InvalidAddress(String),

    #[error("Invalid provider: {0}")]
    InvalidProvider(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Contract call failed: {0}")]
    CallFailed(String),
}

/// Failure cause of a [`DetherError`], for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidAddress,
    InvalidProvider,
    InvalidInput,
    CallFailed,
}

impl DetherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DetherError::InvalidAddress(_) => ErrorKind::InvalidAddress,
            DetherError::InvalidProvider(_) => ErrorKind::InvalidProvider,
            DetherError::InvalidInput(_) => ErrorKind::InvalidInput,
            DetherError::CallFailed(_) => ErrorKind::CallFailed,
        }
    }

    /// Wrap any lower-level failure, keeping only its message.
    pub fn call_failed(err: impl std::fmt::Display) -> Self {
        DetherError::CallFailed(err.to_string())
    }
}
