// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the television library.
//!
//! State transitions never fail. Errors only arise when building constrained
//! values, validating [`Limits`](crate::config::Limits), or parsing textual
//! input such as remote command names.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing textual input.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A range was declared with its lower bound above its upper bound.
    #[error("invalid {name} range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Which range was rejected (`"volume"` or `"channel"`).
        name: &'static str,
        /// Declared lower bound.
        min: u8,
        /// Declared upper bound.
        max: u8,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Errors related to parsing textual input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The command name is not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
