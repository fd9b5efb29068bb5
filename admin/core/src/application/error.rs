// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use crate::domain::repository::ServiceError;

/// Failure of a model factory operation
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// A required model, entity or parent entity was not supplied
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub type FactoryResult<T> = Result<T, FactoryError>;

/// Unwraps a required argument or fails with [`FactoryError::MissingArgument`]
pub fn require<T>(value: Option<T>, name: &'static str) -> FactoryResult<T> {
    value.ok_or(FactoryError::MissingArgument(name))
}
