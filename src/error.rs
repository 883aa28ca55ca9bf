// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt::Display;

use thiserror::Error;

/// Failure signal of every repository operation.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Anything that went wrong in (or on the way to) storage: I/O, constraint
    /// violations, malformed queries, rows that cannot be decoded.
    #[error("Failed to {operation} {entity}: {message}")]
    Persistence {
        operation: &'static str,
        entity: &'static str,
        message: String,
    },

    /// A targeted mutation addressed an id with no matching row.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
}

impl RepoError {
    pub fn persistence(operation: &'static str, entity: &'static str, cause: impl Display) -> Self {
        RepoError::Persistence {
            operation,
            entity,
            message: cause.to_string(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        RepoError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepoError::NotFound { .. })
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Text stored for a string-backed enum is not one of its variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_message_names_operation_and_entity() {
        let e = RepoError::persistence("create", "transaction", "UNIQUE constraint failed");
        assert_eq!(
            e.to_string(),
            "Failed to create transaction: UNIQUE constraint failed"
        );
        assert!(!e.is_not_found());
    }

    #[test]
    fn not_found_is_distinct() {
        let e = RepoError::not_found("goal", "g-1");
        assert_eq!(e.to_string(), "goal 'g-1' not found");
        assert!(e.is_not_found());
    }
}
