//! Schema-definition statements and their execution status.

use crate::schema::{IndexDescriptor, TableDescriptor};
use std::fmt;

/// One schema-definition statement, borrowed from its descriptor.
///
/// Stores translate the descriptor into their own dialect; `text()` is the
/// canonical key-value table form used for logging and the `schema` command.
#[derive(Debug, Clone, Copy)]
pub enum DdlStatement<'a> {
    CreateTable(&'a TableDescriptor),
    DropTable(&'a TableDescriptor),
    CreateIndex(&'a IndexDescriptor),
    DropIndex(&'a IndexDescriptor),
}

impl DdlStatement<'_> {
    /// Canonical statement text.
    pub fn text(&self) -> String {
        match self {
            Self::CreateTable(table) => table.create_statement(),
            Self::DropTable(table) => table.drop_statement(),
            Self::CreateIndex(index) => index.create_statement(),
            Self::DropIndex(index) => index.drop_statement(),
        }
    }

    /// Whether this statement removes schema objects.
    pub fn is_drop(&self) -> bool {
        matches!(self, Self::DropTable(_) | Self::DropIndex(_))
    }
}

impl fmt::Display for DdlStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Final status of an executed schema statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementStatus {
    /// Statement applied
    Succeeded,

    /// Object already existed; nothing changed
    AlreadyExists,

    /// Statement was cancelled by the store
    Cancelled,

    /// Statement was rejected
    Failed { error: String },

    /// Statement has not finished yet
    InProgress { info: String },
}

impl StatementStatus {
    /// Whether the run may continue after this status.
    ///
    /// Only success and the redundant "already exists" case are usable.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Succeeded | Self::AlreadyExists)
    }
}

impl fmt::Display for StatementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::AlreadyExists => write!(f, "already exists"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Failed { error } => write!(f, "failed: {error}"),
            Self::InProgress { info } => write!(f, "in progress: {info}"),
        }
    }
}

/// A statement's text paired with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementResult {
    pub statement: String,
    pub status: StatementStatus,
}

impl StatementResult {
    pub fn new(statement: &DdlStatement<'_>, status: StatementStatus) -> Self {
        Self {
            statement: statement.text(),
            status,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.status.is_usable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_statuses() {
        assert!(StatementStatus::Succeeded.is_usable());
        assert!(StatementStatus::AlreadyExists.is_usable());
        assert!(!StatementStatus::Cancelled.is_usable());
        assert!(!StatementStatus::Failed {
            error: "syntax".to_string()
        }
        .is_usable());
        assert!(!StatementStatus::InProgress {
            info: "pending".to_string()
        }
        .is_usable());
    }

    #[test]
    fn test_status_display() {
        let status = StatementStatus::Failed {
            error: "bad type".to_string(),
        };
        assert_eq!(status.to_string(), "failed: bad type");
    }
}
