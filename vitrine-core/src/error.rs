//! Structured error types for vitrine-core.
//!
//! Uses `thiserror` for composable errors. Binary crates can still wrap
//! these in `anyhow` for convenience; library consumers get the full
//! violation list programmatically.

use thiserror::Error;

/// A single violation found while cross-checking catalog data.
///
/// `Registry::build` never stops at the first problem; it walks the whole
/// catalog and reports every violation it finds, so one registration pass
/// surfaces every mistake at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// Two entries were registered under the same identifier.
    #[error("duplicate entry id '{id}'")]
    DuplicateEntryId { id: String },

    /// Two zones were declared with the same identifier.
    #[error("duplicate zone id '{id}'")]
    DuplicateZoneId { id: String },

    /// Two categories were declared with the same identifier.
    #[error("duplicate category id '{id}'")]
    DuplicateCategoryId { id: String },

    /// An entry names a zone that is not declared in the catalog.
    #[error("entry '{entry_id}' references unknown zone '{zone_id}'")]
    UnknownZone { entry_id: String, zone_id: String },

    /// An entry names a category that is not declared in the catalog.
    #[error("entry '{entry_id}' references unknown category '{category_id}'")]
    UnknownCategory {
        entry_id: String,
        category_id: String,
    },

    /// An entry has no factory registered under its id.
    #[error("entry '{entry_id}' has no registered factory")]
    MissingFactory { entry_id: String },

    /// A factory was registered under an id no entry uses.
    #[error("factory '{factory_id}' matches no catalog entry")]
    OrphanFactory { factory_id: String },
}

impl IntegrityViolation {
    /// Create an unknown-zone violation.
    pub fn unknown_zone(entry_id: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self::UnknownZone {
            entry_id: entry_id.into(),
            zone_id: zone_id.into(),
        }
    }

    /// Create an unknown-category violation.
    pub fn unknown_category(entry_id: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self::UnknownCategory {
            entry_id: entry_id.into(),
            category_id: category_id.into(),
        }
    }
}

/// The complete set of violations from a failed `Registry::build`.
///
/// Construction is all-or-nothing: if this error exists it holds at least
/// one violation, and no registry was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "catalog integrity check failed with {} violation(s):\n{}",
    .violations.len(),
    render_violations(.violations)
)]
pub struct IntegrityError {
    violations: Vec<IntegrityViolation>,
}

impl IntegrityError {
    pub(crate) fn new(violations: Vec<IntegrityViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Every violation found, in catalog declaration order.
    pub fn violations(&self) -> &[IntegrityViolation] {
        &self.violations
    }
}

fn render_violations(violations: &[IntegrityViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for vitrine-core operations.
pub type Result<T> = std::result::Result<T, IntegrityError>;
