//! core::config::schema
//!
//! Configuration schema types.
//!
//! Every key is optional; an empty file means the defaults. Unknown keys
//! are rejected so a typo never silently falls back to a default.

use serde::{Deserialize, Serialize};

/// Registry policy settings.
///
/// # Example
///
/// ```toml
/// skew = "warn"
/// missing = "error"
/// unrecognized_bits = "warn"
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// What to do when a linked value differs from the bundled header
    pub skew: SkewPolicy,

    /// What to do when the linked library lacks a baseline symbol
    pub missing: MissingPolicy,

    /// Whether decomposition logs bits no flag claims
    pub unrecognized_bits: BitsPolicy,
}

/// Handling of values that differ from the bundled headers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkewPolicy {
    /// Record in the skew report only
    Ignore,
    /// Record and log a warning per symbol
    #[default]
    Warn,
    /// Fail the registry load
    Error,
}

/// Handling of baseline symbols the linked library does not define.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Fail the registry load
    #[default]
    Error,
    /// Mark the member unsupported and continue
    Skip,
}

/// Handling of unrecognized bits found while decomposing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BitsPolicy {
    /// Report in the decomposition only
    Ignore,
    /// Also log a warning
    #[default]
    Warn,
}
