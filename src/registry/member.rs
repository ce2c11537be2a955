//! registry::member
//!
//! Resolved members and the skew report.

use serde::Serialize;

use crate::core::types::{Family, LibVersion};

/// How a member takes part in its family after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "of", rename_all = "lowercase")]
pub enum MemberRole {
    /// Flag owning a single bit. Only these appear in decompositions.
    Canonical,
    /// Same value as the named member.
    Alias(&'static str),
    /// Flag covering several bits.
    Composite,
    /// Flag with value zero.
    Empty,
    /// One value of a discriminant family.
    Variant,
    /// Not defined by the linked library.
    Unsupported,
}

/// One member of a family, resolved against a libgit2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub family: Family,
    pub name: &'static str,
    /// Value normalized to the family width; `None` if unsupported.
    pub value: Option<i64>,
    pub role: MemberRole,
    /// The libgit2 symbol, for native members.
    pub symbol: Option<&'static str>,
    /// First libgit2 release defining the symbol, for non-baseline members.
    pub since: Option<LibVersion>,
    pub doc: &'static str,
    /// Upstream placeholder with no effect in libgit2.
    pub reserved: bool,
}

impl Member {
    /// True if the linked library defines this member.
    pub fn is_supported(&self) -> bool {
        self.value.is_some()
    }

    /// True if this member owns a bit in decompositions.
    pub fn is_canonical(&self) -> bool {
        self.role == MemberRole::Canonical
    }
}

/// A native symbol whose linked value differs from the bundled header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkewEntry {
    pub family: Family,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Value in the bundled headers
    pub header: i64,
    /// Value in the linked library
    pub linked: i64,
}

impl std::fmt::Display for SkewEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}::{} ({}) is {:#x} in the linked library, {:#x} in the headers",
            self.family, self.name, self.symbol, self.linked, self.header
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skew_entry_display() {
        let entry = SkewEntry {
            family: Family::CheckoutStrategy,
            name: "SAFE",
            symbol: "GIT_CHECKOUT_SAFE",
            header: 1,
            linked: 0,
        };
        assert_eq!(
            entry.to_string(),
            "CheckoutStrategy::SAFE (GIT_CHECKOUT_SAFE) is 0x0 in the linked library, 0x1 in the headers"
        );
    }

    #[test]
    fn role_serializes_with_target() {
        let json = serde_json::to_value(MemberRole::Alias("UNTRACKED")).unwrap();
        assert_eq!(json["role"], "alias");
        assert_eq!(json["of"], "UNTRACKED");

        let json = serde_json::to_value(MemberRole::Canonical).unwrap();
        assert_eq!(json["role"], "canonical");
    }
}
