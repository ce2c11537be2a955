//! catalog
//!
//! Static definitions of every option family and its members.
//!
//! # Overview
//!
//! The catalogue says *which* names exist and *where* their values come
//! from. It never holds the values used at runtime for native members:
//! those are resolved from the linked libgit2 when the registry loads.
//!
//! - [`families`] - Family and member definitions
//! - [`headers`] - Reference values from the libgit2 headers, with the
//!   minimum library version for non-baseline symbols
//!
//! # Value Sources
//!
//! - [`ValueSource::Native`] - a libgit2 symbol, resolved at load
//! - [`ValueSource::Alias`] - a named reference to another member
//! - [`ValueSource::Fixed`] - a value defined by the binding itself

mod families;
pub mod headers;

pub use headers::{header, HeaderConstant, BUNDLED_VERSION, HEADERS};

use crate::core::types::Family;

/// Integer width of the native type behind a family.
///
/// Resolved values are normalized to this width, so a signed enum value of
/// `-1` stays `-1` no matter how the constant was declared on the Rust side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// `int`
    I32,
    /// `unsigned int`
    U32,
}

impl Width {
    /// Normalize a raw constant to this width.
    pub fn normalize(&self, raw: i64) -> i64 {
        match self {
            Width::I32 => i64::from(raw as i32),
            Width::U32 => i64::from(raw as u32),
        }
    }
}

/// Where a member's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// A libgit2 symbol.
    Native(&'static str),
    /// Same value as another member of the family, by name.
    Alias(&'static str),
    /// A value the binding defines; not present in libgit2.
    Fixed(i64),
}

/// One member of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberDef {
    pub name: &'static str,
    pub source: ValueSource,
    pub doc: &'static str,
    /// Present upstream but not implemented by libgit2 yet. Exposed as an
    /// inert placeholder.
    pub reserved: bool,
}

impl MemberDef {
    pub(crate) const fn native(
        name: &'static str,
        symbol: &'static str,
        doc: &'static str,
    ) -> Self {
        Self {
            name,
            source: ValueSource::Native(symbol),
            doc,
            reserved: false,
        }
    }

    pub(crate) const fn reserved(
        name: &'static str,
        symbol: &'static str,
        doc: &'static str,
    ) -> Self {
        Self {
            name,
            source: ValueSource::Native(symbol),
            doc,
            reserved: true,
        }
    }

    pub(crate) const fn alias(name: &'static str, target: &'static str, doc: &'static str) -> Self {
        Self {
            name,
            source: ValueSource::Alias(target),
            doc,
            reserved: false,
        }
    }

    pub(crate) const fn fixed(name: &'static str, value: i64, doc: &'static str) -> Self {
        Self {
            name,
            source: ValueSource::Fixed(value),
            doc,
            reserved: false,
        }
    }

    /// The native symbol, if the value comes from libgit2.
    pub fn symbol(&self) -> Option<&'static str> {
        match self.source {
            ValueSource::Native(symbol) => Some(symbol),
            _ => None,
        }
    }
}

/// One family definition.
#[derive(Debug, Clone, Copy)]
pub struct FamilyDef {
    pub family: Family,
    pub width: Width,
    pub doc: &'static str,
    pub members: &'static [MemberDef],
}

/// All family definitions, in [`Family::ALL`] order.
pub fn definitions() -> &'static [FamilyDef] {
    families::FAMILIES
}

/// The definition of one family.
pub fn definition(family: Family) -> &'static FamilyDef {
    &families::FAMILIES[family.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FamilyKind;
    use std::collections::HashSet;

    #[test]
    fn one_definition_per_family_in_order() {
        assert_eq!(definitions().len(), Family::ALL.len());
        for (def, family) in definitions().iter().zip(Family::ALL) {
            assert_eq!(def.family, family);
        }
    }

    #[test]
    fn member_names_unique_within_family() {
        for def in definitions() {
            let mut seen = HashSet::new();
            for member in def.members {
                assert!(
                    seen.insert(member.name),
                    "duplicate {}::{}",
                    def.family,
                    member.name
                );
            }
        }
    }

    #[test]
    fn aliases_point_at_native_members() {
        for def in definitions() {
            for member in def.members {
                if let ValueSource::Alias(target) = member.source {
                    let target = def.members.iter().find(|m| m.name == target);
                    assert!(
                        matches!(target.map(|m| m.source), Some(ValueSource::Native(_))),
                        "{}::{} aliases a missing or non-native member",
                        def.family,
                        member.name
                    );
                }
            }
        }
    }

    #[test]
    fn every_native_symbol_has_a_header() {
        for def in definitions() {
            for member in def.members {
                if let Some(symbol) = member.symbol() {
                    assert!(header(symbol).is_some(), "no header for {symbol}");
                }
            }
        }
    }

    #[test]
    fn flag_families_are_unsigned() {
        for def in definitions() {
            if def.family.kind() == FamilyKind::Flags {
                assert_eq!(def.width, Width::U32, "{} should be u32", def.family);
            }
        }
    }

    #[test]
    fn blame_placeholders_are_reserved() {
        let blame = definition(Family::BlameFlag);
        let reserved: Vec<_> = blame
            .members
            .iter()
            .filter(|m| m.reserved)
            .map(|m| m.name)
            .collect();
        assert_eq!(
            reserved,
            vec![
                "TRACK_COPIES_SAME_FILE",
                "TRACK_COPIES_SAME_COMMIT_MOVES",
                "TRACK_COPIES_SAME_COMMIT_COPIES",
                "TRACK_COPIES_ANY_COMMIT_COPIES",
            ]
        );
    }

    #[test]
    fn width_normalization() {
        assert_eq!(Width::I32.normalize(0xFFFF_FFFF), -1);
        assert_eq!(Width::U32.normalize(-1), 0xFFFF_FFFF);
        assert_eq!(Width::U32.normalize(1 << 30), 1 << 30);
    }
}
