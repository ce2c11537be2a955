//! core::types
//!
//! Strong types for flag families and the values that flow through them.
//!
//! # Types
//!
//! - [`Family`] - One named option family (checkout strategy, diff options, ...)
//! - [`FamilyKind`] - Whether a family holds combinable bits or exclusive values
//! - [`LibVersion`] - A libgit2 version triple
//! - [`FlagSet`] - A composite bit-flag value tagged with its family
//! - [`Discriminant`] - A validated member of a discriminant family
//! - [`Decomposition`] - The named flags and residual bits of a composite value
//! - [`UnrecognizedBits`] - Non-fatal report of bits no known flag claims
//!
//! # Family Tagging
//!
//! Every composite value remembers which family it belongs to. Mixing two
//! families is an error rather than a silent OR, while the raw `u32` stays
//! available for passing to libgit2.
//!
//! # Examples
//!
//! ```
//! use gitflags::core::types::{Family, FamilyKind, FlagSet};
//!
//! let family: Family = "CheckoutStrategy".parse().unwrap();
//! assert_eq!(family.kind(), FamilyKind::Flags);
//!
//! let a = FlagSet::from_raw(family, 0x1).unwrap();
//! let b = FlagSet::from_raw(family, 0x2).unwrap();
//! assert_eq!(a.union(b).unwrap().bits(), 0x3);
//!
//! // Families don't mix
//! let diff = FlagSet::from_raw(Family::DiffOption, 0x1).unwrap();
//! assert!(a.union(diff).is_err());
//! ```

use serde::Serialize;
use thiserror::Error;

/// Errors from value-level flag operations.
///
/// None of these are retryable: each one describes a mismatch between what
/// the caller asked for and what the catalogue or the linked library knows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlagError {
    /// No family with this name exists.
    #[error("unknown flag family: {0}")]
    UnknownFamily(String),

    /// The family has no member with this name.
    #[error("unknown flag {family}::{name}")]
    UnknownFlag {
        /// The family that was searched
        family: Family,
        /// The requested member name
        name: String,
    },

    /// The member exists in the catalogue but the linked libgit2 does not
    /// define it.
    #[error("flag {family}::{name} is not supported by libgit2 {version}")]
    UnsupportedFlag {
        /// The family of the member
        family: Family,
        /// The member name
        name: String,
        /// The version of the linked library
        version: LibVersion,
    },

    /// A raw value matches no member of a discriminant family.
    #[error("invalid {family} value: {value}")]
    InvalidDiscriminant {
        /// The discriminant family
        family: Family,
        /// The rejected raw value
        value: i64,
    },

    /// The operation needs a family of the other kind.
    #[error("{family} is not a {expected} family")]
    WrongKind {
        /// The family that was passed
        family: Family,
        /// The kind the operation works on
        expected: FamilyKind,
    },

    /// Two values from different families were combined.
    #[error("cannot mix {found} flags into {expected}")]
    FamilyMismatch {
        /// The family of the receiving value
        expected: Family,
        /// The family of the other value
        found: Family,
    },
}

/// Whether a family's values combine or exclude each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyKind {
    /// Combinable single-bit flags, OR-ed together.
    Flags,
    /// Mutually exclusive values, exactly one meaningful at a time.
    Discriminant,
}

impl std::fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FamilyKind::Flags => write!(f, "bit-flag"),
            FamilyKind::Discriminant => write!(f, "discriminant"),
        }
    }
}

/// A named option family.
///
/// One family per libgit2 operation or state field. The set is closed: it
/// mirrors the catalogue in [`crate::catalog`].
///
/// # Example
///
/// ```
/// use gitflags::core::types::{Family, FamilyKind};
///
/// assert_eq!(Family::ResetMode.name(), "ResetMode");
/// assert_eq!(Family::ResetMode.kind(), FamilyKind::Discriminant);
/// assert_eq!("sortmode".parse::<Family>().unwrap(), Family::SortMode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Family {
    ApplyLocation,
    AttrCheck,
    BlameFlag,
    BranchType,
    CheckoutNotify,
    CheckoutStrategy,
    DiffFind,
    DiffOption,
    Feature,
    FileMode,
    MergeAnalysis,
    MergePreference,
    Option,
    ReferenceFilter,
    ReferenceType,
    RepositoryInitFlag,
    RepositoryInitMode,
    RepositoryOpenFlag,
    RepositoryState,
    ResetMode,
    SortMode,
    StashApplyProgress,
    SubmoduleIgnore,
    SubmoduleStatus,
}

impl Family {
    /// Every family, in catalogue order.
    pub const ALL: [Family; 24] = [
        Family::ApplyLocation,
        Family::AttrCheck,
        Family::BlameFlag,
        Family::BranchType,
        Family::CheckoutNotify,
        Family::CheckoutStrategy,
        Family::DiffFind,
        Family::DiffOption,
        Family::Feature,
        Family::FileMode,
        Family::MergeAnalysis,
        Family::MergePreference,
        Family::Option,
        Family::ReferenceFilter,
        Family::ReferenceType,
        Family::RepositoryInitFlag,
        Family::RepositoryInitMode,
        Family::RepositoryOpenFlag,
        Family::RepositoryState,
        Family::ResetMode,
        Family::SortMode,
        Family::StashApplyProgress,
        Family::SubmoduleIgnore,
        Family::SubmoduleStatus,
    ];

    /// The family's public name.
    pub fn name(&self) -> &'static str {
        match self {
            Family::ApplyLocation => "ApplyLocation",
            Family::AttrCheck => "AttrCheck",
            Family::BlameFlag => "BlameFlag",
            Family::BranchType => "BranchType",
            Family::CheckoutNotify => "CheckoutNotify",
            Family::CheckoutStrategy => "CheckoutStrategy",
            Family::DiffFind => "DiffFind",
            Family::DiffOption => "DiffOption",
            Family::Feature => "Feature",
            Family::FileMode => "FileMode",
            Family::MergeAnalysis => "MergeAnalysis",
            Family::MergePreference => "MergePreference",
            Family::Option => "Option",
            Family::ReferenceFilter => "ReferenceFilter",
            Family::ReferenceType => "ReferenceType",
            Family::RepositoryInitFlag => "RepositoryInitFlag",
            Family::RepositoryInitMode => "RepositoryInitMode",
            Family::RepositoryOpenFlag => "RepositoryOpenFlag",
            Family::RepositoryState => "RepositoryState",
            Family::ResetMode => "ResetMode",
            Family::SortMode => "SortMode",
            Family::StashApplyProgress => "StashApplyProgress",
            Family::SubmoduleIgnore => "SubmoduleIgnore",
            Family::SubmoduleStatus => "SubmoduleStatus",
        }
    }

    /// Whether the family is a bit-flag set or a discriminant enumeration.
    ///
    /// `FileMode` is a discriminant: its values are octal modes, not bits.
    pub fn kind(&self) -> FamilyKind {
        match self {
            Family::ApplyLocation
            | Family::FileMode
            | Family::Option
            | Family::ReferenceFilter
            | Family::RepositoryInitMode
            | Family::RepositoryState
            | Family::ResetMode
            | Family::StashApplyProgress
            | Family::SubmoduleIgnore => FamilyKind::Discriminant,
            _ => FamilyKind::Flags,
        }
    }

    /// Position of the family in [`Family::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Fail unless the family has the given kind.
    pub(crate) fn require_kind(&self, expected: FamilyKind) -> Result<(), FlagError> {
        if self.kind() == expected {
            Ok(())
        } else {
            Err(FlagError::WrongKind {
                family: *self,
                expected,
            })
        }
    }
}

impl std::str::FromStr for Family {
    type Err = FlagError;

    /// Parse a family name. Matching ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FlagError::UnknownFamily(s.to_string()))
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A libgit2 version triple.
///
/// Ordered lexicographically, so `since <= linked` answers "does the
/// linked library have this symbol".
///
/// # Example
///
/// ```
/// use gitflags::core::types::LibVersion;
///
/// let old = LibVersion::new(1, 5, 0);
/// let new = LibVersion::new(1, 7, 2);
/// assert!(old < new);
/// assert_eq!(new.to_string(), "1.7.2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LibVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl LibVersion {
    /// Create a version triple.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether this version is at least `major.minor`.
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl std::fmt::Display for LibVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A composite bit-flag value tagged with its family.
///
/// Any `u32` can be wrapped, including bits no known flag claims; they are
/// carried unchanged so values from a newer libgit2 round-trip losslessly.
///
/// # Example
///
/// ```
/// use gitflags::core::types::{Family, FlagSet};
///
/// let set = FlagSet::from_raw(Family::SortMode, 0x8000_0004).unwrap();
/// assert_eq!(u32::from(set), 0x8000_0004);
///
/// // Discriminant families have no flag sets
/// assert!(FlagSet::from_raw(Family::ResetMode, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FlagSet {
    family: Family,
    bits: u32,
}

impl FlagSet {
    /// Wrap a raw value from libgit2.
    ///
    /// # Errors
    ///
    /// Returns `FlagError::WrongKind` if `family` is a discriminant family.
    pub fn from_raw(family: Family, bits: u32) -> Result<Self, FlagError> {
        family.require_kind(FamilyKind::Flags)?;
        Ok(Self { family, bits })
    }

    /// The empty set of a flag family.
    ///
    /// # Errors
    ///
    /// Returns `FlagError::WrongKind` if `family` is a discriminant family.
    pub fn empty(family: Family) -> Result<Self, FlagError> {
        Self::from_raw(family, 0)
    }

    /// The family this value belongs to.
    pub fn family(&self) -> Family {
        self.family
    }

    /// The raw value to hand to libgit2.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// True if no bit is set.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True if every bit of `other` is set here. Always false across families.
    pub fn contains(&self, other: FlagSet) -> bool {
        self.family == other.family && self.bits & other.bits == other.bits
    }

    /// OR two values of the same family.
    ///
    /// No semantic check is made: combining mutually exclusive flags such
    /// as `SAFE` and `FORCE` is allowed and left to the consuming operation.
    ///
    /// # Errors
    ///
    /// Returns `FlagError::FamilyMismatch` if the families differ.
    pub fn union(self, other: FlagSet) -> Result<Self, FlagError> {
        let other = other.expect_family(self.family)?;
        Ok(Self {
            family: self.family,
            bits: self.bits | other.bits,
        })
    }

    /// Check that this value belongs to `family`.
    ///
    /// Use at API boundaries that accept one specific family.
    ///
    /// # Errors
    ///
    /// Returns `FlagError::FamilyMismatch` if the families differ.
    pub fn expect_family(self, family: Family) -> Result<Self, FlagError> {
        if self.family == family {
            Ok(self)
        } else {
            Err(FlagError::FamilyMismatch {
                expected: family,
                found: self.family,
            })
        }
    }
}

impl From<FlagSet> for u32 {
    fn from(set: FlagSet) -> Self {
        set.bits
    }
}

impl std::fmt::Display for FlagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:#010x})", self.family, self.bits)
    }
}

/// A validated member of a discriminant family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Discriminant {
    /// The family
    pub family: Family,
    /// The member name
    pub name: &'static str,
    /// The raw value as libgit2 defines it
    pub value: i64,
}

impl std::fmt::Display for Discriminant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.family, self.name)
    }
}

/// Bits of a composite value that no known flag claims.
///
/// Informational only. The bits may be a flag from a newer libgit2; they
/// stay in the value and are reported here instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnrecognizedBits {
    /// The family the value was decomposed against
    pub family: Family,
    /// The unclaimed bits
    pub bits: u32,
}

impl std::fmt::Display for UnrecognizedBits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized {} bits {:#010x}", self.family, self.bits)
    }
}

/// The result of splitting a composite value into named flags.
///
/// `named` lists canonical members in catalogue order. Aliases, composite
/// and zero-valued members never appear. `residual` holds every bit no
/// canonical member claims, so OR-ing the named values with the residual
/// gives back the original value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    /// The family decomposed against
    pub family: Family,
    /// Canonical member names whose bit is set
    pub named: Vec<&'static str>,
    /// Bits claimed by no canonical member
    pub residual: u32,
}

impl Decomposition {
    /// True if every bit was claimed by a named flag.
    pub fn is_exact(&self) -> bool {
        self.residual == 0
    }

    /// True if `name` is among the named flags.
    pub fn contains(&self, name: &str) -> bool {
        self.named.iter().any(|n| *n == name)
    }

    /// The residual as a warning value, if any bits are unrecognized.
    pub fn unrecognized(&self) -> Option<UnrecognizedBits> {
        (self.residual != 0).then_some(UnrecognizedBits {
            family: self.family,
            bits: self.residual,
        })
    }
}
