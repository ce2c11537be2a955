//! registry
//!
//! The option-flag registry: every family resolved against one libgit2.
//!
//! # Overview
//!
//! A [`Registry`] is built once from a [`ConstantSource`] and never changes.
//! All queries are pure lookups over its tables, so a shared registry is
//! safe to use from any thread without locking.
//!
//! The process-wide registry ([`Registry::global`]) is built lazily from
//! the linked libgit2 and the user's configuration at first use. Further
//! registries can be built with [`Registry::load`], for example from
//! [`BundledHeaders`](crate::native::BundledHeaders) to model another
//! release.
//!
//! # Operations
//!
//! - [`Registry::lookup`] - Value of a member by name
//! - [`Registry::combine`] - OR flags of one family into a [`FlagSet`]
//! - [`Registry::decompose`] - Split a value into canonical names and residual
//! - [`Registry::validate`] - Match a raw value to one discriminant
//! - [`Registry::is_supported`] - Whether the linked library defines a member
//! - [`Registry::canonical_name`] - Resolve an alias
//!
//! # Example
//!
//! ```
//! use gitflags::core::config::RegistryConfig;
//! use gitflags::core::types::Family;
//! use gitflags::native::BundledHeaders;
//! use gitflags::registry::Registry;
//!
//! let registry = Registry::load(BundledHeaders::latest(), &RegistryConfig::default()).unwrap();
//!
//! let set = registry.combine(Family::CheckoutStrategy, ["SAFE", "FORCE"]).unwrap();
//! assert_eq!(set.bits(), 0x3);
//!
//! let parts = registry.decompose(Family::CheckoutStrategy, 0x3).unwrap();
//! assert_eq!(parts.named, vec!["SAFE", "FORCE"]);
//! assert_eq!(parts.residual, 0);
//!
//! let mode = registry.validate(Family::ResetMode, 2).unwrap();
//! assert_eq!(mode.name, "MIXED");
//! ```

mod load;
mod member;

pub use member::{Member, MemberRole, SkewEntry};

use std::sync::OnceLock;

use thiserror::Error;

use load::FamilyTable;

use crate::core::config::{BitsPolicy, Config, ConfigError, RegistryConfig};
use crate::core::types::{
    Decomposition, Discriminant, Family, FamilyKind, FlagError, FlagSet, LibVersion,
};
use crate::native::{ConstantSource, Libgit2};

/// Errors from building a registry.
///
/// These are load-time failures: the registry is unusable for the linked
/// library under the active policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A baseline symbol is not defined by the linked library.
    #[error("libgit2 {version} does not define {symbol} ({family}::{name})")]
    MissingSymbol {
        /// The family of the member
        family: Family,
        /// The member name
        name: &'static str,
        /// The libgit2 symbol
        symbol: &'static str,
        /// The linked library version
        version: LibVersion,
    },

    /// Linked values differ from the bundled headers and the policy is `error`.
    #[error("{} symbol(s) differ from the bundled headers, first: {}", .0.len(), first_skew(.0))]
    Skew(Vec<SkewEntry>),

    /// Two members of a discriminant family share a value.
    #[error("{family}::{first} and {family}::{second} both have value {value}")]
    DuplicateDiscriminant {
        /// The discriminant family
        family: Family,
        /// The member declared first
        first: &'static str,
        /// The member declared later
        second: &'static str,
        /// The shared value
        value: i64,
    },

    /// An alias names a member that does not exist.
    #[error("{family}::{name} aliases unknown member {target}")]
    UnknownAlias {
        /// The family of the alias
        family: Family,
        /// The alias name
        name: &'static str,
        /// The missing target
        target: &'static str,
    },

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn first_skew(entries: &[SkewEntry]) -> String {
    entries.first().map(ToString::to_string).unwrap_or_default()
}

static GLOBAL: OnceLock<Result<Registry, RegistryError>> = OnceLock::new();

/// Every family resolved against one libgit2.
#[derive(Debug, Clone)]
pub struct Registry {
    version: LibVersion,
    features: u32,
    tables: Vec<FamilyTable>,
    skew: Vec<SkewEntry>,
    bits_policy: BitsPolicy,
}

impl Registry {
    /// Build a registry from a constant source.
    ///
    /// # Errors
    ///
    /// - `MissingSymbol` if a baseline symbol is missing and the policy is `error`
    /// - `Skew` if any value differs from the headers and the policy is `error`
    /// - `DuplicateDiscriminant` if a discriminant family has repeated values
    /// - `UnknownAlias` if the catalogue has a dangling alias
    pub fn load<S: ConstantSource>(
        source: S,
        config: &RegistryConfig,
    ) -> Result<Self, RegistryError> {
        let loaded = load::load(&source, config)?;
        Ok(Self {
            version: source.version(),
            features: source.features(),
            tables: loaded.tables,
            skew: loaded.skew,
            bits_policy: config.unrecognized_bits,
        })
    }

    /// The process-wide registry for the linked libgit2.
    ///
    /// Built on first call from [`Libgit2`] and [`Config::load`]. The
    /// outcome, including a failure, is cached for the life of the process.
    ///
    /// # Errors
    ///
    /// Returns the load error, cloned, on every call if the first load failed.
    pub fn global() -> Result<&'static Registry, RegistryError> {
        GLOBAL
            .get_or_init(|| {
                let config = Config::load()?;
                Registry::load(Libgit2::detect(), &config.registry)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    fn table(&self, family: Family) -> &FamilyTable {
        &self.tables[family.index()]
    }

    /// The libgit2 release this registry was built against.
    pub fn version(&self) -> LibVersion {
        self.version
    }

    /// All families, in catalogue order.
    pub fn families(&self) -> &'static [Family] {
        &Family::ALL
    }

    /// All members of a family, in catalogue order, supported or not.
    pub fn members(&self, family: Family) -> &[Member] {
        &self.table(family).members
    }

    /// One member by name.
    ///
    /// # Errors
    ///
    /// Returns `FlagError::UnknownFlag` if the family has no such member.
    pub fn member(&self, family: Family, name: &str) -> Result<&Member, FlagError> {
        self.table(family)
            .member(name)
            .ok_or_else(|| FlagError::UnknownFlag {
                family,
                name: name.to_string(),
            })
    }

    /// The value of a member.
    ///
    /// Aliases return their canonical member's value.
    ///
    /// # Errors
    ///
    /// - `UnknownFlag` if the family has no such member
    /// - `UnsupportedFlag` if the linked library does not define it
    pub fn lookup(&self, family: Family, name: &str) -> Result<i64, FlagError> {
        let member = self.member(family, name)?;
        member.value.ok_or_else(|| FlagError::UnsupportedFlag {
            family,
            name: name.to_string(),
            version: self.version,
        })
    }

    /// A single flag as a [`FlagSet`].
    ///
    /// # Errors
    ///
    /// Everything [`lookup`](Self::lookup) returns, plus `WrongKind` for a
    /// discriminant family.
    pub fn flag(&self, family: Family, name: &str) -> Result<FlagSet, FlagError> {
        family.require_kind(FamilyKind::Flags)?;
        let value = self.lookup(family, name)?;
        FlagSet::from_raw(family, value as u32)
    }

    /// A discriminant member by name.
    ///
    /// # Errors
    ///
    /// Everything [`lookup`](Self::lookup) returns, plus `WrongKind` for a
    /// flag family.
    pub fn discriminant(&self, family: Family, name: &str) -> Result<Discriminant, FlagError> {
        family.require_kind(FamilyKind::Discriminant)?;
        let value = self.lookup(family, name)?;
        let name = self.canonical_name(family, name)?;
        Ok(Discriminant {
            family,
            name,
            value,
        })
    }

    /// OR any number of flags of one family.
    ///
    /// No semantic check is made; `SAFE` with `FORCE` is allowed.
    ///
    /// # Errors
    ///
    /// - `WrongKind` for a discriminant family
    /// - `UnknownFlag` or `UnsupportedFlag` for the first bad name
    pub fn combine<I, N>(&self, family: Family, names: I) -> Result<FlagSet, FlagError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut set = FlagSet::empty(family)?;
        for name in names {
            set = set.union(self.flag(family, name.as_ref())?)?;
        }
        Ok(set)
    }

    /// Split a raw value into canonical member names and residual bits.
    ///
    /// Names come in catalogue order. Bits no canonical member owns are kept
    /// in the residual and, unless the policy ignores them, logged.
    ///
    /// # Errors
    ///
    /// Returns `FlagError::WrongKind` for a discriminant family.
    pub fn decompose(&self, family: Family, bits: u32) -> Result<Decomposition, FlagError> {
        family.require_kind(FamilyKind::Flags)?;
        Ok(self.split(family, bits))
    }

    /// [`decompose`](Self::decompose) for a tagged value.
    pub fn decompose_set(&self, set: FlagSet) -> Decomposition {
        self.split(set.family(), set.bits())
    }

    fn split(&self, family: Family, bits: u32) -> Decomposition {
        let table = self.table(family);

        let named = table
            .members
            .iter()
            .filter(|m| m.is_canonical())
            .filter(|m| m.value.is_some_and(|v| bits & v as u32 != 0))
            .map(|m| m.name)
            .collect();

        let parts = Decomposition {
            family,
            named,
            residual: bits & !table.canonical_mask,
        };

        if let Some(unknown) = parts.unrecognized() {
            if self.bits_policy == BitsPolicy::Warn {
                log::warn!("{unknown}");
            }
        }

        parts
    }

    /// Match a raw value to the single member of a discriminant family.
    ///
    /// # Errors
    ///
    /// - `WrongKind` for a flag family
    /// - `InvalidDiscriminant` if no supported member has this value
    pub fn validate(&self, family: Family, value: i64) -> Result<Discriminant, FlagError> {
        family.require_kind(FamilyKind::Discriminant)?;
        self.table(family)
            .members
            .iter()
            .find(|m| m.role == MemberRole::Variant && m.value == Some(value))
            .map(|m| Discriminant {
                family,
                name: m.name,
                value,
            })
            .ok_or(FlagError::InvalidDiscriminant { family, value })
    }

    /// Whether the linked library defines a member.
    ///
    /// False for names the catalogue does not know.
    pub fn is_supported(&self, family: Family, name: &str) -> bool {
        self.table(family)
            .member(name)
            .is_some_and(Member::is_supported)
    }

    /// The canonical name for a member: aliases map to their target, every
    /// other member to itself.
    ///
    /// # Errors
    ///
    /// Returns `FlagError::UnknownFlag` if the family has no such member.
    pub fn canonical_name(&self, family: Family, name: &str) -> Result<&'static str, FlagError> {
        let member = self.member(family, name)?;
        Ok(match member.role {
            MemberRole::Alias(target) => target,
            _ => member.name,
        })
    }

    /// Symbols whose linked value differs from the bundled headers.
    pub fn skew(&self) -> &[SkewEntry] {
        &self.skew
    }

    /// Features the linked library was compiled with.
    pub fn compiled_features(&self) -> Decomposition {
        self.split(Family::Feature, self.features)
    }

    /// Whether the linked library was compiled with a feature, by name.
    pub fn has_feature(&self, name: &str) -> bool {
        self.lookup(Family::Feature, name)
            .is_ok_and(|bit| self.features & bit as u32 != 0)
    }
}
