//! gitflags - Typed option flags over libgit2 constants
//!
//! libgit2 takes most of its options as plain integers: checkout strategies,
//! diff options, sort modes, reset modes and many more. This crate gives
//! every one of those constants a name, groups them into families, and
//! wraps combinable flags in a value that remembers its family, so a diff
//! option can never be passed where a checkout strategy is expected.
//!
//! Values are never hard-coded: they are read from the linked libgit2 when
//! the registry is first used, and compared against the headers this crate
//! was written for.
//!
//! # Architecture
//!
//! - [`core`] - Strong types and configuration
//! - [`catalog`] - Static family and member definitions, bundled headers
//! - [`native`] - Single doorway to libgit2
//! - [`registry`] - The resolved registry and every query over it
//!
//! # Example
//!
//! ```
//! use gitflags::{Family, Registry};
//!
//! let registry = Registry::global().unwrap();
//!
//! let strategy = registry
//!     .combine(Family::CheckoutStrategy, ["FORCE", "REMOVE_UNTRACKED"])
//!     .unwrap();
//! let raw: u32 = strategy.into();
//! assert_ne!(raw, 0);
//!
//! let parts = registry.decompose_set(strategy);
//! assert!(parts.contains("FORCE"));
//! assert_eq!(parts.residual, 0);
//! ```
//!
//! # Invariants
//!
//! 1. The registry is built once and never mutated
//! 2. Decomposition never drops bits: named flags OR residual equals the input
//! 3. Values of different families never combine

pub mod catalog;
pub mod core;
pub mod native;
pub mod registry;

pub use crate::core::config::{Config, ConfigError, RegistryConfig};
pub use crate::core::types::{
    Decomposition, Discriminant, Family, FamilyKind, FlagError, FlagSet, LibVersion,
    UnrecognizedBits,
};
pub use crate::native::{BundledHeaders, ConstantSource, Libgit2};
pub use crate::registry::{Member, MemberRole, Registry, RegistryError, SkewEntry};
