//! native
//!
//! Single doorway to libgit2 constants.
//!
//! # Architecture
//!
//! This module is the **only** place that touches `git2` or `libgit2-sys`.
//! Everything else sees libgit2 through the [`ConstantSource`] trait, which
//! answers three questions:
//!
//! - Which libgit2 release is this?
//! - What value does a native symbol have in it, if any?
//! - Which optional features was it compiled with?
//!
//! # Sources
//!
//! - [`Libgit2`]: the library this process is linked against
//! - [`BundledHeaders`]: the bundled header table, cut off at a given
//!   release. Deterministic, so tests and tools modelling an older library
//!   use it.
//!
//! # Example
//!
//! ```
//! use gitflags::native::{BundledHeaders, ConstantSource};
//!
//! let headers = BundledHeaders::latest();
//! assert_eq!(headers.resolve("GIT_RESET_MIXED"), Some(2));
//! assert_eq!(headers.resolve("GIT_NOT_A_SYMBOL"), None);
//! ```

mod bundled;
mod libgit2;

pub use bundled::BundledHeaders;
pub use libgit2::Libgit2;

use crate::core::types::LibVersion;

/// Provider of native constant values.
///
/// Implementations must be deterministic: the registry resolves every
/// symbol once and assumes the answer never changes.
pub trait ConstantSource {
    /// The libgit2 release the values belong to.
    fn version(&self) -> LibVersion;

    /// The value of a native symbol, or `None` if this release does not
    /// define it.
    ///
    /// The value is returned as declared; the registry normalizes it to the
    /// family's width.
    fn resolve(&self, symbol: &str) -> Option<i64>;

    /// Compiled-in features as a raw `GIT_FEATURE_*` mask.
    fn features(&self) -> u32;
}

impl<S: ConstantSource + ?Sized> ConstantSource for &S {
    fn version(&self) -> LibVersion {
        (**self).version()
    }

    fn resolve(&self, symbol: &str) -> Option<i64> {
        (**self).resolve(symbol)
    }

    fn features(&self) -> u32 {
        (**self).features()
    }
}

impl<S: ConstantSource + ?Sized> ConstantSource for Box<S> {
    fn version(&self) -> LibVersion {
        (**self).version()
    }

    fn resolve(&self, symbol: &str) -> Option<i64> {
        (**self).resolve(symbol)
    }

    fn features(&self) -> u32 {
        (**self).features()
    }
}
