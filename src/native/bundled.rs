//! native::bundled
//!
//! Constant source backed by the bundled header table.

use super::ConstantSource;
use crate::catalog::{header, BUNDLED_VERSION};
use crate::core::types::LibVersion;

/// Header values as a libgit2 at `version` would define them.
///
/// Symbols introduced after `version` resolve to `None`. Symbols renumbered
/// at or before `version` resolve to their new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledHeaders {
    version: LibVersion,
    features: u32,
}

impl BundledHeaders {
    /// Headers cut off at `version`, with no features compiled in.
    pub fn new(version: LibVersion) -> Self {
        Self {
            version,
            features: 0,
        }
    }

    /// Headers at the release the table was taken from.
    pub fn latest() -> Self {
        Self::new(BUNDLED_VERSION)
    }

    /// Report `features` as the compiled-in feature mask.
    pub fn with_features(mut self, features: u32) -> Self {
        self.features = features;
        self
    }
}

impl Default for BundledHeaders {
    fn default() -> Self {
        Self::latest()
    }
}

impl ConstantSource for BundledHeaders {
    fn version(&self) -> LibVersion {
        self.version
    }

    fn resolve(&self, symbol: &str) -> Option<i64> {
        header(symbol)
            .filter(|h| h.available_in(self.version))
            .map(|h| h.value_in(self.version))
    }

    fn features(&self) -> u32 {
        self.features
    }
}
