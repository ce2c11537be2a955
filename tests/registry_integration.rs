//! Integration tests for the registry against the linked libgit2.
//!
//! Values of the linked library may differ from the bundled headers (newer
//! releases renumber some checkout flags), so these tests assert relations
//! between values rather than literal numbers, except for constants that
//! have never changed.

use std::fs;

use gitflags::core::config::{Config, MissingPolicy, SkewPolicy};
use gitflags::{
    BundledHeaders, ConstantSource, Family, FamilyKind, FlagError, Libgit2, LibVersion,
    MemberRole, Registry, RegistryConfig, RegistryError,
};
use tempfile::TempDir;

fn native() -> Registry {
    Registry::load(Libgit2::detect(), &RegistryConfig::default()).unwrap()
}

#[test]
fn loads_against_linked_library() {
    let r = native();
    assert!(r.version().major >= 1);
    assert_eq!(r.families().len(), Family::ALL.len());
}

#[test]
fn global_is_built_once() {
    let first = Registry::global().unwrap();
    let second = Registry::global().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn global_is_shared_across_threads() {
    let here = Registry::global().unwrap() as *const Registry as usize;
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| Registry::global().unwrap() as *const Registry as usize)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), here);
    }
}

#[test]
fn stable_discriminants() {
    let r = native();
    assert_eq!(r.validate(Family::ResetMode, 2).unwrap().name, "MIXED");
    assert!(r.validate(Family::ResetMode, 4).is_err());
    assert_eq!(r.lookup(Family::SubmoduleIgnore, "UNSPECIFIED"), Ok(-1));
    assert_eq!(
        r.validate(Family::FileMode, 0o100755).unwrap().name,
        "BLOB_EXECUTABLE"
    );
    assert_eq!(
        r.lookup(Family::RepositoryInitMode, "SHARED_ALL"),
        Ok(0o2777)
    );
}

#[test]
fn checkout_flags_combine_and_split() {
    let r = native();
    let force = r.lookup(Family::CheckoutStrategy, "FORCE").unwrap() as u32;
    let untracked = r
        .lookup(Family::CheckoutStrategy, "REMOVE_UNTRACKED")
        .unwrap() as u32;

    let set = r
        .combine(Family::CheckoutStrategy, ["FORCE", "REMOVE_UNTRACKED"])
        .unwrap();
    assert_eq!(set.bits(), force | untracked);

    let parts = r.decompose_set(set);
    assert_eq!(parts.named, vec!["FORCE", "REMOVE_UNTRACKED"]);
    assert!(parts.is_exact());
}

#[test]
fn every_flag_family_decomposes_losslessly() {
    let r = native();
    for family in Family::ALL {
        if family.kind() != FamilyKind::Flags {
            continue;
        }
        for bits in [0, 1, 0x8000_0000, u32::MAX] {
            let parts = r.decompose(family, bits).unwrap();
            let rebuilt = r.combine(family, &parts.named).unwrap();
            assert_eq!(rebuilt.bits() | parts.residual, bits, "{family}");
        }
    }
}

#[test]
fn aliases_follow_linked_values() {
    let r = native();
    assert_eq!(
        r.lookup(Family::CheckoutNotify, "IGNORED"),
        r.lookup(Family::CheckoutNotify, "UNTRACKED")
    );
    assert_eq!(
        r.member(Family::CheckoutNotify, "IGNORED").unwrap().role,
        MemberRole::Alias("UNTRACKED")
    );
}

#[test]
fn features_reported() {
    let lib = Libgit2::detect();
    let r = native();
    let features = r.compiled_features();
    let rebuilt = r.combine(Family::Feature, &features.named).unwrap();
    assert_eq!(rebuilt.bits(), lib.features());
}

#[test]
fn native_skew_is_relative_to_headers() {
    let r = native();
    for entry in r.skew() {
        assert_ne!(entry.header, entry.linked);
        assert_eq!(r.lookup(entry.family, entry.name), Ok(entry.linked));
    }
}

#[test]
fn linked_library_matches_its_headers() {
    let r = native();
    assert!(r.skew().is_empty(), "unexpected skew: {:?}", r.skew());

    if r.version() >= LibVersion::new(1, 8, 0) {
        let safe = r.member(Family::CheckoutStrategy, "SAFE").unwrap();
        assert_eq!(safe.value, Some(0));
        assert_eq!(safe.role, MemberRole::Empty);
    }
}

#[test]
fn fallback_symbols_resolve_on_linked_library() {
    let r = native();
    assert_eq!(
        r.lookup(Family::CheckoutStrategy, "DONT_REMOVE_EXISTING"),
        Ok(1 << 22)
    );
    assert_eq!(r.lookup(Family::CheckoutStrategy, "DONT_WRITE_INDEX"), Ok(1 << 23));
    assert_eq!(
        r.validate(Family::Option, 1).unwrap().name,
        "SET_MWINDOW_SIZE"
    );
}

#[test]
fn older_release_model() {
    let old = LibVersion::new(1, 4, 0);
    let r = Registry::load(BundledHeaders::new(old), &RegistryConfig::default()).unwrap();

    assert!(!r.is_supported(Family::Option, "GET_OWNER_VALIDATION"));
    assert!(matches!(
        r.lookup(Family::Option, "GET_OWNER_VALIDATION"),
        Err(FlagError::UnsupportedFlag { version, .. }) if version == old
    ));
    // 35 is unknown to 1.4
    assert!(r.validate(Family::Option, 35).is_err());

    // DRY_RUN's bit becomes residual
    let parts = r.decompose(Family::CheckoutStrategy, 1 << 24).unwrap();
    assert!(parts.named.is_empty());
    assert_eq!(parts.residual, 1 << 24);
}

#[test]
fn config_file_drives_policies() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "skew = \"error\"\nmissing = \"skip\"\n").unwrap();

    let config = Config::load_file(&path).unwrap();
    assert_eq!(config.registry.skew, SkewPolicy::Error);
    assert_eq!(config.registry.missing, MissingPolicy::Skip);

    let r = Registry::load(BundledHeaders::latest(), &config.registry).unwrap();
    assert!(r.skew().is_empty());
}

#[test]
fn bad_config_file_is_a_registry_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "skew = \"sometimes\"").unwrap();

    let err: RegistryError = Config::load_file(&path).unwrap_err().into();
    assert!(matches!(err, RegistryError::Config(_)));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn custom_source() {
    struct Frozen;

    impl ConstantSource for Frozen {
        fn version(&self) -> LibVersion {
            LibVersion::new(1, 7, 0)
        }

        fn resolve(&self, symbol: &str) -> Option<i64> {
            match symbol {
                "GIT_SORT_TIME" => Some(1 << 5),
                other => BundledHeaders::latest().resolve(other),
            }
        }

        fn features(&self) -> u32 {
            0
        }
    }

    let r = Registry::load(Frozen, &RegistryConfig::default()).unwrap();
    assert_eq!(r.lookup(Family::SortMode, "TIME"), Ok(1 << 5));
    assert_eq!(r.skew().len(), 1);
    assert_eq!(r.decompose(Family::SortMode, 1 << 5).unwrap().named, vec!["TIME"]);
    // The header value of TIME is unclaimed now.
    assert_eq!(r.decompose(Family::SortMode, 1 << 1).unwrap().residual, 1 << 1);
}

#[test]
fn values_serialize() {
    let r = Registry::load(BundledHeaders::latest(), &RegistryConfig::default()).unwrap();

    let set = r.combine(Family::SortMode, ["TIME"]).unwrap();
    let json = serde_json::to_value(set).unwrap();
    assert_eq!(json["family"], "SortMode");
    assert_eq!(json["bits"], 2);

    let parts = r.decompose(Family::SortMode, 0x8000_0006).unwrap();
    let json = serde_json::to_value(&parts).unwrap();
    assert_eq!(json["named"], serde_json::json!(["TIME", "REVERSE"]));
    assert_eq!(json["residual"], 0x8000_0000u32);

    let mode = r.validate(Family::ResetMode, 3).unwrap();
    let json = serde_json::to_value(mode).unwrap();
    assert_eq!(json["name"], "HARD");
    assert_eq!(json["value"], 3);
}
