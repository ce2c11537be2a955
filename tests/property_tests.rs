//! Property-based tests for the flag registry.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs. Every registry here is built from the bundled
//! headers so the values are the same on every machine.

use proptest::prelude::*;

use gitflags::core::config::{BitsPolicy, RegistryConfig};
use gitflags::{BundledHeaders, Family, FamilyKind, FlagError, FlagSet, MemberRole, Registry};

fn registry() -> Registry {
    let config = RegistryConfig {
        unrecognized_bits: BitsPolicy::Ignore,
        ..Default::default()
    };
    Registry::load(BundledHeaders::latest(), &config).unwrap()
}

fn flag_families() -> Vec<Family> {
    Family::ALL
        .into_iter()
        .filter(|f| f.kind() == FamilyKind::Flags)
        .collect()
}

fn discriminant_families() -> Vec<Family> {
    Family::ALL
        .into_iter()
        .filter(|f| f.kind() == FamilyKind::Discriminant)
        .collect()
}

/// Strategy for picking a flag family.
fn flag_family() -> impl Strategy<Value = Family> {
    prop::sample::select(flag_families())
}

/// Strategy for picking a discriminant family.
fn discriminant_family() -> impl Strategy<Value = Family> {
    prop::sample::select(discriminant_families())
}

/// Strategy for a flag family and two of its canonical members.
fn canonical_pair() -> impl Strategy<Value = (Family, &'static str, &'static str)> {
    let r = registry();
    let pairs: Vec<_> = flag_families()
        .into_iter()
        .flat_map(|family| {
            let names: Vec<&'static str> = r
                .members(family)
                .iter()
                .filter(|m| m.is_canonical())
                .map(|m| m.name)
                .collect();
            names
                .iter()
                .flat_map(|a| names.iter().map(move |b| (family, *a, *b)))
                .collect::<Vec<_>>()
        })
        .collect();
    prop::sample::select(pairs)
}

/// Names the catalogue might contain, to drive random lookups.
fn flag_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("SAFE".to_string()),
        Just("FORCE".to_string()),
        Just("NONE".to_string()),
        Just("ALL".to_string()),
        Just("IGNORED".to_string()),
        "[A-Z_]{1,24}",
    ]
}

proptest! {
    /// decompose(combine(f1, f2)) names exactly f1 and f2.
    #[test]
    fn combine_then_decompose((family, a, b) in canonical_pair()) {
        let r = registry();
        let set = r.combine(family, [a, b]).unwrap();
        let parts = r.decompose(family, set.bits()).unwrap();

        let mut expected = vec![a, b];
        expected.dedup();
        let mut named = parts.named.clone();
        named.sort_unstable();
        expected.sort_unstable();

        prop_assert_eq!(named, expected);
        prop_assert_eq!(parts.residual, 0);
    }

    /// Named flags OR residual gives back the input, for any input.
    #[test]
    fn decompose_is_lossless(family in flag_family(), bits in any::<u32>()) {
        let r = registry();
        let parts = r.decompose(family, bits).unwrap();
        let rebuilt = r.combine(family, &parts.named).unwrap();
        prop_assert_eq!(rebuilt.bits() | parts.residual, bits);
        prop_assert_eq!(rebuilt.bits() & parts.residual, 0);
    }

    /// Decomposition reports canonical members only, in catalogue order.
    #[test]
    fn decompose_reports_canonical_in_order(family in flag_family(), bits in any::<u32>()) {
        let r = registry();
        let parts = r.decompose(family, bits).unwrap();
        let order: Vec<&str> = r
            .members(family)
            .iter()
            .filter(|m| m.is_canonical())
            .map(|m| m.name)
            .collect();

        let mut last = None;
        for name in &parts.named {
            let member = r.member(family, name).unwrap();
            prop_assert_eq!(member.role, MemberRole::Canonical);
            let pos = order.iter().position(|n| n == name);
            prop_assert!(pos > last);
            last = pos;
        }
    }

    /// Any raw value wraps and unwraps unchanged.
    #[test]
    fn raw_values_roundtrip(family in flag_family(), bits in any::<u32>()) {
        let set = FlagSet::from_raw(family, bits).unwrap();
        prop_assert_eq!(u32::from(set), bits);
        prop_assert_eq!(set.family(), family);
    }

    /// validate accepts exactly the defined values.
    #[test]
    fn validate_matches_definitions(family in discriminant_family(), value in -4i64..70_000) {
        let r = registry();
        let defined = r
            .members(family)
            .iter()
            .find(|m| m.role == MemberRole::Variant && m.value == Some(value));

        match (defined, r.validate(family, value)) {
            (Some(member), Ok(d)) => {
                prop_assert_eq!(d.name, member.name);
                prop_assert_eq!(d.value, value);
            }
            (None, Err(FlagError::InvalidDiscriminant { family: f, value: v })) => {
                prop_assert_eq!(f, family);
                prop_assert_eq!(v, value);
            }
            (defined, result) => {
                prop_assert!(false, "defined {:?} but validate gave {:?}", defined, result);
            }
        }
    }

    /// Every defined discriminant validates back to itself.
    #[test]
    fn every_variant_validates(family in discriminant_family()) {
        let r = registry();
        for member in r.members(family) {
            if let Some(value) = member.value {
                let d = r.validate(family, value).unwrap();
                prop_assert_eq!(r.lookup(family, d.name).unwrap(), value);
            }
        }
    }

    /// Values from different families never combine.
    #[test]
    fn families_never_mix(
        a in flag_family(),
        b in flag_family(),
        x in any::<u32>(),
        y in any::<u32>(),
    ) {
        let left = FlagSet::from_raw(a, x).unwrap();
        let right = FlagSet::from_raw(b, y).unwrap();
        let result = left.union(right);
        if a == b {
            prop_assert_eq!(result.unwrap().bits(), x | y);
        } else {
            prop_assert_eq!(result, Err(FlagError::FamilyMismatch { expected: a, found: b }));
        }
    }

    /// Lookup either succeeds with the member's value or explains why not.
    #[test]
    fn lookup_is_consistent(family in flag_family(), name in flag_name()) {
        let r = registry();
        match r.lookup(family, &name) {
            Ok(value) => {
                prop_assert!(r.is_supported(family, &name));
                let canonical = r.canonical_name(family, &name).unwrap();
                prop_assert_eq!(r.lookup(family, canonical).unwrap(), value);
            }
            Err(FlagError::UnknownFlag { .. }) => {
                prop_assert!(r.member(family, &name).is_err());
            }
            Err(other) => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    /// Family names parse back to the same family.
    #[test]
    fn family_names_roundtrip(family in prop::sample::select(Family::ALL.to_vec())) {
        let parsed: Family = family.name().parse().unwrap();
        prop_assert_eq!(parsed, family);
        let lower: Family = family.name().to_ascii_lowercase().parse().unwrap();
        prop_assert_eq!(lower, family);
    }
}

#[test]
fn reset_mode_examples() {
    let r = registry();
    assert_eq!(r.validate(Family::ResetMode, 2).unwrap().name, "MIXED");
    assert!(matches!(
        r.validate(Family::ResetMode, 4),
        Err(FlagError::InvalidDiscriminant { value: 4, .. })
    ));
}

#[test]
fn checkout_strategy_examples() {
    let r = registry();
    let set = r.combine(Family::CheckoutStrategy, ["SAFE", "FORCE"]).unwrap();
    assert_eq!(set.bits(), 0x3);

    let parts = r.decompose(Family::CheckoutStrategy, 0x3).unwrap();
    assert_eq!(parts.named, vec!["SAFE", "FORCE"]);
    assert_eq!(parts.residual, 0);

    let parts = r.decompose(Family::CheckoutStrategy, 0x8000_0000).unwrap();
    assert!(parts.named.is_empty());
    assert_eq!(parts.residual, 0x8000_0000);
}
