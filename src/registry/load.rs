//! registry::load
//!
//! Builds the resolved family tables from a constant source.
//!
//! # Procedure
//!
//! 1. Resolve native members and normalize them to the family width.
//!    Missing baseline symbols fail the load unless the policy skips them;
//!    missing versioned symbols are unsupported.
//! 2. Compare resolved values with the headers of the same release (skew).
//! 3. Give explicit aliases their target's value.
//! 4. Classify flag members and check discriminant values are distinct.

use std::collections::HashMap;

use super::member::{Member, MemberRole, SkewEntry};
use super::RegistryError;
use crate::catalog::{self, header, FamilyDef, ValueSource};
use crate::core::config::{MissingPolicy, RegistryConfig, SkewPolicy};
use crate::core::types::{Family, FamilyKind};
use crate::native::ConstantSource;

/// One family, resolved.
#[derive(Debug, Clone)]
pub(super) struct FamilyTable {
    pub family: Family,
    pub members: Vec<Member>,
    /// OR of every canonical member
    pub canonical_mask: u32,
}

impl FamilyTable {
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Output of a successful load.
#[derive(Debug)]
pub(super) struct Loaded {
    pub tables: Vec<FamilyTable>,
    pub skew: Vec<SkewEntry>,
}

pub(super) fn load<S>(source: &S, config: &RegistryConfig) -> Result<Loaded, RegistryError>
where
    S: ConstantSource + ?Sized,
{
    let mut tables = Vec::with_capacity(Family::ALL.len());
    let mut skew = Vec::new();

    for def in catalog::definitions() {
        let mut members = resolve_family(def, source, config, &mut skew)?;
        resolve_aliases(def.family, &mut members)?;
        let canonical_mask = match def.family.kind() {
            FamilyKind::Flags => classify_flags(&mut members),
            FamilyKind::Discriminant => {
                classify_discriminants(def.family, &mut members)?;
                0
            }
        };
        tables.push(FamilyTable {
            family: def.family,
            members,
            canonical_mask,
        });
    }

    if !skew.is_empty() {
        match config.skew {
            SkewPolicy::Ignore => {}
            SkewPolicy::Warn => {
                for entry in &skew {
                    log::warn!("version skew: {entry}");
                }
            }
            SkewPolicy::Error => return Err(RegistryError::Skew(skew)),
        }
    }

    let unsupported = tables
        .iter()
        .flat_map(|t| &t.members)
        .filter(|m| !m.is_supported())
        .count();
    log::debug!(
        "registry loaded for libgit2 {}: {} families, {} unsupported members, {} skewed",
        source.version(),
        tables.len(),
        unsupported,
        skew.len()
    );

    Ok(Loaded { tables, skew })
}

/// Step 1 and 2: native and fixed values, skew.
fn resolve_family<S>(
    def: &FamilyDef,
    source: &S,
    config: &RegistryConfig,
    skew: &mut Vec<SkewEntry>,
) -> Result<Vec<Member>, RegistryError>
where
    S: ConstantSource + ?Sized,
{
    let mut members = Vec::with_capacity(def.members.len());

    for m in def.members {
        let mut member = Member {
            family: def.family,
            name: m.name,
            value: None,
            role: MemberRole::Unsupported,
            symbol: m.symbol(),
            since: None,
            doc: m.doc,
            reserved: m.reserved,
        };

        match m.source {
            ValueSource::Native(symbol) => {
                let expected = header(symbol);
                member.since = expected.and_then(|h| h.since);

                match source.resolve(symbol) {
                    Some(raw) => {
                        let value = def.width.normalize(raw);
                        member.value = Some(value);
                        if let Some(h) = expected {
                            let header_value =
                                def.width.normalize(h.value_in(source.version()));
                            if header_value != value {
                                skew.push(SkewEntry {
                                    family: def.family,
                                    name: m.name,
                                    symbol,
                                    header: header_value,
                                    linked: value,
                                });
                            }
                        }
                    }
                    None => match (member.since, config.missing) {
                        (Some(since), _) => {
                            log::debug!(
                                "{}::{} needs libgit2 {since}, linked {}",
                                def.family,
                                m.name,
                                source.version()
                            );
                        }
                        (None, MissingPolicy::Error) => {
                            return Err(RegistryError::MissingSymbol {
                                family: def.family,
                                name: m.name,
                                symbol,
                                version: source.version(),
                            })
                        }
                        (None, MissingPolicy::Skip) => {
                            log::warn!(
                                "libgit2 {} does not define {symbol}; {}::{} is unsupported",
                                source.version(),
                                def.family,
                                m.name
                            );
                        }
                    },
                }
            }
            ValueSource::Fixed(value) => member.value = Some(def.width.normalize(value)),
            ValueSource::Alias(_) => {}
        }

        members.push(member);
    }

    Ok(members)
}

/// Step 3: explicit aliases take their target's value.
fn resolve_aliases(family: Family, members: &mut [Member]) -> Result<(), RegistryError> {
    let def = catalog::definition(family);
    for (i, m) in def.members.iter().enumerate() {
        let ValueSource::Alias(target) = m.source else {
            continue;
        };
        let resolved = members
            .iter()
            .zip(def.members)
            .find(|(_, d)| d.name == target && !matches!(d.source, ValueSource::Alias(_)))
            .map(|(t, _)| (t.value, t.since));
        let Some((value, since)) = resolved else {
            return Err(RegistryError::UnknownAlias {
                family,
                name: m.name,
                target,
            });
        };
        members[i].value = value;
        members[i].since = since;
        if value.is_some() {
            members[i].role = MemberRole::Alias(target);
        }
    }
    Ok(())
}

/// Step 4 for flag families. Returns the canonical mask.
fn classify_flags(members: &mut [Member]) -> u32 {
    let mut owners: HashMap<u32, &'static str> = HashMap::new();
    let mut mask = 0u32;

    for member in members.iter_mut() {
        if matches!(member.role, MemberRole::Alias(_)) {
            continue;
        }
        let Some(value) = member.value else {
            continue;
        };
        let bits = value as u32;
        member.role = match bits.count_ones() {
            0 => MemberRole::Empty,
            1 => match owners.get(&bits).copied() {
                Some(owner) => MemberRole::Alias(owner),
                None => {
                    owners.insert(bits, member.name);
                    mask |= bits;
                    MemberRole::Canonical
                }
            },
            _ => MemberRole::Composite,
        };
    }

    // An explicit alias of an implicit alias points at the owner.
    let implicit: HashMap<&'static str, &'static str> = members
        .iter()
        .filter_map(|m| match m.role {
            MemberRole::Alias(target) => Some((m.name, target)),
            _ => None,
        })
        .collect();
    for member in members.iter_mut() {
        if let MemberRole::Alias(target) = member.role {
            if let Some(&owner) = implicit.get(target) {
                member.role = MemberRole::Alias(owner);
            }
        }
    }

    mask
}

/// Step 4 for discriminant families.
fn classify_discriminants(family: Family, members: &mut [Member]) -> Result<(), RegistryError> {
    let mut seen: HashMap<i64, &'static str> = HashMap::new();

    for member in members.iter_mut() {
        if matches!(member.role, MemberRole::Alias(_)) {
            continue;
        }
        let Some(value) = member.value else {
            continue;
        };
        if let Some(first) = seen.insert(value, member.name) {
            return Err(RegistryError::DuplicateDiscriminant {
                family,
                first,
                second: member.name,
                value,
            });
        }
        member.role = MemberRole::Variant;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::LibVersion;
    use crate::native::BundledHeaders;

    fn table(loaded: &Loaded, family: Family) -> &FamilyTable {
        &loaded.tables[family.index()]
    }

    #[test]
    fn bundled_headers_load_cleanly() {
        let loaded = load(&BundledHeaders::latest(), &RegistryConfig::default()).unwrap();
        assert_eq!(loaded.tables.len(), Family::ALL.len());
        assert!(loaded.skew.is_empty());
        for t in &loaded.tables {
            for m in &t.members {
                assert!(m.is_supported(), "{}::{} unsupported", t.family, m.name);
            }
        }
    }

    #[test]
    fn roles_in_checkout_notify() {
        let loaded = load(&BundledHeaders::latest(), &RegistryConfig::default()).unwrap();
        let notify = table(&loaded, Family::CheckoutNotify);
        assert_eq!(notify.member("NONE").unwrap().role, MemberRole::Empty);
        assert_eq!(notify.member("CONFLICT").unwrap().role, MemberRole::Canonical);
        assert_eq!(
            notify.member("IGNORED").unwrap().role,
            MemberRole::Alias("UNTRACKED")
        );
        assert_eq!(notify.member("IGNORED").unwrap().value, Some(1 << 3));
        assert_eq!(notify.member("ALL").unwrap().role, MemberRole::Composite);
    }

    #[test]
    fn composite_find_all_leaves_bit_seven_unowned() {
        let loaded = load(&BundledHeaders::latest(), &RegistryConfig::default()).unwrap();
        let find = table(&loaded, Family::DiffFind);
        assert_eq!(find.member("FIND_ALL").unwrap().role, MemberRole::Composite);
        assert_eq!(find.canonical_mask & 0x80, 0);
        assert_eq!(find.canonical_mask & 0x7f, 0x7f);
    }

    #[test]
    fn discriminants_are_variants() {
        let loaded = load(&BundledHeaders::latest(), &RegistryConfig::default()).unwrap();
        let reset = table(&loaded, Family::ResetMode);
        assert!(reset.members.iter().all(|m| m.role == MemberRole::Variant));
        assert_eq!(reset.canonical_mask, 0);
    }

    #[test]
    fn versioned_members_unsupported_on_old_release() {
        let source = BundledHeaders::new(LibVersion::new(1, 4, 0));
        let loaded = load(&source, &RegistryConfig::default()).unwrap();
        let dry_run = table(&loaded, Family::CheckoutStrategy)
            .member("DRY_RUN")
            .unwrap();
        assert!(!dry_run.is_supported());
        assert_eq!(dry_run.role, MemberRole::Unsupported);
        assert_eq!(dry_run.since, Some(LibVersion::new(1, 7, 0)));
    }

    #[test]
    fn renumbered_release_has_no_skew() {
        let source = BundledHeaders::new(LibVersion::new(1, 9, 0));
        let loaded = load(&source, &RegistryConfig::default()).unwrap();
        assert!(loaded.skew.is_empty());

        let checkout = table(&loaded, Family::CheckoutStrategy);
        assert_eq!(checkout.member("SAFE").unwrap().role, MemberRole::Empty);
        assert_eq!(checkout.member("NONE").unwrap().value, Some(1 << 30));
        assert_eq!(checkout.member("NONE").unwrap().role, MemberRole::Canonical);
    }
}
