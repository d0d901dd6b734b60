//! Cross-domain reconciliation between the generic enum catalog and the
//! logic-type catalogs.
//!
//! Logic types also appear in the generic catalog as `LogicType.<Name>` and
//! `LogicSlotType.<Name>`. Help and values only ever flow from the generic
//! side into the logic-type catalogs, never back.

use stationdata_core::{Catalog, EnumCatalogs, EnumFamily};

/// Counts from one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub descriptions_propagated: usize,
    pub values_backfilled: usize,
}

/// Families mirrored in the generic enum catalog, with their group name.
fn mirrored_families() -> impl Iterator<Item = (EnumFamily, &'static str)> {
    EnumFamily::all()
        .iter()
        .filter_map(|&family| family.enum_group().map(|group| (family, group)))
}

/// Run both directions. Backfill runs first so entries it creates can also
/// pick up help from the generic catalog.
pub fn reconcile(enums: &mut EnumCatalogs, prior: Option<&Catalog>) -> ReconcileStats {
    let values_backfilled = prior.map_or(0, |prior| backfill_values(enums, prior));
    let descriptions_propagated = propagate_descriptions(enums);
    ReconcileStats {
        descriptions_propagated,
        values_backfilled,
    }
}

/// Copy generic enum help onto logic-type entries whose help differs.
/// Values are left alone. Returns the number of entries changed.
pub fn propagate_descriptions(enums: &mut EnumCatalogs) -> usize {
    let Some(generic) = enums.get(EnumFamily::Enums) else {
        return 0;
    };

    let mut updates = Vec::new();
    for (family, group) in mirrored_families() {
        let Some(target) = enums.get(family) else {
            continue;
        };
        for (name, entry) in target {
            let Some(source) = generic.get(&format!("{group}.{name}")) else {
                continue;
            };
            if source.description != entry.description {
                updates.push((family, name.clone(), source.description.clone()));
            }
        }
    }

    let count = updates.len();
    for (family, name, description) in updates {
        if let Some(entry) = enums.get_mut(family).and_then(|c| c.get_mut(&name)) {
            entry.description = description;
        }
    }
    count
}

/// Fill logic-type values from a previously generated generic catalog.
///
/// Every `LogicType.*` / `LogicSlotType.*` entry in `prior` sets the value of
/// the matching logic-type entry, creating it with empty help if the source
/// had no text for it. Returns the number of values written.
pub fn backfill_values(enums: &mut EnumCatalogs, prior: &Catalog) -> usize {
    let mut count = 0;
    for (family, group) in mirrored_families() {
        let target = enums.catalog_mut(family);
        for (name, prior_entry) in prior {
            let Some(member) = strip_group(name, group) else {
                continue;
            };
            target.entry(member.to_string()).or_default().value = prior_entry.value;
            count += 1;
        }
    }
    count
}

/// `LogicType.Power` → `Power` for group `LogicType`.
fn strip_group<'a>(name: &'a str, group: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(group)?;
    let member = rest.strip_prefix('.').unwrap_or(rest);
    (!member.is_empty()).then_some(member)
}
