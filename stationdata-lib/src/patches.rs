//! Curated help overrides applied on top of exported descriptions.
//!
//! The patch file is JSON with one `name -> text` object per family:
//!
//! ```json
//! {"operations": {}, "constants": {}, "batchmodes": {}, "reagentmodes": {}, "enums": {}}
//! ```
//!
//! A patch only replaces the description of an entry that already exists;
//! unknown names and empty texts are ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use stationdata_core::{Catalog, EnumFamily};

use crate::builder::CatalogSet;
use crate::error::PipelineError;

/// Override descriptions, one map per patchable family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HelpPatches {
    #[serde(default)]
    pub operations: BTreeMap<String, String>,
    #[serde(default)]
    pub constants: BTreeMap<String, String>,
    #[serde(default)]
    pub batchmodes: BTreeMap<String, String>,
    #[serde(default)]
    pub reagentmodes: BTreeMap<String, String>,
    #[serde(default)]
    pub enums: BTreeMap<String, String>,
}

/// Counts from one overlay pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayStats {
    /// Descriptions replaced.
    pub applied: usize,
    /// Generic enum entries that already had help before being patched.
    pub collisions: usize,
}

/// Load the patch file. A missing file is not an error: there is simply
/// nothing to apply.
pub fn load_help_patches(path: &Path) -> Result<Option<HelpPatches>, PipelineError> {
    if !path.exists() {
        log::warn!("No help patch file at {}; skipping patches", path.display());
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
    let patches = serde_json::from_str(&contents).map_err(|source| PipelineError::Patches {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(patches))
}

/// Overlay every patch family onto the matching catalog.
pub fn apply_help_patches(patches: &HelpPatches, catalogs: &mut CatalogSet) -> OverlayStats {
    let mut stats = OverlayStats::default();

    for (name, help) in nonempty(&patches.operations) {
        if let Some(op) = catalogs.operations.get_mut(name) {
            op.description = help.clone();
            stats.applied += 1;
        }
    }

    if let Some(constants) = catalogs.constants.as_mut() {
        for (name, help) in nonempty(&patches.constants) {
            if let Some(constant) = constants.get_mut(name) {
                constant.description = help.clone();
                stats.applied += 1;
            }
        }
    }

    let families = [
        (EnumFamily::BatchModes, &patches.batchmodes),
        (EnumFamily::ReagentModes, &patches.reagentmodes),
        (EnumFamily::Enums, &patches.enums),
    ];
    for (family, overrides) in families {
        if let Some(catalog) = catalogs.enums.get_mut(family) {
            overlay_catalog(catalog, overrides, family == EnumFamily::Enums, &mut stats);
        }
    }

    log::debug!(
        "Applied {} help patches ({} overwrote existing enum help)",
        stats.applied,
        stats.collisions
    );

    stats
}

fn overlay_catalog(
    catalog: &mut Catalog,
    overrides: &BTreeMap<String, String>,
    warn_documented: bool,
    stats: &mut OverlayStats,
) {
    for (name, help) in nonempty(overrides) {
        let Some(entry) = catalog.get_mut(name) else {
            continue;
        };
        if warn_documented && !entry.description.is_empty() {
            log::warn!("enum {} already has help!: {}", name, entry.description);
            stats.collisions += 1;
        }
        entry.description = help.clone();
        stats.applied += 1;
    }
}

fn nonempty(map: &BTreeMap<String, String>) -> impl Iterator<Item = (&String, &String)> {
    map.iter().filter(|(_, help)| !help.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stationdata_core::{Constant, Entry, Operation};

    fn patches(json: &str) -> HelpPatches {
        serde_json::from_str(json).unwrap()
    }

    fn sample_set() -> CatalogSet {
        let mut set = CatalogSet::default();
        set.operations.insert(
            "add".to_string(),
            Operation {
                description: "old".to_string(),
                example: "add r? a b".to_string(),
            },
        );
        set.constants = Some(BTreeMap::from([(
            "pi".to_string(),
            Constant {
                value: "3.14".to_string(),
                description: String::new(),
            },
        )]));
        set.enums
            .insert(EnumFamily::BatchModes, "Sum", Entry::new(Some(1), ""));
        set.enums
            .insert(EnumFamily::Enums, "Color.Red", Entry::new(Some(4), ""));
        set.enums
            .insert(EnumFamily::Enums, "Color.Blue", Entry::new(Some(0), "documented"));
        set
    }

    #[test]
    fn test_patch_replaces_description_keeps_value() {
        let mut set = sample_set();
        let stats = apply_help_patches(
            &patches(r#"{"batchmodes": {"Sum": "Adds them up"}, "enums": {"Color.Red": "Red paint"}}"#),
            &mut set,
        );
        assert_eq!(stats.applied, 2);
        assert_eq!(stats.collisions, 0);
        let batch = set.enums.get(EnumFamily::BatchModes).unwrap();
        assert_eq!(batch["Sum"], Entry::new(Some(1), "Adds them up"));
        let enums = set.enums.get(EnumFamily::Enums).unwrap();
        assert_eq!(enums["Color.Red"], Entry::new(Some(4), "Red paint"));
    }

    #[test]
    fn test_patch_never_creates_entries() {
        let mut set = sample_set();
        let before: Vec<_> = set.enums.get(EnumFamily::Enums).unwrap().keys().cloned().collect();
        let stats = apply_help_patches(
            &patches(r#"{"enums": {"Color.Green": "new"}, "operations": {"sub": "x"}, "reagentmodes": {"Contents": "y"}}"#),
            &mut set,
        );
        let after: Vec<_> = set.enums.get(EnumFamily::Enums).unwrap().keys().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(stats.applied, 0);
        assert!(!set.operations.contains_key("sub"));
        assert!(!set.enums.contains(EnumFamily::ReagentModes));
    }

    #[test]
    fn test_empty_override_ignored() {
        let mut set = sample_set();
        apply_help_patches(&patches(r#"{"operations": {"add": ""}}"#), &mut set);
        assert_eq!(set.operations["add"].description, "old");
    }

    #[test]
    fn test_documented_enum_is_overwritten_with_collision() {
        let mut set = sample_set();
        let stats = apply_help_patches(&patches(r#"{"enums": {"Color.Blue": "patched"}}"#), &mut set);
        assert_eq!(stats.collisions, 1);
        let enums = set.enums.get(EnumFamily::Enums).unwrap();
        assert_eq!(enums["Color.Blue"].description, "patched");
    }

    #[test]
    fn test_operations_and_constants_patched() {
        let mut set = sample_set();
        apply_help_patches(
            &patches(r#"{"operations": {"add": "new help"}, "constants": {"pi": "Ratio"}}"#),
            &mut set,
        );
        assert_eq!(set.operations["add"].description, "new help");
        assert_eq!(set.operations["add"].example, "add r? a b");
        assert_eq!(set.constants.as_ref().unwrap()["pi"].description, "Ratio");
    }

    #[test]
    fn test_missing_sections_default_empty() {
        assert_eq!(patches("{}"), HelpPatches::default());
    }
}
