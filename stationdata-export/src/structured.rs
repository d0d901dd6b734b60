//! Structured export: `Stationpedia.json` + `Enums.json`.
//!
//! Both files come pre-hashed and pre-structured from the Stationpedia
//! extractor, so loading is mostly reshaping. Enum values may be JSON
//! numbers, numeric strings, or placeholders; only the first two resolve.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use stationdata_core::{
    Constant, Entry, EnumFamily, EnumListing, Operation, SourceData, StationpediaEntry,
    parse_optional_int, strip_translations,
};

use crate::adapter::SourceAdapter;
use crate::error::ExportError;

/// File name of the page/command export.
pub const STATIONPEDIA_FILE: &str = "Stationpedia.json";
/// File name of the enum export.
pub const ENUMS_FILE: &str = "Enums.json";
/// Basic enum group whose members are written without a `Group.` prefix.
const UNNAMED_GROUP: &str = "_unnamed";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StationpediaDoc {
    #[serde(default)]
    pages: Vec<PageDoc>,
    #[serde(default)]
    script_commands: BTreeMap<String, ScriptCommandDoc>,
    #[serde(default)]
    script_constants: BTreeMap<String, ScriptConstantDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PageDoc {
    #[serde(default)]
    prefab_name: Option<String>,
    #[serde(default)]
    prefab_hash: Option<i64>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScriptCommandDoc {
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    example: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScriptConstantDoc {
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnumsDoc {
    #[serde(default)]
    script_enums: BTreeMap<String, EnumListingDoc>,
    #[serde(default)]
    basic_enums: BTreeMap<String, EnumListingDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct EnumListingDoc {
    #[serde(default)]
    values: BTreeMap<String, EnumValueDoc>,
}

#[derive(Debug, Deserialize)]
struct EnumValueDoc {
    #[serde(default)]
    value: Value,
    #[serde(default)]
    description: Option<String>,
}

/// Structured JSON export located by its two file paths.
#[derive(Debug, Clone)]
pub struct StructuredExport {
    stationpedia_path: PathBuf,
    enums_path: PathBuf,
}

impl StructuredExport {
    pub fn new(stationpedia_path: impl Into<PathBuf>, enums_path: impl Into<PathBuf>) -> Self {
        Self {
            stationpedia_path: stationpedia_path.into(),
            enums_path: enums_path.into(),
        }
    }

    /// Export whose files sit side by side in `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        Self::new(dir.join(STATIONPEDIA_FILE), dir.join(ENUMS_FILE))
    }

    pub fn stationpedia_path(&self) -> &Path {
        &self.stationpedia_path
    }

    pub fn enums_path(&self) -> &Path {
        &self.enums_path
    }
}

impl SourceAdapter for StructuredExport {
    fn name(&self) -> &'static str {
        "structured export"
    }

    fn load(&self) -> Result<SourceData, ExportError> {
        let pedia: StationpediaDoc = read_json(&self.stationpedia_path)?;
        let enums: EnumsDoc = read_json(&self.enums_path)?;
        Ok(convert(pedia, enums))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ExportError> {
    let contents = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| ExportError::json(path, e))
}

/// Reshape both parsed documents into the source model.
pub(crate) fn convert(pedia: StationpediaDoc, enums: EnumsDoc) -> SourceData {
    let mut data = SourceData::new();

    for (name, command) in pedia.script_commands {
        let Some(desc) = command.desc else {
            log::warn!("Skipping script command '{}' without a description", name);
            continue;
        };
        data.operations.insert(
            name,
            Operation {
                description: strip_translations(&desc),
                example: command.example.unwrap_or_default(),
            },
        );
    }

    let mut constants = BTreeMap::new();
    for (name, constant) in pedia.script_constants {
        let (Some(desc), Some(value)) = (constant.desc, json_text(&constant.value)) else {
            log::warn!("Skipping script constant '{}' with missing fields", name);
            continue;
        };
        constants.insert(
            name,
            Constant {
                value,
                description: strip_translations(&desc),
            },
        );
    }
    data.constants = Some(constants);

    for page in pedia.pages {
        let Some(prefab_name) = page.prefab_name.filter(|n| !n.is_empty()) else {
            continue;
        };
        let Some(raw_hash) = page.prefab_hash.filter(|&h| h != 0) else {
            continue;
        };
        let Ok(hash) = i32::try_from(raw_hash) else {
            log::warn!(
                "Skipping page '{}': hash {} is outside the signed 32-bit range",
                prefab_name,
                raw_hash
            );
            continue;
        };
        data.add_stationpedia(StationpediaEntry {
            hash,
            prefab_name,
            title: strip_translations(&page.title.unwrap_or_default()),
        });
    }

    let mut script_enums = enums.script_enums;
    for &family in EnumFamily::all() {
        let Some(listing_name) = family.script_enum_name() else {
            continue;
        };
        let mut listing = EnumListing::new(family);
        match script_enums.remove(listing_name) {
            Some(doc) => listing.entries = listing_entries(doc, ""),
            None => log::warn!("Enum export has no '{}' listing", listing_name),
        }
        data.enum_listings.push(listing);
    }

    let mut generic = EnumListing::new(EnumFamily::Enums);
    for (group, doc) in enums.basic_enums {
        let prefix = if group == UNNAMED_GROUP {
            String::new()
        } else {
            format!("{group}.")
        };
        generic.entries.extend(listing_entries(doc, &prefix));
    }
    data.enum_listings.push(generic);

    log::debug!(
        "Structured export: {} operations, {} pages, {} enum listings",
        data.operations.len(),
        data.stationpedia.len(),
        data.enum_listings.len()
    );

    data
}

fn listing_entries(doc: EnumListingDoc, prefix: &str) -> Vec<(String, Entry)> {
    doc.values
        .into_iter()
        .map(|(name, value)| {
            (
                format!("{prefix}{name}"),
                Entry::new(
                    json_int(&value.value),
                    strip_translations(&value.description.unwrap_or_default()),
                ),
            )
        })
        .collect()
}

/// Integer value of an exported JSON field, if it has one.
fn json_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_optional_int(s),
        _ => None,
    }
}

/// Literal text of an exported constant value.
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/structured_tests.rs"]
mod tests;
