//! Line-oriented catalog files.
//!
//! Every record is one line of space-separated fields, sorted by its primary
//! key. Descriptions are flattened with [`escape_description`]; a missing
//! value is written as `None`. The downstream tooling parses these files
//! positionally, so field order and escaping are fixed.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use stationdata_core::{Catalog, Constant, Operation, StationpediaEntry, escape_description};

use crate::builder::CatalogSet;
use crate::error::PipelineError;

pub const OPERATIONS_FILE: &str = "instructions_help.txt";
pub const STATIONPEDIA_FILE: &str = "stationpedia.txt";
pub const CONSTANTS_FILE: &str = "constants.txt";
pub const ENUM_HELP_FILE: &str = "enum_help.txt";

/// One catalog file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenCatalog {
    pub file_name: &'static str,
    pub records: usize,
}

/// `name description`
pub fn render_operations(operations: &BTreeMap<String, Operation>) -> String {
    let mut out = String::new();
    for (name, op) in operations {
        out.push_str(&format!("{} {}\n", name, escape_description(&op.description)));
    }
    out
}

/// `name value description`
pub fn render_entries(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (name, entry) in catalog {
        let value = match entry.value {
            Some(v) => v.to_string(),
            None => "None".to_string(),
        };
        out.push_str(&format!(
            "{} {} {}\n",
            name,
            value,
            escape_description(&entry.description)
        ));
    }
    out
}

/// `name value description`, with the value as exported text.
pub fn render_constants(constants: &BTreeMap<String, Constant>) -> String {
    let mut out = String::new();
    for (name, constant) in constants {
        out.push_str(&format!(
            "{} {} {}\n",
            name,
            constant.value,
            escape_description(&constant.description)
        ));
    }
    out
}

/// `hash prefabName title`, sorted by prefab name (hash breaks ties).
pub fn render_stationpedia(entries: &BTreeMap<i32, StationpediaEntry>) -> String {
    let mut sorted: Vec<_> = entries.values().collect();
    sorted.sort_by(|a, b| {
        a.prefab_name
            .cmp(&b.prefab_name)
            .then(a.hash.cmp(&b.hash))
    });

    let mut out = String::new();
    for entry in sorted {
        out.push_str(&format!(
            "{} {} {}\n",
            entry.hash,
            entry.prefab_name,
            escape_description(&entry.title)
        ));
    }
    out
}

/// `name description`
pub fn render_enum_help(help: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (name, text) in help {
        out.push_str(&format!("{} {}\n", name, escape_description(text)));
    }
    out
}

/// Writes a [`CatalogSet`] into an output directory, one file per family.
///
/// Files are replaced whole. Each is written independently, so a failure
/// part way through leaves the earlier files updated.
#[derive(Debug, Clone)]
pub struct CatalogWriter {
    out_dir: PathBuf,
}

impl CatalogWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Write every catalog present in `set`.
    pub fn write_all(&self, set: &CatalogSet) -> Result<Vec<WrittenCatalog>, PipelineError> {
        fs::create_dir_all(&self.out_dir).map_err(|e| PipelineError::io(&self.out_dir, e))?;

        let mut written = vec![
            self.write(
                OPERATIONS_FILE,
                &render_operations(&set.operations),
                set.operations.len(),
            )?,
            self.write(
                STATIONPEDIA_FILE,
                &render_stationpedia(&set.stationpedia),
                set.stationpedia.len(),
            )?,
        ];

        for (family, catalog) in set.enums.iter() {
            written.push(self.write(family.file_name(), &render_entries(catalog), catalog.len())?);
        }

        if let Some(constants) = &set.constants {
            written.push(self.write(CONSTANTS_FILE, &render_constants(constants), constants.len())?);
        }

        if let Some(help) = &set.enum_help {
            written.push(self.write(ENUM_HELP_FILE, &render_enum_help(help), help.len())?);
        }

        Ok(written)
    }

    fn write(
        &self,
        file_name: &'static str,
        contents: &str,
        records: usize,
    ) -> Result<WrittenCatalog, PipelineError> {
        let path = self.out_dir.join(file_name);
        fs::write(&path, contents).map_err(|e| PipelineError::io(&path, e))?;
        log::debug!("Wrote {} records to {}", records, path.display());
        Ok(WrittenCatalog { file_name, records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stationdata_core::Entry;

    #[test]
    fn test_render_entries_format() {
        let catalog = Catalog::from([
            ("Foo".to_string(), Entry::new(Some(5), "desc")),
            ("Bar".to_string(), Entry::new(None, "multi\r\nline")),
            ("Baz".to_string(), Entry::new(Some(-1), "")),
        ]);
        assert_eq!(
            render_entries(&catalog),
            "Bar None multi\\nline\nBaz -1 \nFoo 5 desc\n"
        );
    }

    #[test]
    fn test_render_operations_two_fields() {
        let ops = BTreeMap::from([
            (
                "yield".to_string(),
                Operation {
                    description: "Pauses".to_string(),
                    example: "yield".to_string(),
                },
            ),
            (
                "add".to_string(),
                Operation {
                    description: "Register = a + b\nsecond".to_string(),
                    example: String::new(),
                },
            ),
        ]);
        assert_eq!(
            render_operations(&ops),
            "add Register = a + b\\nsecond\nyield Pauses\n"
        );
    }

    #[test]
    fn test_render_stationpedia_sorted_by_prefab_name() {
        let entries = BTreeMap::from([
            (
                -400115994,
                StationpediaEntry {
                    hash: -400115994,
                    prefab_name: "StructureBattery".to_string(),
                    title: "Station Battery".to_string(),
                },
            ),
            (
                964043875,
                StationpediaEntry {
                    hash: 964043875,
                    prefab_name: "ItemKitAirlock".to_string(),
                    title: "Kit (Airlock)".to_string(),
                },
            ),
        ]);
        assert_eq!(
            render_stationpedia(&entries),
            "964043875 ItemKitAirlock Kit (Airlock)\n-400115994 StructureBattery Station Battery\n"
        );
    }

    #[test]
    fn test_render_constants_keeps_value_text() {
        let constants = BTreeMap::from([(
            "pinf".to_string(),
            Constant {
                value: "Infinity".to_string(),
                description: "Positive infinity".to_string(),
            },
        )]);
        assert_eq!(render_constants(&constants), "pinf Infinity Positive infinity\n");
    }

    #[test]
    fn test_render_enum_help() {
        let help = BTreeMap::from([("Color.Blue".to_string(), "Blue\npaint".to_string())]);
        assert_eq!(render_enum_help(&help), "Color.Blue Blue\\npaint\n");
    }
}
