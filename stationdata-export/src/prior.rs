//! Reader for a previously generated `enums.txt` catalog.
//!
//! The language XML has no ordinals for logic types; the last structured
//! run's generic enum catalog does, so the legacy adapter reads it back.

use std::fs;
use std::path::Path;

use stationdata_core::{Catalog, Entry, parse_optional_int};

use crate::error::ExportError;

/// Read an `enums.txt` catalog (`name value description` per line).
pub fn read_enum_catalog(path: &Path) -> Result<Catalog, ExportError> {
    let contents = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    Ok(parse_enum_catalog(&contents))
}

/// Parse catalog lines. Blank lines are skipped; a missing or `None` value
/// field is unresolved. Descriptions are kept in their escaped form.
pub fn parse_enum_catalog(contents: &str) -> Catalog {
    let mut catalog = Catalog::new();
    for line in contents.lines() {
        let mut fields = line.splitn(3, ' ');
        let Some(name) = fields.next().filter(|n| !n.is_empty()) else {
            continue;
        };
        let value = fields.next().and_then(parse_optional_int);
        let description = fields.next().unwrap_or("");
        catalog.insert(name.to_string(), Entry::new(value, description));
    }
    catalog
}
