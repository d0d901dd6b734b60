//! Legacy export: the game's per-locale language XML.
//!
//! The file is a root element holding flat sections of key/value records:
//!
//! ```text
//! <Language>
//!   <Interface>
//!     <Record><Key>LogicTypePower</Key><Value>Power state</Value></Record>
//!   </Interface>
//!   <Things>
//!     <RecordThing><Key>ItemKit</Key><Value>Kit</Value></RecordThing>
//!   </Things>
//! </Language>
//! ```
//!
//! Nothing in it carries a numeric id. Help text is routed by key prefix,
//! object hashes are recomputed from the prefab key, and logic-type
//! ordinals come from a previously generated `enums.txt` if one is given.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use regex::Regex;

use stationdata_core::{
    Catalog, Entry, EnumFamily, EnumListing, Operation, SourceData, StationpediaEntry,
    prefab_hash, strip_translations,
};

use crate::adapter::SourceAdapter;
use crate::error::ExportError;
use crate::prior::read_enum_catalog;

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "english";

/// Sections whose records are UI/help strings.
const STRING_SECTIONS: &[&str] = &["Interface", "GameStrings", "Colors"];
/// Sections whose records are prefab names.
const OBJECT_SECTIONS: &[&str] = &["Things", "Reagents"];

/// Where a matched string record's text ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HelpTarget {
    LogicType,
    SlotLogicType,
    /// Operation help, keyed by lower-cased instruction name.
    Operation,
    /// Generic enum help, keyed by `Group.Name`.
    EnumGroup(&'static str),
}

static KEY_PATTERNS: LazyLock<Vec<(Regex, HelpTarget)>> = LazyLock::new(|| {
    [
        (r"^LogicType(\w+)", HelpTarget::LogicType),
        (r"^LogicSlotType(\w+)", HelpTarget::SlotLogicType),
        (r"^ScriptCommand(\w+)", HelpTarget::Operation),
        (r"^ScriptDescription(\w+)", HelpTarget::Operation),
        (r"^Color(\w+)", HelpTarget::EnumGroup("Color")),
    ]
    .into_iter()
    .map(|(pattern, target)| (Regex::new(pattern).expect("key pattern is valid"), target))
    .collect()
});

/// One key/value record from a language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRecord {
    pub section: String,
    pub key: String,
    pub value: String,
}

/// Help text collected from string sections.
#[derive(Debug, Default)]
struct HelpBuckets {
    operations: BTreeMap<String, String>,
    logic_types: BTreeMap<String, String>,
    slot_logic_types: BTreeMap<String, String>,
    enum_help: BTreeMap<String, String>,
}

impl HelpBuckets {
    /// Route a record to every bucket whose key pattern matches.
    fn route(&mut self, key: &str, value: &str) {
        for (pattern, target) in KEY_PATTERNS.iter() {
            let Some(name) = pattern.captures(key).and_then(|c| c.get(1)) else {
                continue;
            };
            let name = name.as_str();
            let text = strip_translations(value);
            match target {
                HelpTarget::LogicType => self.logic_types.insert(name.to_string(), text),
                HelpTarget::SlotLogicType => self.slot_logic_types.insert(name.to_string(), text),
                HelpTarget::Operation => self.operations.insert(name.to_lowercase(), text),
                HelpTarget::EnumGroup(group) => {
                    self.enum_help.insert(format!("{group}.{name}"), text)
                }
            };
        }
    }
}

/// A language XML file, plus the optional prior enum catalog used to
/// recover logic-type values.
#[derive(Debug, Clone)]
pub struct LegacyXmlExport {
    locale_path: PathBuf,
    prior_enums: Option<PathBuf>,
}

impl LegacyXmlExport {
    pub fn new(locale_path: impl Into<PathBuf>) -> Self {
        Self {
            locale_path: locale_path.into(),
            prior_enums: None,
        }
    }

    /// Recover logic-type values from this `enums.txt`, if it exists.
    pub fn with_prior_enums(mut self, path: impl Into<PathBuf>) -> Self {
        self.prior_enums = Some(path.into());
        self
    }

    fn load_prior(&self) -> Result<Option<Catalog>, ExportError> {
        let Some(path) = self.prior_enums.as_deref() else {
            return Ok(None);
        };
        if !path.exists() {
            log::warn!(
                "No prior enum catalog at {}; logic type values stay unresolved",
                path.display()
            );
            return Ok(None);
        }
        let catalog = read_enum_catalog(path)?;
        log::debug!("Read {} prior enum entries from {}", catalog.len(), path.display());
        Ok(Some(catalog))
    }
}

impl SourceAdapter for LegacyXmlExport {
    fn name(&self) -> &'static str {
        "language XML"
    }

    fn load(&self) -> Result<SourceData, ExportError> {
        let records = parse_locale_file(&self.locale_path)?;
        let prior = self.load_prior()?;
        Ok(convert(records, prior))
    }
}

/// Parse a language file from disk.
pub fn parse_locale_file(path: &Path) -> Result<Vec<LocaleRecord>, ExportError> {
    let file = std::fs::File::open(path).map_err(|e| ExportError::io(path, e))?;
    parse_locale(std::io::BufReader::new(file)).map_err(|e| e.in_file(path))
}

/// Parse the records of a language file.
///
/// Records are the children of each section; only their `Key` and `Value`
/// children are read. A record without a `Key` is dropped. Keys are
/// trimmed; `Value` text is kept exactly as written.
pub fn parse_locale<R: BufRead>(reader: R) -> Result<Vec<LocaleRecord>, ExportError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut records = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut section = String::new();
    let mut field = String::new();
    let mut key: Option<String> = None;
    let mut value = String::new();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                depth += 1;
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match depth {
                    1 => saw_root = true,
                    2 => section = tag_name,
                    3 => {
                        key = None;
                        value.clear();
                    }
                    4 => field = tag_name,
                    _ => {}
                }
            }
            Event::Empty(_) => {
                if depth == 0 {
                    saw_root = true;
                }
            }
            Event::Text(ref e) => {
                if depth == 4 {
                    let text = e.unescape()?;
                    push_field(&field, &text, &mut key, &mut value);
                }
            }
            Event::CData(e) => {
                if depth == 4 {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    push_field(&field, &text, &mut key, &mut value);
                }
            }
            Event::End(_) => {
                match depth {
                    4 => field.clear(),
                    3 => {
                        let record_key = key.take();
                        match record_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
                            Some(k) => records.push(LocaleRecord {
                                section: section.clone(),
                                key: k.to_string(),
                                value: std::mem::take(&mut value),
                            }),
                            None => value.clear(),
                        }
                    }
                    2 => section.clear(),
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(ExportError::invalid("No root element in language file"));
    }

    Ok(records)
}

fn push_field(field: &str, text: &str, key: &mut Option<String>, value: &mut String) {
    match field {
        "Key" => key.get_or_insert_with(String::new).push_str(text),
        "Value" => value.push_str(text),
        _ => {}
    }
}

/// Build the source model from parsed records and the prior enum catalog.
pub(crate) fn convert(records: Vec<LocaleRecord>, prior_enums: Option<Catalog>) -> SourceData {
    let mut data = SourceData::new();
    let mut help = HelpBuckets::default();

    for record in records {
        let section = record.section.as_str();
        if STRING_SECTIONS.contains(&section) {
            help.route(&record.key, &record.value);
        } else if OBJECT_SECTIONS.contains(&section) {
            data.add_stationpedia(StationpediaEntry {
                hash: prefab_hash(&record.key),
                title: strip_translations(&record.value),
                prefab_name: record.key,
            });
        }
    }

    data.operations = help
        .operations
        .into_iter()
        .map(|(name, description)| {
            (
                name,
                Operation {
                    description,
                    example: String::new(),
                },
            )
        })
        .collect();

    data.enum_listings = vec![
        help_listing(EnumFamily::LogicTypes, help.logic_types),
        help_listing(EnumFamily::SlotLogicTypes, help.slot_logic_types),
    ];
    data.enum_help = Some(help.enum_help);
    data.prior_enums = prior_enums;

    log::debug!(
        "Language XML: {} operations, {} objects",
        data.operations.len(),
        data.stationpedia.len()
    );

    data
}

fn help_listing(family: EnumFamily, help: BTreeMap<String, String>) -> EnumListing {
    EnumListing {
        family,
        entries: help
            .into_iter()
            .map(|(name, text)| (name, Entry::new(None, text)))
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/legacy_tests.rs"]
mod tests;
