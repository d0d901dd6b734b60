//! Shared data model for the stationdata catalog generator.
//!
//! Both source adapters produce a [`SourceData`] and every later pipeline
//! stage consumes it, so the types here are the only contract between the
//! export readers and the catalog writers.

use std::collections::BTreeMap;

pub mod family;
pub mod hash;
pub mod text;

pub use family::{EnumCatalogs, EnumFamily};
pub use hash::prefab_hash;
pub use text::{escape_description, parse_optional_int, strip_translations};

/// One named member of an enum-like catalog.
///
/// `value` is `None` when the export did not carry a usable integer; that is
/// a valid state and renders as `None` in the catalog files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub value: Option<i64>,
    pub description: String,
}

impl Entry {
    pub fn new(value: Option<i64>, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

/// Name-keyed catalog. Keys are unique and iteration is sorted by key.
pub type Catalog = BTreeMap<String, Entry>;

/// A scripting instruction and its help text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operation {
    pub description: String,
    /// Usage example as exported; never rewritten by the pipeline.
    pub example: String,
}

/// A scripting constant. The value is kept as exported text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constant {
    pub value: String,
    pub description: String,
}

/// A Stationpedia object resolvable by its prefab hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationpediaEntry {
    pub hash: i32,
    pub prefab_name: String,
    pub title: String,
}

/// A batch of enum members destined for one catalog family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumListing {
    pub family: EnumFamily,
    pub entries: Vec<(String, Entry)>,
}

impl EnumListing {
    pub fn new(family: EnumFamily) -> Self {
        Self {
            family,
            entries: Vec::new(),
        }
    }
}

/// The uniform model every source adapter loads into.
#[derive(Debug, Clone, Default)]
pub struct SourceData {
    /// Instructions keyed by name.
    pub operations: BTreeMap<String, Operation>,
    /// Script constants; `None` when the source cannot provide them.
    pub constants: Option<BTreeMap<String, Constant>>,
    /// Stationpedia objects keyed by prefab hash (last writer wins).
    pub stationpedia: BTreeMap<i32, StationpediaEntry>,
    /// Enum listings in fold order. A family only gets a catalog file if at
    /// least one listing names it.
    pub enum_listings: Vec<EnumListing>,
    /// Free-form enum help (`Family.Name -> text`) for sources that have it.
    pub enum_help: Option<BTreeMap<String, String>>,
    /// A previously generated generic enum catalog, used to recover
    /// logic-type ordinals the source does not carry.
    pub prior_enums: Option<Catalog>,
}

impl SourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a Stationpedia entry, replacing any entry with the same hash.
    pub fn add_stationpedia(&mut self, entry: StationpediaEntry) {
        self.stationpedia.insert(entry.hash, entry);
    }
}
