//! Folding source listings into the per-family enum catalogs.

use std::collections::BTreeMap;

use stationdata_core::{
    Constant, Entry, EnumCatalogs, EnumFamily, EnumListing, Operation, SourceData,
    StationpediaEntry,
};

/// Every catalog the writer emits, assembled from one source load.
///
/// Families the source did not provide stay absent (`None`, or missing from
/// `enums`) and are not written.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    pub operations: BTreeMap<String, Operation>,
    pub constants: Option<BTreeMap<String, Constant>>,
    pub stationpedia: BTreeMap<i32, StationpediaEntry>,
    pub enums: EnumCatalogs,
    pub enum_help: Option<BTreeMap<String, String>>,
}

/// Merges enum listings into five independent catalogs.
///
/// Later listings overwrite earlier ones on a name collision within the same
/// family.
#[derive(Debug, Default)]
pub struct EnumCatalogBuilder {
    catalogs: EnumCatalogs,
}

impl EnumCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one listing in. An empty listing still marks its family present.
    pub fn add_listing(&mut self, listing: EnumListing) -> &mut Self {
        self.add_entries(listing.family, listing.entries)
    }

    pub fn add_entries(
        &mut self,
        family: EnumFamily,
        entries: impl IntoIterator<Item = (String, Entry)>,
    ) -> &mut Self {
        self.catalogs.catalog_mut(family).extend(entries);
        self
    }

    pub fn build(self) -> EnumCatalogs {
        self.catalogs
    }
}

/// Assemble the catalog set from a loaded source. The prior enum catalog is
/// not part of the output and is left for the reconciler.
pub fn build_catalogs(source: SourceData) -> CatalogSet {
    let mut builder = EnumCatalogBuilder::new();
    for listing in source.enum_listings {
        builder.add_listing(listing);
    }
    let enums = builder.build();

    for (family, catalog) in enums.iter() {
        log::debug!("Built {} with {} entries", family.file_name(), catalog.len());
    }

    CatalogSet {
        operations: source.operations,
        constants: source.constants,
        stationpedia: source.stationpedia,
        enums,
        enum_help: source.enum_help,
    }
}
