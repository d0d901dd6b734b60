//! Readers for the game's data exports.
//!
//! Two export shapes exist: the structured JSON pair written by the
//! Stationpedia extractor, and the older per-locale language XML. Each is a
//! [`SourceAdapter`] that loads into the shared [`SourceData`] model.

pub mod adapter;
pub mod error;
pub mod legacy;
pub mod prior;
pub mod structured;

pub use adapter::SourceAdapter;
pub use error::ExportError;
pub use legacy::LegacyXmlExport;
pub use prior::{parse_enum_catalog, read_enum_catalog};
pub use stationdata_core::SourceData;
pub use structured::StructuredExport;
