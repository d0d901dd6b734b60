//! Catalog generation pipeline.
//!
//! Source adapter → [`build_catalogs`] → [`apply_help_patches`] →
//! [`reconcile`] → [`CatalogWriter`]. [`generate`] runs all of it.

pub mod builder;
pub mod error;
pub mod patches;
pub mod pipeline;
pub mod reconcile;
pub mod writer;

pub use builder::{CatalogSet, EnumCatalogBuilder, build_catalogs};
pub use error::PipelineError;
pub use patches::{HelpPatches, OverlayStats, apply_help_patches, load_help_patches};
pub use pipeline::{GenerateOptions, GenerateSummary, generate};
pub use reconcile::{ReconcileStats, backfill_values, propagate_descriptions, reconcile};
pub use writer::{CatalogWriter, WrittenCatalog};

pub use stationdata_core::{Entry, EnumFamily};
pub use stationdata_export::{LegacyXmlExport, SourceAdapter, StructuredExport};
