use stationdata_core::SourceData;

use crate::error::ExportError;

/// A game export that can be loaded into the uniform source model.
///
/// The catalog pipeline only sees this trait; it never needs to know which
/// export format it was handed.
pub trait SourceAdapter {
    /// Short human-readable name of the export format.
    fn name(&self) -> &'static str;

    /// Read and normalize the export.
    fn load(&self) -> Result<SourceData, ExportError>;
}
