use std::path::PathBuf;

use stationdata_export::SourceAdapter;

use crate::builder::build_catalogs;
use crate::error::PipelineError;
use crate::patches::{OverlayStats, apply_help_patches, load_help_patches};
use crate::reconcile::{ReconcileStats, reconcile};
use crate::writer::{CatalogWriter, WrittenCatalog};

/// Options for a catalog generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the catalog files are written to.
    pub out_dir: PathBuf,
    /// Help patch file to overlay, if any. A path that does not exist is
    /// skipped with a warning.
    pub patches: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            patches: None,
        }
    }

    pub fn patches(mut self, path: impl Into<PathBuf>) -> Self {
        self.patches = Some(path.into());
        self
    }
}

/// What a generation run did.
#[derive(Debug, Clone, Default)]
pub struct GenerateSummary {
    /// Name of the source adapter that was loaded.
    pub source: &'static str,
    pub written: Vec<WrittenCatalog>,
    pub overlay: OverlayStats,
    pub reconcile: ReconcileStats,
}

/// Load `adapter`, run every pipeline stage, and rewrite the catalogs.
pub fn generate(
    adapter: &dyn SourceAdapter,
    options: &GenerateOptions,
) -> Result<GenerateSummary, PipelineError> {
    log::debug!("Loading {}", adapter.name());
    let mut source = adapter.load()?;
    let prior = source.prior_enums.take();

    let mut catalogs = build_catalogs(source);

    let patches = match options.patches.as_deref() {
        Some(path) => load_help_patches(path)?,
        None => None,
    };
    let overlay = patches
        .map(|p| apply_help_patches(&p, &mut catalogs))
        .unwrap_or_default();

    let reconciled = reconcile(&mut catalogs.enums, prior.as_ref());
    log::debug!(
        "Reconciled: {} descriptions propagated, {} values backfilled",
        reconciled.descriptions_propagated,
        reconciled.values_backfilled
    );

    let written = CatalogWriter::new(&options.out_dir).write_all(&catalogs)?;
    log::info!(
        "Wrote {} catalogs to {}",
        written.len(),
        options.out_dir.display()
    );

    Ok(GenerateSummary {
        source: adapter.name(),
        written,
        overlay,
        reconcile: reconciled,
    })
}
