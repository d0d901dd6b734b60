use std::path::{Path, PathBuf};

use stationdata_lib::{GenerateOptions, StructuredExport, generate};

use super::print_summary;
use crate::error::CliError;
use crate::paths::resolve_export_dir;

/// Run the `export` command.
pub(crate) fn run_export(path: &Path, out: &Path, patches: Option<PathBuf>) -> Result<(), CliError> {
    let dir = resolve_export_dir(path);
    let export = StructuredExport::from_dir(&dir);
    for required in [export.stationpedia_path(), export.enums_path()] {
        if !required.exists() {
            return Err(CliError::missing_input(required));
        }
    }
    log::debug!("Reading structured export from {}", dir.display());

    let mut options = GenerateOptions::new(out);
    if let Some(patches) = patches {
        options = options.patches(patches);
    }

    let summary = generate(&export, &options)?;
    print_summary(&summary);
    Ok(())
}
