use std::path::{Path, PathBuf};

use stationdata_lib::{GenerateOptions, LegacyXmlExport, generate};

use super::print_summary;
use crate::error::CliError;
use crate::paths::resolve_locale_file;

/// Run the `legacy` command.
pub(crate) fn run_legacy(
    path: &Path,
    lang: &str,
    out: &Path,
    prior_enums: Option<PathBuf>,
) -> Result<(), CliError> {
    let locale = resolve_locale_file(path, lang);
    if !locale.is_file() {
        return Err(CliError::missing_input(locale));
    }
    log::debug!("Reading language file {}", locale.display());

    let prior_enums = prior_enums.unwrap_or_else(|| out.join("enums.txt"));
    let export = LegacyXmlExport::new(locale).with_prior_enums(prior_enums);

    let summary = generate(&export, &GenerateOptions::new(out))?;
    print_summary(&summary);
    Ok(())
}
