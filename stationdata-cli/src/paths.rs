//! Locating export files from a user-supplied path.
//!
//! Users point at whatever is handy: the install folder, its parent, the
//! game executable, or the extractor's output folder. These helpers turn that
//! into the directory or file the adapters need. Nothing here checks that the
//! final files exist; the commands do that.

use std::path::{Path, PathBuf};

const INSTALL_DIR: &str = "Stationeers";
const DATA_DIR: &str = "rocketstation_Data";
const EXTRACT_DIR: &str = "Stationpedia";

/// Normalize a path to the Stationeers install root when it looks like one
/// is involved. Other paths are returned unchanged.
fn resolve_install_root(path: &Path) -> PathBuf {
    let in_install = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name == INSTALL_DIR);
    let is_exe = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("exe"));
    let is_data = path.file_name().is_some_and(|name| name == DATA_DIR);

    if in_install && (is_exe || is_data) {
        if let Some(parent) = path.parent() {
            return parent.to_path_buf();
        }
    }
    if path.file_name().is_some_and(|name| name == INSTALL_DIR) {
        return path.to_path_buf();
    }
    let nested = path.join(INSTALL_DIR);
    if nested.is_dir() {
        return nested;
    }
    path.to_path_buf()
}

/// Directory expected to hold `Stationpedia.json` and `Enums.json`.
pub(crate) fn resolve_export_dir(path: &Path) -> PathBuf {
    let root = resolve_install_root(path);
    let extracted = root.join(EXTRACT_DIR);
    if extracted.is_dir() { extracted } else { root }
}

/// Language XML for `lang`.
///
/// `path` may be the XML file itself, a directory containing `<lang>.xml`, or
/// an install whose `rocketstation_Data/StreamingAssets/Language` holds it.
/// Falls back to `<path>/<lang>.xml` when nothing matches.
pub(crate) fn resolve_locale_file(path: &Path, lang: &str) -> PathBuf {
    if path.is_file() {
        return path.to_path_buf();
    }
    let file_name = format!("{lang}.xml");
    let root = resolve_install_root(path);
    let candidates = [
        path.join(&file_name),
        root.join(DATA_DIR)
            .join("StreamingAssets")
            .join("Language")
            .join(&file_name),
        root.join("Language").join(&file_name),
    ];
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
        .unwrap_or_else(|| path.join(file_name))
}
