pub(crate) mod export;
pub(crate) mod legacy;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use stationdata_lib::GenerateSummary;

/// Log the catalogs a run produced.
pub(crate) fn print_summary(summary: &GenerateSummary) {
    log::info!(
        "{} (from {})",
        "Catalogs written".if_supports_color(Stderr, |t| t.bold()),
        summary.source,
    );
    for catalog in &summary.written {
        log::info!(
            "  {} {:>6} records",
            format!("{:<24}", catalog.file_name).if_supports_color(Stderr, |t| t.cyan()),
            catalog.records,
        );
    }

    if summary.overlay.applied > 0 {
        log::info!("  {} help patches applied", summary.overlay.applied);
    }
    if summary.overlay.collisions > 0 {
        log::warn!(
            "  {} patches overwrote existing enum help; the patch file may be stale",
            summary.overlay.collisions
        );
    }
    if summary.reconcile.descriptions_propagated > 0 {
        log::info!(
            "  {} logic type descriptions taken from enums",
            summary.reconcile.descriptions_propagated
        );
    }
    if summary.reconcile.values_backfilled > 0 {
        log::info!(
            "  {} logic type values recovered from the prior enum catalog",
            summary.reconcile.values_backfilled
        );
    }
}
