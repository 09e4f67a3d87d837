//! Expansion of activator contacts into park-qualified rows
//!
//! Each activator contact fans out over the cartesian product of its own
//! summit's parks and, when the contact matches an S2S record, the
//! counterparty summit's parks. Matching compares raw source values so it
//! must run before any normalization.

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::app::models::{ActivatorQso, ExpandedQso, S2sQso};
use crate::app::services::summit_registry::SummitRegistry;

use super::stats::{ExpansionResult, ExpansionStats};

/// Find the S2S record describing the same contact, if any
///
/// The S2S log is scanned in file order and the first record whose
/// (callsign, date, time, band, mode) tuple matches wins. Later duplicates
/// with the same tuple never contribute.
pub fn find_s2s_match<'a>(qso: &ActivatorQso, s2s_log: &'a [S2sQso]) -> Option<&'a S2sQso> {
    s2s_log.iter().find(|s2s| qso.matches(s2s))
}

/// Expand an activator log over park associations
///
/// For every contact:
/// 1. Look up the parks of the activated summit; no parks means the
///    contact cannot appear in any POTA log and is dropped.
/// 2. Search the S2S log for the same contact. On a match, look up the
///    counterparty summit's parks.
/// 3. Emit one row per own park when the counterparty has no parks,
///    otherwise one row per (own park, counterparty park) pair, own parks
///    as the outer loop.
///
/// Rows are produced in input order, so the first row of the result
/// belongs to the first mapped contact of the log.
pub fn expand_log(
    activator_log: &[ActivatorQso],
    s2s_log: &[S2sQso],
    registry: &SummitRegistry,
    progress_bar: Option<&ProgressBar>,
) -> ExpansionResult {
    let mut stats = ExpansionStats::new();
    stats.total_input = activator_log.len();

    info!(
        "Expanding {} activator contacts against {} S2S records",
        activator_log.len(),
        s2s_log.len()
    );

    let mut expanded = Vec::new();
    let total = activator_log.len();

    for (index, qso) in activator_log.iter().enumerate() {
        if let Some(pb) = progress_bar {
            pb.set_position(index as u64);
            if index % 100 == 0 || index + 1 == total {
                pb.set_message(format!("Expanding contact {} of {}", index + 1, total));
            }
        }

        let my_parks = registry.parks_for_summit(&qso.summit_code);
        if my_parks.is_empty() {
            stats.unmapped_summits += 1;
            debug!(
                "Summit '{}' has no park mapping, dropping contact with {} on {}",
                qso.summit_code, qso.callsign, qso.date
            );
            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
            continue;
        }

        let remote_parks = match find_s2s_match(qso, s2s_log) {
            Some(s2s) => {
                stats.s2s_matches += 1;
                registry.parks_for_summit(&s2s.other_summit)
            }
            None => Vec::new(),
        };

        for my_park in &my_parks {
            if remote_parks.is_empty() {
                expanded.push(ExpandedQso::from_activator(qso, my_park.clone(), None));
            } else {
                for remote_park in &remote_parks {
                    stats.p2p_rows += 1;
                    expanded.push(ExpandedQso::from_activator(
                        qso,
                        my_park.clone(),
                        Some(remote_park.clone()),
                    ));
                }
            }
        }

        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
    }

    stats.expanded = expanded.len();

    info!(
        "Expansion complete: {} contacts -> {} park-qualified rows ({} S2S matches)",
        stats.total_input, stats.expanded, stats.s2s_matches
    );

    ExpansionResult::new(expanded, stats)
}
