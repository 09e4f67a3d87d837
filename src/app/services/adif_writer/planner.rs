//! Grouping of normalized records into per-file plans
//!
//! POTA wants one log file per (park, operator) pair. Plans are ordered by
//! first appearance in the record stream: parks in the order they first
//! occur, operators within a park likewise. The earliest contact date of a
//! group becomes part of its filename.

use tracing::info;

use crate::app::models::PotaQso;
use crate::constants;

/// One output file: a (park, operator) group and its records
#[derive(Debug, Clone)]
pub struct FilePlan {
    /// Activated park code (MY_SIG_INFO)
    pub park: String,

    /// Operator callsign
    pub operator: String,

    /// Earliest QSO_DATE in the group, lexicographic minimum
    pub earliest_date: String,

    /// Records of the group in stream order
    pub qsos: Vec<PotaQso>,
}

impl FilePlan {
    /// Output filename for this group
    pub fn filename(&self) -> String {
        constants::adif_filename(&self.operator, &self.park, &self.earliest_date)
    }
}

/// Drop records dated before the cutoff
///
/// The cutoff is an 8-digit date compared lexicographically, which on
/// "YYYYMMDD" strings orders chronologically. Records dated exactly on the
/// cutoff are kept.
pub fn apply_cutoff(records: Vec<PotaQso>, cutoff: &str) -> Vec<PotaQso> {
    let before = records.len();
    let kept: Vec<PotaQso> = records
        .into_iter()
        .filter(|record| record.qso_date.as_str() >= cutoff)
        .collect();

    if kept.len() < before {
        info!(
            "Cutoff {} dropped {} of {} records",
            cutoff,
            before - kept.len(),
            before
        );
    }

    kept
}

/// Group records into per-file plans
///
/// Two-level grouping in first-seen order: distinct parks as they first
/// appear, then distinct operators within each park's records. Every
/// record lands in exactly one plan; records inside a plan keep their
/// stream order.
pub fn plan_files(records: &[PotaQso]) -> Vec<FilePlan> {
    let mut parks: Vec<&str> = Vec::new();
    for record in records {
        if !parks.iter().any(|p| *p == record.my_park) {
            parks.push(&record.my_park);
        }
    }

    let mut plans = Vec::new();
    for park in parks {
        let park_records: Vec<&PotaQso> =
            records.iter().filter(|r| r.my_park == park).collect();

        let mut operators: Vec<&str> = Vec::new();
        for record in &park_records {
            if !operators.iter().any(|o| *o == record.operator) {
                operators.push(&record.operator);
            }
        }

        for operator in operators {
            let qsos: Vec<PotaQso> = park_records
                .iter()
                .filter(|r| r.operator == operator)
                .map(|r| (*r).clone())
                .collect();

            let earliest_date = qsos
                .iter()
                .map(|q| q.qso_date.as_str())
                .min()
                .unwrap_or_default()
                .to_string();

            plans.push(FilePlan {
                park: park.to_string(),
                operator: operator.to_string(),
                earliest_date,
                qsos,
            });
        }
    }

    info!(
        "Planned {} output files from {} records",
        plans.len(),
        records.len()
    );

    plans
}
