//! Data models for SOTA log conversion
//!
//! This module contains the core data structures representing SOTA contact
//! records, their expanded park-qualified forms, and the normalized POTA
//! records written to ADIF files.

use crate::constants::{self, adif_fields};

// =============================================================================
// SOTA Activator Record
// =============================================================================

/// One contact from a SOTA activator log export
///
/// Fields hold the raw text exactly as exported: dates as "D/M/YYYY", times
/// as "H:MM", bands as frequency labels ("14MHz"). Normalization happens
/// after expansion so that S2S matching always compares source values.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivatorQso {
    /// Operator (own) callsign
    pub my_callsign: String,

    /// Activated summit code (e.g. "W6/CT-226")
    pub summit_code: String,

    /// Contact date as exported (D/M/YYYY, non-zero-padded)
    pub date: String,

    /// Contact time as exported (H:MM)
    pub time: String,

    /// Frequency label as exported (e.g. "14MHz")
    pub band: String,

    /// Mode as exported (e.g. "CW", "SSB", "DATA")
    pub mode: String,

    /// Counterparty callsign
    pub callsign: String,

    /// Free-text comment, empty string when absent
    pub comment: String,
}

impl ActivatorQso {
    /// Check whether an S2S record refers to the same contact
    ///
    /// Identity is the tuple (counterparty callsign, date, time, band, mode)
    /// compared on raw source values. The tuple is not globally unique; the
    /// caller takes the first matching S2S row in log order.
    pub fn matches(&self, s2s: &S2sQso) -> bool {
        self.callsign == s2s.callsign
            && self.date == s2s.date
            && self.time == s2s.time
            && self.band == s2s.band
            && self.mode == s2s.mode
    }
}

// =============================================================================
// SOTA Summit-to-Summit Record
// =============================================================================

/// One contact from a SOTA S2S log export
///
/// Same layout as the activator export plus the counterparty's summit code
/// and two point tallies. Points are carried as raw text and never
/// interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct S2sQso {
    /// Operator (own) callsign
    pub my_callsign: String,

    /// Own summit code
    pub summit_code: String,

    /// Contact date as exported (D/M/YYYY)
    pub date: String,

    /// Contact time as exported (H:MM)
    pub time: String,

    /// Frequency label as exported
    pub band: String,

    /// Mode as exported
    pub mode: String,

    /// Counterparty callsign
    pub callsign: String,

    /// Counterparty's summit code
    pub other_summit: String,

    /// Free-text comment, empty string when absent
    pub comment: String,

    /// Chaser point tally, raw text
    pub chaser_points: String,

    /// Activator point tally, raw text
    pub activator_points: String,
}

// =============================================================================
// Expanded Contact
// =============================================================================

/// One contact paired with exactly one destination park
///
/// Produced 1:N from an [`ActivatorQso`]: one row per own park when no
/// remote park applies, otherwise one row per (own park, remote park) pair.
/// Fields are still raw source values at this stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedQso {
    /// Operator (own) callsign
    pub my_callsign: String,

    /// Contact date, raw
    pub date: String,

    /// Contact time, raw
    pub time: String,

    /// Frequency label, raw
    pub band: String,

    /// Mode, raw
    pub mode: String,

    /// Counterparty callsign
    pub callsign: String,

    /// Free-text comment
    pub comment: String,

    /// Destination park code for this row
    pub my_park: String,

    /// Counterparty park code when the contact was summit-to-summit and
    /// the remote summit maps to a park
    pub remote_park: Option<String>,
}

impl ExpandedQso {
    /// Build an expanded row from an activator contact and a park pairing
    pub fn from_activator(
        qso: &ActivatorQso,
        my_park: String,
        remote_park: Option<String>,
    ) -> Self {
        Self {
            my_callsign: qso.my_callsign.clone(),
            date: qso.date.clone(),
            time: qso.time.clone(),
            band: qso.band.clone(),
            mode: qso.mode.clone(),
            callsign: qso.callsign.clone(),
            comment: qso.comment.clone(),
            my_park,
            remote_park,
        }
    }
}

// =============================================================================
// POTA Output Record
// =============================================================================

/// One fully normalized POTA record ready for ADIF serialization
///
/// Dates are "YYYYMMDD", times "HHMM", bands ADIF labels ("20M"). The
/// comment is dropped at this stage since the POTA submission format does
/// not carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct PotaQso {
    /// Operator callsign (OPERATOR)
    pub operator: String,

    /// Contact date, YYYYMMDD (QSO_DATE)
    pub qso_date: String,

    /// Contact time, HHMM (TIME_ON)
    pub time_on: String,

    /// ADIF band label (BAND)
    pub band: String,

    /// ADIF mode (MODE)
    pub mode: String,

    /// Counterparty callsign (CALL)
    pub call: String,

    /// Destination park code (MY_SIG_INFO)
    pub my_park: String,

    /// Counterparty park code (SIG_INFO), when present
    pub remote_park: Option<String>,
}

impl PotaQso {
    /// Look up a field value by canonical ADIF field name
    ///
    /// MY_SIG is always the park program; SIG/SIG_INFO are empty unless a
    /// remote park applies. Empty values are omitted by the serializer.
    pub fn field(&self, name: &str) -> &str {
        match name {
            adif_fields::OPERATOR => &self.operator,
            adif_fields::QSO_DATE => &self.qso_date,
            adif_fields::TIME_ON => &self.time_on,
            adif_fields::BAND => &self.band,
            adif_fields::MODE => &self.mode,
            adif_fields::CALL => &self.call,
            adif_fields::MY_SIG => constants::PARK_PROGRAM,
            adif_fields::MY_SIG_INFO => &self.my_park,
            adif_fields::SIG => {
                if self.remote_park.is_some() {
                    constants::PARK_PROGRAM
                } else {
                    ""
                }
            }
            adif_fields::SIG_INFO => self.remote_park.as_deref().unwrap_or(""),
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test data helpers
    fn create_test_activator_qso() -> ActivatorQso {
        ActivatorQso {
            my_callsign: "AJ6X".to_string(),
            summit_code: "W6/CT-226".to_string(),
            date: "19/08/2024".to_string(),
            time: "18:12".to_string(),
            band: "14MHz".to_string(),
            mode: "CW".to_string(),
            callsign: "K6EL".to_string(),
            comment: "Nice chat".to_string(),
        }
    }

    fn create_test_s2s_qso() -> S2sQso {
        S2sQso {
            my_callsign: "AJ6X".to_string(),
            summit_code: "W6/CT-226".to_string(),
            date: "19/08/2024".to_string(),
            time: "18:12".to_string(),
            band: "14MHz".to_string(),
            mode: "CW".to_string(),
            callsign: "K6EL".to_string(),
            other_summit: "W6/NC-417".to_string(),
            comment: String::new(),
            chaser_points: "4".to_string(),
            activator_points: "6".to_string(),
        }
    }

    mod matching_tests {
        use super::*;

        #[test]
        fn test_matches_on_identical_key() {
            let qso = create_test_activator_qso();
            let s2s = create_test_s2s_qso();
            assert!(qso.matches(&s2s));
        }

        #[test]
        fn test_no_match_on_different_time() {
            let qso = create_test_activator_qso();
            let mut s2s = create_test_s2s_qso();
            s2s.time = "18:13".to_string();
            assert!(!qso.matches(&s2s));
        }

        #[test]
        fn test_no_match_on_different_band() {
            let qso = create_test_activator_qso();
            let mut s2s = create_test_s2s_qso();
            s2s.band = "7MHz".to_string();
            assert!(!qso.matches(&s2s));
        }

        #[test]
        fn test_no_match_on_different_callsign() {
            let qso = create_test_activator_qso();
            let mut s2s = create_test_s2s_qso();
            s2s.callsign = "N0CALL".to_string();
            assert!(!qso.matches(&s2s));
        }

        #[test]
        fn test_match_ignores_own_summit_and_comment() {
            let qso = create_test_activator_qso();
            let mut s2s = create_test_s2s_qso();
            s2s.summit_code = "W6/SN-001".to_string();
            s2s.comment = "different note".to_string();
            assert!(qso.matches(&s2s));
        }

        #[test]
        fn test_match_compares_raw_values() {
            // "14MHz" and a normalized "20M" must not be treated as equal
            let qso = create_test_activator_qso();
            let mut s2s = create_test_s2s_qso();
            s2s.band = "20M".to_string();
            assert!(!qso.matches(&s2s));
        }
    }

    mod expansion_tests {
        use super::*;

        #[test]
        fn test_from_activator_copies_contact_fields() {
            let qso = create_test_activator_qso();
            let expanded =
                ExpandedQso::from_activator(&qso, "K-1234".to_string(), None);

            assert_eq!(expanded.my_callsign, "AJ6X");
            assert_eq!(expanded.date, "19/08/2024");
            assert_eq!(expanded.band, "14MHz");
            assert_eq!(expanded.callsign, "K6EL");
            assert_eq!(expanded.comment, "Nice chat");
            assert_eq!(expanded.my_park, "K-1234");
            assert_eq!(expanded.remote_park, None);
        }

        #[test]
        fn test_from_activator_with_remote_park() {
            let qso = create_test_activator_qso();
            let expanded = ExpandedQso::from_activator(
                &qso,
                "K-1234".to_string(),
                Some("K-9999".to_string()),
            );
            assert_eq!(expanded.remote_park.as_deref(), Some("K-9999"));
        }
    }

    mod pota_field_tests {
        use super::*;

        fn create_test_pota_qso(remote_park: Option<&str>) -> PotaQso {
            PotaQso {
                operator: "AJ6X".to_string(),
                qso_date: "20240819".to_string(),
                time_on: "1812".to_string(),
                band: "20M".to_string(),
                mode: "CW".to_string(),
                call: "K6EL".to_string(),
                my_park: "K-1234".to_string(),
                remote_park: remote_park.map(str::to_string),
            }
        }

        #[test]
        fn test_field_lookup_basic_fields() {
            let qso = create_test_pota_qso(None);
            assert_eq!(qso.field("OPERATOR"), "AJ6X");
            assert_eq!(qso.field("QSO_DATE"), "20240819");
            assert_eq!(qso.field("TIME_ON"), "1812");
            assert_eq!(qso.field("BAND"), "20M");
            assert_eq!(qso.field("MODE"), "CW");
            assert_eq!(qso.field("CALL"), "K6EL");
        }

        #[test]
        fn test_my_sig_always_set() {
            let qso = create_test_pota_qso(None);
            assert_eq!(qso.field("MY_SIG"), "POTA");
            assert_eq!(qso.field("MY_SIG_INFO"), "K-1234");
        }

        #[test]
        fn test_sig_empty_without_remote_park() {
            let qso = create_test_pota_qso(None);
            assert_eq!(qso.field("SIG"), "");
            assert_eq!(qso.field("SIG_INFO"), "");
        }

        #[test]
        fn test_sig_set_with_remote_park() {
            let qso = create_test_pota_qso(Some("K-9999"));
            assert_eq!(qso.field("SIG"), "POTA");
            assert_eq!(qso.field("SIG_INFO"), "K-9999");
        }

        #[test]
        fn test_unknown_field_is_empty() {
            let qso = create_test_pota_qso(None);
            assert_eq!(qso.field("RST_SENT"), "");
        }
    }
}
