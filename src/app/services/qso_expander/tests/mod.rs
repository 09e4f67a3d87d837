//! Tests for the QSO expansion module
//!
//! Shared fixtures build contacts and registries inline; no test here
//! touches the filesystem.


use crate::app::models::{ActivatorQso, S2sQso};

/// Create an activator contact with a given counterparty and summit
pub fn create_test_activator_qso(callsign: &str, summit_code: &str) -> ActivatorQso {
    ActivatorQso {
        my_callsign: "AJ6X".to_string(),
        summit_code: summit_code.to_string(),
        date: "19/08/2024".to_string(),
        time: "18:12".to_string(),
        band: "14MHz".to_string(),
        mode: "CW".to_string(),
        callsign: callsign.to_string(),
        comment: String::new(),
    }
}

/// Create an S2S record matching [`create_test_activator_qso`] on the
/// five identity fields
pub fn create_test_s2s_qso(callsign: &str, other_summit: &str) -> S2sQso {
    S2sQso {
        my_callsign: "AJ6X".to_string(),
        summit_code: "W6/CT-226".to_string(),
        date: "19/08/2024".to_string(),
        time: "18:12".to_string(),
        band: "14MHz".to_string(),
        mode: "CW".to_string(),
        callsign: callsign.to_string(),
        other_summit: other_summit.to_string(),
        comment: String::new(),
        chaser_points: "1".to_string(),
        activator_points: "1".to_string(),
    }
}
