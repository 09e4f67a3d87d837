//! Tests for the ADIF output module

pub mod writer_tests;

use crate::app::models::PotaQso;

/// Create a normalized record for a given operator, park and date
pub fn create_test_pota_qso(operator: &str, park: &str, date: &str) -> PotaQso {
    PotaQso {
        operator: operator.to_string(),
        qso_date: date.to_string(),
        time_on: "1812".to_string(),
        band: "20M".to_string(),
        mode: "CW".to_string(),
        call: "K6EL".to_string(),
        my_park: park.to_string(),
        remote_park: None,
    }
}
