//! ADIF text serialization
//!
//! Emits the flat length-prefixed ADIF form POTA accepts: a short header
//! ending in `<EOH>`, then one `<FIELD:LEN>VALUE` line per record ending
//! in `<EOR>`. Field lengths count characters, not bytes, and empty
//! fields are omitted entirely.

use crate::app::models::PotaQso;
use crate::constants::{self, adif_fields};

/// Build the file header
///
/// A free-text identification line, the PROGRAMID and PROGRAMVERSION
/// fields, then the end-of-header marker surrounded by blank lines.
pub fn adif_header() -> String {
    format!(
        "ADIF SOTA to POTA conversion by {id}\n\
         <PROGRAMID:{id_len}>{id}\n\
         <PROGRAMVERSION:{version_len}>{version}\n\n\
         {eoh}\n\n",
        id = constants::PROGRAM_ID,
        id_len = constants::PROGRAM_ID.chars().count(),
        version = constants::PROGRAM_VERSION,
        version_len = constants::PROGRAM_VERSION.chars().count(),
        eoh = constants::ADIF_EOH_MARKER,
    )
}

/// Serialize one record as a single ADIF line
///
/// Fields are emitted in canonical order, each as `<NAME:LEN>VALUE` with
/// a trailing space. Fields whose value is empty (SIG and SIG_INFO for
/// contacts without a counterparty park) are skipped.
pub fn serialize_qso(qso: &PotaQso) -> String {
    let mut record = String::new();
    for name in adif_fields::FIELD_ORDER {
        let value = qso.field(name);
        if value.is_empty() {
            continue;
        }
        record.push_str(&format!("<{}:{}>{} ", name, value.chars().count(), value));
    }
    record.push_str(constants::ADIF_EOR_MARKER);
    record.push('\n');
    record
}

#[cfg(test)]
mod tests {
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
    fn test_header_shape() {
        let header = adif_header();

        assert!(header.starts_with("ADIF SOTA to POTA conversion by sota2pota\n"));
        assert!(header.contains("<PROGRAMID:9>sota2pota\n"));
        assert!(header.contains(&format!(
            "<PROGRAMVERSION:{}>{}\n",
            constants::PROGRAM_VERSION.len(),
            constants::PROGRAM_VERSION
        )));
        assert!(header.ends_with("\n<EOH>\n\n"));
    }

    #[test]
    fn test_serialize_without_remote_park() {
        let record = serialize_qso(&create_test_pota_qso(None));

        assert_eq!(
            record,
            "<OPERATOR:4>AJ6X <QSO_DATE:8>20240819 <TIME_ON:4>1812 \
             <BAND:3>20M <MODE:2>CW <CALL:4>K6EL <MY_SIG:4>POTA \
             <MY_SIG_INFO:6>K-1234 <EOR>\n"
        );
    }

    #[test]
    fn test_serialize_with_remote_park() {
        let record = serialize_qso(&create_test_pota_qso(Some("K-9999")));

        assert_eq!(
            record,
            "<OPERATOR:4>AJ6X <QSO_DATE:8>20240819 <TIME_ON:4>1812 \
             <BAND:3>20M <MODE:2>CW <CALL:4>K6EL <MY_SIG:4>POTA \
             <MY_SIG_INFO:6>K-1234 <SIG:4>POTA <SIG_INFO:6>K-9999 <EOR>\n"
        );
    }

    #[test]
    fn test_serialize_skips_empty_values() {
        let mut qso = create_test_pota_qso(None);
        qso.mode = String::new();

        let record = serialize_qso(&qso);

        assert!(!record.contains("MODE"));
        assert!(record.contains("<BAND:3>20M <CALL:4>K6EL"));
    }

    #[test]
    fn test_length_counts_characters() {
        let mut qso = create_test_pota_qso(None);
        qso.call = "F/ÅB1CDE".to_string();

        let record = serialize_qso(&qso);

        // 8 characters even though the byte length is 9
        assert!(record.contains("<CALL:8>F/ÅB1CDE "));
    }

    #[test]
    fn test_record_ends_with_eor() {
        let record = serialize_qso(&create_test_pota_qso(None));
        assert!(record.ends_with("<EOR>\n"));
    }
}
