//! Normalization of raw SOTA values into POTA submission format
//!
//! SOTA exports carry frequency labels ("14MHz"), day-first dates
//! ("19/8/2024") and colon times ("18:12"). POTA ADIF wants band labels
//! ("20M"), "YYYYMMDD" and "HHMM". Normalization runs after expansion so
//! that S2S matching has already seen the raw values.
//!
//! Band and mode mappings are exact-label tables. An unknown frequency
//! label is a fatal error; an unknown mode passes through unchanged.

use chrono::{NaiveDate, NaiveTime};

use crate::app::models::{ExpandedQso, PotaQso};
use crate::{Error, Result};

/// Map a SOTA frequency label to its ADIF band label
///
/// The table covers the labels the SOTA database emits. Anything else,
/// including labels for frequencies outside amateur allocations, is an
/// error rather than a silent blank in the output.
pub fn band_for_frequency(label: &str) -> Result<&'static str> {
    match label {
        "1.8MHz" => Ok("160M"),
        "3.5MHz" => Ok("80M"),
        "5MHz" => Ok("60M"),
        "7MHz" => Ok("40M"),
        "10MHz" => Ok("30M"),
        "14MHz" => Ok("20M"),
        "18MHz" => Ok("17M"),
        "21MHz" => Ok("15M"),
        "24MHz" => Ok("12M"),
        "28MHz" => Ok("10M"),
        "50MHz" => Ok("6M"),
        "144MHz" => Ok("2M"),
        "433MHz" => Ok("70CM"),
        "1240MHz" => Ok("23CM"),
        _ => Err(Error::band_mapping(label)),
    }
}

/// Rewrite SOTA mode names that ADIF spells differently
///
/// SOTA logs "DATA" for digital contacts and "DV" for digital voice.
/// Other modes (CW, SSB, FM, AM) already use the ADIF spelling.
pub fn normalize_mode(mode: &str) -> String {
    match mode {
        "DATA" => "FT8".to_string(),
        "DV" => "DIGITALVOICE".to_string(),
        other => other.to_string(),
    }
}

/// Convert a day-first SOTA date to the 8-digit ADIF form
///
/// Accepts non-zero-padded components ("3/7/2024" is July 3rd).
pub fn reformat_date(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, "%d/%m/%Y")
        .map_err(|e| Error::datetime_parsing(format!("Invalid contact date '{}'", date), e))?;
    Ok(parsed.format("%Y%m%d").to_string())
}

/// Convert a colon-separated SOTA time to the 4-digit ADIF form
///
/// Accepts non-zero-padded hours ("9:05" becomes "0905").
pub fn reformat_time(time: &str) -> Result<String> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|e| Error::datetime_parsing(format!("Invalid contact time '{}'", time), e))?;
    Ok(parsed.format("%H%M").to_string())
}

/// Normalize one expanded contact into a POTA record
pub fn normalize(qso: &ExpandedQso) -> Result<PotaQso> {
    Ok(PotaQso {
        operator: qso.my_callsign.clone(),
        qso_date: reformat_date(&qso.date)?,
        time_on: reformat_time(&qso.time)?,
        band: band_for_frequency(&qso.band)?.to_string(),
        mode: normalize_mode(&qso.mode),
        call: qso.callsign.clone(),
        my_park: qso.my_park.clone(),
        remote_park: qso.remote_park.clone(),
    })
}

/// Normalize a batch of expanded contacts, stopping at the first error
pub fn normalize_all(qsos: &[ExpandedQso]) -> Result<Vec<PotaQso>> {
    qsos.iter().map(normalize).collect()
}
