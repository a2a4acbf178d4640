//! Plain-text export of identification results.
//!
//! The report embeds the verbatim raw reply under a small structured header.
//! The raw text is the audit trail, so it is never reformatted.

use chrono::{DateTime, Local, NaiveDate};

use crate::analysis::IdentificationRecord;

/// Render the downloadable identification report.
pub fn identification_report(
    record: &IdentificationRecord,
    raw_response: &str,
    generated_at: DateTime<Local>,
) -> String {
    format!(
        "\nPLANT IDENTIFICATION REPORT\n\
         ===========================\n\
         Generated on: {}\n\n\
         DETECTED PLANT: {}\n\
         SCIENTIFIC NAME: {}\n\n\
         {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        record.common_name,
        record.scientific_name,
        raw_response,
    )
}

/// File name for a saved report: `PlantID_<name>_<date>.txt`, whitespace in
/// the plant name collapsed to underscores.
pub fn report_file_name(record: &IdentificationRecord, date: NaiveDate) -> String {
    let name = record
        .common_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("PlantID_{}_{}.txt", name, date.format("%Y-%m-%d"))
}
