use crate::constants::{REPORT_FILE_NAME, REPORT_HEADER, REPORT_TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::report::CompressionReport;
use crate::utils::{format_mb, format_pct};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Renders the report as CSV rows:
/// source, destination and timestamp blocks, the header, one row per
/// image and the totals row. Rows differ in width.
pub fn write_report<W: Write>(report: &CompressionReport, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().flexible(true).from_writer(writer);

    let source = report.source.display().to_string();
    let destination = report.destination.display().to_string();
    let timestamp = report.timestamp.format(REPORT_TIMESTAMP_FORMAT).to_string();
    csv_writer.write_record(["Source Path", source.as_str()])?;
    csv_writer.write_record(["Destination Path", destination.as_str()])?;
    csv_writer.write_record(["Timestamp", timestamp.as_str()])?;

    csv_writer.write_record(REPORT_HEADER)?;
    for record in report.records() {
        csv_writer.write_record([
            record.index.to_string(),
            record.name.clone(),
            format_mb(record.original_size_mb),
            format_mb(record.compressed_size_mb),
            format_mb(record.delta_mb),
            format_pct(record.delta_pct),
        ])?;
    }

    let totals = report.totals();
    csv_writer.write_record([
        String::new(),
        "Total".to_string(),
        format_mb(totals.original_size_mb),
        format_mb(totals.compressed_size_mb),
        format_mb(totals.delta_mb),
        format_pct(totals.delta_pct),
    ])?;

    csv_writer.flush()?;
    Ok(())
}

/// Writes the report into `destination_dir` and returns the file's path.
pub fn save_report(report: &CompressionReport, destination_dir: &Path) -> Result<PathBuf> {
    let report_path = destination_dir.join(REPORT_FILE_NAME);
    write_report(report, File::create(&report_path)?)?;
    Ok(report_path)
}
