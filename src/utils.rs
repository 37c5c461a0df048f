//! Size arithmetic and formatting shared by the report and the console output.

use crate::constants::BYTES_PER_MIB;

/// Round to two decimal places, half away from zero.
///
/// Negative zero is folded into `0.0` so it never renders as `-0.00`.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Convert a byte count to MiB, rounded to two decimals.
pub fn bytes_to_mib(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_MIB)
}

/// Size difference and percentage of the original it represents.
///
/// # Arguments
/// * `original_mb` - Original size in MiB (already rounded)
/// * `compressed_mb` - Compressed size in MiB (already rounded)
///
/// # Returns
/// * `(delta_mb, delta_pct)` - `delta_pct` is `None` when `original_mb` is zero
pub fn size_delta(original_mb: f64, compressed_mb: f64) -> (f64, Option<f64>) {
    let delta_mb = round2(original_mb - compressed_mb);
    let delta_pct = if original_mb == 0.0 {
        None
    } else {
        Some(round2(delta_mb * 100.0 / original_mb))
    };
    (delta_mb, delta_pct)
}

pub fn format_mb(size_mb: f64) -> String {
    format!("{:.2} MB", size_mb)
}

pub fn format_pct(pct: Option<f64>) -> String {
    match pct {
        Some(pct) => format!("{:.2}", pct),
        None => "n/a".to_string(),
    }
}

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 KB")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
