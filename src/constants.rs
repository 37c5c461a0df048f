use std::num::NonZeroU8;

pub const MIN_QUALITY: u8 = 10;
pub const MAX_QUALITY: u8 = 90;

/// Extensions (lowercase) of the files picked up from the source folder.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

pub const DESTINATION_SUFFIX: &str = "_Compressed";
pub const DESTINATION_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const REPORT_FILE_NAME: &str = "compression_details.csv";
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

pub const REPORT_HEADER: [&str; 6] = [
    "#",
    "Image Name",
    "Original Size",
    "Compressed Size",
    "Difference",
    "Difference %",
];

// PNG outputs are re-optimized losslessly; effort scales with quality.
pub const OXIPNG_PRESET: u8 = 4;
pub const ZOPFLI_QUALITY_THRESHOLD: u8 = 90;
pub const HIGH_EFFORT_QUALITY_THRESHOLD: u8 = 70;
pub const ZOPFLI_ITERATIONS: NonZeroU8 = match NonZeroU8::new(15) {
    Some(n) => n,
    None => panic!("zopfli iterations must be non-zero"),
};
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const INFO_PREFIX: &str = "📋";
