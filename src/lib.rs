pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod quality;
pub mod report;
pub mod report_writer;
pub mod scanner;
pub mod utils;

pub use batch::{
    batch_compress_images, destination_path, BatchOutcome, BatchRequest, CompressionSummary,
};
pub use error::{CompressionError, Result};
pub use processing::{
    load_image_with_metadata, output_format_for, process_image_pipeline, reencode_image,
};
pub use quality::Quality;
pub use report::{CompressionReport, ImageRecord, ReportTotals};
pub use report_writer::{save_report, write_report};
pub use scanner::{collect_image_files, is_image_file, ScanOrder};
