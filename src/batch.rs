use crate::constants::{DESTINATION_SUFFIX, DESTINATION_TIMESTAMP_FORMAT, PROGRESS_BAR_TEMPLATE};
use crate::error::{CompressionError, Result};
use crate::logger;
use crate::processing::process_image_pipeline;
use crate::quality::Quality;
use crate::report::CompressionReport;
use crate::report_writer::save_report;
use crate::scanner::{collect_image_files, ScanOrder};
use crate::utils::format_file_size;
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Parameters of one run, as collected from the user.
///
/// `source` and `quality` stay raw so that a missing folder or percentage
/// is reported by the run itself.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub source: Option<PathBuf>,
    pub quality: Option<String>,
    pub order: ScanOrder,
    pub timestamp: DateTime<Local>,
}

impl BatchRequest {
    pub fn new(source: Option<PathBuf>, quality: Option<String>) -> Self {
        Self {
            source,
            quality,
            order: ScanOrder::default(),
            timestamp: Local::now(),
        }
    }

    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CompressionSummary {
    pub destination: PathBuf,
    pub report_path: PathBuf,
    pub report: CompressionReport,
}

#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// The folder holds no recognized images; nothing was written.
    NoImagesFound { source: PathBuf },
    Completed(CompressionSummary),
}

/// Runs one compression pass over a folder.
///
/// Input is validated before the filesystem is touched. The destination
/// folder is created only once at least one image is found, and it must not
/// exist yet. A file that fails mid-run aborts the run; outputs written so
/// far are left in place.
pub fn batch_compress_images(request: &BatchRequest) -> Result<BatchOutcome> {
    let quality = Quality::parse(request.quality.as_deref())?;
    let source = request
        .source
        .as_deref()
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(CompressionError::SourceNotSelected)?;

    info!("🚀 Starting batch compression at quality {}", quality);
    info!("📁 Input: {:?}", source);

    let image_files = collect_image_files(source, request.order)?;
    let total_files = image_files.len();
    if total_files == 0 {
        return Ok(BatchOutcome::NoImagesFound {
            source: source.to_path_buf(),
        });
    }
    info!("📊 Found {} image files to process", total_files);

    let source = source.canonicalize()?;
    let destination = destination_path(&source, &request.timestamp)?;
    create_destination(&destination)?;
    info!("📁 Output: {:?}", destination);

    let start_time = Instant::now();
    let progress = progress_bar(total_files as u64);
    let mut report = CompressionReport::new(source, destination.clone(), request.timestamp);

    for input_path in &image_files {
        let file_name = input_path
            .file_name()
            .ok_or_else(|| CompressionError::UnsupportedFormat(format!("{:?}", input_path)))?;
        progress.set_message(file_name.to_string_lossy().into_owned());

        let output_path = destination.join(file_name);
        let (original_size, compressed_size) =
            match process_image_pipeline(input_path, &output_path, quality) {
                Ok(sizes) => sizes,
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            };

        let record = report.push(
            file_name.to_string_lossy(),
            original_size,
            compressed_size,
        );
        debug!(
            "#{} {}: {} -> {}",
            record.index,
            record.name,
            format_file_size(original_size),
            format_file_size(compressed_size)
        );
        progress.inc(1);
    }
    progress.finish_and_clear();

    let report_path = save_report(&report, &destination)?;
    info!(
        "✅ Compressed {} images in {:?}",
        report.len(),
        start_time.elapsed()
    );

    Ok(BatchOutcome::Completed(CompressionSummary {
        destination,
        report_path,
        report,
    }))
}

/// `<parent>/<source-folder-name>_<timestamp>_Compressed`
pub fn destination_path(source: &Path, timestamp: &DateTime<Local>) -> Result<PathBuf> {
    let folder_name = source
        .file_name()
        .ok_or_else(|| CompressionError::InvalidSourceName(source.to_path_buf()))?;
    let parent = source
        .parent()
        .ok_or_else(|| CompressionError::InvalidSourceName(source.to_path_buf()))?;

    let destination_name = format!(
        "{}_{}{}",
        folder_name.to_string_lossy(),
        timestamp.format(DESTINATION_TIMESTAMP_FORMAT),
        DESTINATION_SUFFIX
    );
    Ok(parent.join(destination_name))
}

fn create_destination(destination: &Path) -> Result<()> {
    fs::create_dir(destination).map_err(|source| match source.kind() {
        ErrorKind::AlreadyExists => CompressionError::DestinationExists(destination.to_path_buf()),
        _ => CompressionError::DirectoryCreationFailed {
            path: destination.to_path_buf(),
            source,
        },
    })
}

fn progress_bar(len: u64) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template(PROGRESS_BAR_TEMPLATE)
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(len).with_style(style)
}
