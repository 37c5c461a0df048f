use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Compression percentage not entered")]
    QualityMissing,

    #[error("Compression percentage is not a whole number: {0:?}")]
    QualityNotANumber(String),

    #[error(
        "Invalid compression percentage: {0}. Must be between {min} and {max}",
        min = MIN_QUALITY,
        max = MAX_QUALITY
    )]
    QualityOutOfRange(i64),

    #[error("No source folder selected")]
    SourceNotSelected,

    #[error("Source is not a directory: {0}")]
    SourceNotDirectory(PathBuf),

    #[error("Cannot derive a destination folder name from: {0}")]
    InvalidSourceName(PathBuf),

    #[error("Destination folder already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Failed to create output directory {path:?}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Report error: {0}")]
    Report(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
