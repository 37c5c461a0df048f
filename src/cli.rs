use crate::scanner::ScanOrder;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "folder-squeeze",
    about = "Re-encode every image in a folder at a chosen JPEG quality",
    long_about = "folder-squeeze re-encodes the PNG, JPEG, TIFF, BMP and GIF files found directly inside a folder. \
                  Results go to a new sibling folder named <folder>_<timestamp>_Compressed, together with \
                  compression_details.csv listing per-file and total size changes.",
    version,
    after_help = "EXAMPLES:\n  \
    folder-squeeze ./photos -q 60\n  \
    folder-squeeze ./scans --quality 40 --order listing\n  \
    RUST_LOG=debug folder-squeeze ./photos -q 75"
)]
pub struct Args {
    #[arg(
        help = "Folder containing the images to compress",
        long_help = "Folder containing the images to compress. Only files directly inside it are \
                     processed; subfolders and non-image files are skipped."
    )]
    pub source: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        allow_hyphen_values = true,
        help = "Compression quality percentage (10-90)",
        long_help = "JPEG quality percentage, a whole number from 10 (smallest files) to 90 (best quality). \
                     PNG outputs spend more optimization effort at higher values."
    )]
    pub quality: Option<String>,

    #[arg(
        long,
        value_enum,
        default_value_t = ScanOrder::Name,
        help = "Order in which images are processed and numbered"
    )]
    pub order: ScanOrder,

    #[arg(
        long,
        conflicts_with = "verbose",
        help = "Only print warnings and the final result"
    )]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Log every file as it is processed")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_optional_inputs() {
        let args = Args::try_parse_from(["folder-squeeze"]).unwrap();
        assert_eq!(args.source, None);
        assert_eq!(args.quality, None);
        assert_eq!(args.order, ScanOrder::Name);
    }

    #[test]
    fn test_args_negative_quality_reaches_validator() {
        let args = Args::try_parse_from(["folder-squeeze", "./photos", "-q", "-5"]).unwrap();
        assert_eq!(args.quality.as_deref(), Some("-5"));
        assert_eq!(args.source, Some(PathBuf::from("./photos")));
    }

    #[test]
    fn test_args_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["folder-squeeze", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_listing_order() {
        let args = Args::try_parse_from(["folder-squeeze", "--order", "listing"]).unwrap();
        assert_eq!(args.order, ScanOrder::Listing);
    }
}
