use anyhow::Context;
use clap::Parser;
use folder_squeeze::cli::Args;
use folder_squeeze::constants::{INFO_PREFIX, SUCCESS_PREFIX, WARNING_PREFIX};
use folder_squeeze::utils::{format_mb, format_pct};
use folder_squeeze::{batch_compress_images, logger, BatchOutcome, BatchRequest, CompressionSummary};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    let request = BatchRequest::new(args.source, args.quality).with_order(args.order);
    let outcome = batch_compress_images(&request).context("Compression run failed")?;

    match outcome {
        BatchOutcome::NoImagesFound { source } => {
            println!("{}  No image files found in {:?}", WARNING_PREFIX, source);
        }
        BatchOutcome::Completed(summary) => print_summary(&summary),
    }

    Ok(())
}

fn print_summary(summary: &CompressionSummary) {
    let totals = summary.report.totals();

    if !logger::is_quiet() {
        println!("\n{} Compression Summary:", INFO_PREFIX);
        for record in summary.report.records() {
            println!(
                "  {:>3}. {:<32} {:>10} -> {:>10}  ({} / {}%)",
                record.index,
                record.name,
                format_mb(record.original_size_mb),
                format_mb(record.compressed_size_mb),
                format_mb(record.delta_mb),
                format_pct(record.delta_pct)
            );
        }
        println!(
            "  Total: {} -> {} (saved {} / {}%)",
            format_mb(totals.original_size_mb),
            format_mb(totals.compressed_size_mb),
            format_mb(totals.delta_mb),
            format_pct(totals.delta_pct)
        );
        println!("  📁 Output: {:?}", summary.destination);
        println!("  📄 Report: {:?}", summary.report_path);
    }

    println!(
        "{} Files have been compressed ({} images)",
        SUCCESS_PREFIX,
        summary.report.len()
    );
}
