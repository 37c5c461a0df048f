use crate::constants::{
    HIGH_EFFORT_QUALITY_THRESHOLD, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, OXIPNG_PRESET,
    ZOPFLI_ITERATIONS, ZOPFLI_QUALITY_THRESHOLD,
};
use crate::error::{CompressionError, Result};
use crate::quality::Quality;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use oxipng::{Deflaters, Options};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tracing::debug;

/// Core per-file workflow: load -> re-encode -> measure.
///
/// The output keeps the input's file name, so the encoder is picked from
/// the extension. JPEG outputs use `quality` directly.
///
/// # Arguments
/// * `input_path` - Path to the original image
/// * `output_path` - Where the re-encoded copy is written
/// * `quality` - Validated JPEG quality
///
/// # Returns
/// * `Ok((original_size, compressed_size))` - Both sizes in bytes, as found on disk
/// * `Err(CompressionError)` - If decoding, encoding or writing fails
pub fn process_image_pipeline(
    input_path: &Path,
    output_path: &Path,
    quality: Quality,
) -> Result<(u64, u64)> {
    let format = output_format_for(output_path)?;
    let (img, original_size) = load_image_with_metadata(input_path)?;
    let compressed_size = reencode_image(&img, output_path, format, quality)?;

    debug!(
        "{:?}: {} -> {} bytes ({:?})",
        input_path.file_name().unwrap_or_default(),
        original_size,
        compressed_size,
        format
    );
    Ok((original_size, compressed_size))
}

/// Loads an image and returns it along with its size on disk.
///
/// The decoder is chosen from the file contents, falling back to the
/// extension, so a mislabelled file still decodes.
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = fs::metadata(input_path)?.len();

    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| CompressionError::Decode {
            path: input_path.to_path_buf(),
            source,
        })?;

    Ok((img, file_size))
}

/// Maps an output path to the encoder used for it.
pub fn output_format_for(path: &Path) -> Result<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| CompressionError::UnsupportedFormat(format!("{:?}", path)))?;

    match ext.as_str() {
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "png" => Ok(ImageFormat::Png),
        "bmp" => Ok(ImageFormat::Bmp),
        "tiff" => Ok(ImageFormat::Tiff),
        "gif" => Ok(ImageFormat::Gif),
        _ => Err(CompressionError::UnsupportedFormat(ext)),
    }
}

/// Writes `img` to `output` and returns the size of the written file.
pub fn reencode_image(
    img: &DynamicImage,
    output: &Path,
    format: ImageFormat,
    quality: Quality,
) -> Result<u64> {
    let img = encodable_for(img, format);

    match format {
        ImageFormat::Jpeg => {
            let mut writer = BufWriter::new(File::create(output)?);
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality.value());
            img.write_with_encoder(encoder)?;
            writer.flush()?;
        }
        ImageFormat::Png => {
            let mut png_data = Vec::new();
            img.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;
            let optimized = oxipng::optimize_from_memory(&png_data, &png_options(quality))
                .map_err(|e| CompressionError::PngOptimization(e.to_string()))?;
            fs::write(output, optimized)?;
        }
        ImageFormat::Bmp | ImageFormat::Tiff | ImageFormat::Gif => {
            img.save_with_format(output, format)?;
        }
        _ => {
            return Err(CompressionError::UnsupportedFormat(format!("{:?}", format)));
        }
    }

    Ok(fs::metadata(output)?.len())
}

/// oxipng settings for a given quality; higher quality buys more deflate effort.
pub fn png_options(quality: Quality) -> Options {
    let mut options = Options::from_preset(OXIPNG_PRESET);
    options.force = true;

    options.deflate = if quality.value() >= ZOPFLI_QUALITY_THRESHOLD {
        Deflaters::Zopfli {
            iterations: ZOPFLI_ITERATIONS,
        }
    } else if quality.value() >= HIGH_EFFORT_QUALITY_THRESHOLD {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };
    options
}

// Each encoder accepts a limited set of pixel layouts.
fn encodable_for(img: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    let color = img.color();
    let supported = match format {
        ImageFormat::Jpeg => matches!(color, ColorType::L8 | ColorType::Rgb8),
        ImageFormat::Png => !matches!(color, ColorType::Rgb32F | ColorType::Rgba32F),
        ImageFormat::Bmp => matches!(
            color,
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
        ),
        ImageFormat::Gif => matches!(color, ColorType::Rgb8 | ColorType::Rgba8),
        ImageFormat::Tiff => !matches!(color, ColorType::La8 | ColorType::La16),
        _ => true,
    };

    if supported {
        return Cow::Borrowed(img);
    }
    match format {
        ImageFormat::Jpeg => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
        ImageFormat::Png => Cow::Owned(DynamicImage::ImageRgba16(img.to_rgba16())),
        ImageFormat::Tiff if color == ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageRgba16(img.to_rgba16()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
    }
}
