#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a small noisy image; the format follows the extension.
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x.wrapping_mul(31) ^ y) as u8,
            (y.wrapping_mul(17) + x) as u8,
            (x * y % 251) as u8,
        ])
    })
    .save(path)
    .unwrap();
}

/// A `photos` folder with `a.jpg`, `b.png` and `readme.txt`.
pub fn create_mixed_source(temp_dir: &Path) -> PathBuf {
    let source = temp_dir.join("photos");
    fs::create_dir(&source).unwrap();
    write_test_image(&source.join("a.jpg"), 120, 90);
    write_test_image(&source.join("b.png"), 60, 45);
    fs::write(source.join("readme.txt"), b"not an image").unwrap();
    source
}

pub fn create_empty_source(temp_dir: &Path) -> PathBuf {
    let source = temp_dir.join("empty");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("notes.txt"), b"nothing to see").unwrap();
    source
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Sibling folders created by a run, i.e. everything ending in `_Compressed`.
pub fn compressed_dirs(parent: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<_> = fs::read_dir(parent)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.is_dir() && path.to_string_lossy().ends_with("_Compressed")
        })
        .collect();
    dirs.sort();
    dirs
}
