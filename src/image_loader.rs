use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read image directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no files found in image directory {}", path.display())]
    EmptyDir { path: PathBuf },
    #[error("none of the files in {} could be decoded as an image", path.display())]
    NoImages { path: PathBuf },
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Helper: Load and Sort File Paths ---
pub fn load_sorted_file_paths(dir_path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir_err = |source| LoadError::ReadDir { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-file entry");
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(LoadError::EmptyDir { path: dir_path.to_path_buf() })
    } else {
        Ok(paths)
    }
}

/// Decodes every file in `dir_path` and scales it to a `tile_size` square.
///
/// Files that fail to decode are logged and skipped. An error is returned only
/// when the directory cannot be listed or nothing in it decodes.
pub fn load_tile_images(dir_path: &Path, tile_size: u32) -> Result<Vec<RgbaImage>, LoadError> {
    let paths = load_sorted_file_paths(dir_path)?;

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        match load_image_with_exif_rotation(&path) {
            Ok(image) => images.push(scale_to_tile(&image, tile_size)),
            Err(e) => warn!(error = %e, "skipping file"),
        }
    }

    if images.is_empty() {
        return Err(LoadError::NoImages { path: dir_path.to_path_buf() });
    }
    info!(count = images.len(), dir = %dir_path.display(), "decoded images");
    Ok(images)
}

pub fn scale_to_tile(image: &RgbaImage, tile_size: u32) -> RgbaImage {
    if image.dimensions() == (tile_size, tile_size) {
        return image.clone();
    }
    image::imageops::resize(image, tile_size, tile_size, FilterType::CatmullRom)
}

// --- Load Image, Apply EXIF Rotation ---
pub fn load_image_with_exif_rotation(image_path: &Path) -> Result<RgbaImage, LoadError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| LoadError::Read { path: image_path.to_path_buf(), source })?;

    let image = image::load_from_memory(&file_bytes)
        .map_err(|source| LoadError::Decode { path: image_path.to_path_buf(), source })?;

    // Only JPEG carries EXIF reliably
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    Ok(apply_orientation(image, orientation).into_rgba8())
}

fn read_exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            // Non-critical, the image is shown unrotated
            debug!(path = %image_path.display(), error = %e, "no usable EXIF data");
            1
        }
    }
}

// 1 = Top-left (Normal)
// 3 = Bottom-right (180 deg)
// 6 = Top-right (90 deg clockwise)
// 8 = Bottom-left (90 deg counter-clockwise)
// Flipped orientations are left as is.
fn apply_orientation(image: DynamicImage, orientation: u16) -> DynamicImage {
    match orientation {
        3 => image.rotate180(),
        6 => image.rotate90(),
        8 => image.rotate270(),
        _ => image,
    }
}
