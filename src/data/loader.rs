use image::RgbImage;
use ndarray::Array3;
use std::path::{Path, PathBuf};

/// File extensions picked up when scanning a directory for images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];

/// Load an image file as an `H x W x 3` array with values in `[0, 255]`.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> crate::Result<Array3<f64>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "Image file does not exist: {}",
            path.display()
        ));
    }

    let img = image::open(path)?;
    Ok(rgb_to_array(&img.to_rgb8()))
}

/// Convert an in-memory RGB buffer to an `H x W x 3` array.
pub fn rgb_to_array(img: &RgbImage) -> Array3<f64> {
    let (width, height) = img.dimensions();
    Array3::from_shape_fn((height as usize, width as usize, 3), |(y, x, c)| {
        img.get_pixel(x as u32, y as u32)[c] as f64
    })
}

/// List image files directly inside `dir`, sorted by path.
pub fn find_images<P: AsRef<Path>>(dir: P) -> crate::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if path.is_file() && is_image {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}
