use std::path::Path;

use image::{ImageError, RgbImage};

/// Enregistre un buffer RGB8 (3 octets par pixel, row-major) au format
/// PNG. Le format est détecté depuis l'extension par image 0.25.
pub fn save_rgb_png(
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    output: &Path,
) -> Result<(), ImageError> {
    let img = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        ImageError::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Impossible de créer l'image depuis le buffer",
        ))
    })?;
    img.save(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir();
        let path = dir.join("frxp_test_save.png");
        // 2x2 : un pixel rouge, le reste noir.
        let buffer = vec![255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        save_rgb_png(buffer, 2, 2, &path).unwrap();
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_rejects_wrong_buffer_size() {
        let path = std::env::temp_dir().join("frxp_test_bad.png");
        assert!(save_rgb_png(vec![0u8; 5], 2, 2, &path).is_err());
    }
}
