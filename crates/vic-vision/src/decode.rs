use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::DynamicImage;

use crate::error::{Result, VisionError};

/// Decode a `data:<mime>;base64,<payload>` URL into an image
pub fn decode_data_url(url: &str) -> Result<DynamicImage> {
    let payload = url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or(VisionError::InvalidDataUrl)?;
    let bytes = STANDARD.decode(payload.trim())?;
    Ok(image::load_from_memory(&bytes)?)
}

/// Decode an image file from disk
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_data_url() -> String {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 200, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(&bytes))
    }

    #[test]
    fn test_decode_png_data_url() {
        let img = decode_data_url(&png_data_url()).unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.to_rgba8().get_pixel(0, 0).0, [10, 20, 200, 255]);
    }

    #[test]
    fn test_rejects_plain_url() {
        assert!(matches!(
            decode_data_url("https://example.com/a.png"),
            Err(VisionError::InvalidDataUrl)
        ));
    }

    #[test]
    fn test_rejects_bad_base64() {
        assert!(matches!(
            decode_data_url("data:image/png;base64,@@@"),
            Err(VisionError::Base64(_))
        ));
    }

    #[test]
    fn test_rejects_non_image_bytes() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode(b"not an image"));
        assert!(matches!(decode_data_url(&url), Err(VisionError::Image(_))));
    }
}
