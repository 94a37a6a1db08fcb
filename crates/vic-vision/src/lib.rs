//! Local style inference from photos.
//!
//! Samples dominant colors, labels them with coarse color tags, maps tags to
//! style adjectives and aggregates everything into a [`StyleProfile`].
//! Nothing leaves the machine.

pub mod decode;
pub mod error;
pub mod palette;
pub mod style;
pub mod summary;

pub use decode::{decode_data_url, load_image};
pub use error::{Result, VisionError};
pub use palette::{analyze_color_palette, extract_colors, ColorTag, Rgb};
pub use style::infer_style;
pub use summary::{summarize, top_by_frequency, ImageAnalysis};

use image::DynamicImage;
use tracing::{debug, warn};
use vic_core::{RandomSource, StyleProfile};

/// Tags and styles for a single image
pub fn analyze_image(image: &DynamicImage) -> ImageAnalysis {
    let colors = extract_colors(image);
    let tags = analyze_color_palette(&colors);
    let styles = infer_style(&tags);
    debug!(colors = colors.len(), ?tags, ?styles, "analyzed image");
    ImageAnalysis { tags, styles }
}

/// Run the full local pipeline over decoded images
pub fn analyze_images(images: &[DynamicImage], rng: &dyn RandomSource) -> StyleProfile {
    let analyses: Vec<ImageAnalysis> = images.iter().map(analyze_image).collect();
    summarize(&analyses, rng)
}

/// Run the local pipeline over data URLs.
///
/// Images that fail to decode are logged and skipped.
pub fn analyze_data_urls(urls: &[String], rng: &dyn RandomSource) -> StyleProfile {
    let analyses: Vec<ImageAnalysis> = urls
        .iter()
        .enumerate()
        .filter_map(|(index, url)| match decode_data_url(url) {
            Ok(image) => Some(analyze_image(&image)),
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable image");
                None
            }
        })
        .collect();
    summarize(&analyses, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use vic_core::FixedRandom;

    fn all_blue() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(32, 32, Rgba([0, 0, 255, 255])))
    }

    #[test]
    fn test_three_blue_images_lean_cool() {
        let images = vec![all_blue(), all_blue(), all_blue()];
        let profile = analyze_images(&images, &FixedRandom(0));

        assert!(profile.top_tags.contains(&"cool-tones".to_string()));
        assert_eq!(profile.top_style(), Some("crisp"));
    }

    #[test]
    fn test_data_urls_skip_broken_entries() {
        let mut bytes = Vec::new();
        all_blue().write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        let good = format!("data:image/png;base64,{}", STANDARD.encode(&bytes));
        let urls = vec!["data:image/png;base64,????".to_string(), good];

        let profile = analyze_data_urls(&urls, &FixedRandom(1));
        assert_eq!(profile.top_tags, vec!["cool-tones"]);
        assert_eq!(profile.summary, "You lean towards cool-tones color palettes");
    }

    #[test]
    fn test_blank_image_yields_empty_profile() {
        let white = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255])));
        let profile = analyze_images(&[white], &FixedRandom(0));
        assert!(profile.top_tags.is_empty());
        assert!(profile.top_styles.is_empty());
    }
}
