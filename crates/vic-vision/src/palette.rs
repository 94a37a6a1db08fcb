//! Dominant-color sampling and coarse color tagging.

use std::fmt;

use image::DynamicImage;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Every Nth pixel is sampled
pub const SAMPLE_STRIDE: usize = 10;
/// Width of a quantization bin per channel
pub const BIN_SIZE: u8 = 30;
/// Number of buckets kept after ranking
pub const TOP_COLORS: usize = 5;

// Mean brightness bounds, expressed on the channel sum to stay in integers.
const MIN_SUM: u16 = 30 * 3;
const MAX_SUM: u16 = 225 * 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn sum(&self) -> i32 {
        self.r as i32 + self.g as i32 + self.b as i32
    }

    fn saturation(&self) -> i32 {
        let max = self.r.max(self.g).max(self.b) as i32;
        let min = self.r.min(self.g).min(self.b) as i32;
        max - min
    }
}

/// Coarse label for a dominant color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTag {
    DarkNeutrals,
    LightNeutrals,
    NeutralTones,
    WarmTones,
    CoolTones,
    Monochrome,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DarkNeutrals => "dark-neutrals",
            Self::LightNeutrals => "light-neutrals",
            Self::NeutralTones => "neutral-tones",
            Self::WarmTones => "warm-tones",
            Self::CoolTones => "cool-tones",
            Self::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up to five representative colors, most frequent first.
///
/// Near-black and near-white samples are ignored, as are fully transparent
/// ones. Equal counts keep the order in which the buckets were first seen.
pub fn extract_colors(image: &DynamicImage) -> Vec<Rgb> {
    let rgba = image.to_rgba8();
    let mut bins: IndexMap<(u8, u8, u8), u32> = IndexMap::new();

    for pixel in rgba.pixels().step_by(SAMPLE_STRIDE) {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        let sum = r as u16 + g as u16 + b as u16;
        if sum < MIN_SUM || sum > MAX_SUM {
            continue;
        }
        *bins.entry((r / BIN_SIZE, g / BIN_SIZE, b / BIN_SIZE)).or_insert(0) += 1;
    }

    let mut ranked: Vec<((u8, u8, u8), u32)> = bins.into_iter().collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1));

    ranked
        .into_iter()
        .take(TOP_COLORS)
        .map(|((r, g, b), _)| Rgb::new(representative(r), representative(g), representative(b)))
        .collect()
}

// Center of a bin; the top bin (8) lands exactly on 255.
fn representative(bin: u8) -> u8 {
    bin * BIN_SIZE + BIN_SIZE / 2
}

/// Tag each color by brightness, saturation and hue dominance.
/// Duplicates are dropped, first occurrence wins.
pub fn analyze_color_palette(colors: &[Rgb]) -> Vec<ColorTag> {
    let mut tags = Vec::new();
    let mut push = |tag: ColorTag| {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    };

    for color in colors {
        let sum = color.sum();
        let (r, g, b) = (color.r as i32, color.g as i32, color.b as i32);

        if color.saturation() < 30 {
            if sum < 80 * 3 {
                push(ColorTag::DarkNeutrals);
            } else if sum > 180 * 3 {
                push(ColorTag::LightNeutrals);
            } else {
                push(ColorTag::NeutralTones);
            }
        }

        if r > g && r > b {
            push(ColorTag::WarmTones);
        }
        if b > r && b > g {
            push(ColorTag::CoolTones);
        }

        if (r - g).abs() < 20 && (g - b).abs() < 20 {
            push(ColorTag::Monochrome);
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([rgb[0], rgb[1], rgb[2], 255])))
    }

    #[test]
    fn test_solid_blue_is_cool() {
        let colors = extract_colors(&solid(20, 20, [0, 0, 255]));
        assert_eq!(colors, vec![Rgb::new(15, 15, 255)]);
        assert_eq!(analyze_color_palette(&colors), vec![ColorTag::CoolTones]);
    }

    #[test]
    fn test_extremes_are_discarded() {
        assert!(extract_colors(&solid(10, 10, [255, 255, 255])).is_empty());
        assert!(extract_colors(&solid(10, 10, [5, 5, 5])).is_empty());
        assert!(analyze_color_palette(&[]).is_empty());
    }

    #[test]
    fn test_transparent_pixels_are_skipped() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([120, 60, 30, 0])));
        assert!(extract_colors(&img).is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        // Sampled pixels are 0 and 10; one of each color.
        let mut img = RgbaImage::from_pixel(20, 1, Rgba([0, 0, 0, 255]));
        img.put_pixel(0, 0, Rgba([200, 40, 40, 255]));
        img.put_pixel(10, 0, Rgba([40, 40, 200, 255]));
        let colors = extract_colors(&DynamicImage::ImageRgba8(img));
        assert_eq!(colors, vec![Rgb::new(195, 45, 45), Rgb::new(45, 45, 195)]);
    }

    #[test]
    fn test_keeps_at_most_five_buckets_by_count() {
        // 60 pixels, 6 sampled; the first color is sampled twice.
        let palette = [
            [200, 40, 40],
            [200, 40, 40],
            [40, 200, 40],
            [40, 40, 200],
            [100, 100, 100],
            [150, 90, 60],
        ];
        let mut img = RgbaImage::from_pixel(60, 1, Rgba([0, 0, 0, 255]));
        for (i, rgb) in palette.iter().enumerate() {
            img.put_pixel(i as u32 * 10, 0, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        }
        let colors = extract_colors(&DynamicImage::ImageRgba8(img));
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], Rgb::new(195, 45, 45));
    }

    #[test]
    fn test_any_gray_is_monochrome_and_one_neutral() {
        for v in 30u8..=225 {
            let colors = extract_colors(&solid(10, 10, [v, v, v]));
            let tags = analyze_color_palette(&colors);

            assert!(tags.contains(&ColorTag::Monochrome), "gray {v}: {tags:?}");
            let neutrals = tags
                .iter()
                .filter(|t| {
                    matches!(t, ColorTag::DarkNeutrals | ColorTag::LightNeutrals | ColorTag::NeutralTones)
                })
                .count();
            assert_eq!(neutrals, 1, "gray {v}: {tags:?}");
            assert!(!tags.contains(&ColorTag::WarmTones));
            assert!(!tags.contains(&ColorTag::CoolTones));
        }
    }

    #[test]
    fn test_brightness_bands() {
        let tags = |v: u8| analyze_color_palette(&extract_colors(&solid(10, 10, [v, v, v])));
        assert_eq!(tags(50), vec![ColorTag::DarkNeutrals, ColorTag::Monochrome]);
        assert_eq!(tags(100), vec![ColorTag::NeutralTones, ColorTag::Monochrome]);
        assert_eq!(tags(200), vec![ColorTag::LightNeutrals, ColorTag::Monochrome]);
    }

    #[test]
    fn test_warm_color() {
        let tags = analyze_color_palette(&[Rgb::new(195, 105, 45)]);
        assert_eq!(tags, vec![ColorTag::WarmTones]);
    }

    #[test]
    fn test_duplicates_dropped() {
        let tags = analyze_color_palette(&[Rgb::new(15, 15, 255), Rgb::new(45, 45, 225)]);
        assert_eq!(tags, vec![ColorTag::CoolTones]);
    }

    #[test]
    fn test_tag_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&ColorTag::DarkNeutrals).unwrap(), "\"dark-neutrals\"");
        assert_eq!(ColorTag::CoolTones.to_string(), "cool-tones");
    }
}
