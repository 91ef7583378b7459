//! Image format sniffing, dimension probing and color profiling

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bitmap formats recognized from magic numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
    Png,
    Gif,
    Jpeg,
}

impl IconFormat {
    /// Sniff the format from the leading bytes, ignoring the file name
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            ImageFormat::Png => Some(IconFormat::Png),
            ImageFormat::Gif => Some(IconFormat::Gif),
            ImageFormat::Jpeg => Some(IconFormat::Jpeg),
            _ => None,
        }
    }

    /// Whether a (lower-case) file extension names this format
    pub fn matches_extension(self, ext: &str) -> bool {
        match self {
            IconFormat::Png => ext == "png",
            IconFormat::Gif => ext == "gif",
            IconFormat::Jpeg => ext == "jpg" || ext == "jpeg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            IconFormat::Png => ImageFormat::Png,
            IconFormat::Gif => ImageFormat::Gif,
            IconFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Names as reported by the reference image readers
        match self {
            IconFormat::Png => f.write_str("png"),
            IconFormat::Gif => f.write_str("gif"),
            IconFormat::Jpeg => f.write_str("JPEG"),
        }
    }
}

/// Header information of a readable bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub format: IconFormat,
    pub width: u32,
    pub height: u32,
}

/// A bitmap that decoded completely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    pub info: ImageInfo,
    pub colors: ColorProfile,
}

/// Sniff the format and decode every pixel.
///
/// A valid header is not enough: truncated or corrupt pixel data fails
/// here too. The error string is a human-readable reason suitable for a
/// diagnostic.
pub fn probe_image(bytes: &[u8]) -> Result<DecodedImage, String> {
    if bytes.is_empty() {
        return Err("file is empty".to_string());
    }
    let format = IconFormat::sniff(bytes).ok_or_else(|| "unrecognized image format".to_string())?;
    let img = image::load_from_memory_with_format(bytes, format.image_format())
        .map_err(|e| e.to_string())?;
    Ok(DecodedImage {
        info: ImageInfo {
            format,
            width: img.width(),
            height: img.height(),
        },
        colors: ColorProfile::from_rgba(img.to_rgba8().pixels().map(|p| p.0)),
    })
}

/// Summary of the non-transparent pixels of a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorProfile {
    /// Pixels with non-zero alpha
    pub visible_pixels: u64,
    /// Largest `max(r,g,b) - min(r,g,b)` over visible pixels
    pub max_channel_spread: u8,
    /// Darkest and brightest visible level (`max(r,g,b)`)
    pub min_level: u8,
    pub max_level: u8,
    /// Every visible pixel is #FFFFFF
    pub all_white: bool,
}

impl ColorProfile {
    /// Summarize a sequence of RGBA pixels
    pub fn from_rgba<I: IntoIterator<Item = [u8; 4]>>(pixels: I) -> Self {
        let mut profile = ColorProfile {
            visible_pixels: 0,
            max_channel_spread: 0,
            min_level: u8::MAX,
            max_level: 0,
            all_white: true,
        };

        for [r, g, b, a] in pixels {
            if a == 0 {
                continue;
            }
            let hi = r.max(g).max(b);
            let lo = r.min(g).min(b);
            profile.visible_pixels += 1;
            profile.max_channel_spread = profile.max_channel_spread.max(hi - lo);
            profile.min_level = profile.min_level.min(hi);
            profile.max_level = profile.max_level.max(hi);
            if lo != u8::MAX {
                profile.all_white = false;
            }
        }

        if profile.visible_pixels == 0 {
            profile.min_level = 0;
        }
        profile
    }

    /// All visible pixels are gray (within `channel_tolerance`) and share one
    /// level (within `level_tolerance`); alpha may vary freely.
    pub fn is_single_gray(&self, channel_tolerance: u8, level_tolerance: u8) -> bool {
        self.visible_pixels == 0
            || (self.max_channel_spread <= channel_tolerance
                && self.max_level - self.min_level <= level_tolerance)
    }

    /// No visible pixel carries color
    pub fn is_colorless(&self, channel_tolerance: u8) -> bool {
        self.max_channel_spread <= channel_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 200, 30]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .unwrap();
        bytes
    }

    fn gif(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 0, 0, 255]));
        let mut bytes = Vec::new();
        {
            let mut encoder = image::codecs::gif::GifEncoder::new(&mut bytes);
            encoder.encode_frame(image::Frame::new(img)).unwrap();
        }
        bytes
    }

    #[test]
    fn test_probe_png_dimensions() {
        let info = probe_image(&png(48, 32, [0, 0, 0, 255])).unwrap().info;
        assert_eq!(info.format, IconFormat::Png);
        assert_eq!((info.width, info.height), (48, 32));
    }

    #[test]
    fn test_probe_gif_and_jpeg() {
        let g = probe_image(&gif(12, 7)).unwrap().info;
        assert_eq!(g.format, IconFormat::Gif);
        assert_eq!((g.width, g.height), (12, 7));

        let j = probe_image(&jpeg(20, 10)).unwrap().info;
        assert_eq!(j.format, IconFormat::Jpeg);
        assert_eq!((j.width, j.height), (20, 10));
    }

    #[test]
    fn test_probe_rejects_garbage() {
        assert!(probe_image(b"").is_err());
        assert!(probe_image(b"definitely not an image").is_err());
    }

    #[test]
    fn test_probe_truncated_png() {
        let bytes = png(16, 16, [1, 2, 3, 255]);
        assert!(probe_image(&bytes[..10]).is_err());
    }

    #[test]
    fn test_truncated_pixel_data_fails_decode() {
        let img = RgbaImage::from_fn(48, 48, |x, y| Rgba([(x * 5) as u8, (y * 3) as u8, (x ^ y) as u8, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        let cut = &bytes[..bytes.len() - 40];

        // Header still parses; the pixel data does not
        let header = image::ImageReader::with_format(Cursor::new(cut), ImageFormat::Png).into_dimensions();
        assert_eq!(header.unwrap(), (48, 48));
        assert!(probe_image(cut).is_err());
    }

    #[test]
    fn test_extension_matching() {
        assert!(IconFormat::Jpeg.matches_extension("jpg"));
        assert!(IconFormat::Jpeg.matches_extension("jpeg"));
        assert!(!IconFormat::Png.matches_extension("gif"));
        assert_eq!(IconFormat::Jpeg.to_string(), "JPEG");
        assert_eq!(IconFormat::Png.to_string(), "png");
    }

    #[test]
    fn test_color_profile_gray_with_alpha() {
        let pixels = vec![[0x33, 0x33, 0x33, 255], [0x33, 0x33, 0x33, 80], [9, 200, 9, 0]];
        let profile = ColorProfile::from_rgba(pixels);
        assert_eq!(profile.visible_pixels, 2);
        assert!(profile.is_single_gray(0, 0));
        assert!(!profile.all_white);
    }

    #[test]
    fn test_color_profile_colored() {
        let profile = ColorProfile::from_rgba(vec![[255, 0, 0, 255], [0x33, 0x33, 0x33, 255]]);
        assert!(!profile.is_single_gray(0, 0));
        assert!(!profile.is_colorless(0));
    }

    #[test]
    fn test_color_profile_two_grays() {
        let profile = ColorProfile::from_rgba(vec![[0x33, 0x33, 0x33, 255], [0xff, 0xff, 0xff, 255]]);
        assert!(profile.is_colorless(0));
        assert!(!profile.is_single_gray(0, 0));
        assert!(profile.is_single_gray(0, 0xcc));
    }

    #[test]
    fn test_color_profile_white() {
        let bytes = png(4, 4, [255, 255, 255, 128]);
        let profile = probe_image(&bytes).unwrap().colors;
        assert!(profile.all_white);
        assert_eq!(profile.visible_pixels, 16);
    }

    #[test]
    fn test_color_profile_fully_transparent() {
        let profile = ColorProfile::from_rgba(vec![[10, 20, 30, 0]]);
        assert_eq!(profile.visible_pixels, 0);
        assert!(profile.all_white);
        assert!(profile.is_single_gray(0, 0));
    }
}
