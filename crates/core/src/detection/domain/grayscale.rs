use image::{GrayImage, Luma, RgbImage};
use imageproc::contrast::otsu_level;

// 0.299 / 0.587 / 0.114 in 14-bit fixed point.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

/// Converts RGB to luma with the BT.601 weights `0.299 R + 0.587 G + 0.114 B`.
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        Luma([luminance(r, g, b)])
    })
}

fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT;
    ((weighted + (1 << (SHIFT - 1))) >> SHIFT) as u8
}

/// Two-level image: pixels strictly above `level` become 255, the rest 0.
pub fn binarize(gray: &GrayImage, level: u8) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y).0[0] > level {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Binarizes at the level that minimizes intra-class variance of the
/// global histogram. Returns the chosen level with the mask.
pub fn binarize_otsu(gray: &GrayImage) -> (u8, GrayImage) {
    let level = otsu_level(gray);
    (level, binarize(gray, level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rstest::rstest;

    #[rstest]
    #[case::black([0, 0, 0], 0)]
    #[case::white([255, 255, 255], 255)]
    #[case::red([255, 0, 0], 76)]
    #[case::green([0, 255, 0], 150)]
    #[case::blue([0, 0, 255], 29)]
    fn test_luminance_weights(#[case] rgb: [u8; 3], #[case] expected: u8) {
        let image = RgbImage::from_pixel(1, 1, Rgb(rgb));
        assert_eq!(to_grayscale(&image).get_pixel(0, 0).0[0], expected);
    }

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let image = RgbImage::new(7, 3);
        let gray = to_grayscale(&image);
        assert_eq!(gray.dimensions(), (7, 3));
    }

    #[test]
    fn test_binarize_is_strictly_greater() {
        let mut gray = GrayImage::new(3, 1);
        gray.put_pixel(0, 0, Luma([99]));
        gray.put_pixel(1, 0, Luma([100]));
        gray.put_pixel(2, 0, Luma([101]));
        let binary = binarize(&gray, 100);
        assert_eq!(binary.get_pixel(0, 0).0[0], 0);
        assert_eq!(binary.get_pixel(1, 0).0[0], 0);
        assert_eq!(binary.get_pixel(2, 0).0[0], 255);
    }

    #[test]
    fn test_otsu_separates_bimodal_image() {
        let gray = GrayImage::from_fn(20, 10, |x, _| if x < 10 { Luma([30]) } else { Luma([200]) });
        let (level, binary) = binarize_otsu(&gray);
        assert!((30..200).contains(&level));
        assert_eq!(binary.get_pixel(2, 5).0[0], 0);
        assert_eq!(binary.get_pixel(15, 5).0[0], 255);
    }

    #[test]
    fn test_binary_output_has_two_levels() {
        let gray = GrayImage::from_fn(16, 16, |x, y| Luma([((x * 16 + y) % 256) as u8]));
        let (_, binary) = binarize_otsu(&gray);
        assert!(binary.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }
}
