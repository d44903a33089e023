use image::{GrayImage, Luma};

/// Extracts a `size` patch centred on `center` with bilinear sampling.
///
/// Patch pixel `(x, y)` samples the source at
/// `center - (size - 1) / 2 + (x, y)`; samples outside the source replicate
/// the nearest edge pixel.
pub fn extract_roi(gray: &GrayImage, center: (f64, f64), size: (u32, u32)) -> GrayImage {
    let (width, height) = size;
    if width == 0 || height == 0 || gray.width() == 0 || gray.height() == 0 {
        return GrayImage::new(width, height);
    }

    let origin_x = center.0 - (width as f64 - 1.0) * 0.5;
    let origin_y = center.1 - (height as f64 - 1.0) * 0.5;

    GrayImage::from_fn(width, height, |x, y| {
        Luma([sample_bilinear(gray, origin_x + x as f64, origin_y + y as f64)])
    })
}

fn sample_bilinear(gray: &GrayImage, x: f64, y: f64) -> u8 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let top = pixel(gray, x0, y0) * (1.0 - fx) + pixel(gray, x0 + 1.0, y0) * fx;
    let bottom = pixel(gray, x0, y0 + 1.0) * (1.0 - fx) + pixel(gray, x0 + 1.0, y0 + 1.0) * fx;
    (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8
}

fn pixel(gray: &GrayImage, x: f64, y: f64) -> f64 {
    let max_x = (gray.width() - 1) as f64;
    let max_y = (gray.height() - 1) as f64;
    let cx = x.clamp(0.0, max_x) as u32;
    let cy = y.clamp(0.0, max_y) as u32;
    gray.get_pixel(cx, cy).0[0] as f64
}
