use image::RgbaImage;

use crate::image::background::color::Rgb;

/// Detect the background color from the top-left pixel.
///
/// A logo element touching that corner defeats this heuristic; callers that
/// need better detection must pick the color themselves.
pub(super) fn detect_background_color(img: &RgbaImage) -> Rgb {
    Rgb::from_pixel(img.get_pixel(0, 0))
}
