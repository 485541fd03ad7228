use image::{DynamicImage, RgbaImage};

use crate::image::background::detect::detect_background_color;
use crate::image::background::floodfill::apply_edge_connected_mask;
use crate::image::background::mask::build_background_mask;

/// Default maximum RGB distance from the detected background for flood fill.
///
/// Raise it when the background is not perfectly flat.
pub const DEFAULT_THRESHOLD: u32 = 18;

/// Make the edge-connected background of `img` transparent.
///
/// The image is converted to RGBA first; sources without alpha become fully
/// opaque before the fill. See [`clear_edge_connected_background`].
pub fn remove_edge_connected_background(img: DynamicImage, threshold: u32) -> RgbaImage {
    let mut output = img.into_rgba8();
    clear_edge_connected_background(&mut output, threshold);
    output
}

/// In-place variant of [`remove_edge_connected_background`].
///
/// Every pixel reachable from the border through 4-neighbours whose RGB is
/// within `threshold` (Manhattan distance) of the top-left pixel gets alpha 0.
/// Enclosed regions of the same color are kept. Zero-area images are returned
/// untouched. Returns the number of pixels cleared.
pub fn clear_edge_connected_background(img: &mut RgbaImage, threshold: u32) -> usize {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }

    let background = detect_background_color(img);
    let mask = build_background_mask(img, background, threshold);
    let cleared = apply_edge_connected_mask(img, &mask);

    crate::debug!(
        "nobg";
        "background {} within {}: {} of {} matching pixels are edge-connected",
        background,
        threshold,
        cleared,
        mask.count()
    );

    cleared
}
