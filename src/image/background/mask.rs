use image::RgbaImage;
use rayon::prelude::*;

use crate::image::background::color::Rgb;

/// Per-pixel "background-like" flags, row-major.
pub(super) struct BackgroundMask {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) matches: Vec<bool>,
}

impl BackgroundMask {
    #[inline]
    pub(super) fn is_background(&self, idx: usize) -> bool {
        self.matches[idx]
    }

    pub(super) fn count(&self) -> usize {
        self.matches.iter().filter(|&&m| m).count()
    }
}

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Mark every pixel whose RGB lies within `threshold` of `background`.
///
/// Alpha takes no part in the comparison, so already-cleared pixels keep
/// matching and a second pass over the same image is a no-op.
pub(super) fn build_background_mask(
    img: &RgbaImage,
    background: Rgb,
    threshold: u32,
) -> BackgroundMask {
    let (width, height) = img.dimensions();
    let len = width as usize * height as usize;
    let raw = img.as_raw();

    let classify =
        |pixel: &[u8]| background.distance(Rgb([pixel[0], pixel[1], pixel[2]])) <= threshold;

    let matches: Vec<bool> = if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact(4).map(classify).collect()
    } else {
        raw.chunks_exact(4).map(classify).collect()
    };
    debug_assert_eq!(matches.len(), len);

    BackgroundMask {
        width,
        height,
        matches,
    }
}
