use image::Rgba;

/// Largest possible Manhattan distance between two RGB colors (3 * 255).
pub const MAX_DISTANCE: u32 = 765;

/// An opaque RGB color, alpha ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    #[inline]
    pub fn from_pixel(pixel: &Rgba<u8>) -> Self {
        Self([pixel[0], pixel[1], pixel[2]])
    }

    /// Manhattan distance in RGB space, in `0..=MAX_DISTANCE`.
    #[inline]
    pub fn distance(self, other: Rgb) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| u32::from(a.abs_diff(b)))
            .sum()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
