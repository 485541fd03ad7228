//! Image processing utilities.
//!
//! # Modules
//!
//! - [`background`]: Background removal (nobg)
//! - [`resize`]: Lanczos resizing and PNG export

pub mod background;
pub mod resize;
