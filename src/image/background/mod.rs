//! Remove a solid background from logo images.
//!
//! The background color is the top-left pixel. A breadth-first flood fill
//! seeded from the border clears alpha on every connected pixel within the
//! RGB distance threshold, so enclosed areas of the same color survive.

mod color;
mod detect;
mod floodfill;
mod mask;
mod process;

pub use color::MAX_DISTANCE;
pub use process::{DEFAULT_THRESHOLD, remove_edge_connected_background};
