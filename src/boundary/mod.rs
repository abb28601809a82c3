//! Europe-Asia boundary path building and continental splitting
//!
//! Turns the disconnected boundary-line segments into one ordered
//! south-to-north path and uses it to cut country polygons into their
//! European and Asian parts.

pub mod path;
pub mod split;

pub use path::{merge_segments, ordered_path, GAP_THRESHOLD_DEG};
pub use split::{absorb_lon_window, BoundarySplitter, Side};
