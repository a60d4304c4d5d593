pub mod fields;
pub mod grid;
pub mod iterations;
pub mod traps;
pub mod types;

pub use fields::{FieldMaps, FieldName, PixelResult};
pub use grid::generate_coords;
pub use traps::TrapSpec;
pub use types::{FractalFamily, FractalParams, Viewport};
