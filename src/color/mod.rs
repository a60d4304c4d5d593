pub mod color_models;
pub mod lch_render;
pub mod normalize;
pub mod palettes;

pub use lch_render::{generate_colors, ColorScheme};
pub use normalize::{normalize_channels, normalize_field};
pub use palettes::{colorize_with_palette, PaletteId};
