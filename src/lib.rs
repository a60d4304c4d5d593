//! Moteur de champs fractals escape-time (familles Mandelbrot et Julia,
//! puissance arbitraire) : noyau d'itération avec suivi de dérivée et
//! orbit traps, 18 cartes de sortie par rendu, normalisation par carte
//! et colorisation LCH ou par palette.

pub mod color;
pub mod fractal;
pub mod io;
pub mod render;

pub use color::{colorize_with_palette, generate_colors, normalize_channels, normalize_field};
pub use fractal::{
    generate_coords, FieldMaps, FieldName, FractalFamily, FractalParams, TrapSpec, Viewport,
};
pub use render::{render_escape_time, render_escape_time_cancellable};
