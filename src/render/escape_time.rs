use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::fractal::iterations::iterate_pixel;
use crate::fractal::{FieldMaps, FractalParams, PixelResult};

/// Calcule les 18 cartes de sortie d'une fractale escape-time sur la
/// grille définie par `x_coords` × `y_coords`.
///
/// La carte résultante fait `y_coords.len()` lignes × `x_coords.len()`
/// colonnes (row-major, la ligne j correspond à y_coords[j]).
///
/// Le calcul est parallélisé par lignes avec rayon ; chaque pixel est
/// indépendant et le résultat est identique quel que soit le nombre de
/// threads.
pub fn render_escape_time(
    params: &FractalParams,
    x_coords: &[f64],
    y_coords: &[f64],
) -> FieldMaps {
    let width = x_coords.len();
    let height = y_coords.len();
    let mut pixels = vec![PixelResult::default(); width * height];

    if width == 0 || height == 0 {
        return FieldMaps::from_pixels(width, height, &pixels);
    }

    // Parallélisation par lignes avec rayon
    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(j, row)| {
            let y = y_coords[j];
            for (i, pixel) in row.iter_mut().enumerate() {
                *pixel = iterate_pixel(params, x_coords[i], y);
            }
        });

    FieldMaps::from_pixels(width, height, &pixels)
}

/// Version annulable du rendu escape-time.
/// Retourne None si annulé, Some(cartes) sinon.
pub fn render_escape_time_cancellable(
    params: &FractalParams,
    x_coords: &[f64],
    y_coords: &[f64],
    cancel: &Arc<AtomicBool>,
) -> Option<FieldMaps> {
    // Vérifier l'annulation avant de commencer
    if cancel.load(Ordering::Relaxed) {
        return None;
    }

    let width = x_coords.len();
    let height = y_coords.len();
    let mut pixels = vec![PixelResult::default(); width * height];

    if width == 0 || height == 0 {
        return Some(FieldMaps::from_pixels(width, height, &pixels));
    }

    // Flag interne pour propager l'annulation aux threads Rayon
    let cancelled = AtomicBool::new(false);

    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(j, row)| {
            // Vérifier l'annulation toutes les 16 lignes
            if j % 16 == 0 && cancel.load(Ordering::Relaxed) {
                cancelled.store(true, Ordering::Relaxed);
                return;
            }
            if cancelled.load(Ordering::Relaxed) {
                return;
            }

            let y = y_coords[j];
            for (i, pixel) in row.iter_mut().enumerate() {
                *pixel = iterate_pixel(params, x_coords[i], y);
            }
        });

    if cancelled.load(Ordering::Relaxed) {
        None
    } else {
        Some(FieldMaps::from_pixels(width, height, &pixels))
    }
}
