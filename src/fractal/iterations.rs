use num_complex::Complex64;

use crate::fractal::fields::PixelResult;
use crate::fractal::types::{FractalFamily, FractalParams};

/// Calcule toutes les valeurs de sortie pour un pixel situé en (x, y)
/// dans le plan complexe.
///
/// Itération : z_{n+1} = z_n^p + c, avec suivi de la dérivée analytique
/// (dz/dc pour Mandelbrot, dz/dz_0 pour Julia) et du trap éventuel.
/// Le pixel est indépendant de tous les autres : aucune donnée partagée,
/// aucune allocation, pas de panique possible dans la boucle chaude.
///
/// Précondition (non vérifiée ici) : paramètres finis, bailout > 0.
pub fn iterate_pixel(params: &FractalParams, x: f64, y: f64) -> PixelResult {
    let mut out = PixelResult {
        iteration: params.iteration_max,
        ..PixelResult::default()
    };

    // Initialisation selon la famille : la différence entre Mandelbrot et
    // Julia tient à z_0, c, la base de la dérivée et le terme additif "+1"
    // de la règle de dérivation en chaîne (d(z^p+c)/dc vs d(z^p+c)/dz_0).
    let (mut z_re, mut z_im, c_re, c_im, mut dz_re, mut dz_im, dz_add) = match params.family {
        FractalFamily::Mandelbrot => (0.0, 0.0, x, y, 0.0, 0.0, 1.0),
        FractalFamily::Julia => (x, y, params.seed.re, params.seed.im, 1.0, 0.0, 0.0),
    };

    // Angle de la valeur fixée par pixel au départ : c pour Mandelbrot,
    // z_0 pour Julia. Dans les deux cas c'est la coordonnée du pixel.
    out.initial_angle = y.atan2(x);

    let power = params.power;
    let bailout_sq = params.bailout * params.bailout;
    let is_integer_power = power.fract() == 0.0;
    let has_trap = !params.trap.is_none();

    for i in 0..params.iteration_max {
        if i == params.fixed_iteration {
            out.fixed_z = Complex64::new(z_re, z_im);
        }

        let magnitude_sq = z_re * z_re + z_im * z_im;
        let magnitude = magnitude_sq.sqrt();

        // Test d'échappement sur le rayon au carré, avec >= (pas >).
        if magnitude_sq >= bailout_sq {
            record_escape(&mut out, i, z_re, z_im, magnitude, dz_re, dz_im, power);
            return out;
        }

        // Le trap ne voit que les itérations qui n'échappent pas, et
        // seulement à partir de i = 1 (z_0 est exclu).
        if has_trap && i > 0 {
            let d = params.trap.distance(z_re, z_im);
            if d < out.trap_distance {
                out.trap_distance = d;
                out.trap_iteration = i;
            }
        }

        // Mise à jour de la dérivée : dz_{n+1} = p·z_n^(p-1)·dz_n (+1 pour
        // Mandelbrot). Pour p = 2 la forme directe évite les appels
        // trigonométriques ; sinon z^(p-1) passe par la forme polaire.
        let (next_dz_re, next_dz_im) = if is_integer_power && power == 2.0 {
            (
                2.0 * (z_re * dz_re - z_im * dz_im) + dz_add,
                2.0 * (z_re * dz_im + z_im * dz_re),
            )
        } else {
            let (p1_re, p1_im) = complex_pow_polar(z_re, z_im, power - 1.0);
            (
                power * (p1_re * dz_re - p1_im * dz_im) + dz_add,
                power * (p1_re * dz_im + p1_im * dz_re),
            )
        };

        // Mise à jour de z. Puissance entière : multiplications complexes
        // exactes (pas d'erreur trigonométrique accumulée) ; sinon polaire.
        let (next_z_re, next_z_im) = if is_integer_power {
            if power == 2.0 {
                (
                    z_re * z_re - z_im * z_im + c_re,
                    2.0 * z_re * z_im + c_im,
                )
            } else {
                let (p_re, p_im) = complex_pow_int(z_re, z_im, power as u32);
                (p_re + c_re, p_im + c_im)
            }
        } else {
            let (p_re, p_im) = complex_pow_polar(z_re, z_im, power);
            (p_re + c_re, p_im + c_im)
        };

        // Garde contre le débordement : si z (ou son rayon au carré, qui
        // sert au test d'échappement suivant) devient non fini, le pixel
        // est traité comme échappé avec son dernier état fini. La dérivée
        // n'est pas gardée : un dz non fini n'échappe pas l'orbite, il est
        // absorbé par le test |dz|² > 0 au moment de l'enregistrement.
        let next_magnitude_sq = next_z_re * next_z_re + next_z_im * next_z_im;
        if !next_magnitude_sq.is_finite() {
            record_escape(&mut out, i + 1, z_re, z_im, magnitude, dz_re, dz_im, power);
            return out;
        }

        dz_re = next_dz_re;
        dz_im = next_dz_im;
        z_re = next_z_re;
        z_im = next_z_im;
    }

    // Jamais échappé : l'itération reste à la sentinelle iteration_max.
    // Les cartes magnitude/distance/bailout gardent leurs zéros initiaux.
    out.final_angle = z_im.atan2(z_re);
    let dz_sq = dz_re * dz_re + dz_im * dz_im;
    out.derivative_magnitude = if dz_sq > 0.0 { dz_sq.sqrt().ln() } else { 0.0 };
    out.final_z = Complex64::new(z_re, z_im);
    out.final_dz = Complex64::new(dz_re, dz_im);
    out
}

/// Remplit les champs d'échappement d'un pixel.
#[allow(clippy::too_many_arguments)]
fn record_escape(
    out: &mut PixelResult,
    iteration: u32,
    z_re: f64,
    z_im: f64,
    magnitude: f64,
    dz_re: f64,
    dz_im: f64,
    power: f64,
) {
    out.iteration = iteration;
    out.magnitude = magnitude;
    // Non défini (NaN) pour power <= 1 ou magnitude <= 1 : propagé tel quel.
    out.smooth_iteration = iteration as f64 + 1.0 - magnitude.ln().ln() / power.ln();
    out.final_angle = z_im.atan2(z_re);

    let dz_sq = dz_re * dz_re + dz_im * dz_im;
    if dz_sq > 0.0 {
        let dz_norm = dz_sq.sqrt();
        out.derivative_magnitude = dz_norm.ln();
        out.distance = 2.0 * magnitude * magnitude.ln() / dz_norm;
        out.derivative_bailout = magnitude * magnitude.ln() / dz_norm;
    } else {
        out.derivative_magnitude = 0.0;
        out.distance = 0.0;
        out.derivative_bailout = 0.0;
    }

    out.final_z = Complex64::new(z_re, z_im);
    out.final_dz = Complex64::new(dz_re, dz_im);
    out.bailout_z = Complex64::new(z_re, z_im);
}

/// z^p par multiplications complexes successives. p = 0 donne z^0 = 1.
#[inline]
fn complex_pow_int(z_re: f64, z_im: f64, p: u32) -> (f64, f64) {
    if p == 0 {
        return (1.0, 0.0);
    }
    let mut acc_re = z_re;
    let mut acc_im = z_im;
    for _ in 1..p {
        let tmp = acc_re;
        acc_re = acc_re * z_re - acc_im * z_im;
        acc_im = tmp * z_im + acc_im * z_re;
    }
    (acc_re, acc_im)
}

/// z^p par la forme polaire : (r^p, p·θ) reconverti en rectangulaire.
#[inline]
fn complex_pow_polar(z_re: f64, z_im: f64, p: f64) -> (f64, f64) {
    let r = (z_re * z_re + z_im * z_im).sqrt();
    let theta = z_im.atan2(z_re);
    let new_r = r.powf(p);
    let new_theta = p * theta;
    (new_r * new_theta.cos(), new_r * new_theta.sin())
}
