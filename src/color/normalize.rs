use crate::fractal::FieldName;

/// Normalise une carte brute selon la règle associée à son nom.
///
/// Règles appliquées :
/// - cartes brutes (parties réelles/imaginaires de z, dz, bailout) :
///   renvoyées telles quelles ;
/// - itérations (brutes et lissées) : division par `max_iterations` ;
/// - cartes « fixed iteration » : division par `fixed_iteration` ;
/// - distance, trap, ln|dz| : log1p puis min-max (dégénéré → zéros) ;
/// - angles : v / 2π si v > 0, sinon 0 ;
/// - tout le reste : min-max linéaire (dégénéré → zéros).
pub fn normalize_field(
    data: &[f64],
    name: FieldName,
    max_iterations: u32,
    fixed_iteration: u32,
) -> Vec<f64> {
    match name {
        FieldName::FinalZReal
        | FieldName::FinalZImag
        | FieldName::FinalDerivativeReal
        | FieldName::FinalDerivativeImag
        | FieldName::BailoutLocationReal
        | FieldName::BailoutLocationImag => data.to_vec(),

        FieldName::Iterations | FieldName::SmoothIterations => {
            normalize_by_max_val(data, max_iterations as f64)
        }

        FieldName::FixedIterationZReal | FieldName::FixedIterationZImag => {
            normalize_by_max_val(data, fixed_iteration as f64)
        }

        FieldName::Distance | FieldName::MinTrapDistance | FieldName::DerivativeMagnitude => {
            normalize_logarithmic(data)
        }

        FieldName::InitialAngles | FieldName::FinalAngles => normalize_angles(data),

        FieldName::Magnitudes | FieldName::MinTrapIteration | FieldName::DerivativeBailout => {
            normalize_linear(data)
        }
    }
}

/// Division simple par une valeur maximale connue.
fn normalize_by_max_val(data: &[f64], max_val: f64) -> Vec<f64> {
    data.iter().map(|&v| v / max_val).collect()
}

/// Compression log1p puis étalement min-max sur [0, 1].
///
/// Les valeurs sont assainies avant le log : négatives ramenées à 0,
/// NaN à 0, +inf au plus grand f64 fini (une carte de trap sans trap
/// actif est entièrement à +inf et doit rester exploitable).
fn normalize_logarithmic(data: &[f64]) -> Vec<f64> {
    let log_data: Vec<f64> = data
        .iter()
        .map(|&v| {
            let v = if v.is_nan() { 0.0 } else { v };
            let v = v.clamp(0.0, f64::MAX);
            v.ln_1p()
        })
        .collect();
    min_max_spread(&log_data)
}

/// Étalement min-max linéaire sur [0, 1].
fn normalize_linear(data: &[f64]) -> Vec<f64> {
    min_max_spread(data)
}

/// Angles en radians vers [0, 1] : v / 2π pour v > 0, 0 sinon
/// (la moitié négative de atan2 est écrasée à 0, pas repliée).
fn normalize_angles(data: &[f64]) -> Vec<f64> {
    let two_pi = 2.0 * std::f64::consts::PI;
    data.iter()
        .map(|&v| if v > 0.0 { v / two_pi } else { 0.0 })
        .collect()
}

fn min_max_spread(data: &[f64]) -> Vec<f64> {
    // f64::min / f64::max ignorent les NaN.
    let min_val = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_val - min_val;
    if range == 0.0 || !range.is_finite() {
        return vec![0.0; data.len()];
    }
    data.iter().map(|&v| (v - min_val) / range).collect()
}

/// Normalisation grossière des trois cartes du chemin de colorisation :
/// itérations, magnitudes et angles.
///
/// Ce chemin est volontairement plus simple que `normalize_field` :
/// - itérations : division par le maximum ;
/// - magnitudes : assainissement (NaN → 0, +inf → f64::MAX, négatifs → 0)
///   puis log1p et min-max avec seuil 1e-9 (dégénéré → zéros) ;
/// - angles : v / 2π sans écrasement des négatifs ni clamp.
pub fn normalize_channels(
    iterations: &[f64],
    magnitudes: &[f64],
    angles: &[f64],
    max_iterations: u32,
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let norm_iterations = normalize_by_max_val(iterations, max_iterations as f64);

    let log_magnitudes: Vec<f64> = magnitudes
        .iter()
        .map(|&v| {
            let v = if v.is_nan() { 0.0 } else { v };
            let v = v.clamp(0.0, f64::MAX);
            v.ln_1p()
        })
        .collect();
    let min_log = log_magnitudes.iter().copied().fold(f64::INFINITY, f64::min);
    let max_log = log_magnitudes
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let norm_magnitudes = if (max_log - min_log) > 1e-9 {
        log_magnitudes
            .iter()
            .map(|&v| (v - min_log) / (max_log - min_log))
            .collect()
    } else {
        vec![0.0; log_magnitudes.len()]
    };

    let two_pi = 2.0 * std::f64::consts::PI;
    let norm_angles = angles.iter().map(|&v| v / two_pi).collect();

    (norm_iterations, norm_magnitudes, norm_angles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_fields_pass_through() {
        let data = vec![-3.5, 0.0, 42.0, f64::NAN];
        let out = normalize_field(&data, FieldName::FinalZReal, 100, 20);
        assert_eq!(out[0], -3.5);
        assert_eq!(out[2], 42.0);
        assert!(out[3].is_nan());
    }

    #[test]
    fn test_iterations_divided_by_max() {
        let data = vec![0.0, 50.0, 100.0];
        let out = normalize_field(&data, FieldName::Iterations, 100, 20);
        assert_eq!(out, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_fixed_fields_divided_by_fixed_iteration() {
        let data = vec![10.0, -5.0];
        let out = normalize_field(&data, FieldName::FixedIterationZReal, 100, 20);
        assert_eq!(out, vec![0.5, -0.25]);
    }

    #[test]
    fn test_logarithmic_bounds() {
        let data = vec![0.0, 1.0, 100.0, 10000.0];
        let out = normalize_field(&data, FieldName::Distance, 100, 20);
        assert_eq!(out[0], 0.0);
        assert!((out[3] - 1.0).abs() < 1e-12);
        assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
        // La compression log est monotone.
        assert!(out[1] < out[2] && out[2] < out[3]);
    }

    #[test]
    fn test_logarithmic_degenerate_gives_zeros() {
        let out = normalize_field(&[3.0, 3.0, 3.0], FieldName::Distance, 100, 20);
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_logarithmic_handles_infinite_trap_map() {
        // Carte de trap sans trap actif : tous les pixels à +inf.
        let out = normalize_field(
            &[f64::INFINITY, f64::INFINITY],
            FieldName::MinTrapDistance,
            100,
            20,
        );
        assert_eq!(out, vec![0.0, 0.0]);
        // Mélange fini / +inf : l'infini devient le maximum.
        let out = normalize_field(
            &[0.5, f64::INFINITY],
            FieldName::MinTrapDistance,
            100,
            20,
        );
        assert!((out[1] - 1.0).abs() < 1e-12);
        assert!(out[0] < 0.01);
    }

    #[test]
    fn test_angles_negative_clamped_to_zero() {
        let pi = std::f64::consts::PI;
        let out = normalize_field(&[-pi, 0.0, pi, 2.0 * pi], FieldName::FinalAngles, 100, 20);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 0.0);
        assert!((out[2] - 0.5).abs() < 1e-12);
        assert!((out[3] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_min_max() {
        let out = normalize_field(&[2.0, 4.0, 6.0], FieldName::Magnitudes, 100, 20);
        assert_eq!(out, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_linear_idempotent_on_unit_range() {
        let data = vec![0.0, 0.25, 0.5, 1.0];
        let once = normalize_field(&data, FieldName::Magnitudes, 100, 20);
        let twice = normalize_field(&once, FieldName::Magnitudes, 100, 20);
        assert_eq!(once, data);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_channels_coarse_path() {
        let iterations = vec![0.0, 50.0, 100.0];
        let magnitudes = vec![f64::NAN, 2.0, f64::INFINITY];
        let pi = std::f64::consts::PI;
        let angles = vec![-pi, 0.0, pi];
        let (it, mag, ang) = normalize_channels(&iterations, &magnitudes, &angles, 100);
        assert_eq!(it, vec![0.0, 0.5, 1.0]);
        // NaN assaini à 0 (minimum), +inf au maximum fini.
        assert_eq!(mag[0], 0.0);
        assert!((mag[2] - 1.0).abs() < 1e-12);
        assert!(mag[1] > 0.0 && mag[1] < 1.0);
        // Les angles négatifs ne sont PAS écrasés sur ce chemin.
        assert!((ang[0] + 0.5).abs() < 1e-12);
        assert!((ang[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_channels_uniform_magnitudes() {
        let (_, mag, _) = normalize_channels(&[1.0], &[5.0, 5.0], &[0.0], 10);
        assert_eq!(mag, vec![0.0, 0.0]);
    }
}
