use rayon::prelude::*;

use super::color_models::{lch_to_rgb, Lch};

/// Correction gamma appliquée à la luminosité.
pub const GAMMA_FACT: f64 = 0.5;
/// Facteur de luminosité appliqué après le gamma.
pub const BRIGHTNESS: f64 = 1.3;
/// Chroma maximal restant dans le gamut sRGB (~75).
pub const C_MAX_FOR_SRGB: f64 = 75.0;

/// Affectation des trois cartes normalisées (itérations, magnitudes,
/// angles) aux canaux L, C et H de l'espace LCH.
///
/// Les trois lettres du nom donnent l'ordre : `Ima` envoie les
/// itérations sur L, les magnitudes sur C et les angles sur H.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Ima,
    Iam,
    Mia,
    Mai,
    Aim,
    Ami,
}

impl ColorScheme {
    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Ima => "ima",
            ColorScheme::Iam => "iam",
            ColorScheme::Mia => "mia",
            ColorScheme::Mai => "mai",
            ColorScheme::Aim => "aim",
            ColorScheme::Ami => "ami",
        }
    }

    pub fn from_cli_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ima" => Some(ColorScheme::Ima),
            "iam" => Some(ColorScheme::Iam),
            "mia" => Some(ColorScheme::Mia),
            "mai" => Some(ColorScheme::Mai),
            "aim" => Some(ColorScheme::Aim),
            "ami" => Some(ColorScheme::Ami),
            _ => None,
        }
    }

    /// Réordonne (itérations, magnitudes, angles) en (L, C, H).
    #[inline]
    fn assign(self, i: f64, m: f64, a: f64) -> (f64, f64, f64) {
        match self {
            ColorScheme::Ima => (i, m, a),
            ColorScheme::Iam => (i, a, m),
            ColorScheme::Mia => (m, i, a),
            ColorScheme::Mai => (m, a, i),
            ColorScheme::Aim => (a, i, m),
            ColorScheme::Ami => (a, m, i),
        }
    }
}

/// Ajustements esthétiques des canaux avant conversion LCH → RGB.
///
/// L subit un gamma 0.5 puis le facteur de luminosité, borné à [0, 100] ;
/// C est mis à l'échelle du gamut sRGB ; H passe de [0, 1] à [0, 360].
/// Les petites valeurs négatives de L (imprécisions flottantes sur les
/// cartes d'angles) sont ramenées à 0 avant la racine.
#[inline]
fn adjust_channels(l: f64, c: f64, h: f64) -> Lch {
    let l = l.max(0.0);
    let l = (l.powf(GAMMA_FACT) * BRIGHTNESS * 100.0).clamp(0.0, 100.0);
    let c = (c * C_MAX_FOR_SRGB).clamp(0.0, C_MAX_FOR_SRGB);
    let h = (h * 360.0).clamp(0.0, 360.0);
    Lch { l, c, h }
}

/// Génère un buffer RGB8 (3 octets par pixel, row-major) à partir des
/// trois cartes normalisées, selon le schéma de couleur choisi.
///
/// Les trois cartes doivent avoir la même longueur ; la colorisation
/// est parallélisée par lignes avec rayon.
pub fn generate_colors(
    iterations: &[f64],
    magnitudes: &[f64],
    angles: &[f64],
    width: usize,
    scheme: ColorScheme,
) -> Vec<u8> {
    debug_assert_eq!(iterations.len(), magnitudes.len());
    debug_assert_eq!(iterations.len(), angles.len());

    if width == 0 {
        return Vec::new();
    }
    let height = iterations.len() / width;

    // Parallélisation de la colorisation par lignes
    (0..height)
        .into_par_iter()
        .flat_map(|y| {
            (0..width)
                .flat_map(|x| {
                    let idx = y * width + x;
                    let (l, c, h) =
                        scheme.assign(iterations[idx], magnitudes[idx], angles[idx]);
                    let (r, g, b) = lch_to_rgb(adjust_channels(l, c, h));
                    vec![r, g, b]
                })
                .collect::<Vec<u8>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_cli_roundtrip() {
        for scheme in [
            ColorScheme::Ima,
            ColorScheme::Iam,
            ColorScheme::Mia,
            ColorScheme::Mai,
            ColorScheme::Aim,
            ColorScheme::Ami,
        ] {
            assert_eq!(ColorScheme::from_cli_name(scheme.name()), Some(scheme));
        }
        assert_eq!(ColorScheme::from_cli_name("imam"), None);
    }

    #[test]
    fn test_assign_permutations() {
        assert_eq!(ColorScheme::Ima.assign(1.0, 2.0, 3.0), (1.0, 2.0, 3.0));
        assert_eq!(ColorScheme::Mai.assign(1.0, 2.0, 3.0), (2.0, 3.0, 1.0));
        assert_eq!(ColorScheme::Ami.assign(1.0, 2.0, 3.0), (3.0, 2.0, 1.0));
    }

    #[test]
    fn test_adjust_channels_bounds() {
        let lch = adjust_channels(1.0, 1.0, 1.0);
        assert_eq!(lch.l, 100.0); // 1^0.5 * 1.3 * 100 écrêté à 100
        assert_eq!(lch.c, C_MAX_FOR_SRGB);
        assert_eq!(lch.h, 360.0);
        // L négatif (imprécision flottante) ramené à 0, pas de NaN.
        let lch = adjust_channels(-1e-12, 0.5, 0.5);
        assert_eq!(lch.l, 0.0);
    }

    #[test]
    fn test_generate_colors_buffer_size() {
        let n = 12;
        let zeros = vec![0.0; n];
        let buffer = generate_colors(&zeros, &zeros, &zeros, 4, ColorScheme::Ima);
        assert_eq!(buffer.len(), n * 3);
        // L = 0 partout : image presque noire (résidu du seuil lab_f_inv).
        assert!(buffer.iter().all(|&v| v <= 10));
    }

    #[test]
    fn test_generate_colors_bright_for_high_l() {
        let n = 4;
        let ones = vec![1.0; n];
        let zeros = vec![0.0; n];
        // L = itérations = 1, C = 0 : blanc.
        let buffer = generate_colors(&ones, &zeros, &zeros, 2, ColorScheme::Ima);
        assert!(buffer.iter().all(|&v| v >= 250));
    }

    #[test]
    fn test_generate_colors_empty_width() {
        assert!(generate_colors(&[], &[], &[], 0, ColorScheme::Ima).is_empty());
    }
}
