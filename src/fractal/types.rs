use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::traps::TrapSpec;

/// Familles de fractales escape-time prises en charge.
///
/// Les deux familles partagent le même noyau d'itération z_{n+1} = z_n^p + c ;
/// seule l'initialisation diffère (voir `iterations.rs`) :
/// - Mandelbrot : z_0 = 0, c = coordonnée du pixel, dz/dc part de 0 ;
/// - Julia : z_0 = coordonnée du pixel, c = constante fixe, dz/dz_0 part de 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractalFamily {
    Mandelbrot,
    Julia,
}

impl FractalFamily {
    pub fn name(self) -> &'static str {
        match self {
            FractalFamily::Mandelbrot => "Mandelbrot",
            FractalFamily::Julia => "Julia",
        }
    }

    /// Parse un nom CLI, insensible à la casse.
    /// Les alias `multi-*` (puissance arbitraire) pointent vers le même noyau.
    pub fn from_cli_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mandelbrot" | "multi-mandelbrot" | "multimandelbrot" => {
                Some(FractalFamily::Mandelbrot)
            }
            "julia" | "multi-julia" | "multijulia" => Some(FractalFamily::Julia),
            _ => None,
        }
    }
}

/// Fenêtre de vue dans le plan complexe, représentée par centre + étendue.
///
/// La conversion vers bornes min/max est exacte dans les deux sens :
/// center = (min + max) / 2, span = max - min.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_center: f64,
    pub y_center: f64,
    pub x_span: f64,
    pub y_span: f64,
}

impl Viewport {
    pub fn new(x_center: f64, y_center: f64, x_span: f64, y_span: f64) -> Self {
        Self {
            x_center,
            y_center,
            x_span,
            y_span,
        }
    }

    /// Construit la fenêtre depuis des bornes min/max.
    pub fn from_minmax(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_center: (x_min + x_max) / 2.0,
            y_center: (y_min + y_max) / 2.0,
            x_span: x_max - x_min,
            y_span: y_max - y_min,
        }
    }

    /// Bornes (x_min, x_max, y_min, y_max) correspondantes.
    pub fn to_minmax(&self) -> (f64, f64, f64, f64) {
        (
            self.x_center - self.x_span / 2.0,
            self.x_center + self.x_span / 2.0,
            self.y_center - self.y_span / 2.0,
            self.y_center + self.y_span / 2.0,
        )
    }
}

/// Paramètres d'un rendu escape-time.
///
/// Le noyau suppose des valeurs finies et bien formées : la validation
/// (c fini pour Julia, bailout > 0) incombe à l'appelant, pas au noyau
/// (précondition documentée, voir `main.rs`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FractalParams {
    pub family: FractalFamily,

    /// Puissance p de z^p + c. Entière ou réelle ; le noyau choisit le
    /// chemin rapide (multiplications complexes) ou le chemin polaire.
    pub power: f64,

    /// Constante c pour Julia. Ignorée pour Mandelbrot (c = pixel).
    pub seed: Complex64,

    pub iteration_max: u32,
    pub bailout: f64,

    /// Itération à laquelle capturer z dans les cartes « fixed iteration ».
    pub fixed_iteration: u32,

    /// Orbit trap optionnel (TrapSpec::None = désactivé).
    pub trap: TrapSpec,
}

impl FractalParams {
    /// Paramètres par défaut pour une famille donnée.
    pub fn default_for_family(family: FractalFamily) -> Self {
        let seed = match family {
            // c n'est pas utilisé par Mandelbrot.
            FractalFamily::Mandelbrot => Complex64::new(0.0, 0.0),
            FractalFamily::Julia => Complex64::new(0.36228, -0.0777),
        };
        Self {
            family,
            power: 2.0,
            seed,
            iteration_max: 100,
            bailout: 2.0,
            fixed_iteration: 20,
            trap: TrapSpec::None,
        }
    }

    /// Fenêtre de vue par défaut pour la famille.
    pub fn default_viewport(family: FractalFamily) -> Viewport {
        match family {
            FractalFamily::Mandelbrot => Viewport::new(-0.5, 0.0, 4.0, 4.0),
            FractalFamily::Julia => Viewport::new(0.0, 0.0, 4.0, 4.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_roundtrip() {
        let (x_min, x_max, y_min, y_max) = (-2.5, 1.5, -1.25, 1.25);
        let vp = Viewport::from_minmax(x_min, x_max, y_min, y_max);
        assert_eq!(vp.to_minmax(), (x_min, x_max, y_min, y_max));
    }

    #[test]
    fn test_viewport_center_span() {
        let vp = Viewport::from_minmax(-1.0, 3.0, -2.0, 2.0);
        assert_eq!(vp.x_center, 1.0);
        assert_eq!(vp.x_span, 4.0);
        assert_eq!(vp.y_center, 0.0);
        assert_eq!(vp.y_span, 4.0);
    }

    #[test]
    fn test_family_cli_names() {
        assert_eq!(
            FractalFamily::from_cli_name("Mandelbrot"),
            Some(FractalFamily::Mandelbrot)
        );
        assert_eq!(
            FractalFamily::from_cli_name("multi-julia"),
            Some(FractalFamily::Julia)
        );
        assert_eq!(
            FractalFamily::from_cli_name("MULTI-MANDELBROT"),
            Some(FractalFamily::Mandelbrot)
        );
        assert_eq!(FractalFamily::from_cli_name("newton"), None);
    }

    #[test]
    fn test_params_serde_roundtrip() {
        let params = FractalParams::default_for_family(FractalFamily::Julia);
        let json = serde_json::to_string(&params).unwrap();
        let restored: FractalParams = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.family, FractalFamily::Julia);
        assert_eq!(restored.seed, params.seed);
        assert_eq!(restored.iteration_max, params.iteration_max);
    }
}
