use num_complex::Complex64;

/// Noms des 18 cartes produites par le noyau escape-time.
///
/// Chaque carte est un tableau 2D height × width (row-major) rempli
/// exactement une fois par pixel, puis immuable. Le normaliseur
/// (`color::normalize`) dispatche sa règle selon ce nom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldName {
    /// Itération d'échappement (sentinelle = iteration_max si jamais échappé).
    Iterations,
    /// Itération lissée : i + 1 - ln(ln(|z|)) / ln(p).
    SmoothIterations,
    /// |z| à l'échappement.
    Magnitudes,
    /// Angle initial de c (Mandelbrot) ou de z_0 (Julia).
    InitialAngles,
    /// Angle final de z.
    FinalAngles,
    /// Estimation de distance à l'ensemble : 2·|z|·ln|z| / |dz|.
    Distance,
    /// ln(|dz|) final.
    DerivativeMagnitude,
    /// Distance minimale de l'orbite au trap.
    MinTrapDistance,
    /// Itération de la distance minimale au trap.
    MinTrapIteration,
    /// |z|·ln|z| / |dz| à l'échappement.
    DerivativeBailout,
    FinalZReal,
    FinalZImag,
    FinalDerivativeReal,
    FinalDerivativeImag,
    /// Copie de z à l'échappement (alias de FinalZ pour les pixels échappés).
    BailoutLocationReal,
    BailoutLocationImag,
    /// z capturé à l'itération `fixed_iteration`.
    FixedIterationZReal,
    FixedIterationZImag,
}

impl FieldName {
    pub fn all() -> &'static [FieldName] {
        &[
            FieldName::Iterations,
            FieldName::SmoothIterations,
            FieldName::Magnitudes,
            FieldName::InitialAngles,
            FieldName::FinalAngles,
            FieldName::Distance,
            FieldName::DerivativeMagnitude,
            FieldName::MinTrapDistance,
            FieldName::MinTrapIteration,
            FieldName::DerivativeBailout,
            FieldName::FinalZReal,
            FieldName::FinalZImag,
            FieldName::FinalDerivativeReal,
            FieldName::FinalDerivativeImag,
            FieldName::BailoutLocationReal,
            FieldName::BailoutLocationImag,
            FieldName::FixedIterationZReal,
            FieldName::FixedIterationZImag,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldName::Iterations => "iterations",
            FieldName::SmoothIterations => "smooth-iterations",
            FieldName::Magnitudes => "magnitudes",
            FieldName::InitialAngles => "initial-angles",
            FieldName::FinalAngles => "final-angles",
            FieldName::Distance => "distance",
            FieldName::DerivativeMagnitude => "derivative-magnitude",
            FieldName::MinTrapDistance => "trap-distance",
            FieldName::MinTrapIteration => "trap-iteration",
            FieldName::DerivativeBailout => "derivative-bailout",
            FieldName::FinalZReal => "final-z-real",
            FieldName::FinalZImag => "final-z-imag",
            FieldName::FinalDerivativeReal => "final-dz-real",
            FieldName::FinalDerivativeImag => "final-dz-imag",
            FieldName::BailoutLocationReal => "bailout-real",
            FieldName::BailoutLocationImag => "bailout-imag",
            FieldName::FixedIterationZReal => "fixed-z-real",
            FieldName::FixedIterationZImag => "fixed-z-imag",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        FieldName::all()
            .iter()
            .copied()
            .find(|f| f.name() == value)
    }
}

/// Résultat du noyau pour un pixel. Transitoire : aplati dans `FieldMaps`
/// sitôt la grille calculée.
#[derive(Clone, Copy, Debug)]
pub struct PixelResult {
    pub iteration: u32,
    pub smooth_iteration: f64,
    pub magnitude: f64,
    pub initial_angle: f64,
    pub final_angle: f64,
    pub distance: f64,
    pub derivative_magnitude: f64,
    pub trap_distance: f64,
    pub trap_iteration: u32,
    pub derivative_bailout: f64,
    pub final_z: Complex64,
    pub final_dz: Complex64,
    pub bailout_z: Complex64,
    pub fixed_z: Complex64,
}

impl Default for PixelResult {
    fn default() -> Self {
        Self {
            iteration: 0,
            smooth_iteration: 0.0,
            magnitude: 0.0,
            initial_angle: 0.0,
            final_angle: 0.0,
            distance: 0.0,
            derivative_magnitude: 0.0,
            // Aucun point d'orbite vu : distance infinie.
            trap_distance: f64::INFINITY,
            trap_iteration: 0,
            derivative_bailout: 0.0,
            final_z: Complex64::new(0.0, 0.0),
            final_dz: Complex64::new(0.0, 0.0),
            bailout_z: Complex64::new(0.0, 0.0),
            fixed_z: Complex64::new(0.0, 0.0),
        }
    }
}

/// Les 18 cartes de sortie d'un rendu, height × width en row-major
/// (la ligne 0 correspond à y_coords[0]).
#[derive(Clone, Debug)]
pub struct FieldMaps {
    pub width: usize,
    pub height: usize,
    pub iterations: Vec<u32>,
    pub smooth_iterations: Vec<f64>,
    pub magnitudes: Vec<f64>,
    pub initial_angles: Vec<f64>,
    pub final_angles: Vec<f64>,
    pub distance: Vec<f64>,
    pub derivative_magnitude: Vec<f64>,
    pub trap_distance: Vec<f64>,
    pub trap_iteration: Vec<u32>,
    pub derivative_bailout: Vec<f64>,
    pub final_z_real: Vec<f64>,
    pub final_z_imag: Vec<f64>,
    pub final_dz_real: Vec<f64>,
    pub final_dz_imag: Vec<f64>,
    pub bailout_real: Vec<f64>,
    pub bailout_imag: Vec<f64>,
    pub fixed_z_real: Vec<f64>,
    pub fixed_z_imag: Vec<f64>,
}

impl FieldMaps {
    /// Aplatit les résultats par pixel dans les 18 cartes.
    pub fn from_pixels(width: usize, height: usize, pixels: &[PixelResult]) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        let n = width * height;

        let mut maps = Self {
            width,
            height,
            iterations: Vec::with_capacity(n),
            smooth_iterations: Vec::with_capacity(n),
            magnitudes: Vec::with_capacity(n),
            initial_angles: Vec::with_capacity(n),
            final_angles: Vec::with_capacity(n),
            distance: Vec::with_capacity(n),
            derivative_magnitude: Vec::with_capacity(n),
            trap_distance: Vec::with_capacity(n),
            trap_iteration: Vec::with_capacity(n),
            derivative_bailout: Vec::with_capacity(n),
            final_z_real: Vec::with_capacity(n),
            final_z_imag: Vec::with_capacity(n),
            final_dz_real: Vec::with_capacity(n),
            final_dz_imag: Vec::with_capacity(n),
            bailout_real: Vec::with_capacity(n),
            bailout_imag: Vec::with_capacity(n),
            fixed_z_real: Vec::with_capacity(n),
            fixed_z_imag: Vec::with_capacity(n),
        };

        for p in pixels {
            maps.iterations.push(p.iteration);
            maps.smooth_iterations.push(p.smooth_iteration);
            maps.magnitudes.push(p.magnitude);
            maps.initial_angles.push(p.initial_angle);
            maps.final_angles.push(p.final_angle);
            maps.distance.push(p.distance);
            maps.derivative_magnitude.push(p.derivative_magnitude);
            maps.trap_distance.push(p.trap_distance);
            maps.trap_iteration.push(p.trap_iteration);
            maps.derivative_bailout.push(p.derivative_bailout);
            maps.final_z_real.push(p.final_z.re);
            maps.final_z_imag.push(p.final_z.im);
            maps.final_dz_real.push(p.final_dz.re);
            maps.final_dz_imag.push(p.final_dz.im);
            maps.bailout_real.push(p.bailout_z.re);
            maps.bailout_imag.push(p.bailout_z.im);
            maps.fixed_z_real.push(p.fixed_z.re);
            maps.fixed_z_imag.push(p.fixed_z.im);
        }

        maps
    }

    /// Vue f64 d'une carte (les cartes entières sont converties).
    pub fn field(&self, name: FieldName) -> Vec<f64> {
        match name {
            FieldName::Iterations => self.iterations.iter().map(|&v| v as f64).collect(),
            FieldName::SmoothIterations => self.smooth_iterations.clone(),
            FieldName::Magnitudes => self.magnitudes.clone(),
            FieldName::InitialAngles => self.initial_angles.clone(),
            FieldName::FinalAngles => self.final_angles.clone(),
            FieldName::Distance => self.distance.clone(),
            FieldName::DerivativeMagnitude => self.derivative_magnitude.clone(),
            FieldName::MinTrapDistance => self.trap_distance.clone(),
            FieldName::MinTrapIteration => {
                self.trap_iteration.iter().map(|&v| v as f64).collect()
            }
            FieldName::DerivativeBailout => self.derivative_bailout.clone(),
            FieldName::FinalZReal => self.final_z_real.clone(),
            FieldName::FinalZImag => self.final_z_imag.clone(),
            FieldName::FinalDerivativeReal => self.final_dz_real.clone(),
            FieldName::FinalDerivativeImag => self.final_dz_imag.clone(),
            FieldName::BailoutLocationReal => self.bailout_real.clone(),
            FieldName::BailoutLocationImag => self.bailout_imag.clone(),
            FieldName::FixedIterationZReal => self.fixed_z_real.clone(),
            FieldName::FixedIterationZImag => self.fixed_z_imag.clone(),
        }
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}
