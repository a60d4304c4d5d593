use rayon::prelude::*;

/// Identifiants des palettes en dégradé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteId {
    Fire = 0,
    Ocean = 1,
    Rainbow = 2,
    Plasma = 3,
    Ice = 4,
}

impl PaletteId {
    pub fn from_u8(id: u8) -> Self {
        match id {
            0 => PaletteId::Fire,
            1 => PaletteId::Ocean,
            2 => PaletteId::Rainbow,
            4 => PaletteId::Ice,
            _ => PaletteId::Plasma,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct GradientStop {
    position: f64, // [0.0, 1.0]
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Clone, Copy, Debug)]
struct Gradient {
    _name: &'static str,
    stops: &'static [GradientStop],
}

const FIRE_STOPS: [GradientStop; 4] = [
    GradientStop { position: 0.00, r: 0, g: 0, b: 0 },       // Black
    GradientStop { position: 0.33, r: 255, g: 0, b: 0 },     // Red
    GradientStop { position: 0.66, r: 255, g: 255, b: 0 },   // Yellow
    GradientStop { position: 1.00, r: 255, g: 255, b: 255 }, // White
];

const OCEAN_STOPS: [GradientStop; 4] = [
    GradientStop { position: 0.00, r: 0, g: 0, b: 0 },       // Black
    GradientStop { position: 0.33, r: 0, g: 0, b: 255 },     // Blue
    GradientStop { position: 0.66, r: 0, g: 255, b: 255 },   // Cyan
    GradientStop { position: 1.00, r: 255, g: 255, b: 255 }, // White
];

const RAINBOW_STOPS: [GradientStop; 7] = [
    GradientStop { position: 0.000, r: 255, g: 0, b: 0 },   // Red
    GradientStop { position: 0.166, r: 255, g: 165, b: 0 }, // Orange
    GradientStop { position: 0.333, r: 255, g: 255, b: 0 }, // Yellow
    GradientStop { position: 0.500, r: 0, g: 255, b: 0 },   // Green
    GradientStop { position: 0.666, r: 0, g: 255, b: 255 }, // Cyan
    GradientStop { position: 0.833, r: 0, g: 0, b: 255 },   // Blue
    GradientStop { position: 1.000, r: 180, g: 0, b: 255 }, // Violet
];

const PLASMA_STOPS: [GradientStop; 4] = [
    GradientStop { position: 0.00, r: 13, g: 8, b: 135 },   // Deep Blue
    GradientStop { position: 0.33, r: 126, g: 3, b: 168 },  // Violet
    GradientStop { position: 0.66, r: 240, g: 87, b: 100 }, // Pink/Coral
    GradientStop { position: 1.00, r: 240, g: 230, b: 50 }, // Yellow/Orange
];

const ICE_STOPS: [GradientStop; 4] = [
    GradientStop { position: 0.00, r: 255, g: 255, b: 255 }, // White
    GradientStop { position: 0.33, r: 150, g: 230, b: 255 }, // Light Cyan
    GradientStop { position: 0.66, r: 30, g: 90, b: 200 },   // Deep Blue
    GradientStop { position: 1.00, r: 5, g: 10, b: 30 },     // Near Black
];

const FIRE: Gradient = Gradient { _name: "SmoothFire", stops: &FIRE_STOPS };
const OCEAN: Gradient = Gradient { _name: "SmoothOcean", stops: &OCEAN_STOPS };
const RAINBOW: Gradient = Gradient { _name: "SmoothRainbow", stops: &RAINBOW_STOPS };
const PLASMA: Gradient = Gradient { _name: "SmoothPlasma", stops: &PLASMA_STOPS };
const ICE: Gradient = Gradient { _name: "SmoothIce", stops: &ICE_STOPS };

fn palette_for(id: PaletteId) -> Gradient {
    match id {
        PaletteId::Fire => FIRE,
        PaletteId::Ocean => OCEAN,
        PaletteId::Rainbow => RAINBOW,
        PaletteId::Plasma => PLASMA,
        PaletteId::Ice => ICE,
    }
}

fn gradient_interpolate(g: Gradient, mut t: f64) -> (u8, u8, u8) {
    let stops = g.stops;

    if !t.is_finite() {
        t = 0.0;
    }
    t = t.clamp(0.0, 1.0);

    let eps = 1e-9;

    if t <= stops[0].position + eps {
        let s = stops[0];
        return (s.r, s.g, s.b);
    }
    let last = stops[stops.len() - 1];
    if t >= last.position - eps {
        return (last.r, last.g, last.b);
    }

    // Trouver le segment contenant t
    for w in stops.windows(2) {
        let a = w[0];
        let b = w[1];
        if t >= a.position - eps && t < b.position + eps {
            let denom = b.position - a.position;
            let factor = if denom.abs() < f64::EPSILON {
                0.0
            } else {
                (t - a.position) / denom
            };
            let lerp = |u: u8, v: u8| -> u8 {
                let u = u as f64;
                let v = v as f64;
                (u + factor * (v - u)).clamp(0.0, 255.0) as u8
            };
            return (lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b));
        }
    }

    (last.r, last.g, last.b)
}

/// Colorise une carte normalisée [0, 1] avec une palette en dégradé.
///
/// `color_repeat` répète le dégradé le long de la carte : la position
/// dans le dégradé est la partie fractionnaire de v × repeat. Renvoie
/// un buffer RGB8 row-major, colorisation parallélisée par lignes.
pub fn colorize_with_palette(
    field: &[f64],
    width: usize,
    palette: PaletteId,
    color_repeat: u32,
) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    let gradient = palette_for(palette);
    let repeat = color_repeat.max(1) as f64;
    let height = field.len() / width;

    (0..height)
        .into_par_iter()
        .flat_map(|y| {
            (0..width)
                .flat_map(|x| {
                    let v = field[y * width + x];
                    // v = 1.0 exact tombe en fin de dégradé, pas au début
                    // du cycle suivant.
                    let t = if v >= 1.0 { 1.0 } else { (v * repeat).fract() };
                    let (r, g, b) = gradient_interpolate(gradient, t);
                    vec![r, g, b]
                })
                .collect::<Vec<u8>>()
        })
        .collect()
}
