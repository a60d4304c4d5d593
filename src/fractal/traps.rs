use serde::{Deserialize, Serialize};

/// Forme géométrique d'orbit trap.
///
/// Le noyau suit la distance minimale entre l'orbite et la forme ; cette
/// distance (et l'itération où elle est atteinte) alimente les cartes
/// `MinTrapDistance` / `MinTrapIteration`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TrapSpec {
    /// Pas de trap (les cartes associées restent à leurs valeurs initiales).
    None,
    /// Distance à un point.
    Point { x: f64, y: f64 },
    /// Distance à un segment de droite.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Distance au bord d'un cercle : | |z - centre| - rayon |.
    Circle { x: f64, y: f64, radius: f64 },
    /// Distance au bord d'un carré axis-aligné (dépassement par axe).
    Square { x: f64, y: f64, side: f64 },
    /// Distance minimale aux trois arêtes d'un triangle.
    Triangle {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
}

impl TrapSpec {
    pub fn is_none(&self) -> bool {
        matches!(self, TrapSpec::None)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrapSpec::None => "None",
            TrapSpec::Point { .. } => "Point",
            TrapSpec::Line { .. } => "Line",
            TrapSpec::Circle { .. } => "Circle",
            TrapSpec::Square { .. } => "Square",
            TrapSpec::Triangle { .. } => "Triangle",
        }
    }

    /// Distance du point (re, im) à la forme.
    #[inline]
    pub fn distance(&self, re: f64, im: f64) -> f64 {
        match *self {
            TrapSpec::None => f64::INFINITY,
            TrapSpec::Point { x, y } => {
                let dx = re - x;
                let dy = im - y;
                (dx * dx + dy * dy).sqrt()
            }
            TrapSpec::Line { x1, y1, x2, y2 } => segment_distance(re, im, x1, y1, x2, y2),
            TrapSpec::Circle { x, y, radius } => {
                let dx = re - x;
                let dy = im - y;
                ((dx * dx + dy * dy).sqrt() - radius).abs()
            }
            TrapSpec::Square { x, y, side } => {
                let half = side / 2.0;
                let dx = ((re - x).abs() - half).max(0.0);
                let dy = ((im - y).abs() - half).max(0.0);
                (dx * dx + dy * dy).sqrt()
            }
            TrapSpec::Triangle {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => {
                let d1 = segment_distance(re, im, x1, y1, x2, y2);
                let d2 = segment_distance(re, im, x2, y2, x3, y3);
                let d3 = segment_distance(re, im, x3, y3, x1, y1);
                d1.min(d2).min(d3)
            }
        }
    }

    /// Parse une spécification CLI de la forme `shape:v1,v2,...`.
    ///
    /// Syntaxes acceptées :
    ///   `none`, `point:x,y`, `line:x1,y1,x2,y2`, `circle:x,y,r`,
    ///   `square:x,y,side`, `triangle:x1,y1,x2,y2,x3,y3`.
    pub fn from_cli_spec(value: &str) -> Result<Self, String> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            return Ok(TrapSpec::None);
        }
        let (shape, args) = value
            .split_once(':')
            .ok_or_else(|| format!("spécification de trap invalide: '{value}'"))?;
        let vals: Result<Vec<f64>, _> = args.split(',').map(|s| s.trim().parse::<f64>()).collect();
        let vals = vals.map_err(|_| format!("valeurs numériques invalides dans '{args}'"))?;

        let expect = |n: usize| -> Result<(), String> {
            if vals.len() == n {
                Ok(())
            } else {
                Err(format!(
                    "'{shape}' attend {n} valeurs, {} fournies",
                    vals.len()
                ))
            }
        };

        match shape.trim().to_lowercase().as_str() {
            "point" => {
                expect(2)?;
                Ok(TrapSpec::Point {
                    x: vals[0],
                    y: vals[1],
                })
            }
            "line" => {
                expect(4)?;
                Ok(TrapSpec::Line {
                    x1: vals[0],
                    y1: vals[1],
                    x2: vals[2],
                    y2: vals[3],
                })
            }
            "circle" => {
                expect(3)?;
                Ok(TrapSpec::Circle {
                    x: vals[0],
                    y: vals[1],
                    radius: vals[2],
                })
            }
            "square" => {
                expect(3)?;
                Ok(TrapSpec::Square {
                    x: vals[0],
                    y: vals[1],
                    side: vals[2],
                })
            }
            "triangle" => {
                expect(6)?;
                Ok(TrapSpec::Triangle {
                    x1: vals[0],
                    y1: vals[1],
                    x2: vals[2],
                    y2: vals[3],
                    x3: vals[4],
                    y3: vals[5],
                })
            }
            other => Err(format!("forme de trap inconnue: '{other}'")),
        }
    }
}

/// Distance minimale du point (x, y) au segment [(x1,y1), (x2,y2)].
///
/// Projection du point sur la droite support, paramètre t borné à [0, 1]
/// pour rester sur le segment. Un segment dégénéré (longueur nulle) se
/// réduit à la distance au point.
#[inline]
pub fn segment_distance(x: f64, y: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let seg_len_sq = dx * dx + dy * dy;
    if seg_len_sq == 0.0 {
        let ex = x - x1;
        let ey = y - y1;
        return (ex * ex + ey * ey).sqrt();
    }

    let t = ((x - x1) * dx + (y - y1) * dy) / seg_len_sq;
    let (closest_x, closest_y) = if t < 0.0 {
        (x1, y1)
    } else if t > 1.0 {
        (x2, y2)
    } else {
        (x1 + t * dx, y1 + t * dy)
    };

    let ex = x - closest_x;
    let ey = y - closest_y;
    (ex * ex + ey * ey).sqrt()
}
