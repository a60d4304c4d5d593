use std::path::PathBuf;

use clap::Parser;

use frxp::color::{
    colorize_with_palette, generate_colors, normalize_channels, normalize_field, ColorScheme,
    PaletteId,
};
use frxp::fractal::{generate_coords, FieldName, FractalFamily, FractalParams, TrapSpec};
use frxp::io::png::save_rgb_png;
use frxp::render::render_escape_time;

/// Utilitaire CLI pour générer des champs fractals escape-time.
///
/// Exemple d'utilisation :
///   frxp --family julia --c-real 0.36228 --c-imag -0.0777 --resolution 1024 --output julia.png
#[derive(Parser, Debug)]
#[command(
    name = "frxp",
    about = "Générateur de champs fractals (Mandelbrot, Julia) en ligne de commande",
    version
)]
struct Cli {
    /// Famille de fractale (mandelbrot, julia, multi-mandelbrot, multi-julia)
    #[arg(long, default_value = "mandelbrot")]
    family: String,

    /// Puissance p de z^p + c (entière ou réelle)
    #[arg(long)]
    power: Option<f64>,

    /// Partie réelle de la constante c (familles Julia)
    #[arg(long)]
    c_real: Option<f64>,

    /// Partie imaginaire de la constante c (familles Julia)
    #[arg(long)]
    c_imag: Option<f64>,

    /// Résolution de la grille carrée en pixels
    #[arg(long, default_value_t = 800)]
    resolution: u32,

    /// Centre X du plan complexe (sinon valeur par défaut de la famille)
    #[arg(long)]
    x_center: Option<f64>,

    /// Centre Y du plan complexe
    #[arg(long)]
    y_center: Option<f64>,

    /// Étendue X du plan complexe
    #[arg(long)]
    x_span: Option<f64>,

    /// Étendue Y du plan complexe
    #[arg(long)]
    y_span: Option<f64>,

    /// Coordonnée minimale X (prioritaire sur centre/étendue)
    #[arg(long)]
    xmin: Option<f64>,

    /// Coordonnée maximale X
    #[arg(long)]
    xmax: Option<f64>,

    /// Coordonnée minimale Y
    #[arg(long)]
    ymin: Option<f64>,

    /// Coordonnée maximale Y
    #[arg(long)]
    ymax: Option<f64>,

    /// Nombre maximal d'itérations
    #[arg(long)]
    iterations: Option<u32>,

    /// Rayon d'échappement (bailout)
    #[arg(long)]
    bailout: Option<f64>,

    /// Itération à laquelle capturer z dans les cartes « fixed iteration »
    #[arg(long)]
    fixed_iteration: Option<u32>,

    /// Orbit trap : none, point:x,y, line:x1,y1,x2,y2, circle:x,y,r,
    /// square:x,y,side, triangle:x1,y1,x2,y2,x3,y3
    #[arg(long)]
    trap: Option<String>,

    /// Carte à coloriser en mode palette (ex. iterations, smooth-iterations,
    /// distance, trap-distance, final-angles...)
    #[arg(long, default_value = "smooth-iterations")]
    field: String,

    /// Palette de couleurs en mode palette (0=fire, 1=ocean, 2=rainbow,
    /// 3=plasma, 4=ice)
    #[arg(long, default_value_t = 3)]
    palette: u8,

    /// Répétitions du gradient de couleur en mode palette
    #[arg(long, default_value_t = 2)]
    color_repeat: u32,

    /// Schéma LCH (ima, iam, mia, mai, aim, ami) : active le mode LCH
    /// à trois canaux au lieu du mode palette
    #[arg(long)]
    scheme: Option<String>,

    /// Fichier JSON de paramètres (les flags CLI restent prioritaires)
    #[arg(long, value_name = "FICHIER")]
    params: Option<PathBuf>,

    /// Fichier de sortie PNG
    #[arg(long, value_name = "FICHIER")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let family = match FractalFamily::from_cli_name(&cli.family) {
        Some(f) => f,
        None => {
            eprintln!(
                "Famille de fractale invalide: '{}' (attendu: mandelbrot, julia, multi-mandelbrot, multi-julia)",
                cli.family
            );
            std::process::exit(1);
        }
    };

    // Paramètres de base : fichier JSON si fourni, sinon défauts de la famille.
    let mut params = match &cli.params {
        Some(path) => match load_params_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Erreur de lecture du fichier de paramètres: {e}");
                std::process::exit(1);
            }
        },
        None => FractalParams::default_for_family(family),
    };
    params.family = family;

    // Override des paramètres du noyau si fournis.
    if let Some(power) = cli.power {
        if power < 0.0 || !power.is_finite() {
            eprintln!("Puissance invalide: {power} (attendu un réel fini >= 0)");
            std::process::exit(1);
        }
        params.power = power;
    }
    if let Some(re) = cli.c_real {
        params.seed.re = re;
    }
    if let Some(im) = cli.c_imag {
        params.seed.im = im;
    }
    if let Some(iters) = cli.iterations {
        if iters == 0 {
            eprintln!("Nombre d'itérations invalide: 0 (attendu >= 1)");
            std::process::exit(1);
        }
        params.iteration_max = iters;
    }
    if let Some(bailout) = cli.bailout {
        if bailout <= 0.0 || !bailout.is_finite() {
            eprintln!("Bailout invalide: {bailout} (attendu > 0)");
            std::process::exit(1);
        }
        params.bailout = bailout;
    }
    if let Some(fixed) = cli.fixed_iteration {
        params.fixed_iteration = fixed;
    }
    if let Some(spec) = &cli.trap {
        match TrapSpec::from_cli_spec(spec) {
            Ok(trap) => params.trap = trap,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    // Précondition du noyau : c fini pour Julia.
    if params.family == FractalFamily::Julia
        && (!params.seed.re.is_finite() || !params.seed.im.is_finite())
    {
        eprintln!(
            "Constante c invalide pour Julia: ({}, {})",
            params.seed.re, params.seed.im
        );
        std::process::exit(1);
    }

    // Fenêtre de vue : défauts de la famille, recentrage éventuel,
    // bornes min/max prioritaires.
    let mut viewport = FractalParams::default_viewport(params.family);
    if let Some(cx) = cli.x_center {
        viewport.x_center = cx;
    }
    if let Some(cy) = cli.y_center {
        viewport.y_center = cy;
    }
    if let Some(sx) = cli.x_span {
        viewport.x_span = sx;
    }
    if let Some(sy) = cli.y_span {
        viewport.y_span = sy;
    }
    let (mut x_min, mut x_max, mut y_min, mut y_max) = viewport.to_minmax();
    if let Some(v) = cli.xmin {
        x_min = v;
    }
    if let Some(v) = cli.xmax {
        x_max = v;
    }
    if let Some(v) = cli.ymin {
        y_min = v;
    }
    if let Some(v) = cli.ymax {
        y_max = v;
    }

    let (xs, ys) = match generate_coords(x_min, x_max, y_min, y_max, cli.resolution) {
        Ok(coords) => coords,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Calcul escape-time.
    let maps = render_escape_time(&params, &xs, &ys);

    // Colorisation : mode LCH à trois canaux si un schéma est demandé,
    // sinon palette sur la carte choisie.
    let buffer = match &cli.scheme {
        Some(name) => {
            let scheme = match ColorScheme::from_cli_name(name) {
                Some(s) => s,
                None => {
                    eprintln!(
                        "Schéma LCH invalide: '{name}'. Options: ima, iam, mia, mai, aim, ami"
                    );
                    std::process::exit(1);
                }
            };
            let (iterations, magnitudes, angles) = normalize_channels(
                &maps.field(FieldName::Iterations),
                &maps.field(FieldName::Magnitudes),
                &maps.field(FieldName::FinalAngles),
                params.iteration_max,
            );
            generate_colors(&iterations, &magnitudes, &angles, maps.width, scheme)
        }
        None => {
            let field_name = match FieldName::from_name(&cli.field) {
                Some(f) => f,
                None => {
                    eprintln!("Carte inconnue: '{}'", cli.field);
                    std::process::exit(1);
                }
            };
            let normalized = normalize_field(
                &maps.field(field_name),
                field_name,
                params.iteration_max,
                params.fixed_iteration,
            );
            colorize_with_palette(
                &normalized,
                maps.width,
                PaletteId::from_u8(cli.palette),
                cli.color_repeat.max(1),
            )
        }
    };

    // Export PNG (grille carrée : largeur = hauteur = résolution).
    if let Err(e) = save_rgb_png(buffer, cli.resolution, cli.resolution, &cli.output) {
        eprintln!("Erreur lors de l'écriture du PNG: {e}");
        std::process::exit(1);
    }
}

fn load_params_file(path: &std::path::Path) -> Result<FractalParams, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&contents).map_err(|e| e.to_string())
}
