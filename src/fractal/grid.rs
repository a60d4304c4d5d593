/// Génère les deux tableaux 1D de coordonnées (réelles et imaginaires)
/// d'une grille carrée de `resolution` × `resolution` pixels.
///
/// Échantillonnage linéaire uniforme incluant les deux bornes, comme
/// `np.linspace`. Cas dégénéré `resolution == 1` : un seul point à la
/// borne minimale.
pub fn generate_coords(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    resolution: u32,
) -> Result<(Vec<f64>, Vec<f64>), String> {
    if resolution < 1 {
        return Err(format!("résolution invalide: {resolution} (minimum 1)"));
    }
    Ok((
        linspace(x_min, x_max, resolution),
        linspace(y_min, y_max, resolution),
    ))
}

fn linspace(start: f64, stop: f64, n: u32) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_three_points() {
        let (xs, ys) = generate_coords(-1.0, 1.0, -1.0, 1.0, 3).unwrap();
        assert_eq!(xs, vec![-1.0, 0.0, 1.0]);
        assert_eq!(ys, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_grid_endpoints_inclusive() {
        let (xs, ys) = generate_coords(-2.5, 1.5, -2.0, 2.0, 101).unwrap();
        assert_eq!(xs.len(), 101);
        assert_eq!(xs[0], -2.5);
        assert!((xs[100] - 1.5).abs() < 1e-12);
        assert_eq!(ys[0], -2.0);
        assert!((ys[100] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_degenerate_resolution() {
        let (xs, ys) = generate_coords(0.25, 0.75, -0.5, 0.5, 1).unwrap();
        assert_eq!(xs, vec![0.25]);
        assert_eq!(ys, vec![-0.5]);
    }

    #[test]
    fn test_grid_rejects_zero_resolution() {
        assert!(generate_coords(0.0, 1.0, 0.0, 1.0, 0).is_err());
    }
}
