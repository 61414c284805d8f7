//! Per-mode color sequence generation.
//!
//! All arithmetic happens in HSL on the base color. Hues wrap modulo 360;
//! saturation and lightness are clamped per mode.

use super::mode::HarmonyMode;
use crate::color::{hex_to_hsl, HexColor, Hsl};

/// The golden angle in degrees, 360 * (1 - 1/phi).
pub const GOLDEN_ANGLE: f64 = 137.508;

/// Generate `count` colors from `base` using `mode`.
///
/// The sequence is deterministic: the same inputs always give the same
/// colors. Complementary and triadic modes start with `base` itself.
///
/// ```
/// use color_harmony::{harmony_colors, HarmonyMode, HexColor};
///
/// let base: HexColor = "#FF0000".parse().unwrap();
/// let colors = harmony_colors(base, HarmonyMode::Triadic, 3);
/// let hex: Vec<String> = colors.iter().map(ToString::to_string).collect();
/// assert_eq!(hex, ["#FF0000", "#00FF00", "#0000FF"]);
/// ```
pub fn harmony_colors(base: HexColor, mode: HarmonyMode, count: usize) -> Vec<HexColor> {
    let hsl = hex_to_hsl(base);

    let mut colors = match mode {
        HarmonyMode::GoldenRatio => golden_ratio(hsl, count),
        HarmonyMode::Analogous => analogous(hsl, count),
        HarmonyMode::Complementary => complementary(base, hsl, count),
        HarmonyMode::Triadic => triadic(base, hsl, count),
        HarmonyMode::Monochromatic => monochromatic(hsl, count),
    };
    colors.truncate(count);
    colors
}

fn to_hex(hsl: Hsl) -> HexColor {
    HexColor::from_rgb(hsl.into())
}

fn golden_ratio(base: Hsl, count: usize) -> Vec<HexColor> {
    (0..count)
        .map(|i| {
            let h = (base.h + i as f64 * GOLDEN_ANGLE).rem_euclid(360.0);
            let s_shift = if i % 2 == 0 { 0.02 } else { -0.02 };
            let l_shift = if i % 3 == 0 { 0.045 } else { -0.03 };
            to_hex(Hsl::new(
                h,
                (base.s + s_shift).clamp(0.2, 0.95),
                (base.l + l_shift).clamp(0.15, 0.9),
            ))
        })
        .collect()
}

fn analogous(base: Hsl, count: usize) -> Vec<HexColor> {
    let n = count as f64;
    (0..count)
        .map(|i| {
            let h = (base.h + 30.0 * i as f64 - 15.0 * n).rem_euclid(360.0);
            to_hex(base.with_hue(h))
        })
        .collect()
}

fn complementary(base_hex: HexColor, base: Hsl, count: usize) -> Vec<HexColor> {
    let comp_h = (base.h + 180.0).rem_euclid(360.0);
    let mut colors = vec![base_hex, to_hex(base.with_hue(comp_h))];

    for i in 2..count {
        let even = i % 2 == 0;
        let h = if even { base.h } else { comp_h };
        let sign = if even { 1.0 } else { -1.0 };
        let l = (base.l + 0.15 * i as f64 * sign).clamp(0.1, 0.9);
        colors.push(to_hex(Hsl::new(h, base.s, l)));
    }
    colors
}

fn triadic(base_hex: HexColor, base: Hsl, count: usize) -> Vec<HexColor> {
    let root = |k: usize| (base.h + 120.0 * k as f64).rem_euclid(360.0);
    let mut colors = vec![
        base_hex,
        to_hex(base.with_hue(root(1))),
        to_hex(base.with_hue(root(2))),
    ];

    for i in 3..count {
        let l = (base.l + 0.1 * i as f64).clamp(0.2, 0.8);
        colors.push(to_hex(Hsl::new(root(i % 3), base.s, l)));
    }
    colors
}

fn monochromatic(base: Hsl, count: usize) -> Vec<HexColor> {
    if count <= 1 {
        return vec![to_hex(base)];
    }
    let step = 0.85 / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let l = (0.1 + i as f64 * step).clamp(0.1, 0.95);
            to_hex(base.with_lightness(l))
        })
        .collect()
}
