//! 8-bit sRGB triple

/// An sRGB color with 8-bit channels.
///
/// This is the storage form behind [`HexColor`](super::HexColor). All
/// floating-point color math converts from and back to this type, so the
/// only place where values are rounded and clamped is [`Rgb::from_f64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from channel values on the 0..=255 scale.
    ///
    /// Values are rounded to the nearest integer and clamped, so any
    /// finite input yields a valid 8-bit color. NaN maps to 0.
    ///
    /// ```
    /// use color_harmony::Rgb;
    /// assert_eq!(Rgb::from_f64(300.2, -4.0, 127.5), Rgb::new(255, 0, 128));
    /// ```
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_to_u8(r),
            g: channel_to_u8(g),
            b: channel_to_u8(b),
        }
    }

    /// Channels normalized to 0.0..=1.0.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Channels as floats on the 0..=255 scale.
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }
}

fn channel_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_rounds_and_clamps() {
        assert_eq!(Rgb::from_f64(0.4, 0.5, 254.6), Rgb::new(0, 1, 255));
        assert_eq!(Rgb::from_f64(-12.0, 1000.0, f64::NAN), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_to_unit() {
        let [r, g, b] = Rgb::new(255, 0, 51).to_unit();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-12);
    }
}
