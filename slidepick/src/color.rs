use palette::{Clamp, FromColor, IntoColor, Oklch, Srgb};

/// An 8-bit sRGB colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build a colour from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Build a colour from OKLCH components (lightness, chroma, hue in degrees).
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        let srgb = Srgb::from_color(Oklch::new(l, c, h)).clamp();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Self::rgb(r, g, b)
    }

    /// Interpolate towards `other` in OKLCH space, taking the shortest hue path.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (from_l, from_c, from_h) = self.to_oklch();
        let (to_l, to_c, to_h) = other.to_oklch();

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;

        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        let alpha = self.a as f32 + (other.a as f32 - self.a as f32) * t;
        Color {
            a: alpha.round() as u8,
            ..Color::oklch(l, c, h)
        }
    }

    fn to_oklch(self) -> (f32, f32, f32) {
        let srgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let oklch: Oklch = srgb.into_color();
        (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
    }
}
