use std::fmt;

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent black; the value of every freshly allocated pixel.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
}

/// Opaque named colors.
#[allow(missing_docs)]
impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const LIME: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const SILVER: Self = Self::rgb(192, 192, 192);
    pub const MAROON: Self = Self::rgb(128, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const NAVY: Self = Self::rgb(0, 0, 128);
    pub const OLIVE: Self = Self::rgb(128, 128, 0);
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    pub const TEAL: Self = Self::rgb(0, 128, 128);
}

impl Color {
    /// Packs four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Builds a color from integer channels, keeping the low 8 bits of each.
    ///
    /// Out-of-range values wrap rather than saturate: 256 becomes 0 and -1
    /// becomes 255.
    #[must_use]
    pub const fn from_i32_channels(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self::rgba(r as u8, g as u8, b as u8, a as u8)
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Alpha channel; 0 is fully transparent.
    #[must_use]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The same color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.0 & 0x00FF_FFFF | (a as u32) << 24)
    }

    /// Channels in `[r, g, b, a]` order.
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Source-over composite of `self` onto `dst`.
    ///
    /// A transparent source leaves `dst` as is; an opaque source, or a fully
    /// transparent destination, is copied over. Otherwise each channel is
    /// `src*sa/255 + dst*da*(255-sa)/65025` and alpha is
    /// `sa + (da*(255-sa) >> 8)`, all in integer arithmetic.
    #[must_use]
    pub const fn over(self, dst: Self) -> Self {
        let sa = self.a() as u32;
        let da = dst.a() as u32;
        if sa == 0 {
            return dst;
        }
        if sa == 255 || da == 0 {
            return self;
        }

        Self::rgba(
            mix(self.r(), dst.r(), sa, da),
            mix(self.g(), dst.g(), sa, da),
            mix(self.b(), dst.b(), sa, da),
            (sa + (da * (255 - sa) >> 8)) as u8,
        )
    }
}

const fn mix(src: u8, dst: u8, sa: u32, da: u32) -> u8 {
    (src as u32 * sa / 255 + dst as u32 * da * (255 - sa) / 65025) as u8
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
