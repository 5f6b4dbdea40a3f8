use palette::{IntoColor, Oklab, Oklch, Srgb};

/// An sRGB triple, the form colours take on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    /// Lightness 0..=1, chroma, hue in degrees.
    Oklch { l: f32, c: f32, h: f32 },
    /// Named palette entry, looked up when a style is computed.
    Var(String),
    /// `amount` of `top` laid over `base`, blended in OKLab.
    Mix {
        base: Box<Color>,
        top: Box<Color>,
        amount: f32,
    },
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Lay `amount` (clamped to 0..=1) of `top` over this colour.
    pub fn mix(self, top: Color, amount: f32) -> Self {
        Self::Mix {
            base: Box::new(self),
            top: Box::new(top),
            amount: amount.clamp(0.0, 1.0),
        }
    }

    /// True for colours that need no palette to display.
    pub fn is_concrete(&self) -> bool {
        matches!(self, Self::Rgb(_) | Self::Oklch { .. })
    }

    /// sRGB of a concrete colour. Variables and mixes map to black until
    /// they have been resolved against a palette.
    pub fn to_rgb(&self) -> Rgb {
        self.to_oklab().map_or(Rgb::BLACK, oklab_to_rgb)
    }

    fn to_oklab(&self) -> Option<Oklab> {
        match self {
            Self::Rgb(rgb) => Some(
                Srgb::new(rgb.r, rgb.g, rgb.b)
                    .into_format::<f32>()
                    .into_color(),
            ),
            Self::Oklch { l, c, h } => Some(Oklch::new(*l, *c, *h).into_color()),
            Self::Var(_) | Self::Mix { .. } => None,
        }
    }

    /// Blend two concrete colours. A non-concrete side counts as black.
    pub(crate) fn blend(&self, top: &Color, amount: f32) -> Rgb {
        let black = Oklab::new(0.0, 0.0, 0.0);
        let from = self.to_oklab().unwrap_or(black);
        let to = top.to_oklab().unwrap_or(black);
        let lerp = |a: f32, b: f32| a + (b - a) * amount;

        oklab_to_rgb(Oklab::new(
            lerp(from.l, to.l),
            lerp(from.a, to.a),
            lerp(from.b, to.b),
        ))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

fn oklab_to_rgb(lab: Oklab) -> Rgb {
    let srgb: Srgb = lab.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}
