//! Dark/light theme state and the colours derived from it.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 8-bit sRGB colour with alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub text: Rgba,
    pub muted: Rgba,
    pub border: Rgba,
    pub nav_background: Rgba,
    pub progress_fill: Rgba,
    pub blob_tint: Rgba,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class applied to the document root.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    /// Label for the toggle button: the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light",
            Theme::Light => "Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Rgba::rgb(0x0f, 0x0f, 0x12),
                text: Rgba::rgb(0xff, 0xff, 0xff),
                muted: Rgba::rgba(0xff, 0xff, 0xff, 0.8),
                border: Rgba::rgba(0xff, 0xff, 0xff, 0.1),
                nav_background: Rgba::rgba(0x00, 0x00, 0x00, 0.3),
                progress_fill: Rgba::rgb(0xff, 0xff, 0xff),
                blob_tint: Rgba::rgba(0x63, 0x66, 0xf1, 0.25),
            },
            Theme::Light => Palette {
                background: Rgba::rgb(0xff, 0xff, 0xff),
                text: Rgba::rgb(0x00, 0x00, 0x00),
                muted: Rgba::rgba(0x00, 0x00, 0x00, 0.8),
                border: Rgba::rgb(0xd1, 0xd5, 0xdb),
                nav_background: Rgba::rgba(0xff, 0xff, 0xff, 0.6),
                progress_fill: Rgba::rgb(0x00, 0x00, 0x00),
                blob_tint: Rgba::rgba(0x93, 0xc5, 0xfd, 0.35),
            },
        }
    }
}

/// Page-view theme state. Starts dark; only `toggle` mutates it.
#[derive(Clone, Debug, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }
}
