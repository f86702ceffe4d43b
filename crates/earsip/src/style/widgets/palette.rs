//! Color palette with light and dark variants.
//!
//! The active palette is process-wide; style functions read it through
//! [`current`] so they keep the `fn(&Theme, Status) -> Style` shape iced expects.

use std::sync::{LazyLock, RwLock};

use earsip_core::ThemeMode;
use iced::Color;

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Brand
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surfaces
    pub surface: Color,
    pub surface_sunken: Color,
    pub background: Color,
    pub sidebar: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Status
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // States
    pub selected: Color,
    pub hover: Color,

    // Borders
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadows and overlays
    pub shadow: Color,
    pub backdrop: Color,
}

impl Palette {
    /// Light palette: white cards on a pale green-grey background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.05, 0.52, 0.36),
            primary_light: Color::from_rgb(0.22, 0.64, 0.48),
            primary_dark: Color::from_rgb(0.02, 0.40, 0.27),

            surface: Color::WHITE,
            surface_sunken: Color::from_rgb(0.96, 0.97, 0.97),
            background: Color::from_rgb(0.95, 0.96, 0.96),
            sidebar: Color::from_rgb(0.04, 0.30, 0.22),

            text_primary: Color::from_rgb(0.10, 0.13, 0.15),
            text_secondary: Color::from_rgb(0.38, 0.43, 0.47),
            text_muted: Color::from_rgb(0.58, 0.62, 0.66),
            text_on_primary: Color::WHITE,

            success: Color::from_rgb(0.13, 0.63, 0.35),
            warning: Color::from_rgb(0.93, 0.62, 0.05),
            danger: Color::from_rgb(0.86, 0.21, 0.27),
            info: Color::from_rgb(0.13, 0.47, 0.85),

            selected: Color::from_rgb(0.89, 0.96, 0.92),
            hover: Color::from_rgb(0.95, 0.97, 0.96),

            border_subtle: Color::from_rgb(0.90, 0.91, 0.92),
            border_medium: Color::from_rgb(0.82, 0.84, 0.86),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
        }
    }

    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.27, 0.80, 0.58),
            primary_light: Color::from_rgb(0.40, 0.88, 0.68),
            primary_dark: Color::from_rgb(0.18, 0.64, 0.46),

            surface: Color::from_rgb(0.13, 0.14, 0.15),
            surface_sunken: Color::from_rgb(0.10, 0.11, 0.12),
            background: Color::from_rgb(0.08, 0.09, 0.10),
            sidebar: Color::from_rgb(0.06, 0.12, 0.10),

            text_primary: Color::from_rgb(0.92, 0.93, 0.94),
            text_secondary: Color::from_rgb(0.66, 0.69, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.57),
            text_on_primary: Color::from_rgb(0.05, 0.08, 0.07),

            success: Color::from_rgb(0.30, 0.85, 0.52),
            warning: Color::from_rgb(1.0, 0.78, 0.25),
            danger: Color::from_rgb(1.0, 0.40, 0.44),
            info: Color::from_rgb(0.40, 0.70, 1.0),

            selected: Color::from_rgb(0.12, 0.22, 0.18),
            hover: Color::from_rgb(0.16, 0.17, 0.18),

            border_subtle: Color::from_rgb(0.21, 0.22, 0.24),
            border_medium: Color::from_rgb(0.29, 0.30, 0.33),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.60),
        }
    }

    /// Palette for a theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

static CURRENT: LazyLock<RwLock<Palette>> = LazyLock::new(|| RwLock::new(Palette::light()));

/// Switches the global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Copy of the active palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}
