//! Shadow presets and corner radii.

use iced::{Color, Shadow, Vector};

/// Corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 6.0;
    pub const LARGE: f32 = 10.0;
    pub const PILL: f32 = 9999.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

pub const fn card(color: Color) -> Shadow {
    Shadow {
        color,
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    }
}

pub const fn dialog(color: Color) -> Shadow {
    Shadow {
        color,
        offset: Vector::new(0.0, 8.0),
        blur_radius: 24.0,
    }
}

/// Colored halo for the primary button on hover.
pub const fn glow(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.35),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 10.0,
    }
}
