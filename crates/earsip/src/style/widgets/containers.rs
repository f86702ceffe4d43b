//! Container style functions.

use earsip_core::Level;
use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Top bar with a bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Dark green navigation column.
pub fn sidebar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.sidebar)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Page background behind the cards.
pub fn content_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Feature card.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::card(p.shadow),
        ..Default::default()
    }
}

/// Column headings of a table.
pub fn table_header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        text_color: Some(p.text_secondary),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Table row; odd rows get a faint tint.
pub fn table_row_style(odd: bool) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        container::Style {
            background: odd.then_some(Background::Color(p.surface_sunken)),
            ..Default::default()
        }
    }
}

/// Dims the page behind a dialog.
pub fn backdrop_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.backdrop)),
        ..Default::default()
    }
}

/// Modal dialog body.
pub fn dialog_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        text_color: Some(p.text_primary),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::dialog(p.shadow),
        ..Default::default()
    }
}

/// Toast colored by severity.
pub fn toast_style(level: Level) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let accent = match level {
            Level::Success => p.success,
            Level::Error => p.danger,
        };
        container::Style {
            background: Some(Background::Color(p.surface)),
            text_color: Some(p.text_primary),
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::MEDIUM.into(),
            },
            shadow: shadows::dialog(p.shadow),
            ..Default::default()
        }
    }
}

/// Small rounded label (role, status).
pub fn badge_style(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..color })),
        text_color: Some(color),
        border: Border {
            color,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}
