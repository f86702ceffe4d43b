//! Header bar: page title, signed-in user and session controls.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use earsip_api::{Role, User};
use earsip_core::{Route, ThemeMode};

use crate::message::Message;
use crate::style::widgets::{
    badge_style, danger_button_style, header_style, palette, secondary_button_style,
};

pub fn view_header(
    user: &User,
    shown: Option<Route>,
    theme_mode: ThemeMode,
) -> Element<'static, Message> {
    let p = palette::current();

    let hamburger = button(text("\u{2630}").size(18).color(p.text_secondary))
        .padding([8, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleSidebar);

    let title = text(shown.map_or("", Route::title))
        .size(18)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .color(p.text_primary);

    let role_color = match user.role {
        Role::Superadmin => p.danger,
        Role::Admin => p.warning,
        Role::User => p.info,
    };
    let role_badge = container(text(user.role.to_string()).size(11).color(p.text_on_primary))
        .padding([2, 8])
        .style(badge_style(role_color));

    let name = text(if user.name.is_empty() {
        user.username.clone()
    } else {
        user.name.clone()
    })
    .size(14)
    .color(p.text_primary);

    let theme_icon = match theme_mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    };
    let theme_btn = button(text(theme_icon).size(16).color(p.text_secondary))
        .padding([8, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleTheme);

    let logout = button(text("Keluar").size(13))
        .padding([8, 14])
        .style(danger_button_style)
        .on_press(Message::Logout);

    container(
        row![
            hamburger,
            title,
            Space::new().width(Length::Fill),
            name,
            role_badge,
            theme_btn,
            logout,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(header_style)
    .into()
}
