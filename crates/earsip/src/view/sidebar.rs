//! Sidebar view component (role-filtered navigation).

use iced::widget::{Column, button, column, container, scrollable, text};
use iced::{Element, Length};

use earsip_api::Role;
use earsip_core::Route;

use crate::message::Message;
use crate::style::widgets::{
    nav_button_selected_style, nav_button_style, palette, scrollable_style, sidebar_style,
};

/// Renders the pages `role` may open, grouped by section.
pub fn view_sidebar(role: Role, selected: Option<Route>) -> Element<'static, Message> {
    let brand = container(
        text("E-ARSIP")
            .size(22)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.primary),
                }
            }),
    )
    .padding([18, 16]);

    let mut items = Column::new().spacing(2).padding([0, 8]);
    let mut last_section = "";
    for route in visible_routes(role) {
        let section = section(route);
        if section != last_section {
            items = items.push(section_header(section));
            last_section = section;
        }
        items = items.push(view_nav_item(route, selected == Some(route)));
    }

    container(
        column![
            brand,
            scrollable(items).height(Length::Fill).style(scrollable_style),
        ],
    )
    .width(Length::Fixed(230.0))
    .height(Length::Fill)
    .style(sidebar_style)
    .into()
}

/// Navigable pages whose allow-list admits `role`.
pub fn visible_routes(role: Role) -> impl Iterator<Item = Route> {
    Route::NAVIGABLE.into_iter().filter(move |route| {
        let allowed = route.allowed_roles();
        allowed.is_empty() || allowed.contains(&role)
    })
}

const fn section(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "UTAMA",
        Route::Logbook(_) => "LOGBOOK",
        Route::Mail(_) => "INPUT SURAT",
        Route::Profile(_) => "PROFIL",
        Route::Aksi(_) => "AKSI",
        _ => "ADMINISTRASI",
    }
}

fn section_header(label: &'static str) -> Element<'static, Message> {
    container(
        text(label)
            .size(11)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_muted),
                }
            }),
    )
    .padding([12, 8])
    .into()
}

fn view_nav_item(route: Route, is_selected: bool) -> Element<'static, Message> {
    let label = text(route.title()).size(14).style(move |_theme| {
        let p = palette::current();
        text::Style {
            color: Some(if is_selected {
                p.primary
            } else {
                p.text_primary
            }),
        }
    });

    let btn_style = if is_selected {
        nav_button_selected_style
    } else {
        nav_button_style
    };

    button(label)
        .width(Length::Fill)
        .padding([9, 12])
        .style(btn_style)
        .on_press(Message::Navigate(route))
        .into()
}

#[cfg(test)]
mod tests {
    use earsip_core::routes::{AksiView, UsersView};

    use super::*;

    #[test]
    fn test_user_sees_no_admin_pages() {
        let routes: Vec<Route> = visible_routes(Role::User).collect();
        assert!(routes.contains(&Route::Dashboard));
        assert!(!routes.contains(&Route::Aksi(AksiView::Disposisi)));
        assert!(!routes.contains(&Route::Category));
    }

    #[test]
    fn test_admin_sees_queues_only() {
        let routes: Vec<Route> = visible_routes(Role::Admin).collect();
        assert!(routes.contains(&Route::Aksi(AksiView::Verifikasi)));
        assert!(!routes.contains(&Route::Users(UsersView::List)));
    }

    #[test]
    fn test_superadmin_sees_everything() {
        assert_eq!(visible_routes(Role::Superadmin).count(), Route::NAVIGABLE.len());
    }
}
