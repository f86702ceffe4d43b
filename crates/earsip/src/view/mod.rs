//! View components for the application.

mod category;
mod dashboard;
mod form;
mod header;
mod list;
mod organization;
mod sidebar;
mod status;
mod toasts;

use iced::widget::{column, container, row};
use iced::{Element, Length};

use earsip_api::User;
use earsip_core::{Route, ThemeMode};

use crate::message::Message;
use crate::model::{Resource, Screen, ScreenMessage};
use crate::model::{ListCard, ListMessage};
use crate::style::widgets::content_style;

pub use status::view_loading;
pub use toasts::with_toasts;

/// Page shell (sidebar + header + content) around the current screen.
pub fn view_page<'a>(
    screen: &'a Screen,
    user: Option<&'a User>,
    shown: Option<Route>,
    generation: u64,
    sidebar_visible: bool,
    theme_mode: ThemeMode,
) -> Element<'a, Message> {
    let on = move |m: ScreenMessage| Message::Screen(generation, m);
    let role = user.map_or(earsip_api::Role::User, |u| u.role);

    let content: Element<'a, Message> = match screen {
        Screen::Loading => return view_loading(),
        Screen::Login(form) => return status::view_login(form, generation),
        Screen::Unauthorized => status::view_unauthorized(),
        Screen::Dashboard(card) => dashboard::view_dashboard(card, role, generation),
        Screen::Logbook(card) => list_page(card, role, move |m| on(ScreenMessage::Logbook(m))),
        Screen::Inbox(card) => list_page(card, role, move |m| on(ScreenMessage::Inbox(m))),
        Screen::Outbox(card) => list_page(card, role, move |m| on(ScreenMessage::Outbox(m))),
        Screen::Dispositions(card) => {
            list_page(card, role, move |m| on(ScreenMessage::Dispositions(m)))
        }
        Screen::Verifications(card) => {
            list_page(card, role, move |m| on(ScreenMessage::Verifications(m)))
        }
        Screen::Users(card) => list_page(card, role, move |m| on(ScreenMessage::Users(m))),
        Screen::Form(card) => {
            form::view_form_card(&card.model).map(move |m| on(ScreenMessage::Form(m)))
        }
        Screen::Organization(card) => {
            organization::view_organization(card).map(move |m| on(ScreenMessage::Organization(m)))
        }
        Screen::Category(card) => {
            category::view_category(card).map(move |m| on(ScreenMessage::Category(m)))
        }
    };

    let main = container(content)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(content_style);

    let Some(user) = user else {
        return main.into();
    };

    let mut body = row![];
    if sidebar_visible {
        body = body.push(sidebar::view_sidebar(role, shown));
    }
    body = body.push(main);

    column![
        header::view_header(user, shown, theme_mode),
        body.height(Length::Fill)
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn list_page<'a, S: Resource>(
    card: &'a ListCard<S>,
    role: earsip_api::Role,
    wrap: impl Fn(ListMessage<S::Item>) -> Message + 'a,
) -> Element<'a, Message> {
    list::view_list(card, role).map(wrap)
}
