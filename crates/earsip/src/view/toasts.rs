//! Notification stack in the bottom-right corner.

use iced::widget::{Column, button, container, row, stack, text};
use iced::{Alignment, Element, Length};

use earsip_core::{Level, Notifications};

use crate::message::Message;
use crate::style::widgets::{ghost_button_style, palette, toast_style};

/// Layers the visible notifications over `body`.
pub fn with_toasts<'a>(body: Element<'a, Message>, notifications: &'a Notifications) -> Element<'a, Message> {
    if notifications.is_empty() {
        return body;
    }
    let p = palette::current();

    let toasts = notifications.iter().fold(Column::new().spacing(8), |col, n| {
        let icon = match n.level {
            Level::Success => "\u{2713}",
            Level::Error => "\u{26A0}",
        };
        col.push(
            container(
                row![
                    text(icon).size(14).color(p.text_on_primary),
                    text(n.message.as_str())
                        .size(13)
                        .color(p.text_on_primary)
                        .width(Length::Fill),
                    button(text("\u{2715}").size(12).color(p.text_on_primary))
                        .padding([2, 6])
                        .style(ghost_button_style)
                        .on_press(Message::DismissNotification(n.id)),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            )
            .padding([10, 14])
            .width(Length::Fixed(340.0))
            .style(toast_style(n.level)),
        )
    });

    stack![
        body,
        container(toasts)
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_right(Length::Fill)
            .align_bottom(Length::Fill),
    ]
    .into()
}
