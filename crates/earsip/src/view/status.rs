//! Full-window pages: loading placeholder, login and access denied.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use earsip_core::Route;

use super::form::view_form_fields;
use crate::message::Message;
use crate::model::{FormModel, ScreenMessage};
use crate::style::widgets::{card_style, content_style, palette, primary_button_style};

/// Shown while the session probe is in flight.
pub fn view_loading() -> Element<'static, Message> {
    let p = palette::current();
    container(
        column![
            text("E-ARSIP")
                .size(28)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                })
                .color(p.primary),
            text("Memuat sesi...").size(14).color(p.text_muted),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .style(content_style)
    .into()
}

pub fn view_login(form: &FormModel, generation: u64) -> Element<'_, Message> {
    let p = palette::current();
    let heading = column![
        text("E-ARSIP")
            .size(28)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(p.primary),
        text("Arsip surat masuk dan surat keluar")
            .size(13)
            .color(p.text_secondary),
    ]
    .spacing(4);

    let fields = view_form_fields(form, "Masuk", None)
        .map(move |m| Message::Screen(generation, ScreenMessage::Login(m)));

    container(
        container(column![heading, fields].spacing(24))
            .padding(32)
            .width(Length::Fixed(380.0))
            .style(card_style),
    )
    .center(Length::Fill)
    .style(content_style)
    .into()
}

pub fn view_unauthorized() -> Element<'static, Message> {
    let p = palette::current();
    container(
        column![
            text("403").size(48).color(p.danger),
            text("Akses Ditolak").size(20).color(p.text_primary),
            text("Anda tidak memiliki izin untuk membuka halaman ini.")
                .size(14)
                .color(p.text_secondary),
            button(text("Kembali ke Dashboard"))
                .padding([10, 20])
                .style(primary_button_style)
                .on_press(Message::Navigate(Route::Dashboard)),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}
