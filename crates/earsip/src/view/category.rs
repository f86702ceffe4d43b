//! Category editor view.

use iced::widget::{Column, Space, button, column, container, opaque, row, stack, text};
use iced::{Alignment, Element, Length};

use super::form::view_form_fields;
use crate::model::{CategoryCard, CategoryMessage};
use crate::style::widgets::{
    backdrop_style, card_style, danger_button_style, dialog_style, palette,
    secondary_button_style, table_row_style,
};

pub fn view_category(card: &CategoryCard) -> Element<'_, CategoryMessage> {
    let p = palette::current();
    let busy = card.is_busy();

    let create = container(
        column![
            text("Tambah Kategori").size(16).color(p.text_primary),
            view_form_fields(card.create_form(), "Tambah", None).map(CategoryMessage::New),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(card_style);

    let mut rows = Column::new().spacing(0);
    if card.categories().is_empty() {
        let message = if card.is_loading() {
            "Memuat kategori..."
        } else {
            "Belum ada kategori"
        };
        rows = rows.push(container(text(message).color(p.text_muted)).padding(16));
    }
    for (index, category) in card.categories().iter().enumerate() {
        let line: Element<'_, CategoryMessage> = match card.editing() {
            Some((editing, form)) if editing == category.id => {
                view_form_fields(form, "Simpan", Some("Batal")).map(CategoryMessage::Edit)
            }
            _ => row![
                text(format!("{}.", index + 1))
                    .size(13)
                    .color(p.text_muted)
                    .width(Length::Fixed(36.0)),
                text(category.name.as_str()).size(14).color(p.text_primary),
                Space::new().width(Length::Fill),
                button(text("Edit").size(12))
                    .padding([4, 10])
                    .style(secondary_button_style)
                    .on_press_maybe((!busy).then_some(CategoryMessage::StartEdit(category.id.clone()))),
                button(text("Hapus").size(12))
                    .padding([4, 10])
                    .style(danger_button_style)
                    .on_press_maybe((!busy).then_some(CategoryMessage::AskDelete(category.id.clone()))),
            ]
            .spacing(8)
            .align_y(Alignment::Center)
            .into(),
        };
        rows = rows.push(
            container(line)
                .padding([8, 12])
                .width(Length::Fill)
                .style(table_row_style(index % 2 == 1)),
        );
    }

    let list = container(
        column![
            row![
                text("Daftar Kategori").size(16).color(p.text_primary),
                Space::new().width(Length::Fill),
                button(text("\u{21BB}"))
                    .padding([6, 12])
                    .style(secondary_button_style)
                    .on_press_maybe((!card.is_loading()).then_some(CategoryMessage::Refresh)),
            ]
            .align_y(Alignment::Center),
            rows,
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(card_style);

    let content = column![create, list].spacing(16);

    match card.confirm_delete() {
        Some(category) => {
            let prompt = container(
                column![
                    text("Hapus Kategori").size(18).color(p.text_primary),
                    text(format!("Hapus kategori \"{}\"?", category.name))
                        .size(14)
                        .color(p.text_secondary),
                    row![
                        button(text(if busy { "Menghapus..." } else { "Hapus" }))
                            .padding([8, 16])
                            .style(danger_button_style)
                            .on_press_maybe((!busy).then_some(CategoryMessage::ConfirmDelete)),
                        button(text("Batal"))
                            .padding([8, 16])
                            .style(secondary_button_style)
                            .on_press_maybe((!busy).then_some(CategoryMessage::CancelDelete)),
                    ]
                    .spacing(8),
                ]
                .spacing(14),
            )
            .padding(24)
            .width(Length::Fixed(420.0))
            .style(dialog_style);

            stack![
                content,
                opaque(container(prompt).center(Length::Fill).style(backdrop_style)),
            ]
            .into()
        }
        None => content.into(),
    }
}
