//! Generic list card: search, table, pagination and row dialogs.

use iced::widget::{
    Column, Row, Space, button, column, container, opaque, row, scrollable, stack, text,
    text_input,
};
use iced::{Alignment, Element, Length};

use earsip_api::Role;

use super::form::view_form_fields;
use crate::model::{Dialog, ListCard, ListMessage, Resource, RowAction};
use crate::style::widgets::{
    backdrop_style, card_style, danger_button_style, dialog_style, ghost_button_style,
    input_style, page_button_style, palette, primary_button_style, scrollable_style,
    secondary_button_style, table_header_style, table_row_style,
};

/// Pages either side of the current one in the pager.
const PAGER_RADIUS: u32 = 2;

pub fn view_list<S: Resource>(card: &ListCard<S>, role: Role) -> Element<'_, ListMessage<S::Item>> {
    let p = palette::current();
    let list = card.list();

    let title = text(S::TITLE)
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.text_primary);

    let search = text_input("Cari...", list.search())
        .width(Length::Fixed(260.0))
        .padding([8, 14])
        .style(input_style)
        .on_input(ListMessage::SearchChanged)
        .on_submit(ListMessage::SearchSubmitted);

    let refresh = button(text("\u{21BB}").size(16))
        .padding([8, 12])
        .style(secondary_button_style)
        .on_press_maybe((!list.is_loading()).then_some(ListMessage::Refresh));

    let toolbar = row![title, Space::new().width(Length::Fill), search, refresh]
        .spacing(8)
        .align_y(Alignment::Center);

    let body: Element<'_, ListMessage<S::Item>> = if list.is_empty() {
        let message = if list.is_loading() { "Memuat data..." } else { S::EMPTY };
        container(text(message).color(p.text_muted))
            .padding(32)
            .center_x(Length::Fill)
            .into()
    } else {
        view_table(card, role)
    };

    let content = container(
        column![toolbar, body, view_pager(card)]
            .spacing(16)
            .width(Length::Fill),
    )
    .padding(24)
    .width(Length::Fill)
    .style(card_style);

    match card.dialog() {
        Some(dialog) => stack![content, view_dialog(card, dialog)].into(),
        None => content.into(),
    }
}

fn view_table<S: Resource>(card: &ListCard<S>, role: Role) -> Element<'_, ListMessage<S::Item>> {
    let list = card.list();

    let header = S::COLUMNS.iter().fold(
        Row::new().push(cell_header("No").width(Length::Fixed(48.0))),
        |row, column| row.push(cell_header(column).width(Length::Fill)),
    );
    let header = container(header.push(cell_header("Aksi").width(Length::Fixed(260.0))))
        .padding([10, 12])
        .style(table_header_style);

    let rows: Vec<Element<'_, ListMessage<S::Item>>> = list
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
        let actions = S::actions(item, role)
            .into_iter()
            .fold(Row::new().spacing(4), |row, action| {
                row.push(
                    button(text(action.label()).size(12))
                        .padding([4, 8])
                        .style(action_style(action))
                        .on_press(ListMessage::Action(index, action)),
                )
            });

        let cells = S::cells(item).into_iter().fold(
            Row::new().push(text(list.row_number(index).to_string()).width(Length::Fixed(48.0))),
            |row, cell| row.push(text(cell).size(13).width(Length::Fill)),
        );

        container(
            cells
                .push(container(actions).width(Length::Fixed(260.0)))
                .align_y(Alignment::Center),
        )
        .padding([8, 12])
        .style(table_row_style(index % 2 == 1))
        .into()
        })
        .collect();

    column![
        header,
        scrollable(Column::with_children(rows))
            .height(Length::Shrink)
            .style(scrollable_style),
    ]
    .into()
}

fn cell_header(label: &str) -> iced::widget::Text<'_> {
    let p = palette::current();
    text(label)
        .size(12)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.text_secondary)
}

fn action_style(action: RowAction) -> fn(&iced::Theme, button::Status) -> button::Style {
    match action {
        RowAction::Detail => ghost_button_style,
        RowAction::Edit => secondary_button_style,
        RowAction::Delete => danger_button_style,
        RowAction::Dispose | RowAction::Verify => primary_button_style,
    }
}

fn view_pager<S: Resource>(card: &ListCard<S>) -> Element<'_, ListMessage<S::Item>> {
    let p = palette::current();
    let list = card.list();
    let current = list.page();
    let pages = list.pages();

    let summary = match list.total() {
        Some(total) => format!("Halaman {current} dari {pages} ({total} data)"),
        None => format!("Halaman {current} dari {pages}"),
    };

    let step = |label: &'static str, page: u32, enabled: bool| {
        button(text(label).size(13))
            .padding([6, 10])
            .style(page_button_style(false))
            .on_press_maybe(enabled.then_some(ListMessage::GoTo(page)))
    };

    let first = current.saturating_sub(PAGER_RADIUS).max(1);
    let last = (current + PAGER_RADIUS).min(pages);
    let numbers = (first..=last).fold(Row::new().spacing(4), |row, page| {
        row.push(
            button(text(page.to_string()).size(13))
                .padding([6, 10])
                .style(page_button_style(page == current))
                .on_press_maybe(
                    (page != current && list.can_go(page)).then_some(ListMessage::GoTo(page)),
                ),
        )
    });

    row![
        text(summary).size(12).color(p.text_muted),
        Space::new().width(Length::Fill),
        step("\u{2039} Sebelumnya", current.saturating_sub(1), list.has_prev()),
        numbers,
        step("Berikutnya \u{203A}", current + 1, list.has_next()),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

fn view_dialog<'a, S: Resource>(
    card: &'a ListCard<S>,
    dialog: &'a Dialog<S::Item>,
) -> Element<'a, ListMessage<S::Item>> {
    let busy = card.is_busy();

    let body: Element<'a, ListMessage<S::Item>> = match dialog {
        Dialog::Detail(item) => view_detail::<S>(item),
        Dialog::ConfirmDelete { .. } => view_confirm(
            "Hapus data ini? Tindakan ini tidak dapat dibatalkan.",
            "Hapus",
            busy,
            true,
        ),
        Dialog::ConfirmVerify { .. } => {
            view_confirm("Tandai surat ini sebagai terverifikasi?", "Verifikasi", busy, false)
        }
        Dialog::Edit { form, .. } => {
            column![
                dialog_title(form.state().schema().title),
                view_form_fields(form, "Simpan", Some("Batal")).map(ListMessage::Form),
            ]
            .spacing(16)
            .into()
        }
        Dialog::Dispose { form, .. } => column![
            dialog_title("Disposisi Surat"),
            view_form_fields(form, "Kirim Disposisi", Some("Batal")).map(ListMessage::Form),
        ]
        .spacing(16)
        .into(),
    };

    let panel = container(scrollable(body).style(scrollable_style))
        .padding(24)
        .width(Length::Fixed(560.0))
        .max_height(640.0)
        .style(dialog_style);

    opaque(
        container(panel)
            .center(Length::Fill)
            .style(backdrop_style),
    )
}

fn dialog_title<'a, M: 'a>(title: &'a str) -> Element<'a, M> {
    let p = palette::current();
    text(title)
        .size(18)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.text_primary)
        .into()
}

fn view_detail<S: Resource>(item: &S::Item) -> Element<'_, ListMessage<S::Item>> {
    let p = palette::current();

    let mut content = Column::new().spacing(10).push(dialog_title("Detail"));

    for (label, value) in S::details(item) {
        content = content.push(
            row![
                text(label).size(13).color(p.text_secondary).width(Length::Fixed(150.0)),
                text(value).size(13).color(p.text_primary).width(Length::Fill),
            ]
            .spacing(8),
        );
    }

    let attachments = S::attachments(item);
    if !attachments.is_empty() {
        content = content.push(text("Lampiran").size(13).color(p.text_secondary));
        for attachment in attachments {
            content = content.push(
                button(text(attachment.display_name().to_string()).size(13))
                    .padding([4, 8])
                    .style(ghost_button_style)
                    .on_press(ListMessage::OpenLink(attachment.url)),
            );
        }
    }

    if let Some(body) = S::body(item) {
        content = content.push(text("Isi Surat").size(13).color(p.text_secondary));
        content = content.push(
            container(text(body).size(13).color(p.text_primary))
                .padding(12)
                .width(Length::Fill)
                .style(card_style),
        );
    }

    content
        .push(
            button(text("Tutup"))
                .padding([8, 16])
                .style(secondary_button_style)
                .on_press(ListMessage::CloseDialog),
        )
        .into()
}

fn view_confirm<'a, T: Clone + 'a>(
    question: &'a str,
    confirm: &'a str,
    busy: bool,
    destructive: bool,
) -> Element<'a, ListMessage<T>> {
    let p = palette::current();
    let confirm_style = if destructive {
        danger_button_style
    } else {
        primary_button_style
    };
    column![
        text("Konfirmasi").size(18).color(p.text_primary),
        text(question).size(14).color(p.text_secondary),
        row![
            button(text(if busy { "Memproses..." } else { confirm }))
                .padding([8, 16])
                .style(confirm_style)
                .on_press_maybe((!busy).then_some(ListMessage::Confirm)),
            button(text("Batal"))
                .padding([8, 16])
                .style(secondary_button_style)
                .on_press_maybe((!busy).then_some(ListMessage::CloseDialog)),
        ]
        .spacing(8),
    ]
    .spacing(16)
    .into()
}
