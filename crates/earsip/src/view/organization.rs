//! Organization profile view.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use super::form::view_form_fields;
use crate::model::{OrganizationCard, OrganizationMessage};
use crate::style::widgets::{card_style, palette};

pub fn view_organization(card: &OrganizationCard) -> Element<'_, OrganizationMessage> {
    let p = palette::current();

    let subtitle = if card.is_loading() {
        "Memuat data organisasi..."
    } else if card.exists() {
        "Data ini dicetak pada kop surat keluar."
    } else {
        "Profil organisasi belum dibuat."
    };

    let mut content = column![
        text("Profil Organisasi")
            .size(20)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(p.text_primary),
        text(subtitle).size(13).color(p.text_secondary),
    ]
    .spacing(8);

    if let Some(logo) = card.organization().and_then(|o| o.logo.as_deref()) {
        content = content.push(text(format!("Logo: {logo}")).size(12).color(p.text_muted));
    }

    let submit = if card.exists() { "Perbarui" } else { "Buat Profil" };
    content = content.push(
        view_form_fields(card.form(), submit, Some("Batal")).map(OrganizationMessage::Form),
    );

    container(content.spacing(16))
        .padding(24)
        .width(Length::Fill)
        .max_width(720.0)
        .style(card_style)
        .into()
}
