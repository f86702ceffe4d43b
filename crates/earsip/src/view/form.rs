//! Generic form card: one widget per field kind.

use iced::widget::{Column, button, column, container, pick_list, row, text, text_editor, text_input};
use iced::{Element, Length};

use earsip_core::{FieldKind, FieldSpec};

use crate::model::{FormMessage, FormModel};
use crate::style::widgets::{
    card_style, input_error_style, input_style, palette, primary_button_style,
    secondary_button_style,
};

/// Fields plus submit/cancel buttons.
pub fn view_form_fields<'a>(
    model: &'a FormModel,
    submit_label: &'a str,
    cancel_label: Option<&'a str>,
) -> Element<'a, FormMessage> {
    let state = model.state();
    let fields: Vec<Element<'a, FormMessage>> = state
        .schema()
        .fields
        .iter()
        .map(|spec| view_field(model, spec))
        .collect();

    let submitting = state.is_submitting();
    let submit = button(text(if submitting { "Menyimpan..." } else { submit_label }))
        .padding([10, 20])
        .style(primary_button_style)
        .on_press_maybe((!submitting).then_some(FormMessage::Submit));

    let mut actions = row![submit].spacing(8);
    if let Some(label) = cancel_label {
        actions = actions.push(
            button(text(label))
                .padding([10, 20])
                .style(secondary_button_style)
                .on_press_maybe((!submitting).then_some(FormMessage::Cancel)),
        );
    }

    Column::with_children(fields)
        .push(actions)
        .spacing(14)
        .into()
}

/// Form inside a card with its schema title.
pub fn view_form_card(model: &FormModel) -> Element<'_, FormMessage> {
    let p = palette::current();
    let title = text(model.state().schema().title)
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.text_primary);

    container(column![title, view_form_fields(model, "Simpan", Some("Reset"))].spacing(18))
        .padding(24)
        .width(Length::Fill)
        .max_width(720.0)
        .style(card_style)
        .into()
}

fn view_field<'a>(model: &'a FormModel, spec: &'static FieldSpec) -> Element<'a, FormMessage> {
    let p = palette::current();
    let state = model.state();
    let name = spec.name;
    let value = state.value(name);
    let error = state.error(name);

    let label = if spec.required.is_some() {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };

    let input: Element<'a, FormMessage> = match spec.kind {
        FieldKind::Multiline => match model.editor(name) {
            Some(content) => text_editor(content)
                .placeholder(spec.label)
                .height(Length::Fixed(120.0))
                .padding(10)
                .on_action(move |action| FormMessage::Edit(name, action))
                .into(),
            None => text(value).into(),
        },
        FieldKind::Choice(options) => {
            let selected = options.iter().find(|o| **o == value).copied();
            pick_list(options, selected, move |choice: &str| {
                FormMessage::Input(name, choice.to_string())
            })
            .placeholder("Pilih...")
            .padding(10)
            .width(Length::Fill)
            .into()
        }
        FieldKind::Category => {
            let options = model.categories();
            let selected = options.iter().find(|c| c.as_str() == value).cloned();
            pick_list(options, selected, move |choice: String| FormMessage::Input(name, choice))
                .placeholder(if options.is_empty() {
                    "Memuat kategori..."
                } else {
                    "Pilih kategori"
                })
                .padding(10)
                .width(Length::Fill)
                .into()
        }
        kind => {
            let placeholder = match kind {
                FieldKind::Date => "YYYY-MM-DD",
                FieldKind::File => "Path file",
                FieldKind::Files => "Path file, pisahkan dengan ;",
                _ => spec.label,
            };
            text_input(placeholder, value)
                .secure(kind == FieldKind::Password)
                .on_input(move |s| FormMessage::Input(name, s))
                .on_submit(FormMessage::Submit)
                .padding(10)
                .style(if error.is_some() {
                    input_error_style
                } else {
                    input_style
                })
                .into()
        }
    };

    let mut col = column![text(label).size(12).color(p.text_secondary), input].spacing(4);

    if let Some(err) = error {
        col = col.push(text(err).size(11).color(p.danger));
    }

    col.into()
}
