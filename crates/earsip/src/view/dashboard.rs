//! Dashboard: counters, monthly series and quick actions.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use earsip_api::{CategoryCount, MonthlyPoint, Role};
use earsip_core::policy::sees_waiting_counter;
use earsip_core::routes::{AksiView, LogbookView, MailView, ProfileView};
use earsip_core::{DashboardStats, Route};

use crate::message::Message;
use crate::model::{DashboardCard, DashboardMessage, ScreenMessage};
use crate::style::widgets::{
    card_style, ghost_button_style, palette, primary_button_style, scrollable_style,
    secondary_button_style,
};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

pub fn view_dashboard(card: &DashboardCard, role: Role, generation: u64) -> Element<'_, Message> {
    let p = palette::current();
    let on = move |m: DashboardMessage| Message::Screen(generation, ScreenMessage::Dashboard(m));

    let stats = card.stats();
    let count = |value: Option<u64>| match (value, card.is_loading()) {
        (Some(v), _) => v.to_string(),
        (None, true) => "...".to_string(),
        (None, false) => "-".to_string(),
    };

    let total = stat_card(
        "Total Surat",
        count(stats.and_then(|s| s.total_mail)),
        Some(Message::Navigate(Route::Logbook(LogbookView::All))),
    );
    let second = if sees_waiting_counter(role) {
        stat_card(
            "Menunggu Disposisi",
            count(stats.and_then(|s| s.waiting_dispositions)),
            Some(Message::Navigate(Route::Aksi(AksiView::Disposisi))),
        )
    } else {
        stat_card(
            "Profil Saya",
            "Ubah data diri".to_string(),
            Some(Message::Navigate(Route::Profile(ProfileView::Data))),
        )
    };

    let quick = row![
        button(text("+ Surat Masuk"))
            .padding([10, 18])
            .style(primary_button_style)
            .on_press(Message::Navigate(Route::Mail(MailView::Inbox))),
        button(text("+ Surat Keluar"))
            .padding([10, 18])
            .style(primary_button_style)
            .on_press(Message::Navigate(Route::Mail(MailView::Outbox))),
    ]
    .spacing(8);

    let year_nav = row![
        text(format!("Statistik {}", card.year()))
            .size(16)
            .color(p.text_primary),
        Space::new().width(Length::Fill),
        button(text("\u{2039}"))
            .padding([6, 12])
            .style(secondary_button_style)
            .on_press(on(DashboardMessage::PrevYear)),
        button(text("\u{203A}"))
            .padding([6, 12])
            .style(secondary_button_style)
            .on_press_maybe(card.has_next_year().then(|| on(DashboardMessage::NextYear))),
        button(text("\u{21BB}"))
            .padding([6, 12])
            .style(secondary_button_style)
            .on_press_maybe((!card.is_loading()).then(|| on(DashboardMessage::Refresh))),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let series: Element<'_, Message> = match stats {
        Some(stats) => row![view_monthly(stats), view_categories(&stats.by_category)]
            .spacing(16)
            .into(),
        None => text("Memuat statistik...").color(p.text_muted).into(),
    };

    scrollable(
        column![
            row![total, second].spacing(16),
            quick,
            container(column![year_nav, series].spacing(16))
                .padding(20)
                .width(Length::Fill)
                .style(card_style),
        ]
        .spacing(20),
    )
    .style(scrollable_style)
    .into()
}

fn stat_card(label: &'static str, value: String, target: Option<Message>) -> Element<'static, Message> {
    let p = palette::current();
    let content = column![
        text(label).size(13).color(p.text_secondary),
        text(value)
            .size(32)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(p.primary),
    ]
    .spacing(6);

    container(
        button(content)
            .width(Length::Fill)
            .padding(20)
            .style(ghost_button_style)
            .on_press_maybe(target),
    )
    .width(Length::Fill)
    .style(card_style)
    .into()
}

/// Month label; numeric months become short names.
fn month_name(month: &str) -> &str {
    month
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| MONTHS.get(i).copied())
        .unwrap_or(month)
}

fn view_monthly(stats: &DashboardStats) -> Element<'_, Message> {
    let p = palette::current();
    let peak = stats.monthly_peak().max(1);

    let rows = stats.monthly.iter().map(|point: &MonthlyPoint| {
        let sum = point.inbox + point.outbox;
        // FillPortion needs at least 1 on both sides
        let filled = u16::try_from(sum * 100 / peak).unwrap_or(100).max(1);
        let rest = 101 - filled;
        let bar = row![
            container(Space::new().height(Length::Fixed(10.0)))
                .width(Length::FillPortion(filled))
                .style(move |_theme| {
                    let p = palette::current();
                    container::Style {
                        background: Some(iced::Background::Color(if sum == 0 {
                            p.border_subtle
                        } else {
                            p.primary
                        })),
                        border: iced::Border {
                            radius: 3.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                }),
            Space::new().width(Length::FillPortion(rest)),
        ]
        .width(Length::Fill);

        row![
            text(month_name(&point.month).to_string())
                .size(12)
                .color(p.text_secondary)
                .width(Length::Fixed(36.0)),
            bar,
            text(format!("{} masuk / {} keluar", point.inbox, point.outbox))
                .size(12)
                .color(p.text_muted)
                .width(Length::Fixed(140.0)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    });

    let mut column = Column::with_children(rows.collect::<Vec<Element<'_, Message>>>()).spacing(6);
    if stats.monthly.is_empty() {
        column = column.push(text("Belum ada data bulanan").color(p.text_muted));
    }
    container(column).width(Length::FillPortion(2)).into()
}

fn view_categories(counts: &[CategoryCount]) -> Element<'_, Message> {
    let p = palette::current();
    let mut column = Column::new()
        .spacing(6)
        .push(text("Per Kategori").size(14).color(p.text_primary));
    if counts.is_empty() {
        column = column.push(text("Belum ada data").size(12).color(p.text_muted));
    }
    for count in counts {
        column = column.push(
            row![
                text(count.category.as_str()).size(12).color(p.text_secondary).width(Length::Fill),
                text(count.count.to_string()).size(12).color(p.text_primary),
            ]
            .spacing(8),
        );
    }
    container(column).width(Length::FillPortion(1)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name("1"), "Jan");
        assert_eq!(month_name("12"), "Des");
        assert_eq!(month_name("13"), "13");
        assert_eq!(month_name("0"), "0");
        assert_eq!(month_name("Maret"), "Maret");
    }
}
