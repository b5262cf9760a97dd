//! The message the reactions belong to, with a compact reaction strip and the
//! button that opens the dialog.

use iced::widget::{button, column, container, row, text, Row};
use iced::{Alignment, Element, Theme};
use pika_reactions::EmojiSummary;

use crate::design;

#[derive(Debug, Clone)]
pub enum Message {
    OpenReactions,
}

pub fn view<'a>(body: &'a str, summaries: &[EmojiSummary]) -> Element<'a, Message, Theme> {
    let t = design::current();

    let strip = Row::with_children(
        summaries
            .iter()
            .filter_map(|s| s.key.emoji().map(|emoji| (emoji, s.count)))
            .map(|(emoji, count)| {
                text(format!("{emoji} {count}"))
                    .size(t.typography.label)
                    .color(design::text_secondary())
                    .into()
            }),
    )
    .spacing(10);

    let open = button(text("View reactions").size(t.typography.body))
        .on_press(Message::OpenReactions)
        .padding([8, 16])
        .style(design::primary_button_style);

    container(
        column![
            text(body)
                .size(t.typography.body)
                .color(design::text_primary()),
            row![strip, open].spacing(16).align_y(Alignment::Center),
        ]
        .spacing(12),
    )
    .padding(20)
    .max_width(520)
    .style(design::card_style)
    .into()
}
