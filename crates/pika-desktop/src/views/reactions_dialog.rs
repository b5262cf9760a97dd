//! Reactions dialog overlay: who reacted to a message, grouped by emoji.
//!
//! The chip row at the top filters the sender list; the "All" chip clears the
//! filter. The close button, a backdrop click and Esc all bubble up
//! [`Event::Close`].

use iced::widget::{button, column, container, mouse_area, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Fill, Length, Padding, Theme};
use pika_reactions::{Chip, DialogConfig, ReactionAnnotation, ReactionsDialog, SummaryKey};

use crate::design;

// ── State ───────────────────────────────────────────────────────────────────

pub struct State {
    dialog: ReactionsDialog,
    config: DialogConfig,
}

// ── Messages ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    SelectChip(SummaryKey),
    Close,
}

// ── Events (bubbled up to the app) ──────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Close,
}

// ── Implementation ──────────────────────────────────────────────────────────

impl State {
    pub fn new(dialog: ReactionsDialog, config: DialogConfig) -> Self {
        Self { dialog, config }
    }

    pub fn dialog(&self) -> &ReactionsDialog {
        &self.dialog
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::SelectChip(key) => {
                self.dialog.select(&key);
                tracing::debug!(filter = ?self.dialog.filter(), "reaction chip selected");
                None
            }
            Message::Close => Some(Event::Close),
        }
    }

    pub fn view(&self) -> Element<'_, Message, Theme> {
        let t = design::current();

        // ── Backdrop (click to dismiss) ─────────────────────────────
        let backdrop = mouse_area(
            container(Space::new())
                .width(Fill)
                .height(Fill)
                .style(design::overlay_backdrop_style()),
        )
        .on_press(Message::Close);

        // ── Header ──────────────────────────────────────────────────
        let close_button = button(text("\u{2715}").size(t.typography.body))
            .on_press(Message::Close)
            .padding([4, 10])
            .style(design::icon_button_style);

        let header = row![
            text(self.dialog.title().to_string())
                .size(t.typography.title)
                .color(design::text_primary()),
            Space::new().width(Fill),
            close_button,
        ]
        .align_y(Alignment::Center);

        // ── Chips ───────────────────────────────────────────────────
        let chips = iced::widget::Row::with_children(
            self.dialog.chips().into_iter().map(chip_button),
        )
        .spacing(8)
        .wrap();

        // ── Sender rows ─────────────────────────────────────────────
        let rows = self.dialog.rows();
        let list: Element<'_, Message, Theme> = if rows.is_empty() {
            text("No reactions")
                .size(t.typography.caption)
                .color(design::text_faded())
                .into()
        } else {
            scrollable(
                Column::with_children(
                    rows.into_iter()
                        .map(|annotation| sender_row(annotation, &self.config)),
                )
                .spacing(6),
            )
            .height(Length::Shrink)
            .width(Fill)
            .style(design::invisible_scrollable())
            .into()
        };

        // ── Dialog card ─────────────────────────────────────────────
        let card = container(column![header, chips, list].spacing(16).padding(20))
            .max_width(420)
            .width(Fill)
            .max_height(560)
            .style(design::overlay_container());

        let centered = container(card)
            .width(Fill)
            .padding(Padding {
                top: 80.0,
                right: 32.0,
                bottom: 32.0,
                left: 32.0,
            })
            .align_x(Alignment::Center);

        iced::widget::Stack::new()
            .push(backdrop)
            .push(centered)
            .width(Fill)
            .height(Fill)
            .into()
    }
}

// ── Row rendering ───────────────────────────────────────────────────────────

fn chip_button<'a>(chip: Chip) -> Element<'a, Message, Theme> {
    let t = design::current();
    let label = format!("{} {}", chip.label, chip.count);

    button(text(label).size(t.typography.label))
        .on_press(Message::SelectChip(chip.key))
        .padding([6, 12])
        .style(design::chip_style(chip.selected))
        .into()
}

fn sender_row<'a>(
    annotation: &ReactionAnnotation,
    config: &DialogConfig,
) -> Element<'a, Message, Theme> {
    let t = design::current();

    let content = row![
        text(annotation.emoji.clone()).size(t.typography.emoji),
        text(config.display_name(&annotation.sender_name))
            .size(t.typography.body)
            .color(design::text_primary()),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .padding([8, 12])
        .width(Fill)
        .style(design::sender_row_style)
        .into()
}
