mod design;
mod views;

use std::path::PathBuf;

use anyhow::Context;
use iced::widget::{column, container, text};
use iced::{Element, Fill, Size, Subscription, Task, Theme};
use pika_reactions::{build_summaries, DialogConfig, DialogFixture, EmojiSummary, ReactionsDialog};
use tracing_subscriber::EnvFilter;

/// Reads the dialog input from this JSON file instead of the built-in demo.
const FIXTURE_ENV: &str = "PIKA_REACTIONS_FIXTURE";
const DEMO_FIXTURE: &str = include_str!("../assets/demo_reactions.json");
const DEMO_MESSAGE: &str = "Lunch at the usual place tomorrow? Booking for noon.";

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let window_settings = iced::window::Settings {
        size: Size::new(720.0, 560.0),
        ..Default::default()
    };

    iced::application(DesktopApp::new, DesktopApp::update, DesktopApp::view)
        .title("Pika Reactions")
        .subscription(DesktopApp::subscription)
        .theme(active_theme)
        .window(window_settings)
        .run()
}

fn active_theme(_state: &DesktopApp) -> Theme {
    Theme::Dark
}

fn load_inputs() -> anyhow::Result<(DialogFixture, DialogConfig)> {
    let fixture = match std::env::var_os(FIXTURE_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            DialogFixture::load(&path)
                .with_context(|| format!("load reactions fixture {}", path.display()))?
        }
        None => DialogFixture::from_json_str(DEMO_FIXTURE).context("parse demo fixture")?,
    };
    let config = DialogConfig::resolve(None).context("load reactions dialog config")?;
    Ok((fixture, config))
}

#[derive(Debug, Clone)]
pub enum Message {
    MessageCard(views::message_card::Message),
    ReactionsDialog(views::reactions_dialog::Message),
    WindowEvent(iced::Event),
}

enum DesktopApp {
    BootError {
        error: String,
    },
    Loaded {
        fixture: DialogFixture,
        config: DialogConfig,
        summaries: Vec<EmojiSummary>,
        reactions_dialog: Option<views::reactions_dialog::State>,
    },
}

impl DesktopApp {
    fn new() -> (Self, Task<Message>) {
        let app = match load_inputs() {
            Ok((fixture, config)) => {
                let summaries = build_summaries(&fixture.snapshot());
                tracing::info!(
                    members = fixture.members.len(),
                    annotations = fixture.annotations.len(),
                    "reactions desktop ready"
                );
                Self::Loaded {
                    fixture,
                    config,
                    summaries,
                    reactions_dialog: None,
                }
            }
            Err(error) => {
                tracing::error!("failed to load reactions input: {error:#}");
                Self::BootError {
                    error: format!("failed to load reactions input: {error:#}"),
                }
            }
        };

        (app, Task::none())
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            DesktopApp::Loaded {
                reactions_dialog: Some(_),
                ..
            } => iced::event::listen().map(Message::WindowEvent),
            _ => Subscription::none(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let DesktopApp::Loaded {
            fixture,
            config,
            reactions_dialog,
            ..
        } = self
        else {
            return Task::none();
        };

        match message {
            Message::MessageCard(views::message_card::Message::OpenReactions) => {
                // Each activation derives from the data as it is right now.
                let dialog = ReactionsDialog::open(
                    &fixture.snapshot(),
                    &fixture.members,
                    config.labels.clone(),
                );
                *reactions_dialog = Some(views::reactions_dialog::State::new(
                    dialog,
                    config.clone(),
                ));
            }
            Message::ReactionsDialog(msg) => {
                if let Some(state) = reactions_dialog.as_mut() {
                    if let Some(views::reactions_dialog::Event::Close) = state.update(msg) {
                        *reactions_dialog = None;
                    }
                }
            }
            Message::WindowEvent(iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
                ..
            })) => {
                if let Some(state) = reactions_dialog.as_mut() {
                    if let Some(views::reactions_dialog::Event::Close) =
                        state.update(views::reactions_dialog::Message::Close)
                    {
                        *reactions_dialog = None;
                    }
                }
            }
            Message::WindowEvent(_) => {}
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match self {
            DesktopApp::BootError { error } => container(
                column![
                    text("Pika Reactions")
                        .size(24)
                        .color(design::text_primary()),
                    text(error).color(design::danger()),
                ]
                .spacing(12),
            )
            .center_x(Fill)
            .center_y(Fill)
            .style(design::surface_style)
            .into(),
            DesktopApp::Loaded {
                summaries,
                reactions_dialog,
                ..
            } => {
                let screen = container(
                    views::message_card::view(DEMO_MESSAGE, summaries).map(Message::MessageCard),
                )
                .center_x(Fill)
                .center_y(Fill)
                .style(design::surface_style);

                match reactions_dialog {
                    Some(dialog) => iced::widget::Stack::new()
                        .push(screen)
                        .push(dialog.view().map(Message::ReactionsDialog))
                        .width(Fill)
                        .height(Fill)
                        .into(),
                    None => screen.into(),
                }
            }
        }
    }
}
