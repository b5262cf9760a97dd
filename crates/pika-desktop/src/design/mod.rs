//! Desktop design system: tokens and iced style functions.
//!
//! | Module      | Responsibility                                   |
//! |-------------|--------------------------------------------------|
//! | `tokens`    | Pure data: `PikaTheme`, token structs            |
//! | `mod` (here)| Active theme, colour shorthands, iced style fns  |
//!
//! View code should import from `crate::design`.

mod tokens;

pub use tokens::*;

use iced::widget::{button, container, scrollable};
use iced::{Color, Theme};

static ACTIVE_THEME: PikaTheme = PikaTheme::dark_default();

pub fn current() -> &'static PikaTheme {
    &ACTIVE_THEME
}

// ── Colour shorthand accessors ──────────────────────────────────────────────

pub fn text_primary() -> Color {
    current().background.on
}
pub fn text_secondary() -> Color {
    current().background.on_secondary
}
pub fn text_faded() -> Color {
    current().background.on_faded
}
pub fn danger() -> Color {
    Color::from_rgb(0.937, 0.267, 0.267) // #ef4444
}

// ── Containers ──────────────────────────────────────────────────────────────

pub fn surface_style(_theme: &Theme) -> container::Style {
    let t = current();
    container::Style {
        background: Some(iced::Background::Color(t.background.base)),
        text_color: Some(t.background.on),
        ..Default::default()
    }
}

/// Card holding the message preview on the main screen.
pub fn card_style(_theme: &Theme) -> container::Style {
    let t = current();
    container::Style {
        background: Some(iced::Background::Color(t.primary.base)),
        border: iced::Border {
            color: t.primary.divider,
            width: 1.0,
            radius: iced::border::radius(t.radii.m),
        },
        ..Default::default()
    }
}

// ── Overlay ─────────────────────────────────────────────────────────────────

/// Container for the dialog card.
pub fn overlay_container() -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let t = current();
        container::Style {
            background: Some(iced::Background::Color(t.primary.base)),
            border: iced::Border {
                color: t.background.divider,
                width: 1.0,
                radius: iced::border::radius(t.radii.l),
            },
            shadow: iced::Shadow {
                color: Color::BLACK.scale_alpha(0.5),
                offset: iced::Vector::new(0.0, 8.0),
                blur_radius: t.radii.l,
            },
            ..Default::default()
        }
    }
}

/// Backdrop that dims the rest of the UI behind an overlay.
pub fn overlay_backdrop_style() -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(Color::BLACK.scale_alpha(0.55))),
        ..Default::default()
    }
}

// ── Buttons ─────────────────────────────────────────────────────────────────

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let t = current();
    let bg = match status {
        button::Status::Hovered => t.accent.hover,
        button::Status::Pressed => t.accent.pressed,
        _ => t.accent.base,
    };
    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color: t.accent.on,
        border: iced::border::rounded(t.radii.s),
        ..Default::default()
    }
}

pub fn icon_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let t = current();
    let bg = match status {
        button::Status::Hovered => t.primary.component.hover,
        button::Status::Pressed => t.primary.component.pressed,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color: t.primary.on_secondary,
        border: iced::border::rounded(t.radii.s),
        ..Default::default()
    }
}

/// Emoji filter chip. The selected chip is filled with the accent colour.
pub fn chip_style(is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let t = current();
        let (bg, fg, border) = if is_selected {
            (t.accent.selected, t.accent.on, t.accent.border)
        } else {
            let bg = match status {
                button::Status::Hovered => t.primary.component.hover,
                button::Status::Pressed => t.primary.component.pressed,
                _ => t.primary.component.base,
            };
            (bg, t.primary.on, t.primary.component.border)
        };
        button::Style {
            background: Some(iced::Background::Color(bg)),
            text_color: fg,
            border: iced::Border {
                color: border,
                width: 1.0,
                radius: iced::border::radius(t.radii.full),
            },
            ..Default::default()
        }
    }
}

/// One sender row in the dialog list.
pub fn sender_row_style(_theme: &Theme) -> container::Style {
    let t = current();
    container::Style {
        background: Some(iced::Background::Color(t.primary.component.base)),
        border: iced::border::rounded(t.radii.m),
        ..Default::default()
    }
}

// ── Scrollable ──────────────────────────────────────────────────────────────

pub fn invisible_scrollable() -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    move |_theme: &Theme, _status: scrollable::Status| {
        use iced::widget::scrollable::{AutoScroll, Rail, Scroller, Style};

        let rail = Rail {
            background: None,
            border: Default::default(),
            scroller: Scroller {
                background: Color::TRANSPARENT.into(),
                border: Default::default(),
            },
        };

        let auto_scroll = AutoScroll {
            background: Color::TRANSPARENT.into(),
            border: Default::default(),
            shadow: Default::default(),
            icon: Color::TRANSPARENT,
        };

        Style {
            container: Default::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll,
        }
    }
}
