//! Design token definitions for the reactions desktop host.
//!
//! Tokens are the lowest-level design decisions: colors, spacing, radii,
//! and typography scales. A [`PikaTheme`] bundles all tokens into a single
//! value.

use iced::Color;

// ── Surface ────────────────────────────────────────────────────────────────

/// A surface layer in the UI hierarchy (background -> primary -> secondary).
///
/// Each surface defines the colors for content rendered on top of it:
/// text (`on`, `on_secondary`, `on_faded`), dividers, and an interactive
/// [`Component`] for widgets on this surface.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    /// Background color of this surface layer.
    pub base: Color,
    /// Primary text color on this surface.
    pub on: Color,
    /// Secondary (muted) text color.
    pub on_secondary: Color,
    /// Faded (tertiary) text color.
    pub on_faded: Color,
    /// Divider / separator color.
    pub divider: Color,
    /// Default interactive component colors on this surface.
    pub component: Component,
}

// ── Component ──────────────────────────────────────────────────────────────

/// State-based colors for an interactive element (button, list item, chip).
#[derive(Debug, Clone, Copy)]
pub struct Component {
    pub base: Color,
    pub hover: Color,
    pub pressed: Color,
    pub selected: Color,
    /// Foreground (text/icon) color.
    pub on: Color,
    pub border: Color,
}

// ── Radii ──────────────────────────────────────────────────────────────────

/// Named corner-radius scale.
#[derive(Debug, Clone, Copy)]
pub struct Radii {
    pub s: f32,    // 8  buttons
    pub m: f32,    // 12 sender rows
    pub l: f32,    // 16 dialog card
    pub full: f32, // 9999 (pills)
}

// ── Typography ─────────────────────────────────────────────────────────────

/// Named font-size scale (in logical pixels).
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    pub title: f32,   // 22  dialog titles
    pub body: f32,    // 14  primary body text
    pub label: f32,   // 13  chip labels
    pub caption: f32, // 12  secondary info
    pub emoji: f32,   // 18  row glyphs
}

// ── PikaTheme ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct PikaTheme {
    pub background: Surface,
    pub primary: Surface,
    pub accent: Component,
    pub radii: Radii,
    pub typography: Typography,
}

impl PikaTheme {
    /// Neutral charcoal palette with a vivid blue accent.
    pub const fn dark_default() -> Self {
        const TEXT_PRIMARY: Color = Color::from_rgb(0.910, 0.910, 0.929); // #E8E8ED
        const TEXT_SECONDARY: Color = Color::from_rgb(0.545, 0.545, 0.596); // #8B8B98
        const TEXT_FADED: Color = Color::from_rgb(0.361, 0.361, 0.408); // #5C5C68
        const DIVIDER: Color = Color::from_rgb(0.161, 0.165, 0.192); // #292A31
        const HOVER_BG: Color = Color::from_rgb(0.133, 0.137, 0.161); // #222229
        const SELECTED_BG: Color = Color::from_rgb(0.161, 0.165, 0.192); // #292A31
        const ACCENT_BLUE: Color = Color::from_rgb(0.204, 0.471, 0.965); // #3478F6

        const BG_COMPONENT: Component = Component {
            base: Color::TRANSPARENT,
            hover: HOVER_BG,
            pressed: SELECTED_BG,
            selected: SELECTED_BG,
            on: TEXT_PRIMARY,
            border: DIVIDER,
        };

        Self {
            // Canvas behind the dialog
            background: Surface {
                base: Color::from_rgb(0.059, 0.063, 0.078), // #0F1014
                on: TEXT_PRIMARY,
                on_secondary: TEXT_SECONDARY,
                on_faded: TEXT_FADED,
                divider: DIVIDER,
                component: BG_COMPONENT,
            },
            // Dialog card and message card
            primary: Surface {
                base: Color::from_rgb(0.106, 0.110, 0.133), // #1B1C22
                on: TEXT_PRIMARY,
                on_secondary: TEXT_SECONDARY,
                on_faded: TEXT_FADED,
                divider: DIVIDER,
                component: Component {
                    base: Color::from_rgb(0.157, 0.161, 0.192), // #282931
                    ..BG_COMPONENT
                },
            },
            accent: Component {
                base: ACCENT_BLUE,
                hover: Color::from_rgb(0.267, 0.533, 1.0), // #4488FF
                pressed: ACCENT_BLUE,
                selected: ACCENT_BLUE,
                on: Color::WHITE,
                border: ACCENT_BLUE,
            },
            radii: Radii {
                s: 8.0,
                m: 12.0,
                l: 16.0,
                full: 9999.0,
            },
            typography: Typography {
                title: 22.0,
                body: 14.0,
                label: 13.0,
                caption: 12.0,
                emoji: 18.0,
            },
        }
    }
}
