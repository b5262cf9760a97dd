//! Plain-text rendering of the dialog: title, chip line, one line per sender.

use std::fmt::Write;

use pika_reactions::{Chip, DialogConfig, ReactionsDialog};

pub fn render_dialog(dialog: &ReactionsDialog, config: &DialogConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", dialog.title());

    let chips: Vec<String> = dialog.chips().iter().map(render_chip).collect();
    let _ = writeln!(out, "{}", chips.join(" "));
    out.push('\n');

    let rows = dialog.rows();
    if rows.is_empty() {
        out.push_str("(no reactions)\n");
    }
    for row in rows {
        let _ = writeln!(
            out,
            "{}  {}",
            row.emoji,
            config.display_name(&row.sender_name)
        );
    }
    out
}

fn render_chip(chip: &Chip) -> String {
    let marker = if chip.selected { "*" } else { "" };
    format!("[{} {}]{marker}", chip.label, chip.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pika_reactions::{Annotation, DialogFixture, RoomMember, RoomMembers};

    fn fixture() -> DialogFixture {
        let member = |id: &str, name: &str| RoomMember {
            user_id: id.to_string(),
            display_name: Some(name.to_string()),
        };
        let annotation = |key: &str, id: &str, sender: &str| Annotation {
            key: key.to_string(),
            event_id: id.to_string(),
            sender: sender.to_string(),
            redacted: false,
        };
        DialogFixture {
            members: RoomMembers::new(vec![
                member("A", "Bob"),
                member("B", "Alice"),
                member("C", "Carol"),
            ]),
            annotations: vec![
                annotation("👍", "$1", "A"),
                annotation("👍", "$2", "B"),
                annotation("❤️", "$3", "C"),
            ],
        }
    }

    fn open(config: &DialogConfig) -> ReactionsDialog {
        let fixture = fixture();
        ReactionsDialog::open(&fixture.snapshot(), &fixture.members, config.labels.clone())
    }

    #[test]
    fn renders_unfiltered_dialog() {
        let config = DialogConfig::default();
        let text = render_dialog(&open(&config), &config);
        assert_eq!(
            text,
            "Reactions\n[All 3]* [👍 2] [❤️ 1]\n\n👍  Alice\n👍  Bob\n❤️  Carol\n"
        );
    }

    #[test]
    fn renders_filtered_dialog() {
        let config = DialogConfig::default();
        let mut dialog = open(&config);
        dialog.select_emoji("❤️");
        let text = render_dialog(&dialog, &config);
        assert_eq!(text, "Reactions\n[All 3] [👍 2] [❤️ 1]*\n\n❤️  Carol\n");
    }

    #[test]
    fn renders_empty_dialog() {
        let config = DialogConfig::default();
        let dialog = ReactionsDialog::open(
            &DialogFixture::default().snapshot(),
            &RoomMembers::default(),
            config.labels.clone(),
        );
        assert_eq!(
            render_dialog(&dialog, &config),
            "Reactions\n[All 0]*\n\n(no reactions)\n"
        );
    }

    #[test]
    fn truncates_long_names_per_config() {
        let config = DialogConfig {
            max_name_chars: Some(4),
            ..DialogConfig::default()
        };
        let text = render_dialog(&open(&config), &config);
        assert!(text.contains("👍  Ali\u{2026}\n"));
        assert!(text.contains("❤️  Car\u{2026}\n"));
    }
}
