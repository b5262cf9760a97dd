mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pika_reactions::{DialogConfig, DialogFixture, ReactionsDialog, ReactionsDialogState};

#[derive(Debug, Parser)]
#[command(name = "pika-reactions", version, about = "Show who reacted to a message")]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the reactions dialog for a fixture file.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// JSON file with `members` and `annotations`.
    #[arg(long)]
    fixture: PathBuf,

    /// Only list senders of this emoji. Unknown emoji list everyone.
    #[arg(long)]
    filter: Option<String>,

    /// TOML dialog config. Defaults to $PIKA_REACTIONS_CONFIG when set.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the dialog state as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Show(args) => show(args),
    }
}

fn show(args: ShowArgs) -> Result<()> {
    let fixture = DialogFixture::load(&args.fixture)?;
    let config = DialogConfig::resolve(args.config.as_deref())?;

    let mut dialog =
        ReactionsDialog::open(&fixture.snapshot(), &fixture.members, config.labels.clone());
    if let Some(emoji) = args.filter.as_deref() {
        dialog.select_emoji(emoji);
        if dialog.filter().emoji().is_none() {
            tracing::warn!(emoji, "message has no such reaction, showing all");
        }
    }

    let mut out = std::io::stdout().lock();
    if args.json {
        let state = ReactionsDialogState::project(&dialog, &config, 0);
        serde_json::to_writer_pretty(&mut out, &state).context("write dialog state")?;
        writeln!(out)?;
    } else {
        out.write_all(render::render_dialog(&dialog, &config).as_bytes())
            .context("write dialog")?;
    }
    Ok(())
}
