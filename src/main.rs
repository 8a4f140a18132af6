//! Detective Quest
//!
//! A mansion mystery game: explore rooms, collect clues, name the culprit.

use clap::Parser;
use detective_quest::tui::{App, Theme};
use std::io::{self, IsTerminal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "detective-quest", version, about = "Explore the mansion and find the culprit")]
struct Args {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log filter written to stderr, e.g. "info" or "detective_quest=debug"
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let theme = if args.no_color || !stdout.is_terminal() {
        Theme::plain()
    } else {
        Theme::default()
    };

    info!(version = detective_quest::VERSION, "starting game");
    let mut app = App::new(io::stdin().lock(), stdout.lock(), theme);
    let result = app.run();

    // The game state is released here whichever way the loop ended
    drop(app);

    if let Err(e) = &result {
        error!("game aborted: {e:#}");
    }
    info!("session closed");
    result
}
