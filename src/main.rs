// Terminal human-versus-computer chess.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use arcade_chess::config::SessionConfig;
use arcade_chess::game_state::chess_types::{Color, Position};
use arcade_chess::session::game_session::GameSession;
use arcade_chess::terminal::terminal_top::run_stdio_loop;
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Color {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::White => Color::White,
            SideArg::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with `human_color` and `search_depth`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side the human plays (overrides the config file)
    #[arg(long, value_enum)]
    color: Option<SideArg>,

    /// Engine search depth in plies, 1 to 6 (overrides the config file)
    #[arg(long)]
    depth: Option<u8>,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_toml_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(color) = args.color {
        config.human_color = color.into();
    }
    if let Some(depth) = args.depth {
        config = SessionConfig::new(config.human_color, depth);
    }

    let position = match &args.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::new_game(),
    };
    log::info!(
        "starting: human {:?}, depth {}",
        config.human_color,
        config.search_depth
    );

    run_stdio_loop(GameSession::from_position(config, position))?;
    Ok(())
}
