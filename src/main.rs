use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_player::{Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Play, flag and organise videos from a catalogue", long_about = None)]
struct Args {
    /// Path to a video catalogue (`Title | id | #tag , #tag` per line);
    /// the built-in catalogue is used when omitted
    #[arg(short = 'c', long)]
    catalogue: Option<String>,

    /// Seed for PLAY_RANDOM, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the command transcript on stdout stays clean
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = SessionConfig::new();
    if let Some(path) = &args.catalogue {
        // Expand ~ in paths
        let expanded = shellexpand::tilde(path);
        config = config.with_catalogue_file(PathBuf::from(expanded.as_ref()));
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let player = config.build_player()?;
    log::info!("Catalogue loaded: {} videos", player.number_of_videos());

    let stdin = io::stdin();
    let mut session = Session::new(player, stdin.lock(), io::stdout().lock());
    session.run()
}
