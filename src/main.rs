//! CLI entry point for plgen

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use plgen::{PlaylistError, PlaylistGenerator, PlaylistSummary};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plgen")]
#[command(about = "Write an XSPF playlist for media directories or files")]
#[command(version)]
struct Args {
    /// Directories to scan (one playlist each) or media files
    /// (one playlist for all of them, rooted at the current directory)
    paths: Vec<PathBuf>,
}

/// Arguments split by what they point at; anything else is dropped.
#[derive(Debug, Default)]
struct Inputs {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl Inputs {
    fn classify(paths: Vec<PathBuf>) -> Self {
        let mut inputs = Self::default();
        for path in paths {
            if path.is_file() {
                inputs.files.push(path);
            } else if path.is_dir() {
                inputs.dirs.push(path);
            } else {
                debug!(path = %path.display(), "skipping argument: not found");
            }
        }
        inputs
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plgen=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Report one playlist's outcome. Exits on errors that invalidate the whole run.
fn handle(result: Result<PlaylistSummary, PlaylistError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) if e.is_fatal() => {
            eprintln!("plgen: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("plgen: {}", e);
            false
        }
    }
}

fn main() {
    init_logging();
    let args = Args::parse();

    if args.paths.is_empty() {
        let _ = Args::command().print_help();
        return;
    }

    let inputs = Inputs::classify(args.paths);
    let generator = PlaylistGenerator::default();
    let mut failed = false;

    if !inputs.files.is_empty() {
        let cwd = std::env::current_dir().unwrap_or_else(|e| {
            eprintln!("plgen: cannot determine current directory: {}", e);
            process::exit(1);
        });
        failed |= !handle(generator.generate_for_files(&cwd, &inputs.files));
    }

    for dir in &inputs.dirs {
        debug!(root = %dir.display(), "processing directory");
        failed |= !handle(generator.generate_for_directory(dir));
    }

    if failed {
        process::exit(1);
    }
}
