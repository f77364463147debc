mod commands;
mod config;
mod scheduler;
mod watcher;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, init, watch, BuildArgs, InitArgs, WatchArgs};

/// Themeloom CLI - annotation-driven theme and component generator
#[derive(Parser, Debug)]
#[command(name = "themeloom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter themeloom.config.json
    Init(InitArgs),

    /// Run one generation pass
    Build(BuildArgs),

    /// Rebuild whenever the theme source changes
    Watch(WatchArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Build(args) => build(args, &cwd),
        Command::Watch(args) => watch(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
