//! Cookbook CLI — recipe catalog and ingredient summaries.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cookbook",
    version,
    about = "Recipe catalog — cycle-safe composition, flattened ingredient summaries"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: cookbook::cli::Commands,
}

fn main() {
    let cli = Cli::parse();
    cookbook::logging::init(cli.verbose);
    if let Err(e) = cookbook::cli::dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
