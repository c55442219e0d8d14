mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "orologio", version, about = "A clock for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Run the clock in the foreground until Ctrl+C
    Start,
    /// Print the current time once and exit
    Once,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Once => commands::once::execute(),
    }
}
