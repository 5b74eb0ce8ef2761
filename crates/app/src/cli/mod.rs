use clap::{Parser, Subcommand};

mod seed;
mod token;

#[derive(Debug, Parser)]
#[command(name = "tally-app", about = "Tally CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Token(token::TokenCommand),
    Seed(seed::SeedArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Token(command) => token::run(command),
            Commands::Seed(args) => seed::run(args).await,
        }
    }
}
