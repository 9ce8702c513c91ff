use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod search;

#[derive(Parser)]
#[command(about = "job board listings and applications service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the HTTP api
    Listen,
    /// Fetch one provider page, filter it and print the requested page as json
    Search(search::SearchArgs),
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Search(args)) => {
            search::run(args).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
