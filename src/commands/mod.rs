pub mod init;
pub mod quickstart;
pub mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start an interactive todo session")]
    Session(session::SessionArgs),
    #[command(about = "Show the example tasks and optionally export them")]
    Quickstart(quickstart::QuickstartArgs),
}

#[derive(Debug, Parser)]
#[command(name = "todo", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Session(args) => session::cmd(args),
            Commands::Quickstart(args) => quickstart::cmd(args),
        }
    }
}
