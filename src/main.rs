//! CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use glyphcast::cli::{Cli, Command, ConfigAction};
use glyphcast::player;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Create(args) => {
            player::install_interrupt_restore()?;
            commands::create::handle(args)
        }
        Command::Play(args) => {
            player::install_interrupt_restore()?;
            commands::play::handle(args)
        }
        Command::Info(args) => commands::info::handle(args),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "glyphcast", &mut std::io::stdout());
            Ok(())
        }
    }
}
