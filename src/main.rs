use std::path::Path;

use clap::Parser;

use chips::cli::commands::{Cli, Commands};
use chips::cli::output;
use chips::io::{config_io, roster_io};
use chips::model::{Person, roster};
use chips::tui::theme::Theme;

fn main() {
    let cli = Cli::parse();

    let people = match load_people(&cli) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Roster) => {
            print!("{}", output::format_roster(&people, cli.json));
        }
        None => {
            let config_path = cli
                .config
                .clone()
                .unwrap_or_else(|| Path::new("chips.toml").to_path_buf());
            let theme = match config_io::load_config(&config_path) {
                Ok(config) => Theme::from_config(&config.ui),
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = chips::tui::run(people, theme) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_people(cli: &Cli) -> Result<Vec<Person>, roster_io::RosterError> {
    match &cli.roster {
        Some(path) => roster_io::load_roster(path),
        None => Ok(roster::builtin()),
    }
}
