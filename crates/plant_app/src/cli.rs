use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "plant_app",
    version,
    about = "Identify plants from photos, search the catalog and recall recent finds"
)]
pub struct Cli {
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Run one command and exit instead of starting the interactive session.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One line typed into the interactive session.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

impl ShellLine {
    pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Identify the plant in a JPEG photo.
    Identify { photo: PathBuf },
    /// Search the catalog by common name.
    Search {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Show catalog details for a plant id from a search.
    Details { id: String },
    /// Look up one of the built-in sample plants.
    Sample {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// List recently identified plants, newest first.
    History,
    /// Forget all recently identified plants.
    Clear,
    /// Leave the interactive session.
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_queries_are_collected() {
        let command = ShellLine::parse_line("search swiss cheese plant").expect("parse");
        assert_eq!(
            command,
            Command::Search {
                words: vec!["swiss".into(), "cheese".into(), "plant".into()]
            }
        );
    }

    #[test]
    fn exit_is_an_alias_for_quit() {
        assert_eq!(ShellLine::parse_line("exit").expect("parse"), Command::Quit);
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(ShellLine::parse_line("water the plants").is_err());
        assert!(ShellLine::parse_line("search").is_err());
    }

    #[test]
    fn cli_accepts_one_shot_command() {
        let cli = Cli::try_parse_from(["plant_app", "--log", "terminal", "details", "42"])
            .expect("parse");
        assert_eq!(cli.log, LogDestination::Terminal);
        assert_eq!(cli.command, Some(Command::Details { id: "42".into() }));
    }
}
