//! Command-line surface over the zone services.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::StartOptions;

#[derive(Debug, Parser)]
#[command(name = "dropzone", version, about = "Move dropped files into named folders")]
pub struct Cli {
    /// Settings file to use instead of the default location.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Zone store file to use instead of the default location.
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Folder holding the default zone folders (Area1, Area2, ...).
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Do not load or save zone bindings.
    #[arg(long, global = true)]
    pub no_persist: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive zone grid (the default).
    Tui,
    /// List zones with their folders and file counts.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Add a zone.
    Add {
        #[arg(long)]
        name: Option<String>,
        /// Folder for the zone; defaults to the next AreaN under the base dir.
        #[arg(long)]
        path: Option<String>,
    },
    /// Rename a zone.
    Rename { zone: String, name: String },
    /// Point a zone at another folder and move its files there.
    Retarget {
        zone: String,
        path: String,
        #[command(flatten)]
        collisions: CollisionArgs,
    },
    /// Move files into a zone.
    Drop {
        zone: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        collisions: CollisionArgs,
    },
    /// Unbind a zone. Its folder and files stay on disk.
    Remove { zone: String },
}

/// How to answer "file already exists" without asking.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct CollisionArgs {
    /// Replace existing files.
    #[arg(long, conflicts_with = "skip")]
    pub overwrite: bool,
    /// Keep existing files and leave the sources where they are.
    #[arg(long)]
    pub skip: bool,
}

impl Cli {
    pub fn start_options(&self) -> StartOptions {
        StartOptions {
            config: self.config.clone(),
            store: self.store.clone(),
            base_dir: self.base_dir.clone(),
            no_persist: self.no_persist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["dropzone"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["dropzone", "list", "--json", "--no-persist"]).unwrap();
        assert!(cli.no_persist);
        assert!(matches!(cli.command, Some(Command::List { json: true })));
    }

    #[test]
    fn overwrite_and_skip_conflict() {
        let res = Cli::try_parse_from(["dropzone", "drop", "1", "a.txt", "--overwrite", "--skip"]);
        assert!(res.is_err());
    }

    #[test]
    fn drop_needs_files() {
        assert!(Cli::try_parse_from(["dropzone", "drop", "1"]).is_err());
    }
}
