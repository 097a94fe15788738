use std::process::ExitCode;

use clap::Parser;

use dropzone::app::Workspace;
use dropzone::cli::{commands, Cli, Command};
use dropzone::{logging, runner};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{} {:#}", console::style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut workspace = Workspace::open(&cli.start_options())?;
    // The TUI shows these in its status line.
    if !matches!(cli.command, None | Some(Command::Tui)) {
        for warning in &workspace.startup_warnings {
            eprintln!("{} {}", console::style("warning:").yellow(), warning);
        }
    }
    match cli.command {
        None | Some(Command::Tui) => {
            runner::run_app(workspace)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(command) => commands::run(command, &mut workspace),
    }
}
