// SPDX-License-Identifier: MPL-2.0
use floating_image_link::cli::{self, Command};
use floating_image_link::Result;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let flags = match cli::parse_args(std::env::args_os().skip(1).collect())? {
        Command::Help => {
            print!("{}", cli::HELP);
            return Ok(());
        }
        Command::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Render(flags) => flags,
    };

    let output = cli::render(&flags)?;
    match &flags.output {
        Some(path) => {
            std::fs::write(path, output)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => std::io::stdout().lock().write_all(output.as_bytes())?,
    }
    Ok(())
}
