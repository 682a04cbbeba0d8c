//! Preview tool for the Golden Air UI kit class strings.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", style("error").red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("failed to set tracing subscriber")?;
        tracing::debug!("verbose mode enabled");
    }

    let output = match cli.command {
        Commands::Classes {
            component,
            set,
            class,
            strict,
        } => commands::render_classes(component, &set, class.as_deref(), strict)?,
        Commands::Axes { component, json } => commands::render_axes(component, json)?,
        Commands::Showcase => commands::render_showcase()?,
    };

    println!("{}", output.trim_end());
    Ok(())
}
