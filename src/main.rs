mod bundle;
mod checks;
mod commands;
mod core;
mod host;
mod release;

use clap::{Parser, Subcommand};
use core::error::{ShipError, print_error};
use std::path::PathBuf;

/// Bundle and publish youtube-transcript-manager releases
#[derive(Parser)]
#[command(name = "ytm-ship")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Create or update the GitHub release for the prebuilt executable
  Publish {
    /// Version tag to publish under (default: whichever release is
    /// currently latest, or v1.0.0 when none exists)
    tag: Option<String>,
  },

  /// Render the bundle recipe to a packaging-tool spec file
  Bundle {
    /// Write the rendered output here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Print the recipe as JSON instead of rendering the spec
    #[arg(long)]
    json: bool,
  },

  /// Run publish-precondition health checks
  Doctor {
    /// Run thorough checks (includes the gh auth probe)
    #[arg(long)]
    thorough: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Publish { tag } => commands::run_publish(tag),
    Commands::Bundle { out, json } => commands::run_bundle(out, json),
    Commands::Doctor { thorough, json } => commands::run_doctor(thorough, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ShipError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
