mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    compile, fonts, init, new_template, presets, templates, CompileArgs, InitArgs, NewArgs,
    PresetsArgs, TemplatesCommand,
};
use tracing_subscriber::EnvFilter;

/// Mailcraft CLI - Email templates compiled to client-safe HTML
#[derive(Parser, Debug)]
#[command(name = "mailcraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a mailcraft.config.json
    Init(InitArgs),

    /// Compile template JSON files to HTML
    Compile(CompileArgs),

    /// Manage the template library
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },

    /// Create a template from default blocks
    New(NewArgs),

    /// List built-in style presets
    Presets(PresetsArgs),

    /// List registered fonts
    Fonts {
        /// Print the generated @font-face rules instead
        #[arg(long)]
        css: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Compile(args) => compile(args, &cwd),
        Command::Templates { command } => templates(command, &cwd),
        Command::New(args) => new_template(args, &cwd),
        Command::Presets(args) => presets(args),
        Command::Fonts { css } => fonts(css),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
