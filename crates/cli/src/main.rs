use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// buildstamp - build provenance manifest generator
#[derive(Parser)]
#[command(name = "buildstamp")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose plugin output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the lifecycle hooks against a project and write the manifest
  Generate {
    /// Project root (package descriptor and git repository live here)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Build output directory, relative to the root unless absolute
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// Build mode recorded as the manifest's environment
    #[arg(long, default_value = "production")]
    mode: String,

    /// Manifest file name within the output directory
    #[arg(long, default_value = "version-manifest.json")]
    out_file_name: String,

    /// Print the written record as JSON instead of a summary
    #[arg(long)]
    json: bool,
  },

  /// Display a previously written manifest
  Show {
    /// Path to the manifest file
    #[arg(default_value = "dist/version-manifest.json")]
    path: PathBuf,

    /// Print the raw record as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() {
  let cli = Cli::parse();

  // RUST_LOG wins; otherwise the verbose flag decides what surfaces.
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "info" } else { "warn" }));
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  let result = match cli.command {
    Commands::Generate {
      root,
      out_dir,
      mode,
      out_file_name,
      json,
    } => cmd::cmd_generate(&root, &out_dir, &mode, &out_file_name, cli.verbose, json),
    Commands::Show { path, json } => cmd::cmd_show(&path, json),
  };

  if let Err(e) = result {
    output::print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}
