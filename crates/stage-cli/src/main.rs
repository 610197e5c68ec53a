//! stage - scene math toolbox CLI
//!
//! Vector, color, and transform operations from the shell.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "stage")]
#[command(author, version, about = "Scene math toolbox: vectors, colors, transforms")]
#[command(long_about = "
Scene math operations from the shell.

Vectors are written x,y,z and colors r,g,b[,a] with channels in [0,1].

Examples:
  stage vec length 3,4,0
  stage vec cross 1,0,0 0,1,0
  stage color gray 1,0,0
  stage color lerp 1,0,0 0,0,1 -t 0.5
  stage color to-hsv 1,0,0
  stage transform --translate 1,2,3 --rotate 0,90,0 --scale-by 2,2,2
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Vector operations
    #[command(subcommand, visible_alias = "v")]
    Vec(commands::vec::VecCommand),

    /// Color operations
    #[command(subcommand, visible_alias = "c")]
    Color(commands::color::ColorCommand),

    /// Compose a transform from mutations
    #[command(visible_alias = "t")]
    Transform(commands::transform::TransformArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Vec(cmd) => commands::vec::run(cmd),
        Commands::Color(cmd) => commands::color::run(cmd),
        Commands::Transform(args) => commands::transform::run(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
