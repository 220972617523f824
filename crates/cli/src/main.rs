mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Distillara data extraction toolchain.
#[derive(Parser)]
#[command(
    name = "distillara",
    version,
    about = "Distillara extraction and transformation toolchain"
)]
struct Cli {
    /// Suppress per-category status output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract canonical ingredient entities from a text document
    Ingredients {
        /// Path to the ingredient text file
        file: PathBuf,
    },

    /// Extract canonical potion entities from a text document
    Potions {
        /// Path to the potion text file
        file: PathBuf,
    },

    /// Run the four-category batch transform over a source directory
    Transform {
        /// Directory containing the source files
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Directory for transformed output (defaults to the source directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Ingredients { file } => commands::extract::cmd_ingredients(&file),
        Commands::Potions { file } => commands::extract::cmd_potions(&file),
        Commands::Transform { dir, out } => {
            let out = out.unwrap_or_else(|| dir.clone());
            commands::transform::cmd_transform(&dir, &out, cli.quiet);
        }
    }
}
