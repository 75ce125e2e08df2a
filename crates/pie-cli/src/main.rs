//! Pie container CLI tool
//!
//! Command-line interface for inspecting compiled `pie!` bytecode
//! containers without running them: header summaries and string reads.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pie")]
#[command(about = "Pie bytecode container tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a container header summary
    Info {
        /// Container file (.pie)
        file: PathBuf,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the string stored at a byte offset
    String {
        /// Container file (.pie)
        file: PathBuf,
        /// Byte offset of the NUL-terminated string
        offset: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file, json } => commands::info::execute(&file, json),
        Commands::String { file, offset } => commands::string::execute(&file, offset),
    }
}
