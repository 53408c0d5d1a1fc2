use implgen::action::{self, Notice, Outcome};
use implgen::config::Config;
use implgen::core::Position;
use implgen::document::Document;
use implgen::generation::GeneratorTool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// implgen - Go interface stub generation tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a stub implementation for the interface under the cursor
    Generate {
        /// Go file to process
        file: PathBuf,

        /// Cursor line (zero-based)
        #[arg(long)]
        line: u32,

        /// Cursor character within the line (zero-based)
        #[arg(long)]
        character: u32,

        /// Name of the new implementing struct
        #[arg(long)]
        name: String,

        /// Config directory (contains implgen.toml)
        #[arg(long, short = 'c', default_value = ".")]
        config_dir: PathBuf,

        /// Rewrite the file in place instead of printing to stdout
        #[arg(long)]
        write: bool,
    },

    /// Print the code action offered at a cursor position, if any
    Actions {
        /// Go file to inspect
        file: PathBuf,

        /// Cursor line (zero-based)
        #[arg(long)]
        line: u32,

        /// Cursor character within the line (zero-based)
        #[arg(long)]
        character: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging with RUST_LOG environment variable
    // Default to "warn" if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Commands::Generate {
            file,
            line,
            character,
            name,
            config_dir,
            write,
        } => generate_command(file, line, character, name, config_dir, write).await,
        Commands::Actions {
            file,
            line,
            character,
        } => actions_command(file, line, character),
    }
}

async fn generate_command(
    file: PathBuf,
    line: u32,
    character: u32,
    name: String,
    config_dir: PathBuf,
    write: bool,
) -> Result<()> {
    info!("Loading configuration from: {}", config_dir.display());
    let config = Config::load(&config_dir)?;
    let tool = GeneratorTool::from_config(&config)?;

    info!("Generating implementation in: {}", file.display());
    let mut document = Document::open(&file)?;
    let cursor = Position::new(line, character);

    let outcome = action::generate_implementation(&mut document, cursor, Some(name), &tool).await;

    match outcome {
        Outcome::Inserted { at, notices } => {
            for notice in notices {
                surface_notice(&notice);
            }
            info!("Inserted at line {}, character {}", at.line, at.character);
        }
        Outcome::Rejected(notice) => {
            surface_notice(&notice);
            anyhow::bail!("Nothing inserted");
        }
        Outcome::Cancelled => return Ok(()),
        Outcome::NotApplicable => {
            anyhow::bail!("No identifier under cursor at {}:{}", line, character);
        }
    }

    if write {
        tokio::fs::write(&file, document.source()).await?;
    } else {
        print!("{}", document.source());
    }

    Ok(())
}

fn actions_command(file: PathBuf, line: u32, character: u32) -> Result<()> {
    let document = Document::open(&file)?;
    let cursor = Position::new(line, character);

    if let Some(code_action) = action::provide_code_action(&document, cursor, cursor) {
        println!("{}", serde_json::to_string_pretty(&code_action)?);
    }

    Ok(())
}

fn surface_notice(notice: &Notice) {
    match notice {
        Notice::Error(message) => warn!("{}", message),
        Notice::Info(message) => info!("{}", message),
    }
}
