use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recetario - Preference-based recipe recommendations
#[derive(Parser)]
#[command(name = "recetario")]
#[command(about = "Filter and rank recipes by dietary restrictions and taste", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Filter and rank a JSON recipe file offline
    Rank {
        /// JSON array of recipes
        #[arg(long)]
        recipes: PathBuf,

        /// JSON user preferences (defaults when omitted)
        #[arg(long)]
        preferences: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recetario::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    recetario::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => recetario::cli::serve(config, host, port).await,
        Commands::Migrate => recetario::db::migrate(&config).await,
        Commands::Reset => recetario::db::reset(&config).await,
        Commands::Rank {
            recipes,
            preferences,
        } => {
            let ranked = recetario::cli::rank_files(&recipes, preferences.as_deref())?;
            print!("{}", recetario::cli::format_ranked(&ranked));
            Ok(())
        }
    }
}
