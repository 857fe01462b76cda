//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod serve;
pub mod subjects;

use clap::{Parser, Subcommand};

use campushub_core::config::AppConfig;
use campushub_core::error::AppError;

/// CampusHub student records platform
#[derive(Debug, Parser)]
#[command(name = "campushub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the CampusHub server
    Serve,
    /// Run pending database migrations
    Migrate,
    /// Create a staff or superuser account
    CreateAdmin(admin::CreateAdminArgs),
    /// Seed the default subject catalog
    SeedSubjects,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(&self.env)?;
        match &self.command {
            Commands::Serve => serve::execute(config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::CreateAdmin(args) => admin::execute(args, &config).await,
            Commands::SeedSubjects => subjects::execute(&config).await,
        }
    }
}

/// Helper: load configuration for the given environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}
