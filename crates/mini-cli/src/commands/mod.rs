//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mini_core::ComponentKind;

pub mod generate;
pub mod new;

/// Mini - clean architecture scaffolding
#[derive(Parser)]
#[command(name = "mini")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new Mini application
    #[command(alias = "n")]
    New(new::NewArgs),

    /// Generate a job
    #[command(name = "generate:job", alias = "g:job")]
    GenerateJob(generate::ComponentArgs),

    /// Generate a feature
    #[command(name = "generate:feature", alias = "g:feature")]
    GenerateFeature(generate::ComponentArgs),

    /// Generate a service with its controller
    #[command(name = "generate:service", alias = "g:service")]
    GenerateService(generate::TopLevelArgs),

    /// Generate a domain
    #[command(name = "generate:domain", alias = "g:domain")]
    GenerateDomain(generate::TopLevelArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to resolve the current directory")?,
        };

        match self.command {
            Commands::New(args) => new::execute(args, &project_dir),
            Commands::GenerateJob(args) => generate::execute(ComponentKind::Job, args, &project_dir),
            Commands::GenerateFeature(args) => generate::execute(ComponentKind::Feature, args, &project_dir),
            Commands::GenerateService(args) => generate::execute(ComponentKind::Service, args.into(), &project_dir),
            Commands::GenerateDomain(args) => generate::execute(ComponentKind::Domain, args.into(), &project_dir),
        }
    }
}
