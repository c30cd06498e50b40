//! `mini new`: create an application.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::warn;

use mini_codegen::{create_project, generate_project, ProjectOptions};

#[derive(Args)]
pub struct NewArgs {
    /// Project name
    pub name: String,

    /// Directory to create the project in (defaults to the project directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Do not fetch dependencies after creating the project
    #[arg(long)]
    pub skip_install: bool,
}

pub fn execute(args: NewArgs, project_dir: &Path) -> Result<()> {
    let options = ProjectOptions {
        directory: Some(args.directory.unwrap_or_else(|| project_dir.to_path_buf())),
    };
    let project = generate_project(&args.name, &options)?;

    println!("{} Creating project {}", "→".dimmed(), project.name.cyan().bold());
    let written = create_project(&project)?;
    for path in &written {
        println!("  {} {}", "✓".green(), path);
    }

    if args.skip_install {
        println!("{} Skipped dependency fetch", "→".dimmed());
    } else {
        println!("{} Fetching dependencies...", "→".dimmed());
        match fetch_dependencies(&project.root) {
            Ok(()) => println!("{} Dependencies fetched", "✓".green().bold()),
            Err(e) => {
                warn!(error = %e, "Dependency fetch failed");
                println!("{} Could not fetch dependencies: {}", "!".yellow().bold(), e);
                println!("  Run {} inside the project later.", "cargo fetch".cyan());
            }
        }
    }

    println!();
    println!("{} Project {} created", "✓".green().bold(), project.name.bold());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  cd {}", project.root.display());
    println!("  cargo run");

    Ok(())
}

fn fetch_dependencies(root: &Path) -> Result<()> {
    let status = Command::new("cargo")
        .arg("fetch")
        .current_dir(root)
        .status()
        .context("Failed to run cargo fetch")?;

    if !status.success() {
        bail!("cargo fetch exited with {}", status);
    }

    Ok(())
}
