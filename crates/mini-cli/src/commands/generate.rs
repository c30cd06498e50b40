//! `mini generate:*`: scaffold jobs, features, services and domains.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

use mini_codegen::{
    declare_modules, generate_domain, generate_feature, generate_job, generate_service, write_files,
    GeneratedComponent, GeneratorOptions, MiniConfig,
};
use mini_core::ComponentKind;

use crate::output;

/// Arguments for components that may live under a service.
#[derive(Args)]
pub struct ComponentArgs {
    /// Component name
    pub name: String,

    /// Service to generate the component in
    #[arg(short, long)]
    pub service: Option<String>,

    /// Base directory (defaults to the project directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for services and domains.
#[derive(Args)]
pub struct TopLevelArgs {
    /// Component name
    pub name: String,

    /// Base directory (defaults to the project directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl From<TopLevelArgs> for ComponentArgs {
    fn from(args: TopLevelArgs) -> Self {
        Self {
            name: args.name,
            service: None,
            directory: args.directory,
            dry_run: args.dry_run,
        }
    }
}

pub fn execute(kind: ComponentKind, args: ComponentArgs, project_dir: &Path) -> Result<()> {
    let config = MiniConfig::load(project_dir)?;
    let options = resolve_options(kind, &config, project_dir, args.service, args.directory);
    debug!(%kind, name = %args.name, ?options, "Generating");

    let component = generate(kind, &args.name, &options)?;

    if args.dry_run {
        output::print_preview(&component);
        return Ok(());
    }

    let written = write_files(&component.files)?;
    let declared = declare_modules(&component.directory, &options.base_dir())?;
    output::print_generated(&component, &written, &declared);
    output::print_registration_hint(&component);

    Ok(())
}

/// Services and domains always live at the top level, so neither the
/// command line nor `default_service` places them under a service.
fn resolve_options(
    kind: ComponentKind,
    config: &MiniConfig,
    project_dir: &Path,
    service: Option<String>,
    directory: Option<PathBuf>,
) -> GeneratorOptions {
    let mut options = config.generator_options(project_dir, service, directory);
    if matches!(kind, ComponentKind::Service | ComponentKind::Domain) {
        options.service = None;
    }
    options
}

fn generate(kind: ComponentKind, name: &str, options: &GeneratorOptions) -> Result<GeneratedComponent> {
    match kind {
        ComponentKind::Job => generate_job(name, options),
        ComponentKind::Feature => generate_feature(name, options),
        ComponentKind::Service => generate_service(name, options),
        ComponentKind::Domain => generate_domain(name, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, service: Option<&str>, dry_run: bool) -> ComponentArgs {
        ComponentArgs {
            name: name.to_string(),
            service: service.map(str::to_string),
            directory: None,
            dry_run,
        }
    }

    #[test]
    fn test_generate_job_writes_under_service() {
        let dir = tempfile::tempdir().unwrap();

        execute(ComponentKind::Job, args("send-email", Some("notification"), false), dir.path()).unwrap();

        let job_dir = dir.path().join("src/services/notification/jobs/send_email");
        assert!(job_dir.join("mod.rs").exists());
        assert!(job_dir.join("tests.rs").exists());
    }

    #[test]
    fn test_generated_modules_are_declared_in_their_parents() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("lib.rs"), "pub mod app;\npub mod domains;\npub mod services;\n").unwrap();

        execute(ComponentKind::Service, args("user", None, false), dir.path()).unwrap();
        execute(ComponentKind::Job, args("send-email", Some("user"), false), dir.path()).unwrap();
        execute(ComponentKind::Feature, args("register", Some("user"), false), dir.path()).unwrap();

        let read = |path: &str| std::fs::read_to_string(src.join(path)).unwrap();
        assert!(read("services/mod.rs").contains("pub mod user;"));
        let service_mod = read("services/user/mod.rs");
        assert!(service_mod.contains("pub mod jobs;"));
        assert!(service_mod.contains("pub mod features;"));
        assert_eq!(read("services/user/jobs/mod.rs"), "pub mod send_email;\n");
        assert_eq!(read("services/user/features/mod.rs"), "pub mod register;\n");
        assert_eq!(read("lib.rs"), "pub mod app;\npub mod domains;\npub mod services;\n");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        execute(ComponentKind::Service, args("user", None, true), dir.path()).unwrap();

        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_default_service_from_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mini.toml"), "[generate]\ndefault_service = \"orders\"\n").unwrap();

        execute(ComponentKind::Feature, args("checkout", None, false), dir.path()).unwrap();
        execute(ComponentKind::Domain, args("pricing", None, false), dir.path()).unwrap();

        assert!(dir.path().join("src/services/orders/features/checkout/mod.rs").exists());
        assert!(dir.path().join("src/domains/pricing/mod.rs").exists());
    }

    #[test]
    fn test_invalid_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(execute(ComponentKind::Job, args("42", None, false), dir.path()).is_err());
    }
}
