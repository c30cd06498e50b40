//! Generate a new Mini application.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{MiniConfig, ProjectSection};
use crate::error::CodegenError;
use crate::generator::{GeneratedFile, write_files};
use crate::naming::{to_kebab_case, to_snake_case, validate_name};
use crate::templates::TemplateEngine;

const DEFAULT_PORT: u16 = 3000;

/// Crate names Cargo refuses because they clash with the sysroot crates.
const RESERVED_CRATE_NAMES: &[&str] = &["std", "core", "alloc", "proc_macro", "test"];

/// (template, path relative to the project root)
const FILES: &[(&str, &str)] = &[
    ("project/Cargo.toml", "Cargo.toml"),
    ("project/main.rs", "src/main.rs"),
    ("project/lib.rs", "src/lib.rs"),
    ("project/app.rs", "src/app.rs"),
    ("project/services.rs", "src/services/mod.rs"),
    ("project/domains.rs", "src/domains/mod.rs"),
    ("project/app_test.rs", "tests/app.rs"),
    ("project/README.md", "README.md"),
    ("project/gitignore", ".gitignore"),
];

#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    /// Parent directory of the new project. Defaults to the current directory.
    pub directory: Option<PathBuf>,
}

/// A rendered project, not yet written.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    /// Cargo package name (kebab-case).
    pub name: String,
    pub root: PathBuf,
    pub files: Vec<GeneratedFile>,
}

impl GeneratedProject {
    /// Look up a file by its path relative to the project root.
    pub fn file(&self, relative: &str) -> Option<&GeneratedFile> {
        let path = self.root.join(relative);
        self.files.iter().find(|f| f.path == path)
    }
}

#[derive(Serialize)]
struct ProjectContext<'a> {
    project_name: &'a str,
    crate_name: &'a str,
    display_name: &'a str,
    mini_version: &'a str,
    port: u16,
}

pub fn generate_project(name: &str, options: &ProjectOptions) -> Result<GeneratedProject> {
    let display_name = validate_name(name)?;
    let project_name = to_kebab_case(name);
    let crate_name = to_snake_case(name);
    if RESERVED_CRATE_NAMES.contains(&crate_name.as_str()) {
        return Err(CodegenError::invalid_name(name, format!("'{}' is reserved by Cargo", crate_name)).into());
    }
    let root = options
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(&project_name);

    let context = tera::Context::from_serialize(ProjectContext {
        project_name: &project_name,
        crate_name: &crate_name,
        display_name: &display_name,
        mini_version: env!("CARGO_PKG_VERSION"),
        port: DEFAULT_PORT,
    })?;
    let engine = TemplateEngine::new()?;

    let mut files = FILES
        .iter()
        .map(|(template, relative)| -> Result<GeneratedFile> {
            Ok(GeneratedFile::new(root.join(relative), engine.render(template, &context)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let config = MiniConfig {
        project: ProjectSection {
            name: Some(project_name.clone()),
        },
        ..MiniConfig::default()
    };
    files.push(GeneratedFile::new(root.join(crate::config::CONFIG_FILE), config.to_toml_string()?));

    Ok(GeneratedProject {
        name: project_name,
        root,
        files,
    })
}

/// Write a generated project. Fails if its root directory already exists.
pub fn create_project(project: &GeneratedProject) -> Result<Vec<String>> {
    ensure_absent(&project.root)?;
    let written = write_files(&project.files)?;
    info!(project = %project.name, root = %project.root.display(), files = written.len(), "Project created");
    Ok(written)
}

fn ensure_absent(root: &Path) -> Result<(), CodegenError> {
    if root.exists() {
        return Err(CodegenError::DirectoryExists(root.to_path_buf()));
    }
    Ok(())
}
