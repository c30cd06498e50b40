//! Shared plumbing for component generators.

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use mini_core::ComponentKind;

use crate::naming::{to_camel_case, to_kebab_case, to_snake_case, validate_name};

/// Where and under which service a component is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub service: Option<String>,
    /// Base directory. Defaults to the current directory.
    pub directory: Option<PathBuf>,
}

impl GeneratorOptions {
    pub fn base_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// A rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Every file produced for one component.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedComponent {
    pub kind: ComponentKind,
    /// Name the component is registered under.
    pub name: String,
    /// Rust type name, e.g. `SendEmailJob`.
    pub type_name: String,
    pub directory: PathBuf,
    pub files: Vec<GeneratedFile>,
}

impl GeneratedComponent {
    pub fn file(&self, file_name: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path.file_name().is_some_and(|n| n == file_name))
    }
}

/// Names derived from user input, exposed to templates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ComponentNames {
    /// As typed (trimmed); used as the registry name.
    pub name: String,
    pub pascal_name: String,
    pub camel_name: String,
    pub snake_name: String,
    pub kebab_name: String,
    pub type_name: String,
    pub service: Option<String>,
}

impl ComponentNames {
    pub(crate) fn new(kind: ComponentKind, name: &str, options: &GeneratorOptions) -> Result<Self> {
        let pascal_name = validate_name(name)?;
        let service = match options.service.as_deref() {
            Some(service) => {
                validate_name(service)?;
                Some(to_snake_case(service))
            }
            None => None,
        };

        Ok(Self {
            name: name.trim().to_string(),
            type_name: format!("{}{}", pascal_name, kind.type_suffix()),
            camel_name: to_camel_case(name.trim()),
            snake_name: to_snake_case(name),
            kebab_name: to_kebab_case(name),
            pascal_name,
            service,
        })
    }

    pub(crate) fn context(&self) -> Result<tera::Context> {
        Ok(tera::Context::from_serialize(self)?)
    }
}

/// Directory a component of `kind` named `name` is generated into.
///
/// `<base>/src/services/<service>/<kind>s/<name>` when a service is given,
/// `<base>/src/<kind>s/<name>` otherwise. Path segments are snake_case so
/// they double as Rust module names.
pub fn output_path(kind: ComponentKind, name: &str, options: &GeneratorOptions) -> PathBuf {
    let mut path = options.base_dir().join("src");
    if let Some(service) = &options.service {
        path = path
            .join(ComponentKind::Service.dir_name())
            .join(to_snake_case(service));
    }
    path.join(kind.dir_name()).join(to_snake_case(name))
}

/// Write files, creating parent directories and overwriting existing files.
///
/// Returns the written paths.
pub fn write_files(files: &[GeneratedFile]) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        if let Some(parent) = file.path.parent() {
            ensure_dir(parent)?;
        }
        std::fs::write(&file.path, &file.content)
            .with_context(|| format!("Failed to write {}", file.path.display()))?;
        info!(path = %file.path.display(), "Created");
        written.push(file.path.display().to_string());
    }

    Ok(written)
}

/// Declare the module chain of a generated component.
///
/// Walks from `component_dir` up to `<base>/src`, adding `pub mod <dir>;` to
/// each parent `mod.rs` (created when missing) and, for the top-level
/// directory, to `src/lib.rs` when the crate has one. Existing declarations
/// are kept. Returns the files that changed.
pub fn declare_modules(component_dir: &Path, base: &Path) -> Result<Vec<String>> {
    let src = base.join("src");
    let mut changed = Vec::new();
    let mut dir = component_dir.to_path_buf();

    while dir != src && dir.starts_with(&src) {
        let (Some(parent), Some(module)) = (dir.parent(), dir.file_name()) else {
            break;
        };
        let module = module.to_string_lossy().into_owned();

        let target = if parent == src {
            let lib = src.join("lib.rs");
            if !lib.exists() {
                warn!(module = %module, "No src/lib.rs; declare the module in the crate root");
                break;
            }
            lib
        } else {
            parent.join("mod.rs")
        };

        if declare_module(&target, &module)? {
            changed.push(target.display().to_string());
        }
        let next = parent.to_path_buf();
        dir = next;
    }

    Ok(changed)
}

/// Append `pub mod <module>;` to `file` unless it already declares it.
fn declare_module(file: &Path, module: &str) -> Result<bool> {
    let mut content = if file.exists() {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?
    } else {
        String::new()
    };

    if content.lines().any(|line| declares_module(line, module)) {
        debug!(path = %file.display(), module, "Module already declared");
        return Ok(false);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&format!("pub mod {};\n", module));

    if let Some(parent) = file.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(file, content).with_context(|| format!("Failed to write {}", file.display()))?;
    info!(path = %file.display(), module, "Declared module");
    Ok(true)
}

fn declares_module(line: &str, module: &str) -> bool {
    let Some(item) = line.trim().strip_suffix(';') else {
        return false;
    };
    let item = item
        .strip_prefix("pub(crate) ")
        .or_else(|| item.strip_prefix("pub "))
        .unwrap_or(item);
    item.strip_prefix("mod ").is_some_and(|name| name.trim() == module)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_without_service() {
        let options = GeneratorOptions {
            service: None,
            directory: Some(PathBuf::from("/app")),
        };
        assert_eq!(
            output_path(ComponentKind::Job, "send-email", &options),
            PathBuf::from("/app/src/jobs/send_email")
        );
        assert_eq!(
            output_path(ComponentKind::Service, "UserAccount", &options),
            PathBuf::from("/app/src/services/user_account")
        );
    }

    #[test]
    fn test_output_path_with_service() {
        let options = GeneratorOptions {
            service: Some("Notification".to_string()),
            directory: Some(PathBuf::from("/app")),
        };
        assert_eq!(
            output_path(ComponentKind::Feature, "UserRegistration", &options),
            PathBuf::from("/app/src/services/notification/features/user_registration")
        );
    }

    #[test]
    fn test_output_path_defaults_to_current_dir() {
        assert_eq!(
            output_path(ComponentKind::Domain, "pricing", &GeneratorOptions::default()),
            PathBuf::from("./src/domains/pricing")
        );
    }

    #[test]
    fn test_names_reject_bad_service() {
        let options = GeneratorOptions {
            service: Some("9lives".to_string()),
            directory: None,
        };
        assert!(ComponentNames::new(ComponentKind::Job, "send-email", &options).is_err());
    }

    #[test]
    fn test_names() {
        let names = ComponentNames::new(ComponentKind::Job, "send-email", &GeneratorOptions::default()).unwrap();
        assert_eq!(names.name, "send-email");
        assert_eq!(names.type_name, "SendEmailJob");
        assert_eq!(names.snake_name, "send_email");
        assert_eq!(names.kebab_name, "send-email");
        assert_eq!(names.camel_name, "sendEmail");
    }

    #[test]
    fn test_write_files_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            GeneratedFile::new(dir.path().join("a/b/mod.rs"), "// a"),
            GeneratedFile::new(dir.path().join("a/b/tests.rs"), "// b"),
        ];

        let written = write_files(&files).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(std::fs::read_to_string(dir.path().join("a/b/mod.rs")).unwrap(), "// a");
    }

    #[test]
    fn test_declare_modules_builds_the_service_chain() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(src.join("services/user")).unwrap();
        std::fs::write(src.join("lib.rs"), "pub mod app;\npub mod services;\n").unwrap();
        std::fs::write(src.join("services/mod.rs"), "//! Business services.\n").unwrap();
        std::fs::write(src.join("services/user/mod.rs"), "pub mod service;\n\n#[cfg(test)]\nmod tests;").unwrap();

        let job_dir = src.join("services/user/jobs/send_email");
        let changed = declare_modules(&job_dir, dir.path()).unwrap();

        assert_eq!(changed.len(), 3);
        assert_eq!(std::fs::read_to_string(src.join("services/user/jobs/mod.rs")).unwrap(), "pub mod send_email;\n");
        assert!(std::fs::read_to_string(src.join("services/user/mod.rs"))
            .unwrap()
            .ends_with("mod tests;\npub mod jobs;\n"));
        assert!(std::fs::read_to_string(src.join("services/mod.rs")).unwrap().contains("pub mod user;"));
        assert_eq!(
            std::fs::read_to_string(src.join("lib.rs")).unwrap(),
            "pub mod app;\npub mod services;\n"
        );
    }

    #[test]
    fn test_declare_modules_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/lib.rs"), "").unwrap();
        let domain_dir = dir.path().join("src/domains/pricing");

        assert_eq!(declare_modules(&domain_dir, dir.path()).unwrap().len(), 2);
        assert!(declare_modules(&domain_dir, dir.path()).unwrap().is_empty());
        assert_eq!(std::fs::read_to_string(dir.path().join("src/lib.rs")).unwrap(), "pub mod domains;\n");
    }

    #[test]
    fn test_declare_modules_without_lib_rs_stops_at_the_crate_root() {
        let dir = tempfile::tempdir().unwrap();
        let job_dir = dir.path().join("src/jobs/send_email");

        let changed = declare_modules(&job_dir, dir.path()).unwrap();

        assert_eq!(changed.len(), 1);
        assert!(dir.path().join("src/jobs/mod.rs").exists());
        assert!(!dir.path().join("src/lib.rs").exists());
    }

    #[test]
    fn test_declares_module_matches_visibility_forms() {
        assert!(declares_module("pub mod jobs;", "jobs"));
        assert!(declares_module("  mod jobs;", "jobs"));
        assert!(declares_module("pub(crate) mod jobs;", "jobs"));
        assert!(!declares_module("pub mod jobs_extra;", "jobs"));
        assert!(!declares_module("pub mod jobs {", "jobs"));
    }

    #[test]
    fn test_write_files_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.rs");
        std::fs::write(&path, "old").unwrap();

        write_files(&[GeneratedFile::new(&path, "new")]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
