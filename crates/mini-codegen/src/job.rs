//! Generate a job and its tests.

use anyhow::Result;

use mini_core::ComponentKind;

use crate::generator::{ComponentNames, GeneratedComponent, GeneratedFile, GeneratorOptions, output_path};
use crate::templates::TemplateEngine;

/// Render `mod.rs` and `tests.rs` for a job named `name`.
pub fn generate_job(name: &str, options: &GeneratorOptions) -> Result<GeneratedComponent> {
    let names = ComponentNames::new(ComponentKind::Job, name, options)?;
    let context = names.context()?;
    let engine = TemplateEngine::new()?;
    let directory = output_path(ComponentKind::Job, name, options);

    let files = vec![
        GeneratedFile::new(directory.join("mod.rs"), engine.render("job/mod.rs", &context)?),
        GeneratedFile::new(directory.join("tests.rs"), engine.render("job/tests.rs", &context)?),
    ];

    Ok(GeneratedComponent {
        kind: ComponentKind::Job,
        name: names.name,
        type_name: names.type_name,
        directory,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use std::path::PathBuf;

    fn options() -> GeneratorOptions {
        GeneratorOptions {
            service: Some("notification".to_string()),
            directory: Some(PathBuf::from("/app")),
        }
    }

    #[test]
    fn test_job_files_and_paths() {
        let job = generate_job("send-email", &options()).unwrap();

        assert_eq!(job.type_name, "SendEmailJob");
        assert_eq!(job.directory, PathBuf::from("/app/src/services/notification/jobs/send_email"));
        assert_eq!(job.files.len(), 2);
        assert!(job.file("mod.rs").is_some());
        assert!(job.file("tests.rs").is_some());
    }

    #[test]
    fn test_job_source_content() {
        let job = generate_job("send-email", &options()).unwrap();
        let source = &job.file("mod.rs").unwrap().content;

        assert!(source.contains("pub struct SendEmailJob;"));
        assert!(source.contains("pub struct SendEmailJobData {"));
        assert!(source.contains("pub const NAME: &'static str = \"send-email\";"));
        assert!(source.contains("impl Job for SendEmailJob {"));
        assert!(source.contains("SendEmailJob executed successfully"));
        assert!(source.contains("#[cfg(test)]\nmod tests;"));
    }

    #[test]
    fn test_job_test_content() {
        let job = generate_job("send-email", &options()).unwrap();
        let tests = &job.file("tests.rs").unwrap().content;

        assert!(tests.contains("assert_eq!(SendEmailJob::NAME, \"send-email\");"));
        assert!(tests.contains("#[tokio::test]"));
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        assert!(generate_job("1st-job", &options()).is_err());
    }

    #[test]
    fn test_keyword_names_are_rejected() {
        for name in ["match", "type", "self", "async"] {
            let err = generate_job(name, &GeneratorOptions::default()).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<CodegenError>(), Some(CodegenError::InvalidName { .. })),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_keyword_service_is_rejected() {
        let options = GeneratorOptions {
            service: Some("crate".to_string()),
            directory: None,
        };
        assert!(generate_job("send-email", &options).is_err());
    }
}
