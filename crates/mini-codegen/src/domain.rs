//! Generate a domain and its tests.

use anyhow::Result;

use mini_core::ComponentKind;

use crate::generator::{ComponentNames, GeneratedComponent, GeneratedFile, GeneratorOptions, output_path};
use crate::templates::TemplateEngine;

/// Render `mod.rs` and `tests.rs` for a domain named `name`.
pub fn generate_domain(name: &str, options: &GeneratorOptions) -> Result<GeneratedComponent> {
    let names = ComponentNames::new(ComponentKind::Domain, name, options)?;
    let context = names.context()?;
    let engine = TemplateEngine::new()?;
    let directory = output_path(ComponentKind::Domain, name, options);

    let files = vec![
        GeneratedFile::new(directory.join("mod.rs"), engine.render("domain/mod.rs", &context)?),
        GeneratedFile::new(directory.join("tests.rs"), engine.render("domain/tests.rs", &context)?),
    ];

    Ok(GeneratedComponent {
        kind: ComponentKind::Domain,
        name: names.name,
        type_name: names.type_name,
        directory,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_domain_content() {
        let options = GeneratorOptions {
            service: None,
            directory: Some(PathBuf::from("/app")),
        };
        let domain = generate_domain("user-validation", &options).unwrap();

        assert_eq!(domain.type_name, "UserValidationDomain");
        assert_eq!(domain.directory, PathBuf::from("/app/src/domains/user_validation"));

        let source = &domain.file("mod.rs").unwrap().content;
        assert!(source.contains("impl Domain for UserValidationDomain {"));
        assert!(source.contains("pub fn validate_business_rule(&self, _data: &Value) -> bool {"));
        assert!(source.contains("pub fn calculate_something(&self, input: i64) -> i64 {"));
        assert!(source.contains("pub fn transform_data(&self, data: Value) -> Value {"));

        let tests = &domain.file("tests.rs").unwrap().content;
        assert!(tests.contains("assert_eq!(UserValidationDomain::default().name(), \"user-validation\");"));
        assert!(tests.contains("calculate_something(5), 10"));
    }
}
