//! Embedded tera templates.

use tera::{Context, Tera};

use crate::error::CodegenError;

const TEMPLATES: &[(&str, &str)] = &[
    ("job/mod.rs", include_str!("../templates/job/mod.rs.tera")),
    ("job/tests.rs", include_str!("../templates/job/tests.rs.tera")),
    ("feature/mod.rs", include_str!("../templates/feature/mod.rs.tera")),
    ("feature/tests.rs", include_str!("../templates/feature/tests.rs.tera")),
    ("service/mod.rs", include_str!("../templates/service/mod.rs.tera")),
    ("service/service.rs", include_str!("../templates/service/service.rs.tera")),
    ("service/controller.rs", include_str!("../templates/service/controller.rs.tera")),
    ("service/tests.rs", include_str!("../templates/service/tests.rs.tera")),
    ("domain/mod.rs", include_str!("../templates/domain/mod.rs.tera")),
    ("domain/tests.rs", include_str!("../templates/domain/tests.rs.tera")),
    ("project/Cargo.toml", include_str!("../templates/project/Cargo.toml.tera")),
    ("project/main.rs", include_str!("../templates/project/main.rs.tera")),
    ("project/lib.rs", include_str!("../templates/project/lib.rs.tera")),
    ("project/app.rs", include_str!("../templates/project/app.rs.tera")),
    ("project/services.rs", include_str!("../templates/project/services.rs.tera")),
    ("project/domains.rs", include_str!("../templates/project/domains.rs.tera")),
    ("project/app_test.rs", include_str!("../templates/project/app_test.rs.tera")),
    ("project/README.md", include_str!("../templates/project/README.md.tera")),
    ("project/gitignore", include_str!("../templates/project/gitignore.tera")),
];

/// Renders the embedded templates. Autoescaping is off: output is source code.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, CodegenError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        tera.autoescape_on(Vec::new());
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, CodegenError> {
        Ok(self.tera.render(template, context)?)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tera.get_template_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        let engine = TemplateEngine::new().unwrap();
        assert_eq!(engine.names().count(), TEMPLATES.len());
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("job/mod.rs", &Context::new()).unwrap_err();
        assert!(matches!(err, CodegenError::Template(_)));
    }
}
