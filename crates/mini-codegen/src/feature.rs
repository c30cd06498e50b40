//! Generate a feature and its tests.

use anyhow::Result;

use mini_core::ComponentKind;

use crate::generator::{ComponentNames, GeneratedComponent, GeneratedFile, GeneratorOptions, output_path};
use crate::templates::TemplateEngine;

/// Render `mod.rs` and `tests.rs` for a feature named `name`.
pub fn generate_feature(name: &str, options: &GeneratorOptions) -> Result<GeneratedComponent> {
    let names = ComponentNames::new(ComponentKind::Feature, name, options)?;
    let context = names.context()?;
    let engine = TemplateEngine::new()?;
    let directory = output_path(ComponentKind::Feature, name, options);

    let files = vec![
        GeneratedFile::new(directory.join("mod.rs"), engine.render("feature/mod.rs", &context)?),
        GeneratedFile::new(directory.join("tests.rs"), engine.render("feature/tests.rs", &context)?),
    ];

    Ok(GeneratedComponent {
        kind: ComponentKind::Feature,
        name: names.name,
        type_name: names.type_name,
        directory,
        files,
    })
}
