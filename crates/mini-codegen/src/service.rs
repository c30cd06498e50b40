//! Generate a service: module wiring, service, HTTP controller and tests.

use anyhow::Result;

use mini_core::ComponentKind;

use crate::generator::{ComponentNames, GeneratedComponent, GeneratedFile, GeneratorOptions, output_path};
use crate::templates::TemplateEngine;

const FILES: [(&str, &str); 4] = [
    ("mod.rs", "service/mod.rs"),
    ("service.rs", "service/service.rs"),
    ("controller.rs", "service/controller.rs"),
    ("tests.rs", "service/tests.rs"),
];

pub fn generate_service(name: &str, options: &GeneratorOptions) -> Result<GeneratedComponent> {
    let names = ComponentNames::new(ComponentKind::Service, name, options)?;
    let context = names.context()?;
    let engine = TemplateEngine::new()?;
    let directory = output_path(ComponentKind::Service, name, options);

    let files = FILES
        .iter()
        .map(|(file_name, template)| -> Result<GeneratedFile> {
            Ok(GeneratedFile::new(directory.join(file_name), engine.render(template, &context)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GeneratedComponent {
        kind: ComponentKind::Service,
        name: names.name,
        type_name: names.type_name,
        directory,
        files,
    })
}
