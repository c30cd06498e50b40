//! Terminal output formatting.

use colored::Colorize;

use mini_codegen::GeneratedComponent;
use mini_core::ComponentKind;

/// Print every file a generator would write, with its content.
pub fn print_preview(component: &GeneratedComponent) {
    println!(
        "{} Would generate {} {} ({} files):",
        "→".dimmed(),
        component.kind,
        component.type_name.cyan().bold(),
        component.files.len()
    );
    for file in &component.files {
        println!();
        println!("{}", file.path.display().to_string().bold());
        println!("{}", "─".repeat(40));
        println!("{}", file.content);
    }
}

pub fn print_generated(component: &GeneratedComponent, written: &[String], declared: &[String]) {
    println!(
        "{} Generated {} {}",
        "✓".green().bold(),
        component.kind,
        component.type_name.cyan().bold()
    );
    for path in written {
        println!("  {}", path);
    }
    for path in declared {
        println!("  {} {}", "updated".dimmed(), path);
    }
}

/// Tell the user how to register the new component.
pub fn print_registration_hint(component: &GeneratedComponent) {
    let ty = &component.type_name;
    let module = component
        .directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!();
    println!("{}", "Next steps:".bold());
    match component.kind {
        ComponentKind::Job => {
            println!("  Register it in a module: {}", format!(".job::<{ty}>(Some({ty}::NAME))").cyan());
        }
        ComponentKind::Feature => {
            println!("  Register it in a module: {}", format!(".feature::<{ty}>(Some({ty}::NAME))").cyan());
        }
        ComponentKind::Service => {
            println!(
                "  Add it in src/app.rs: {}",
                format!(".module(services::{module}::module(Arc::new({ty}::default())))").cyan()
            );
        }
        ComponentKind::Domain => {
            println!(
                "  Register it in a module: {}",
                format!(".domain(Arc::new({ty}::default()), Some({ty}::NAME))").cyan()
            );
        }
    }
}
