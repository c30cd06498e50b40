//! # Mini Codegen
//!
//! Generates clean-architecture scaffolding for Mini applications.
//!
//! Every generator renders its files in memory and returns them; nothing
//! touches the disk until [`write_files`] (or [`create_project`]) is called,
//! which lets the CLI preview output with `--dry-run`.

pub mod config;
pub mod domain;
pub mod error;
pub mod feature;
pub mod generator;
pub mod job;
pub mod naming;
pub mod project;
pub mod service;
pub mod templates;

pub use config::{MiniConfig, CONFIG_FILE};
pub use domain::generate_domain;
pub use error::CodegenError;
pub use feature::generate_feature;
pub use generator::{
    declare_modules, output_path, write_files, GeneratedComponent, GeneratedFile, GeneratorOptions,
};
pub use job::generate_job;
pub use project::{GeneratedProject, ProjectOptions, create_project, generate_project};
pub use service::generate_service;
