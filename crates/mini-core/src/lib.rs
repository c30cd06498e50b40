//! Mini Core Library
//!
//! Building blocks for clean-architecture applications: the closed set of
//! component kinds, a metadata tagger, the component registry, and the
//! Job/Feature/Service/Domain abstractions wired together at startup.

pub mod application;
pub mod component;
pub mod domain;
pub mod error;
pub mod feature;
pub mod job;
pub mod metadata;
pub mod module;
pub mod registry;
pub mod result;
pub mod service;

pub use application::{Application, ApplicationBuilder};
pub use component::ComponentKind;
pub use domain::{Domain, DomainHandle};
pub use error::{MiniError, MiniResult};
pub use feature::{Feature, FeatureContext, FeatureProvider, JobCall};
pub use job::{Job, JobProvider};
pub use metadata::{ComponentTag, EntityId, Tagger};
pub use module::{ModuleOptions, ServiceModule};
pub use registry::{ComponentKey, ComponentRegistry, Implementation, RegisteredComponent};
pub use result::{FeatureResult, JobResult};
pub use service::{Service, ServiceHandle};

/// Re-exported so job and feature implementations can use the same attribute.
pub use async_trait::async_trait;
