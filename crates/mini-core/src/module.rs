//! Service modules: explicit, builder-style component declaration.
//!
//! A [`ServiceModule`] collects the jobs, features, services and domains of
//! one bounded context. Nothing is tagged or registered until the module is
//! handed to [`ApplicationBuilder`](crate::ApplicationBuilder).

use serde_json::json;
use std::any::type_name;
use std::sync::Arc;

use crate::component::ComponentKind;
use crate::domain::{Domain, DomainHandle};
use crate::feature::{Feature, FeatureProvider};
use crate::job::{Job, JobProvider};
use crate::metadata::EntityId;
use crate::registry::{Implementation, RegisteredComponent};
use crate::service::{Service, ServiceHandle};

/// Options applied when modules are wired into an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleOptions {
    /// Register every module entry in the registry, not only tag it.
    pub auto_register: bool,
}

/// A declared component waiting to be tagged and registered.
#[derive(Debug)]
pub(crate) struct ModuleEntry {
    pub(crate) entity: EntityId,
    pub(crate) kind: ComponentKind,
    pub(crate) name: String,
    implementation: Implementation,
}

impl ModuleEntry {
    fn new(entity: EntityId, kind: ComponentKind, name: Option<&str>, implementation: Implementation) -> Self {
        Self {
            entity,
            kind,
            name: name.unwrap_or_else(|| entity.declared_name()).to_string(),
            implementation,
        }
    }

    pub(crate) fn into_component(self, module: &str) -> RegisteredComponent {
        RegisteredComponent::new(self.kind, self.name, self.implementation)
            .with_metadata(json!({ "module": module }))
    }
}

/// The components contributed by one service.
#[derive(Debug)]
pub struct ServiceModule {
    name: String,
    entries: Vec<ModuleEntry>,
}

impl ServiceModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a job. `name` defaults to the type's identifier.
    pub fn job<J: Job + Default + 'static>(mut self, name: Option<&str>) -> Self {
        self.entries.push(ModuleEntry::new(
            EntityId::of::<J>(),
            ComponentKind::Job,
            name,
            Implementation::new(JobProvider::of::<J>()).implemented_by(type_name::<J>()),
        ));
        self
    }

    /// Declare a job built by `factory`, for jobs without a default constructor.
    pub fn job_with<J, F>(mut self, name: &str, factory: F) -> Self
    where
        J: Job + 'static,
        F: Fn() -> J + Send + Sync + 'static,
    {
        let provider = JobProvider::from_fn(move || Box::new(factory()) as Box<dyn Job>);
        self.entries.push(ModuleEntry::new(
            EntityId::of::<J>(),
            ComponentKind::Job,
            Some(name),
            Implementation::new(provider).implemented_by(type_name::<J>()),
        ));
        self
    }

    /// Declare a feature. `name` defaults to the type's identifier.
    pub fn feature<F: Feature + Default + 'static>(mut self, name: Option<&str>) -> Self {
        self.entries.push(ModuleEntry::new(
            EntityId::of::<F>(),
            ComponentKind::Feature,
            name,
            Implementation::new(FeatureProvider::of::<F>()).implemented_by(type_name::<F>()),
        ));
        self
    }

    /// Declare a feature built by `factory`.
    pub fn feature_with<F, C>(mut self, name: &str, factory: C) -> Self
    where
        F: Feature + 'static,
        C: Fn() -> F + Send + Sync + 'static,
    {
        let provider = FeatureProvider::from_fn(move || Box::new(factory()) as Box<dyn Feature>);
        self.entries.push(ModuleEntry::new(
            EntityId::of::<F>(),
            ComponentKind::Feature,
            Some(name),
            Implementation::new(provider).implemented_by(type_name::<F>()),
        ));
        self
    }

    /// Declare a service instance, registered under [`Service::name`].
    pub fn service<S: Service + 'static>(mut self, service: Arc<S>) -> Self {
        let name = service.name().to_string();
        self.entries.push(ModuleEntry::new(
            EntityId::of::<S>(),
            ComponentKind::Service,
            Some(&name),
            Implementation::new(ServiceHandle::new(service)).implemented_by(type_name::<S>()),
        ));
        self
    }

    /// Declare a domain instance. `name` defaults to the type's identifier.
    pub fn domain<D: Domain + 'static>(mut self, domain: Arc<D>, name: Option<&str>) -> Self {
        self.entries.push(ModuleEntry::new(
            EntityId::of::<D>(),
            ComponentKind::Domain,
            name,
            Implementation::new(DomainHandle::new(domain)).implemented_by(type_name::<D>()),
        ));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(kind, name)` of every declared entry, in declaration order.
    pub fn declared(&self) -> Vec<(ComponentKind, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.kind, entry.name.as_str()))
            .collect()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<ModuleEntry>) {
        (self.name, self.entries)
    }
}
