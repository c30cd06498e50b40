//! Application wiring.
//!
//! The registry is filled once by [`ApplicationBuilder::build`] and then frozen
//! behind an `Arc`. Features and jobs only ever see the read-only registry.

use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::error::MiniResult;
use crate::feature::FeatureContext;
use crate::metadata::Tagger;
use crate::module::{ModuleOptions, ServiceModule};
use crate::registry::{ComponentRegistry, RegisteredComponent};

/// Collects modules and explicit registrations during startup.
#[derive(Debug, Default)]
pub struct ApplicationBuilder {
    options: ModuleOptions,
    modules: Vec<ServiceModule>,
    registrations: Vec<RegisteredComponent>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: ModuleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn auto_register(mut self, enabled: bool) -> Self {
        self.options.auto_register = enabled;
        self
    }

    pub fn module(mut self, module: ServiceModule) -> Self {
        self.modules.push(module);
        self
    }

    /// Register a component directly. Applied after module entries, so it
    /// replaces any auto-registered entry with the same kind and name.
    pub fn register(mut self, component: RegisteredComponent) -> Self {
        self.registrations.push(component);
        self
    }

    /// Tag every module entry, fill the registry and freeze it.
    pub fn build(self) -> Application {
        let mut tagger = Tagger::new();
        let mut registry = ComponentRegistry::new();

        for module in self.modules {
            let (module_name, entries) = module.into_parts();
            for entry in entries {
                tagger.tag(entry.entity, entry.kind, Some(&entry.name));
                if self.options.auto_register {
                    registry.register(entry.into_component(&module_name));
                }
            }
        }

        for component in self.registrations {
            registry.register(component);
        }

        info!(
            components = registry.len(),
            tagged = tagger.len(),
            auto_register = self.options.auto_register,
            "Application wired"
        );

        Application {
            registry: Arc::new(registry),
            tagger: Arc::new(tagger),
        }
    }
}

/// A wired application: the frozen registry plus the tags of its components.
#[derive(Debug, Clone)]
pub struct Application {
    registry: Arc<ComponentRegistry>,
    tagger: Arc<Tagger>,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Shared handle to the registry, for components that outlive a request.
    pub fn shared_registry(&self) -> Arc<ComponentRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn tagger(&self) -> &Tagger {
        &self.tagger
    }

    pub fn context(&self) -> FeatureContext {
        FeatureContext::new(self.shared_registry())
    }

    /// Resolve the feature registered as `name` and run it.
    pub async fn run_feature(&self, name: &str, data: Value) -> MiniResult<Value> {
        self.context().run_feature(name, data).await
    }

    /// Resolve the job registered as `name` and run it.
    pub async fn run_job(&self, name: &str, data: Value) -> MiniResult<Value> {
        self.context().run_named_job(name, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;
    use crate::error::MiniError;
    use crate::job::{Job, JobProvider};
    use crate::metadata::EntityId;
    use crate::registry::Implementation;
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Default)]
    struct EchoJob;

    #[async_trait]
    impl Job for EchoJob {
        async fn handle(&self, data: Value) -> MiniResult<Value> {
            Ok(data)
        }
    }

    #[derive(Default)]
    struct ShoutJob;

    #[async_trait]
    impl Job for ShoutJob {
        async fn handle(&self, data: Value) -> MiniResult<Value> {
            Ok(json!(data.as_str().unwrap_or_default().to_uppercase()))
        }
    }

    fn module() -> ServiceModule {
        ServiceModule::new("util").job::<EchoJob>(Some("Echo"))
    }

    #[test]
    fn test_without_auto_register_entries_are_only_tagged() {
        let app = Application::builder().module(module()).build();

        assert!(app.registry().is_empty());
        assert_eq!(app.tagger().name_of(EntityId::of::<EchoJob>()), Some("Echo"));
    }

    #[test]
    fn test_auto_register_fills_registry() {
        let app = Application::builder()
            .options(ModuleOptions { auto_register: true })
            .module(module())
            .build();

        let echo = app.registry().get(ComponentKind::Job, "Echo").unwrap();
        assert_eq!(echo.metadata, Some(json!({ "module": "util" })));
        assert_eq!(app.tagger().kind_of(EntityId::of::<EchoJob>()), Some(ComponentKind::Job));
    }

    #[tokio::test]
    async fn test_explicit_registration_overrides_module_entry() {
        let app = Application::builder()
            .auto_register(true)
            .module(module())
            .register(RegisteredComponent::new(
                ComponentKind::Job,
                "Echo",
                Implementation::new(JobProvider::of::<ShoutJob>()),
            ))
            .build();

        assert_eq!(app.registry().len(), 1);
        assert_eq!(app.run_job("Echo", json!("hey")).await.unwrap(), json!("HEY"));
    }

    #[tokio::test]
    async fn test_unknown_feature_is_not_found() {
        let app = Application::builder().auto_register(true).module(module()).build();
        let err = app.run_feature("Missing", json!({})).await.unwrap_err();
        assert!(matches!(err, MiniError::ComponentNotFound { kind: ComponentKind::Feature, .. }));
    }
}
