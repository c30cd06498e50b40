//! Features and the orchestration context they run in.
//!
//! A feature composes jobs. Jobs are either instantiated directly by type or
//! resolved by name through the frozen [`ComponentRegistry`]; a missing name
//! becomes [`MiniError::ComponentNotFound`].

use async_trait::async_trait;
use futures::future::{join_all, try_join_all};
use serde_json::Value;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::component::ComponentKind;
use crate::domain::{Domain, DomainHandle};
use crate::error::{MiniError, MiniResult};
use crate::job::{Job, JobProvider};
use crate::metadata::EntityId;
use crate::registry::{ComponentKey, ComponentRegistry};
use crate::result::JobResult;
use crate::service::{Service, ServiceHandle};

/// A higher-level operation orchestrating one or more jobs.
#[async_trait]
pub trait Feature: Send + Sync {
    /// Execute the feature with the provided data.
    async fn handle(&self, ctx: &FeatureContext, data: Value) -> MiniResult<Value>;
}

type FeatureFactory = Box<dyn Fn() -> Box<dyn Feature> + Send + Sync>;

/// Constructs fresh feature instances; stored in the registry for features.
pub struct FeatureProvider {
    type_name: &'static str,
    factory: FeatureFactory,
}

impl FeatureProvider {
    pub fn of<F: Feature + Default + 'static>() -> Self {
        Self {
            type_name: type_name::<F>(),
            factory: Box::new(|| Box::new(F::default())),
        }
    }

    pub fn from_fn<C>(factory: C) -> Self
    where
        C: Fn() -> Box<dyn Feature> + Send + Sync + 'static,
    {
        Self {
            type_name: type_name::<C>(),
            factory: Box::new(factory),
        }
    }

    pub fn create(&self) -> Box<dyn Feature> {
        (self.factory)()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for FeatureProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureProvider")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// A job paired with the data it should run with.
pub struct JobCall {
    label: String,
    job: Box<dyn Job>,
    data: Value,
}

impl JobCall {
    /// Instantiate `J` directly.
    pub fn of<J: Job + Default + 'static>(data: Value) -> Self {
        Self::new(EntityId::of::<J>().declared_name(), Box::new(J::default()), data)
    }

    pub fn new(label: impl Into<String>, job: Box<dyn Job>, data: Value) -> Self {
        Self {
            label: label.into(),
            job,
            data,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    async fn run(self) -> MiniResult<Value> {
        debug!(job = %self.label, "Running job");
        self.job.handle(self.data).await
    }
}

impl fmt::Debug for JobCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobCall")
            .field("label", &self.label)
            .field("data", &self.data)
            .finish()
    }
}

/// Read-only view of the application's components, handed to features.
#[derive(Debug, Clone)]
pub struct FeatureContext {
    registry: Arc<ComponentRegistry>,
}

impl FeatureContext {
    pub fn new(registry: Arc<ComponentRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Instantiate `J` and run it.
    pub async fn run_job<J: Job + Default + 'static>(&self, data: Value) -> MiniResult<Value> {
        JobCall::of::<J>(data).run().await
    }

    /// Build a fresh instance of the job registered as `name`.
    pub fn resolve_job(&self, name: &str) -> MiniResult<Box<dyn Job>> {
        let provider = self.implementation::<JobProvider>(ComponentKind::Job, name)?;
        Ok(provider.create())
    }

    /// Resolve the job registered as `name` and run it.
    pub async fn run_named_job(&self, name: &str, data: Value) -> MiniResult<Value> {
        self.job_call(name, data)?.run().await
    }

    /// Resolve a registered job into a call for [`run_jobs`](Self::run_jobs).
    pub fn job_call(&self, name: &str, data: Value) -> MiniResult<JobCall> {
        Ok(JobCall::new(name, self.resolve_job(name)?, data))
    }

    /// Run jobs concurrently. Fails on the first error; results follow call order.
    pub async fn run_jobs(&self, calls: Vec<JobCall>) -> MiniResult<Vec<Value>> {
        try_join_all(calls.into_iter().map(JobCall::run)).await
    }

    /// Run jobs concurrently and collect every outcome.
    pub async fn run_jobs_settled(&self, calls: Vec<JobCall>) -> Vec<JobResult> {
        join_all(calls.into_iter().map(JobCall::run))
            .await
            .into_iter()
            .map(JobResult::from_outcome)
            .collect()
    }

    pub fn resolve_feature(&self, name: &str) -> MiniResult<Box<dyn Feature>> {
        let provider = self.implementation::<FeatureProvider>(ComponentKind::Feature, name)?;
        Ok(provider.create())
    }

    /// Resolve the feature registered as `name` and run it in this context.
    pub async fn run_feature(&self, name: &str, data: Value) -> MiniResult<Value> {
        let feature = self.resolve_feature(name)?;
        debug!(feature = name, "Running feature");
        feature.handle(self, data).await
    }

    pub fn service(&self, name: &str) -> MiniResult<Arc<dyn Service>> {
        Ok(self.implementation::<ServiceHandle>(ComponentKind::Service, name)?.service())
    }

    /// Resolve the service registered as `name` as its concrete type.
    pub fn service_as<S: Service + 'static>(&self, name: &str) -> MiniResult<Arc<S>> {
        self.implementation::<ServiceHandle>(ComponentKind::Service, name)?
            .downcast::<S>()
            .ok_or_else(|| mismatch::<S>(ComponentKind::Service, name, type_name::<ServiceHandle>()))
    }

    pub fn domain(&self, name: &str) -> MiniResult<Arc<dyn Domain>> {
        Ok(self.implementation::<DomainHandle>(ComponentKind::Domain, name)?.domain())
    }

    /// Resolve the domain registered as `name` as its concrete type.
    pub fn domain_as<D: Domain + 'static>(&self, name: &str) -> MiniResult<Arc<D>> {
        self.implementation::<DomainHandle>(ComponentKind::Domain, name)?
            .downcast::<D>()
            .ok_or_else(|| mismatch::<D>(ComponentKind::Domain, name, type_name::<DomainHandle>()))
    }

    fn implementation<T: Any + Send + Sync>(&self, kind: ComponentKind, name: &str) -> MiniResult<Arc<T>> {
        let component = self
            .registry
            .get(kind, name)
            .ok_or_else(|| MiniError::not_found(kind, name))?;

        component
            .implementation
            .downcast::<T>()
            .ok_or_else(|| mismatch::<T>(kind, name, component.implementation.type_name()))
    }
}

fn mismatch<T>(kind: ComponentKind, name: &str, found: &'static str) -> MiniError {
    MiniError::ImplementationMismatch {
        key: ComponentKey::new(kind, name).to_string(),
        expected: type_name::<T>(),
        found,
    }
}
