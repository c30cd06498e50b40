//! Jobs: the smallest units of work.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::error::MiniResult;

/// A unit of work that takes input data and produces a result.
#[async_trait]
pub trait Job: Send + Sync {
    /// Execute the job with the provided data.
    async fn handle(&self, data: Value) -> MiniResult<Value>;
}

type JobFactory = Box<dyn Fn() -> Box<dyn Job> + Send + Sync>;

/// Constructs fresh job instances; stored in the registry for jobs.
pub struct JobProvider {
    type_name: &'static str,
    factory: JobFactory,
}

impl JobProvider {
    /// Provider for a job type with a default constructor.
    pub fn of<J: Job + Default + 'static>() -> Self {
        Self {
            type_name: std::any::type_name::<J>(),
            factory: Box::new(|| Box::new(J::default())),
        }
    }

    /// Provider backed by an arbitrary factory, for jobs that need arguments.
    pub fn from_fn<F>(factory: F) -> Self
    where
        F: Fn() -> Box<dyn Job> + Send + Sync + 'static,
    {
        Self {
            type_name: std::any::type_name::<F>(),
            factory: Box::new(factory),
        }
    }

    /// Build a new job instance.
    pub fn create(&self) -> Box<dyn Job> {
        (self.factory)()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for JobProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobProvider")
            .field("type_name", &self.type_name)
            .finish()
    }
}
