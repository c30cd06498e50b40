//! Services: bounded contexts that group jobs and features.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A bounded context exposed to the rest of the application.
pub trait Service: Send + Sync {
    /// Name the service is registered under.
    fn name(&self) -> &str;
}

/// Shared service instance stored in the registry.
///
/// Keeps both the trait object and the concrete handle so callers can
/// resolve either by name alone or as the concrete type.
#[derive(Clone)]
pub struct ServiceHandle {
    service: Arc<dyn Service>,
    concrete: Arc<dyn Any + Send + Sync>,
}

impl ServiceHandle {
    pub fn new<S: Service + 'static>(service: Arc<S>) -> Self {
        Self {
            service: service.clone(),
            concrete: service,
        }
    }

    pub fn service(&self) -> Arc<dyn Service> {
        Arc::clone(&self.service)
    }

    pub fn downcast<S: Service + 'static>(&self) -> Option<Arc<S>> {
        Arc::clone(&self.concrete).downcast::<S>().ok()
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("name", &self.service.name())
            .finish()
    }
}
