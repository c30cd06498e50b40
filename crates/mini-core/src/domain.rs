//! Domains: business rules shared across services.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Reusable business logic.
pub trait Domain: Send + Sync {
    fn name(&self) -> &str;
}

/// Shared domain instance stored in the registry.
#[derive(Clone)]
pub struct DomainHandle {
    domain: Arc<dyn Domain>,
    concrete: Arc<dyn Any + Send + Sync>,
}

impl DomainHandle {
    pub fn new<D: Domain + 'static>(domain: Arc<D>) -> Self {
        Self {
            domain: domain.clone(),
            concrete: domain,
        }
    }

    pub fn domain(&self) -> Arc<dyn Domain> {
        Arc::clone(&self.domain)
    }

    pub fn downcast<D: Domain + 'static>(&self) -> Option<Arc<D>> {
        Arc::clone(&self.concrete).downcast::<D>().ok()
    }
}

impl fmt::Debug for DomainHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainHandle")
            .field("name", &self.domain.name())
            .finish()
    }
}
