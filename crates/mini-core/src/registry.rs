//! Component registry.
//!
//! Catalog of constructible components keyed by `(kind, name)`. Lookups are
//! exact and case-sensitive. Registering an existing key replaces the previous
//! entry (last write wins); the replacement is logged, never rejected.

use serde_json::Value;
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::component::ComponentKind;

/// Composite registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKey {
    pub kind: ComponentKind,
    pub name: String,
}

impl ComponentKey {
    pub fn new(kind: ComponentKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

/// Opaque shared handle to whatever constructs or serves a component.
///
/// Cloning shares the handle; [`Implementation::ptr_eq`] compares identity.
#[derive(Clone)]
pub struct Implementation {
    type_name: &'static str,
    implementor: &'static str,
    handle: Arc<dyn Any + Send + Sync>,
}

impl Implementation {
    /// Wrap a value in a new shared handle.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Share an existing handle.
    pub fn from_arc<T: Any + Send + Sync>(handle: Arc<T>) -> Self {
        Self {
            type_name: type_name::<T>(),
            implementor: type_name::<T>(),
            handle,
        }
    }

    /// Record the component type behind a provider or handle, e.g. the job
    /// type a `JobProvider` builds.
    pub fn implemented_by(mut self, implementor: &'static str) -> Self {
        self.implementor = implementor;
        self
    }

    /// Type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Component type this handle stands for. Defaults to [`type_name`](Self::type_name).
    pub fn implementor(&self) -> &'static str {
        self.implementor
    }

    pub fn is<T: Any + Send + Sync>(&self) -> bool {
        self.handle.is::<T>()
    }

    /// Recover the concrete handle, if the wrapped value is a `T`.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.handle).downcast::<T>().ok()
    }

    /// Whether both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementation")
            .field("type_name", &self.type_name)
            .field("implementor", &self.implementor)
            .finish()
    }
}

/// A registry entry.
#[derive(Debug, Clone)]
pub struct RegisteredComponent {
    pub name: String,
    pub kind: ComponentKind,
    pub implementation: Implementation,
    pub metadata: Option<Value>,
}

impl RegisteredComponent {
    pub fn new(kind: ComponentKind, name: impl Into<String>, implementation: Implementation) -> Self {
        Self {
            name: name.into(),
            kind,
            implementation,
            metadata: None,
        }
    }

    /// Attach free-form metadata.
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn key(&self) -> ComponentKey {
        ComponentKey::new(self.kind, self.name.clone())
    }
}

/// In-memory catalog of registered components.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<ComponentKey, RegisteredComponent>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `component`, replacing any entry under the same `(kind, name)`.
    ///
    /// Returns the replaced entry.
    pub fn register(&mut self, component: RegisteredComponent) -> Option<RegisteredComponent> {
        let key = component.key();
        debug!(key = %key, implementation = component.implementation.implementor(), "Registering component");

        let previous = self.components.insert(key.clone(), component);
        if let Some(ref old) = previous {
            let current = &self.components[&key];
            if replaces_implementation(&old.implementation, &current.implementation) {
                warn!(
                    key = %key,
                    previous = old.implementation.implementor(),
                    current = current.implementation.implementor(),
                    "Component re-registered with a different implementation"
                );
            } else {
                debug!(key = %key, "Component re-registered");
            }
        }

        previous
    }

    /// Exact-match lookup.
    pub fn get(&self, kind: ComponentKind, name: &str) -> Option<&RegisteredComponent> {
        self.components.get(&ComponentKey::new(kind, name))
    }

    /// All entries of `kind`. Order is unspecified.
    pub fn get_by_kind(&self, kind: ComponentKind) -> Vec<&RegisteredComponent> {
        self.components
            .values()
            .filter(|component| component.kind == kind)
            .collect()
    }

    /// All entries. Order is unspecified.
    pub fn all(&self) -> Vec<&RegisteredComponent> {
        self.components.values().collect()
    }

    pub fn has(&self, kind: ComponentKind, name: &str) -> bool {
        self.components.contains_key(&ComponentKey::new(kind, name))
    }

    /// Remove an entry. Returns `false` if nothing was registered under the key.
    pub fn remove(&mut self, kind: ComponentKind, name: &str) -> bool {
        let removed = self.components.remove(&ComponentKey::new(kind, name)).is_some();
        if removed {
            debug!(%kind, name, "Removed component");
        }
        removed
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Whether `current` swaps in a different component type than `previous`.
fn replaces_implementation(previous: &Implementation, current: &Implementation) -> bool {
    previous.implementor() != current.implementor()
}
