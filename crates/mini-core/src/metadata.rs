//! Metadata tagging.
//!
//! Associates a `(kind, name)` pair with a type without touching the type
//! itself. The association lives in a side table keyed by [`TypeId`], so two
//! structurally identical but distinct types always carry independent tags.

use serde::Serialize;
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

use crate::component::ComponentKind;

/// Identity of a taggable entity.
#[derive(Debug, Clone, Copy)]
pub struct EntityId {
    type_id: TypeId,
    type_name: &'static str,
}

impl EntityId {
    /// Identity of the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Identity of the type of an already constructed value.
    pub fn of_val<T: ?Sized + 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// Fully qualified type name, as reported by the compiler.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Bare declared identifier: `app::jobs::SendEmailJob<T>` -> `SendEmailJob`.
    pub fn declared_name(&self) -> &'static str {
        let base = self.type_name.split('<').next().unwrap_or(self.type_name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

/// The `(kind, name)` annotation attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentTag {
    pub kind: ComponentKind,
    pub name: String,
}

/// Side table of component tags.
#[derive(Debug, Default)]
pub struct Tagger {
    tags: HashMap<EntityId, ComponentTag>,
}

impl Tagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `kind` and `name` to `entity`, replacing any previous tag.
    ///
    /// When `name` is `None` the entity's declared identifier is used.
    pub fn tag(&mut self, entity: EntityId, kind: ComponentKind, name: Option<&str>) -> &ComponentTag {
        let name = name.unwrap_or_else(|| entity.declared_name()).to_string();
        debug!(entity = entity.type_name(), %kind, name = %name, "Tagging component");

        self.tags.insert(entity, ComponentTag { kind, name });
        &self.tags[&entity]
    }

    /// Tag the type `T`.
    pub fn tag_type<T: ?Sized + 'static>(&mut self, kind: ComponentKind, name: Option<&str>) -> &ComponentTag {
        self.tag(EntityId::of::<T>(), kind, name)
    }

    /// Whether a kind has been attached to `entity`.
    pub fn is_tagged(&self, entity: EntityId) -> bool {
        self.tags.contains_key(&entity)
    }

    pub fn kind_of(&self, entity: EntityId) -> Option<ComponentKind> {
        self.tags.get(&entity).map(|tag| tag.kind)
    }

    pub fn name_of(&self, entity: EntityId) -> Option<&str> {
        self.tags.get(&entity).map(|tag| tag.name.as_str())
    }

    pub fn tag_of(&self, entity: EntityId) -> Option<&ComponentTag> {
        self.tags.get(&entity)
    }

    /// Iterate over every tagged entity. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &ComponentTag)> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alpha {
        #[allow(dead_code)]
        value: u32,
    }

    struct Beta {
        #[allow(dead_code)]
        value: u32,
    }

    struct SendEmailJob;

    mod nested {
        pub struct Wrapper<T>(pub T);
    }

    #[test]
    fn test_untagged_entity() {
        let tagger = Tagger::new();
        let id = EntityId::of::<Alpha>();
        assert!(!tagger.is_tagged(id));
        assert_eq!(tagger.kind_of(id), None);
        assert_eq!(tagger.name_of(id), None);
    }

    #[test]
    fn test_tag_with_explicit_name() {
        let mut tagger = Tagger::new();
        tagger.tag_type::<Alpha>(ComponentKind::Job, Some("Alpha"));

        let id = EntityId::of::<Alpha>();
        assert!(tagger.is_tagged(id));
        assert_eq!(tagger.kind_of(id), Some(ComponentKind::Job));
        assert_eq!(tagger.name_of(id), Some("Alpha"));
    }

    #[test]
    fn test_name_defaults_to_declared_identifier() {
        let mut tagger = Tagger::new();
        let tag = tagger.tag_type::<SendEmailJob>(ComponentKind::Job, None);
        assert_eq!(tag.name, "SendEmailJob");
    }

    #[test]
    fn test_declared_name_strips_path_and_generics() {
        let id = EntityId::of::<nested::Wrapper<Alpha>>();
        assert_eq!(id.declared_name(), "Wrapper");
    }

    #[test]
    fn test_retag_overwrites() {
        let mut tagger = Tagger::new();
        tagger.tag_type::<Alpha>(ComponentKind::Job, Some("First"));
        tagger.tag_type::<Alpha>(ComponentKind::Feature, Some("Second"));

        let id = EntityId::of::<Alpha>();
        assert_eq!(tagger.kind_of(id), Some(ComponentKind::Feature));
        assert_eq!(tagger.name_of(id), Some("Second"));
        assert_eq!(tagger.len(), 1);
    }

    #[test]
    fn test_identical_structures_keep_independent_tags() {
        let mut tagger = Tagger::new();
        tagger.tag_type::<Alpha>(ComponentKind::Job, Some("Alpha"));
        tagger.tag_type::<Beta>(ComponentKind::Job, Some("Beta"));

        assert_eq!(tagger.name_of(EntityId::of::<Alpha>()), Some("Alpha"));
        assert_eq!(tagger.name_of(EntityId::of::<Beta>()), Some("Beta"));
    }

    #[test]
    fn test_instance_is_classified_by_its_type() {
        let mut tagger = Tagger::new();
        tagger.tag_type::<Beta>(ComponentKind::Domain, Some("Pricing"));

        let instance = Beta { value: 7 };
        assert_eq!(tagger.kind_of(EntityId::of_val(&instance)), Some(ComponentKind::Domain));
    }
}
