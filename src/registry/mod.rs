//! Type registry mapping resource kinds to their factories and readers.
//!
//! The registry is the only place that knows which kinds are wired. Adding a
//! kind means adding a `ResourceType` member, a builder, a `TypeReader`, and
//! one entry in `TypeRegistry::with_standard_types`. The document reader
//! itself does not change.
//!
//! # Example
//!
//! ```ignore
//! use storyres::registry::TypeRegistry;
//! use storyres::ResourceType;
//!
//! let registry = TypeRegistry::standard();
//! let factory = registry.new_factory(ResourceType::Story, "main")?;
//! let reader = registry.reader(ResourceType::Story)?;
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{ParseError, Result};
use crate::parser::{AchievementReader, ChoiceSceneReader, EndSceneReader, StoryReader, TypeReader};
use crate::types::{ResourceFactory, ResourceType};

/// Constructor for a kind's factory, given the resource id.
pub type FactoryFn = fn(String) -> ResourceFactory;

/// Table of wired resource kinds.
///
/// `standard()` is built once and never mutated afterwards. Custom
/// registries can be assembled with `new()` and the `register_*` methods.
#[derive(Default)]
pub struct TypeRegistry {
    factories: BTreeMap<ResourceType, FactoryFn>,
    readers: BTreeMap<ResourceType, Box<dyn TypeReader>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in kind wired.
    pub fn with_standard_types() -> Self {
        let mut registry = Self::new();
        registry
            .register_factory(ResourceType::ChoiceScene, |id| {
                ResourceFactory::new(ResourceType::ChoiceScene, id)
            })
            .register_reader(ResourceType::ChoiceScene, ChoiceSceneReader)
            .register_factory(ResourceType::EndScene, |id| {
                ResourceFactory::new(ResourceType::EndScene, id)
            })
            .register_reader(ResourceType::EndScene, EndSceneReader)
            .register_factory(ResourceType::Story, |id| {
                ResourceFactory::new(ResourceType::Story, id)
            })
            .register_reader(ResourceType::Story, StoryReader)
            .register_factory(ResourceType::Achievement, |id| {
                ResourceFactory::new(ResourceType::Achievement, id)
            })
            .register_reader(ResourceType::Achievement, AchievementReader);
        registry
    }

    /// The process-wide registry of built-in kinds.
    pub fn standard() -> &'static TypeRegistry {
        static STANDARD: OnceLock<TypeRegistry> = OnceLock::new();
        STANDARD.get_or_init(TypeRegistry::with_standard_types)
    }

    /// Wire a factory constructor for a kind, replacing any previous one.
    pub fn register_factory(&mut self, resource_type: ResourceType, factory: FactoryFn) -> &mut Self {
        self.factories.insert(resource_type, factory);
        self
    }

    /// Wire a reader for a kind, replacing any previous one.
    pub fn register_reader(
        &mut self,
        resource_type: ResourceType,
        reader: impl TypeReader + 'static,
    ) -> &mut Self {
        self.readers.insert(resource_type, Box::new(reader));
        self
    }

    /// Create a new factory for a document of the given kind.
    pub fn new_factory(&self, resource_type: ResourceType, id: &str) -> Result<ResourceFactory> {
        let constructor = self
            .factories
            .get(&resource_type)
            .ok_or(ParseError::UnsupportedType {
                resource_type,
                missing: "factory",
            })?;
        Ok(constructor(id.to_string()))
    }

    /// Get the reader for a kind.
    pub fn reader(&self, resource_type: ResourceType) -> Result<&dyn TypeReader> {
        self.readers
            .get(&resource_type)
            .map(|reader| reader.as_ref())
            .ok_or(ParseError::UnsupportedType {
                resource_type,
                missing: "reader",
            })
    }

    /// Check if a kind has both a factory and a reader.
    pub fn supports(&self, resource_type: ResourceType) -> bool {
        self.factories.contains_key(&resource_type) && self.readers.contains_key(&resource_type)
    }

    /// Fully wired kinds, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = ResourceType> + '_ {
        ResourceType::ALL
            .into_iter()
            .filter(move |t| self.supports(*t))
    }

    pub fn len(&self) -> usize {
        self.types().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .field("readers", &self.readers.keys().collect::<Vec<_>>())
            .finish()
    }
}
