//! Name-indexed collection of type descriptors.
//!
//! Used by the CLI to resolve type names given on the command line, and by
//! callers that want several related schemas derived together.
//!
//! ```
//! use avro_reflect::registry::TypeRegistry;
//!
//! let registry = TypeRegistry::with_builtins();
//! assert_eq!(registry.schema("int").unwrap(), r#"{"type":"int"}"#);
//! ```

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::common::names::type_fullname;
use crate::common::traversal::Traversal;
use crate::converter::SchemaDeriver;
use crate::error::{DeriveError, Result};
use crate::reflect::{Reflect, TypeDescriptor};

#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDescriptor>,
    deriver: SchemaDeriver,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with every built-in type the crate reflects,
    /// keyed by schema full name (`int`, `utcdatetime`, `core.time.Duration`, ...).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register::<String>()
            .register::<i64>()
            .register::<i32>()
            .register::<f32>()
            .register::<f64>()
            .register::<[u8]>()
            .register::<bool>()
            .register::<()>()
            .register::<SystemTime>()
            .register::<Duration>();
        #[cfg(feature = "uuid")]
        registry.register::<uuid::Uuid>();
        registry
    }

    pub fn with_deriver(mut self, deriver: SchemaDeriver) -> Self {
        self.deriver = deriver;
        self
    }

    /// Register `T` under its schema full name. A later registration under
    /// the same name replaces the earlier one.
    pub fn register<T: Reflect + ?Sized>(&mut self) -> &mut Self {
        let descriptor = TypeDescriptor::of::<T>();
        let name = type_fullname(&descriptor.info());
        self.insert(name, descriptor)
    }

    /// Register a descriptor under an explicit name.
    pub fn insert(&mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> &mut Self {
        let name = name.into();
        debug!(%name, "registering type");
        self.types.insert(name, descriptor);
        self
    }

    pub fn get(&self, name: &str) -> Option<TypeDescriptor> {
        self.types.get(name).copied()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Derive the schema of one registered type.
    pub fn schema(&self, name: &str) -> Result<String> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| DeriveError::UnknownType(name.to_string()))?;
        self.deriver.derive(descriptor)
    }

    /// Derive every registered type in name order, sharing one traversal:
    /// a named type expanded by an earlier entry is a reference in later ones.
    pub fn schemas(&self) -> Result<Vec<(String, String)>> {
        let mut traversal = Traversal::new();
        self.types
            .iter()
            .map(|(name, descriptor)| -> Result<(String, String)> {
                let schema = self.deriver.derive_with(*descriptor, &mut traversal)?;
                Ok((name.clone(), schema))
            })
            .collect()
    }
}
