use std::any::TypeId;
use std::collections::HashSet;

use crate::reflect::TypeDescriptor;

/// Types visited during one derivation.
///
/// Grows monotonically while the deriver recurses and is dropped with the
/// call that created it. Callers that want several schemas to share
/// references (see [`crate::converter::SchemaDeriver::derive_with`]) keep one
/// alive across calls.
#[derive(Debug, Default, Clone)]
pub struct Traversal {
    seen: HashSet<TypeId>,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ty: TypeDescriptor) -> bool {
        self.seen.contains(&ty.id())
    }

    /// Record `ty`; returns `false` if it was already present.
    pub fn insert(&mut self, ty: TypeDescriptor) -> bool {
        self.seen.insert(ty.id())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
