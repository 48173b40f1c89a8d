//! Runtime type descriptors.
//!
//! The deriver never looks at concrete Rust types. It consumes a
//! [`TypeDescriptor`]: a `Copy` handle pairing a [`TypeId`] (identity) with a
//! lazily evaluated [`TypeInfo`] (shape). Laziness matters for records that
//! mention their own type in a field: building the descriptor never recurses,
//! only the deriver does, and the deriver tracks what it has visited.
//!
//! Types opt in by implementing [`Reflect`]. The crate ships implementations
//! for the standard scalar, pointer and collection types (see
//! [`impls`](self)); user records and enums build their [`TypeInfo`] by hand:
//!
//! ```
//! use avro_reflect::reflect::{Reflect, TypeInfo};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Reflect for Point {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::record("Point", "geo")
//!             .with_field::<i32>("x")
//!             .with_field::<i32>("y")
//!     }
//! }
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

mod impls;
pub mod info;

pub use info::{Field, LogicalType, Primitive, TypeInfo, TypeKind};

/// Implemented by every type the deriver can describe.
pub trait Reflect: 'static {
    /// The shape of this type.
    fn type_info() -> TypeInfo;

    /// Handle used for identity and lazy shape lookup.
    ///
    /// Transparent wrappers (`Box`, `Rc`, `Arc`) override this to return the
    /// pointee's descriptor so both share one identity.
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new(TypeId::of::<Self>(), Self::type_info)
    }
}

/// Opaque handle to a reflected type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    info: fn() -> TypeInfo,
}

impl TypeDescriptor {
    pub fn new(id: TypeId, info: fn() -> TypeInfo) -> Self {
        Self { id, info }
    }

    pub fn of<T: Reflect + ?Sized>() -> Self {
        T::descriptor()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Evaluate the type's shape. Field and generic-argument types stay
    /// unevaluated descriptors.
    pub fn info(&self) -> TypeInfo {
        (self.info)()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info();
        f.debug_struct("TypeDescriptor")
            .field("namespace", &info.namespace())
            .field("name", &info.name())
            .finish()
    }
}
