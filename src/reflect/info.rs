use std::borrow::Cow;

use serde::Serialize;

use super::{Reflect, TypeDescriptor};
use crate::common::names::split_type_path;

/// Avro primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    Long,
    Int,
    Float,
    Double,
    Bytes,
    Boolean,
    Null,
}

impl Primitive {
    pub fn avro_name(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Long => "long",
            Primitive::Int => "int",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Bytes => "bytes",
            Primitive::Boolean => "boolean",
            Primitive::Null => "null",
        }
    }
}

/// Value types encoded as Avro `fixed` blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    /// 128-bit unique identifier.
    Guid,
    /// 128-bit decimal number.
    Decimal,
    /// UTC point in time.
    Timestamp,
    /// Span of time. Recognized, but has no mapping.
    Duration,
}

impl LogicalType {
    /// Built-in alias used as the schema name, `None` for `Duration`, which
    /// keeps its declared name.
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            LogicalType::Guid => Some("guid"),
            LogicalType::Decimal => Some("decimal"),
            LogicalType::Timestamp => Some("utcdatetime"),
            LogicalType::Duration => None,
        }
    }

    /// Size in bytes of the `fixed` encoding.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            LogicalType::Guid | LogicalType::Decimal => Some(16),
            LogicalType::Timestamp => Some(8),
            LogicalType::Duration => None,
        }
    }
}

/// Category of a reflected type.
#[derive(Debug, Clone)]
pub enum TypeKind {
    Primitive(Primitive),
    Logical(LogicalType),
    /// Optional wrapper around exactly one type.
    Nullable(TypeDescriptor),
    /// Enumeration; symbols in declaration order.
    Enum(Vec<Cow<'static, str>>),
    /// Anything iterable over a single item type.
    Sequence(TypeDescriptor),
    /// Keyed association.
    Map {
        key: TypeDescriptor,
        value: TypeDescriptor,
    },
    /// Composite type with ordered public fields.
    Record,
}

impl TypeKind {
    /// Whether the Avro rendering of this kind carries a name that later
    /// occurrences can refer back to.
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            TypeKind::Logical(_) | TypeKind::Enum(_) | TypeKind::Record
        )
    }
}

/// A named field of a record.
#[derive(Debug, Clone)]
pub struct Field {
    name: Cow<'static, str>,
    ty: TypeDescriptor,
}

impl Field {
    pub fn new(name: impl Into<Cow<'static, str>>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> TypeDescriptor {
        self.ty
    }
}

/// The reflected shape of a type.
///
/// Constructed through the kind-specific builders so that the kind, generic
/// arguments and fields always agree.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    name: Cow<'static, str>,
    namespace: Cow<'static, str>,
    kind: TypeKind,
    fields: Vec<Field>,
}

impl TypeInfo {
    fn new(
        name: impl Into<Cow<'static, str>>,
        namespace: impl Into<Cow<'static, str>>,
        kind: TypeKind,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            fields: Vec::new(),
        }
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::new(primitive.avro_name(), "", TypeKind::Primitive(primitive))
    }

    pub fn logical(
        logical: LogicalType,
        name: impl Into<Cow<'static, str>>,
        namespace: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(name, namespace, TypeKind::Logical(logical))
    }

    pub fn nullable(inner: TypeDescriptor) -> Self {
        Self::new("Option", "core.option", TypeKind::Nullable(inner))
    }

    pub fn enumeration<S>(
        name: impl Into<Cow<'static, str>>,
        namespace: impl Into<Cow<'static, str>>,
        symbols: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        let symbols = symbols.into_iter().map(Into::into).collect();
        Self::new(name, namespace, TypeKind::Enum(symbols))
    }

    pub fn sequence(
        name: impl Into<Cow<'static, str>>,
        namespace: impl Into<Cow<'static, str>>,
        item: TypeDescriptor,
    ) -> Self {
        Self::new(name, namespace, TypeKind::Sequence(item))
    }

    pub fn map(
        name: impl Into<Cow<'static, str>>,
        namespace: impl Into<Cow<'static, str>>,
        key: TypeDescriptor,
        value: TypeDescriptor,
    ) -> Self {
        Self::new(name, namespace, TypeKind::Map { key, value })
    }

    /// An empty record; add fields with [`field`](Self::field) or
    /// [`with_field`](Self::with_field).
    pub fn record(
        name: impl Into<Cow<'static, str>>,
        namespace: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(name, namespace, TypeKind::Record)
    }

    /// An empty record named after `T`'s Rust path: `my_crate::geo::Point`
    /// becomes name `Point` in namespace `my_crate.geo`.
    pub fn record_of<T: ?Sized + 'static>() -> Self {
        let (namespace, name) = split_type_path(std::any::type_name::<T>());
        Self::record(name, namespace)
    }

    /// An enum named after `T`'s Rust path, see [`record_of`](Self::record_of).
    pub fn enumeration_of<T: ?Sized + 'static>(
        symbols: impl IntoIterator<Item = impl Into<Cow<'static, str>>>,
    ) -> Self {
        let (namespace, name) = split_type_path(std::any::type_name::<T>());
        Self::enumeration(name, namespace, symbols)
    }

    /// Append a field. Fields keep insertion order.
    pub fn field(mut self, name: impl Into<Cow<'static, str>>, ty: TypeDescriptor) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    pub fn with_field<T: Reflect + ?Sized>(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.field(name, TypeDescriptor::of::<T>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Generic arguments, in declaration order.
    pub fn generic_args(&self) -> Vec<TypeDescriptor> {
        match &self.kind {
            TypeKind::Nullable(inner) | TypeKind::Sequence(inner) => vec![*inner],
            TypeKind::Map { key, value } => vec![*key, *value],
            _ => Vec::new(),
        }
    }

    /// Public fields in declaration order; empty for anything but records.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
