pub mod conversion;
pub mod logical;
pub mod primitives;
pub mod state;
pub mod structs;

pub use state::{SchemaDeriver, DEFAULT_MAX_DEPTH};

use crate::avro::AvroSchema;
use crate::common::traversal::Traversal;
use crate::error::Result;
use crate::reflect::{Primitive, Reflect, TypeDescriptor};
use conversion::derive_type;

/// Derive the Avro schema text for `T` with default settings.
///
/// ```
/// use avro_reflect::converter::schema_of;
///
/// assert_eq!(schema_of::<i64>().unwrap(), r#"{"type":"long"}"#);
/// ```
pub fn schema_of<T: Reflect + ?Sized>() -> Result<String> {
    SchemaDeriver::new().derive(TypeDescriptor::of::<T>())
}

/// Derive the Avro schema text for an already obtained descriptor.
pub fn schema_for(ty: TypeDescriptor) -> Result<String> {
    SchemaDeriver::new().derive(ty)
}

/// Schema of the absent value: `{"type":"null"}`.
pub fn schema_of_null() -> Result<String> {
    SchemaDeriver::new().render(&AvroSchema::Primitive(Primitive::Null))
}

impl SchemaDeriver {
    /// Derive the schema text for `ty` in a fresh traversal.
    pub fn derive(&self, ty: TypeDescriptor) -> Result<String> {
        let mut traversal = Traversal::new();
        self.derive_with(ty, &mut traversal)
    }

    /// Derive the structured fragment for `ty` in a fresh traversal.
    pub fn derive_schema(&self, ty: TypeDescriptor) -> Result<AvroSchema> {
        let mut traversal = Traversal::new();
        derive_type(self, ty, &mut traversal, 0)
    }

    /// Derive within a caller-owned traversal. Named types already recorded
    /// there are emitted as references.
    pub fn derive_with(&self, ty: TypeDescriptor, traversal: &mut Traversal) -> Result<String> {
        let schema = derive_type(self, ty, traversal, 0)?;
        self.render(&schema)
    }

    pub fn render(&self, schema: &AvroSchema) -> Result<String> {
        let text = if self.pretty {
            schema.to_json_pretty()?
        } else {
            schema.to_json()?
        };
        Ok(text)
    }
}
