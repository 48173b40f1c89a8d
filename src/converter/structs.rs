use crate::avro::{AvroField, AvroSchema, UnionBranch};

fn non_empty(namespace: String) -> Option<String> {
    (!namespace.is_empty()).then_some(namespace)
}

/// Create an Avro record type.
///
/// A record is a structured type with named fields; the namespace clause is
/// dropped when empty.
pub fn create_avro_record(name: String, namespace: String, fields: Vec<AvroField>) -> AvroSchema {
    AvroSchema::Record {
        name,
        namespace: non_empty(namespace),
        fields,
    }
}

/// Create an Avro enum type. Symbols keep declaration order.
pub fn create_enum_type(name: String, namespace: String, symbols: Vec<String>) -> AvroSchema {
    AvroSchema::Enum {
        name,
        namespace,
        symbols,
    }
}

/// Create a back-reference to an already emitted named type.
pub fn create_reference(name: String, namespace: String) -> AvroSchema {
    AvroSchema::Reference {
        name,
        namespace: non_empty(namespace),
    }
}

pub fn create_fixed_type(name: &str, size: usize) -> AvroSchema {
    AvroSchema::Fixed {
        name: name.to_string(),
        size,
    }
}

/// Union of a type name with `null`.
pub fn nullable(fullname: String) -> AvroSchema {
    AvroSchema::Union(vec![UnionBranch::Named(fullname), UnionBranch::Null])
}
