use tracing::{debug, trace, warn};

use crate::avro::{AvroField, AvroSchema, FieldType};
use crate::common::names::{qualified_name, type_fullname, type_name_and_namespace};
use crate::common::traversal::Traversal;
use crate::converter::logical::{logical_schema, nullable_schema};
use crate::converter::primitives::primitive_schema;
use crate::converter::state::SchemaDeriver;
use crate::converter::structs::{create_avro_record, create_enum_type, create_reference};
use crate::error::{DeriveError, Result};
use crate::reflect::{TypeDescriptor, TypeInfo, TypeKind};

/// Derive the schema fragment for `ty`, growing `traversal` as a side effect.
///
/// Primitives short-circuit to their literal. A named type that is already
/// in the traversal becomes a reference; anything else is expanded and then
/// recorded.
pub fn derive_type(
    deriver: &SchemaDeriver,
    ty: TypeDescriptor,
    traversal: &mut Traversal,
    depth: usize,
) -> Result<AvroSchema> {
    let info = ty.info();

    if let Some(schema) = primitive_schema(&info) {
        trace!(name = info.name(), "primitive");
        traversal.insert(ty);
        return Ok(schema);
    }

    if info.kind().is_named() && traversal.contains(ty) {
        let (namespace, name) = type_name_and_namespace(&info);
        trace!(%name, %namespace, "already traversed, emitting reference");
        return Ok(create_reference(name, namespace));
    }

    if depth >= deriver.max_depth {
        return Err(DeriveError::DepthExceeded {
            type_name: type_fullname(&info),
            limit: deriver.max_depth,
        });
    }

    let schema = complex_type_schema(deriver, ty, &info, traversal, depth)?;
    traversal.insert(ty);
    Ok(schema)
}

fn complex_type_schema(
    deriver: &SchemaDeriver,
    ty: TypeDescriptor,
    info: &TypeInfo,
    traversal: &mut Traversal,
    depth: usize,
) -> Result<AvroSchema> {
    match info.kind() {
        TypeKind::Primitive(primitive) => Ok(AvroSchema::Primitive(*primitive)),
        TypeKind::Nullable(inner) => Ok(nullable_schema(*inner)),
        TypeKind::Logical(logical) => logical_schema(*logical, info),
        TypeKind::Enum(symbols) => {
            let (namespace, name) = type_name_and_namespace(info);
            let symbols = symbols.iter().map(|s| s.to_string()).collect();
            Ok(create_enum_type(name, namespace, symbols))
        }
        TypeKind::Sequence(_) => Err(not_implemented(info, "sequence")),
        TypeKind::Map { .. } => Err(not_implemented(info, "map")),
        TypeKind::Record => record_schema(deriver, ty, info, traversal, depth),
    }
}

fn not_implemented(info: &TypeInfo, kind: &'static str) -> DeriveError {
    let type_name = type_fullname(info);
    warn!(%type_name, kind, "no Avro mapping implemented");
    DeriveError::NotImplemented { type_name, kind }
}

/// Expand a record, one field per declared field in declaration order.
///
/// The record is recorded before its fields are visited so that a field of
/// its own type (directly or further down) refers back instead of recursing.
fn record_schema(
    deriver: &SchemaDeriver,
    ty: TypeDescriptor,
    info: &TypeInfo,
    traversal: &mut Traversal,
    depth: usize,
) -> Result<AvroSchema> {
    let (namespace, name) = type_name_and_namespace(info);
    traversal.insert(ty);
    debug!(
        record = %qualified_name(&namespace, &name),
        fields = info.fields().len(),
        "expanding record"
    );

    let mut fields = Vec::with_capacity(info.fields().len());
    for field in info.fields() {
        let field_ty = field.ty();
        let field_info = field_ty.info();
        let field_type = if field_info.kind().is_named() && traversal.contains(field_ty) {
            FieldType::Named(type_fullname(&field_info))
        } else {
            let schema = derive_type(deriver, field_ty, traversal, depth + 1)?;
            FieldType::Inline(Box::new(schema))
        };
        fields.push(AvroField::new(field.name(), field_type));
    }

    Ok(create_avro_record(name, namespace, fields))
}
