use tracing::warn;

use crate::avro::AvroSchema;
use crate::common::names::type_fullname;
use crate::converter::structs::{create_fixed_type, nullable};
use crate::error::{DeriveError, Result};
use crate::reflect::{LogicalType, TypeDescriptor, TypeInfo};

/// `["<inner full name>",null]`. The wrapped type is named, never expanded.
pub fn nullable_schema(inner: TypeDescriptor) -> AvroSchema {
    nullable(type_fullname(&inner.info()))
}

/// Fixed-size encoding for the guid, decimal and timestamp logical types.
///
/// Durations are recognized but have no mapping.
pub fn logical_schema(logical: LogicalType, info: &TypeInfo) -> Result<AvroSchema> {
    match (logical.alias(), logical.fixed_size()) {
        (Some(alias), Some(size)) => Ok(create_fixed_type(alias, size)),
        _ => {
            let type_name = type_fullname(info);
            warn!(%type_name, "logical type has no Avro mapping");
            Err(DeriveError::NotSupported { type_name })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_literals() {
        let guid = TypeInfo::logical(LogicalType::Guid, "Uuid", "uuid");
        assert_eq!(
            logical_schema(LogicalType::Guid, &guid).unwrap().to_json().unwrap(),
            r#"{"type":"fixed","size":16,"name":"guid"}"#
        );
        let decimal = TypeInfo::logical(LogicalType::Decimal, "Money", "finance");
        assert_eq!(
            logical_schema(LogicalType::Decimal, &decimal)
                .unwrap()
                .to_json()
                .unwrap(),
            r#"{"type":"fixed","size":16,"name":"decimal"}"#
        );
        let timestamp = TypeInfo::logical(LogicalType::Timestamp, "SystemTime", "std.time");
        assert_eq!(
            logical_schema(LogicalType::Timestamp, &timestamp)
                .unwrap()
                .to_json()
                .unwrap(),
            r#"{"type":"fixed","size":8,"name":"utcdatetime"}"#
        );
    }

    #[test]
    fn duration_is_not_supported() {
        let duration = TypeInfo::logical(LogicalType::Duration, "Duration", "core.time");
        match logical_schema(LogicalType::Duration, &duration) {
            Err(DeriveError::NotSupported { type_name }) => {
                assert_eq!(type_name, "core.time.Duration")
            }
            other => panic!("expected NotSupported, got {other:?}"),
        }
    }

    #[test]
    fn nullable_names_the_inner_type() {
        assert_eq!(
            nullable_schema(TypeDescriptor::of::<i32>()).to_json().unwrap(),
            r#"["int",null]"#
        );
        assert_eq!(
            nullable_schema(TypeDescriptor::of::<std::time::Duration>())
                .to_json()
                .unwrap(),
            r#"["core.time.Duration",null]"#
        );
    }
}
