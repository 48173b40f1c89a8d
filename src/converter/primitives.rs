use crate::avro::AvroSchema;
use crate::reflect::{TypeInfo, TypeKind};

/// Map a built-in scalar to its fixed Avro literal.
///
/// Pure: never consults the traversal, so a primitive is emitted in full at
/// every occurrence.
pub fn primitive_schema(info: &TypeInfo) -> Option<AvroSchema> {
    match info.kind() {
        TypeKind::Primitive(primitive) => Some(AvroSchema::Primitive(*primitive)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{Primitive, Reflect};
    use rstest::rstest;

    fn literal<T: Reflect + ?Sized>() -> Option<String> {
        primitive_schema(&T::type_info()).map(|s| s.to_json().unwrap())
    }

    #[rstest]
    #[case(Primitive::String, r#"{"type":"string"}"#)]
    #[case(Primitive::Long, r#"{"type":"long"}"#)]
    #[case(Primitive::Int, r#"{"type":"int"}"#)]
    #[case(Primitive::Float, r#"{"type":"float"}"#)]
    #[case(Primitive::Double, r#"{"type":"double"}"#)]
    #[case(Primitive::Bytes, r#"{"type":"bytes"}"#)]
    #[case(Primitive::Boolean, r#"{"type":"boolean"}"#)]
    #[case(Primitive::Null, r#"{"type":"null"}"#)]
    fn literal_table(#[case] primitive: Primitive, #[case] expected: &str) {
        let schema = primitive_schema(&TypeInfo::primitive(primitive)).unwrap();
        assert_eq!(schema.to_json().unwrap(), expected);
    }

    #[test]
    fn non_primitives_fall_through() {
        assert_eq!(literal::<Option<i32>>(), None);
        assert_eq!(literal::<Vec<i32>>(), None);
        assert_eq!(literal::<std::time::SystemTime>(), None);
        assert_eq!(literal::<u8>().as_deref(), Some(r#"{"type":"bytes"}"#));
    }
}
