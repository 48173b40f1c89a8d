use std::sync::LazyLock;

use regex::Regex;

use crate::reflect::{TypeInfo, TypeKind};

static INVALID_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());
static INVALID_NAMESPACE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_\.]").unwrap());

/// Convert a raw string into a valid Avro name.
///
/// Ensures the identifier starts with a letter or underscore,
/// replaces invalid characters with `_`, and prefixes leading digits.
pub fn avro_name(name: &str) -> String {
    let mut val = INVALID_NAME_CHARS.replace_all(name, "_").to_string();
    if val.is_empty() || !val.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        val = format!("_{}", val);
    }
    val
}

/// Convert an input string into a valid Avro namespace.
///
/// Replaces invalid chars with `_` but preserves dots as separators.
/// Prefixes with `_` if starting with a digit.
pub fn avro_namespace(name: &str) -> String {
    let mut val = INVALID_NAMESPACE_CHARS.replace_all(name, "_").to_string();
    if val.starts_with(|c: char| c.is_ascii_digit()) {
        val = format!("_{}", val);
    }
    val
}

/// `my_crate::geo` → `my_crate.geo`
pub fn namespace_from_module_path(path: &str) -> String {
    avro_namespace(&path.replace("::", "."))
}

/// Split a Rust type path (as produced by [`std::any::type_name`]) into an
/// Avro `(namespace, name)` pair.
///
/// Generic arguments stay with the name and are flattened by [`avro_name`]:
/// `app::Pair<i32>` → `("app", "Pair_i32_")`.
pub fn split_type_path(path: &str) -> (String, String) {
    let head_end = path.find('<').unwrap_or(path.len());
    match path[..head_end].rfind("::") {
        Some(idx) => (
            namespace_from_module_path(&path[..idx]),
            avro_name(&path[idx + 2..]),
        ),
        None => (String::new(), avro_name(path)),
    }
}

/// Resolve the `(namespace, name)` pair the schema uses for a type.
///
/// Primitives and the guid / decimal / timestamp logical types resolve to
/// their fixed alias in the empty namespace. Everything else, durations
/// included, keeps its declared namespace and name.
pub fn type_name_and_namespace(info: &TypeInfo) -> (String, String) {
    let alias = match info.kind() {
        TypeKind::Primitive(primitive) => Some(primitive.avro_name()),
        TypeKind::Logical(logical) => logical.alias(),
        _ => None,
    };
    match alias {
        Some(alias) => (String::new(), alias.to_string()),
        None => (info.namespace().to_string(), info.name().to_string()),
    }
}

/// Build the full name of a type from `namespace` and `name`.
pub fn qualified_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

/// [`type_name_and_namespace`] joined with [`qualified_name`].
pub fn type_fullname(info: &TypeInfo) -> String {
    let (namespace, name) = type_name_and_namespace(info);
    qualified_name(&namespace, &name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{LogicalType, Primitive, TypeDescriptor};

    #[test]
    fn names_are_sanitized() {
        assert_eq!(avro_name("Point"), "Point");
        assert_eq!(avro_name("Pair<i32>"), "Pair_i32_");
        assert_eq!(avro_name("9lives"), "_9lives");
        assert_eq!(avro_name(""), "_");
        assert_eq!(avro_namespace("com.example-app"), "com.example_app");
        assert_eq!(avro_namespace("1st.ns"), "_1st.ns");
    }

    #[test]
    fn module_paths_become_dotted() {
        assert_eq!(namespace_from_module_path("my_crate::geo"), "my_crate.geo");
        assert_eq!(
            split_type_path("my_crate::geo::Point"),
            ("my_crate.geo".to_string(), "Point".to_string())
        );
        assert_eq!(
            split_type_path("app::Pair<alloc::string::String>"),
            ("app".to_string(), "Pair_alloc__string__String_".to_string())
        );
        assert_eq!(split_type_path("i32"), (String::new(), "i32".to_string()));
    }

    #[test]
    fn builtins_resolve_to_aliases() {
        let cases = [
            (TypeInfo::primitive(Primitive::Int), "int"),
            (TypeInfo::primitive(Primitive::Bytes), "bytes"),
            (TypeInfo::logical(LogicalType::Guid, "Uuid", "uuid"), "guid"),
            (TypeInfo::logical(LogicalType::Decimal, "Money", "finance"), "decimal"),
            (
                TypeInfo::logical(LogicalType::Timestamp, "SystemTime", "std.time"),
                "utcdatetime",
            ),
        ];
        for (info, alias) in cases {
            assert_eq!(type_name_and_namespace(&info), (String::new(), alias.to_string()));
        }
    }

    #[test]
    fn durations_and_records_keep_declared_names() {
        let duration = TypeInfo::logical(LogicalType::Duration, "Duration", "core.time");
        assert_eq!(
            type_name_and_namespace(&duration),
            ("core.time".to_string(), "Duration".to_string())
        );
        let nullable = TypeInfo::nullable(TypeDescriptor::of::<i32>());
        assert_eq!(type_fullname(&nullable), "core.option.Option");
        assert_eq!(type_fullname(&TypeInfo::record("Point", "")), "Point");
    }
}
