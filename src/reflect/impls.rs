//! [`Reflect`] implementations for standard library types, plus the
//! feature-gated `uuid` and `chrono` value types.

use std::any::TypeId;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use super::{LogicalType, Primitive, Reflect, TypeDescriptor, TypeInfo};

macro_rules! impl_reflect_for_primitive {
    ($($ty:ty => $primitive:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::primitive(Primitive::$primitive)
                }
            }
        )*
    };
}

impl_reflect_for_primitive!(
    String => String,
    str => String,
    char => String,
    i64 => Long,
    u32 => Long,
    i32 => Int,
    i16 => Int,
    i8 => Int,
    u16 => Int,
    f32 => Float,
    f64 => Double,
    u8 => Bytes,
    [u8] => Bytes,
    bool => Boolean,
    () => Null,
);

// Pointers are transparent: same shape and same identity as the pointee.
macro_rules! impl_reflect_for_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
                fn type_info() -> TypeInfo {
                    T::type_info()
                }

                fn descriptor() -> TypeDescriptor {
                    T::descriptor()
                }
            }
        )*
    };
}

impl_reflect_for_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::nullable(T::descriptor())
    }
}

/// A contiguous run of `u8` is the bytes primitive; any other item type is a
/// sequence.
fn byte_run_or_sequence<T: Reflect>(name: &'static str, namespace: &'static str) -> TypeInfo {
    if TypeId::of::<T>() == TypeId::of::<u8>() {
        TypeInfo::primitive(Primitive::Bytes)
    } else {
        TypeInfo::sequence(name, namespace, T::descriptor())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_info() -> TypeInfo {
        byte_run_or_sequence::<T>("Vec", "alloc.vec")
    }
}

macro_rules! impl_reflect_for_sequence {
    ($($coll:ident => $namespace:literal),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $coll<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::sequence(stringify!($coll), $namespace, T::descriptor())
                }
            }
        )*
    };
}

impl_reflect_for_sequence!(
    VecDeque => "alloc.collections",
    LinkedList => "alloc.collections",
    BTreeSet => "alloc.collections",
);

impl<T: Reflect, S: 'static> Reflect for HashSet<T, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::sequence("HashSet", "std.collections", T::descriptor())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_info() -> TypeInfo {
        byte_run_or_sequence::<T>("Array", "core")
    }
}

impl<K: Reflect, V: Reflect, S: 'static> Reflect for HashMap<K, V, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::map(
            "HashMap",
            "std.collections",
            K::descriptor(),
            V::descriptor(),
        )
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::map(
            "BTreeMap",
            "alloc.collections",
            K::descriptor(),
            V::descriptor(),
        )
    }
}

impl Reflect for SystemTime {
    fn type_info() -> TypeInfo {
        TypeInfo::logical(LogicalType::Timestamp, "SystemTime", "std.time")
    }
}

impl Reflect for Duration {
    fn type_info() -> TypeInfo {
        TypeInfo::logical(LogicalType::Duration, "Duration", "core.time")
    }
}

#[cfg(feature = "uuid")]
impl Reflect for uuid::Uuid {
    fn type_info() -> TypeInfo {
        TypeInfo::logical(LogicalType::Guid, "Uuid", "uuid")
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone + 'static> Reflect for chrono::DateTime<Tz> {
    fn type_info() -> TypeInfo {
        TypeInfo::logical(LogicalType::Timestamp, "DateTime", "chrono")
    }
}

#[cfg(feature = "chrono")]
impl Reflect for chrono::NaiveDateTime {
    fn type_info() -> TypeInfo {
        TypeInfo::logical(LogicalType::Timestamp, "NaiveDateTime", "chrono")
    }
}

#[cfg(feature = "chrono")]
impl Reflect for chrono::TimeDelta {
    fn type_info() -> TypeInfo {
        TypeInfo::logical(LogicalType::Duration, "TimeDelta", "chrono")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::TypeKind;

    fn kind_of<T: Reflect + ?Sized>() -> TypeKind {
        TypeDescriptor::of::<T>().info().kind().clone()
    }

    #[test]
    fn scalars_map_to_primitives() {
        assert!(matches!(kind_of::<String>(), TypeKind::Primitive(Primitive::String)));
        assert!(matches!(kind_of::<str>(), TypeKind::Primitive(Primitive::String)));
        assert!(matches!(kind_of::<u32>(), TypeKind::Primitive(Primitive::Long)));
        assert!(matches!(kind_of::<[u8]>(), TypeKind::Primitive(Primitive::Bytes)));
        assert!(matches!(kind_of::<Box<[u8]>>(), TypeKind::Primitive(Primitive::Bytes)));
        assert!(matches!(kind_of::<Vec<u8>>(), TypeKind::Primitive(Primitive::Bytes)));
        assert!(matches!(kind_of::<[u8; 16]>(), TypeKind::Primitive(Primitive::Bytes)));
        assert!(matches!(kind_of::<()>(), TypeKind::Primitive(Primitive::Null)));
    }

    #[test]
    fn collections_are_classified() {
        assert!(matches!(kind_of::<Vec<i32>>(), TypeKind::Sequence(_)));
        assert!(matches!(kind_of::<VecDeque<u8>>(), TypeKind::Sequence(_)));
        assert!(matches!(kind_of::<[i32; 4]>(), TypeKind::Sequence(_)));
        assert!(matches!(kind_of::<HashSet<String>>(), TypeKind::Sequence(_)));
        assert!(matches!(kind_of::<BTreeMap<String, i64>>(), TypeKind::Map { .. }));
        assert!(matches!(kind_of::<HashMap<String, i64>>(), TypeKind::Map { .. }));
    }

    #[test]
    fn option_wraps_its_argument() {
        match kind_of::<Option<i64>>() {
            TypeKind::Nullable(inner) => assert_eq!(inner, TypeDescriptor::of::<i64>()),
            other => panic!("expected nullable, got {other:?}"),
        }
    }

    #[test]
    fn time_types_are_logical() {
        assert!(matches!(
            kind_of::<SystemTime>(),
            TypeKind::Logical(LogicalType::Timestamp)
        ));
        assert!(matches!(
            kind_of::<Duration>(),
            TypeKind::Logical(LogicalType::Duration)
        ));
    }
}
