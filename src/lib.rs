//! # avro-reflect
//!
//! Derive [Apache Avro](https://avro.apache.org/) JSON schemas from Rust
//! types, through a small runtime reflection layer.
//!
//! ## Features
//!
//! - Maps scalar types to Avro primitives (`string`, `long`, `int`, `float`,
//!   `double`, `bytes`, `boolean`, `null`)
//! - Encodes unique identifiers, decimals and timestamps as `fixed` types
//! - Expands enums and records, field by field, in declaration order
//! - Emits references for named types already expanded in the same call, so
//!   self-referential and shared types terminate
//! - Optional `uuid` and `chrono` support, and a CLI (`cli` feature)
//!
//! Sequences and maps are recognized and rejected with
//! [`DeriveError::NotImplemented`]; durations with
//! [`DeriveError::NotSupported`].
//!
//! ## Example
//!
//! ```
//! use avro_reflect::converter::schema_of;
//! use avro_reflect::reflect::{Reflect, TypeInfo};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Reflect for Point {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::record("Point", "").with_field::<i32>("X").with_field::<i32>("Y")
//!     }
//! }
//!
//! assert_eq!(
//!     schema_of::<Point>().unwrap(),
//!     r#"{"type":"record","name":"Point","fields":[{"name":"X","type":"{\"type\":\"int\"}"},{"name":"Y","type":"{\"type\":\"int\"}"}]}"#
//! );
//! ```
//!
//! ## Crate Layout
//!
//! - [`reflect`]: Type descriptors and the [`Reflect`] trait
//! - [`avro`]: Schema fragments (`AvroSchema`, `AvroField`) and their JSON rendering
//! - [`common`]: Name resolution and the traversal set
//! - [`converter`]: The recursive schema derivation
//! - [`registry`]: Name-indexed descriptor collection
//! - [`error`]: [`DeriveError`]
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod avro;
pub mod common;
pub mod converter;
pub mod error;
pub mod reflect;
pub mod registry;

pub use converter::{schema_for, schema_of, schema_of_null, SchemaDeriver};
pub use error::DeriveError;
pub use reflect::{Reflect, TypeDescriptor, TypeInfo};
pub use registry::TypeRegistry;
