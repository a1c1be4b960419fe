//! Template helpers for generating Go code from a GraphQL introspection
//! schema.
//!
//! The templating host owns rendering; this crate supplies the primitives it
//! calls while rendering: resolving type references to Go types, deriving
//! MixedCaps identifiers, querying type collections and formatting strings.
//! [`FuncMap`] exposes all of them under their template names.

pub mod collections;
pub mod error;
pub mod flags;
pub mod format;
pub mod funcs;
pub mod naming;
pub mod scalars;
pub mod schema;
pub mod schema_introspection;
pub mod type_string;

pub use error::{FuncError, SchemaError};
pub use funcs::{FuncMap, TemplateFunc};
pub use schema::TypeNode;
pub use schema_introspection::{parse_type_node, SchemaDocument};
pub use type_string::{type_string, type_string_value};
