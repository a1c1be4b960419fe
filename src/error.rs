/// A violation of the introspection document contract.
///
/// The engine trusts its input to be a well-formed introspection document, so
/// none of these are recoverable: they abort the render that hit them.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Invalid introspection JSON: {0}")]
    Json(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("Type node at {path} is missing its required field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("Type node at {path} has an empty name")]
    EmptyName { path: String },

    #[error("Type name {name:?} has no Go identifier")]
    EmptyIdentifier { name: String },

    #[error("Element {node} has no string field `{field}`")]
    FieldType { node: String, field: String },

    #[error("Element {index} of the collection is not an object: {node}")]
    NotAnObject { index: usize, node: String },

    #[error("nullable type {0:?} doesn't begin with '*'")]
    NullableMarker(String),
}

/// An error raised while calling a template function by name.
#[derive(Debug, thiserror::Error)]
pub enum FuncError {
    #[error("No template function named \"{0}\"")]
    UnknownFunction(String),

    #[error("Template function \"{name}\" takes {expected} argument(s) but got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Argument {position} of \"{name}\" must be {expected}")]
    ArgumentType {
        name: &'static str,
        position: usize,
        expected: &'static str,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
