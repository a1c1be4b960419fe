/// Leading character of a resolved type string that marks it as nullable.
pub const NULLABLE_MARKER: char = '*';

pub const KIND_SCALAR: &str = "SCALAR";
pub const KIND_NON_NULL: &str = "NON_NULL";
pub const KIND_LIST: &str = "LIST";
pub const KIND_ENUM: &str = "ENUM";
pub const KIND_OBJECT: &str = "OBJECT";
pub const KIND_INPUT_OBJECT: &str = "INPUT_OBJECT";

/// A GraphQL type reference, as found under `type`, `ofType` and friends in an
/// introspection document.
///
/// Wrapper kinds carry only the wrapped node, named kinds carry only their
/// (non-empty) name. Kinds outside the known set, such as `INTERFACE` or
/// `UNION`, end up in [`TypeNode::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Scalar(String),
    NonNull(Box<TypeNode>),
    List(Box<TypeNode>),
    Enum(String),
    Object(String),
    InputObject(String),
    Other { kind: String, name: String },
}

impl TypeNode {
    pub fn kind(&self) -> &str {
        match self {
            TypeNode::Scalar(_) => KIND_SCALAR,
            TypeNode::NonNull(_) => KIND_NON_NULL,
            TypeNode::List(_) => KIND_LIST,
            TypeNode::Enum(_) => KIND_ENUM,
            TypeNode::Object(_) => KIND_OBJECT,
            TypeNode::InputObject(_) => KIND_INPUT_OBJECT,
            TypeNode::Other { kind, .. } => kind,
        }
    }

    /// Name of the innermost named type, looking through wrappers.
    pub fn base_name(&self) -> &str {
        match self {
            TypeNode::NonNull(inner) | TypeNode::List(inner) => inner.base_name(),
            TypeNode::Scalar(name)
            | TypeNode::Enum(name)
            | TypeNode::Object(name)
            | TypeNode::InputObject(name)
            | TypeNode::Other { name, .. } => name,
        }
    }
}
