use serde::Deserialize;
use serde_json::{Deserializer, Value};
use serde_path_to_error::deserialize;
use crate::error::SchemaError;
use crate::schema::{TypeNode, KIND_ENUM, KIND_INPUT_OBJECT, KIND_LIST, KIND_NON_NULL, KIND_OBJECT, KIND_SCALAR};

const ROOT_PATH: &str = "$";

/// The `__schema` tree of an introspection result, kept as generic JSON so
/// templates can walk it freely.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    root: Value,
}

impl SchemaDocument {
    /// Decodes a standard `{"data": {"__schema": ...}}` introspection response.
    pub fn from_response_body(response_body: &str) -> Result<SchemaDocument, SchemaError> {
        let deserializer = &mut Deserializer::from_str(response_body);
        let response: IntrospectionQueryResponse = deserialize(deserializer)?;
        let document = SchemaDocument::from_value(response.data.schema);
        tracing::debug!(types = document.types().len(), "Decoded introspection schema");
        Ok(document)
    }

    pub fn from_value(root: Value) -> SchemaDocument {
        SchemaDocument { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The `types` array of the schema, empty when the document has none.
    pub fn types(&self) -> &[Value] {
        self.root
            .get("types")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

#[derive(Deserialize)]
struct IntrospectionQueryResponse {
    data: SchemaData,
}

#[derive(Deserialize)]
struct SchemaData {
    #[serde(rename = "__schema")]
    schema: Value,
}

/// Shape shared by every kind of type reference. Which fields are required
/// depends on `kind`, so that is checked in [`to_type_node`].
#[derive(Deserialize)]
struct TypeRef {
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "ofType", default)]
    of_type: Option<Box<TypeRef>>,
}

/// Parses a raw Type Node into a [`TypeNode`], checking that wrapper kinds
/// carry `ofType` and named kinds carry a non-empty `name`.
pub fn parse_type_node(node: &Value) -> Result<TypeNode, SchemaError> {
    let type_ref: TypeRef = deserialize(node)?;
    to_type_node(type_ref, ROOT_PATH)
}

fn to_type_node(type_ref: TypeRef, path: &str) -> Result<TypeNode, SchemaError> {
    match type_ref.kind.as_str() {
        KIND_NON_NULL | KIND_LIST => {
            let of_type = type_ref.of_type.ok_or_else(|| SchemaError::MissingField {
                path: path.to_string(),
                field: "ofType",
            })?;
            let inner = Box::new(to_type_node(*of_type, &format!("{}.ofType", path))?);
            if type_ref.kind == KIND_NON_NULL {
                Ok(TypeNode::NonNull(inner))
            } else {
                Ok(TypeNode::List(inner))
            }
        }
        kind => {
            let name = match type_ref.name {
                Some(name) if name.is_empty() => {
                    return Err(SchemaError::EmptyName { path: path.to_string() })
                }
                Some(name) => name,
                None => {
                    return Err(SchemaError::MissingField {
                        path: path.to_string(),
                        field: "name",
                    })
                }
            };
            let node = match kind {
                KIND_SCALAR => TypeNode::Scalar(name),
                KIND_ENUM => TypeNode::Enum(name),
                KIND_OBJECT => TypeNode::Object(name),
                KIND_INPUT_OBJECT => TypeNode::InputObject(name),
                other => TypeNode::Other { kind: other.to_string(), name },
            };
            Ok(node)
        }
    }
}
