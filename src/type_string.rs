use serde_json::Value;
use crate::error::SchemaError;
use crate::naming::{enum_type, identifier};
use crate::scalars::scalar_type;
use crate::schema::{TypeNode, NULLABLE_MARKER};
use crate::schema_introspection::parse_type_node;

/// Go type for a GraphQL type reference.
///
/// Every type is nullable (`*T`) until a `NON_NULL` wrapper strips the marker.
/// List elements keep their own nullability, so `[String]!` becomes
/// `[]*string`.
pub fn type_string(node: &TypeNode) -> Result<String, SchemaError> {
    match node {
        TypeNode::Scalar(name) => named(name, scalar_type(name)),
        TypeNode::NonNull(inner) => {
            let inner_type = type_string(inner)?;
            match inner_type.strip_prefix(NULLABLE_MARKER) {
                Some(non_null) => Ok(non_null.to_string()),
                None => Err(SchemaError::NullableMarker(inner_type)),
            }
        }
        TypeNode::List(inner) => Ok(nullable(&format!("[]{}", type_string(inner)?))),
        TypeNode::Enum(name) => named(name, enum_type(name)),
        TypeNode::InputObject(name) | TypeNode::Object(name) | TypeNode::Other { name, .. } => {
            named(name, identifier(name))
        }
    }
}

/// [`type_string`] over a raw JSON Type Node.
pub fn type_string_value(node: &Value) -> Result<String, SchemaError> {
    type_string(&parse_type_node(node)?)
}

/// Names made only of underscores have no Go spelling.
fn named(name: &str, go_type: String) -> Result<String, SchemaError> {
    if go_type.is_empty() {
        return Err(SchemaError::EmptyIdentifier { name: name.to_string() });
    }
    Ok(nullable(&go_type))
}

fn nullable(go_type: &str) -> String {
    format!("{}{}", NULLABLE_MARKER, go_type)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use super::*;

    fn scalar(name: &str) -> TypeNode {
        TypeNode::Scalar(name.to_string())
    }

    fn non_null(inner: TypeNode) -> TypeNode {
        TypeNode::NonNull(Box::new(inner))
    }

    fn list(inner: TypeNode) -> TypeNode {
        TypeNode::List(Box::new(inner))
    }

    #[rstest]
    #[case(scalar("String"), "*string")]
    #[case(non_null(scalar("Int")), "int32")]
    #[case(list(scalar("Boolean")), "*[]*bool")]
    #[case(list(non_null(scalar("Boolean"))), "*[]bool")]
    #[case(non_null(list(non_null(scalar("ID")))), "[]string")]
    #[case(TypeNode::Enum("order_by".to_string()), "*OrderBy")]
    #[case(TypeNode::Object("users".to_string()), "*Users")]
    #[case(non_null(TypeNode::InputObject("users_insert_input".to_string())), "UsersInsertInput")]
    #[case(TypeNode::Other { kind: "INTERFACE".to_string(), name: "Node".to_string() }, "*Node")]
    #[case(scalar("bigint"), "*Bigint")]
    fn resolves_types(#[case] node: TypeNode, #[case] expected: &str) {
        assert_eq!(type_string(&node).unwrap(), expected);
    }

    #[rstest]
    #[case(scalar("String"))]
    #[case(list(scalar("Int")))]
    #[case(TypeNode::Object("Query".to_string()))]
    fn non_null_strips_exactly_one_marker(#[case] node: TypeNode) {
        let nullable = type_string(&node).unwrap();
        let wrapped = type_string(&non_null(node)).unwrap();
        assert_eq!(format!("*{}", wrapped), nullable);
    }

    #[test]
    fn double_non_null_is_a_contract_violation() {
        let error = type_string(&non_null(non_null(scalar("String")))).unwrap_err();
        insta::assert_snapshot!(error.to_string(), @r#"nullable type "string" doesn't begin with '*'"#);
    }

    #[rstest]
    #[case(json!({ "kind": "NON_NULL", "ofType": { "kind": "OBJECT", "name": "_" } }))]
    #[case(json!({ "kind": "SCALAR", "name": "_" }))]
    #[case(json!({ "kind": "LIST", "ofType": { "kind": "ENUM", "name": "___" } }))]
    fn underscore_only_names_are_rejected(#[case] node: Value) {
        let error = type_string_value(&node).unwrap_err();
        assert!(matches!(error, SchemaError::EmptyIdentifier { .. }), "unexpected error: {error:?}");
    }

    #[test]
    fn underscore_only_name_error_names_the_type() {
        let error = type_string(&TypeNode::Object("__".to_string())).unwrap_err();
        insta::assert_snapshot!(error.to_string(), @r#"Type name "__" has no Go identifier"#);
    }

    #[test]
    fn non_null_list_of_nullable_strings() {
        let node = json!({
            "kind": "NON_NULL",
            "ofType": { "kind": "LIST", "ofType": { "kind": "SCALAR", "name": "String" } }
        });
        assert_eq!(type_string_value(&node).unwrap(), "[]*string");
    }

    #[test]
    fn raw_node_errors_are_reported() {
        let error = type_string_value(&json!({ "kind": "LIST" })).unwrap_err();
        assert!(matches!(error, SchemaError::MissingField { field: "ofType", .. }));
    }
}
