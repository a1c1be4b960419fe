//! Drives the function map the way a template does, against a captured
//! introspection response.

use gqlassist_codegen::{FuncMap, SchemaDocument};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn schema() -> SchemaDocument {
    SchemaDocument::from_response_body(include_str!("fixtures/introspection.json")).unwrap()
}

fn call(funcs: &FuncMap, name: &str, args: Value) -> Value {
    let args = args.as_array().cloned().unwrap_or_default();
    funcs.call(name, &args).unwrap()
}

fn call_str(funcs: &FuncMap, name: &str, args: Value) -> String {
    call(funcs, name, args).as_str().unwrap().to_string()
}

fn find_type<'a>(schema: &'a SchemaDocument, name: &str) -> &'a Value {
    schema.types().iter().find(|t| t["name"] == name).unwrap()
}

#[test]
fn lists_objects_and_input_objects_sorted() {
    let funcs = FuncMap::new();
    let types = Value::Array(schema().types().to_vec());

    assert_eq!(
        call(&funcs, "objects", json!([types])),
        json!(["mutation_root", "query_root", "users"])
    );
    assert_eq!(
        call(&funcs, "inputObjects", json!([types])),
        json!(["String_comparison_exp", "users_bool_exp"])
    );
}

#[test]
fn filter_and_extract_scalars_in_document_order() {
    let funcs = FuncMap::new();
    let types = Value::Array(schema().types().to_vec());

    let scalars = call(&funcs, "filterBy", json!(["kind", "SCALAR", types]));
    let names = call(&funcs, "extractField", json!(["name", scalars]));
    assert_eq!(names, json!(["String", "timestamptz", "uuid", "bigint"]));

    let go_types: Vec<String> = names
        .as_array()
        .unwrap()
        .iter()
        .map(|name| call_str(&funcs, "scalarType", json!([name])))
        .collect();
    assert_eq!(go_types, vec!["string", "time.Time", "uuid.UUID", "Bigint"]);
}

#[test]
fn sort_by_name_in_both_directions() {
    let funcs = FuncMap::new();
    let types = Value::Array(schema().types().to_vec());

    let ascending = call(&funcs, "sortByName", json!([types]));
    let descending = call(&funcs, "sortByNameRev", json!([types]));
    let mut ascending_names = call(&funcs, "extractField", json!(["name", ascending])).as_array().cloned().unwrap();
    let descending_names = call(&funcs, "extractField", json!(["name", descending])).as_array().cloned().unwrap();

    assert_eq!(ascending_names.first(), Some(&json!("String")));
    ascending_names.reverse();
    assert_eq!(ascending_names, descending_names);
}

#[test]
fn renders_object_struct() {
    let funcs = FuncMap::new();
    let schema = schema();
    let users = find_type(&schema, "users");

    let mut out = format!(
        "// {} {}\ntype {} struct {{\n",
        call_str(&funcs, "identifier", json!([users["name"]])),
        call_str(&funcs, "formatDescription", json!([users["description"]])),
        call_str(&funcs, "identifier", json!([users["name"]])),
    );
    for field in users["fields"].as_array().unwrap() {
        out.push_str(&format!(
            "\t{} {}\n",
            call_str(&funcs, "identifier", json!([field["name"]])),
            call_str(&funcs, "type", json!([field["type"]])),
        ));
    }
    out.push_str("}\n");

    assert_eq!(
        out,
        "// Users columns and relationships of \"users\".\n\
         type Users struct {\n\
         \tID uuid.UUID\n\
         \tCreatedAt *time.Time\n\
         \tTags []string\n\
         }\n"
    );
}

#[test]
fn renders_enum_constants() {
    let funcs = FuncMap::new();
    let schema = schema();
    let order_by = find_type(&schema, "order_by");
    let enum_type = call_str(&funcs, "enumType", json!([order_by["name"]]));
    let values = order_by["enumValues"].clone();

    let mut list = format!(
        "var {} = []{}{{",
        call_str(&funcs, "enumAllValuesIdentifier", json!([order_by["name"]])),
        enum_type
    );
    for (index, value) in values.as_array().unwrap().iter().enumerate() {
        let suffix = call_str(&funcs, "enumIdentifierValueSuffix", json!([value["name"]]));
        list.push_str(&format!("{}{}", enum_type, suffix));
        if call(&funcs, "last", json!([index, values])) == json!(false) {
            list.push_str(", ");
        }
    }
    list.push('}');

    assert_eq!(list, "var OrderBy__LIST = []OrderBy{OrderBy_ASC, OrderBy_DESC}");
}

#[test]
fn resolves_argument_and_recursive_input_types() {
    let funcs = FuncMap::new();
    let schema = schema();

    let users_field = &find_type(&schema, "query_root")["fields"][0];
    assert_eq!(call_str(&funcs, "type", json!([users_field["type"]])), "[]Users");
    assert_eq!(call_str(&funcs, "type", json!([users_field["args"][0]["type"]])), "*[]OrderBy");

    let and_field = &find_type(&schema, "users_bool_exp")["inputFields"][0];
    assert_eq!(call_str(&funcs, "identifier", json!([and_field["name"]])), "And");
    assert_eq!(call_str(&funcs, "type", json!([and_field["type"]])), "*[]UsersBoolExp");
}

#[test]
fn cleans_multi_line_descriptions() {
    let funcs = FuncMap::new();
    let schema = schema();
    let tags = &find_type(&schema, "users")["fields"][2];

    let description = call(&funcs, "clean", json!([tags["description"]]));
    assert_eq!(
        call_str(&funcs, "formatDescription", json!([description])),
        "free-form labels attached to the user."
    );
    assert_eq!(
        call_str(&funcs, "quote", json!([tags["description"]])),
        r#""free-form   labels\n  attached to the user""#
    );
}
