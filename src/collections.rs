//! Queries over a Type Collection: an array of schema objects that carry at
//! least a `name` and usually a `kind`.
//!
//! `filter_by` and `extract_field` skip elements that lack the queried field,
//! so their output may be shorter than their input. Everything else treats a
//! missing `name` or `kind` as a broken document.

use std::cmp::Ordering;
use serde_json::{Map, Value};
use crate::error::SchemaError;
use crate::schema::{KIND_INPUT_OBJECT, KIND_OBJECT};
use crate::flags::is_excluded;

/// Elements whose `field` equals `value`, in their original order.
pub fn filter_by(field: &str, value: &str, types: &[Value]) -> Result<Vec<Value>, SchemaError> {
    let mut filtered = Vec::new();
    for (index, element) in types.iter().enumerate() {
        let object = as_object(index, element)?;
        if let Some(found) = optional_str(object, field)? {
            if found == value && !is_excluded(found) {
                filtered.push(element.clone());
            }
        }
    }
    Ok(filtered)
}

/// The `field` value of every element that has one.
pub fn extract_field(field: &str, types: &[Value]) -> Result<Vec<String>, SchemaError> {
    let mut values = Vec::new();
    for (index, element) in types.iter().enumerate() {
        let object = as_object(index, element)?;
        if let Some(found) = optional_str(object, field)? {
            values.push(found.to_string());
        }
    }
    Ok(values)
}

/// Reorders the collection by ascending `name`. Equal names keep their input
/// order.
pub fn sort_by_name(types: Vec<Value>) -> Result<Vec<Value>, SchemaError> {
    sort_by_name_with(types, |a, b| a.cmp(b))
}

pub fn sort_by_name_rev(types: Vec<Value>) -> Result<Vec<Value>, SchemaError> {
    sort_by_name_with(types, |a, b| b.cmp(a))
}

fn sort_by_name_with(
    types: Vec<Value>,
    compare: impl Fn(&str, &str) -> Ordering,
) -> Result<Vec<Value>, SchemaError> {
    let mut keyed = Vec::with_capacity(types.len());
    for (index, element) in types.into_iter().enumerate() {
        let name = required_str(as_object(index, &element)?, "name")?.to_string();
        keyed.push((name, element));
    }
    keyed.sort_by(|(a, _), (b, _)| compare(a.as_str(), b.as_str()));
    Ok(keyed.into_iter().map(|(_, element)| element).collect())
}

/// Sorted names of every `INPUT_OBJECT` in the collection.
pub fn input_objects(types: &[Value]) -> Result<Vec<String>, SchemaError> {
    names_of_kind(KIND_INPUT_OBJECT, types)
}

/// Sorted names of every `OBJECT` in the collection.
pub fn objects(types: &[Value]) -> Result<Vec<String>, SchemaError> {
    names_of_kind(KIND_OBJECT, types)
}

fn names_of_kind(kind: &str, types: &[Value]) -> Result<Vec<String>, SchemaError> {
    let mut names = Vec::new();
    for (index, element) in types.iter().enumerate() {
        let object = as_object(index, element)?;
        if required_str(object, "kind")? != kind {
            continue;
        }
        names.push(required_str(object, "name")?.to_string());
    }
    names.sort();
    Ok(names)
}

pub fn first(index: usize) -> bool {
    index == 0
}

pub fn last(index: usize, len: usize) -> bool {
    len.checked_sub(1) == Some(index)
}

fn as_object(index: usize, element: &Value) -> Result<&Map<String, Value>, SchemaError> {
    element.as_object().ok_or_else(|| SchemaError::NotAnObject {
        index,
        node: element.to_string(),
    })
}

fn optional_str<'a>(object: &'a Map<String, Value>, field: &str) -> Result<Option<&'a str>, SchemaError> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(field_type_error(object, field)),
    }
}

fn required_str<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str, SchemaError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| field_type_error(object, field))
}

fn field_type_error(object: &Map<String, Value>, field: &str) -> SchemaError {
    SchemaError::FieldType {
        node: Value::Object(object.clone()).to_string(),
        field: field.to_string(),
    }
}
