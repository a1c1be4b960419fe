//! The function catalog handed to the templating host.
//!
//! Every helper is registered under the name templates use to call it, with a
//! fixed arity. Arguments and results travel as [`serde_json::Value`] so the
//! host can thread schema data through without knowing its shape.

use std::collections::BTreeMap;
use serde_json::Value;
use crate::collections::{extract_field, filter_by, first, input_objects, last, objects, sort_by_name, sort_by_name_rev};
use crate::error::FuncError;
use crate::flags::{feature, is_excluded, is_graphql_meta};
use crate::format::{clean, format_description, join, quote};
use crate::naming::{
    enum_all_values_identifier, enum_type, enum_value_suffix, identifier, lc_first, scalar_identifier,
    to_lower, to_upper, uc_first,
};
use crate::scalars::scalar_type;
use crate::type_string::type_string_value;

pub type FuncResult = Result<Value, FuncError>;

/// A helper as seen by the host: its template name, how many arguments it
/// takes and the function behind it.
#[derive(Clone, Copy)]
pub struct TemplateFunc {
    pub name: &'static str,
    pub arity: usize,
    func: fn(&Args<'_>) -> FuncResult,
}

impl TemplateFunc {
    fn new(name: &'static str, arity: usize, func: fn(&Args<'_>) -> FuncResult) -> TemplateFunc {
        TemplateFunc { name, arity, func }
    }

    pub fn call(&self, args: &[Value]) -> FuncResult {
        if args.len() != self.arity {
            return Err(FuncError::Arity {
                name: self.name,
                expected: self.arity,
                got: args.len(),
            });
        }
        (self.func)(&Args { name: self.name, values: args })
    }
}

impl std::fmt::Debug for TemplateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateFunc")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// All template helpers, keyed by template name.
#[derive(Debug, Clone)]
pub struct FuncMap {
    funcs: BTreeMap<&'static str, TemplateFunc>,
}

impl FuncMap {
    pub fn new() -> FuncMap {
        let funcs: BTreeMap<_, _> = catalog().into_iter().map(|func| (func.name, func)).collect();
        tracing::debug!(functions = funcs.len(), "Built template function map");
        FuncMap { funcs }
    }

    pub fn get(&self, name: &str) -> Option<&TemplateFunc> {
        self.funcs.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.funcs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateFunc> {
        self.funcs.values()
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Calls the helper registered as `name`.
    pub fn call(&self, name: &str, args: &[Value]) -> FuncResult {
        let func = self
            .get(name)
            .ok_or_else(|| FuncError::UnknownFunction(name.to_string()))?;
        tracing::trace!(function = name, args = args.len(), "Calling template function");
        func.call(args).inspect_err(|error| {
            tracing::debug!(function = name, %error, "Template function failed");
        })
    }
}

impl Default for FuncMap {
    fn default() -> Self {
        FuncMap::new()
    }
}

fn catalog() -> Vec<TemplateFunc> {
    vec![
        TemplateFunc::new("type", 1, |args| Ok(type_string_value(args.object(0)?)?.into())),
        TemplateFunc::new("scalarType", 1, |args| Ok(scalar_type(args.str(0)?).into())),
        TemplateFunc::new("identifier", 1, |args| Ok(identifier(args.str(0)?).into())),
        TemplateFunc::new("scalarIdentifier", 1, |args| Ok(scalar_identifier(args.str(0)?).into())),
        TemplateFunc::new("enumType", 1, |args| Ok(enum_type(args.str(0)?).into())),
        TemplateFunc::new("enumIdentifierValueSuffix", 1, |args| {
            Ok(enum_value_suffix(args.str(0)?).into())
        }),
        TemplateFunc::new("enumAllValuesIdentifier", 1, |args| {
            Ok(enum_all_values_identifier(args.str(0)?).into())
        }),
        TemplateFunc::new("filterBy", 3, |args| {
            Ok(Value::Array(filter_by(args.str(0)?, args.str(1)?, args.array(2)?)?))
        }),
        TemplateFunc::new("extractField", 2, |args| {
            Ok(extract_field(args.str(0)?, args.array(1)?)?.into())
        }),
        TemplateFunc::new("sortByName", 1, |args| {
            Ok(Value::Array(sort_by_name(args.array(0)?.to_vec())?))
        }),
        TemplateFunc::new("sortByNameRev", 1, |args| {
            Ok(Value::Array(sort_by_name_rev(args.array(0)?.to_vec())?))
        }),
        TemplateFunc::new("inputObjects", 1, |args| Ok(input_objects(args.array(0)?)?.into())),
        TemplateFunc::new("objects", 1, |args| Ok(objects(args.array(0)?)?.into())),
        TemplateFunc::new("first", 2, |args| Ok(first(args.index(0)?).into())),
        TemplateFunc::new("last", 2, |args| Ok(last(args.index(0)?, args.len(1)?).into())),
        TemplateFunc::new("feature", 1, |args| Ok(feature(args.str(0)?).into())),
        TemplateFunc::new("isExcluded", 1, |args| Ok(is_excluded(args.str(0)?).into())),
        TemplateFunc::new("isGraphQLMeta", 1, |args| Ok(is_graphql_meta(args.str(0)?).into())),
        TemplateFunc::new("ucFirst", 1, |args| Ok(uc_first(args.str(0)?).into())),
        TemplateFunc::new("lcFirst", 1, |args| Ok(lc_first(args.str(0)?).into())),
        TemplateFunc::new("toUpper", 1, |args| Ok(to_upper(args.str(0)?).into())),
        TemplateFunc::new("toLower", 1, |args| Ok(to_lower(args.str(0)?).into())),
        TemplateFunc::new("clean", 1, |args| Ok(clean(args.str(0)?).into())),
        TemplateFunc::new("quote", 1, |args| Ok(quote(args.str(0)?).into())),
        TemplateFunc::new("formatDescription", 1, |args| Ok(format_description(args.str(0)?).into())),
        TemplateFunc::new("join", 2, |args| Ok(join(&args.strings(0)?, args.str(1)?).into())),
    ]
}

/// Positional arguments of one call, with conversions that report which
/// argument was wrong.
struct Args<'a> {
    name: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn get(&self, position: usize, expected: &'static str) -> Result<&'a Value, FuncError> {
        self.values.get(position).ok_or_else(|| self.type_error(position, expected))
    }

    fn type_error(&self, position: usize, expected: &'static str) -> FuncError {
        FuncError::ArgumentType {
            name: self.name,
            position,
            expected,
        }
    }

    fn str(&self, position: usize) -> Result<&'a str, FuncError> {
        const EXPECTED: &str = "a string";
        self.get(position, EXPECTED)?
            .as_str()
            .ok_or_else(|| self.type_error(position, EXPECTED))
    }

    fn array(&self, position: usize) -> Result<&'a [Value], FuncError> {
        const EXPECTED: &str = "an array";
        self.get(position, EXPECTED)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.type_error(position, EXPECTED))
    }

    fn object(&self, position: usize) -> Result<&'a Value, FuncError> {
        const EXPECTED: &str = "a type object";
        let value = self.get(position, EXPECTED)?;
        if value.is_object() {
            Ok(value)
        } else {
            Err(self.type_error(position, EXPECTED))
        }
    }

    fn strings(&self, position: usize) -> Result<Vec<&'a str>, FuncError> {
        const EXPECTED: &str = "an array of strings";
        self.array(position)?
            .iter()
            .map(|value| value.as_str().ok_or_else(|| self.type_error(position, EXPECTED)))
            .collect()
    }

    fn index(&self, position: usize) -> Result<usize, FuncError> {
        const EXPECTED: &str = "a non-negative integer";
        self.get(position, EXPECTED)?
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .ok_or_else(|| self.type_error(position, EXPECTED))
    }

    /// Length of any sequence-like value: array elements, object entries or
    /// string bytes.
    fn len(&self, position: usize) -> Result<usize, FuncError> {
        const EXPECTED: &str = "an array, object or string";
        match self.get(position, EXPECTED)? {
            Value::Array(values) => Ok(values.len()),
            Value::Object(entries) => Ok(entries.len()),
            Value::String(s) => Ok(s.len()),
            _ => Err(self.type_error(position, EXPECTED)),
        }
    }
}
