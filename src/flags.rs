//! Switches templates consult to pick a generation strategy.

/// Known features and whether they are on.
pub const FEATURES: &[(&str, bool)] = &[("use_integer_enums", true)];

/// Whether a generation feature is enabled. Unknown features are off.
pub fn feature(name: &str) -> bool {
    FEATURES
        .iter()
        .find(|(feature, _)| *feature == name)
        .is_some_and(|(_, enabled)| *enabled)
}

/// Whether a schema member should be left out of the output. Nothing is
/// excluded yet.
pub fn is_excluded(_name: &str) -> bool {
    false
}

/// Whether a name belongs to the introspection machinery (`__Type`,
/// `__schema`, ...). Meta members are currently generated like any other.
pub fn is_graphql_meta(_name: &str) -> bool {
    false
}
