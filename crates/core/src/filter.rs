use alloc::string::String;
use alloc::vec::Vec;

/// Separator the JVM uses for nested, local and anonymous classes.
pub const NESTED_TYPE_MARKER: char = '$';

/// Whether a name can carry a naming convention of its own.
///
/// Nested types are dropped, as are names without a single ASCII uppercase
/// letter (package-info entries, empty placeholders from failed reads).
#[must_use]
pub fn is_conventional(name: &str) -> bool {
    !name.contains(NESTED_TYPE_MARKER) && name.bytes().any(|b| b.is_ascii_uppercase())
}

/// Keep conventional names, preserving their relative order.
#[must_use]
pub fn filter<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| is_conventional(name))
        .collect()
}
