//! Name shaping shared by the assembler and the template helpers.

use std::path::PathBuf;

use heck::ToLowerCamelCase;

/// Uppercase the first character, leave the rest untouched.
///
/// `"post"` becomes `"Post"`, `"orderItem"` becomes `"OrderItem"`.
/// Unlike lodash's `_.capitalize`, the tail is never lowercased, so camel
/// case entity names keep their inner capitals.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower camel case: `"OrderItem"` and `"order_item"` both become
/// `"orderItem"`.
///
/// Word separators such as `_` and `$` are dropped. A name made only of
/// separators falls back to its plain lowercase form so the result is
/// never empty for non-empty input.
pub fn uncapitalize(s: &str) -> String {
    let camel = s.to_lower_camel_case();
    if camel.is_empty() {
        s.to_lowercase()
    } else {
        camel
    }
}

/// `"com.example.post"` -> `com/example/post` using the platform separator.
pub fn package_to_path(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

/// `"com.example.post"` -> `"com/example/post"`, always with `/`.
pub fn package_to_slashes(package: &str) -> String {
    package.replace('.', "/")
}
