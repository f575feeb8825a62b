//! Template helpers.
//!
//! A fixed table from helper name to function. The renderer registers every
//! entry once at construction; nothing is patched in at render time.

use handlebars::{Handlebars, HelperDef, JsonTruthy, handlebars_helper};
use regex::Regex;
use serde_json::Value as Json;

use springgen_core::domain::naming;

handlebars_helper!(capitalize: |s: str| naming::capitalize(s));
handlebars_helper!(uncapitalize: |s: str| naming::uncapitalize(s));
handlebars_helper!(to_lower_case: |s: str| s.to_lowercase());
handlebars_helper!(replace: |s: str, pattern: str, replacement: str| replace_all(s, pattern, replacement));
handlebars_helper!(eq: |a: Json, b: Json| a == b);
handlebars_helper!(ne: |a: Json, b: Json| a != b);
handlebars_helper!(or: |*args| args.iter().any(|v| v.is_truthy(false)));
handlebars_helper!(and: |*args| args.iter().all(|v| v.is_truthy(false)));
handlebars_helper!(not: |v: Json| !v.is_truthy(false));

fn table() -> [(&'static str, Box<dyn HelperDef + Send + Sync>); 9] {
    [
        ("capitalize", Box::new(capitalize)),
        ("uncapitalize", Box::new(uncapitalize)),
        ("toLowerCase", Box::new(to_lower_case)),
        ("replace", Box::new(replace)),
        ("eq", Box::new(eq)),
        ("ne", Box::new(ne)),
        ("or", Box::new(or)),
        ("and", Box::new(and)),
        ("not", Box::new(not)),
    ]
}

/// Register the whole table, replacing any built-in of the same name.
pub fn register_all(registry: &mut Handlebars<'static>) {
    for (name, helper) in table() {
        registry.register_helper(name, helper);
    }
}

/// Global regex replace. A pattern that does not compile is replaced
/// literally instead.
pub fn replace_all(s: &str, pattern: &str, replacement: &str) -> String {
    match Regex::new(pattern) {
        Ok(re) => re.replace_all(s, replacement).into_owned(),
        Err(_) => s.replace(pattern, replacement),
    }
}
