//! Path template rendering
//!
//! Substitutes `{name}` placeholders in endpoint paths such as
//! `/projects/{project_id}/apps/{app_name}`. Values are percent-encoded as
//! single path segments. A placeholder with no value, or an empty value, is a
//! validation error raised before any request is sent.

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for matching path placeholders: {name}
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_][a-z0-9_]*)\}").unwrap());

/// Render a path template with the given parameters
pub fn render(template: &str, params: &[(&str, &str)]) -> Result<String> {
    let mut missing: Vec<String> = Vec::new();

    let rendered = PLACEHOLDER_REGEX.replace_all(template, |cap: &Captures<'_>| {
        let name = &cap[1];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) if !value.is_empty() => urlencoding::encode(value).into_owned(),
            _ => {
                missing.push(name.to_string());
                String::new()
            }
        }
    });

    if missing.is_empty() {
        Ok(rendered.into_owned())
    } else {
        Err(Error::missing_param(missing.join(", ")))
    }
}

/// Check that a required body field is present
pub fn require<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::missing_param(name))
    } else {
        Ok(value)
    }
}
