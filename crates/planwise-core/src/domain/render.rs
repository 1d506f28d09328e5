//! Placeholder substitution for profile layouts and document fragments.
//!
//! ## Variables
//!
//! | Variable | Example | Source |
//! |----------|---------|--------|
//! | `PROJECT_NAME` | "Acme Store" | Configuration |
//! | `PROJECT_NAME_SNAKE` | "acme_store" | Computed |
//! | `PROJECT_NAME_KEBAB` | "acme-store" | Computed |
//! | `PROJECT_NAME_PASCAL` | "AcmeStore" | Computed |
//!
//! Unknown placeholders are left as-is.

use std::collections::BTreeMap;

/// Name used when the wizard has no project name yet.
pub const UNNAMED_PROJECT: &str = "my-project";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,

    /// Ordered so rendering is deterministic even when one value contains
    /// another placeholder.
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Build a context with the project name in every casing.
    ///
    /// A blank name falls back to [`UNNAMED_PROJECT`]. A name with no
    /// alphanumeric characters keeps its display form but takes its
    /// identifier casings from [`UNNAMED_PROJECT`].
    pub fn new(project_name: impl Into<String>) -> Self {
        let raw = project_name.into();
        let name = if raw.trim().is_empty() {
            UNNAMED_PROJECT.to_string()
        } else {
            raw.trim().to_string()
        };

        // identifiers need at least one alphanumeric word
        let slug_source = if split_words(&name).is_empty() {
            UNNAMED_PROJECT
        } else {
            name.as_str()
        };

        let mut vars = BTreeMap::new();
        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(slug_source));
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(slug_source));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(slug_source));

        Self {
            project_name: name,
            variables: vars,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// - `{{UNKNOWN}}` stays literal
    /// - repeated placeholders are all replaced
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

pub(crate) fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

pub(crate) fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

pub(crate) fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split on separators, camelCase transitions and acronym boundaries.
///
/// Characters that are neither alphanumeric nor separators (`.`, `'`, `&`)
/// are dropped so the result is always usable as an identifier.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }
        if !c.is_alphanumeric() {
            continue;
        }

        if let Some(next) = chars.peek() {
            // "myApp" -> "my" + "App"
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // "HTTPServer" -> "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
