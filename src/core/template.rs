use crate::utils::error::{Result, UtilsError};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

// `{name}` placeholders; `{}` is not a variable.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"));

/// A string with `{name}` placeholders.
///
/// ```rust
/// # use small_utils::core::template::template;
/// let message = template("User {name} is {age} years old");
/// assert_eq!(message.variables(), vec!["name", "age"]);
/// assert_eq!(
///     message.render([("name", "Alice".to_string()), ("age", 30.to_string())]),
///     "User Alice is 30 years old"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

pub fn template(source: impl Into<String>) -> Template {
    Template::new(source)
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct variable names in order of first appearance.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(&self.source) {
            if let Some(name) = caps.get(1).map(|m| m.as_str()) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Replaces every occurrence of each supplied variable.
    ///
    /// Placeholders without a replacement are left untouched. Substitution is
    /// a single pass, so replacement text is never re-expanded.
    pub fn render<I, K, V>(&self, replacements: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let values = collect_replacements(replacements);
        self.substitute(&values)
    }

    /// Like [`render`](Self::render), but every variable must have a replacement.
    pub fn render_strict<I, K, V>(&self, replacements: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let values = collect_replacements(replacements);
        let missing: Vec<String> = self
            .variables()
            .into_iter()
            .filter(|name| !values.contains_key(*name))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            tracing::debug!("template '{}' is missing {:?}", self.source, missing);
            return Err(UtilsError::MissingReplacement { variables: missing });
        }

        Ok(self.substitute(&values))
    }

    fn substitute(&self, values: &HashMap<String, String>) -> String {
        PLACEHOLDER
            .replace_all(&self.source, |caps: &Captures| match values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

fn collect_replacements<I, K, V>(replacements: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    replacements
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_string(), value.to_string()))
        .collect()
}
