//! # Template Substitution
//!
//! The single placeholder syntax used by component templates: `${name}`.

use crate::{GameLabError, GameLabResult};
use regex::Regex;

/// Ordered `(key, value)` pairs applied to a template.
///
/// Values are already rendered as target-language literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    pairs: Vec<(String, String)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a key, replacing any earlier value for it.
    pub fn set(&mut self, key: &str, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Compiled placeholder patterns.
///
/// # Examples
///
/// ```
/// use gamelab::{Bindings, PlaceholderSyntax};
///
/// let syntax = PlaceholderSyntax::new().unwrap();
/// let mut bindings = Bindings::new();
/// bindings.set("speed", "5".to_string());
///
/// let out = syntax.substitute("self.speed = ${speed}", &bindings).unwrap();
/// assert_eq!(out, "self.speed = 5");
/// ```
#[derive(Debug, Clone)]
pub struct PlaceholderSyntax {
    token: Regex,
    marker: Regex,
}

impl PlaceholderSyntax {
    pub fn new() -> GameLabResult<Self> {
        Ok(Self {
            token: Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")?,
            marker: Regex::new(r"\$\{[^}\n]*\}?")?,
        })
    }

    /// Distinct placeholder names in first-occurrence order.
    pub fn placeholders(&self, text: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for captures in self.token.captures_iter(text) {
            let name = &captures[1];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Replaces every placeholder in one pass. Substituted values are not rescanned.
    pub fn substitute(&self, text: &str, bindings: &Bindings) -> GameLabResult<String> {
        let mut output = String::with_capacity(text.len());
        let mut last_index = 0usize;

        for captures in self.token.captures_iter(text) {
            let (Some(full), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let value = bindings
                .get(name.as_str())
                .ok_or_else(|| GameLabError::UnresolvedPlaceholder(name.as_str().to_string()))?;
            output.push_str(&text[last_index..full.start()]);
            output.push_str(value);
            last_index = full.end();
        }

        output.push_str(&text[last_index..]);
        Ok(output)
    }

    /// Fails if any placeholder marker, well-formed or not, remains in the text.
    pub fn ensure_resolved(&self, text: &str) -> GameLabResult<()> {
        match self.marker.find(text) {
            Some(found) => Err(GameLabError::UnresolvedPlaceholder(
                found
                    .as_str()
                    .trim_start_matches("${")
                    .trim_end_matches('}')
                    .to_string(),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings(pairs: &[(&str, &str)]) -> Bindings {
        let mut b = Bindings::new();
        for (k, v) in pairs {
            b.set(k, v.to_string());
        }
        b
    }

    #[test]
    fn test_placeholders_are_distinct_and_ordered() {
        let syntax = PlaceholderSyntax::new().unwrap();
        let names = syntax.placeholders("${b} ${a} ${b} ${not valid} ${c_1}");
        assert_eq!(names, vec!["b", "a", "c_1"]);
    }

    #[test]
    fn test_substitution_is_single_pass() {
        let syntax = PlaceholderSyntax::new().unwrap();
        let b = bindings(&[("a", "${b}"), ("b", "2")]);
        let out = syntax.substitute("x = ${a}", &b).unwrap();
        assert_eq!(out, "x = ${b}");
        assert!(syntax.ensure_resolved(&out).is_err());
    }

    #[test]
    fn test_missing_binding_fails() {
        let syntax = PlaceholderSyntax::new().unwrap();
        let err = syntax.substitute("${speed}", &Bindings::new()).unwrap_err();
        assert!(matches!(err, GameLabError::UnresolvedPlaceholder(name) if name == "speed"));
    }

    #[test]
    fn test_ensure_resolved_catches_malformed_markers() {
        let syntax = PlaceholderSyntax::new().unwrap();
        assert!(syntax.ensure_resolved("plain text {braces} $dollar").is_ok());
        assert!(syntax.ensure_resolved("x = ${ speed }").is_err());
        assert!(syntax.ensure_resolved("x = ${speed").is_err());
    }

    #[test]
    fn test_bindings_replace_existing_key() {
        let mut b = bindings(&[("speed", "5")]);
        b.set("speed", "9".to_string());
        assert_eq!(b.len(), 1);
        assert_eq!(b.get("speed"), Some("9"));
    }
}
