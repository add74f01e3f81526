//! Localized message lookup
//!
//! Messages are key → template pairs supplied by the host (bundles compiled
//! into the binary, optionally overridden from a JSON file). Templates use
//! positional placeholders:
//!
//! - `{0}`, `{1}`, ... are replaced by the arguments in order
//! - `''` is a literal apostrophe
//! - text between single quotes is copied literally, e.g. `'{0}'`
//!
//! A template without any `{` is returned verbatim.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::MessageEntry;

/// Key → template mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries; later duplicates win
    pub fn from_entries<E: Into<MessageEntry>>(entries: impl IntoIterator<Item = E>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry.into());
        }
        catalog
    }

    /// Parse a flat JSON object of `"key": "template"` pairs
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn insert(&mut self, entry: MessageEntry) {
        self.entries.insert(entry.key, entry.template);
    }

    /// Overlay another catalog on top of this one
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves message keys against a catalog
#[derive(Debug, Clone, Default)]
pub struct MessageResolver {
    catalog: MessageCatalog,
}

impl MessageResolver {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    /// Look up `key` and substitute `args` positionally.
    ///
    /// A missing key is a [`CoreError::MissingMessageKey`]; callers are
    /// expected to abort the current interaction on it.
    pub fn resolve(&self, key: &str, args: &[&str]) -> CoreResult<String> {
        let template = self
            .catalog
            .get(key)
            .ok_or_else(|| CoreError::MissingMessageKey(key.to_string()))?;
        Ok(format_message(template, args))
    }

    /// Resolve a message that takes no arguments
    pub fn text(&self, key: &str) -> CoreResult<String> {
        self.resolve(key, &[])
    }
}

/// Substitute positional arguments into a template.
///
/// Placeholders whose index has no argument, and malformed braces, are
/// copied through unchanged.
pub fn format_message(template: &str, args: &[&str]) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                // quoted literal; runs to the closing quote or the end
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            out.push('\'');
                        } else {
                            break;
                        }
                    } else {
                        out.push(q);
                    }
                }
            }
            '{' => {
                let mut inner = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    inner.push(n);
                }

                let arg = inner
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| args.get(index));
                match (closed, arg) {
                    (true, Some(arg)) => out.push_str(arg),
                    (true, None) => {
                        out.push('{');
                        out.push_str(&inner);
                        out.push('}');
                    }
                    (false, _) => {
                        out.push('{');
                        out.push_str(&inner);
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn resolver() -> MessageResolver {
        MessageResolver::new(MessageCatalog::from_entries([
            ("ao.admin.title", "Active Objects"),
            ("ao.admin.plain", "Don't panic"),
            ("ao.admin.pair", "Moved {0} to {1}"),
            ("ao.admin.swap", "{1} before {0}"),
        ]))
    }

    #[test]
    fn test_resolve_without_placeholders_is_verbatim() {
        let r = resolver();
        assert_eq!(r.text("ao.admin.title").unwrap(), "Active Objects");
        assert_eq!(r.text("ao.admin.plain").unwrap(), "Don't panic");
    }

    #[test]
    fn test_resolve_substitutes_in_positional_order() {
        let r = resolver();
        assert_eq!(
            r.resolve("ao.admin.pair", &["a", "b"]).unwrap(),
            "Moved a to b"
        );
        assert_eq!(r.resolve("ao.admin.swap", &["a", "b"]).unwrap(), "b before a");
    }

    #[test]
    fn test_resolve_missing_key_fails() {
        let err = resolver().resolve("ao.admin.nope", &["x"]).unwrap_err();
        assert!(matches!(err, CoreError::MissingMessageKey(ref k) if k == "ao.admin.nope"));
    }

    #[test]
    fn test_format_quoting_rules() {
        assert_eq!(format_message("It''s {0}", &["here"]), "It's here");
        assert_eq!(format_message("'{0}' is {0}", &["x"]), "{0} is x");
        assert_eq!(format_message("'unterminated {0}", &["x"]), "unterminated {0}");
    }

    #[test]
    fn test_format_leaves_unmatched_placeholders() {
        assert_eq!(format_message("{0} and {2}", &["a"]), "a and {2}");
        assert_eq!(format_message("{name} {0}", &["a"]), "{name} a");
        assert_eq!(format_message("open {0", &["a"]), "open {0");
        assert_eq!(format_message("{ 0 }", &["a"]), "a");
    }

    #[test]
    fn test_catalog_from_json_and_merge() {
        let mut base = MessageCatalog::from_entries([("a", "1"), ("b", "2")]);
        let overlay = MessageCatalog::from_json(r#"{"b": "two", "c": "3"}"#).unwrap();
        base.merge(overlay);
        assert_eq!(base.len(), 3);
        assert_eq!(base.get("b"), Some("two"));
        assert!(base.contains("c"));
    }

    #[test]
    fn test_catalog_from_json_rejects_non_string_values() {
        let err = MessageCatalog::from_json(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, CoreError::SerializationError(_)));
    }
}
