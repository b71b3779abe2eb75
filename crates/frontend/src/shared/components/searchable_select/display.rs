//! Label resolution for the closed state of the searchable select.
//!
//! Options are opaque JSON records. The value key names the identifier field,
//! the display key names the label field or a dotted path into it. A path
//! segment that lands on an array picks the entry whose language field equals
//! the target language, so `translations.name` reads the localized name.

use serde_json::Value;

/// Field read when the display key yields nothing usable
pub const FALLBACK_FIELD: &str = "name";

/// Language tag field inside translation entries
pub const DEFAULT_LANGUAGE_FIELD: &str = "languageId";

/// Which translation entry a nested display key should read from
#[derive(Debug, Clone, Copy)]
pub struct LanguageMatch<'a> {
    pub language: &'a str,
    pub field: &'a str,
}

impl<'a> LanguageMatch<'a> {
    pub fn new(language: &'a str) -> Self {
        Self {
            language,
            field: DEFAULT_LANGUAGE_FIELD,
        }
    }
}

/// Parsed display key: one segment for a plain field, more for a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayKey {
    segments: Vec<String>,
}

impl DisplayKey {
    pub fn parse(key: &str) -> Self {
        Self {
            segments: key
                .split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Label of one option; empty string when neither the key nor `name` resolves
    pub fn label_of(&self, option: &Value, language: &LanguageMatch<'_>) -> String {
        self.walk(option, language)
            .or_else(|| option.get(FALLBACK_FIELD).and_then(scalar_text))
            .unwrap_or_default()
    }

    fn walk(&self, option: &Value, language: &LanguageMatch<'_>) -> Option<String> {
        if self.segments.is_empty() {
            return None;
        }
        let mut current = option;
        for segment in &self.segments {
            if let Value::Array(entries) = current {
                current = entries.iter().find(|entry| {
                    entry.get(language.field).and_then(key_string).as_deref()
                        == Some(language.language)
                })?;
            }
            current = current.get(segment)?;
        }
        scalar_text(current)
    }
}

impl Default for DisplayKey {
    fn default() -> Self {
        Self::parse(FALLBACK_FIELD)
    }
}

/// Canonical string form of an identifier field.
///
/// Numbers and booleans use their JSON text, so the selection `"1"` matches
/// an option whose id is the number `1`.
pub fn key_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Value key of an option, if it has a usable one
pub fn option_value(option: &Value, value_key: &str) -> Option<String> {
    option.get(value_key).and_then(key_string)
}

pub fn find_option<'a>(options: &'a [Value], value_key: &str, selected: &str) -> Option<&'a Value> {
    options
        .iter()
        .find(|option| option_value(option, value_key).as_deref() == Some(selected))
}

/// Selected key as form text; "" when nothing is selected
pub fn form_value(selected: Option<&str>) -> String {
    selected.unwrap_or_default().to_string()
}

/// Label shown while the select is closed.
///
/// Empty when nothing is selected or when the selected option is not in
/// `options` yet (e.g. the list is still loading).
pub fn resolve_display(
    selected: Option<&str>,
    options: &[Value],
    value_key: &str,
    display_key: &DisplayKey,
    language: &LanguageMatch<'_>,
) -> String {
    let Some(selected) = selected.filter(|s| !s.is_empty()) else {
        return String::new();
    };
    find_option(options, value_key, selected)
        .map(|option| display_key.label_of(option, language))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(selected: Option<&str>, options: &[Value], display_key: &str) -> String {
        resolve_display(
            selected,
            options,
            "id",
            &DisplayKey::parse(display_key),
            &LanguageMatch::new("en"),
        )
    }

    #[test]
    fn test_plain_field() {
        let options = vec![json!({"id": 1, "name": "Foo"})];
        assert_eq!(resolve(Some("1"), &options, "name"), "Foo");
        assert_eq!(resolve(Some("2"), &options, "name"), "");
    }

    #[test]
    fn test_empty_selection() {
        let options = vec![json!({"id": 1, "name": "Foo"})];
        assert_eq!(resolve(None, &options, "name"), "");
        assert_eq!(resolve(Some(""), &options, "name"), "");
    }

    #[test]
    fn test_selection_before_options_load() {
        assert_eq!(resolve(Some("1"), &[], "name"), "");
    }

    #[test]
    fn test_translation_path() {
        let options = vec![json!({
            "id": 1,
            "name": "Foo",
            "translations": [
                {"languageId": "ar", "name": "Baz"},
                {"languageId": "en", "name": "Bar"}
            ]
        })];
        assert_eq!(resolve(Some("1"), &options, "translations.name"), "Bar");
    }

    #[test]
    fn test_translation_path_falls_back_to_name() {
        let options = vec![json!({
            "id": 1,
            "name": "Foo",
            "translations": [{"languageId": "ar", "name": "Baz"}]
        })];
        assert_eq!(resolve(Some("1"), &options, "translations.name"), "Foo");

        let without_list = vec![json!({"id": 1, "name": "Foo"})];
        assert_eq!(resolve(Some("1"), &without_list, "translations.name"), "Foo");
    }

    #[test]
    fn test_plain_field_falls_back_when_blank() {
        let options = vec![json!({"id": 1, "title": " ", "name": "Foo"})];
        assert_eq!(resolve(Some("1"), &options, "title"), "Foo");
    }

    #[test]
    fn test_nested_object_path() {
        let options = vec![json!({"id": "a", "clinic": {"city": "Cairo"}})];
        assert_eq!(resolve(Some("a"), &options, "clinic.city"), "Cairo");
    }

    #[test]
    fn test_string_selection_matches_numeric_id() {
        let options = vec![json!({"id": 10, "name": "Ten"}), json!({"id": "10x", "name": "Other"})];
        assert_eq!(resolve(Some("10"), &options, "name"), "Ten");
        assert_eq!(resolve(Some("10x"), &options, "name"), "Other");
    }

    #[test]
    fn test_malformed_option_degrades_to_empty() {
        let options = vec![json!({"id": 1}), json!("not an object"), json!({"name": "No id"})];
        assert_eq!(resolve(Some("1"), &options, "translations.name"), "");
        assert_eq!(resolve(Some("1"), &options, "label"), "");
    }

    #[test]
    fn test_numeric_label_is_rendered() {
        let options = vec![json!({"id": 1, "code": 4021})];
        assert_eq!(resolve(Some("1"), &options, "code"), "4021");
    }

    #[test]
    fn test_parse_ignores_empty_segments() {
        assert_eq!(DisplayKey::parse("translations..name"), DisplayKey::parse("translations.name"));
        assert!(DisplayKey::parse("translations.name").is_nested());
        assert!(!DisplayKey::parse("name").is_nested());
    }

    #[test]
    fn test_custom_language_field() {
        let options = vec![json!({
            "id": 1,
            "name": "Foo",
            "translations": [{"lang": "en", "name": "Bar"}]
        })];
        let language = LanguageMatch { language: "en", field: "lang" };
        let label = resolve_display(Some("1"), &options, "id", &DisplayKey::parse("translations.name"), &language);
        assert_eq!(label, "Bar");
    }

    #[test]
    fn test_form_value_is_empty_without_selection() {
        assert_eq!(form_value(None), "");
        assert_eq!(form_value(Some("")), "");
        assert_eq!(form_value(Some("7")), "7");
    }
}
