//! Decides what the open dropdown shows for the current search text.

use serde_json::Value;

use super::display::{option_value, DisplayKey, LanguageMatch};

/// Who owns filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// The caller re-queries on every keystroke; options render as given
    Delegated,
    /// No search callback. `filter` turns on substring matching of labels
    Local { filter: bool },
}

impl SearchMode {
    pub fn is_delegated(&self) -> bool {
        matches!(self, SearchMode::Delegated)
    }
}

/// One pickable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleOption {
    pub value: String,
    pub label: String,
}

/// Content of the dropdown area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionList {
    Loading,
    Empty(String),
    Options(Vec<VisibleOption>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyMessages {
    pub no_options: String,
    pub no_results: String,
}

impl Default for EmptyMessages {
    fn default() -> Self {
        Self {
            no_options: "No options".to_string(),
            no_results: "No search results".to_string(),
        }
    }
}

/// Case-insensitive substring match; a blank term matches everything
pub fn matches(label: &str, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || label.to_lowercase().contains(&term.to_lowercase())
}

/// Rows for the current options. Options without a usable value key are
/// skipped since picking them could not produce a selection.
pub fn visible_options(
    options: &[Value],
    search: &str,
    mode: SearchMode,
    value_key: &str,
    display_key: &DisplayKey,
    language: &LanguageMatch<'_>,
) -> Vec<VisibleOption> {
    let filter = matches!(mode, SearchMode::Local { filter: true });
    options
        .iter()
        .filter_map(|option| {
            let value = option_value(option, value_key)?;
            let label = display_key.label_of(option, language);
            Some(VisibleOption { value, label })
        })
        .filter(|row| !filter || matches(&row.label, search))
        .collect()
}

/// Loading wins over any list content; an empty list picks its message by
/// whether the user has typed anything.
pub fn option_list(
    is_loading: bool,
    rows: Vec<VisibleOption>,
    search: &str,
    messages: &EmptyMessages,
) -> OptionList {
    if is_loading {
        return OptionList::Loading;
    }
    if rows.is_empty() {
        let message = if search.is_empty() {
            &messages.no_options
        } else {
            &messages.no_results
        };
        return OptionList::Empty(message.clone());
    }
    OptionList::Options(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Panadol"}),
            json!({"id": 2, "name": "Brufen"}),
            json!({"name": "Orphan without id"}),
        ]
    }

    fn rows(search: &str, mode: SearchMode) -> Vec<VisibleOption> {
        visible_options(
            &options(),
            search,
            mode,
            "id",
            &DisplayKey::default(),
            &LanguageMatch::new("en"),
        )
    }

    #[test]
    fn test_delegated_mode_renders_options_as_given() {
        let visible = rows("pan", SearchMode::Delegated);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[1], VisibleOption { value: "2".into(), label: "Brufen".into() });
    }

    #[test]
    fn test_local_mode_is_unfiltered_by_default() {
        assert_eq!(rows("pan", SearchMode::Local { filter: false }).len(), 2);
    }

    #[test]
    fn test_local_filter_matches_substring_case_insensitively() {
        let visible = rows("PAN", SearchMode::Local { filter: true });
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].label, "Panadol");
        assert_eq!(rows("  ", SearchMode::Local { filter: true }).len(), 2);
    }

    #[test]
    fn test_loading_hides_rows() {
        let list = option_list(true, rows("", SearchMode::Delegated), "", &EmptyMessages::default());
        assert_eq!(list, OptionList::Loading);
    }

    #[test]
    fn test_empty_messages() {
        let messages = EmptyMessages {
            no_options: "Nothing here".into(),
            no_results: "No match".into(),
        };
        assert_eq!(option_list(false, vec![], "", &messages), OptionList::Empty("Nothing here".into()));
        assert_eq!(option_list(false, vec![], "xyz", &messages), OptionList::Empty("No match".into()));
    }

    #[test]
    fn test_rows_pass_through() {
        let visible = rows("", SearchMode::Delegated);
        assert_eq!(
            option_list(false, visible.clone(), "", &EmptyMessages::default()),
            OptionList::Options(visible)
        );
    }
}
