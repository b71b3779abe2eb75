use std::cmp::Ordering;

use super::column::Column;

/// Active sort of a [`DataTable`](super::DataTable). An empty `field` means unsorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: String::new(),
            ascending: true,
        }
    }
}

impl SortState {
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        !self.field.is_empty() && self.field == field
    }

    /// Same field flips the direction; another field starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        if self.is_sorted_by(field) {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }

    pub fn indicator_class(&self, field: &str) -> &'static str {
        if self.is_sorted_by(field) {
            "table__sort-indicator table__sort-indicator--active"
        } else {
            "table__sort-indicator"
        }
    }
}

/// Stable in-place sort by the active column. No-op when the field is unknown or not sortable.
pub fn sort_rows<T: 'static>(rows: &mut [T], columns: &[Column<T>], state: &SortState) {
    let Some(column) = columns
        .iter()
        .find(|column| column.key == state.field && column.is_sortable())
    else {
        return;
    };

    rows.sort_by(|a, b| {
        let ordering = match (column.sort_value(a), column.sort_value(b)) {
            (Some(a), Some(b)) => a.compare(&b),
            _ => Ordering::Equal,
        };
        if state.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::super::column::SortValue;
    use super::*;
    use leptos::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
        price: Option<f64>,
    }

    fn row(id: i64, name: &str, price: Option<f64>) -> Row {
        Row {
            id,
            name: name.to_string(),
            price,
        }
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::text("name", "Name", |r: &Row| r.name.clone()),
            Column::new("price", "Price", |r: &Row| {
                r.price.map(|p| p.to_string()).unwrap_or_default().into_any()
            })
            .sort_by(|r| SortValue::from(r.price)),
            Column::new("id", "ID", |r: &Row| r.id.to_string().into_any()),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_toggle_flips_direction_on_same_field() {
        let mut state = SortState::default();
        state.toggle("name");
        assert_eq!(state, SortState::by("name"));
        state.toggle("name");
        assert!(!state.ascending);
        state.toggle("price");
        assert_eq!(state.field, "price");
        assert!(state.ascending);
    }

    #[test]
    fn test_indicator_marks_active_column() {
        let mut state = SortState::by("name");
        assert_eq!(state.indicator("name"), " ▲");
        assert_eq!(state.indicator("price"), " ⇅");
        state.toggle("name");
        assert_eq!(state.indicator("name"), " ▼");
        assert_eq!(SortState::default().indicator(""), " ⇅");
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let mut rows = vec![row(1, "banana", None), row(2, "Apple", None), row(3, "cherry", None)];
        sort_rows(&mut rows, &columns(), &SortState::by("name"));
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[test]
    fn test_empty_values_sort_first_ascending_and_last_descending() {
        let mut rows = vec![row(1, "a", Some(5.0)), row(2, "b", None), row(3, "c", Some(1.5))];
        let cols = columns();
        sort_rows(&mut rows, &cols, &SortState::by("price"));
        assert_eq!(ids(&rows), vec![2, 3, 1]);

        let mut state = SortState::by("price");
        state.toggle("price");
        sort_rows(&mut rows, &cols, &state);
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut rows = vec![row(1, "same", None), row(2, "Same", None), row(3, "same", None)];
        sort_rows(&mut rows, &columns(), &SortState::by("name"));
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_unsortable_or_unknown_column_leaves_rows_untouched() {
        let mut rows = vec![row(3, "c", None), row(1, "a", None)];
        sort_rows(&mut rows, &columns(), &SortState::by("id"));
        assert_eq!(ids(&rows), vec![3, 1]);
        sort_rows(&mut rows, &columns(), &SortState::by("missing"));
        assert_eq!(ids(&rows), vec![3, 1]);
    }

    #[test]
    fn test_sort_value_orders_kinds() {
        assert!(SortValue::Empty.compare(&SortValue::Number(-1.0)).is_lt());
        assert!(SortValue::Number(1e9).compare(&SortValue::from("a")).is_lt());
        assert_eq!(SortValue::from("  "), SortValue::Empty);
        assert_eq!(SortValue::from(None::<i64>), SortValue::Empty);
    }
}
