use leptos::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }

    pub fn cell_class(&self) -> &'static str {
        match self {
            Align::Left => "",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

/// Comparable projection of a cell. Orders as `Empty < Number < Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Empty,
    Number(f64),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Empty => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }

    /// Numbers by value, text case-insensitively
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<&str> for SortValue {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() {
            SortValue::Empty
        } else {
            SortValue::Text(s.to_string())
        }
    }
}

impl From<String> for SortValue {
    fn from(s: String) -> Self {
        SortValue::from(s.as_str())
    }
}

impl From<f64> for SortValue {
    fn from(n: f64) -> Self {
        SortValue::Number(n)
    }
}

impl From<i64> for SortValue {
    fn from(n: i64) -> Self {
        SortValue::Number(n as f64)
    }
}

impl<V: Into<SortValue>> From<Option<V>> for SortValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Empty)
    }
}

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
pub type SortKey<T> = Arc<dyn Fn(&T) -> SortValue + Send + Sync>;

/// Column definition for [`DataTable`](super::DataTable)
pub struct Column<T> {
    pub key: &'static str,
    pub title: String,
    pub align: Align,
    pub min_width: f64,
    sort_key: Option<SortKey<T>>,
    render: CellRenderer<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title.clone(),
            align: self.align,
            min_width: self.min_width,
            sort_key: self.sort_key.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T: 'static> Column<T> {
    /// Column with a custom cell view; not sortable until [`Column::sort_by`]
    pub fn new<F>(key: &'static str, title: impl Into<String>, render: F) -> Self
    where
        F: Fn(&T) -> AnyView + Send + Sync + 'static,
    {
        Self {
            key,
            title: title.into(),
            align: Align::Left,
            min_width: 100.0,
            sort_key: None,
            render: Arc::new(render),
        }
    }

    /// Plain text column, sorted by the same text
    pub fn text<F>(key: &'static str, title: impl Into<String>, value: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let value = Arc::new(value);
        let for_sort = value.clone();
        Self::new(key, title, move |row| value(row).into_any())
            .sort_by(move |row| SortValue::from(for_sort(row)))
    }

    pub fn sort_by<F>(mut self, key: F) -> Self
    where
        F: Fn(&T) -> SortValue + Send + Sync + 'static,
    {
        self.sort_key = Some(Arc::new(key));
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }

    pub fn sort_value(&self, row: &T) -> Option<SortValue> {
        self.sort_key.as_ref().map(|key| key(row))
    }

    pub fn render(&self, row: &T) -> AnyView {
        (self.render)(row)
    }
}

/// Per-row button shown in the trailing actions column
pub struct RowAction<T: 'static> {
    pub label: String,
    pub icon: &'static str,
    pub on_click: Callback<T>,
}

impl<T: 'static> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon,
            on_click: self.on_click,
        }
    }
}

impl<T: 'static> RowAction<T> {
    pub fn new(label: impl Into<String>, icon: &'static str, on_click: Callback<T>) -> Self {
        Self {
            label: label.into(),
            icon,
            on_click,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_storable<T: Send + Sync + 'static>() {}

    #[test]
    fn test_columns_and_actions_are_storable() {
        assert_storable::<Column<String>>();
        assert_storable::<RowAction<String>>();
    }

    #[test]
    fn test_text_column_sorts_by_its_text() {
        let column = Column::text("name", "Name", |s: &String| s.to_uppercase())
            .align(Align::Right)
            .min_width(40.0);
        assert!(column.is_sortable());
        assert_eq!(
            column.sort_value(&"abc".to_string()),
            Some(SortValue::Text("ABC".to_string()))
        );
        assert_eq!(column.align.cell_class(), "text-right");
        assert_eq!(column.min_width, 40.0);

        let plain = Column::new("raw", "Raw", |s: &String| s.clone().into_any());
        assert!(!plain.is_sortable());
        assert_eq!(plain.sort_value(&String::new()), None);
    }
}
