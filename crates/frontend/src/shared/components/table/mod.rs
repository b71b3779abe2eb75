pub mod column;
pub mod data_table;
pub mod number_format;
pub mod sort;
pub mod sortable_header_cell;

pub use column::{Align, Column, RowAction, SortValue};
pub use data_table::DataTable;
pub use number_format::*;
pub use sort::{sort_rows, SortState};
pub use sortable_header_cell::SortableHeaderCell;
