pub mod searchable_select;
pub mod table;
