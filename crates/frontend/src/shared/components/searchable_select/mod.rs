//! Searchable select (combobox)
//!
//! A closed read-only input showing the selected option's label; focusing it
//! opens a search box over the option list. Filtering is either delegated to
//! the caller through `on_search` or done locally.
//!
//! ```ignore
//! view! {
//!     <SearchableSelect
//!         label="Clinic"
//!         value=selected
//!         on_change=Callback::new(move |id| set_selected.set(Some(id)))
//!         options=remote.options
//!         is_loading=remote.loading
//!         on_search=Callback::new(move |term| remote.search(term))
//!         display_key="translations.name"
//!     />
//! }
//! ```

pub mod component;
pub mod display;
pub mod matcher;
pub mod state;

pub use component::SearchableSelect;
pub use display::{resolve_display, DisplayKey, LanguageMatch};
pub use matcher::{option_list, visible_options, EmptyMessages, OptionList, SearchMode, VisibleOption};
pub use state::{ComboboxEvent, ComboboxOutput, ComboboxState, Phase};
