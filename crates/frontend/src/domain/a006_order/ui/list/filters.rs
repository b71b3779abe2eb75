use leptos::prelude::*;

use super::state::{status_options, OrderFilterState};
use crate::domain::a005_clinic::ui::picker::ClinicSelect;
use crate::shared::components::searchable_select::SearchableSelect;
use crate::shared::icons::icon;

/// Status and clinic filters for [`OrderList`](super::OrderList)
#[component]
pub fn OrderFilters(filters: RwSignal<OrderFilterState>) -> impl IntoView {
    let statuses = Signal::stored(status_options());

    view! {
        <div class="filter-panel">
            <div class="filter-panel__field">
                <SearchableSelect
                    label="Status"
                    placeholder="All statuses"
                    value=Signal::derive(move || filters.with(OrderFilterState::status_value))
                    on_change=Callback::new(move |code: String| filters.update(|f| f.set_status(&code)))
                    options=statuses
                    filter_locally=true
                />
            </div>
            <div class="filter-panel__field">
                <ClinicSelect
                    label="Clinic"
                    value=Signal::derive(move || filters.with(OrderFilterState::clinic_value))
                    on_change=Callback::new(move |id: String| filters.update(|f| f.set_clinic(&id)))
                />
            </div>
            <button
                class="button button--secondary"
                disabled=move || filters.with(OrderFilterState::is_empty)
                on:click=move |_| filters.set(OrderFilterState::default())
            >
                {icon("x")}
                "Reset"
            </button>
        </div>
    }
}
