use contracts::domain::a005_clinic::aggregate::Clinic;
use leptos::prelude::*;

use crate::shared::api::{resources, use_api};
use crate::shared::components::searchable_select::SearchableSelect;
use crate::shared::remote_options::RemoteOptions;

/// Clinic picker with server-side search over translated clinic names
#[component]
pub fn ClinicSelect(
    /// Selected clinic id as a string
    #[prop(into)]
    value: Signal<Option<String>>,
    on_change: Callback<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let client = use_api();
    let clinics: RemoteOptions<Clinic> =
        RemoteOptions::new(resources::clinics(&client), client.config().page_size);
    clinics.search(String::new());

    view! {
        <SearchableSelect
            value=value
            on_change=on_change
            options=clinics.options
            is_loading=clinics.loading
            on_search=Callback::new(move |term: String| clinics.search(term))
            display_key="translations.name"
            label=label
            required=required
            placeholder="Select clinic"
            search_placeholder="Search clinics..."
            no_options_message="No clinics"
        />
        {move || clinics.error.get().map(|e| view! { <div class="form__error">{e}</div> })}
    }
}
