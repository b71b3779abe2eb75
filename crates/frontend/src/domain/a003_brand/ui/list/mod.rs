use contracts::domain::a003_brand::aggregate::Brand;
use contracts::shared::list::ListQuery;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::{resources, use_api};
use crate::shared::components::table::{Align, Column, DataTable, RowAction, SortState, SortValue};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

fn brand_columns(language: String) -> Vec<Column<Brand>> {
    vec![
        Column::text("id", "ID", |b: &Brand| b.id.to_string())
            .sort_by(|b| SortValue::from(b.id))
            .align(Align::Right)
            .min_width(60.0),
        Column::text("name", "Name", move |b: &Brand| {
            b.display_name(&language).to_string()
        })
        .min_width(200.0),
        Column::new("image", "Image", |b: &Brand| match &b.image {
            Some(src) => view! { <img class="table__thumb" src=src.clone() alt="" /> }.into_any(),
            None => "-".into_any(),
        }),
        Column::text("created_at", "Created", |b: &Brand| {
            format_datetime(&b.metadata.created_at)
        })
        .sort_by(|b| SortValue::from(b.metadata.created_at.timestamp())),
    ]
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn BrandList() -> impl IntoView {
    let client = use_api();
    let language = client.config().language.clone();
    let page_size = client.config().page_size;
    let resource = StoredValue::new(resources::brands(&client));

    let (items, set_items) = signal::<Vec<Brand>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let Some(resource) = resource.try_get_value() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match resource.list(&ListQuery::new(page_size)).await {
                Ok(page) => {
                    set_items.set(page.data);
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load brands: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let on_delete = Callback::new(move |brand: Brand| {
        if !confirm(&format!("Delete brand \"{}\"?", brand.name)) {
            return;
        }
        let Some(resource) = resource.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match resource.delete(&brand.id).await {
                Ok(()) => {
                    log::info!("Deleted brand {}", brand.id);
                    fetch();
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
        });
    });

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Brands"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <DataTable
                rows=items
                columns=brand_columns(language)
                actions=vec![RowAction::new("Delete", "delete", on_delete)]
                loading=loading
                empty_message="No brands yet"
                initial_sort=SortState::by("name")
            />
        </div>
    }
}
