pub mod filters;
pub mod state;

use contracts::domain::a006_order::aggregate::{Order, UpdateOrderStatusDto};
use contracts::enums::OrderStatus;
use contracts::shared::list::ListQuery;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use self::filters::OrderFilters;
use self::state::create_state;
use crate::shared::api::{resources, use_api};
use crate::shared::components::table::{
    format_money, Align, Column, DataTable, RowAction, SortState, SortValue,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

fn customer_label(order: &Order) -> String {
    order
        .user_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| format!("User #{}", order.user_id))
}

fn order_columns() -> Vec<Column<Order>> {
    vec![
        Column::text("id", "Order", |o: &Order| format!("#{}", o.id))
            .sort_by(|o| SortValue::from(o.id))
            .min_width(80.0),
        Column::text("customer", "Customer", customer_label).min_width(180.0),
        Column::new("status", "Status", |o: &Order| {
            let class = format!("badge badge--{}", o.status.code());
            view! { <span class=class>{o.status.display_name()}</span> }.into_any()
        })
        .sort_by(|o| SortValue::from(o.status.display_name())),
        Column::text("items", "Items", |o: &Order| o.items.len().to_string())
            .sort_by(|o| SortValue::from(o.items.len() as i64))
            .align(Align::Right),
        Column::text("total", "Total", |o: &Order| format_money(o.grand_total()))
            .sort_by(|o| SortValue::from(o.grand_total()))
            .align(Align::Right),
        Column::text("created_at", "Created", |o: &Order| {
            format_datetime(&o.metadata.created_at)
        })
        .sort_by(|o| SortValue::from(o.metadata.created_at.timestamp()))
        .min_width(160.0),
    ]
}

#[component]
pub fn OrderList() -> impl IntoView {
    let client = use_api();
    let page_size = client.config().page_size;
    let resource = StoredValue::new(resources::orders(&client));
    let filters = create_state();

    let (items, set_items) = signal::<Vec<Order>>(Vec::new());
    let (total, set_total) = signal(0u64);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let Some(resource) = resource.try_get_value() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let query = ListQuery::new(page_size).with_sort("createdAt", false);
            match resource.list(&query).await {
                Ok(page) => {
                    set_total.set(page.total);
                    set_items.set(page.data);
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load orders: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let on_cancel = Callback::new(move |order: Order| {
        if order.status.is_final() {
            set_error.set(Some(format!(
                "Order #{} is already {}",
                order.id,
                order.status.display_name().to_lowercase()
            )));
            return;
        }
        let Some(resource) = resource.try_get_value() else {
            return;
        };
        let dto = UpdateOrderStatusDto {
            status: OrderStatus::Cancelled,
            note: None,
        };
        spawn_local(async move {
            match resource.set_status(&order.id, &dto).await {
                Ok(updated) => {
                    log::info!("Order {} -> {}", updated.id, updated.status.code());
                    set_items.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|r| r.id == updated.id) {
                            *row = updated;
                        }
                    });
                }
                Err(e) => set_error.set(Some(e.user_message())),
            }
        });
    });

    let visible = Signal::derive(move || filters.with(|f| items.with(|rows| f.apply(rows))));

    let newest_first = SortState {
        field: "created_at".to_string(),
        ascending: false,
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Orders"</h2>
                <div class="header__actions">
                    <span class="header__counter">
                        {move || format!("{} of {}", visible.with(Vec::len), total.get())}
                    </span>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <OrderFilters filters=filters />

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <DataTable
                rows=visible
                columns=order_columns()
                actions=vec![RowAction::new("Cancel", "x", on_cancel)]
                loading=loading
                empty_message=Signal::derive(move || {
                    if filters.with(|f| f.is_empty()) {
                        "No orders".to_string()
                    } else {
                        "No orders match the filters".to_string()
                    }
                })
                initial_sort=newest_first
            />
        </div>
    }
}
