use leptos::prelude::*;
use thaw::*;

use super::column::Align;
use super::sort::SortState;

/// Clickable header cell with a sort indicator (▲▼⇅)
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// Column key passed to `on_sort`
    sort_field: &'static str,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
    #[prop(optional)] align: Align,
) -> impl IntoView {
    let header_style = if align == Align::Right {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=header_style
                role="button"
                aria-sort=move || {
                    sort.with(|s| match (s.is_sorted_by(sort_field), s.ascending) {
                        (false, _) => "none",
                        (true, true) => "ascending",
                        (true, false) => "descending",
                    })
                }
                on:click=move |_| on_sort.run(sort_field.to_string())
            >
                {label}
                <span class=move || sort.with(|s| s.indicator_class(sort_field))>
                    {move || sort.with(|s| s.indicator(sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
