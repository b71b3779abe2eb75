use leptos::prelude::*;
use thaw::*;

use super::column::{Column, RowAction};
use super::sort::{sort_rows, SortState};
use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::icons::icon;

/// Client-side sortable table over already fetched rows
///
/// ```ignore
/// <DataTable
///     rows=brands.options
///     columns=vec![Column::text("name", "Name", |b: &Brand| b.name.clone())]
///     actions=vec![RowAction::new("Delete", "delete", on_delete)]
///     loading=brands.loading
/// />
/// ```
#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(optional)] actions: Vec<RowAction<T>>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional, into)] empty_message: MaybeProp<String>,
    #[prop(optional)] initial_sort: Option<SortState>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let sort = RwSignal::new(initial_sort.unwrap_or_default());
    let has_actions = !actions.is_empty();
    let column_count = columns.len() + usize::from(has_actions);
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);

    let on_sort = Callback::new(move |field: String| sort.update(|s| s.toggle(&field)));

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                if col.is_sortable() {
                    view! {
                        <SortableHeaderCell
                            label=col.title.clone()
                            sort_field=col.key
                            sort=sort
                            on_sort=on_sort
                            min_width=col.min_width
                            align=col.align
                        />
                    }
                    .into_any()
                } else {
                    let title = col.title.clone();
                    view! {
                        <TableHeaderCell min_width=col.min_width>{title}</TableHeaderCell>
                    }
                    .into_any()
                }
            })
            .collect_view()
    });

    let status_row = move |content: AnyView| {
        view! {
            <tr class="table__status-row">
                <td colspan=column_count.to_string()>{content}</td>
            </tr>
        }
        .into_any()
    };

    let body = move || {
        if loading.get().unwrap_or(false) {
            return status_row(view! { <Spinner /> }.into_any());
        }

        let mut rows = rows.get();
        if rows.is_empty() {
            let message = empty_message
                .get()
                .unwrap_or_else(|| "No records".to_string());
            return status_row(view! { <span class="table__empty">{message}</span> }.into_any());
        }

        sort.with(|state| columns.with_value(|cols| sort_rows(&mut rows, cols, state)));

        rows.into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            let cell = col.render(&row);
                            view! {
                                <TableCell class=col.align.cell_class()>
                                    <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view()
                });
                let action_cell = has_actions.then(|| {
                    let buttons = actions.with_value(|acts| {
                        acts.iter()
                            .map(|action| {
                                let row = row.clone();
                                let on_click = action.on_click;
                                view! {
                                    <button
                                        class="button button--ghost button--small"
                                        title=action.label.clone()
                                        on:click=move |_| on_click.run(row.clone())
                                    >
                                        {icon(action.icon)}
                                        <span>{action.label.clone()}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    });
                    view! {
                        <TableCell>
                            <div class="table__actions">{buttons}</div>
                        </TableCell>
                    }
                });
                view! {
                    <TableRow>
                        {cells}
                        {action_cell}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        {header_cells}
                        {has_actions.then(|| view! {
                            <TableHeaderCell min_width=80.0>"Actions"</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
        </div>
    }
}
