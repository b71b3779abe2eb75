use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use serde_json::Value;
use thaw::Spinner;
use wasm_bindgen::JsCast;

use super::display::{form_value, resolve_display, DisplayKey, LanguageMatch, FALLBACK_FIELD};
use super::matcher::{option_list, visible_options, EmptyMessages, OptionList, SearchMode};
use super::state::{ComboboxEvent, ComboboxOutput, ComboboxState};
use crate::shared::config::{ApiConfig, DEFAULT_LANGUAGE};
use crate::shared::direction::TextDirection;

const DEFAULT_VALUE_KEY: &str = "id";

/// Searchable select over JSON option records
#[component]
pub fn SearchableSelect(
    /// Shown in the closed input when nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Selected value key; `None` or "" means no selection
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Called once per pick with the option's value key
    on_change: Callback<String>,
    /// Option records, owned by the caller
    #[prop(into)]
    options: Signal<Vec<Value>>,
    /// Replaces the option rows with a spinner while true
    #[prop(optional, into)]
    is_loading: MaybeProp<bool>,
    /// Delegated search: called with the text on every keystroke while open
    #[prop(optional)]
    on_search: Option<Callback<String>>,
    /// Identifier field, "id" by default
    #[prop(optional, into)]
    value_key: MaybeProp<String>,
    /// Label field or dotted path such as "translations.name"; "name" by default
    #[prop(optional, into)]
    display_key: MaybeProp<String>,
    /// Enforced through a hidden mirror input holding the selected key, since
    /// browsers skip `required` on the read-only visible input
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Placeholder of the input while open
    #[prop(optional, into)]
    search_placeholder: MaybeProp<String>,
    /// Shown when the list is empty and nothing has been typed
    #[prop(optional, into)]
    no_options_message: MaybeProp<String>,
    /// Target language for translated labels; also sets text direction
    #[prop(optional, into)]
    language: MaybeProp<String>,
    /// Substring filtering of labels when no `on_search` is given
    #[prop(optional)]
    filter_locally: bool,
) -> impl IntoView {
    let state = RwSignal::new(ComboboxState::new());
    let root = NodeRef::<Div>::new();
    let listbox_id = format!("searchable-select-{}", uuid::Uuid::new_v4().simple());
    let input_id = format!("{}-input", listbox_id);

    let mode = if on_search.is_some() {
        SearchMode::Delegated
    } else {
        SearchMode::Local {
            filter: filter_locally,
        }
    };

    let configured_language = use_context::<ApiConfig>()
        .map(|config| config.language)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let language = Signal::derive(move || {
        language
            .get()
            .unwrap_or_else(|| configured_language.clone())
    });
    let direction = Memo::new(move |_| TextDirection::for_language(&language.get()));
    let value_key =
        Signal::derive(move || value_key.get().unwrap_or_else(|| DEFAULT_VALUE_KEY.to_string()));
    let display_key = Memo::new(move |_| {
        DisplayKey::parse(&display_key.get().unwrap_or_else(|| FALLBACK_FIELD.to_string()))
    });

    let display_label = Memo::new(move |_| {
        let selected = value.get();
        let value_key = value_key.get();
        let language = language.get();
        display_key.with(|display_key| {
            options.with(|options| {
                resolve_display(
                    selected.as_deref(),
                    options,
                    &value_key,
                    display_key,
                    &LanguageMatch::new(&language),
                )
            })
        })
    });

    let is_open = move || state.with(ComboboxState::is_open);

    let dispatch = move |event: ComboboxEvent| {
        match state.try_update(|s| s.handle(event, mode)).flatten() {
            Some(ComboboxOutput::Change(value)) => on_change.run(value),
            Some(ComboboxOutput::Search(text)) => {
                if let Some(on_search) = on_search {
                    on_search.run(text);
                }
            }
            None => {}
        }
    };

    // Document-wide dismissal; pointer-downs inside `root` are not outside clicks
    let outside_listener = window_event_listener(ev::pointerdown, move |event: ev::PointerEvent| {
        if !state.with_untracked(ComboboxState::is_open) {
            return;
        }
        let inside = match (root.get_untracked(), event.target()) {
            (Some(root), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| root.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        dispatch(ComboboxEvent::PointerDown { inside });
    });
    on_cleanup(move || outside_listener.remove());

    let messages = Signal::derive(move || {
        let defaults = EmptyMessages::default();
        EmptyMessages {
            no_options: no_options_message.get().unwrap_or(defaults.no_options),
            no_results: defaults.no_results,
        }
    });

    let list_content = move || {
        let search = state.with(|s| s.search().to_string());
        let rows = display_key.with(|display_key| {
            options.with(|options| {
                visible_options(
                    options,
                    &search,
                    mode,
                    &value_key.get(),
                    display_key,
                    &LanguageMatch::new(&language.get()),
                )
            })
        });
        let is_loading = is_loading.get().unwrap_or(false);
        match option_list(is_loading, rows, &search, &messages.get()) {
            OptionList::Loading => view! {
                <div class="searchable-select__loading">
                    <Spinner />
                </div>
            }
            .into_any(),
            OptionList::Empty(message) => view! {
                <div class="searchable-select__empty">{message}</div>
            }
            .into_any(),
            OptionList::Options(rows) => rows
                .into_iter()
                .map(|row| {
                    let value_for_selected = row.value.clone();
                    let value_for_pick = row.value;
                    let is_selected = Signal::derive(move || {
                        value.get().as_deref() == Some(value_for_selected.as_str())
                    });
                    view! {
                        <div
                            class="searchable-select__option"
                            class:searchable-select__option--selected=move || is_selected.get()
                            role="option"
                            aria-selected=move || is_selected.get().to_string()
                            on:click=move |_| dispatch(ComboboxEvent::Pick(value_for_pick.clone()))
                        >
                            {row.label}
                        </div>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    let input_placeholder = move || {
        if is_open() {
            search_placeholder
                .get()
                .unwrap_or_else(|| "Search...".to_string())
        } else {
            placeholder.get().unwrap_or_default()
        }
    };

    let listbox_id_for_input = listbox_id.clone();
    let input_id_for_label = input_id.clone();

    view! {
        <div
            class="form__group searchable-select"
            class:searchable-select--open=is_open
            node_ref=root
            dir=move || direction.get().as_str()
            style=move || format!("text-align: {};", direction.get().text_align())
            on:keydown=move |event: ev::KeyboardEvent| {
                if event.key() == "Escape" {
                    dispatch(ComboboxEvent::Escape);
                }
            }
        >
            {move || label.get().map(|text| {
                let for_id = input_id_for_label.clone();
                view! {
                    <label class="form__label" for=for_id>
                        {text}
                        {required.then(|| view! { <span class="form__required">" *"</span> })}
                    </label>
                }
            })}
            <input
                id=input_id
                type="text"
                class="form__input searchable-select__input"
                role="combobox"
                autocomplete="off"
                aria-expanded=move || is_open().to_string()
                aria-controls=listbox_id_for_input
                readonly=move || !is_open()
                aria-required=required.to_string()
                placeholder=input_placeholder
                prop:value=move || state.with(|s| s.input_text(&display_label.get()))
                on:focus=move |_| dispatch(ComboboxEvent::Focus)
                on:click=move |_| dispatch(ComboboxEvent::Focus)
                on:input=move |ev| dispatch(ComboboxEvent::Input(event_target_value(&ev)))
            />
            {required.then(|| view! {
                <input
                    type="text"
                    class="searchable-select__validity"
                    tabindex="-1"
                    aria-hidden="true"
                    required=true
                    style="position: absolute; width: 1px; height: 1px; opacity: 0; pointer-events: none;"
                    prop:value=move || form_value(value.get().as_deref())
                    on:focus=move |_| dispatch(ComboboxEvent::Focus)
                />
            })}
            <Show when=is_open>
                <div class="searchable-select__dropdown" role="listbox" id=listbox_id.clone()>
                    {list_content}
                </div>
            </Show>
        </div>
    }
}
