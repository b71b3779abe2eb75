//! Application shell: sidebar navigation and the active screen

use crate::domain::a003_brand::ui::list::BrandList;
use crate::domain::a006_order::ui::list::OrderList;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Orders,
    Brands,
}

impl Section {
    pub fn all() -> [Section; 2] {
        [Section::Orders, Section::Brands]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Orders => "Orders",
            Section::Brands => "Brands",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Section::Orders => "orders",
            Section::Brands => "brands",
        }
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let active = RwSignal::new(Section::Orders);

    let nav_items = Section::all()
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=move || active.get() == section
                    on:click=move |_| {
                        log::debug!("Switching to {:?}", section);
                        active.set(section);
                    }
                >
                    {icon(section.icon_name())}
                    <span>{section.title()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="app-shell">
            <nav class="sidebar">
                <div class="sidebar__title">"Pharmacy admin"</div>
                {nav_items}
            </nav>
            <main class="app-shell__main">
                {move || match active.get() {
                    Section::Orders => view! { <OrderList /> }.into_any(),
                    Section::Brands => view! { <BrandList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
