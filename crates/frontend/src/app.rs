use crate::app_shell::AppShell;
use crate::shared::api::ApiClient;
use crate::shared::config::ApiConfig;
use crate::system::auth::LocalStorageTokens;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::load();

    // Config and client are shared by every screen and select via context.
    provide_context(config.clone());
    provide_context(ApiClient::new(config, LocalStorageTokens));

    view! {
        <AppShell />
    }
}
