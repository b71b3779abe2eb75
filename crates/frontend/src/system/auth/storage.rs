use web_sys::window;

use crate::shared::api::TokenProvider;

const ACCESS_TOKEN_KEY: &str = "admin_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the access token from localStorage; blank values count as missing
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

pub fn clear_access_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

/// Reads the token on every request so a new login applies without rebuilding the client
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

impl TokenProvider for LocalStorageTokens {
    fn token(&self) -> Option<String> {
        get_access_token()
    }

    fn clear(&self) {
        clear_access_token();
    }
}
