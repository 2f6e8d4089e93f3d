//! Thin wrapper over `window.localStorage`. Every failure degrades to "not
//! stored" so private browsing or disabled storage never breaks a screen.

use proxy_console_shared::prefs::PreferenceFlag;
use web_sys::Storage;

use crate::config::TOKEN_STORAGE_KEY;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("localStorage write failed for {key}").into());
        }
    }
}

pub fn read_flag(flag: PreferenceFlag) -> bool {
    flag.parse(get_item(flag.key).as_deref())
}

pub fn write_flag(flag: PreferenceFlag, value: bool) {
    set_item(flag.key, PreferenceFlag::encode(value));
}

/// Admin token for the `Authorization` header, if one was saved.
pub fn auth_token() -> Option<String> {
    get_item(TOKEN_STORAGE_KEY)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
