//! Browser `localStorage` helpers for console preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only reads and writes live here so `dark_mode` and the sidebar do
//! not repeat web-sys glue. On the server every read misses and every write
//! is dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Stored dark-mode preference.
pub const DARK_MODE_KEY: &str = "widget_admin_dark";
/// Stored sidebar collapse preference.
pub const SIDEBAR_KEY: &str = "widget_admin_sidebar_collapsed";

/// Parse a stored boolean flag. Anything but `"true"`/`"false"` is treated as unset.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn encode_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Load a boolean flag for `key`.
pub fn load_flag(key: &str) -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        parse_flag(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a boolean flag for `key`.
pub fn save_flag(key: &str, value: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, encode_flag(value)).is_err() {
            log::warn!("could not persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
