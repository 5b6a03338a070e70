//! Dark mode preference and toggle.
//!
//! The preference lives in `localStorage` under `widget_admin_dark` and is
//! applied as a `data-theme` attribute on `<html>`. Without a stored value the
//! system color scheme decides.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{DARK_MODE_KEY, load_flag, save_flag};

/// Stored preference, else the system preference, else light.
pub fn read_preference() -> bool {
    load_flag(DARK_MODE_KEY).unwrap_or_else(prefers_dark)
}

fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Value of the `data-theme` attribute for `enabled`.
#[must_use]
pub fn theme_attr(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_attr(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    save_flag(DARK_MODE_KEY, next);
    next
}
