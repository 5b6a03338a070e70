//! Clipboard access for copy buttons.

/// Write `text` to the system clipboard. Returns `false` when no clipboard is
/// available (server rendering, insecure context).
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) else {
            log::warn!("clipboard unavailable");
            return false;
        };
        let _ = clipboard.write_text(text);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
