//! Embeddable chat widget settings, one struct per settings tab.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use serde::{Deserialize, Serialize};

/// Language the widget UI is rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Pt,
    It,
    Ja,
    Zh,
}

wire_enum!(Language, "language", {
    En => ("en", "English"),
    Es => ("es", "Spanish"),
    Fr => ("fr", "French"),
    De => ("de", "German"),
    Pt => ("pt", "Portuguese"),
    It => ("it", "Italian"),
    Ja => ("ja", "Japanese"),
    Zh => ("zh", "Chinese"),
});

/// Screen corner the launcher bubble is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LauncherPosition {
    #[default]
    BottomRight,
    BottomLeft,
}

wire_enum!(LauncherPosition, "launcher position", {
    BottomRight => ("bottom_right", "Bottom right"),
    BottomLeft => ("bottom_left", "Bottom left"),
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

wire_enum!(Theme, "theme", {
    Light => ("light", "Light"),
    Dark => ("dark", "Dark"),
    Auto => ("auto", "Match system"),
});

/// Texts and identity shown inside the widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSettings {
    pub title: String,
    pub subtitle: String,
    pub bot_name: String,
    pub welcome_message: String,
    pub avatar_url: String,
    pub language: Language,
    pub input_placeholder: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            title: "Chat with us".to_owned(),
            subtitle: "We typically reply in a few minutes".to_owned(),
            bot_name: "Assistant".to_owned(),
            welcome_message: "Hi there! How can I help you today?".to_owned(),
            avatar_url: String::new(),
            language: Language::En,
            input_placeholder: "Type your message...".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    pub primary_color: String,
    pub position: LauncherPosition,
    pub theme: Theme,
    pub show_avatar: bool,
    pub rounded_corners: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_owned(),
            position: LauncherPosition::BottomRight,
            theme: Theme::Light,
            show_avatar: true,
            rounded_corners: true,
        }
    }
}

/// Behavior toggles and the embed snippet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSettings {
    /// Opaque HTML snippet customers paste into their site. Read-only here.
    pub embed_snippet: String,
    pub enable_sound: bool,
    pub persist_conversation: bool,
    pub show_branding: bool,
    pub enable_file_upload: bool,
    pub collect_email: bool,
}

impl AdvancedSettings {
    /// Defaults for a widget, with the embed snippet pointing at `widget_id`.
    #[must_use]
    pub fn for_widget(widget_id: &str) -> Self {
        Self {
            embed_snippet: embed_snippet(widget_id),
            enable_sound: true,
            persist_conversation: true,
            show_branding: true,
            enable_file_upload: false,
            collect_email: false,
        }
    }
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self::for_widget("default")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    pub content: ContentSettings,
    pub appearance: AppearanceSettings,
    pub advanced: AdvancedSettings,
}

/// Script tag that loads the widget for `widget_id`.
#[must_use]
pub fn embed_snippet(widget_id: &str) -> String {
    format!(r#"<script src="/widget.js" data-widget-id="{widget_id}" async></script>"#)
}
