//! Local UI chrome state (navigation, sidebar, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`models`,
//! `follow_ups`, `widget`) so layout controls evolve independently of the
//! records they display.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level console sections, in sidebar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavItem {
    #[default]
    Overview,
    Models,
    FollowUps,
    Widget,
}

impl NavItem {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Models, Self::FollowUps, Self::Widget];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Models => "AI Models",
            Self::FollowUps => "Follow-ups",
            Self::Widget => "Widget",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Models => "/models",
            Self::FollowUps => "/follow-ups",
            Self::Widget => "/widget",
        }
    }

    /// Section owning `path`; unknown paths fall back to the overview.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|item| item.path() != "/" && (trimmed == item.path() || trimmed.starts_with(&format!("{}/", item.path()))))
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}
