//! Widget settings editor state.
//!
//! Edits stay in memory. A saved baseline is kept beside the working copy so
//! the page can show unsaved changes and discard them.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use records::{ValidationErrors, WidgetSettings, validate};

/// Tabs on the widget settings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetTab {
    #[default]
    Content,
    Appearance,
    Advanced,
}

impl WidgetTab {
    pub const ALL: [Self; 3] = [Self::Content, Self::Appearance, Self::Advanced];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Content => "Content",
            Self::Appearance => "Appearance",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub settings: WidgetSettings,
    pub tab: WidgetTab,
    pub errors: ValidationErrors,
    baseline: WidgetSettings,
}

impl WidgetState {
    #[must_use]
    pub fn new(settings: WidgetSettings) -> Self {
        Self { baseline: settings.clone(), settings, ..Self::default() }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.settings != self.baseline
    }

    /// Discard edits back to the last saved settings.
    pub fn reset(&mut self) {
        self.settings = self.baseline.clone();
        self.errors = ValidationErrors::new();
    }

    /// Validate every tab and, if clean, adopt the working copy as the baseline.
    ///
    /// # Errors
    ///
    /// Returns the combined errors, which are also kept for inline display.
    pub fn save(&mut self) -> Result<&WidgetSettings, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate::content_settings(&self.settings.content) {
            errors.extend(e);
        }
        if let Err(e) = validate::appearance_settings(&self.settings.appearance) {
            errors.extend(e);
        }
        self.errors = errors.clone();
        errors.into_result()?;
        self.baseline = self.settings.clone();
        Ok(&self.settings)
    }

    /// Tab holding the first invalid field, for jumping there after a failed save.
    #[must_use]
    pub fn first_invalid_tab(&self) -> Option<WidgetTab> {
        let first = self.errors.iter().next()?;
        Some(if first.field == "primaryColor" { WidgetTab::Appearance } else { WidgetTab::Content })
    }
}
