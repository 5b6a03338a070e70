use super::*;

// =============================================================
// Dirty tracking
// =============================================================

#[test]
fn fresh_state_is_clean() {
    let state = WidgetState::new(WidgetSettings::default());
    assert!(!state.is_dirty());
    assert_eq!(state.tab, WidgetTab::Content);
}

#[test]
fn edit_marks_dirty_and_reset_restores() {
    let mut state = WidgetState::new(WidgetSettings::default());
    state.settings.content.title = "Talk to sales".to_owned();
    state.settings.advanced.enable_sound = !state.settings.advanced.enable_sound;
    assert!(state.is_dirty());

    state.reset();
    assert!(!state.is_dirty());
    assert_eq!(state.settings, WidgetSettings::default());
}

// =============================================================
// Saving
// =============================================================

#[test]
fn valid_save_moves_baseline() {
    let mut state = WidgetState::new(WidgetSettings::default());
    state.settings.content.bot_name = "Ava".to_owned();
    assert!(state.save().is_ok());
    assert!(!state.is_dirty());

    state.reset();
    assert_eq!(state.settings.content.bot_name, "Ava");
}

#[test]
fn invalid_save_keeps_errors_and_dirty_flag() {
    let mut state = WidgetState::new(WidgetSettings::default());
    state.settings.content.title = String::new();
    state.settings.appearance.primary_color = "blue".to_owned();

    let errors = state.save().unwrap_err();
    assert!(errors.for_field("title").is_some());
    assert!(errors.for_field("primaryColor").is_some());
    assert_eq!(state.errors, errors);
    assert!(state.is_dirty());
    assert_eq!(state.first_invalid_tab(), Some(WidgetTab::Content));
}

#[test]
fn appearance_error_points_at_appearance_tab() {
    let mut state = WidgetState::new(WidgetSettings::default());
    state.settings.appearance.primary_color = "#12".to_owned();
    assert!(state.save().is_err());
    assert_eq!(state.first_invalid_tab(), Some(WidgetTab::Appearance));

    state.reset();
    assert_eq!(state.first_invalid_tab(), None);
}
