use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_and_expanded() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
}

// =============================================================
// NavItem
// =============================================================

#[test]
fn nav_paths_are_distinct() {
    let mut paths: Vec<&str> = NavItem::ALL.iter().map(|n| n.path()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), NavItem::ALL.len());
}

#[test]
fn from_path_matches_sections_and_children() {
    assert_eq!(NavItem::from_path("/"), NavItem::Overview);
    assert_eq!(NavItem::from_path("/models"), NavItem::Models);
    assert_eq!(NavItem::from_path("/models/"), NavItem::Models);
    assert_eq!(NavItem::from_path("/follow-ups/abc"), NavItem::FollowUps);
    assert_eq!(NavItem::from_path("/widget"), NavItem::Widget);
}

#[test]
fn from_path_unknown_falls_back_to_overview() {
    assert_eq!(NavItem::from_path("/modelsx"), NavItem::Overview);
    assert_eq!(NavItem::from_path("/nope"), NavItem::Overview);
}
