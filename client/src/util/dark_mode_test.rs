#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_off_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn theme_attr_names_both_modes() {
    assert_eq!(theme_attr(true), "dark");
    assert_eq!(theme_attr(false), "light");
}
