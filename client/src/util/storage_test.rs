use super::*;

#[test]
fn parse_flag_accepts_only_booleans() {
    assert_eq!(parse_flag("true"), Some(true));
    assert_eq!(parse_flag(" false "), Some(false));
    assert_eq!(parse_flag("yes"), None);
    assert_eq!(parse_flag(""), None);
}

#[test]
fn encode_flag_round_trips_through_parse() {
    assert_eq!(parse_flag(encode_flag(true)), Some(true));
    assert_eq!(parse_flag(encode_flag(false)), Some(false));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_misses_and_save_is_dropped_off_browser() {
    save_flag(DARK_MODE_KEY, true);
    assert_eq!(load_flag(DARK_MODE_KEY), None);
}
