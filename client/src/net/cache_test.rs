use super::*;
use futures::executor::block_on;

const NUMBERS: QueryKey = QueryKey("numbers");

#[test]
fn empty_cache_is_stale_and_misses() {
    let cache = QueryCache::new();
    assert!(cache.is_stale(NUMBERS));
    assert_eq!(cache.get::<Vec<u32>>(NUMBERS), None);
}

#[test]
fn set_then_get_returns_fresh_value() {
    let cache = QueryCache::new();
    cache.set(NUMBERS, vec![1_u32, 2, 3]);
    assert!(!cache.is_stale(NUMBERS));
    assert_eq!(cache.get::<Vec<u32>>(NUMBERS), Some(vec![1, 2, 3]));
}

#[test]
fn get_with_wrong_type_misses() {
    let cache = QueryCache::new();
    cache.set(NUMBERS, vec![1_u32]);
    assert_eq!(cache.get::<String>(NUMBERS), None);
}

#[test]
fn invalidate_hides_value_from_get_but_not_peek() {
    let cache = QueryCache::new();
    cache.set(NUMBERS, vec![7_u32]);
    assert!(cache.invalidate(NUMBERS));
    assert!(cache.is_stale(NUMBERS));
    assert_eq!(cache.get::<Vec<u32>>(NUMBERS), None);
    assert_eq!(cache.peek::<Vec<u32>>(NUMBERS), Some(vec![7]));
}

#[test]
fn invalidate_missing_key_reports_false() {
    let cache = QueryCache::new();
    assert!(!cache.invalidate(AI_MODELS));
    assert!(cache.is_stale(AI_MODELS));
}

#[test]
fn clones_share_entries() {
    let cache = QueryCache::new();
    let other = cache.clone();
    other.set(FOLLOW_UPS, 5_u8);
    assert_eq!(cache.get::<u8>(FOLLOW_UPS), Some(5));
}

#[test]
fn query_fetches_once_while_fresh() {
    let cache = QueryCache::new();
    let mut calls = 0;
    let first: Result<u32, ()> = block_on(cache.query(NUMBERS, || {
        calls += 1;
        async { Ok(10) }
    }));
    assert_eq!(first, Ok(10));

    let second: Result<u32, ()> = block_on(cache.query(NUMBERS, || async { Ok(99) }));
    assert_eq!(second, Ok(10));
    assert_eq!(calls, 1);
}

#[test]
fn query_refetches_after_invalidate() {
    let cache = QueryCache::new();
    cache.set(NUMBERS, 1_u32);
    cache.invalidate(NUMBERS);
    let value: Result<u32, ()> = block_on(cache.query(NUMBERS, || async { Ok(2) }));
    assert_eq!(value, Ok(2));
    assert_eq!(cache.get::<u32>(NUMBERS), Some(2));
}

#[test]
fn query_error_leaves_stale_entry_in_place() {
    let cache = QueryCache::new();
    cache.set(NUMBERS, 1_u32);
    cache.invalidate(NUMBERS);
    let value: Result<u32, &str> = block_on(cache.query(NUMBERS, || async { Err("offline") }));
    assert_eq!(value, Err("offline"));
    assert!(cache.is_stale(NUMBERS));
    assert_eq!(cache.peek::<u32>(NUMBERS), Some(1));
}
