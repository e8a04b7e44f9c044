use super::*;
use crate::foundation::error::PlacementError;

#[test]
fn loads_each_key_once() {
    let cache: LoadOnce<&str, u32> = LoadOnce::new();
    assert_eq!(cache.get_or_load(&"a", || Ok(Some(1))).as_deref(), Some(&1));
    assert_eq!(cache.get_or_load(&"a", || Ok(Some(2))).as_deref(), Some(&1));
    assert_eq!(cache.get_or_load(&"b", || Ok(Some(3))).as_deref(), Some(&3));
    assert_eq!(cache.load_count(), 2);
}

#[test]
fn absent_and_failed_loads_are_cached_as_none() {
    let cache: LoadOnce<u8, String> = LoadOnce::new();
    assert!(cache.get_or_load(&1, || Ok(None)).is_none());
    assert!(cache
        .get_or_load(&1, || Ok(Some("late".to_owned())))
        .is_none());

    assert!(cache
        .get_or_load(&2, || Err(PlacementError::serde("bad json")))
        .is_none());
    assert!(cache.get_or_load(&2, || Ok(Some("x".to_owned()))).is_none());
    assert_eq!(cache.load_count(), 2);
}

#[test]
fn concurrent_first_access_runs_one_loader() {
    let cache: LoadOnce<u8, u64> = LoadOnce::new();
    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                let v = cache.get_or_load(&7, || {
                    std::thread::sleep(std::time::Duration::from_millis(20));
                    Ok(Some(42))
                });
                assert_eq!(v.as_deref(), Some(&42));
            });
        }
    });
    assert_eq!(cache.load_count(), 1);
}
