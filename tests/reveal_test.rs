//! Reveal observer lifetime

use std::time::{Duration, Instant};

use portal::tui::dashboard::reveal::{FRESH_WINDOW, RevealObserver, live_observers};
use serial_test::serial;

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|k| k.to_string()).collect()
}

#[test]
#[serial]
fn test_observer_released_on_drop() {
    let before = live_observers();
    let observer = RevealObserver::acquire();
    let handle = observer.handle();
    assert_eq!(live_observers(), before + 1);
    assert!(handle.is_connected());

    drop(observer);
    assert_eq!(live_observers(), before);
    assert!(!handle.is_connected());

    // A stale handle is inert
    handle.observe(keys(&["company:c1"]));
    assert_eq!(handle.reveal_visible(&keys(&["company:c1"])), 0);
}

#[test]
#[serial]
fn test_re_registration_follows_data_changes() {
    let observer = RevealObserver::acquire();
    let handle = observer.handle();
    let now = Instant::now();

    handle.observe(keys(&["company:c1", "company:c2"]));
    assert_eq!(handle.reveal_visible_at(&keys(&["company:c1"]), now), 1);

    // c1 survives the new data, c2 is gone and c3 arrives
    handle.observe(keys(&["company:c1", "company:c3"]));
    assert!(handle.is_revealed("company:c1"));
    assert!(!handle.is_revealed("company:c2"));
    assert_eq!(
        handle.reveal_visible_at(&keys(&["company:c1", "company:c3"]), now),
        1
    );

    let later = now + FRESH_WINDOW + Duration::from_millis(1);
    assert!(handle.has_fresh_at(now));
    assert!(!handle.has_fresh_at(later));
}
