use std::fs;
use std::time::Duration;

use gem5_launcher::BootCheck;

fn check() -> BootCheck {
    BootCheck::new(Duration::from_secs(600), Duration::from_secs(5))
}

#[test]
fn test_polls_outside_window_never_touch_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let check = check();

    // No simout exists; a scan would report a suspected failure. Outside
    // the [600, 625) window the verdict must be "no failure" regardless.
    assert!(!check.suspected_failure(Duration::from_secs(599), dir.path()));
    assert!(!check.suspected_failure(Duration::from_secs(626), dir.path()));
    assert!(!check.suspected_failure(Duration::from_secs(0), dir.path()));
}

#[test]
fn test_window_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    let check = check();

    // Inside [600, 625): the missing log reads as a failed boot.
    assert!(check.suspected_failure(Duration::from_secs(600), dir.path()));
    assert!(check.suspected_failure(Duration::from_secs(624), dir.path()));
    // 625 is the half-open upper bound.
    assert!(!check.suspected_failure(Duration::from_secs(625), dir.path()));
}

#[test]
fn test_marker_present_means_no_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("simout"),
        "Global frequency set at 1000000000000 ticks per second\n\
         Done booting Linux\n\
         Loading new script...\n",
    )
    .unwrap();

    assert!(!check().suspected_failure(Duration::from_secs(600), dir.path()));
}

#[test]
fn test_marker_absent_means_suspected_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("simout"),
        "Global frequency set at 1000000000000 ticks per second\n\
         info: Entering event queue @ 0.\n",
    )
    .unwrap();

    assert!(check().suspected_failure(Duration::from_secs(610), dir.path()));
}
