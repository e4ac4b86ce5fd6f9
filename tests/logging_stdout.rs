use std::{thread::sleep, time::Duration};

use tempfile::tempdir;

#[test]
fn second_init_is_a_no_op() {
    let dir = tempdir().unwrap();
    let log_dir = dir.path().join("late");
    let path = log_dir.join("log.txt");

    log_overlay::logging::init(false, None);
    assert!(tracing::dispatcher::has_been_set());

    // The stdout subscriber is already installed; asking for a file later
    // must neither replace it nor create the file.
    log_overlay::logging::init(true, Some(path.clone()));
    tracing::info!("test");

    sleep(Duration::from_millis(100));

    assert!(!log_dir.exists(), "second init touched the file system");
    assert!(!path.exists(), "log file should not be created");
}
