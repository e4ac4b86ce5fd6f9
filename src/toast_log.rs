use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub const TOAST_LOG_FILE: &str = "toast.log";

/// Append a notification to [`TOAST_LOG_FILE`] in the current directory.
pub fn append_toast_log(msg: &str) {
    append_toast_log_to(Path::new(TOAST_LOG_FILE), msg);
}

pub fn append_toast_log_to(path: &Path, msg: &str) {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(mut file) => {
            let _ = writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg);
        }
        Err(e) => tracing::debug!("toast log unavailable at {}: {e}", path.display()),
    }
}
