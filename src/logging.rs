use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialise logging. With `debug` the level defaults to `debug` and can be
/// overridden through `RUST_LOG`; otherwise `info` is forced.
///
/// When `file` is given, log lines are written to it through a non-blocking
/// appender instead of stdout. Calling `init` again is a no-op.
pub fn init(debug: bool, file: Option<PathBuf>) {
    // The first subscriber wins; bail before touching the file system.
    if tracing::dispatcher::has_been_set() {
        return;
    }
    // Without debug logging `RUST_LOG` is ignored so a stray variable in the
    // user's environment does not turn on verbose output.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    match file.and_then(|path| file_writer(&path)) {
        Some((writer, guard)) => {
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .is_ok();
            if installed {
                let _ = FILE_GUARD.set(guard);
            }
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

fn file_writer(
    path: &std::path::Path,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let name = path.file_name()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("failed to create log directory {}: {e}", dir.display());
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, name);
    Some(tracing_appender::non_blocking(appender))
}
