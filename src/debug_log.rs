//! Opt-in debug logging.
//!
//! Enable with the `--debug` flag. Logs are written to `~/.menu-viewer/debug.log`
//! and the file is truncated on every start. All functions are no-ops until
//! [`init`] succeeds.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Local};

/// Global flag to enable/disable debug logging.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Global log file handle.
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Initialize logging at the default location.
pub fn init() -> std::io::Result<PathBuf> {
    let log_path = get_log_path();
    init_at(&log_path)?;
    Ok(log_path)
}

/// Initialize logging to a specific file.
pub fn init_at(log_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }
    DEBUG_ENABLED.store(true, Ordering::SeqCst);

    log_raw(&format!(
        "=== menu-viewer debug log started at {} ===\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    Ok(())
}

/// Check if debug logging is enabled.
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

fn get_log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".menu-viewer")
        .join("debug.log")
}

fn log_raw(msg: &str) {
    if !is_enabled() {
        return;
    }
    if let Ok(mut guard) = LOG_FILE.lock()
        && let Some(ref mut file) = *guard
    {
        let _ = file.write_all(msg.as_bytes());
        let _ = file.flush();
    }
}

fn format_line(at: DateTime<Local>, category: &str, msg: &str) -> String {
    format!("[{}] {} {}\n", at.format("%H:%M:%S%.3f"), category, msg)
}

fn log_with_category(category: &str, msg: &str) {
    if !is_enabled() {
        return;
    }
    log_raw(&format_line(Local::now(), category, msg));
}

/// Log where the menu came from and how big it is.
pub fn log_startup(source: &str, entries: usize, categories: usize) {
    log_with_category(
        "START",
        &format!(
            "menu={} entries={} categories={}",
            source, entries, categories
        ),
    );
}

/// Log a selection change.
pub fn log_selection(name: &str, id: &str) {
    log_with_category("SELECT", &format!("{} ({})", name, id));
}

/// Log the rotation being paused or resumed.
pub fn log_rotation_paused(paused: bool, phase: f64) {
    log_with_category(
        "SPIN",
        &format!(
            "{} at {:.1}deg",
            if paused { "PAUSE" } else { "RESUME" },
            phase
        ),
    );
}

/// Log a layout change.
pub fn log_layout(what: &str, visible: bool) {
    log_with_category(
        "LAYOUT",
        &format!("{} {}", what, if visible { "shown" } else { "hidden" }),
    );
}
