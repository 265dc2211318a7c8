//! Test helpers shared by unit tests.
//!
//! `Config::load` looks for `sprint-select.toml` in the working directory,
//! which is process-wide state, so tests that depend on it run one at a
//! time inside a scratch directory.

#[cfg(test)]
use std::path::PathBuf;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use tempfile::TempDir;

/// Serializes tests that change the current working directory.
#[cfg(test)]
pub static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Puts the original directory back even if the test body panics.
#[cfg(test)]
struct RestoreCwd(PathBuf);

#[cfg(test)]
impl Drop for RestoreCwd {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

/// Run `f` with a fresh temporary directory as the working directory.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created or entered.
#[cfg(test)]
pub fn with_temp_cwd<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp = TempDir::new().expect("failed to create temp directory");
    let _restore = RestoreCwd(std::env::current_dir().expect("failed to get current directory"));
    std::env::set_current_dir(temp.path()).expect("failed to change to temp directory");
    f()
}
