//! Platform helpers for updater artifact naming and runtime resolution.
//!
//! Keeps the two platform-sensitive decisions in one place: what the
//! cached updater artifact is called on disk, and which program runs a
//! managed-runtime (`.jar`) artifact.

use std::path::{Path, PathBuf};

/// The canonical on-disk name for the cached updater artifact.
///
/// `Updater` with the platform's executable suffix appended: `Updater`
/// on Unix, `Updater.exe` on Windows. Used whenever a caller hands
/// [`ensure_updater`](crate::Updater::ensure_updater) a directory instead
/// of a file path.
#[must_use]
pub fn updater_executable_name() -> String {
    format!("Updater{}", std::env::consts::EXE_SUFFIX)
}

/// Whether `path` names a managed-runtime artifact that must be run via
/// the Java launcher rather than executed directly.
#[must_use]
pub fn is_jar(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
}

/// Resolves the Java launcher used to run `.jar` updater artifacts.
///
/// Prefers `$JAVA_HOME/bin/java` when `JAVA_HOME` is set, falling back to
/// `java` on the PATH. The returned path is not checked for existence;
/// a missing runtime surfaces as a spawn failure at launch time.
#[must_use]
pub fn java_command() -> PathBuf {
    match std::env::var_os("JAVA_HOME") {
        Some(home) => {
            let mut path = PathBuf::from(home);
            path.push("bin");
            path.push(format!("java{}", std::env::consts::EXE_SUFFIX));
            path
        }
        None => PathBuf::from("java"),
    }
}
