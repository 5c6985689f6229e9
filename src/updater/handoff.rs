//! Child-process construction for the update handoff.
//!
//! The spawned updater program receives exactly four positional
//! arguments, in order:
//!
//! 1. the download URL of the new application artifact
//! 2. the absolute path of the old (currently running) artifact
//! 3. the absolute path to write the new artifact to
//! 4. a restart flag: the literal `"true"`, or the empty string for
//!    "do not restart" (never `"false"`; the updater's argument parsing
//!    is an external contract preserved verbatim)
//!
//! A `.jar` artifact is run through the Java launcher; anything else is
//! executed directly. Standard streams are detached since the child is
//! expected to outlive the parent process.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::utils::platform;

/// Render the restart flag the way the updater program expects it.
pub(crate) fn restart_flag(restart: bool) -> &'static str {
    if restart { "true" } else { "" }
}

/// Build the updater invocation for one handoff.
///
/// The command is fully constructed but not spawned; the caller owns the
/// spawn so it can map failures and decide what to report.
pub(crate) fn handoff_command(
    updater_artifact: &Path,
    download_url: &str,
    old_artifact: &Path,
    new_artifact: &Path,
    restart: bool,
) -> Command {
    let mut command = if platform::is_jar(updater_artifact) {
        let mut command = Command::new(platform::java_command());
        command.arg("-jar").arg(updater_artifact);
        command
    } else {
        Command::new(updater_artifact)
    };

    command
        .arg(download_url)
        .arg(old_artifact)
        .arg(new_artifact)
        .arg(restart_flag(restart))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command
}
