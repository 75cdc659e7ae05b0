//! Stand-ins for the node binary

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

/// Writes an executable shell script named `name` to `dir` that ignores its
/// arguments and runs `body`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("failed to write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("failed to make script executable");
    path
}

/// A stand-in node that keeps running until it is signalled, without ever
/// serving requests.
pub fn long_running_node(dir: &Path) -> PathBuf {
    write_script(dir, "long-running-node", "exec sleep 60")
}

/// A stand-in node that exits immediately with `code`.
pub fn exiting_node(dir: &Path, code: i32) -> PathBuf {
    write_script(dir, "exiting-node", &format!("exit {code}"))
}

/// Like [`long_running_node`], but first writes its process id to `pid_file`.
pub fn pid_recording_node(dir: &Path, pid_file: &Path) -> PathBuf {
    write_script(
        dir,
        "pid-recording-node",
        &format!("echo $$ > '{}'\nexec sleep 60", pid_file.display()),
    )
}
