use std::process::Stdio;

use anvil_config::Config;
use tokio::process::{Child, Command};

use crate::{ShutdownError, StartupError};

/// Launches the node binary with the command line derived from `config`.
pub(crate) fn spawn(config: &Config) -> Result<Child, StartupError> {
    let program = config.program();
    let args = config.args();
    log::debug!("Launching {} {}", program.display(), args.join(" "));

    let (stdout, stderr) = if config.show_logs {
        (Stdio::inherit(), Stdio::inherit())
    } else {
        (Stdio::null(), Stdio::null())
    };

    Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(stderr)
        .spawn()
        .map_err(|source| StartupError::Spawn {
            program: program.to_path_buf(),
            source,
        })
}

/// Requests the node to exit without waiting for it. A process that has
/// already been reaped is left alone.
#[cfg(unix)]
pub(crate) fn terminate(child: &mut Child) -> Result<(), ShutdownError> {
    use nix::{
        sys::signal::{Signal, kill},
        unistd::Pid,
    };

    let Some(pid) = child.id() else {
        return Ok(());
    };

    log::debug!("Sending SIGTERM to node process {pid}");
    kill(Pid::from_raw(pid as i32), Signal::SIGTERM).map_err(|errno| ShutdownError::Signal {
        pid,
        source: errno.into(),
    })
}

/// Requests the node to exit without waiting for it. A process that has
/// already been reaped is left alone.
#[cfg(not(unix))]
pub(crate) fn terminate(child: &mut Child) -> Result<(), ShutdownError> {
    let Some(pid) = child.id() else {
        return Ok(());
    };

    log::debug!("Killing node process {pid}");
    child
        .start_kill()
        .map_err(|source| ShutdownError::Signal { pid, source })
}
