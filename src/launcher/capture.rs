//! Merged stdout/stderr capture for a single child process

use std::ffi::OsStr;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Raw result of one child run
#[derive(Debug)]
pub struct Captured {
    /// Everything the child wrote to stdout and stderr, in write order
    pub bytes: Vec<u8>,
    pub status: ExitStatus,
}

/// Spawn `program arg`, capture both output streams through one pipe and wait
///
/// The child is always reaped before returning, including when reading the
/// pipe fails.
pub fn run_merged(program: &Path, arg: &OsStr) -> io::Result<Captured> {
    let (mut reader, writer) = io::pipe()?;
    let writer_err = writer.try_clone()?;

    let mut command = Command::new(program);
    command
        .arg(arg)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(writer_err);

    let mut child = command.spawn()?;
    // The command still holds both write ends; the pipe only reaches EOF once
    // they are closed on our side.
    drop(command);

    let mut bytes = Vec::new();
    let read = reader.read_to_end(&mut bytes);
    let status = child.wait()?;
    read?;

    Ok(Captured { bytes, status })
}
