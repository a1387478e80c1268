use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

const CLIPBOARD_PROGRAMS: [(&str, &[&str]); 3] = [
    ("xclip", &["-selection", "clipboard"]),
    ("wl-copy", &[]),
    ("pbcopy", &[]),
];

/// Copy `text` to the clipboard through the first clipboard program that succeeds.
pub fn copy_to_clipboard(text: &str) -> bool {
    copy_with(&CLIPBOARD_PROGRAMS, text).is_some()
}

fn copy_with<'a>(candidates: &[(&'a str, &[&str])], text: &str) -> Option<&'a str> {
    for &(program, args) in candidates {
        match pipe_to(program, args, text) {
            Ok(()) => return Some(program),
            Err(e) => debug!(program, error = %e, "clipboard program failed"),
        }
    }
    warn!("no clipboard program available");
    None
}

/// Run `program`, feed `text` on stdin and require a zero exit status.
fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Err(io::Error::other("stdin not captured")),
    };
    // stdin is dropped above so the program sees EOF before we wait
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{program} exited with {status}")))
    }
}

/// Hand `url` to the system opener.
pub fn open_in_browser(url: &str) -> bool {
    let opener = if cfg!(target_os = "macos") { "open" } else { "xdg-open" };
    let mut command = Command::new(opener);
    command.arg(url).stdout(Stdio::null()).stderr(Stdio::null());
    match spawn_reaped(command) {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, opener, "could not launch opener");
            false
        }
    }
}

/// Spawn `command` and wait for it on a background thread so it never lingers as a zombie.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = command.spawn()?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                warn!(%status, "opener exited unsuccessfully");
            }
            Some(status)
        }
        Err(e) => {
            warn!(error = %e, "could not wait for opener");
            None
        }
    }))
}
