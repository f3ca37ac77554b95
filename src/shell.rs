// Process runner: hands a command line to the host shell and collects
// everything it produced.

use std::io;
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone)]
pub struct ShellOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// How a finished command should be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Non-zero exit. Stdout is not reported.
    Failed { message: String },
    /// Zero exit. Either stream may be empty.
    Completed { stdout: String, stderr: String },
}

impl ShellOutput {
    pub fn outcome(&self) -> Outcome {
        if !self.status.success() {
            let mut message = format!("Command failed ({})", self.status);
            let stderr = self.stderr.trim_end();
            if !stderr.is_empty() {
                message.push_str(": ");
                message.push_str(stderr);
            }
            return Outcome::Failed { message };
        }
        Outcome::Completed {
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
        }
    }
}

/// Run `cmd` through `sh -c` (`cmd /C` on Windows), unsandboxed and with
/// the inherited environment. Only a spawn failure is an `Err`.
pub fn run_shell(cmd: &str) -> io::Result<ShellOutput> {
    log::debug!("spawning shell for {:?}", cmd);
    let output = shell_command(cmd).output()?;
    Ok(ShellOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(windows)]
fn shell_command(cmd: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", cmd]);
    command
}

#[cfg(not(windows))]
fn shell_command(cmd: &str) -> Command {
    let mut command = Command::new("sh");
    command.args(["-c", cmd]);
    command
}
