//! External lookup commands.
//!
//! Both the resolver and the probe delegate to an external program. They reach
//! it through the [`ExternalCommand`] trait so tests can substitute canned
//! output without spawning processes or touching the network.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error_handling::CommandError;
use crate::utils::sanitize::sanitize_and_truncate;

/// Capability to run an external lookup and collect its standard output.
#[async_trait]
pub trait ExternalCommand: Send + Sync {
    /// Runs the command with `args` appended to its configured arguments.
    ///
    /// Returns standard output (lossily decoded as UTF-8) on a zero exit status.
    async fn run(&self, args: &[String], timeout: Duration) -> Result<String, CommandError>;

    /// Program name used in log messages.
    fn program(&self) -> &str;
}

/// An [`ExternalCommand`] backed by a real process.
#[derive(Debug, Clone)]
pub struct SystemCommand {
    program: String,
    base_args: Vec<String>,
}

impl SystemCommand {
    /// Creates a command running `program` with `base_args` before any per-call
    /// arguments.
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
        }
    }
}

#[async_trait]
impl ExternalCommand for SystemCommand {
    async fn run(&self, args: &[String], timeout: Duration) -> Result<String, CommandError> {
        log::trace!("Running {} {:?} {:?}", self.program, self.base_args, args);

        let child = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the future on timeout must not leave the process running
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(timeout, child).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(CommandError::Spawn {
                    program: self.program.clone(),
                    source,
                })
            }
            Err(_) => {
                return Err(CommandError::Timeout {
                    program: self.program.clone(),
                    timeout,
                })
            }
        };

        if !output.status.success() {
            return Err(CommandError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: sanitize_and_truncate(&String::from_utf8_lossy(&output.stderr)),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn program(&self) -> &str {
        &self.program
    }
}
