//! Text-to-speech through an external program (espeak-ng by default).

use std::process::Stdio;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::process::Command;
use tracing::debug;

use crate::error::ClientError;
use crate::player::{CancelFlag, Speaker, Utterance};

/// Runs one TTS process per utterance, with the text as its last argument.
///
/// On unix, pause and resume stop and continue the running process. Elsewhere
/// a pause takes effect at the next paragraph boundary.
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
    /// Pid of the process speaking right now.
    current: Mutex<Option<u32>>,
}

impl CommandSpeaker {
    pub fn new(command: &[String]) -> Result<Self, ClientError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| ClientError::Config("empty TTS command".into()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            current: Mutex::new(None),
        })
    }

    #[cfg(unix)]
    fn signal(&self, signal: nix::sys::signal::Signal) {
        use nix::sys::signal::kill;
        use nix::unistd::Pid;

        let Some(pid) = *self.current.lock() else {
            debug!("No TTS process running; {:?} applies at the paragraph boundary", signal);
            return;
        };
        let Ok(raw) = i32::try_from(pid) else {
            return;
        };
        if let Err(e) = kill(Pid::from_raw(raw), signal) {
            tracing::warn!("Failed to send {:?} to TTS process {}: {}", signal, pid, e);
        }
    }
}

#[async_trait]
impl Speaker for CommandSpeaker {
    async fn speak(&self, utterance: &Utterance, cancel: &CancelFlag) -> Result<(), ClientError> {
        if cancel.is_cancelled() {
            return Ok(());
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(&utterance.text)
            .env("LANG", utterance.lang.replace('-', "_"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ClientError::Speech(format!("{}: {}", self.program, e)))?;
        *self.current.lock() = child.id();

        let outcome = tokio::select! {
            status = child.wait() => match status {
                Ok(status) if status.success() => Ok(()),
                Ok(status) => Err(ClientError::Speech(format!(
                    "{} exited with {}",
                    self.program, status
                ))),
                Err(e) => Err(ClientError::Speech(e.to_string())),
            },
            _ = cancel.cancelled() => {
                let _ = child.kill().await;
                Ok(())
            }
        };

        self.current.lock().take();
        outcome
    }

    #[cfg(unix)]
    fn pause(&self) {
        self.signal(nix::sys::signal::Signal::SIGSTOP);
    }

    #[cfg(unix)]
    fn resume(&self) {
        self.signal(nix::sys::signal::Signal::SIGCONT);
    }

    #[cfg(not(unix))]
    fn pause(&self) {
        debug!("TTS pause requested; holding after current paragraph");
    }
}
