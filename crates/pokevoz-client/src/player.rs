//! Narration player: speaks paragraphs one utterance at a time.
//!
//! A spawned consumer walks the paragraph sequence, awaiting each
//! utterance before asking the [`Narration`] machine for the next one. It
//! checks a shared [`CancelFlag`] between steps, and the speaker watches the
//! same flag to cut the utterance in flight short.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::narration::{Command, Narration, NarrationState};

/// Language every utterance is spoken in.
pub const NARRATION_LANG: &str = "es-ES";

/// One paragraph handed to a speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: NARRATION_LANG.into(),
        }
    }
}

/// A text-to-speech backend. At most one utterance is in flight.
#[async_trait]
pub trait Speaker: Send + Sync {
    /// Speak and resolve when the utterance ends, or as soon as `cancel`
    /// fires (including when it already has).
    async fn speak(&self, utterance: &Utterance, cancel: &CancelFlag) -> Result<(), ClientError>;

    fn pause(&self) {}

    fn resume(&self) {}
}

/// Cancellation shared between a narrator and one playback run. Once set it
/// stays set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<CancelState>);

#[derive(Debug, Default)]
struct CancelState {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.cancelled.store(true, Ordering::SeqCst);
        self.0.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once the flag is set; immediately if it already is.
    pub async fn cancelled(&self) {
        let notified = self.0.notify.notified();
        tokio::pin!(notified);
        // Register before checking, so a cancel between the two still wakes us.
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// View updates emitted during playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationEvent {
    StateChanged(NarrationState),
    /// Highlight this paragraph and bring it into view.
    Highlight(usize),
    ClearHighlight,
    ScrollToTop,
    /// The speaker failed; playback stopped.
    Failed(String),
}

/// Owns the narration machine and the playback task.
pub struct Narrator {
    speaker: Arc<dyn Speaker>,
    machine: Arc<Mutex<Narration>>,
    paragraphs: Arc<Vec<String>>,
    cancel: CancelFlag,
    resume: Arc<Notify>,
    events: mpsc::UnboundedSender<NarrationEvent>,
    task: Option<JoinHandle<()>>,
}

impl Narrator {
    pub fn new(speaker: Arc<dyn Speaker>) -> (Self, mpsc::UnboundedReceiver<NarrationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let narrator = Self {
            speaker,
            machine: Arc::new(Mutex::new(Narration::default())),
            paragraphs: Arc::new(Vec::new()),
            cancel: CancelFlag::new(),
            resume: Arc::new(Notify::new()),
            events: tx,
            task: None,
        };
        (narrator, rx)
    }

    pub fn state(&self) -> NarrationState {
        self.machine.lock().state()
    }

    pub fn cursor(&self) -> usize {
        self.machine.lock().cursor()
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Replace the paragraph sequence, stopping any playback.
    pub fn load(&mut self, paragraphs: Vec<String>) {
        self.cancel();
        self.machine.lock().load(paragraphs.len());
        self.paragraphs = Arc::new(paragraphs);
    }

    /// The single play/pause control.
    pub fn toggle(&mut self) {
        let command = self.machine.lock().toggle();
        match command {
            Command::Speak(_) => self.start(),
            Command::Pause => self.speaker.pause(),
            Command::Resume => {
                self.speaker.resume();
                self.resume.notify_one();
            }
            Command::Finish | Command::None => return,
        }
        self.emit(NarrationEvent::StateChanged(self.state()));
    }

    /// Stop unconditionally.
    pub fn cancel(&mut self) {
        let was_active = self.state() != NarrationState::Idle;
        self.cancel.cancel();
        self.resume.notify_one();
        self.machine.lock().cancel();
        if was_active {
            self.emit(NarrationEvent::ClearHighlight);
            self.emit(NarrationEvent::StateChanged(NarrationState::Idle));
        }
    }

    /// Wait for the current playback run to end.
    pub async fn wait(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Narration task ended abnormally: {}", e);
            }
        }
    }

    fn start(&mut self) {
        // Fresh flag per run; an older run keeps its cancelled one.
        self.cancel = CancelFlag::new();
        self.resume = Arc::new(Notify::new());

        let playback = Playback {
            speaker: self.speaker.clone(),
            machine: self.machine.clone(),
            paragraphs: self.paragraphs.clone(),
            cancel: self.cancel.clone(),
            resume: self.resume.clone(),
            events: self.events.clone(),
        };
        self.task = Some(tokio::spawn(playback.run()));
    }

    fn emit(&self, event: NarrationEvent) {
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }
}

impl Drop for Narrator {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct Playback {
    speaker: Arc<dyn Speaker>,
    machine: Arc<Mutex<Narration>>,
    paragraphs: Arc<Vec<String>>,
    cancel: CancelFlag,
    resume: Arc<Notify>,
    events: mpsc::UnboundedSender<NarrationEvent>,
}

impl Playback {
    async fn run(self) {
        loop {
            loop {
                let paused = self.machine.lock().state() == NarrationState::Paused;
                if !paused || self.cancel.is_cancelled() {
                    break;
                }
                self.resume.notified().await;
            }
            if self.cancel.is_cancelled() {
                return;
            }

            let index = self.machine.lock().cursor();
            let Some(text) = self.paragraphs.get(index) else {
                return;
            };

            let _ = self.events.send(NarrationEvent::Highlight(index));
            debug!("Speaking paragraph {}/{}", index + 1, self.paragraphs.len());

            let utterance = Utterance::new(text.as_str());
            if let Err(e) = self.speaker.speak(&utterance, &self.cancel).await {
                if !self.cancel.is_cancelled() {
                    warn!("Narration stopped: {}", e);
                    self.machine.lock().cancel();
                    let _ = self.events.send(NarrationEvent::Failed(e.to_string()));
                    let _ = self.events.send(NarrationEvent::ClearHighlight);
                    let _ = self
                        .events
                        .send(NarrationEvent::StateChanged(NarrationState::Idle));
                }
                return;
            }

            if self.cancel.is_cancelled() {
                return;
            }

            let step = self.machine.lock().utterance_ended();
            match step {
                Command::Speak(_) => continue,
                Command::Finish => {
                    let _ = self.events.send(NarrationEvent::ClearHighlight);
                    let _ = self.events.send(NarrationEvent::ScrollToTop);
                    let _ = self
                        .events
                        .send(NarrationEvent::StateChanged(NarrationState::Idle));
                    return;
                }
                _ => return,
            }
        }
    }
}
