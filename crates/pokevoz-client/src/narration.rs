//! Narration state machine: `Idle → Speaking ⇄ Paused → Idle`.
//!
//! Pure bookkeeping. The machine decides what should happen next and returns
//! it as a [`Command`]; [`crate::player::Narrator`] carries the commands out
//! against a speaker.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationState {
    #[default]
    Idle,
    Speaking,
    Paused,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Speak the paragraph at this index.
    Speak(usize),
    Pause,
    Resume,
    /// Sequence exhausted: clear highlighting and scroll to the top.
    Finish,
    None,
}

#[derive(Debug, Clone, Default)]
pub struct Narration {
    state: NarrationState,
    cursor: usize,
    len: usize,
}

impl Narration {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Default::default()
        }
    }

    pub fn state(&self) -> NarrationState {
        self.state
    }

    /// Index of the paragraph being (or about to be) spoken.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replace the paragraph sequence; any playback is dropped.
    pub fn load(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// The single play/pause control.
    pub fn toggle(&mut self) -> Command {
        match self.state {
            NarrationState::Speaking => {
                self.state = NarrationState::Paused;
                Command::Pause
            }
            NarrationState::Paused => {
                self.state = NarrationState::Speaking;
                Command::Resume
            }
            NarrationState::Idle if self.len == 0 => Command::None,
            NarrationState::Idle => {
                self.cursor = 0;
                self.state = NarrationState::Speaking;
                Command::Speak(0)
            }
        }
    }

    /// The current utterance finished.
    pub fn utterance_ended(&mut self) -> Command {
        if self.state == NarrationState::Idle {
            return Command::None;
        }
        self.cursor += 1;
        if self.cursor >= self.len {
            self.state = NarrationState::Idle;
            self.cursor = 0;
            Command::Finish
        } else {
            Command::Speak(self.cursor)
        }
    }

    /// Stop unconditionally, from any state.
    pub fn cancel(&mut self) {
        self.state = NarrationState::Idle;
        self.cursor = 0;
    }
}
