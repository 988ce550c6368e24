//! Pokevoz client — turns one submitted name into a rendered description and
//! a narratable paragraph sequence.
//!
//! The pieces are usable on their own: [`segment`] and [`tags`] are pure text
//! functions, [`narration`] is the playback state machine, [`player`] drives a
//! [`player::Speaker`] through it, and [`session::Session`] ties them to the
//! relay.

pub mod config;
pub mod display;
pub mod error;
pub mod narration;
pub mod player;
pub mod relay;
pub mod segment;
pub mod session;
pub mod speaker;
pub mod tags;

pub use config::ClientConfig;
pub use display::{DisplayModel, Screen};
pub use error::ClientError;
pub use narration::{Command, Narration, NarrationState};
pub use player::{CancelFlag, NarrationEvent, Narrator, Speaker, Utterance};
pub use relay::RelayClient;
pub use segment::{segment, Narrative, Paragraphs};
pub use session::Session;
pub use speaker::CommandSpeaker;
pub use tags::{highlight, TaggedParagraph};
