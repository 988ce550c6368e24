//! Session view-model: one submission in, one screen plus narration out.

use std::sync::Arc;

use pokevoz_core::Query;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::display::{DisplayModel, Screen, SPRITE_UNAVAILABLE};
use crate::error::{ClientError, EMPTY_INPUT};
use crate::narration::NarrationState;
use crate::player::{NarrationEvent, Narrator, Speaker};
use crate::relay::RelayClient;

pub struct Session {
    relay: RelayClient,
    narrator: Narrator,
    screen: watch::Sender<Screen>,
}

impl Session {
    pub fn new(
        relay: RelayClient,
        speaker: Arc<dyn Speaker>,
    ) -> (Self, mpsc::UnboundedReceiver<NarrationEvent>) {
        let (narrator, events) = Narrator::new(speaker);
        let (screen, _) = watch::channel(Screen::Empty);
        let session = Self {
            relay,
            narrator,
            screen,
        };
        (session, events)
    }

    /// Follow screen changes.
    pub fn subscribe(&self) -> watch::Receiver<Screen> {
        self.screen.subscribe()
    }

    pub fn screen(&self) -> Screen {
        self.screen.borrow().clone()
    }

    /// The play/pause control is shown only for a result with text to read.
    pub fn controls_visible(&self) -> bool {
        matches!(&*self.screen.borrow(), Screen::Ready(model) if !model.paragraphs.is_empty())
    }

    pub fn narration_state(&self) -> NarrationState {
        self.narrator.state()
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    /// Look up one species and render the result.
    pub async fn submit(&mut self, input: &str) -> Screen {
        self.narrator.load(Vec::new());
        self.screen.send_replace(Screen::Empty);

        let query = match Query::parse(input) {
            Ok(query) => query,
            Err(_) => return self.show(Screen::Error(EMPTY_INPUT.into())),
        };

        self.show(Screen::Loading {
            name: query.name().to_string(),
        });

        let screen = match self.fetch(&query).await {
            Ok(model) => {
                self.narrator.load(model.spoken_paragraphs());
                Screen::Ready(model)
            }
            Err(e) => {
                warn!("Lookup of {} failed: {}", query, e);
                Screen::Error(e.user_message())
            }
        };
        self.show(screen)
    }

    /// Play/pause control.
    pub fn toggle_narration(&mut self) {
        if self.controls_visible() {
            self.narrator.toggle();
        }
    }

    pub fn cancel_narration(&mut self) {
        self.narrator.cancel();
    }

    /// Wait for the current narration run to end.
    pub async fn wait_narration(&mut self) {
        self.narrator.wait().await;
    }

    async fn fetch(&self, query: &Query) -> Result<DisplayModel, ClientError> {
        let reply = self.relay.describe(query).await?;
        info!("Received description of {}", query);

        let mut notices = Vec::new();
        let mut sprite = None;
        if reply.sprite.is_none() {
            match self.relay.species_sprite(query).await {
                Ok(Some(url)) => sprite = Some(url),
                Ok(None) => notices.push(SPRITE_UNAVAILABLE.to_string()),
                Err(e) => {
                    warn!("Sprite lookup for {} failed: {}", query, e);
                    notices.push(SPRITE_UNAVAILABLE.to_string());
                }
            }
        }

        Ok(DisplayModel::build(query, &reply, sprite, notices))
    }

    fn show(&self, screen: Screen) -> Screen {
        self.screen.send_replace(screen.clone());
        screen
    }
}
