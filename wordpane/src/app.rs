use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dictionary::{Dictionary, DictionaryError, Word};
use tokio::sync::mpsc::UnboundedSender;

use crate::audio::AudioPlayer;

pub const NOT_FOUND_MESSAGE: &str = "word not found, try another word";

/// What the screen currently shows. Exactly one view at a time.
#[derive(Debug)]
pub enum Status {
    Idle,
    Loading,
    Error(String),
    Success(Word),
}

#[derive(Debug)]
pub struct LookupOutcome {
    seq: u64,
    result: Result<Word, DictionaryError>,
}

pub struct App {
    pub query: String,
    pub status: Status,
    pub running: bool,
    // sequence number of the newest submitted lookup, outcomes
    // carrying an older one are dropped
    seq: u64,
    dict: Dictionary,
    player: AudioPlayer,
    outcomes: UnboundedSender<LookupOutcome>,
}

impl App {
    pub fn new(outcomes: UnboundedSender<LookupOutcome>) -> Self {
        Self {
            query: String::new(),
            status: Status::Idle,
            running: true,
            seq: 0,
            dict: Dictionary::new(),
            player: AudioPlayer::new(),
            outcomes,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.play_pronunciation();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(character) => self.query.push(character),
            _ => {}
        }
    }

    /// Starts a lookup for the current query. A blank query does nothing.
    pub fn submit(&mut self) {
        let word = self.query.trim();
        if word.is_empty() {
            return;
        }
        self.seq += 1;
        self.status = Status::Loading;
        let seq = self.seq;
        let word = word.to_owned();
        let dict = self.dict.clone();
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let result = dict.get_definition(&word).await;
            let _ = outcomes.send(LookupOutcome { seq, result });
        });
    }

    pub fn handle_outcome(&mut self, outcome: LookupOutcome) {
        if outcome.seq != self.seq {
            tracing::debug!(
                seq = outcome.seq,
                latest = self.seq,
                "dropping stale lookup outcome"
            );
            return;
        }
        match outcome.result {
            Ok(word) => self.status = Status::Success(word),
            Err(error) => {
                tracing::info!(%error, "lookup failed");
                self.status = Status::Error(NOT_FOUND_MESSAGE.to_owned());
            }
        }
    }

    /// Plays the pronunciation of the displayed word, if it has one.
    /// Failures are logged and otherwise swallowed.
    pub fn play_pronunciation(&self) {
        let Status::Success(word) = &self.status else {
            return;
        };
        let Some(url) = word.audio_url() else {
            return;
        };
        let url = url.to_owned();
        let player = self.player.clone();
        tokio::spawn(async move {
            if let Err(error) = player.play(&url).await {
                tracing::warn!(%error, %url, "pronunciation playback failed");
            }
        });
    }
}
