use std::io::Cursor;

use rodio::{Decoder, OutputStream, Sink};

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("could not download the clip: {0}")]
    Fetch(reqwest::Error),
    #[error("the clip request returned status {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("no usable audio output: {0}")]
    Output(#[from] rodio::StreamError),
    #[error("could not open the output sink: {0}")]
    Sink(#[from] rodio::PlayError),
    #[error("could not decode the clip: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("the playback task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Downloads and plays pronunciation clips on the default output device.
#[derive(Clone)]
pub struct AudioPlayer {
    client: reqwest::Client,
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Plays the clip at `url` to completion. Decoding and output run on a
    /// blocking task since the audio stream is not `Send`.
    pub async fn play(&self, url: &str) -> Result<(), PlaybackError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PlaybackError::Fetch)?;
        if !response.status().is_success() {
            return Err(PlaybackError::BadStatus(response.status()));
        }
        let bytes = response.bytes().await.map_err(PlaybackError::Fetch)?;
        tokio::task::spawn_blocking(move || -> Result<(), PlaybackError> {
            let (_stream, handle) = OutputStream::try_default()?;
            let sink = Sink::try_new(&handle)?;
            sink.append(Decoder::new(Cursor::new(bytes))?);
            sink.sleep_until_end();
            Ok(())
        })
        .await?
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}
