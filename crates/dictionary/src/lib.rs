mod api;
mod word;

pub use word::{PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("could not reach the dictionary service: {0}")]
    Fetch(reqwest::Error),
    #[error("could not decode the dictionary response: {0}")]
    Deserialize(reqwest::Error),
    #[error("{0}")]
    NotFound(String),
}

#[derive(Clone)]
pub struct Dictionary {
    client: reqwest::Client,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        api::get_definition(&self.client, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
