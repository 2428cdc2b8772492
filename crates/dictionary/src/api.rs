// https://dictionaryapi.dev/ - free, no key, one array of entries per word

use serde::Deserialize;

use crate::{DictionaryError, PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};

const DICTIONARY_API_URL: &'static str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
struct ApiEntry {
    word: String,
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    origin: Option<String>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    text: Option<String>,
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

// shape of the body the api sends along with a 404
#[derive(Debug, Deserialize)]
struct ApiFailure {
    message: String,
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    word: &str,
) -> Result<Word, DictionaryError> {
    let response = client
        .get(format!("{DICTIONARY_API_URL}/{word}"))
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    if !response.status().is_success() {
        let message = response
            .json::<ApiFailure>()
            .await
            .map(|failure| failure.message)
            .unwrap_or_else(|_| format!("no definition found for '{word}'"));
        return Err(DictionaryError::NotFound(message));
    }
    let entries = response
        .json::<Vec<ApiEntry>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    first_entry(entries, word)
}

fn first_entry(entries: Vec<ApiEntry>, word: &str) -> Result<Word, DictionaryError> {
    entries.into_iter().next().map(Word::from).ok_or_else(|| {
        DictionaryError::NotFound(format!("the dictionary returned no entries for '{word}'"))
    })
}

// the api encodes a missing audio clip as an empty string
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl From<ApiEntry> for Word {
    fn from(entry: ApiEntry) -> Self {
        Self {
            word: entry.word,
            phonetic: non_empty(entry.phonetic),
            phonetics: entry.phonetics.into_iter().map(Phonetic::from).collect(),
            origin: non_empty(entry.origin),
            meanings: entry.meanings.into_iter().map(WordMeaning::from).collect(),
        }
    }
}

impl From<ApiPhonetic> for Phonetic {
    fn from(phonetic: ApiPhonetic) -> Self {
        Self {
            text: non_empty(phonetic.text),
            audio: non_empty(phonetic.audio),
        }
    }
}

impl From<ApiMeaning> for WordMeaning {
    fn from(meaning: ApiMeaning) -> Self {
        Self {
            part_of_speech: PartOfSpeech::parse(&meaning.part_of_speech),
            definitions: meaning
                .definitions
                .into_iter()
                .map(WordDefinition::from)
                .collect(),
            synonyms: meaning.synonyms,
            antonyms: meaning.antonyms,
        }
    }
}

impl From<ApiDefinition> for WordDefinition {
    fn from(definition: ApiDefinition) -> Self {
        Self {
            definition: definition.definition,
            example: definition.example,
            synonyms: definition.synonyms,
            antonyms: definition.antonyms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_RESPONSE: &str = r#"[
        {
            "word": "hello",
            "phonetics": [{"text": "/həˈloʊ/", "audio": "https://x/hello.mp3"}],
            "meanings": [
                {
                    "partOfSpeech": "exclamation",
                    "definitions": [{"definition": "used as a greeting"}]
                }
            ]
        }
    ]"#;

    fn parse(body: &str) -> Vec<ApiEntry> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn maps_the_first_entry_of_the_response() {
        let word = first_entry(parse(HELLO_RESPONSE), "hello").unwrap();
        assert_eq!(word.word, "hello");
        assert_eq!(word.phonetic_text(), Some("/həˈloʊ/"));
        assert_eq!(word.audio_url(), Some("https://x/hello.mp3"));
        assert_eq!(word.meanings.len(), 1);
        let meaning = &word.meanings[0];
        assert_eq!(
            meaning.part_of_speech,
            PartOfSpeech::Other("exclamation".to_owned())
        );
        assert_eq!(meaning.definitions.len(), 1);
        assert_eq!(meaning.definitions[0].definition, "used as a greeting");
        assert_eq!(meaning.definitions[0].example, None);
    }

    #[test]
    fn only_the_first_entry_is_kept() {
        let body = r#"[
            {"word": "lead", "meanings": []},
            {"word": "lead", "meanings": [{"partOfSpeech": "verb", "definitions": []}]}
        ]"#;
        let word = first_entry(parse(body), "lead").unwrap();
        assert!(word.meanings.is_empty());
    }

    #[test]
    fn an_empty_response_array_is_not_found() {
        let result = first_entry(Vec::new(), "zzzxyq");
        assert!(matches!(result, Err(DictionaryError::NotFound(_))));
    }

    #[test]
    fn empty_audio_strings_are_dropped() {
        let body = r#"[
            {
                "word": "sea",
                "phonetic": "",
                "phonetics": [
                    {"text": "/siː/", "audio": ""},
                    {"audio": "https://x/sea.ogg"}
                ],
                "meanings": []
            }
        ]"#;
        let word = first_entry(parse(body), "sea").unwrap();
        assert_eq!(word.phonetic, None);
        assert_eq!(word.phonetics[0].audio, None);
        assert_eq!(word.audio_url(), Some("https://x/sea.ogg"));
    }

    #[test]
    fn definition_order_is_preserved() {
        let body = r#"[
            {
                "word": "set",
                "meanings": [
                    {
                        "partOfSpeech": "verb",
                        "definitions": [
                            {"definition": "first", "example": "set it down"},
                            {"definition": "second"},
                            {"definition": "third"}
                        ]
                    }
                ]
            }
        ]"#;
        let word = first_entry(parse(body), "set").unwrap();
        let definitions = &word.meanings[0].definitions;
        assert_eq!(definitions[0].definition, "first");
        assert_eq!(definitions[0].example.as_deref(), Some("set it down"));
        assert_eq!(definitions[1].definition, "second");
        assert_eq!(definitions[2].definition, "third");
    }
}
