#[derive(Debug, Clone)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    pub meanings: Vec<WordMeaning>,
}

impl Word {
    /// The textual pronunciation to display, preferring the phonetic
    /// entries over the top level field.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find_map(|phonetic| phonetic.text.as_deref())
            .or(self.phonetic.as_deref())
    }

    /// The first pronunciation clip this word carries, if any.
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find_map(|phonetic| phonetic.audio.as_deref())
    }
}


#[derive(Debug, Clone)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}


#[derive(Debug, Clone)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Other(String),
}

impl PartOfSpeech {
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "noun" => Self::Noun,
            "pronoun" => Self::Pronoun,
            "verb" => Self::Verb,
            "adjective" => Self::Adjective,
            "adverb" => Self::Adverb,
            "preposition" => Self::Preposition,
            "conjunction" => Self::Conjunction,
            "interjection" => Self::Interjection,
            _ => Self::Other(tag.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Noun => "noun",
            Self::Pronoun => "pronoun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
            Self::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}
