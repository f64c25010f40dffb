use serde::{Deserialize, Serialize};

/// Whether the caller asked for a movie or a TV series. Declaration order
/// matters: when an utterance mentions both, `Movie` wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Tv,
}

/// Structured search parameters extracted from a single transcript.
///
/// A slot is either present with a non-empty value or entirely absent;
/// `missing` always mirrors which of the four values are `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slots {
    pub year: Option<String>,
    pub genre: Option<String>,
    pub storyline: Option<String>,
    pub content_type: Option<ContentType>,
    pub missing: MissingSlots,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MissingSlots {
    pub year: bool,
    pub genre: bool,
    pub storyline: bool,
    pub content_type: bool,
}

impl Slots {
    pub fn new(
        year: Option<String>,
        genre: Option<String>,
        storyline: Option<String>,
        content_type: Option<ContentType>,
    ) -> Self {
        let missing = MissingSlots {
            year: year.is_none(),
            genre: genre.is_none(),
            storyline: storyline.is_none(),
            content_type: content_type.is_none(),
        };
        Self {
            year,
            genre,
            storyline,
            content_type,
            missing,
        }
    }

    pub fn is_complete(&self) -> bool {
        !(self.missing.year
            || self.missing.genre
            || self.missing.storyline
            || self.missing.content_type)
    }
}
