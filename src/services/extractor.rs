use regex::Regex;

use crate::models::{ContentType, Slots};

/// TMDb genre names, in match-priority order.
const GENRES: [&str; 19] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Music",
    "Mystery",
    "Romance",
    "Science Fiction",
    "TV Movie",
    "Thriller",
    "War",
    "Western",
];

const MOVIE_KEYWORDS: [&str; 2] = ["movie", "film"];
const TV_KEYWORDS: [&str; 3] = ["tv", "series", "show"];

/// Pulls structured movie-search parameters out of a free-form transcript.
///
/// Extraction is pure pattern matching: a year regex, substring checks
/// against the fixed genre list, a split on the literal word "like" for the
/// storyline, and keyword sets for the content type.
pub struct SlotExtractor {
    year_re: Regex,
}

impl Default for SlotExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotExtractor {
    pub fn new() -> Self {
        Self {
            year_re: Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern is valid"),
        }
    }

    pub fn extract(&self, input: &str) -> Slots {
        let lowered = input.to_lowercase();

        let year = self
            .year_re
            .find(input)
            .map(|m| m.as_str().to_string());

        let genre = GENRES
            .iter()
            .find(|g| lowered.contains(&g.to_lowercase()))
            .map(|g| g.to_lowercase());

        // Everything after the last "like" is treated as the storyline. The
        // match is a plain case-sensitive substring, so "likes" and
        // "unlikely" split too.
        let storyline = input
            .rfind("like")
            .map(|idx| input[idx + "like".len()..].trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let content_type = if MOVIE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            Some(ContentType::Movie)
        } else if TV_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            Some(ContentType::Tv)
        } else {
            None
        };

        Slots::new(year, genre, storyline, content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full_request() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("I want a comedy movie from 1999 like Jumanji");

        assert_eq!(slots.year.as_deref(), Some("1999"));
        assert_eq!(slots.genre.as_deref(), Some("comedy"));
        assert_eq!(slots.content_type, Some(ContentType::Movie));
        assert_eq!(slots.storyline.as_deref(), Some("Jumanji"));
        assert!(slots.is_complete());
    }

    #[test]
    fn test_extract_nothing() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("");

        assert!(slots.year.is_none());
        assert!(slots.genre.is_none());
        assert!(slots.storyline.is_none());
        assert!(slots.content_type.is_none());
        assert!(slots.missing.year);
        assert!(slots.missing.genre);
        assert!(slots.missing.storyline);
        assert!(slots.missing.content_type);
    }

    #[test]
    fn test_year_first_match_wins() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("something from 1987 or maybe 2004");
        assert_eq!(slots.year.as_deref(), Some("1987"));
    }

    #[test]
    fn test_year_requires_word_boundary() {
        let extractor = SlotExtractor::new();
        assert!(extractor.extract("id 119995 please").year.is_none());
        assert_eq!(
            extractor.extract("released in 2010.").year.as_deref(),
            Some("2010")
        );
    }

    #[test]
    fn test_year_ignores_other_centuries() {
        let extractor = SlotExtractor::new();
        assert!(extractor.extract("set in 1850").year.is_none());
    }

    #[test]
    fn test_genre_case_insensitive() {
        let extractor = SlotExtractor::new();
        assert_eq!(
            extractor.extract("a THRILLER please").genre.as_deref(),
            Some("thriller")
        );
    }

    #[test]
    fn test_genre_multiword() {
        let extractor = SlotExtractor::new();
        assert_eq!(
            extractor.extract("some science fiction").genre.as_deref(),
            Some("science fiction")
        );
    }

    #[test]
    fn test_genre_list_order_wins() {
        let extractor = SlotExtractor::new();
        // "Action" precedes "Western" in the genre list regardless of where
        // each appears in the input.
        assert_eq!(
            extractor.extract("a western with lots of action").genre.as_deref(),
            Some("action")
        );
    }

    #[test]
    fn test_genre_absent_when_unknown() {
        let extractor = SlotExtractor::new();
        assert!(extractor.extract("a heartfelt tale").genre.is_none());
    }

    #[test]
    fn test_genre_substring_match_inside_words() {
        // Containment is a plain substring check, so "heartwarming" hits
        // the War genre.
        let extractor = SlotExtractor::new();
        assert_eq!(
            extractor.extract("a heartwarming tale").genre.as_deref(),
            Some("war")
        );
    }

    #[test]
    fn test_storyline_after_last_like() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("something like Alien, or more like Predator");
        assert_eq!(slots.storyline.as_deref(), Some("Predator"));
    }

    #[test]
    fn test_storyline_absent_without_like() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("surprise me");
        assert!(slots.storyline.is_none());
        assert!(slots.year.is_none());
        assert!(slots.genre.is_none());
        assert!(slots.content_type.is_none());
    }

    #[test]
    fn test_storyline_empty_after_like_is_absent() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("anything you like ");
        assert!(slots.storyline.is_none());
        assert!(slots.missing.storyline);
    }

    #[test]
    fn test_content_type_movie_keywords() {
        let extractor = SlotExtractor::new();
        assert_eq!(
            extractor.extract("a good film").content_type,
            Some(ContentType::Movie)
        );
        assert_eq!(
            extractor.extract("a good MOVIE").content_type,
            Some(ContentType::Movie)
        );
    }

    #[test]
    fn test_content_type_tv_keywords() {
        let extractor = SlotExtractor::new();
        assert_eq!(
            extractor.extract("a tv series").content_type,
            Some(ContentType::Tv)
        );
        assert_eq!(
            extractor.extract("a SHOW about chess").content_type,
            Some(ContentType::Tv)
        );
    }

    #[test]
    fn test_content_type_movie_wins_over_tv() {
        let extractor = SlotExtractor::new();
        assert_eq!(
            extractor.extract("a tv movie").content_type,
            Some(ContentType::Movie)
        );
    }

    #[test]
    fn test_missing_flags_mirror_values() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("a drama from 2015");
        assert_eq!(slots.missing.year, slots.year.is_none());
        assert_eq!(slots.missing.genre, slots.genre.is_none());
        assert_eq!(slots.missing.storyline, slots.storyline.is_none());
        assert_eq!(slots.missing.content_type, slots.content_type.is_none());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let extractor = SlotExtractor::new();
        let input = "a 2001 horror movie like The Thing";
        assert_eq!(extractor.extract(input), extractor.extract(input));
    }
}
