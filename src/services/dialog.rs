use crate::models::Slots;

const INTRO: &str = "Could you provide more details? Specifically:\n";
const BULLET_YEAR: &str = "- What year or range of years are you interested in?\n";
const BULLET_GENRE: &str = "- What genre would you like? For example: action, comedy, drama, etc.\n";
const BULLET_STORYLINE: &str = "- Can you describe the storyline or plot you're looking for?\n";
const BULLET_CONTENT_TYPE: &str = "- Are you looking for a movie or a TV series?\n";

/// Outcome of a single extraction pass: either the query is complete, or the
/// caller needs to be asked for the missing pieces.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    NeedsClarification { prompt: String },
    Complete { slots: Slots },
}

/// Single-shot clarification: one prompt listing every currently-missing
/// slot, never an iterative one-question-at-a-time exchange.
pub fn decide(slots: Slots) -> DialogOutcome {
    if slots.is_complete() {
        return DialogOutcome::Complete { slots };
    }

    let mut prompt = String::from(INTRO);
    if slots.missing.year {
        prompt.push_str(BULLET_YEAR);
    }
    if slots.missing.genre {
        prompt.push_str(BULLET_GENRE);
    }
    if slots.missing.storyline {
        prompt.push_str(BULLET_STORYLINE);
    }
    if slots.missing.content_type {
        prompt.push_str(BULLET_CONTENT_TYPE);
    }

    DialogOutcome::NeedsClarification { prompt }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentType;
    use crate::services::extractor::SlotExtractor;

    fn full_slots() -> Slots {
        Slots::new(
            Some("1999".to_string()),
            Some("comedy".to_string()),
            Some("Jumanji".to_string()),
            Some(ContentType::Movie),
        )
    }

    #[test]
    fn test_complete_slots_returned_unchanged() {
        let slots = full_slots();
        match decide(slots.clone()) {
            DialogOutcome::Complete { slots: returned } => assert_eq!(returned, slots),
            other => panic!("expected Complete, got {other:?}"),
        }
    }

    #[test]
    fn test_all_missing_yields_four_bullets() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("surprise me");

        match decide(slots) {
            DialogOutcome::NeedsClarification { prompt } => {
                assert!(prompt.starts_with(INTRO));
                let bullets: Vec<&str> =
                    prompt.lines().filter(|l| l.starts_with("- ")).collect();
                assert_eq!(
                    bullets,
                    vec![
                        BULLET_YEAR.trim_end(),
                        BULLET_GENRE.trim_end(),
                        BULLET_STORYLINE.trim_end(),
                        BULLET_CONTENT_TYPE.trim_end(),
                    ]
                );
            }
            other => panic!("expected NeedsClarification, got {other:?}"),
        }
    }

    #[test]
    fn test_single_missing_slot_yields_single_bullet() {
        let mut slots = full_slots();
        slots.genre = None;
        slots.missing.genre = true;

        match decide(slots) {
            DialogOutcome::NeedsClarification { prompt } => {
                assert!(prompt.contains(BULLET_GENRE));
                assert!(!prompt.contains(BULLET_YEAR));
                assert!(!prompt.contains(BULLET_STORYLINE));
                assert!(!prompt.contains(BULLET_CONTENT_TYPE));
            }
            other => panic!("expected NeedsClarification, got {other:?}"),
        }
    }

    #[test]
    fn test_bullets_follow_fixed_order() {
        let mut slots = full_slots();
        slots.content_type = None;
        slots.missing.content_type = true;
        slots.year = None;
        slots.missing.year = true;

        match decide(slots) {
            DialogOutcome::NeedsClarification { prompt } => {
                let year_pos = prompt.find("What year").unwrap();
                let type_pos = prompt.find("movie or a TV series").unwrap();
                assert!(year_pos < type_pos);
            }
            other => panic!("expected NeedsClarification, got {other:?}"),
        }
    }
}
