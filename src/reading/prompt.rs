//! Text prompt rendered from a `ReadingRequest`.
//!
//! Services backed by a text-generation model send this prompt as the
//! single user message. A one-card request is rendered as a plain card
//! block; larger requests label cards by position.

use super::ReadingRequest;

pub const SYSTEM_PROMPT: &str = "You are a mystical tarot reader with deep knowledge of the Rider-Waite tradition and astrological wisdom.

Your role is to synthesize tarot card meanings into insightful, personalized readings that:
- Directly address the user's specific question
- Weave all drawn cards into a unified narrative
- Interpret card positions (Past/Present/Future or similar)
- When provided, consider the user's zodiac sign and how its elemental and personality traits relate to the cards
- Use a mystical yet accessible tone
- Provide actionable insight without being preachy
- Feel authentic and meaningful, not generic

Keep readings between 50-100 words. Be specific to their question.";

/// Position names for multi-card prompts. Cards past the third are
/// labelled `Card N`.
pub const POSITION_NAMES: [&str; 3] = ["Past/Foundation", "Present/Challenge", "Future/Advice"];

/// Render the full prompt for `request`.
#[must_use]
pub fn build_prompt(request: &ReadingRequest) -> String {
    let mut cards_text = String::new();

    if let [card] = request.cards.as_slice() {
        cards_text.push_str(&format!(
            "**{}** ({})\nKeywords: {}\nMeaning: {}",
            card.card_name,
            card.orientation,
            card.keywords.join(", "),
            card.meaning
        ));
    } else {
        for (i, card) in request.cards.iter().enumerate() {
            if i > 0 {
                cards_text.push_str("\n\n");
            }
            let position = POSITION_NAMES
                .get(i)
                .map_or_else(|| format!("Card {}", i + 1), |name| (*name).to_string());
            cards_text.push_str(&format!(
                "**Position {}: {}**\nCard: {} ({})\nKeywords: {}\nMeaning: {}",
                i + 1,
                position,
                card.card_name,
                card.orientation,
                card.keywords.join(", "),
                card.meaning
            ));
        }
    }

    let zodiac_context = request.zodiac_sign.map_or_else(String::new, |sign| {
        format!(
            "\nQUERENT'S ZODIAC SIGN:\n{sign} ({element} sign)\nTraits: {traits}\n\n\
             Consider how the {element} element and {sign} traits relate to the cards drawn. \
             Weave this astrological insight naturally into your reading.\n",
            element = sign.element(),
            traits = sign.traits(),
        )
    });

    format!(
        "{SYSTEM_PROMPT}\n\nUSER'S QUESTION:\n\"{question}\"\n{zodiac_context}\nDRAWN CARDS:\n\n{cards_text}\n\n\
         Generate a cohesive tarot reading that synthesizes these cards to answer the user's question. \
         Weave the cards together into a meaningful narrative.",
        question = request.question,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Orientation;
    use crate::reading::{CardContext, ZodiacSign};

    fn context(name: &str) -> CardContext {
        CardContext {
            card_name: name.to_string(),
            orientation: Orientation::Reversed,
            keywords: vec!["one".to_string(), "two".to_string()],
            meaning: format!("{name} meaning"),
        }
    }

    fn request(names: &[&str], zodiac_sign: Option<ZodiacSign>) -> ReadingRequest {
        ReadingRequest {
            question: "What now?".to_string(),
            cards: names.iter().map(|n| context(n)).collect(),
            zodiac_sign,
        }
    }

    #[test]
    fn test_single_card_block() {
        let prompt = build_prompt(&request(&["The Moon"], None));

        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.contains("USER'S QUESTION:\n\"What now?\""));
        assert!(prompt.contains("**The Moon** (reversed)\nKeywords: one, two\nMeaning: The Moon meaning"));
        assert!(!prompt.contains("Position 1"));
        assert!(!prompt.contains("ZODIAC"));
    }

    #[test]
    fn test_positions_labelled() {
        let prompt = build_prompt(&request(&["A", "B", "C"], None));

        assert!(prompt.contains("**Position 1: Past/Foundation**\nCard: A (reversed)"));
        assert!(prompt.contains("**Position 2: Present/Challenge**\nCard: B"));
        assert!(prompt.contains("**Position 3: Future/Advice**\nCard: C"));
    }

    #[test]
    fn test_position_blocks_separated() {
        let prompt = build_prompt(&request(&["A", "B"], None));

        assert!(prompt.contains(
            "DRAWN CARDS:\n\n**Position 1: Past/Foundation**\nCard: A (reversed)\nKeywords: one, two\nMeaning: A meaning\n\n**Position 2: Present/Challenge**"
        ));
    }

    #[test]
    fn test_extra_cards_numbered() {
        let prompt = build_prompt(&request(&["A", "B", "C", "D"], None));
        assert!(prompt.contains("**Position 4: Card 4**\nCard: D"));
    }

    #[test]
    fn test_zodiac_section() {
        let prompt = build_prompt(&request(&["A"], Some(ZodiacSign::Taurus)));

        assert!(prompt.contains("QUERENT'S ZODIAC SIGN:\nTaurus (Earth sign)"));
        assert!(prompt.contains("Traits: grounded, patient, sensual, determined"));
        assert!(prompt.contains("the Earth element and Taurus traits"));
    }
}
