//! Villainous-Input Guard
//!
//! Runs before any feedback is generated. If any heroic field reads as
//! villainous the request is refused with a fixed message and the engine
//! is never called.
//!
//! The keyword list is deliberately broad ("never", "weak", "lose") and will
//! flag some legitimate resilience stories such as "I will never give up".
//! That sensitivity is kept as authored.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shown instead of feedback when the guard trips
pub const REFUSAL_MESSAGE: &str = "Error 000: Only Heroic responses can be validated. Please ensure your input reflects positive leadership qualities.";

const VILLAINOUS_KEYWORDS: &[&str] = &[
    // Negative emotions and states
    "hate", "hatred", "angry", "rage", "furious", "vengeful", "revenge",
    "destroy", "destruction", "kill", "death", "die", "hurt", "harm",
    "evil", "wicked", "malicious", "cruel", "vicious", "brutal",
    // Negative actions
    "attack", "assault", "abuse", "bully", "harass", "threaten",
    "manipulate", "deceive", "lie", "cheat", "steal", "betray",
    // Negative qualities
    "worthless", "useless", "hopeless", "pathetic", "weak", "failure",
    "stupid", "idiot", "dumb", "incompetent", "inferior",
    // Extreme negativity
    "never", "impossible", "can't", "won't", "refuse", "give up",
    "quit", "surrender", "defeat", "lose", "loser",
    // Villainous character traits
    "selfish", "greedy", "corrupt", "dishonest", "unethical",
    "immoral", "unjust", "unfair", "discriminate", "prejudice",
];

const VILLAINOUS_PHRASES: &[&str] = &[
    "give up", "can't do", "won't try", "not worth", "no point",
    "don't care", "doesn't matter", "who cares", "screw it",
    "hate myself", "hate everyone", "hate them", "hate this",
];

// Word boundaries are ASCII-only: accented letters next to a keyword count
// as separators, so "élie" still contains "lie".
static VILLAINOUS_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    let alt = VILLAINOUS_KEYWORDS
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)(?-u:\b)(?:{alt})(?-u:\b)")).expect("villainous keyword pattern")
});

/// True when `text` contains a villainous keyword or phrase. Blank text is
/// never villainous.
pub fn is_villainous_input(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }

    if VILLAINOUS_WORD_RE.is_match(&normalized) {
        return true;
    }

    VILLAINOUS_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
}

/// True when any of `texts` is villainous
pub fn has_villainous_input(texts: &[&str]) -> bool {
    texts.iter().any(|t| is_villainous_input(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hate_is_villainous() {
        assert!(has_villainous_input(&["I hate this"]));
    }

    #[test]
    fn test_resilient_is_heroic() {
        assert!(!has_villainous_input(&["I feel resilient and strong"]));
    }

    #[test]
    fn test_whole_word_matching() {
        // "die" inside "studied", "lie" inside "believe", "harm" inside "pharmacy"
        assert!(!is_villainous_input("I studied hard and believe in pharmacy students"));
        assert!(is_villainous_input("Do not lie to people"));
    }

    #[test]
    fn test_ascii_word_boundaries() {
        assert!(is_villainous_input("élie"));
        assert!(is_villainous_input("naïve hate"));
        assert!(!is_villainous_input("belief"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_villainous_input("EVIL plan"));
        assert!(is_villainous_input("  Greedy  "));
    }

    #[test]
    fn test_apostrophe_keywords() {
        assert!(is_villainous_input("I can't"));
        assert!(is_villainous_input("they won't listen"));
    }

    #[test]
    fn test_phrases_match_as_substring() {
        assert!(is_villainous_input("it doesn't matter anyway"));
        assert!(is_villainous_input("who cares about group work"));
        assert!(is_villainous_input("screw it"));
    }

    #[test]
    fn test_broad_keywords_kept() {
        assert!(is_villainous_input("I will never give up"));
        assert!(is_villainous_input("I felt weak at first"));
    }

    #[test]
    fn test_blank_is_not_villainous() {
        assert!(!is_villainous_input(""));
        assert!(!is_villainous_input("   \n\t"));
        assert!(!has_villainous_input(&[]));
    }

    #[test]
    fn test_any_field_trips() {
        assert!(has_villainous_input(&["kind", "patient", "I refuse to help"]));
        assert!(!has_villainous_input(&["kind", "patient", "check in on a peer"]));
    }
}
