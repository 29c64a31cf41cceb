//! Theme Classifier
//!
//! Maps free text to theme tags by keyword matching. Single keywords must
//! match a whole word, allowing plain inflections ("mentors", "mentoring",
//! "communities"); multi-word phrases match anywhere in the text.
//! Apostrophes split words, so "mentor's" is "mentor" + "s".

use crate::catalog::ContentCatalog;
use crate::types::ThemeTag;

/// Tag used when activity 2 input matches nothing
pub const DEFAULT_THEME: ThemeTag = ThemeTag::Resilience;

/// Classify `text`. May return an empty list; see [`classify_or`].
///
/// Tags come back in vocabulary order, not in the order they appear in
/// the text.
pub fn classify(catalog: &ContentCatalog, text: &str) -> Vec<ThemeTag> {
    let folded = text.to_lowercase();
    let words = tokens(&folded);

    catalog
        .theme_keywords()
        .iter()
        .filter(|theme| {
            theme
                .keywords
                .iter()
                .any(|keyword| keyword_matches(&folded, &words, keyword))
        })
        .map(|theme| theme.tag)
        .collect()
}

/// Classify `text`, substituting `fallback` when nothing matches
pub fn classify_or(catalog: &ContentCatalog, text: &str, fallback: &[ThemeTag]) -> Vec<ThemeTag> {
    let tags = classify(catalog, text);
    if tags.is_empty() {
        fallback.to_vec()
    } else {
        tags
    }
}

fn keyword_matches(folded: &str, words: &[&str], keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    if keyword.contains(char::is_whitespace) {
        folded.contains(&keyword)
    } else {
        words.iter().any(|word| is_inflection_of(word, &keyword))
    }
}

/// `word` is `keyword` itself or `keyword` + s / es / ing, or the
/// y to ies plural
fn is_inflection_of(word: &str, keyword: &str) -> bool {
    if word == keyword {
        return true;
    }
    if ["s", "es", "ing"]
        .iter()
        .any(|suffix| word.strip_suffix(suffix) == Some(keyword))
    {
        return true;
    }
    match (word.strip_suffix("ies"), keyword.strip_suffix('y')) {
        (Some(stem), Some(kw_stem)) => !stem.is_empty() && stem == kw_stem,
        _ => false,
    }
}

fn tokens(folded: &str) -> Vec<&str> {
    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ContentCatalog {
        ContentCatalog::builtin()
    }

    #[test]
    fn test_classify_single_theme() {
        let tags = classify(&catalog(), "I will mentor a first-year student");
        assert_eq!(tags, vec![ThemeTag::Support]);
    }

    #[test]
    fn test_classify_case_insensitive() {
        let tags = classify(&catalog(), "RESILIENT under PRESSURE");
        assert_eq!(tags, vec![ThemeTag::Resilience]);
    }

    #[test]
    fn test_classify_vocabulary_order() {
        // Ethical keyword first, resilience keyword last
        let tags = classify(&catalog(), "be honest and stay strong");
        assert_eq!(tags, vec![ThemeTag::Resilience, ThemeTag::Ethical]);
    }

    #[test]
    fn test_classify_whole_word_only() {
        // "leading" contains "lead" but "misleading" must not match it
        let tags = classify(&catalog(), "misleading");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_classify_phrase_substring() {
        let tags = classify(&catalog(), "we always bounce back together");
        assert_eq!(tags, vec![ThemeTag::Resilience, ThemeTag::Community]);

        let tags = classify(&catalog(), "knowing who i am matters");
        assert_eq!(tags, vec![ThemeTag::Identity]);
    }

    #[test]
    fn test_classify_keyword_in_two_themes() {
        let tags = classify(&catalog(), "our community");
        assert_eq!(tags, vec![ThemeTag::Support, ThemeTag::Community]);
    }

    #[test]
    fn test_classify_punctuation_boundaries() {
        let tags = classify(&catalog(), "kindness, empathy; trust.");
        assert_eq!(tags, vec![ThemeTag::Compassion, ThemeTag::Ethical]);
    }

    #[test]
    fn test_classify_possessives() {
        assert_eq!(classify(&catalog(), "ask my mentor's advice"), vec![ThemeTag::Support]);
        assert_eq!(classify(&catalog(), "the team's plan"), vec![ThemeTag::Community]);
    }

    #[test]
    fn test_classify_plurals_and_ing_forms() {
        assert_eq!(
            classify(&catalog(), "invite them to study groups with peers and mentors"),
            vec![ThemeTag::Support, ThemeTag::Community]
        );
        assert_eq!(
            classify(&catalog(), "mentoring first years, supporting teams"),
            vec![ThemeTag::Support, ThemeTag::Community]
        );
        assert_eq!(classify(&catalog(), "many communities"), vec![ThemeTag::Support, ThemeTag::Community]);
    }

    #[test]
    fn test_inflection_rules() {
        assert!(is_inflection_of("mentors", "mentor"));
        assert!(is_inflection_of("changes", "change"));
        assert!(is_inflection_of("communities", "community"));
        assert!(!is_inflection_of("mentorship", "mentor"));
        assert!(!is_inflection_of("ies", "y"));
    }

    #[test]
    fn test_classify_no_match_is_empty() {
        assert!(classify(&catalog(), "asdf qwerty").is_empty());
        assert!(classify(&catalog(), "").is_empty());
    }

    #[test]
    fn test_classify_or_default_never_empty() {
        for text in ["", "   ", "asdf qwerty", "12345", "zzz"] {
            let tags = classify_or(&catalog(), text, &[DEFAULT_THEME]);
            assert_eq!(tags, vec![ThemeTag::Resilience]);
        }
    }

    #[test]
    fn test_classify_or_keeps_matches() {
        let tags = classify_or(&catalog(), "inspire the team", &[DEFAULT_THEME]);
        assert_eq!(tags, vec![ThemeTag::Leadership, ThemeTag::Community]);
    }
}
