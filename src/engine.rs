//! Feedback Engine
//!
//! Turns one activity submission into a reproducible feedback artifact:
//! a templated message plus a validated academic citation.
//!
//! - Activity 1 (leadership word): the normalized word picks the template
//!   set; the template is hash-picked on the word; the reference is
//!   hash-picked on all five fields.
//! - Activity 2 (campus challenge): the heroic fields are classified into
//!   themes; the theme count picks the template; the reference is
//!   hash-picked from the detected themes' pools.
//!
//! The guard is not run here. Callers check it first (see `companion`).

use crate::catalog::ContentCatalog;
use crate::classifier::{classify_or, DEFAULT_THEME};
use crate::selector::select_by_hash;
use crate::types::*;
use crate::validator::select_valid_reference_by_hash;
use anyhow::{anyhow, Result};
use tracing::debug;

/// Generates affirmations and validations from a content catalog
pub struct FeedbackEngine<'a> {
    catalog: &'a ContentCatalog,
}

impl<'a> FeedbackEngine<'a> {
    pub fn new(catalog: &'a ContentCatalog) -> Self {
        Self { catalog }
    }

    /// Affirmation for a leadership word submission (activity 1)
    pub fn generate_affirmation(&self, input: &LeadershipWordSubmission) -> Result<FeedbackArtifact> {
        let normalized_word = input.word.trim().to_lowercase();
        let set = self.catalog.affirmation_set(&normalized_word);

        let template = select_by_hash(&normalized_word, &set.templates)
            .ok_or_else(|| anyhow!("affirmation set '{}' has no templates", set.theme))?;

        let message = render_template(
            template,
            &[
                ("word", input.word.as_str()),
                ("why", input.why.as_str()),
                ("role_model", input.role_model.as_str()),
                ("resilience_example", input.resilience_example.as_str()),
                ("action_step", input.action_step.as_str()),
            ],
        );

        let input_text = input.fields().join(" ");
        let reference = self.pick_reference(&input_text, &set.reference_keys)?;

        debug!(theme = %set.theme, reference = %reference.key, "affirmation generated");
        Ok(FeedbackArtifact { message, reference })
    }

    /// Validation for a campus challenge submission (activity 2)
    pub fn generate_validation(&self, input: &ResilientLeadershipActivity) -> Result<FeedbackArtifact> {
        let text = validation_text(input);
        let themes = classify_or(self.catalog, &text, &[DEFAULT_THEME]);

        let templates = self.catalog.validation_templates();
        if templates.is_empty() {
            return Err(anyhow!("catalog has no validation templates"));
        }
        let template = &templates[themes.len() % templates.len()];

        let heroic = input.heroic_response.to_lowercase();
        let protective = input.protective_factor.to_lowercase();
        let micro = input.micro_solution.to_lowercase();
        let message = render_template(
            template,
            &[
                ("heroic_response", heroic.as_str()),
                ("protective_factor", protective.as_str()),
                ("micro_solution", micro.as_str()),
            ],
        );

        let candidates = self.catalog.candidate_keys(&themes);
        let reference = self.pick_reference(&text, &candidates)?;

        debug!(
            themes = ?themes.iter().map(|t| t.name()).collect::<Vec<_>>(),
            reference = %reference.key,
            "validation generated"
        );
        Ok(FeedbackArtifact { message, reference })
    }

    /// Themes an activity 2 submission falls into, default included
    pub fn validation_themes(&self, input: &ResilientLeadershipActivity) -> Vec<ThemeTag> {
        classify_or(self.catalog, &validation_text(input), &[DEFAULT_THEME])
    }

    fn pick_reference(&self, input: &str, candidate_keys: &[String]) -> Result<ReferenceEntry> {
        select_valid_reference_by_hash(self.catalog, input, candidate_keys)
            .ok_or_else(|| anyhow!("catalog has no references"))
    }
}

/// Text the classifier and reference hash see for activity 2
fn validation_text(input: &ResilientLeadershipActivity) -> String {
    format!(
        "{} {} {}",
        input.heroic_response, input.protective_factor, input.micro_solution
    )
    .to_lowercase()
}

/// Fill `{name}` slots from `vars` in one pass. Values are inserted
/// verbatim and are never re-scanned; unknown slots are left as written.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resilient_submission() -> LeadershipWordSubmission {
        LeadershipWordSubmission {
            word: "resilient".to_string(),
            why: "Because setbacks teach us".to_string(),
            role_model: "a coach".to_string(),
            resilience_example: "she rebuilt the program after budget cuts".to_string(),
            action_step: "check in with a teammate every Friday".to_string(),
        }
    }

    fn campus_activity() -> ResilientLeadershipActivity {
        ResilientLeadershipActivity {
            challenge_type: Some(ChallengeType::SocialIsolation),
            custom_challenge: None,
            villain_response: "Ignore them".to_string(),
            heroic_response: "Invite them to study group".to_string(),
            protective_factor: "Mentorship".to_string(),
            micro_solution: "Check in on an isolated peer".to_string(),
        }
    }

    #[test]
    fn test_render_template_fills_slots() {
        let out = render_template("Hi {name}, {missing} {name}!", &[("name", "Ada")]);
        assert_eq!(out, "Hi Ada, {missing} Ada!");
    }

    #[test]
    fn test_render_template_does_not_rescan_values() {
        let out = render_template("{a} and {b}", &[("a", "{b}"), ("b", "two")]);
        assert_eq!(out, "{b} and two");
    }

    #[test]
    fn test_render_template_unclosed_brace() {
        assert_eq!(render_template("open { brace", &[]), "open { brace");
    }

    #[test]
    fn test_resilient_affirmation_end_to_end() {
        let catalog = ContentCatalog::builtin();
        let engine = FeedbackEngine::new(&catalog);
        let input = resilient_submission();

        let artifact = engine.generate_affirmation(&input).unwrap();

        // hash("resilient") = 975, 975 % 2 = 1: the second resilient template
        assert!(artifact.message.starts_with("Your focus on resilience"));
        assert!(artifact.message.contains("check in with a teammate every Friday"));
        assert!(["erickson2017", "wang2025", "jansen2024"].contains(&artifact.reference.key.as_str()));

        let again = engine.generate_affirmation(&input).unwrap();
        assert_eq!(artifact.message, again.message);
        assert_eq!(artifact.reference.key, again.reference.key);
        assert_eq!(artifact.fingerprint(), again.fingerprint());
    }

    #[test]
    fn test_affirmation_word_normalized() {
        let catalog = ContentCatalog::builtin();
        let engine = FeedbackEngine::new(&catalog);
        let mut input = resilient_submission();
        input.word = "  Resilient ".to_string();

        let artifact = engine.generate_affirmation(&input).unwrap();
        assert!(artifact.message.starts_with("Your focus on resilience"));
    }

    #[test]
    fn test_affirmation_interpolates_word_verbatim() {
        let catalog = ContentCatalog::builtin();
        let engine = FeedbackEngine::new(&catalog);
        let input = LeadershipWordSubmission {
            word: "Low-Key Iconic".to_string(),
            role_model: "my RA".to_string(),
            action_step: "host a study night".to_string(),
            ..Default::default()
        };

        let artifact = engine.generate_affirmation(&input).unwrap();
        let defaults = &catalog.affirmation_set("default").reference_keys;
        assert!(defaults.contains(&artifact.reference.key));
        assert!(artifact.message.contains("Low-Key Iconic") || artifact.message.contains("host a study night"));
        assert!(!artifact.message.contains('{'));
    }

    #[test]
    fn test_affirmation_template_depends_only_on_word() {
        let catalog = ContentCatalog::builtin();
        let engine = FeedbackEngine::new(&catalog);
        let a = resilient_submission();
        let mut b = resilient_submission();
        b.why = "A completely different reason".to_string();

        let first = engine.generate_affirmation(&a).unwrap();
        let second = engine.generate_affirmation(&b).unwrap();
        assert!(first.message.starts_with("Your focus on resilience"));
        assert!(second.message.starts_with("Your focus on resilience"));
    }

    #[test]
    fn test_validation_end_to_end() {
        let catalog = ContentCatalog::builtin();
        let engine = FeedbackEngine::new(&catalog);
        let input = campus_activity();

        let themes = engine.validation_themes(&input);
        // "group" -> community, "mentorship" -> support
        assert_eq!(themes, vec![ThemeTag::Support, ThemeTag::Community]);

        let artifact = engine.generate_validation(&input).unwrap();
        // two themes, 2 % 4 = 2: the third template
        assert!(artifact.message.starts_with("Your approach to this challenge"));
        assert!(artifact.message.contains("mentorship"));
        assert!(artifact.message.contains("check in on an isolated peer"));

        let pool = catalog.candidate_keys(&themes);
        assert!(pool.contains(&artifact.reference.key));

        let again = engine.generate_validation(&input).unwrap();
        assert_eq!(artifact, again);
    }

    #[test]
    fn test_validation_default_theme() {
        let catalog = ContentCatalog::builtin();
        let engine = FeedbackEngine::new(&catalog);
        let input = ResilientLeadershipActivity {
            heroic_response: "Ask questions".to_string(),
            protective_factor: "Patience".to_string(),
            micro_solution: "Email the professor".to_string(),
            ..Default::default()
        };

        assert_eq!(engine.validation_themes(&input), vec![ThemeTag::Resilience]);
        let artifact = engine.generate_validation(&input).unwrap();
        // one theme: the second template
        assert!(artifact.message.starts_with("The protective factor you've identified—patience—is"));
        assert!(catalog.pool_for(ThemeTag::Resilience).contains(&artifact.reference.key));
    }
}
