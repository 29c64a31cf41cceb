//! Core types for the Institution Hero session companion
//!
//! Everything here is plain data: submissions coming in from attendees,
//! the feedback artifact going back out, and the quote records that ride
//! along with it.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One academic citation with a stable key and its display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub key: String,
    pub text: String,
}

impl ReferenceEntry {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Internal category label used only to pick feedback content
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ThemeTag {
    Resilience,
    Leadership,
    Growth,
    Support,
    Mindfulness,
    Identity,
    Transformation,
    Community,
    Destructive,
    Compassion,
    Ethical,
}

impl ThemeTag {
    /// The vocabulary in iteration order. Classifier output follows this order.
    pub const ALL: [ThemeTag; 11] = [
        ThemeTag::Resilience,
        ThemeTag::Leadership,
        ThemeTag::Growth,
        ThemeTag::Support,
        ThemeTag::Mindfulness,
        ThemeTag::Identity,
        ThemeTag::Transformation,
        ThemeTag::Community,
        ThemeTag::Destructive,
        ThemeTag::Compassion,
        ThemeTag::Ethical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeTag::Resilience => "resilience",
            ThemeTag::Leadership => "leadership",
            ThemeTag::Growth => "growth",
            ThemeTag::Support => "support",
            ThemeTag::Mindfulness => "mindfulness",
            ThemeTag::Identity => "identity",
            ThemeTag::Transformation => "transformation",
            ThemeTag::Community => "community",
            ThemeTag::Destructive => "destructive",
            ThemeTag::Compassion => "compassion",
            ThemeTag::Ethical => "ethical",
        }
    }
}

/// The `{message, reference}` pair produced for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackArtifact {
    pub message: String,
    pub reference: ReferenceEntry,
}

impl FeedbackArtifact {
    /// SHA-256 over message and reference key, hex encoded.
    /// Identical inputs produce identical fingerprints across runs.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.message.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.reference.key.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Activity 1: one leadership word plus four reflections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipWordSubmission {
    pub word: String,
    pub why: String,
    pub role_model: String,
    pub resilience_example: String,
    pub action_step: String,
}

impl LeadershipWordSubmission {
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.word,
            &self.why,
            &self.role_model,
            &self.resilience_example,
            &self.action_step,
        ]
    }
}

/// Activity 2: a campus challenge worked through villain and hero responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResilientLeadershipActivity {
    #[serde(default)]
    pub challenge_type: Option<ChallengeType>,
    #[serde(default)]
    pub custom_challenge: Option<String>,
    pub villain_response: String,
    pub heroic_response: String,
    pub protective_factor: String,
    pub micro_solution: String,
}

impl ResilientLeadershipActivity {
    /// The fields that must read as heroic before a validation is produced.
    /// The villain response is expected to be villainous and is not checked.
    pub fn heroic_fields(&self) -> [&str; 3] {
        [
            &self.heroic_response,
            &self.protective_factor,
            &self.micro_solution,
        ]
    }

    /// Label shown in the community list
    pub fn challenge_label(&self) -> String {
        match (&self.challenge_type, &self.custom_challenge) {
            (Some(kind), _) => kind.label().to_string(),
            (None, Some(custom)) if !custom.trim().is_empty() => custom.clone(),
            _ => "Custom Challenge".to_string(),
        }
    }
}

/// Predefined campus challenges for activity 2
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeType {
    AcademicPressure,
    MentalHealth,
    FinancialStress,
    OnlineLearning,
    TimeManagement,
    Bullying,
    SocialIsolation,
}

impl ChallengeType {
    pub const ALL: [ChallengeType; 7] = [
        ChallengeType::AcademicPressure,
        ChallengeType::MentalHealth,
        ChallengeType::FinancialStress,
        ChallengeType::OnlineLearning,
        ChallengeType::TimeManagement,
        ChallengeType::Bullying,
        ChallengeType::SocialIsolation,
    ];

    /// Stable wire key, also used as the stored column value
    pub fn key(&self) -> &'static str {
        match self {
            ChallengeType::AcademicPressure => "academicPressure",
            ChallengeType::MentalHealth => "mentalHealth",
            ChallengeType::FinancialStress => "financialStress",
            ChallengeType::OnlineLearning => "onlineLearning",
            ChallengeType::TimeManagement => "timeManagement",
            ChallengeType::Bullying => "bullying",
            ChallengeType::SocialIsolation => "socialIsolation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChallengeType::AcademicPressure => "Academic Pressure",
            ChallengeType::MentalHealth => "Mental Health",
            ChallengeType::FinancialStress => "Financial Stress",
            ChallengeType::OnlineLearning => "Online Learning",
            ChallengeType::TimeManagement => "Time Management",
            ChallengeType::Bullying => "Bullying",
            ChallengeType::SocialIsolation => "Social Isolation",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }
}

/// Film franchise a quote comes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum QuoteGenre {
    StarWars,
    Avengers,
    Batman,
    DarkKnightTrilogy,
    Infinite,
    Kingsman,
    ThreeKings,
    Transformers,
    WarDogs,
}

impl QuoteGenre {
    pub fn label(&self) -> &'static str {
        match self {
            QuoteGenre::StarWars => "Star Wars",
            QuoteGenre::Avengers => "Avengers",
            QuoteGenre::Batman => "Batman",
            QuoteGenre::DarkKnightTrilogy => "The Dark Knight Trilogy",
            QuoteGenre::Infinite => "Infinite",
            QuoteGenre::Kingsman => "Kingsman",
            QuoteGenre::ThreeKings => "Three Kings",
            QuoteGenre::Transformers => "Transformers",
            QuoteGenre::WarDogs => "War Dogs",
        }
    }
}

/// A movie quote handed out alongside feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote: String,
    pub attribution: String,
    pub genre: QuoteGenre,
    pub movie_reference: String,
}

/// Which activity a request belongs to. Each has its own quote rotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Activity1,
    Activity2,
}

impl Activity {
    pub fn key(&self) -> &'static str {
        match self {
            Activity::Activity1 => "activity1",
            Activity::Activity2 => "activity2",
        }
    }
}

/// Outcome of asking for feedback on a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FeedbackResponse {
    /// The guard tripped; nothing was generated
    Refused { message: String },
    Granted {
        /// `artifact.fingerprint()`, for comparing feedback across runs
        fingerprint: String,
        artifact: FeedbackArtifact,
        quote: Option<Quote>,
        quote_error: Option<String>,
    },
}

/// One word and how many attendees chose it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Aggregated community responses for both activities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipBoard {
    pub top_words: Vec<WordCount>,
    pub micro_solutions: Vec<ResilientLeadershipActivity>,
}
