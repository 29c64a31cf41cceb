//! Companion: the request layer behind the CLI and the HTTP server
//!
//! Owns the submission store and the content catalog. Every user-visible
//! failure leaving this layer has been through `to_user_facing_error`.
//!
//! ```rust,ignore
//! let companion = Companion::init(&data_dir.join("institution-hero.db"))?;
//!
//! companion.submit_word("attendee-1", &submission)?;
//! match companion.affirm(&submission)? {
//!     FeedbackResponse::Granted { artifact, quote, .. } => { /* show it */ }
//!     FeedbackResponse::Refused { message } => { /* show refusal */ }
//! }
//! ```

use crate::catalog::ContentCatalog;
use crate::db;
use crate::engine::FeedbackEngine;
use crate::errors::{to_user_facing_error, RawError};
use crate::guard::{has_villainous_input, REFUSAL_MESSAGE};
use crate::quotes;
use crate::types::*;
use anyhow::{anyhow, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::{info, warn};

/// Turn any store failure into its user-facing sentence
fn user_facing(err: anyhow::Error) -> anyhow::Error {
    anyhow!(to_user_facing_error(&RawError::from(&err)))
}

pub struct Companion {
    conn: Connection,
    catalog: ContentCatalog,
}

impl Companion {
    /// Open (or create) the store at `db_path` with the builtin catalog
    pub fn init(db_path: &Path) -> Result<Self> {
        let conn = db::init_db(db_path)?;
        Ok(Self::with_catalog(conn, ContentCatalog::builtin()))
    }

    /// Throwaway store, for dry runs and tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::init_memory_db()?;
        Ok(Self::with_catalog(conn, ContentCatalog::builtin()))
    }

    pub fn with_catalog(conn: Connection, catalog: ContentCatalog) -> Self {
        Self { conn, catalog }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Access the database connection for advanced queries
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ------------------------------------------------------------------
    // Submissions
    // ------------------------------------------------------------------

    pub fn submit_word(&self, submitter: &str, submission: &LeadershipWordSubmission) -> Result<String> {
        let id = db::submit_leadership_word(&self.conn, submitter, submission).map_err(user_facing)?;
        info!(submitter, word = %db::normalize_word(&submission.word), "leadership word stored");
        Ok(id)
    }

    pub fn submit_activity(&self, submitter: &str, activity: &ResilientLeadershipActivity) -> Result<String> {
        let id = db::submit_resilient_leadership_activity(&self.conn, submitter, activity)
            .map_err(user_facing)?;
        info!(submitter, challenge = %activity.challenge_label(), "micro-solution stored");
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Feedback
    // ------------------------------------------------------------------

    /// Affirmation plus the next activity 1 quote, unless the guard trips
    pub fn affirm(&self, submission: &LeadershipWordSubmission) -> Result<FeedbackResponse> {
        if has_villainous_input(&submission.fields()) {
            info!("affirmation refused");
            return Ok(refused());
        }
        let artifact = FeedbackEngine::new(&self.catalog).generate_affirmation(submission)?;
        Ok(self.granted(artifact, Activity::Activity1))
    }

    /// Validation plus the next activity 2 quote, unless the guard trips.
    /// The villain response is not checked.
    pub fn validate(&self, activity: &ResilientLeadershipActivity) -> Result<FeedbackResponse> {
        if has_villainous_input(&activity.heroic_fields()) {
            info!("validation refused");
            return Ok(refused());
        }
        let artifact = FeedbackEngine::new(&self.catalog).generate_validation(activity)?;
        Ok(self.granted(artifact, Activity::Activity2))
    }

    /// A failed quote never costs the attendee their feedback
    fn granted(&self, artifact: FeedbackArtifact, activity: Activity) -> FeedbackResponse {
        let fingerprint = artifact.fingerprint();
        match quotes::next_quote(&self.conn, activity) {
            Ok(quote) => FeedbackResponse::Granted {
                fingerprint,
                artifact,
                quote: Some(quote),
                quote_error: None,
            },
            Err(e) => {
                warn!(activity = activity.key(), error = %e, "quote fetch failed");
                FeedbackResponse::Granted {
                    fingerprint,
                    artifact,
                    quote: None,
                    quote_error: Some(to_user_facing_error(&RawError::from(&e))),
                }
            }
        }
    }

    pub fn next_quote(&self, activity: Activity) -> Result<Quote> {
        quotes::next_quote(&self.conn, activity).map_err(user_facing)
    }

    // ------------------------------------------------------------------
    // Community responses
    // ------------------------------------------------------------------

    pub fn leadership_board(&self) -> Result<LeadershipBoard> {
        Ok(LeadershipBoard {
            top_words: self.top_words(db::TOP_WORDS_LIMIT)?,
            micro_solutions: self.micro_solutions()?,
        })
    }

    pub fn word_counts(&self) -> Result<Vec<WordCount>> {
        db::get_leadership_word_counts(&self.conn).map_err(user_facing)
    }

    pub fn top_words(&self, limit: usize) -> Result<Vec<WordCount>> {
        db::get_top_leadership_words(&self.conn, limit).map_err(user_facing)
    }

    pub fn word_submissions(&self) -> Result<Vec<(String, LeadershipWordSubmission)>> {
        db::get_all_leadership_word_submissions(&self.conn).map_err(user_facing)
    }

    pub fn micro_solutions(&self) -> Result<Vec<ResilientLeadershipActivity>> {
        db::get_all_micro_solutions(&self.conn).map_err(user_facing)
    }

    pub fn micro_solution_submissions(&self) -> Result<Vec<(String, ResilientLeadershipActivity)>> {
        db::get_all_micro_solution_submissions(&self.conn).map_err(user_facing)
    }
}

fn refused() -> FeedbackResponse {
    FeedbackResponse::Refused {
        message: REFUSAL_MESSAGE.to_string(),
    }
}
