//! Institution Hero - session companion
//!
//! Backs the "Institution Hero" leadership session: attendees submit a
//! leadership word (activity 1) and a campus challenge worked through villain
//! and hero responses (activity 2), and get back reproducible feedback with
//! an academic citation and a movie quote.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use institution_hero::{Companion, FeedbackResponse, LeadershipWordSubmission};
//!
//! let companion = Companion::init(&db_path)?;
//! companion.submit_word("attendee-1", &submission)?;
//! let response = companion.affirm(&submission)?;
//! ```
//!
//! The feedback core is pure and deterministic:
//!
//! ```rust,ignore
//! use institution_hero::{ContentCatalog, FeedbackEngine};
//!
//! let catalog = ContentCatalog::builtin();
//! let artifact = FeedbackEngine::new(&catalog).generate_affirmation(&submission)?;
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │         CLI / REPL / JSON-RPC over HTTP              │
//! └─────────────────────┬───────────────────────────────┘
//!                       ▼
//! ┌─────────────────────────────────────────────────────┐
//! │ Companion   guard → engine → quote rotation          │
//! │             errors → user-facing sentences           │
//! └──────┬──────────────────────────────┬───────────────┘
//!        ▼                              ▼
//!  engine: classifier, selector,     db: submissions, word
//!  validator over ContentCatalog     counts, quote cursors
//! ```

pub mod catalog;
pub mod classifier;
pub mod companion;
pub mod content;
pub mod db;
pub mod engine;
pub mod errors;
pub mod guard;
pub mod quotes;
pub mod selector;
pub mod types;
pub mod validator;

// Core types
pub use catalog::ContentCatalog;
pub use db::{init_db, init_memory_db};
pub use engine::FeedbackEngine;
pub use types::*;

// Feedback building blocks
pub use classifier::{classify, classify_or, DEFAULT_THEME};
pub use guard::{has_villainous_input, is_villainous_input, REFUSAL_MESSAGE};
pub use selector::{select_by_hash, text_hash};
pub use validator::{is_valid_reference, select_valid_reference_by_hash};

// Request layer
pub use companion::Companion;
pub use errors::{to_user_facing_error, RawError};
pub use quotes::{builtin_quotes, next_quote};
