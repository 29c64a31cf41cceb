//! Database layer for submissions and quote rotation
//!
//! SQLite, one file, schema created on open. Stores both activities'
//! submissions, the running leadership word tally and the per-activity
//! quote cursors.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use uuid::Uuid;

use crate::types::{
    ChallengeType, LeadershipWordSubmission, ResilientLeadershipActivity, WordCount,
};

/// How many words the leadership board shows
pub const TOP_WORDS_LIMIT: usize = 10;

/// Initialize the database with schema
pub fn init_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database at {:?}", path))?;

    conn.execute_batch(SCHEMA)?;

    Ok(conn)
}

/// In-memory database with schema, for tests and dry runs
pub fn init_memory_db() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

const SCHEMA: &str = r#"
-- Activity 1: one row per leadership word submission
CREATE TABLE IF NOT EXISTS leadership_words (
    id TEXT PRIMARY KEY,
    submitter TEXT NOT NULL,
    word TEXT NOT NULL,
    normalized_word TEXT NOT NULL,
    why TEXT NOT NULL,
    role_model TEXT NOT NULL,
    resilience_example TEXT NOT NULL,
    action_step TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_leadership_words_normalized ON leadership_words(normalized_word);

-- Running tally per normalized word
CREATE TABLE IF NOT EXISTS word_counts (
    word TEXT PRIMARY KEY,
    count INTEGER NOT NULL DEFAULT 0
);

-- Activity 2: campus challenge responses
CREATE TABLE IF NOT EXISTS micro_solutions (
    id TEXT PRIMARY KEY,
    submitter TEXT NOT NULL,
    challenge_type TEXT,        -- ChallengeType key, NULL when custom
    custom_challenge TEXT,
    villain_response TEXT NOT NULL,
    heroic_response TEXT NOT NULL,
    protective_factor TEXT NOT NULL,
    micro_solution TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Next quote index per activity
CREATE TABLE IF NOT EXISTS quote_cursors (
    activity TEXT PRIMARY KEY,
    position INTEGER NOT NULL DEFAULT 0
);
"#;

/// Normalize a leadership word for tallying
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Store a leadership word submission and bump its tally. Returns the row id.
pub fn submit_leadership_word(
    conn: &Connection,
    submitter: &str,
    submission: &LeadershipWordSubmission,
) -> Result<String> {
    let normalized = normalize_word(&submission.word);
    if normalized.is_empty() {
        bail!("Please provide a leadership word");
    }

    let id = Uuid::new_v4().to_string();
    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO leadership_words
            (id, submitter, word, normalized_word, why, role_model, resilience_example, action_step, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            id,
            submitter,
            submission.word,
            normalized,
            submission.why,
            submission.role_model,
            submission.resilience_example,
            submission.action_step,
            Utc::now().to_rfc3339(),
        ],
    )?;
    tx.execute(
        "INSERT INTO word_counts (word, count) VALUES (?1, 1)
         ON CONFLICT(word) DO UPDATE SET count = count + 1",
        params![normalized],
    )?;
    tx.commit()?;

    Ok(id)
}

/// Store a campus challenge response. Returns the row id.
///
/// Needs either a predefined challenge or a custom description, and a
/// micro-solution.
pub fn submit_resilient_leadership_activity(
    conn: &Connection,
    submitter: &str,
    activity: &ResilientLeadershipActivity,
) -> Result<String> {
    let custom = activity
        .custom_challenge
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    if activity.challenge_type.is_none() {
        match (&activity.custom_challenge, custom) {
            (None, _) => bail!("Please select at least a core Leadership Challenge from the list"),
            (Some(_), None) => bail!("Please provide at least a core Leadership Challenge description"),
            _ => {}
        }
    }
    if activity.micro_solution.trim().is_empty() {
        bail!("Please provide a micro-solution");
    }

    let id = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO micro_solutions
            (id, submitter, challenge_type, custom_challenge, villain_response,
             heroic_response, protective_factor, micro_solution, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            id,
            submitter,
            activity.challenge_type.map(|c| c.key()),
            custom,
            activity.villain_response,
            activity.heroic_response,
            activity.protective_factor,
            activity.micro_solution,
            Utc::now().to_rfc3339(),
        ],
    )?;

    Ok(id)
}

/// All leadership word submissions with their submitter, oldest first
pub fn get_all_leadership_word_submissions(
    conn: &Connection,
) -> Result<Vec<(String, LeadershipWordSubmission)>> {
    let mut stmt = conn.prepare(
        "SELECT submitter, word, why, role_model, resilience_example, action_step
         FROM leadership_words ORDER BY rowid ASC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                LeadershipWordSubmission {
                    word: row.get(1)?,
                    why: row.get(2)?,
                    role_model: row.get(3)?,
                    resilience_example: row.get(4)?,
                    action_step: row.get(5)?,
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Tally of every normalized word, alphabetical
pub fn get_leadership_word_counts(conn: &Connection) -> Result<Vec<WordCount>> {
    query_word_counts(conn, "SELECT word, count FROM word_counts ORDER BY word ASC", None)
}

/// Most chosen words, highest count first, ties alphabetical
pub fn get_top_leadership_words(conn: &Connection, limit: usize) -> Result<Vec<WordCount>> {
    query_word_counts(
        conn,
        "SELECT word, count FROM word_counts ORDER BY count DESC, word ASC LIMIT ?1",
        Some(limit as i64),
    )
}

fn query_word_counts(conn: &Connection, sql: &str, limit: Option<i64>) -> Result<Vec<WordCount>> {
    let mut stmt = conn.prepare(sql)?;
    let map_row = |row: &rusqlite::Row<'_>| {
        Ok(WordCount {
            word: row.get(0)?,
            count: row.get::<_, i64>(1)?.max(0) as u64,
        })
    };

    let rows = match limit {
        Some(limit) => stmt.query_map(params![limit], map_row)?.collect::<Result<Vec<_>, _>>()?,
        None => stmt.query_map([], map_row)?.collect::<Result<Vec<_>, _>>()?,
    };
    Ok(rows)
}

/// All campus challenge responses, newest first
pub fn get_all_micro_solutions(conn: &Connection) -> Result<Vec<ResilientLeadershipActivity>> {
    let rows = query_micro_solutions(conn, "ORDER BY rowid DESC")?;
    Ok(rows.into_iter().map(|(_, activity)| activity).collect())
}

/// All campus challenge responses with their submitter, oldest first
pub fn get_all_micro_solution_submissions(
    conn: &Connection,
) -> Result<Vec<(String, ResilientLeadershipActivity)>> {
    query_micro_solutions(conn, "ORDER BY rowid ASC")
}

fn query_micro_solutions(
    conn: &Connection,
    order_by: &str,
) -> Result<Vec<(String, ResilientLeadershipActivity)>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT submitter, challenge_type, custom_challenge, villain_response,
                heroic_response, protective_factor, micro_solution
         FROM micro_solutions {}",
        order_by
    ))?;

    let rows = stmt
        .query_map([], |row| {
            let challenge: Option<String> = row.get(1)?;
            Ok((
                row.get::<_, String>(0)?,
                ResilientLeadershipActivity {
                    challenge_type: challenge.as_deref().and_then(ChallengeType::from_key),
                    custom_challenge: row.get(2)?,
                    villain_response: row.get(3)?,
                    heroic_response: row.get(4)?,
                    protective_factor: row.get(5)?,
                    micro_solution: row.get(6)?,
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Return the current quote position for `activity` and advance it,
/// wrapping at `len`. Read and write happen in one transaction.
pub fn advance_quote_cursor(conn: &Connection, activity: &str, len: usize) -> Result<usize> {
    if len == 0 {
        bail!("quote table is empty");
    }

    let tx = conn.unchecked_transaction()?;
    let current: i64 = tx
        .query_row(
            "SELECT position FROM quote_cursors WHERE activity = ?1",
            params![activity],
            |row| row.get(0),
        )
        .optional()?
        .unwrap_or(0);

    let position = (current.max(0) as usize) % len;
    let next = ((position + 1) % len) as i64;
    tx.execute(
        "INSERT INTO quote_cursors (activity, position) VALUES (?1, ?2)
         ON CONFLICT(activity) DO UPDATE SET position = excluded.position",
        params![activity, next],
    )?;
    tx.commit()?;

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup_test_db() -> (Connection, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let conn = init_db(&path).unwrap();
        (conn, dir)
    }

    fn word(word: &str) -> LeadershipWordSubmission {
        LeadershipWordSubmission {
            word: word.to_string(),
            why: "why".to_string(),
            role_model: "a coach".to_string(),
            resilience_example: "example".to_string(),
            action_step: "step".to_string(),
        }
    }

    fn activity(micro: &str) -> ResilientLeadershipActivity {
        ResilientLeadershipActivity {
            challenge_type: Some(ChallengeType::TimeManagement),
            custom_challenge: None,
            villain_response: "procrastinate".to_string(),
            heroic_response: "plan ahead".to_string(),
            protective_factor: "collaboration".to_string(),
            micro_solution: micro.to_string(),
        }
    }

    #[test]
    fn test_init_db() {
        let (conn, _dir) = setup_test_db();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"leadership_words".to_string()));
        assert!(tables.contains(&"word_counts".to_string()));
        assert!(tables.contains(&"micro_solutions".to_string()));
        assert!(tables.contains(&"quote_cursors".to_string()));
    }

    #[test]
    fn test_init_db_reopen_keeps_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        {
            let conn = init_db(&path).unwrap();
            submit_leadership_word(&conn, "u1", &word("brave")).unwrap();
        }
        let conn = init_db(&path).unwrap();
        assert_eq!(get_all_leadership_word_submissions(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_word_counts_aggregate_case_insensitively() {
        let (conn, _dir) = setup_test_db();
        submit_leadership_word(&conn, "u1", &word("Brave")).unwrap();
        submit_leadership_word(&conn, "u2", &word(" brave ")).unwrap();
        submit_leadership_word(&conn, "u3", &word("kind")).unwrap();

        let counts = get_leadership_word_counts(&conn).unwrap();
        assert_eq!(
            counts,
            vec![
                WordCount { word: "brave".to_string(), count: 2 },
                WordCount { word: "kind".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_submission_keeps_original_word() {
        let (conn, _dir) = setup_test_db();
        submit_leadership_word(&conn, "alice", &word("Low-Key Iconic")).unwrap();

        let all = get_all_leadership_word_submissions(&conn).unwrap();
        assert_eq!(all[0].0, "alice");
        assert_eq!(all[0].1.word, "Low-Key Iconic");
        assert_eq!(all[0].1.role_model, "a coach");
    }

    #[test]
    fn test_blank_word_rejected() {
        let (conn, _dir) = setup_test_db();
        let err = submit_leadership_word(&conn, "u1", &word("   ")).unwrap_err();
        assert!(err.to_string().contains("leadership word"));
        assert!(get_leadership_word_counts(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_top_words_sorted_and_limited() {
        let (conn, _dir) = setup_test_db();
        for w in ["fair", "brave", "brave", "kind", "kind", "kind", "honest"] {
            submit_leadership_word(&conn, "u", &word(w)).unwrap();
        }

        let top = get_top_leadership_words(&conn, 3).unwrap();
        let words: Vec<&str> = top.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["kind", "brave", "fair"]);
        assert_eq!(top[0].count, 3);
    }

    #[test]
    fn test_micro_solutions_newest_first() {
        let (conn, _dir) = setup_test_db();
        submit_resilient_leadership_activity(&conn, "u1", &activity("first")).unwrap();
        submit_resilient_leadership_activity(&conn, "u2", &activity("second")).unwrap();

        let all = get_all_micro_solutions(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].micro_solution, "second");
        assert_eq!(all[1].challenge_type, Some(ChallengeType::TimeManagement));
    }

    #[test]
    fn test_micro_solution_submissions_keep_submitter() {
        let (conn, _dir) = setup_test_db();
        submit_resilient_leadership_activity(&conn, "u1", &activity("first")).unwrap();
        submit_resilient_leadership_activity(&conn, "u2", &activity("second")).unwrap();

        let all = get_all_micro_solution_submissions(&conn).unwrap();
        assert_eq!(all[0].0, "u1");
        assert_eq!(all[0].1.micro_solution, "first");
        assert_eq!(all[1].0, "u2");
        assert_eq!(all[1].1.micro_solution, "second");
    }

    #[test]
    fn test_custom_challenge_accepted() {
        let (conn, _dir) = setup_test_db();
        let mut a = activity("make a shared calendar");
        a.challenge_type = None;
        a.custom_challenge = Some("  Club has no calendar ".to_string());
        submit_resilient_leadership_activity(&conn, "u1", &a).unwrap();

        let all = get_all_micro_solutions(&conn).unwrap();
        assert_eq!(all[0].challenge_type, None);
        assert_eq!(all[0].custom_challenge.as_deref(), Some("Club has no calendar"));
    }

    #[test]
    fn test_missing_challenge_rejected() {
        let (conn, _dir) = setup_test_db();
        let mut a = activity("x");
        a.challenge_type = None;
        let err = submit_resilient_leadership_activity(&conn, "u1", &a).unwrap_err();
        assert!(err.to_string().contains("Please select at least a core Leadership Challenge"));

        a.custom_challenge = Some("  ".to_string());
        let err = submit_resilient_leadership_activity(&conn, "u1", &a).unwrap_err();
        assert!(err.to_string().contains("Please provide at least a core Leadership Challenge"));
    }

    #[test]
    fn test_blank_micro_solution_rejected() {
        let (conn, _dir) = setup_test_db();
        let err = submit_resilient_leadership_activity(&conn, "u1", &activity(" ")).unwrap_err();
        assert!(err.to_string().contains("micro-solution"));
        assert!(get_all_micro_solutions(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_quote_cursor_wraps() {
        let conn = init_memory_db().unwrap();
        let seen: Vec<usize> = (0..5)
            .map(|_| advance_quote_cursor(&conn, "activity1", 3).unwrap())
            .collect();
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_quote_cursor_per_activity() {
        let conn = init_memory_db().unwrap();
        assert_eq!(advance_quote_cursor(&conn, "activity1", 4).unwrap(), 0);
        assert_eq!(advance_quote_cursor(&conn, "activity1", 4).unwrap(), 1);
        assert_eq!(advance_quote_cursor(&conn, "activity2", 4).unwrap(), 0);
    }

    #[test]
    fn test_quote_cursor_empty_table() {
        let conn = init_memory_db().unwrap();
        assert!(advance_quote_cursor(&conn, "activity1", 0).is_err());
    }
}
