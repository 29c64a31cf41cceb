//! Import exported session submissions
//!
//! Usage: cargo run --bin import -- /path/to/exports [more dirs or files...]
//!
//! Every `*.json` file found is read as an export:
//! `{ "leadershipWords": [...], "microSolutions": [...] }`. Word entries may
//! be `{ "submitter", "submission" }` pairs or bare submissions, in which
//! case the file stem is used as the submitter.

use anyhow::{Context, Result};
use institution_hero::{db, LeadershipWordSubmission, ResilientLeadershipActivity};
use rusqlite::Connection;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Export {
    #[serde(default, alias = "leadership_words", alias = "words")]
    leadership_words: Vec<WordEntry>,
    #[serde(default, alias = "micro_solutions", alias = "activities")]
    micro_solutions: Vec<ActivityEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordEntry {
    Attributed {
        submitter: String,
        submission: LeadershipWordSubmission,
    },
    Bare(LeadershipWordSubmission),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ActivityEntry {
    Attributed {
        submitter: String,
        submission: ResilientLeadershipActivity,
    },
    Bare(ResilientLeadershipActivity),
}

impl WordEntry {
    fn into_parts(self, default_submitter: &str) -> (String, LeadershipWordSubmission) {
        match self {
            WordEntry::Attributed { submitter, submission } => (submitter, submission),
            WordEntry::Bare(submission) => (default_submitter.to_string(), submission),
        }
    }
}

impl ActivityEntry {
    fn into_parts(self, default_submitter: &str) -> (String, ResilientLeadershipActivity) {
        match self {
            ActivityEntry::Attributed { submitter, submission } => (submitter, submission),
            ActivityEntry::Bare(submission) => (default_submitter.to_string(), submission),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ImportCounts {
    words: usize,
    micro_solutions: usize,
    skipped: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <export-dirs-or-files...>", args[0]);
        eprintln!("Example: {} ~/Downloads/institution-hero-exports", args[0]);
        std::process::exit(1);
    }

    let data_dir = match std::env::var("INSTITUTION_HERO_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("institution-hero"),
    };
    fs::create_dir_all(&data_dir)?;

    let db_path = data_dir.join("institution-hero.db");
    println!("Opening database at {:?}", db_path);
    let conn = db::init_db(&db_path)?;

    let mut total = ImportCounts::default();

    for arg in &args[1..] {
        let input = PathBuf::from(arg);
        if !input.exists() {
            eprintln!("Warning: {} does not exist, skipping", arg);
            continue;
        }

        println!("\nProcessing: {:?}", input);
        let counts = import_path(&conn, &input)?;
        total.words += counts.words;
        total.micro_solutions += counts.micro_solutions;
        total.skipped += counts.skipped;
    }

    println!("\n========================================");
    println!("Import complete!");
    println!("  Leadership words: {}", total.words);
    println!("  Micro-solutions: {}", total.micro_solutions);
    println!("  Skipped: {}", total.skipped);
    println!("========================================");

    Ok(())
}

fn import_path(conn: &Connection, root: &Path) -> Result<ImportCounts> {
    let mut counts = ImportCounts::default();

    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|n| n.ends_with(".json"))
                .unwrap_or(false)
        })
    {
        let path = entry.path();
        let fname = path.file_name().and_then(|n| n.to_str()).unwrap_or("?");

        match import_file(conn, path) {
            Ok(c) => {
                println!("  ✓ {} ({} words, {} micro-solutions)", fname, c.words, c.micro_solutions);
                counts.words += c.words;
                counts.micro_solutions += c.micro_solutions;
                counts.skipped += c.skipped;
            }
            Err(e) => {
                eprintln!("  ✗ {}: {}", fname, e);
            }
        }
    }

    Ok(counts)
}

fn import_file(conn: &Connection, path: &Path) -> Result<ImportCounts> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let export: Export =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?;

    let submitter = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("import");

    import_export(conn, export, submitter)
}

/// Store one parsed export. Entries the store rejects are skipped and
/// counted, the rest of the file still imports.
fn import_export(conn: &Connection, export: Export, default_submitter: &str) -> Result<ImportCounts> {
    let mut counts = ImportCounts::default();

    for entry in export.leadership_words {
        let (submitter, submission) = entry.into_parts(default_submitter);
        match db::submit_leadership_word(conn, &submitter, &submission) {
            Ok(_) => counts.words += 1,
            Err(e) => {
                tracing::warn!(submitter = %submitter, error = %e, "skipping leadership word");
                counts.skipped += 1;
            }
        }
    }

    for entry in export.micro_solutions {
        let (submitter, activity) = entry.into_parts(default_submitter);
        match db::submit_resilient_leadership_activity(conn, &submitter, &activity) {
            Ok(_) => counts.micro_solutions += 1,
            Err(e) => {
                tracing::warn!(submitter = %submitter, error = %e, "skipping micro-solution");
                counts.skipped += 1;
            }
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const EXPORT: &str = r#"{
        "leadershipWords": [
            {"submitter": "ada", "submission": {"word": "Brave", "why": "w", "roleModel": "r", "resilienceExample": "e", "actionStep": "a"}},
            {"word": "brave", "why": "w", "roleModel": "r", "resilienceExample": "e", "actionStep": "a"},
            {"word": "  ", "why": "w", "roleModel": "r", "resilienceExample": "e", "actionStep": "a"}
        ],
        "microSolutions": [
            {"challengeType": "bullying", "villainResponse": "v", "heroicResponse": "h", "protectiveFactor": "p", "microSolution": "Speak up"}
        ]
    }"#;

    #[test]
    fn test_import_export_counts_and_skips() {
        let conn = db::init_memory_db().unwrap();
        let export: Export = serde_json::from_str(EXPORT).unwrap();

        let counts = import_export(&conn, export, "file").unwrap();
        assert_eq!(counts, ImportCounts { words: 2, micro_solutions: 1, skipped: 1 });

        let rows = db::get_all_leadership_word_submissions(&conn).unwrap();
        assert_eq!(rows[0].0, "ada");
        assert_eq!(rows[1].0, "file");
        assert_eq!(db::get_leadership_word_counts(&conn).unwrap()[0].count, 2);
    }

    #[test]
    fn test_import_path_walks_json_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("day1")).unwrap();
        fs::write(dir.path().join("day1/session.json"), EXPORT).unwrap();
        fs::write(dir.path().join("notes.txt"), "not an export").unwrap();
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();

        let conn = db::init_memory_db().unwrap();
        let counts = import_path(&conn, dir.path()).unwrap();
        assert_eq!(counts.words, 2);
        assert_eq!(counts.micro_solutions, 1);
    }
}
