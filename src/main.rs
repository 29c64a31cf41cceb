//! Institution Hero session companion
//!
//! Collects the two session activities, hands back affirmations and
//! validations with a citation and a movie quote, and shows the community
//! responses.
//!
//! Run with: cargo run            (guided REPL)
//! Or serve: cargo run -- --serve --port=3100

use anyhow::{anyhow, bail, Context, Result};
use institution_hero::{
    content, db, quotes,
    types::*,
    to_user_facing_error, Companion, ContentCatalog, RawError,
};
use serde_json::json;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let json_output = args.iter().any(|a| a == "--json");

    // COMMAND MODE
    if args.len() > 1 {
        match args[1].as_str() {
            "affirm" => {
                // affirm <word> [--why=..] [--role-model=..] [--example=..] [--action=..]
                let submission = word_submission_from_args(&args[2..])?;
                let companion = open_companion()?;
                return print_feedback(&companion.affirm(&submission)?, json_output);
            }
            "validate" => {
                // validate --heroic=.. --protective=.. --micro=.. [--challenge=key] [--custom=..]
                let activity = activity_from_args(&args[2..])?;
                let companion = open_companion()?;
                return print_feedback(&companion.validate(&activity)?, json_output);
            }
            "submit-word" => {
                let submission = word_submission_from_args(&args[2..])?;
                let submitter = flag(&args, "submitter").unwrap_or_else(|| "cli".to_string());
                let companion = open_companion()?;
                let response = companion.affirm(&submission)?;
                if let FeedbackResponse::Granted { .. } = response {
                    companion.submit_word(&submitter, &submission)?;
                }
                return print_feedback(&response, json_output);
            }
            "submit-activity" => {
                let activity = activity_from_args(&args[2..])?;
                let submitter = flag(&args, "submitter").unwrap_or_else(|| "cli".to_string());
                let companion = open_companion()?;
                let response = companion.validate(&activity)?;
                if let FeedbackResponse::Granted { .. } = response {
                    companion.submit_activity(&submitter, &activity)?;
                }
                return print_feedback(&response, json_output);
            }
            "--board" => {
                return run_board(json_output);
            }
            "--words" => {
                let companion = open_companion()?;
                let counts = companion.word_counts()?;
                if json_output {
                    println!("{}", serde_json::to_string_pretty(&counts)?);
                } else {
                    for wc in counts {
                        println!("{:>4}  {}", wc.count, wc.word);
                    }
                }
                return Ok(());
            }
            "--micro-solutions" => {
                let companion = open_companion()?;
                let solutions = companion.micro_solutions()?;
                if json_output {
                    println!("{}", serde_json::to_string_pretty(&solutions)?);
                } else {
                    for s in &solutions {
                        print_micro_solution(s);
                    }
                }
                return Ok(());
            }
            "--export" => {
                // Writes the format the import binary reads
                let path = args.get(2).context("Usage: --export <file.json>")?;
                let companion = open_companion()?;
                let export = export_json(&companion)?;
                std::fs::write(path, serde_json::to_string_pretty(&export)?)
                    .with_context(|| format!("Failed to write {}", path))?;
                println!("Exported to {}", path);
                return Ok(());
            }
            "--next-quote" => {
                let activity = match args.get(2).map(|s| s.as_str()) {
                    Some("2") | Some("activity2") => Activity::Activity2,
                    _ => Activity::Activity1,
                };
                let companion = open_companion()?;
                let quote = companion.next_quote(activity)?;
                if json_output {
                    println!("{}", serde_json::to_string_pretty(&quote)?);
                } else {
                    println!("{}", quotes::format_quote(&quote));
                }
                return Ok(());
            }
            "--page" => {
                let name = args.get(2).map(|s| s.as_str()).unwrap_or("overview");
                let catalog = ContentCatalog::builtin();
                match content::render_page(name, &content::session_content(), &catalog) {
                    Some(text) => println!("{}", text),
                    None => bail!("Unknown page: {} (pages: {})", name, content::PAGES.join(", ")),
                }
                return Ok(());
            }
            "--references" => {
                let catalog = ContentCatalog::builtin();
                if json_output {
                    println!("{}", serde_json::to_string_pretty(catalog.references())?);
                } else {
                    for text in catalog.ordered_reference_texts() {
                        println!("{}\n", text);
                    }
                }
                return Ok(());
            }
            "--serve" => {
                let port: u16 = args.iter()
                    .find_map(|a| a.strip_prefix("--port="))
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3100);
                return run_http_server(port).await;
            }
            "--repl" => {}
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                print_usage();
                bail!("Unknown command: {}", other);
            }
        }
    }

    // REPL MODE
    let companion = open_companion()?;
    run_cli_mode(&companion)
}

fn print_usage() {
    println!("Usage: institution-hero [command] [--json]");
    println!();
    println!("  affirm <word> [--why=] [--role-model=] [--example=] [--action=]");
    println!("  validate --heroic= --protective= --micro= [--villain=] [--challenge=<key>] [--custom=]");
    println!("  submit-word <word> ... [--submitter=]     affirm, then store");
    println!("  submit-activity ... [--submitter=]        validate, then store");
    println!("  --board | --words | --micro-solutions");
    println!("  --export <file.json>");
    println!("  --next-quote <1|2>");
    println!("  --page <{}>", content::PAGES.join("|"));
    println!("  --references");
    println!("  --serve [--port=3100]");
    println!("  --repl                                     guided activities (default)");
    println!();
    println!("Challenge keys: {}", ChallengeType::ALL.iter().map(|c| c.key()).collect::<Vec<_>>().join(", "));
}

// ============================================================================
// Argument parsing
// ============================================================================

/// Value of `--name=value`, if present
fn flag(args: &[String], name: &str) -> Option<String> {
    let prefix = format!("--{}=", name);
    args.iter()
        .find_map(|a| a.strip_prefix(prefix.as_str()))
        .map(String::from)
}

fn word_submission_from_args(args: &[String]) -> Result<LeadershipWordSubmission> {
    let word = args.iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .context("Usage: affirm <word> [--why=..] [--role-model=..] [--example=..] [--action=..]")?;

    Ok(LeadershipWordSubmission {
        word,
        why: flag(args, "why").unwrap_or_default(),
        role_model: flag(args, "role-model").unwrap_or_default(),
        resilience_example: flag(args, "example").unwrap_or_default(),
        action_step: flag(args, "action").unwrap_or_default(),
    })
}

fn activity_from_args(args: &[String]) -> Result<ResilientLeadershipActivity> {
    let challenge_type = match flag(args, "challenge") {
        Some(key) => Some(ChallengeType::from_key(&key)
            .with_context(|| format!("Unknown challenge: {}", key))?),
        None => None,
    };

    Ok(ResilientLeadershipActivity {
        challenge_type,
        custom_challenge: flag(args, "custom"),
        villain_response: flag(args, "villain").unwrap_or_default(),
        heroic_response: flag(args, "heroic").unwrap_or_default(),
        protective_factor: flag(args, "protective").unwrap_or_default(),
        micro_solution: flag(args, "micro").unwrap_or_default(),
    })
}

fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("INSTITUTION_HERO_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    // XDG data dir on Linux, ~/Library/Application Support on macOS
    let base = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(base.join("institution-hero"))
}

fn get_db_path() -> Result<PathBuf> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;
    Ok(data_dir.join("institution-hero.db"))
}

fn open_companion() -> Result<Companion> {
    Companion::init(&get_db_path()?)
}

/// Every stored submission as `{ submitter, submission }` pairs, oldest
/// first, so a re-import keeps attribution and order
fn export_json(companion: &Companion) -> Result<serde_json::Value> {
    let words: Vec<serde_json::Value> = companion
        .word_submissions()?
        .into_iter()
        .map(|(submitter, submission)| json!({ "submitter": submitter, "submission": submission }))
        .collect();
    let solutions: Vec<serde_json::Value> = companion
        .micro_solution_submissions()?
        .into_iter()
        .map(|(submitter, submission)| json!({ "submitter": submitter, "submission": submission }))
        .collect();

    Ok(json!({
        "leadershipWords": words,
        "microSolutions": solutions,
    }))
}

// ============================================================================
// Output
// ============================================================================

fn print_feedback(response: &FeedbackResponse, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    match response {
        FeedbackResponse::Refused { message } => {
            println!("\n⚠️  {}\n", message);
        }
        FeedbackResponse::Granted { artifact, quote, quote_error, fingerprint } => {
            println!("\n{}", wrap_text(&artifact.message, 70, ""));
            println!("\n📚 {}", wrap_text(&artifact.reference.text, 70, "   "));
            match (quote, quote_error) {
                (Some(q), _) => println!("\n🎬 {}", quotes::format_quote(q)),
                (None, Some(e)) => println!("\n🎬 {}", e),
                (None, None) => {}
            }
            println!("\nFingerprint: {}", fingerprint.get(..16).unwrap_or(fingerprint));
            println!();
        }
    }

    Ok(())
}

fn print_micro_solution(s: &ResilientLeadershipActivity) {
    println!("• {}", s.challenge_label());
    println!("   Micro-solution: {}", s.micro_solution);
    if !s.protective_factor.is_empty() {
        println!("   Protective factor: {}", s.protective_factor);
    }
    println!();
}

fn run_board(json_output: bool) -> Result<()> {
    let companion = open_companion()?;
    let board = companion.leadership_board()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("\nTOP LEADERSHIP WORDS");
    let max = board.top_words.first().map(|w| w.count).unwrap_or(1).max(1);
    for wc in &board.top_words {
        let bar = "█".repeat(((wc.count * 20) / max) as usize);
        println!("   {:<16} {:>3} {}", wc.word, wc.count, bar);
    }
    if board.top_words.is_empty() {
        println!("   (no words yet)");
    }

    println!("\nCOMMUNITY MICRO-SOLUTIONS");
    for s in &board.micro_solutions {
        print_micro_solution(s);
    }
    if board.micro_solutions.is_empty() {
        println!("   (no micro-solutions yet)\n");
    }

    Ok(())
}

fn wrap_text(s: &str, width: usize, prefix: &str) -> String {
    let mut result = String::new();
    let mut line = String::new();

    for word in s.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            if !result.is_empty() {
                result.push('\n');
                result.push_str(prefix);
            }
            result.push_str(&line);
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        if !result.is_empty() {
            result.push('\n');
            result.push_str(prefix);
        }
        result.push_str(&line);
    }

    result
}

// ============================================================================
// HTTP JSON-RPC server
// ============================================================================

async fn run_http_server(port: u16) -> Result<()> {
    use std::net::TcpListener;

    eprintln!("🚀 Institution Hero companion starting on port {}...", port);

    let db_path = get_db_path()?;
    // Create the schema once before any connection thread opens it
    db::init_db(&db_path)?;

    let listener = TcpListener::bind(format!("127.0.0.1:{}", port))?;
    eprintln!("✅ Listening on http://localhost:{}/rpc", port);

    for stream in listener.incoming() {
        let stream = stream?;
        let db_path = db_path.clone();

        std::thread::spawn(move || {
            if let Err(e) = handle_http_request(stream, &db_path) {
                tracing::warn!("Request error: {}", e);
            }
        });
    }

    Ok(())
}

/// Largest request body the server will read
const MAX_BODY_BYTES: usize = 64 * 1024;

fn handle_http_request(mut stream: std::net::TcpStream, db_path: &std::path::Path) -> Result<()> {
    use std::io::{BufReader, Write};

    let mut reader = BufReader::new(&stream);
    let response_body = match read_request_body(&mut reader) {
        Ok(body) => rpc_response(&body, db_path),
        Err(e) => {
            tracing::warn!(error = %e, "rejecting request");
            json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": {"code": -32600, "message": e.to_string()}
            })
        }
    };

    let response_str = serde_json::to_string(&response_body)?;
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nAccess-Control-Allow-Origin: *\r\n\r\n{}",
        response_str.len(),
        response_str
    );

    stream.write_all(response.as_bytes())?;
    stream.flush()?;

    Ok(())
}

/// Read the request line and headers, then at most `MAX_BODY_BYTES` of body
fn read_request_body<R: std::io::BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    use std::io::Read;

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    let mut content_length: usize = 0;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header)?;
        if header.trim().is_empty() {
            break;
        }
        if header.to_lowercase().starts_with("content-length:") {
            content_length = header.split(':').nth(1)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0);
        }
    }

    if content_length > MAX_BODY_BYTES {
        bail!(
            "Request body of {} bytes exceeds the {} byte limit",
            content_length,
            MAX_BODY_BYTES
        );
    }

    let mut body = Vec::with_capacity(content_length);
    reader.by_ref().take(content_length as u64).read_to_end(&mut body)?;
    if body.len() < content_length {
        bail!("Request body ended after {} of {} bytes", body.len(), content_length);
    }
    Ok(body)
}

fn rpc_response(body: &[u8], db_path: &std::path::Path) -> serde_json::Value {
    let body_str = String::from_utf8_lossy(body);
    let json_req: serde_json::Value = serde_json::from_str(&body_str)
        .unwrap_or(json!({}));

    let method = json_req.get("method").and_then(|m| m.as_str()).unwrap_or("");
    let params = json_req.get("params").cloned().unwrap_or(json!({}));
    let id = json_req.get("id").cloned().unwrap_or(json!(1));

    // A panicking handler still answers the caller
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        Companion::init(db_path).and_then(|companion| handle_rpc(&companion, method, &params))
    }))
    .unwrap_or_else(|payload| Err(anyhow!(to_user_facing_error(&RawError::from(payload)))));

    match result {
        Ok(r) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": r
        }),
        Err(e) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": -32000, "message": e.to_string()}
        }),
    }
}

/// Route one JSON-RPC call. Submission bodies may be passed directly as
/// `params` or nested under `params.submission`.
fn handle_rpc(companion: &Companion, method: &str, params: &serde_json::Value) -> Result<serde_json::Value> {
    let args = params.get("arguments").unwrap_or(params);
    let submitter = args.get("submitter").and_then(|s| s.as_str()).unwrap_or("anonymous");
    let body = args.get("submission").unwrap_or(args).clone();

    let value = match method {
        "submitLeadershipWord" => {
            let submission: LeadershipWordSubmission = serde_json::from_value(body)
                .context("Invalid leadership word submission")?;
            json!({ "id": companion.submit_word(submitter, &submission)? })
        }
        "submitResilientLeadershipActivity" => {
            let activity: ResilientLeadershipActivity = serde_json::from_value(body)
                .context("Invalid leadership activity submission")?;
            json!({ "id": companion.submit_activity(submitter, &activity)? })
        }
        "affirm" => {
            let submission: LeadershipWordSubmission = serde_json::from_value(body)
                .context("Invalid leadership word submission")?;
            serde_json::to_value(companion.affirm(&submission)?)?
        }
        "validate" => {
            let activity: ResilientLeadershipActivity = serde_json::from_value(body)
                .context("Invalid leadership activity submission")?;
            serde_json::to_value(companion.validate(&activity)?)?
        }
        "getLeadershipWordCounts" => serde_json::to_value(companion.word_counts()?)?,
        "getTopLeadershipWords" => {
            let limit = args.get("limit")
                .and_then(|l| l.as_u64())
                .map(|l| l as usize)
                .unwrap_or(db::TOP_WORDS_LIMIT);
            serde_json::to_value(companion.top_words(limit)?)?
        }
        "getAllLeadershipWordSubmissions" => {
            let rows: Vec<serde_json::Value> = companion.word_submissions()?
                .into_iter()
                .map(|(submitter, submission)| json!({ "submitter": submitter, "submission": submission }))
                .collect();
            serde_json::Value::Array(rows)
        }
        "getAllMicroSolutions" => serde_json::to_value(companion.micro_solutions()?)?,
        "getLeadershipBoard" => serde_json::to_value(companion.leadership_board()?)?,
        "getNextActivity1Quote" => serde_json::to_value(companion.next_quote(Activity::Activity1)?)?,
        "getNextActivity2Quote" => serde_json::to_value(companion.next_quote(Activity::Activity2)?)?,
        "references" => serde_json::to_value(companion.catalog().references())?,
        _ => json!({"error": format!("Unknown method: {}", method)}),
    };

    Ok(value)
}

// ============================================================================
// Guided REPL
// ============================================================================

fn run_cli_mode(companion: &Companion) -> Result<()> {
    use std::io::{self, Write};

    let session = content::session_content();
    println!("{}", session.title);
    println!("{}", "=".repeat(session.title.chars().count()));
    println!("Type 1 or 2 to start an activity, /help for commands, 'quit' to exit.\n");

    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = read_line()? else { break };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let outcome = match line {
            "1" => run_activity1(companion),
            "2" => run_activity2(companion),
            "/board" => print_board(companion),
            "/help" => {
                println!("Commands:");
                println!("  1                  Activity 1: your leadership word");
                println!("  2                  Activity 2: campus challenge micro-solution");
                println!("  /board             Community responses");
                println!("  /page <name>       Session page ({})", content::PAGES.join(", "));
                println!("  quit               Exit");
                Ok(())
            }
            _ if line.starts_with("/page") => {
                let name = line.trim_start_matches("/page").trim();
                match content::render_page(name, &session, companion.catalog()) {
                    Some(text) => println!("\n{}\n", text),
                    None => println!("Unknown page: {}", name),
                }
                Ok(())
            }
            _ => {
                println!("Unknown command: {}. Try /help", line);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

/// One line from stdin, `None` at end of input
fn read_line() -> Result<Option<String>> {
    use std::io::BufRead;

    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    Ok(if read == 0 { None } else { Some(line) })
}

fn ask(label: &str) -> Result<String> {
    use std::io::Write;

    print!("{}: ", label);
    std::io::stdout().flush()?;
    Ok(read_line()?.map(|l| l.trim().to_string()).unwrap_or_default())
}

fn run_activity1(companion: &Companion) -> Result<()> {
    let submission = LeadershipWordSubmission {
        word: ask("Your leadership word")?,
        why: ask("Why this word")?,
        role_model: ask("A role model who shows it")?,
        resilience_example: ask("A time they showed resilience")?,
        action_step: ask("One action step this week")?,
    };

    // refusals are not stored
    let response = companion.affirm(&submission)?;
    if let FeedbackResponse::Granted { .. } = response {
        companion.submit_word("repl", &submission)?;
    }
    print_feedback(&response, false)
}

fn run_activity2(companion: &Companion) -> Result<()> {
    println!("Challenges:");
    for (i, c) in ChallengeType::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, c.label());
    }
    let choice = ask("Pick a number, or describe your own")?;
    let (challenge_type, custom_challenge) = match choice.parse::<usize>() {
        Ok(n) if (1..=ChallengeType::ALL.len()).contains(&n) => (Some(ChallengeType::ALL[n - 1]), None),
        _ => (None, Some(choice)),
    };

    let activity = ResilientLeadershipActivity {
        challenge_type,
        custom_challenge,
        villain_response: ask("The villain's response")?,
        heroic_response: ask("The hero's response")?,
        protective_factor: ask("Protective factor")?,
        micro_solution: ask("Your micro-solution")?,
    };

    let response = companion.validate(&activity)?;
    if let FeedbackResponse::Granted { .. } = response {
        companion.submit_activity("repl", &activity)?;
    }
    print_feedback(&response, false)
}

fn print_board(companion: &Companion) -> Result<()> {
    let board = companion.leadership_board()?;
    for wc in &board.top_words {
        println!("   {:<16} {:>3}", wc.word, wc.count);
    }
    println!();
    for s in &board.micro_solutions {
        print_micro_solution(s);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_parsing() {
        let a = args(&["resilient", "--why=it matters", "--action=call home"]);
        let submission = word_submission_from_args(&a).unwrap();
        assert_eq!(submission.word, "resilient");
        assert_eq!(submission.why, "it matters");
        assert_eq!(submission.action_step, "call home");
        assert_eq!(submission.role_model, "");
    }

    #[test]
    fn test_activity_rejects_unknown_challenge() {
        assert!(activity_from_args(&args(&["--challenge=dragons"])).is_err());
        let a = activity_from_args(&args(&["--challenge=bullying", "--micro=speak up"])).unwrap();
        assert_eq!(a.challenge_type, Some(ChallengeType::Bullying));
        assert_eq!(a.micro_solution, "speak up");
    }

    #[test]
    fn test_rpc_submit_and_count() {
        let companion = Companion::open_in_memory().unwrap();
        let params = json!({
            "submitter": "attendee-7",
            "submission": {
                "word": "Brave",
                "why": "w",
                "roleModel": "r",
                "resilienceExample": "e",
                "actionStep": "a"
            }
        });

        let result = handle_rpc(&companion, "submitLeadershipWord", &params).unwrap();
        assert!(result.get("id").is_some());

        let counts = handle_rpc(&companion, "getLeadershipWordCounts", &json!({})).unwrap();
        assert_eq!(counts, json!([{"word": "brave", "count": 1}]));

        let rows = handle_rpc(&companion, "getAllLeadershipWordSubmissions", &json!({})).unwrap();
        assert_eq!(rows[0]["submitter"], "attendee-7");
    }

    #[test]
    fn test_rpc_validation_error_is_user_facing() {
        let companion = Companion::open_in_memory().unwrap();
        let params = json!({
            "villainResponse": "",
            "heroicResponse": "Help",
            "protectiveFactor": "Friends",
            "microSolution": "Say hi"
        });

        let err = handle_rpc(&companion, "submitResilientLeadershipActivity", &params).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please select a challenge from the list or describe your own challenge."
        );
    }

    #[test]
    fn test_rpc_quotes_rotate() {
        let companion = Companion::open_in_memory().unwrap();
        let first = handle_rpc(&companion, "getNextActivity2Quote", &json!({})).unwrap();
        let second = handle_rpc(&companion, "getNextActivity2Quote", &json!({})).unwrap();
        assert_ne!(first, second);
        assert_eq!(first["quote"], "Do or do not. There is no try.");
    }

    #[test]
    fn test_rpc_unknown_method() {
        let companion = Companion::open_in_memory().unwrap();
        let result = handle_rpc(&companion, "launchRocket", &json!({})).unwrap();
        assert_eq!(result["error"], "Unknown method: launchRocket");
    }

    #[test]
    fn test_export_keeps_micro_solution_submitter() {
        let companion = Companion::open_in_memory().unwrap();
        let activity = activity_from_args(&args(&[
            "--challenge=bullying",
            "--heroic=speak up",
            "--protective=friends",
            "--micro=walk together",
        ]))
        .unwrap();
        companion.submit_activity("attendee-3", &activity).unwrap();
        companion.submit_activity("attendee-4", &activity).unwrap();

        let export = export_json(&companion).unwrap();
        let solutions = &export["microSolutions"];
        assert_eq!(solutions[0]["submitter"], "attendee-3");
        assert_eq!(solutions[1]["submitter"], "attendee-4");
        assert_eq!(solutions[0]["submission"]["microSolution"], "walk together");
    }

    #[test]
    fn test_request_body_read_by_content_length() {
        let raw = "POST /rpc HTTP/1.1\r\nHost: localhost\r\nContent-Length: 2\r\n\r\n{}extra";
        let body = read_request_body(&mut std::io::Cursor::new(raw)).unwrap();
        assert_eq!(body, b"{}");
    }

    #[test]
    fn test_request_body_over_limit_rejected() {
        let raw = "POST /rpc HTTP/1.1\r\nContent-Length: 70368744177664\r\n\r\n{}";
        let err = read_request_body(&mut std::io::Cursor::new(raw)).unwrap_err();
        assert!(err.to_string().contains("exceeds"));

        let raw = format!("POST /rpc HTTP/1.1\r\nContent-Length: {}\r\n\r\n{{}}", MAX_BODY_BYTES + 1);
        assert!(read_request_body(&mut std::io::Cursor::new(raw)).is_err());
    }

    #[test]
    fn test_request_body_truncated() {
        let raw = "POST /rpc HTTP/1.1\r\nContent-Length: 10\r\n\r\n{}";
        assert!(read_request_body(&mut std::io::Cursor::new(raw)).is_err());
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7, "  "), "one two\n  three");
    }
}
