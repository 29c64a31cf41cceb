//! Movie quotes handed out with feedback
//!
//! The quote table is fixed and ordered. Each activity walks it with its own
//! cursor stored in the database, so consecutive requests get consecutive
//! quotes and the walk survives restarts.

use crate::content::{MOVIE_REFERENCES, AVENGERS, DARK_KNIGHT, KINGSMAN, STAR_WARS};
use crate::db;
use crate::types::{Activity, Quote, QuoteGenre};
use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

fn quote(text: &str, attribution: &str, genre: QuoteGenre, reference: usize) -> Quote {
    Quote {
        quote: text.to_string(),
        attribution: attribution.to_string(),
        genre,
        movie_reference: MOVIE_REFERENCES[reference].to_string(),
    }
}

/// The shipped quote table, in rotation order
pub fn builtin_quotes() -> Vec<Quote> {
    use QuoteGenre::*;
    vec![
        quote("Do or do not. There is no try.", "Yoda", StarWars, STAR_WARS),
        quote("Why do we fall? So we can learn to pick ourselves up.", "Thomas Wayne", DarkKnightTrilogy, DARK_KNIGHT),
        quote("Whatever it takes.", "Steve Rogers", Avengers, AVENGERS),
        quote("The greatest teacher, failure is.", "Yoda", StarWars, STAR_WARS),
        quote("Manners maketh man.", "Harry Hart", Kingsman, KINGSMAN),
        quote("It's not who I am underneath, but what I do that defines me.", "Batman", Batman, DARK_KNIGHT),
        quote("Hope is like the sun. If you only believe in it when you can see it, you'll never make it through the night.", "Leia Organa", StarWars, STAR_WARS),
        quote("I can do this all day.", "Steve Rogers", Avengers, AVENGERS),
        quote("The belonging you seek is not behind you, it is ahead.", "Maz Kanata", StarWars, STAR_WARS),
        quote("Part of the journey is the end.", "Tony Stark", Avengers, AVENGERS),
        quote("In a dark place we find ourselves, and a little more knowledge lights our way.", "Yoda", StarWars, STAR_WARS),
        quote("Your focus determines your reality.", "Qui-Gon Jinn", StarWars, STAR_WARS),
    ]
}

/// Next quote for `activity` from `quotes`, advancing that activity's cursor
pub fn next_quote_from(conn: &Connection, activity: Activity, quotes: &[Quote]) -> Result<Quote> {
    let position = db::advance_quote_cursor(conn, activity.key(), quotes.len())?;
    debug!(activity = activity.key(), position, "quote rotated");
    Ok(quotes[position].clone())
}

/// Next quote for `activity` from the shipped table
pub fn next_quote(conn: &Connection, activity: Activity) -> Result<Quote> {
    next_quote_from(conn, activity, &builtin_quotes())
}

/// "quote" (attribution), Genre: source
pub fn format_quote(quote: &Quote) -> String {
    let mut out = format!("\"{}\"", quote.quote);
    if !quote.attribution.is_empty() {
        out.push_str(&format!("\n  - {}", quote.attribution));
    }
    out.push_str(&format!("\n  {} | Source: {}", quote.genre.label(), quote.movie_reference));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_follows_table_order() {
        let conn = db::init_memory_db().unwrap();
        let table = builtin_quotes();

        for expected in &table {
            let got = next_quote(&conn, Activity::Activity1).unwrap();
            assert_eq!(&got, expected);
        }
        // wrapped
        assert_eq!(next_quote(&conn, Activity::Activity1).unwrap(), table[0]);
    }

    #[test]
    fn test_activities_rotate_independently() {
        let conn = db::init_memory_db().unwrap();
        let table = builtin_quotes();

        next_quote(&conn, Activity::Activity1).unwrap();
        next_quote(&conn, Activity::Activity1).unwrap();
        assert_eq!(next_quote(&conn, Activity::Activity2).unwrap(), table[0]);
        assert_eq!(next_quote(&conn, Activity::Activity1).unwrap(), table[2]);
    }

    #[test]
    fn test_empty_table_is_error() {
        let conn = db::init_memory_db().unwrap();
        assert!(next_quote_from(&conn, Activity::Activity1, &[]).is_err());
    }

    #[test]
    fn test_format_quote() {
        let q = &builtin_quotes()[0];
        let text = format_quote(q);
        assert!(text.starts_with("\"Do or do not."));
        assert!(text.contains("- Yoda"));
        assert!(text.contains("Star Wars | Source: Star Wars film series"));
    }

    #[test]
    fn test_every_quote_cites_a_movie_reference() {
        for q in builtin_quotes() {
            assert!(MOVIE_REFERENCES.contains(&q.movie_reference.as_str()));
        }
    }
}
